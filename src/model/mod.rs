/// Request bodies sent to the API
pub mod requests;
/// Response bodies decoded from the API
pub mod responses;
