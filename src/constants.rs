/// Base URL used when `REPORTS_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8093/api";
/// Path of the token endpoint, relative to the base URL
pub const TOKEN_PATH: &str = "/auth/token";
/// Grant type sent with every login request
pub const GRANT_TYPE_PASSWORD: &str = "password";
/// Reporting endpoints probed after a successful login, in probe order
pub const REPORT_ENDPOINTS: [&str; 3] = [
    "/admin/reports/kpi",
    "/admin/reports/users-performance",
    "/admin/reports/locations",
];
/// User agent string used in HTTP requests
pub const USER_AGENT: &str = concat!("reports-probe/", env!("CARGO_PKG_VERSION"));
/// Placeholder email used when none is configured
pub const DEFAULT_EMAIL: &str = "default_email";
/// Placeholder password used when none is configured
pub const DEFAULT_PASSWORD: &str = "default_password";
