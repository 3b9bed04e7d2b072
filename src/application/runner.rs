use crate::auth::Auth;
use crate::client::HttpClient;
use crate::config::Config;
use crate::constants::REPORT_ENDPOINTS;
use crate::error::AppError;
use crate::presentation::{ProbeSummary, write_probe};
use crate::probe::{ProbeResult, Prober};
use std::io::Write;
use tracing::{info, warn};

/// Outcome of a full run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunSummary {
    /// Whether login produced a token
    pub authenticated: bool,
    /// One entry per probed endpoint, in probe order; empty without a token
    pub results: Vec<ProbeResult>,
}

impl RunSummary {
    /// Number of endpoints that answered 200 with JSON
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }
}

/// Logs in and probes the standard report endpoints, printing to `out`
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, AppError> {
    run_with_endpoints(config, &REPORT_ENDPOINTS, out).await
}

/// Logs in and, only if a token was obtained, probes `paths` in order
///
/// Login and probe failures are reported on `out` and never returned;
/// the error side carries only client construction and write failures.
pub async fn run_with_endpoints<W: Write>(
    config: &Config,
    paths: &[&str],
    out: &mut W,
) -> Result<RunSummary, AppError> {
    let client = HttpClient::new(&config.rest_api)?;
    let auth = Auth::new(client.clone(), config.credentials.clone());

    let Some(token) = auth.authenticate(out).await? else {
        warn!("No token obtained, skipping report probes");
        return Ok(RunSummary::default());
    };

    let prober = Prober::new(client, token);
    let results = prober
        .probe_all(paths, |result| write_probe(&mut *out, result))
        .await?;

    writeln!(out)?;
    write!(out, "{}", ProbeSummary(&results))?;

    let summary = RunSummary {
        authenticated: true,
        results,
    };
    info!(
        "Probed {} endpoints, {} succeeded",
        summary.results.len(),
        summary.succeeded()
    );
    Ok(summary)
}
