//! Delivering the finished report.

use log::info;

use crate::{ReportError, RunReport};

/// Capability interface for result delivery.
///
/// Reporters receive the finished report; how it leaves the process
/// (log line, webhook, anything else) is up to the implementation.
pub trait Reporter {
    fn deliver(&self, report: &RunReport) -> Result<(), ReportError>;
}

/// Emits the report through the logging facade.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn deliver(&self, report: &RunReport) -> Result<(), ReportError> {
        info!("{}: {}", report.outcome().label(), report.summary());
        Ok(())
    }
}

/// Delivery settings for [`WebhookReporter`].
///
/// Passed in whole at construction; nothing here is read from process
/// globals.
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Endpoint that receives the report.
    pub url: String,

    /// Optional bearer token for the endpoint.
    pub token: Option<String>,
}

/// POSTs the report as `{status, text}` JSON to a configured endpoint.
#[cfg(feature = "net")]
#[derive(Debug)]
pub struct WebhookReporter {
    config: ReporterConfig,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "net")]
impl WebhookReporter {
    pub fn new(config: ReporterConfig) -> Self {
        WebhookReporter {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }
}

#[cfg(feature = "net")]
impl Reporter for WebhookReporter {
    fn deliver(&self, report: &RunReport) -> Result<(), ReportError> {
        let payload = serde_json::json!({
            "status": report.outcome().label(),
            "text": report.summary(),
        });

        let mut request = self.client.post(&self.config.url).json(&payload);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        if !response.status().is_success() {
            return Err(ReportError::Delivery(format!(
                "endpoint answered {}",
                response.status()
            )));
        }
        info!("report delivered to {}", self.config.url);
        Ok(())
    }
}
