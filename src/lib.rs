// Re-export modules
pub mod analyzer;
pub mod checks;
pub mod config;
pub mod error;
pub mod fetch;
pub mod parsers;
pub mod results;
pub mod score;
pub mod server;
pub mod utils;

// Re-export commonly used types for convenience
pub use analyzer::{analyze, analyze_html};
pub use config::AuditConfig;
pub use error::{AuditError, Result};
pub use results::{Finding, Report, Status};

use fetch::PageFetcher;

/// Builder that fetches one page and audits it
pub struct Audit {
    url: String,
    config: AuditConfig,
}

impl Audit {
    /// Create a new audit for the given URL with default settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            config: AuditConfig::default(),
        }
    }

    /// Set the fetch timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self
    }

    /// Set the User-Agent header sent with the request
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: AuditConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = AuditConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Validate the URL, fetch the page and analyze it
    pub async fn run(self) -> Result<Report> {
        let url = utils::parse_target_url(&self.url)?;
        self.config.validate()?;

        ::log::info!("Starting audit for URL: {}", url);
        let fetcher = PageFetcher::new(&self.config)?;
        let html = fetcher.fetch(&url).await?;

        let report = analyze_html(&html)?;
        ::log::info!("Audit of {} complete, score {}", url, report.score);
        Ok(report)
    }
}
