//! Download configuration.

use std::time::Duration;

/// Declared body length at which [`http_download`](crate::http_download)
/// streams to disk instead of collecting in memory (10 MiB).
pub const DEFAULT_BIG_SIZE: u64 = 10 * 1024 * 1024;

/// Download configuration.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Bodies at least this large (by `Content-Length`) are streamed.
    pub big_size: u64,
    /// Timeout for the whole request, body included.
    pub timeout: Option<Duration>,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
    /// `User-Agent` header to send.
    pub user_agent: Option<String>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadConfig {
    /// Create a config with the default threshold, no timeout and
    /// certificate verification on.
    pub fn new() -> Self {
        Self {
            big_size: DEFAULT_BIG_SIZE,
            timeout: None,
            accept_invalid_certs: false,
            user_agent: None,
        }
    }

    /// Set the streaming threshold.
    pub fn with_big_size(mut self, bytes: u64) -> Self {
        self.big_size = bytes;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Accept invalid TLS certificates.
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub(crate) fn agent(&self) -> ureq::Agent {
        let mut builder = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(self.timeout);
        if self.accept_invalid_certs {
            builder = builder.tls_config(
                ureq::tls::TlsConfig::builder()
                    .disable_verification(true)
                    .build(),
            );
        }
        ureq::Agent::new_with_config(builder.build())
    }
}
