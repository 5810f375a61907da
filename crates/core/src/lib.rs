pub mod domain;
pub mod ingest;
pub mod predict;
pub mod time;

pub mod config {
    use anyhow::Context;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub marketstack_access_key: Option<String>,
        pub marketstack_base_url: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                marketstack_access_key: std::env::var("MARKETSTACK_ACCESS_KEY").ok(),
                marketstack_base_url: std::env::var("MARKETSTACK_BASE_URL").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }

        pub fn require_marketstack_access_key(&self) -> anyhow::Result<&str> {
            self.marketstack_access_key
                .as_deref()
                .context("MARKETSTACK_ACCESS_KEY is required")
        }
    }
}
