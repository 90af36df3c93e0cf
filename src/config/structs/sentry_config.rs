use serde::{Deserialize, Serialize};

/// `[sentry_config]`: error reporting and the `cluster_api` trace
/// transactions. Ignored unless `enabled`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SentryConfig {
    pub enabled: bool,
    pub dsn: String,
    pub debug: bool,
    pub sample_rate: f32,
    pub max_breadcrumbs: usize,
    pub attach_stacktrace: bool,
    pub send_default_pii: bool,
    /// Share of API calls wrapped in a transaction when logging at trace level.
    pub traces_sample_rate: f32
}
