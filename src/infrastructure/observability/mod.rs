mod init_tracing;
mod tracing_config;
mod url_sanitizer;

pub use init_tracing::init_tracing;
pub use tracing_config::{DEFAULT_DIRECTIVES, TracingConfig};
pub use url_sanitizer::sanitize_url;
