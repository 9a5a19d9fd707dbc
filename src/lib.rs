pub mod appresult;
pub mod config;
pub mod models;

pub use appresult::{AppError, AppResult};
pub use config::GreetingConfig;
pub use models::Greeting;

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` overrides the default `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // already installed when called twice, e.g. from tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
