use greeting::{init_logging, AppResult, GreetingConfig};
use tracing::{debug, info};

fn main() -> AppResult<()> {
    init_logging();

    let config = GreetingConfig::from_env()?;
    debug!(?config, "loaded greeting config");

    let greeting = config.greeting();
    info!("{greeting}");

    Ok(())
}
