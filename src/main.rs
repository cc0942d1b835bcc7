use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vua_tieng_viet::{config, discord};

#[actix_rt::main]
async fn main() -> miette::Result<()> {
    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vua_tieng_viet=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vua Tiếng Việt word chain bot");

    let config = config::load_config()?;

    tokio::select! {
        result = discord::setup_bot(config) => result,
        _ = signal::ctrl_c() => {
            info!("Received shutdown signal, stopping bot");
            Ok(())
        }
    }
}
