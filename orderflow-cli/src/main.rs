use clap::Parser;
use orderflow_cli::{run, summarize, Cli};
use orderflow_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orderflow=info,orderflow_order=info,orderflow_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    tracing::info!("Processing orders for user {}", cli.user);

    let report = run(&cli, &config).await?;
    println!("{}", summarize(&report));

    if !report.success {
        std::process::exit(1);
    }
    Ok(())
}
