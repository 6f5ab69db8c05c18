use clap::Parser;
use cronapp_lib::bootstrap::tracing::init_tracing_subscriber;
use cronapp_lib::{run_cli, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    run_cli(cli).await
}
