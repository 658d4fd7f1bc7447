use books_client::cli::Cli;
use books_client::client::{BooksClient, SERVER_PORT};
use books_client::DEFAULT_LOG_FILTER;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(DEFAULT_LOG_FILTER),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client = BooksClient::new(&cli.host, SERVER_PORT);
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = client.execute(&cli.query(), &mut stdout).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
