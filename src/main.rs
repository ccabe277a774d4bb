use anyhow::Result;
use catalyst::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
