use anyhow::Result;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("gridwalk starting");

    gridwalk_cli::run(std::env::args().skip(1))?;

    Ok(())
}
