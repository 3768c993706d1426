use stockbook_cli::{Config, run_demo};

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let config = Config::from_env();
    tracing::info!(data_file = %config.data_file.display(), "running inventory demo");

    run_demo(&config, std::io::stdout().lock())?;
    Ok(())
}
