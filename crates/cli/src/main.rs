use stockroom_infra::{JsonFileStore, StockroomConfig};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = StockroomConfig::from_env();
    tracing::info!(
        path = %config.inventory_path.display(),
        low_stock_threshold = config.low_stock_threshold,
        "starting inventory demo"
    );

    let store = JsonFileStore::new(&config.inventory_path);
    let stdout = std::io::stdout();
    stockroom_cli::run_demo(&store, config.low_stock_threshold, &mut stdout.lock())?;

    Ok(())
}
