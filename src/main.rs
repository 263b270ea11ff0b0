use clap::Parser;
use netbox_kb::args::{Args, InventorySource};
use netbox_kb::inventory::{Inventory, SnapshotInventory};
use netbox_kb::logging::init_logging;
use netbox_kb::output::write_document;
use netbox_kb::{build_knowledge_base, NetboxClient};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args.log_config)?;
    log::info!("#Start main()");

    let inventory: Box<dyn Inventory> = match args.inventory_source()? {
        InventorySource::Snapshot(path) => Box::new(SnapshotInventory::from_file(path)?),
        InventorySource::Netbox(config) => Box::new(NetboxClient::new(config)?),
    };

    let kb = build_knowledge_base(inventory.as_ref()).map_err(|e| {
        log::error!("No knowledge base produced: {e}");
        e
    })?;
    write_document(&kb, args.format, args.output.as_deref())?;

    log::info!("#End main()");
    Ok(())
}
