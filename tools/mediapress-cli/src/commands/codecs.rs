//! Show the quality tier → codec pair table.

use mediapress_export_engine::factory::factory_for;
use mediapress_export_model::quality::ExportQuality;

pub fn run() -> anyhow::Result<()> {
    println!("MediaPress Codec Pairs");
    println!("{}", "=".repeat(50));

    for tier in ExportQuality::ALL {
        let factory = factory_for(tier);
        println!("  {:<8} {}", tier, factory.description());
    }

    Ok(())
}
