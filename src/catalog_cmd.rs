use anyhow::Result;

use demeter_agronomy::{GRASSES, SOILS, Season};

/// Print the built-in agronomic catalogues.
pub fn run() -> Result<()> {
    println!("Turfgrass species:");
    println!("  {:<22} {:>5} {:>10}  season", "name", "Kc", "roots (m)");
    for grass in GRASSES {
        let season = match grass.season {
            Season::Cool => "cool",
            Season::Warm => "warm",
        };
        println!(
            "  {:<22} {:>5.2} {:>10.2}  {season}",
            grass.name, grass.kc, grass.root_depth_m
        );
    }

    println!();
    println!("Soil textures:");
    println!(
        "  {:<22} {:>12} {:>18}",
        "name", "AWHC (mm/m)", "infiltration (mm/hr)"
    );
    for soil in SOILS {
        println!(
            "  {:<22} {:>12.0} {:>18.0}",
            soil.name, soil.awhc_mm_per_m, soil.infiltration_mm_per_hr
        );
    }
    Ok(())
}
