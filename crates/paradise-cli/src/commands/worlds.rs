use std::path::Path;

use colored::Colorize;

pub fn run(data: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;

    for (key, world) in catalog.iter() {
        println!(
            "{} {}, haunted by the {}",
            format!("[{key}]").bold(),
            world.name.bold(),
            world.monster
        );
        for (loc_key, location) in &world.locations {
            println!(
                "    {loc_key}. {} ({}, {} riddles)",
                location.name,
                location.npc,
                location.riddles.len()
            );
        }
    }

    Ok(())
}
