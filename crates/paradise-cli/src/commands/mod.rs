pub mod play;
pub mod worlds;

use std::path::Path;

use paradise_core::WorldCatalog;

/// Load a catalog from a JSON file, or fall back to the built-in one.
fn load_catalog(data: Option<&Path>) -> Result<WorldCatalog, String> {
    match data {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            WorldCatalog::from_json(&text).map_err(|e| e.to_string())
        }
        None => WorldCatalog::builtin().map_err(|e| e.to_string()),
    }
}
