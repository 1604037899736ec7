use std::path::Path;

use anyhow::Result;
use tracing::info;

use carousel_core::AppConfig;

/// Print the effective configuration, optionally saving it to `path`
pub fn run(config: &AppConfig, path: &Path, write: bool) -> Result<()> {
    let rendered = config.to_toml()?;
    print!("{}", rendered);

    if write {
        config.save_to(path)?;
        info!(path = %path.display(), "configuration written");
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}
