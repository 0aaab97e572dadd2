use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;

/// Route `log` output to `path`. The terminal is busy drawing the board, so
/// without a file no logger is installed at all. `RUST_LOG` takes
/// precedence over `level`.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;

    Ok(())
}
