use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "omnibar=info";

/// Routes `tracing` output to `path`. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr.
pub fn init(path: &Path) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("A global logger is already installed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_land_in_log_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("omnibar.log");
        init(&path)?;

        tracing::info!(query = "apollo", "search completed");
        tracing::trace!("below the default level");

        let content = std::fs::read_to_string(&path)?;
        assert!(content.contains("search completed"));
        assert!(content.contains("query=\"apollo\""));
        assert!(!content.contains("below the default level"));

        // Installing twice is reported, not silently ignored.
        assert!(init(&path).is_err());
        Ok(())
    }
}
