use crate::config::LogConfig;

/// Installs the global tracing subscriber. Plain text by default,
/// JSON lines when `LOG_FORMAT=json`.
pub fn init(cfg: &LogConfig) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(cfg.filter.as_str());

    if cfg.json {
        builder
            .with_target(false)
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    } else {
        builder.try_init().map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}
