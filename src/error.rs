use std::path::PathBuf;
use thiserror::Error;

/// Startup faults in the page content or the settings. None of these can
/// happen once the window is open.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read page content {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse page content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("the testimonial carousel needs at least one slide")]
    NoSlides,
    #[error("the stats section needs at least one counter")]
    NoCounters,
    #[error("counter speed must be at least 1")]
    ZeroSpeed,
    #[error("counter '{label}' starts at {initial}, above its target {target}")]
    InitialAboveTarget {
        label: String,
        initial: u32,
        target: u32,
    },
    #[error("auto-advance interval must be at least {min} seconds, got {0}", min = crate::constants::MIN_AUTO_ADVANCE_INTERVAL)]
    InvalidInterval(f32),
}
