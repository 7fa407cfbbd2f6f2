// One error type for the whole app.
// Every variant states *where* things went wrong. The animation loop itself
// never fails; only window, config and snapshot plumbing can.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Updating the window buffer failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),
    /// The config file could not be read from disk
    #[error("Config read error ({path}): {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for `AnimationConfig`
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// A value parsed fine but makes no sense (empty text, zero speed, ...)
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// A color stop is not `#rgb` or `#rrggbb`
    #[error("Invalid color {0:?}: expected #rgb or #rrggbb")]
    InvalidColor(String),
    /// Encoding or writing the snapshot PNG failed
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] image::ImageError),
}
