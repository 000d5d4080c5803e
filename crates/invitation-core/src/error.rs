use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvitationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Photo set is empty")]
    EmptyImageSet,

    #[error("Playback failed: {0}")]
    Playback(String),
}

pub type Result<T> = std::result::Result<T, InvitationError>;
