use thiserror::Error;

/// Top-level error type for the dentis resolution engine.
///
/// The chart-facing operations never return these; they degrade to empty or
/// default results instead. Errors only surface from strict parsing, direct
/// scene lookups, and configuration loading.
#[derive(Debug, Error)]
pub enum DentisError {
    #[error(transparent)]
    Tooth(#[from] ToothError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to tooth numbering.
#[derive(Debug, Error)]
pub enum ToothError {
    #[error("not a tooth number: {0:?}")]
    NotANumber(String),

    #[error("tooth number {0} is not a valid FDI code")]
    InvalidFdi(u16),
}

/// Errors related to surface codes.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("empty surface code")]
    Empty,

    #[error("unknown surface code: {0:?}")]
    Unknown(String),
}

/// Errors related to the scene graph and material registry.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("node {0:?} is not a mesh")]
    NotAMesh(String),
}

/// Errors related to loading chart configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// Convenience type alias for results using [`DentisError`].
pub type Result<T> = std::result::Result<T, DentisError>;
