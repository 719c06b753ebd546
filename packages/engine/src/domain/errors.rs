use std::fmt;

/// Rejected configuration or boundary input.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Options JSON could not be parsed
    Parse(String),
    /// World width/height must be finite and positive
    InvalidWorldSize { width: f32, height: f32 },
    /// A tunable is out of its valid range
    InvalidOption { name: &'static str, value: f32, reason: &'static str },
    /// Interaction radius larger than a grid cell would miss neighbors
    RadiusExceedsCell { radius: f32, cell_width: f32 },
    /// Boundary endpoints coincide or are not finite
    DegenerateBoundary,
    InvalidFriction(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid options json: {}", msg),
            ConfigError::InvalidWorldSize { width, height } => {
                write!(f, "world size must be positive and finite, got {}x{}", width, height)
            }
            ConfigError::InvalidOption { name, value, reason } => {
                write!(f, "option `{}` = {} {}", name, value, reason)
            }
            ConfigError::RadiusExceedsCell { radius, cell_width } => write!(
                f,
                "radius {} exceeds the grid cell width {}; neighbors would be missed",
                radius, cell_width
            ),
            ConfigError::DegenerateBoundary => {
                write!(f, "boundary endpoints must be finite and distinct")
            }
            ConfigError::InvalidFriction(value) => {
                write!(f, "boundary friction must be finite and >= 0, got {}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
