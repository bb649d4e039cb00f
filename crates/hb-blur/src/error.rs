use core::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum BlurError {
    /// Cropping to the tile grid left no rows or no columns.
    TooSmall { width: usize, height: usize },
    /// The finest edge map does not split into whole 8x8 tiles.
    NotTileAligned { width: usize, height: usize },
    Decomposition(hb_core::Error),
    /// The edge pyramid is shallower than the pooling needs.
    MissingScale { level: usize },
    /// Every tile stayed at or below the edge threshold on all scales.
    NoEdgesDetected { tiles: usize },
    InvalidConfig { reason: &'static str },
}

impl BlurError {
    /// Errors the caller can only fix by supplying a different image.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::TooSmall { .. } | Self::NotTileAligned { .. })
    }
}

impl fmt::Display for BlurError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { width, height } => {
                write!(f, "image {width}x{height} is smaller than 16x16")
            }
            Self::NotTileAligned { width, height } => {
                write!(f, "edge map {width}x{height} is not a whole number of 8x8 tiles")
            }
            Self::Decomposition(err) => write!(f, "haar decomposition failed: {err}"),
            Self::MissingScale { level } => write!(f, "edge map for level {level} is missing"),
            Self::NoEdgesDetected { tiles } => {
                write!(f, "no edge tiles among {tiles} analyzed tiles")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for BlurError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decomposition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<hb_core::Error> for BlurError {
    fn from(err: hb_core::Error) -> Self {
        Self::Decomposition(err)
    }
}
