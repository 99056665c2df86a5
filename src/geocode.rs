use crate::model::LatLngBounds;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeocodeError {
    /// The address matched nothing.
    NotFound,
    /// The lookup failed in transit. No retry is attempted.
    Transport(String),
}

impl GeocodeError {
    pub fn code(&self) -> &'static str {
        match self {
            GeocodeError::NotFound => "not_found",
            GeocodeError::Transport(_) => "transport",
        }
    }
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::NotFound => write!(f, "address not found"),
            GeocodeError::Transport(msg) => write!(f, "address lookup failed: {}", msg),
        }
    }
}

impl std::error::Error for GeocodeError {}

/// Resolves a free-text address to a bounding box. The session treats the
/// box as opaque and only hands it to the map's fit-to-bounds operation.
/// The lookup is the single suspension point in the session: its result is
/// delivered back as a plain value when it completes, and a superseding
/// search does not cancel an earlier one (last write wins).
pub trait GeocodeAdapter {
    fn resolve_address(&self, text: &str) -> Result<LatLngBounds, GeocodeError>;
}
