use std::fmt::Display;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

/// Simple enum for media types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    /// Movie media type
    Movie,
    /// Television media type
    Tv,
    /// Unclassified media
    Unknown,
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "Movie"),
            MediaType::Tv => write!(f, "TV"),
            MediaType::Unknown => write!(f, "Unknown"),
        }
    }
}
