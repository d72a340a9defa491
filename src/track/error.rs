use thiserror::Error;

use super::types::{FeatureIdx, ImageId};

/// Errors raised by [`Track`](super::Track) operations.
///
/// Both variants are caller precondition violations. A failing operation
/// leaves the track untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    /// Index is not less than the current track length.
    #[error("track index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// No observation matches the requested (image, feature) pair.
    #[error("no observation of {feature_idx} in {image_id}")]
    NotFound {
        image_id: ImageId,
        feature_idx: FeatureIdx,
    },
}

pub type Result<T> = std::result::Result<T, TrackError>;
