//! Observation - one detected feature in one image.

use serde::{Deserialize, Serialize};

use super::types::{FeatureIdx, ImageId};

/// A single element of a [`Track`](super::Track).
///
/// Observations are plain values: the fields are never validated here,
/// since valid ranges live in the image and feature stores. To change an
/// observation inside a track, replace it with a new value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    /// Image the 3D point was observed in.
    pub image_id: ImageId,
    /// Feature within that image.
    pub feature_idx: FeatureIdx,
}

impl Observation {
    pub fn new(image_id: ImageId, feature_idx: FeatureIdx) -> Self {
        Self {
            image_id,
            feature_idx,
        }
    }

    /// True when both handles are set.
    pub fn is_valid(&self) -> bool {
        self.image_id.is_valid() && self.feature_idx.is_valid()
    }

    pub(crate) fn matches(&self, image_id: ImageId, feature_idx: FeatureIdx) -> bool {
        self.image_id == image_id && self.feature_idx == feature_idx
    }
}

impl From<(ImageId, FeatureIdx)> for Observation {
    fn from((image_id, feature_idx): (ImageId, FeatureIdx)) -> Self {
        Self::new(image_id, feature_idx)
    }
}

impl From<(u32, u32)> for Observation {
    fn from((image_id, feature_idx): (u32, u32)) -> Self {
        Self::new(ImageId::new(image_id), FeatureIdx::new(feature_idx))
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Observation(image_id={}, feature_idx={})",
            self.image_id, self.feature_idx
        )
    }
}
