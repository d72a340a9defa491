//! Core ID types for track observations.

use serde::{Deserialize, Serialize};

/// Identifier of an image in the surrounding reconstruction.
///
/// ImageIds are opaque handles assigned by whatever component owns the
/// image table. They support equality and hashing but no arithmetic, so an
/// ImageId can never be mixed up with a [`FeatureIdx`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(u32);

impl ImageId {
    /// Sentinel for "no image".
    pub const INVALID: Self = Self(u32::MAX);

    /// Create a new ImageId with the given value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw handle value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether this handle differs from [`ImageId::INVALID`].
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<u32> for ImageId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "IMG{}", self.0)
        } else {
            write!(f, "IMG?")
        }
    }
}

/// Index of a detected 2D feature within one image.
///
/// Only meaningful together with the [`ImageId`] of the image it was
/// detected in. The valid range is owned by the feature store, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureIdx(u32);

impl FeatureIdx {
    /// Sentinel for "no feature".
    pub const INVALID: Self = Self(u32::MAX);

    /// Create a new FeatureIdx with the given value.
    pub fn new(idx: u32) -> Self {
        Self(idx)
    }

    /// Raw handle value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether this handle differs from [`FeatureIdx::INVALID`].
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for FeatureIdx {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<u32> for FeatureIdx {
    fn from(idx: u32) -> Self {
        Self::new(idx)
    }
}

impl std::fmt::Display for FeatureIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "F{}", self.0)
        } else {
            write!(f, "F?")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_id_equality() {
        let id1 = ImageId::new(42);
        let id2 = ImageId::new(42);
        let id3 = ImageId::new(43);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(ImageId::default(), ImageId::INVALID);
        assert_eq!(FeatureIdx::default(), FeatureIdx::INVALID);
        assert!(!ImageId::default().is_valid());
        assert!(!FeatureIdx::default().is_valid());

        // Zero is a perfectly good handle
        assert!(ImageId::new(0).is_valid());
        assert!(FeatureIdx::new(0).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ImageId::new(123)), "IMG123");
        assert_eq!(format!("{}", FeatureIdx::new(7)), "F7");
        assert_eq!(format!("{}", ImageId::INVALID), "IMG?");
        assert_eq!(format!("{}", FeatureIdx::INVALID), "F?");
    }

    #[test]
    fn test_id_as_hashmap_key() {
        use std::collections::HashMap;

        let mut images: HashMap<ImageId, &str> = HashMap::new();
        images.insert(ImageId::new(1), "first");
        images.insert(ImageId::new(2), "second");

        assert_eq!(images.get(&ImageId::new(1)), Some(&"first"));
        assert_eq!(images.get(&ImageId::new(3)), None);
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ImageId::new(5)).unwrap();
        assert_eq!(json, "5");

        let idx: FeatureIdx = serde_json::from_str("17").unwrap();
        assert_eq!(idx, FeatureIdx::new(17));
    }
}
