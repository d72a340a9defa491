//! Track - all observations of one 3D point.
//!
//! A Track is an ordered list of [`Observation`]s. Order reflects the order
//! correspondences were added in and is preserved by every operation,
//! including deletion. Duplicates are not rejected; id-based deletion
//! removes the first match only.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::{Result, TrackError};
use super::observation::Observation;
use super::types::{FeatureIdx, ImageId};

/// Ordered set of image observations of a single 3D point.
///
/// Tracks are usually short (a handful to a few dozen observations), so
/// storage is a contiguous `Vec` and deletion shifts later elements down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Track {
    elements: Vec<Observation>,
}

impl Track {
    /// Create an empty track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a track that takes ownership of `elements`.
    pub fn from_elements(elements: Vec<Observation>) -> Self {
        Self { elements }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All observations in insertion order.
    pub fn elements(&self) -> &[Observation] {
        &self.elements
    }

    /// Mutable view of all observations.
    ///
    /// Elements can be replaced or reordered in place, but the track cannot
    /// grow or shrink through this view. Use [`Track::take_elements`] and
    /// [`Track::set_elements`] to restructure the sequence wholesale.
    pub fn elements_mut(&mut self) -> &mut [Observation] {
        &mut self.elements
    }

    /// Replace the whole sequence, dropping the old contents.
    pub fn set_elements(&mut self, elements: Vec<Observation>) {
        self.elements = elements;
    }

    /// Move the sequence out, leaving the track empty.
    pub fn take_elements(&mut self) -> Vec<Observation> {
        std::mem::take(&mut self.elements)
    }

    pub fn into_elements(self) -> Vec<Observation> {
        self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.elements.iter()
    }

    /// Observation at `idx`.
    pub fn element(&self, idx: usize) -> Result<&Observation> {
        let len = self.elements.len();
        self.elements
            .get(idx)
            .ok_or(TrackError::OutOfRange { index: idx, len })
    }

    /// Mutable observation at `idx`.
    pub fn element_mut(&mut self, idx: usize) -> Result<&mut Observation> {
        let len = self.elements.len();
        self.elements
            .get_mut(idx)
            .ok_or(TrackError::OutOfRange { index: idx, len })
    }

    /// Replace the observation at `idx`. On error the track is unchanged.
    pub fn set_element(&mut self, idx: usize, element: Observation) -> Result<()> {
        *self.element_mut(idx)? = element;
        Ok(())
    }

    /// Append an observation.
    pub fn add_element(&mut self, element: Observation) {
        self.elements.push(element);
    }

    /// Append the observation of `feature_idx` in `image_id`.
    pub fn add_observation(&mut self, image_id: ImageId, feature_idx: FeatureIdx) {
        self.elements.push(Observation::new(image_id, feature_idx));
    }

    /// Append all of `elements`, keeping their order.
    pub fn add_elements(&mut self, elements: &[Observation]) {
        self.elements.extend_from_slice(elements);
    }

    /// Index of the first observation of `feature_idx` in `image_id`.
    pub fn find(&self, image_id: ImageId, feature_idx: FeatureIdx) -> Option<usize> {
        self.elements
            .iter()
            .position(|obs| obs.matches(image_id, feature_idx))
    }

    pub fn contains(&self, image_id: ImageId, feature_idx: FeatureIdx) -> bool {
        self.find(image_id, feature_idx).is_some()
    }

    /// Remove the observation at `idx`, shifting later elements down.
    ///
    /// Returns the removed observation.
    pub fn delete_element(&mut self, idx: usize) -> Result<Observation> {
        let len = self.elements.len();
        if idx >= len {
            return Err(TrackError::OutOfRange { index: idx, len });
        }
        let removed = self.elements.remove(idx);
        trace!(index = idx, observation = %removed, "deleted track element");
        Ok(removed)
    }

    /// Remove the first observation of `feature_idx` in `image_id`.
    ///
    /// Later duplicates, if any, stay in the track.
    pub fn delete_observation(&mut self, image_id: ImageId, feature_idx: FeatureIdx) -> Result<()> {
        let Some(idx) = self.find(image_id, feature_idx) else {
            debug!(%image_id, %feature_idx, len = self.elements.len(), "observation not in track");
            return Err(TrackError::NotFound {
                image_id,
                feature_idx,
            });
        };
        self.delete_element(idx)?;
        Ok(())
    }

    /// Make room for at least `num_elements` observations in total.
    pub fn reserve(&mut self, num_elements: usize) {
        let len = self.elements.len();
        if num_elements > len {
            self.elements.reserve(num_elements - len);
        }
    }

    /// Release capacity beyond the current length.
    ///
    /// Call once a track is final to cut its memory footprint.
    pub fn compress(&mut self) {
        let before = self.elements.capacity();
        self.elements.shrink_to_fit();
        trace!(
            len = self.elements.len(),
            released = before.saturating_sub(self.elements.capacity()),
            "compressed track"
        );
    }

    /// Currently allocated capacity, in observations.
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }
}

impl From<Vec<Observation>> for Track {
    fn from(elements: Vec<Observation>) -> Self {
        Self::from_elements(elements)
    }
}

impl FromIterator<Observation> for Track {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Observation> for Track {
    fn extend<I: IntoIterator<Item = Observation>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl IntoIterator for Track {
    type Item = Observation;
    type IntoIter = std::vec::IntoIter<Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Panics when `idx` is out of range, like slice indexing.
impl std::ops::Index<usize> for Track {
    type Output = Observation;

    fn index(&self, idx: usize) -> &Observation {
        &self.elements[idx]
    }
}

impl std::ops::IndexMut<usize> for Track {
    fn index_mut(&mut self, idx: usize) -> &mut Observation {
        &mut self.elements[idx]
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Track(len={}, elements=[", self.elements.len())?;
        for (i, obs) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", obs.image_id, obs.feature_idx)?;
        }
        write!(f, "])")
    }
}
