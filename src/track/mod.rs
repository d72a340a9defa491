//! Track module - correspondence records for multi-view reconstruction.
//!
//! This module contains:
//! - [`ImageId`], [`FeatureIdx`] - Opaque handles into the image and feature stores
//! - [`Observation`] - One detected feature in one image
//! - [`Track`] - Ordered observations of a single 3D point
//!
//! # Example
//!
//! ```
//! use sfm_track::track::{FeatureIdx, ImageId, Track};
//!
//! let mut track = Track::new();
//! track.add_observation(ImageId::new(1), FeatureIdx::new(0));
//! track.add_observation(ImageId::new(2), FeatureIdx::new(5));
//!
//! // Outlier rejection dropped the second link
//! track.delete_observation(ImageId::new(2), FeatureIdx::new(5)).unwrap();
//! assert_eq!(track.len(), 1);
//! ```

pub mod error;
pub mod observation;
pub mod track;
pub mod types;

pub use error::{Result, TrackError};
pub use observation::Observation;
pub use track::Track;
pub use types::{FeatureIdx, ImageId};
