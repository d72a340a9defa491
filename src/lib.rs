pub mod track;

// Re-export commonly used types
pub use track::{FeatureIdx, ImageId, Observation, Track, TrackError};
