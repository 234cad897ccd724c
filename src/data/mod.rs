//! Data sources: the distance-matrix provider and the built-in facility list.

pub mod distance_matrix;
pub mod facilities;

pub use distance_matrix::DistanceMatrixClient;
pub use facilities::builtin_facilities;
