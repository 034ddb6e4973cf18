pub mod bounds;
pub mod latlng;
pub mod mercator;

// Geographic primitives only: small, dependency-free, well-tested.
pub use bounds::*;
pub use latlng::*;
pub use mercator::*;
