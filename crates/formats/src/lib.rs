pub mod feature;
pub mod properties;

pub use feature::*;
pub use properties::*;
