pub mod interaction;
pub mod layer;
pub mod popup;
pub mod symbology;
pub mod tiles;
pub mod view;
pub mod viewport;

pub use view::*;
