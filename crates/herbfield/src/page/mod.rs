//! Page behavior around the canvases. Pure logic only; the web crate applies
//! the results to the DOM.

pub mod cards;
pub mod header;
pub mod loader;
pub mod speech;
pub mod video;
