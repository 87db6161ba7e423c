//! Shape geometry for the wireframe renderer

mod hull;

pub use hull::HullOutline;
