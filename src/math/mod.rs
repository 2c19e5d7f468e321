//! Grid math helpers

pub mod aabb;
pub mod footprint;

pub use aabb::Aabb;
pub use footprint::Footprint;
