//! Collision queries for swing locomotion.
//!
//! The world is a flat list of box brushes, each tagged with content flags.
//! Everything the swing system asks of it goes through one query:
//! [`CollisionWorld::raycast`], which returns the closest brush matching a
//! content mask.
//!
//! # Key Types
//!
//! - [`CollisionWorld`]: the collision environment containing all geometry
//! - [`RayHit`]: output from a raycast (point, normal, distance, brush id)
//! - [`ContentFlags`]: brush classification and query masks

mod flags;
mod world;

pub use flags::ContentFlags;
pub use world::{CollisionBrush, CollisionWorld, RayHit};
