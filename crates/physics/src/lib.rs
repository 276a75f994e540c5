//! Grapnel Physics
//!
//! A deterministic swing-locomotion physics engine: raycast collision
//! queries, carrier movement, and a grappling rope constraint. Designed so
//! the same inputs always produce the same flight.
//!
//! # Architecture
//!
//! The engine is split into three systems:
//!
//! - **Collision**: Casts rays through brush geometry, returns filtered hits
//! - **Movement**: Walks, falls, and integrates the carrier each fixed tick
//! - **Tether**: Aims, attaches, and swings the rope on top of the other two
//!
//! # Design Principles
//!
//! 1. **Determinism**: Same inputs always produce same outputs across platforms
//! 2. **Simplicity**: Clean APIs over micro-optimizations
//! 3. **Two clocks**: Per-frame aim and input, fixed-tick forces and integration

pub mod collision;
pub mod movement;
pub mod tether;

// Re-export commonly used types
pub use collision::{CollisionWorld, ContentFlags, RayHit};
pub use movement::{
    CarrierButtons, CarrierCommand, CarrierState, MovementConfig, MovementController,
};
pub use tether::{
    AimEvent, AimTarget, AimTracker, RopeConstraint, SwingConfig, SwingController, SwingPhase,
};
