//! Grapnel Game Logic
//!
//! This crate hosts the swing sandbox on top of the physics engine:
//!
//! - Player state and input handling
//! - Level geometry and spawn points
//! - The simulation loop with its two clock domains
//!
//! # Architecture
//!
//! The game uses a deterministic simulation: the same inputs and frame
//! times always produce the same flight.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Game Simulation                         │
//! │  ┌─────────┐    ┌───────────────┐    ┌────────────────────┐  │
//! │  │ Input   │───►│ Physics       │───►│ Game State         │  │
//! │  │ Commands│    │ (swing,       │    │ (players, level)   │  │
//! │  └─────────┘    │  movement,    │    └────────────────────┘  │
//! │                 │  collision)   │                            │
//! │                 └───────────────┘                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod input;
pub mod level;
pub mod player;
pub mod simulation;

// Re-export main types
pub use input::PlayerInput;
pub use level::Level;
pub use player::Player;
pub use simulation::{Simulation, SimulationConfig};

// Re-export physics types for convenience
pub use grapnel_physics::{
    CarrierCommand, CarrierState, CollisionWorld, ContentFlags, MovementConfig,
    MovementController, RayHit, SwingConfig, SwingController, SwingPhase,
};
