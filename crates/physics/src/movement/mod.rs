//! Carrier movement physics system.
//!
//! This module implements the baseline locomotion the swing system builds on:
//!
//! - Direct-drive ground walking (velocity set from input, instant stops)
//! - Gravity while airborne
//! - A force accumulator external systems push on (the rope, air control)
//! - Ground detection and landing
//!
//! # Design
//!
//! Movement is controlled by the [`MovementController`] which takes input
//! commands and integrates the player's [`CarrierState`] through the
//! collision world on the fixed physics clock.
//!
//! All movement is deterministic - the same inputs will always produce the
//! same outputs.

mod carrier;
mod config;
mod controller;

pub use carrier::{CarrierButtons, CarrierCommand, CarrierState};
pub use config::MovementConfig;
pub use controller::MovementController;
