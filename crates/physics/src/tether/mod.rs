//! Grappling swing system.
//!
//! This module implements rope-swing locomotion on top of the collision and
//! movement systems:
//!
//! - Aim tracking against swingable surfaces ([`AimTracker`])
//! - A soft distance constraint with eased length control ([`RopeConstraint`])
//! - The Idle / Targeting / Swinging state machine ([`SwingController`])
//! - Visual rope curve sampling ([`sample_rope_curve`])
//!
//! # Design
//!
//! The swing runs on two clocks. Aiming, button edges, and reel input are
//! handled per visual frame in [`SwingController::frame_update`]; length
//! easing and constraint forces run on the fixed physics tick in
//! [`SwingController::physics_step`]. Forces go through the carrier's
//! accumulator, so the movement controller stays the single integrator.

mod aim;
mod config;
mod curve;
mod rope;
mod swing;

pub use aim::{AimEvent, AimTarget, AimTracker};
pub use config::SwingConfig;
pub use curve::sample_rope_curve;
pub use rope::{RopeAttachment, RopeConstraint};
pub use swing::{SwingController, SwingPhase};
