//! Game simulation - the main loop host.
//!
//! This module contains the deterministic simulation that owns players, the
//! level, and the two clock domains: visual frames (aiming, input edges,
//! attach/release) and fixed physics ticks (forces, integration). A frame
//! accumulator converts the variable frame rate into fixed steps.

use grapnel_physics::{CarrierCommand, MovementConfig, MovementController, SwingConfig};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::PlayerInput;
use crate::level::Level;
use crate::player::{EntityId, Player};

/// Longest visual frame fed into the accumulator (seconds). Keeps one hitch
/// from bursting into a pile of catch-up steps.
const MAX_FRAME_TIME: f32 = 0.25;

/// Game simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed physics tick rate (ticks per second).
    pub tick_rate: u32,

    /// Movement physics configuration.
    pub movement: MovementConfig,

    /// Swing configuration handed to each player.
    pub swing: SwingConfig,

    /// Mouse sensitivity.
    pub mouse_sensitivity: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 50,
            movement: MovementConfig::default(),
            swing: SwingConfig::default(),
            mouse_sensitivity: 2.0,
        }
    }
}

impl SimulationConfig {
    /// Get the fixed step time in seconds.
    pub fn step_time(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}

/// The main game simulation.
///
/// Contains all game state and advances it deterministically from player
/// inputs: the same frame times and inputs always produce the same flight.
#[derive(Debug)]
pub struct Simulation {
    /// Visual frames processed so far.
    pub frame: u64,

    /// Fixed physics ticks processed so far.
    pub tick: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    /// Current level.
    pub level: Level,

    /// All players in the game.
    pub players: Vec<Player>,

    /// Movement physics controller.
    movement_controller: MovementController,

    /// Unspent frame time waiting to become fixed steps.
    accumulator: f32,

    /// Next entity ID to assign.
    next_entity_id: EntityId,
}

impl Simulation {
    /// Create a new simulation with the given configuration and level.
    pub fn new(config: SimulationConfig, level: Level) -> Self {
        let movement_controller = MovementController::new(config.movement.clone());

        Self {
            frame: 0,
            tick: 0,
            config,
            level,
            players: Vec::new(),
            movement_controller,
            accumulator: 0.0,
            next_entity_id: 1,
        }
    }

    /// Create a simulation with default configuration and the swing gallery.
    pub fn gallery() -> Self {
        Self::new(SimulationConfig::default(), Level::swing_gallery())
    }

    /// Add a player to the simulation.
    ///
    /// Returns the player's ID.
    pub fn add_player(&mut self, name: &str) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id += 1;

        // Cycle through spawn points
        let spawn_index = self.players.len() % self.level.spawn_count().max(1);
        let spawn = self.level.get_spawn(spawn_index);

        let position = spawn.map(|s| s.position).unwrap_or(Vec3::ZERO);
        let facing = spawn.map(|s| s.facing).unwrap_or(0.0);

        let mut player = Player::new(id, name.to_string(), position, self.config.swing.clone());
        self.movement_controller
            .spawn_at(&mut player.carrier, position, &self.level.collision);
        player.carrier.view_angles.y = facing;

        log::info!(
            "player {} ({}) spawned at {:?}",
            id,
            player.name,
            player.carrier.position
        );

        self.players.push(player);
        id
    }

    /// Remove a player from the simulation.
    pub fn remove_player(&mut self, player_id: EntityId) {
        self.players.retain(|p| p.id != player_id);
    }

    /// Get a player by ID.
    pub fn get_player(&self, player_id: EntityId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Get a mutable reference to a player by ID.
    pub fn get_player_mut(&mut self, player_id: EntityId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// Advance the simulation by one visual frame.
    ///
    /// Frame-rate work (view angles, aiming, attach/release, reel input)
    /// runs once per call; fixed-rate work (swing forces, movement
    /// integration) runs for as many ticks as the accumulator has banked.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Player inputs indexed by player position in the `players` array
    /// * `frame_time` - Wall-clock duration of this frame in seconds
    pub fn frame(&mut self, inputs: &[PlayerInput], frame_time: f32) {
        let frame_time = frame_time.min(MAX_FRAME_TIME);
        let step_time = self.config.step_time();

        // One command per player, reused for every tick this frame covers
        let commands: Vec<CarrierCommand> = (0..self.players.len())
            .map(|i| {
                inputs
                    .get(i)
                    .cloned()
                    .unwrap_or_default()
                    .to_command(self.config.mouse_sensitivity)
            })
            .collect();

        // Visual-rate work
        for (player, command) in self.players.iter_mut().zip(&commands) {
            self.movement_controller
                .update_view_angles(&mut player.carrier, command);
            player
                .swing
                .frame_update(&mut player.carrier, &self.level.collision, command, frame_time);
        }

        // Fixed-rate work
        self.accumulator += frame_time;
        while self.accumulator >= step_time {
            self.accumulator -= step_time;

            for (player, command) in self.players.iter_mut().zip(&commands) {
                // Read before the swing pushes forces, so both systems see
                // the same tick
                let swinging = player.swing.is_swinging();

                player.swing.physics_step(&mut player.carrier, command, step_time);
                self.movement_controller.physics_step(
                    &mut player.carrier,
                    command,
                    &self.level.collision,
                    swinging,
                    step_time,
                );
            }

            self.tick += 1;
        }

        self.frame += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================
