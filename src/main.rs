//! Grapnel - Headless Swing Demo
//!
//! Runs the swing gallery without a window: a scripted pilot walks off the
//! start platform, grapples the overhead beams, reels in, and releases into
//! flight. Status lines go to stdout; set RUST_LOG=debug to watch phase
//! transitions and rope events.

use grapnel_game::{PlayerInput, Simulation, SwingPhase};

/// Visual frame time the demo advances by (60 FPS).
const FRAME_TIME: f32 = 1.0 / 60.0;

/// Frames the pilot holds each swing before letting go.
const SWING_HOLD_FRAMES: u32 = 90;

/// Frames spent reeling in at the start of each swing.
const REEL_FRAMES: u32 = 45;

/// Frames to wait after a release before grappling again.
const REENGAGE_COOLDOWN: u64 = 30;

fn main() {
    env_logger::init();

    let mut simulation = Simulation::gallery();
    let player_id = simulation.add_player("Pilot");

    log::info!(
        "swing gallery ready: {} brushes, {} Hz physics",
        simulation.level.collision.brush_count(),
        simulation.config.tick_rate
    );

    // Tilt the view up toward the beam line before the run starts
    let mut warmup = PlayerInput::default();
    warmup.mouse_delta = (0.0, 210.0);
    simulation.frame(&[warmup], FRAME_TIME);

    let mut swing_frames = 0u32;
    let mut cooldown_until = 0u64;
    let mut peak_height = f32::MIN;
    let mut swings_completed = 0u32;

    for _ in 0..900 {
        let frame = simulation.frame;

        let mut input = PlayerInput::default();
        input.movement.forward = true;

        if let Some(player) = simulation.get_player(player_id) {
            let phase = player.swing_phase();
            peak_height = peak_height.max(player.position().y);

            if swing_frames > 0 && phase != SwingPhase::Swinging {
                // The swing ended since last frame; back off before the next
                swings_completed += 1;
                swing_frames = 0;
                cooldown_until = frame + REENGAGE_COOLDOWN;
            }

            match phase {
                SwingPhase::Swinging => {
                    swing_frames += 1;
                    input.actions.engage = swing_frames < SWING_HOLD_FRAMES;
                    input.actions.shorten = swing_frames < REEL_FRAMES;
                }
                SwingPhase::Targeting => {
                    // Pulse the button so a missed attach can re-press
                    if frame >= cooldown_until {
                        input.actions.engage = frame % 2 == 0;
                    }
                }
                SwingPhase::Idle => {}
            }
        }

        simulation.frame(&[input], FRAME_TIME);

        if simulation.frame % 150 == 0 {
            if let Some(player) = simulation.get_player(player_id) {
                let pos = player.position();
                match player.rope_lengths() {
                    Some((current, target)) => println!(
                        "[{:4}] swinging at ({:6.1}, {:5.1}, {:5.1}), rope {:.1} m easing to {:.1} m",
                        simulation.frame, pos.x, pos.y, pos.z, current, target
                    ),
                    None => println!(
                        "[{:4}] {:?} at ({:6.1}, {:5.1}, {:5.1})",
                        simulation.frame,
                        player.swing_phase(),
                        pos.x,
                        pos.y,
                        pos.z
                    ),
                }
            }
        }
    }

    if let Some(player) = simulation.get_player(player_id) {
        let pos = player.position();
        println!();
        println!(
            "run over after {} frames / {} ticks: {} swings, peak height {:.1} m",
            simulation.frame, simulation.tick, swings_completed, peak_height
        );
        println!(
            "pilot ended {:?} at ({:.1}, {:.1}, {:.1})",
            player.swing_phase(),
            pos.x,
            pos.y,
            pos.z
        );
    }
}
