//! Headless demo loop.
//!
//! Runs the simulation with a scripted set of gestures (a drag, then a
//! long-press hold) and logs periodic status snapshots. Useful for profiling
//! and for eyeballing the interaction behavior without a renderer.

use clap::Parser;
use stardust::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "stardust", about = "Headless particle simulation demo")]
struct Args {
    /// Quality preset selecting particle count and bounds.
    #[arg(long, value_enum, default_value = "high")]
    preset: QualityPreset,

    /// Override the preset's particle count.
    #[arg(long)]
    count: Option<usize>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// RNG seed; omitted means entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Log a status snapshot every N frames.
    #[arg(long, default_value_t = 60)]
    stats_every: u64,
}

fn main() -> Result<(), stardust::SettingsError> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = args.preset.simulation();
    if let Some(count) = args.count {
        settings = settings.with_count(count);
    }

    let mut simulation = match args.seed {
        Some(seed) => ParticleSimulation::with_seed(settings, seed)?,
        None => ParticleSimulation::new(settings)?,
    };
    let mut controller = InteractionController::new(args.preset.camera());
    let mut camera = OrbitCamera::new(16.0 / 9.0);
    let mut clock = FrameClock::new().with_fixed_delta(1.0 / 60.0);

    log::info!(
        "running {} frames at preset {:?} with {} particles",
        args.frames,
        args.preset,
        simulation.settings().count
    );

    for frame in 0..args.frames {
        // Scripted input: drag across frames 120..180, hold 240..480.
        match frame {
            120 => controller.push(PointerEvent::Down {
                x: 400.0,
                y: 300.0,
                button: PointerButton::Primary,
            }),
            121..=179 => controller.push(PointerEvent::Move {
                x: 400.0 + (frame - 120) as f32 * 5.0,
                y: 300.0,
            }),
            180 => controller.push(PointerEvent::Up),
            240 => controller.push(PointerEvent::Down {
                x: 400.0,
                y: 300.0,
                button: PointerButton::Primary,
            }),
            480 => controller.push(PointerEvent::Up),
            _ => {}
        }

        let now = clock.tick();
        let strength = controller.update(now);
        simulation.step(strength);
        camera.position = controller.camera_position();

        if frame % args.stats_every == 0 {
            let stats = Stats::collect(&simulation, &camera, &controller);
            log::info!(
                "frame {:>5}: visible {}/{} force {:.3} strength {:.2} vel {:.2} cam {:.1?}",
                frame,
                stats.visible_particles,
                stats.total_particles,
                stats.average_force,
                strength,
                stats.camera_velocity,
                stats.camera_position
            );
        }
    }

    Ok(())
}
