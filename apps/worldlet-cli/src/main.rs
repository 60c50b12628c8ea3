use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use worldlet_entities::{BouncingBall, MovingPlatform};
use worldlet_kernel::World;
use worldlet_runtime::TickRate;

#[derive(Parser)]
#[command(name = "worldlet-cli", about = "CLI driver for the worldlet simulation kernel")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Step the classic scene synchronously and print the outcome
    Demo {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "120")]
        ticks: u64,
    },
    /// Drive the classic scene on the real scheduler, then stop it
    Run {
        /// Tick frequency in Hz
        #[arg(long, default_value = "60")]
        hz: u32,
        /// How long to run before stopping, in milliseconds
        #[arg(long, default_value = "1000")]
        millis: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("worldlet-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: {}", worldlet_kernel::crate_info());
            println!("entities: {}", worldlet_entities::crate_info());
            println!("runtime: {}", worldlet_runtime::crate_info());
        }
        Commands::Demo { ticks } => {
            let mut world = classic_scene()?;
            world.start();
            for _ in 0..ticks {
                world.step();
            }
            println!("{}", world.summary());
            print_positions(&world);
        }
        Commands::Run { hz, millis } => {
            anyhow::ensure!(hz > 0, "tick rate must be nonzero");
            let world = classic_scene()?;
            let handle = worldlet_runtime::spawn(world, TickRate::from_hz(hz))?;
            std::thread::sleep(Duration::from_millis(millis));
            let world = handle.stop();
            println!("{}", world.summary());
            print_positions(&world);
        }
    }

    Ok(())
}

/// The classic scene: one bouncing ball and one moving platform.
fn classic_scene() -> Result<World> {
    let mut world = World::new();
    world.add_entity(Box::new(BouncingBall::new("Ball", 50.0, 2.0)))?;
    world.add_entity(Box::new(MovingPlatform::new("Platform", 30.0, 80.0, 1.0)))?;
    Ok(world)
}

fn print_positions(world: &World) {
    for entity in world.entities() {
        println!(
            "{} [{}]: position {:.1}",
            entity.name(),
            entity.kind(),
            entity.position()
        );
    }
}
