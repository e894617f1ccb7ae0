use boxhop_kernel::{FrameInput, Session, SimConfig};
use boxhop_render::{DebugTextRenderer, RenderView, Renderer};
use boxhop_tools::WorldInspector;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "boxhop-cli", about = "Headless boxhop simulation tool")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bundled level and current tuning
    Info,
    /// Run the bundled level headless and print the final state
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "600")]
        frames: u32,
        /// Frame delta in milliseconds
        #[arg(short, long, default_value = "16.0")]
        delta: f32,
        /// Hold the jump key on this frame (0 = never)
        #[arg(long, default_value = "0")]
        jump_at: u32,
    },
    /// Run headless with the position trace enabled and dump it as JSON
    Trace {
        /// Number of frames to run
        #[arg(short, long, default_value = "120")]
        frames: u32,
        /// Frame delta in milliseconds
        #[arg(short, long, default_value = "16.0")]
        delta: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("boxhop-cli v{}", env!("CARGO_PKG_VERSION"));
            let session = Session::playground(SimConfig::default());
            let text = DebugTextRenderer::new().render(session.world(), &RenderView::default());
            print!("{text}");
            let config = session.world().config();
            println!(
                "Tuning: gravity={} max_fall={} accel={} max_run={} friction={} jump={} substep_cap={}",
                config.gravity,
                config.max_fall_speed,
                config.run_accel,
                config.max_run_speed,
                config.friction,
                config.jump_speed,
                config.max_substep,
            );
        }
        Commands::Simulate {
            frames,
            delta,
            jump_at,
        } => {
            println!("Simulating {frames} frames at {delta}ms each");

            let mut session = Session::playground(SimConfig::default());
            for frame in 1..=frames {
                let input = FrameInput {
                    jump: jump_at != 0 && frame == jump_at,
                    ..FrameInput::default()
                };
                session.advance(delta, input);
            }

            println!("{}", WorldInspector::summary(session.world()));
        }
        Commands::Trace { frames, delta } => {
            let config = SimConfig {
                trace: true,
                ..SimConfig::default()
            };
            let mut session = Session::playground(config);
            for _ in 0..frames {
                session.advance(delta, FrameInput::default());
            }

            let points: Vec<[f32; 2]> = session
                .world()
                .trace()
                .iter()
                .map(|p| [p.x, p.y])
                .collect();
            println!("{}", serde_json::to_string(&points)?);
            tracing::debug!(ticks = session.world().tick_count(), "trace complete");
        }
    }

    Ok(())
}
