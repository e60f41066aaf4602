use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "airstrip")]
#[command(about = "Finds the longest runway that fits on an island polygon")]
struct Cmd {
    /// Input polygon file: vertex count followed by integer x/y pairs
    input: PathBuf,

    /// Output SVG path
    #[arg(default_value = "output.svg")]
    output: PathBuf,

    /// Rendered width of the island in pixels
    #[arg(long, default_value_t = 400)]
    width: u32,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let island = airstrip::loader::load_island(&cmd.input)?;
    tracing::info!(vertices = island.vertex_count(), input = %cmd.input.display(), "loaded");

    let started = Instant::now();
    let runway = airstrip::runway::calculate(&island)?;
    tracing::info!(elapsed_ms = u64::try_from(started.elapsed().as_millis())?, "calculated");

    match runway {
        Some(runway) => {
            tracing::info!(
                length = runway.length(),
                ax = runway.a.x,
                ay = runway.a.y,
                bx = runway.b.x,
                by = runway.b.y,
                "runway"
            );
            let svg = airstrip::render::to_svg(&island, &runway, cmd.width);
            std::fs::write(&cmd.output, svg)?;
            tracing::info!(out = %cmd.output.display(), "rendered");
        }
        None => {
            tracing::warn!("the polygon is invalid: no two vertices form a valid runway");
        }
    }
    Ok(())
}
