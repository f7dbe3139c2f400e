//! Print a snowflake as a G-code program.
//!
//! Usage: cargo run --example gcode --features tracing -- [seed]

use flakegen::{GcodeRenderer, RandomSpikes, Snowflake, SnowflakeOptions};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .map_err(|e| miette::miette!("seed must be an integer: {e}"))?,
        None => 0,
    };

    let flake = Snowflake::new(SnowflakeOptions::default())?;
    let mut gcode = GcodeRenderer::new();
    flake.draw(&mut gcode, &mut RandomSpikes::new(StdRng::seed_from_u64(seed)));

    println!("; snowflake, seed {seed}");
    print!("{}", gcode.finish());
    Ok(())
}
