//! Print a random snowflake as SVG.
//!
//! Usage: cargo run --example svg --features tracing -- [key=value ...]
//! e.g. `numArms=8 numSpikes=5 spacer=1`. Set RUST_LOG=debug for logs.

use flakegen::SnowflakeOptions;
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut overrides = Vec::new();
    for arg in &args {
        let Some((key, value)) = arg.split_once('=') else {
            return Err(miette::miette!("expected key=value, got {arg:?}"));
        };
        let value: f64 = value
            .parse()
            .map_err(|e| miette::miette!("bad value for {key}: {e}"))?;
        overrides.push((key, value));
    }

    let options = SnowflakeOptions::default().merge(overrides)?;
    tracing::info!(?options, "generating snowflake");
    print!("{}", flakegen::snowflake_svg(&options)?);
    Ok(())
}
