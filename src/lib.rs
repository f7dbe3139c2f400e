//! Procedural spiky snowflakes.
//!
//! A [`Snowflake`] turns a handful of shape parameters into one closed
//! [`Path`]: a spiky arm, mirrored into a symmetric outline, then rotated
//! around the origin once per arm. The path can be drawn onto any
//! [`Renderer`]; SVG and G-code renderers are included.
//!
//! ```
//! use flakegen::{FixedSpikes, Snowflake, SnowflakeOptions};
//!
//! let flake = Snowflake::new(SnowflakeOptions::default().with_num_arms(8)).unwrap();
//! let path = flake.generate_with(&mut FixedSpikes(0.5));
//! assert_eq!(path.len(), 8 * flake.points_per_arm());
//! ```

pub mod defaults;
pub mod errors;
pub mod log;
pub mod path;
pub mod point;
pub mod render;
pub mod snowflake;
pub mod spikes;
pub mod types;

pub use errors::{ConfigError, RenderError};
pub use path::{Bounds, Path};
pub use point::Point;
pub use render::{GcodeRenderer, RecordingRenderer, RenderCommand, Renderer, SvgOptions, SvgRenderer};
pub use snowflake::{Snowflake, SnowflakeOptions};
pub use spikes::{FixedSpikes, RandomSpikes, SpikeSource};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Render a freshly randomized snowflake to an SVG document.
pub fn snowflake_svg(options: &SnowflakeOptions) -> Result<String, miette::Report> {
    let flake = Snowflake::new(*options)?;
    let mut svg = SvgRenderer::new();
    flake.draw(&mut svg, &mut RandomSpikes::new(rand::thread_rng()));
    Ok(svg.finish()?)
}

/// Render a snowflake to a G-code program.
///
/// With a seed the output is reproducible; without one it is random.
pub fn snowflake_gcode(
    options: &SnowflakeOptions,
    seed: Option<u64>,
) -> Result<String, miette::Report> {
    let flake = Snowflake::new(*options)?;
    let mut gcode = GcodeRenderer::new();
    match seed {
        Some(seed) => flake.draw(&mut gcode, &mut RandomSpikes::new(StdRng::seed_from_u64(seed))),
        None => flake.draw(&mut gcode, &mut RandomSpikes::new(rand::thread_rng())),
    }
    Ok(gcode.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_facade_produces_document() {
        let svg = snowflake_svg(&SnowflakeOptions::default()).unwrap();
        assert!(svg.starts_with("<svg "));
        assert_eq!(svg.matches("<path ").count(), 1);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn gcode_facade_is_reproducible_with_seed() {
        let options = SnowflakeOptions::default();
        let a = snowflake_gcode(&options, Some(3)).unwrap();
        let b = snowflake_gcode(&options, Some(3)).unwrap();
        assert_eq!(a, b);
        // one rapid move, one cut per remaining point, one closing cut
        let flake = Snowflake::default();
        assert_eq!(a.lines().count(), flake.point_count() + 1);
        assert_eq!(a.lines().filter(|l| l.starts_with("G0 ")).count(), 1);
    }

    #[test]
    fn facades_report_config_errors() {
        let err = snowflake_svg(&SnowflakeOptions::default().with_num_arms(0)).unwrap_err();
        assert!(err.to_string().contains("at least one arm"), "{err}");
        assert!(snowflake_gcode(&SnowflakeOptions::default().with_arm_length(-1.0), None).is_err());
    }
}
