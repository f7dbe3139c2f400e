//! Snowflake construction.
//!
//! A snowflake is built from one spiky arm:
//!
//! 1. The arm's top edge starts at `(thickness, thickness/2)` and gets one
//!    outward-and-back tooth per spike, then runs to `(arm_length, thickness/2)`.
//! 2. A copy of that edge is mirrored across the x axis and reversed, so it
//!    runs from the tip back toward the origin along the underside.
//! 3. The top edge, a pointed tip at `1.1 × arm_length`, and the underside
//!    together form one closed arm outline.
//! 4. The arm is rotated in place by `-360°/num_arms` and copied into the
//!    figure, `num_arms` times. Rotation compounds on the same path, so after
//!    the last copy the arm has turned through a full circle.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::defaults;
use crate::errors::ConfigError;
use crate::path::Path;
use crate::point::Point;
use crate::render::Renderer;
use crate::spikes::{RandomSpikes, SpikeSource};
use crate::types::{NumericError, radians, try_finite, try_non_negative, try_positive};

/// Shape parameters. Validated by [`Snowflake::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowflakeOptions {
    pub num_arms: u32,
    pub arm_length: f64,
    pub arm_thickness: f64,
    pub num_spikes: u32,
    /// Extra offset applied along the arm before each spike
    pub spacer: f64,
}

impl Default for SnowflakeOptions {
    fn default() -> Self {
        SnowflakeOptions {
            num_arms: defaults::NUM_ARMS,
            arm_length: defaults::ARM_LENGTH,
            arm_thickness: defaults::ARM_THICKNESS,
            num_spikes: defaults::NUM_SPIKES,
            spacer: defaults::SPACER,
        }
    }
}

impl SnowflakeOptions {
    pub fn with_num_arms(mut self, num_arms: u32) -> Self {
        self.num_arms = num_arms;
        self
    }

    pub fn with_arm_length(mut self, arm_length: f64) -> Self {
        self.arm_length = arm_length;
        self
    }

    pub fn with_arm_thickness(mut self, arm_thickness: f64) -> Self {
        self.arm_thickness = arm_thickness;
        self
    }

    pub fn with_num_spikes(mut self, num_spikes: u32) -> Self {
        self.num_spikes = num_spikes;
        self
    }

    pub fn with_spacer(mut self, spacer: f64) -> Self {
        self.spacer = spacer;
        self
    }

    /// Apply `(key, value)` overrides on top of the current values.
    ///
    /// Keys are accepted in camelCase (`numArms`) or snake_case
    /// (`num_arms`). Unknown keys are skipped. Count values must be whole
    /// and non-negative; everything else is checked later by
    /// [`Snowflake::new`].
    pub fn merge<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<Self, ConfigError> {
        for (key, value) in overrides {
            match key {
                "numArms" | "num_arms" => self.num_arms = to_count("num_arms", value)?,
                "armLength" | "arm_length" => self.arm_length = value,
                "armThickness" | "arm_thickness" => self.arm_thickness = value,
                "numSpikes" | "num_spikes" => self.num_spikes = to_count("num_spikes", value)?,
                "spacer" => self.spacer = value,
                _ => {
                    crate::log::debug!(key, "ignoring unknown snowflake option");
                }
            }
        }
        Ok(self)
    }
}

fn to_count(field: &'static str, value: f64) -> Result<u32, ConfigError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(ConfigError::InvalidCount { field, value })
    }
}

fn check(
    field: &'static str,
    value: f64,
    validate: fn(f64) -> Result<f64, NumericError>,
) -> Result<f64, ConfigError> {
    validate(value).map_err(|source| ConfigError::InvalidValue { field, source })
}

/// A validated snowflake shape that can be generated any number of times.
///
/// Each generation draws fresh spike lengths, so two calls give different
/// outlines of the same overall shape unless the [`SpikeSource`] is
/// deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    options: SnowflakeOptions,
    gap_size: f64,
}

impl Default for Snowflake {
    fn default() -> Self {
        let options = SnowflakeOptions::default();
        Snowflake {
            gap_size: gap_size(&options),
            options,
        }
    }
}

/// `arm_length / num_spikes / 2`, or zero when there are no spikes.
fn gap_size(options: &SnowflakeOptions) -> f64 {
    if options.num_spikes == 0 {
        0.0
    } else {
        options.arm_length / f64::from(options.num_spikes) / 2.0
    }
}

impl Snowflake {
    pub fn new(options: SnowflakeOptions) -> Result<Self, ConfigError> {
        if options.num_arms == 0 {
            return Err(ConfigError::ZeroArms);
        }
        check("arm_length", options.arm_length, try_positive)?;
        check("arm_thickness", options.arm_thickness, try_positive)?;
        check("spacer", options.spacer, try_non_negative)?;
        // Every coordinate is bounded by this, before and after rotation
        let reach = 2.0 * options.spacer + 2.0 * options.arm_length + options.arm_thickness;
        check("arm extent", reach, try_finite)?;

        if options.num_spikes == 0 {
            crate::log::warn!("num_spikes is 0; arms will have no spikes and gap size 0");
        }

        Ok(Snowflake {
            gap_size: gap_size(&options),
            options,
        })
    }

    pub fn options(&self) -> &SnowflakeOptions {
        &self.options
    }

    /// Spacing unit between successive spikes along an arm.
    pub fn gap_size(&self) -> f64 {
        self.gap_size
    }

    /// Points in one closed arm outline: two edges of `3·spikes + 2` points
    /// and the tip.
    pub fn points_per_arm(&self) -> usize {
        let edge = 3 * self.options.num_spikes as usize + 2;
        2 * edge + 1
    }

    /// Points in the full figure.
    pub fn point_count(&self) -> usize {
        self.points_per_arm() * self.options.num_arms as usize
    }

    /// Build a single arm outline lying along the positive x axis.
    pub fn arm(&self, spikes: &mut impl SpikeSource) -> Path {
        let o = &self.options;
        let half_thickness = o.arm_thickness / 2.0;
        let (sin, cos) = radians(defaults::SPIKE_ANGLE_DEG).sin_cos();

        let mut top = Path::with_capacity(self.points_per_arm());
        top.append(Point::new(o.arm_thickness, half_thickness));

        for n in 0..o.num_spikes {
            let spike_length = spikes.spike_length(o.arm_length / 2.0);
            let x1 = o.spacer + self.gap_size * (f64::from(n) * 2.0);
            let x2 = o.spacer + x1 + spike_length * cos;
            let x3 = o.spacer + x1 + self.gap_size;

            crate::log::trace!(n, spike_length, x1, x2, x3, "spike");

            top.append(Point::new(x1, half_thickness));
            top.append(Point::new(x2, spike_length * sin));
            top.append(Point::new(x3, half_thickness));
        }

        top.append(Point::new(o.arm_length, half_thickness));

        let mut underside = top.clone();
        underside.mirror_across_x_axis();
        underside.reverse();

        top.append(Point::new(o.arm_length + o.arm_length / 10.0, 0.0));
        top.extend(&underside);
        top
    }

    /// Build the full figure: `num_arms` rotated copies of one arm.
    pub fn generate_with(&self, spikes: &mut impl SpikeSource) -> Path {
        let num_arms = self.options.num_arms;
        let step = radians(-(360.0 / f64::from(num_arms)));
        let mut arm = self.arm(spikes);

        crate::log::debug!(
            num_arms,
            num_spikes = self.options.num_spikes,
            points_per_arm = arm.len(),
            step,
            "composing snowflake"
        );

        let mut flake = Path::with_capacity(arm.len() * num_arms as usize);
        for _ in 0..num_arms {
            // Rotation compounds: the same arm turns again every pass.
            arm.rotate(step);
            flake.extend(&arm);
        }
        flake
    }

    /// Generate with spike lengths from the thread-local RNG.
    pub fn generate(&self) -> Path {
        self.generate_with(&mut RandomSpikes::new(rand::thread_rng()))
    }

    /// Generate reproducibly from a seed.
    pub fn generate_seeded(&self, seed: u64) -> Path {
        self.generate_with(&mut RandomSpikes::new(StdRng::seed_from_u64(seed)))
    }

    /// Generate and hand the figure to `renderer`.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, spikes: &mut impl SpikeSource) {
        self.generate_with(spikes).draw(renderer);
    }
}
