//! Color wheel with traveling comet dots.

use libm::roundf;

use crate::color::Rgb;
use crate::color_map::{ColorMap, MapError};

use super::{POWER_SCALE, Pattern, PatternError, build_linear, sine_channels, validate_linear};

const RGB_SCALAR: f32 = 128.0;
const RGB_OFFSET: f32 = 128.0;

/// Number of comet dots per revolution.
const DOT_COUNT: usize = 6;

/// Rainbow wheel multiplied by a per-group intensity envelope: the phase is
/// split into six equal dot groups, and intensity decays linearly to zero
/// across each group. Every position renders the same color at a given phase,
/// so the pattern stays phase-only.
#[derive(Debug, Clone)]
pub struct Comet<const CAP: usize> {
    bucket_size: usize,
    map: Option<ColorMap<CAP>>,
}

impl<const CAP: usize> Comet<CAP> {
    pub fn new(bucket_size: usize) -> Result<Self, PatternError> {
        validate_linear::<CAP>(bucket_size)?;
        // Each dot group needs at least one bucket
        if bucket_size < DOT_COUNT {
            return Err(PatternError::TooFewBuckets { minimum: DOT_COUNT });
        }
        Ok(Self {
            bucket_size,
            map: None,
        })
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn comet_color(bucket_size: usize, percent: f32) -> Rgb {
    // Split the cycle into dot groups and find the intensity within this one.
    // Integer group arithmetic keeps dot spacing exact.
    let count_per_grouping = bucket_size / DOT_COUNT;
    let dropoff_factor = 1.0 / (count_per_grouping * 2 / 3).max(1) as f32;
    let bucket = roundf(percent * bucket_size as f32) as usize;
    let group_offset = bucket % count_per_grouping;
    let intensity = (1.0 - group_offset as f32 * dropoff_factor).max(0.0);

    let (r_sin, g_sin, b_sin) = sine_channels(percent);
    Rgb::from_floats(
        POWER_SCALE * intensity * (r_sin * RGB_SCALAR + RGB_OFFSET),
        POWER_SCALE * intensity * (g_sin * RGB_SCALAR + RGB_OFFSET),
        POWER_SCALE * intensity * (b_sin * RGB_SCALAR + RGB_OFFSET),
    )
}

impl<const CAP: usize> Pattern<CAP> for Comet<CAP> {
    fn compute(&self, percent: f32, _idx: usize, _total_idx: usize) -> Rgb {
        comet_color(self.bucket_size, percent)
    }

    fn is_position_dependent(&self) -> bool {
        false
    }

    fn color_map(&mut self) -> Result<&ColorMap<CAP>, MapError> {
        let bucket_size = self.bucket_size;
        match &mut self.map {
            Some(map) => Ok(map),
            slot => {
                let map = build_linear(bucket_size, |percent, _, _| {
                    comet_color(bucket_size, percent)
                })?;
                Ok(slot.insert(map))
            }
        }
    }

    fn reset(&mut self) {
        self.map = None;
    }
}
