//! Three-phase sine color wheel.

use crate::color::Rgb;
use crate::color_map::{ColorMap, MapError};

use super::{POWER_SCALE, Pattern, PatternError, build_linear, sine_channels, validate_linear};

const RGB_SCALAR: f32 = 128.0;
const RGB_OFFSET: f32 = 128.0;

/// Full-spectrum rainbow: three sines 120 degrees apart, fixed amplitude and
/// offset. Phase-only, so it caches into a linear map.
#[derive(Debug, Clone)]
pub struct Rainbow<const CAP: usize> {
    bucket_size: usize,
    map: Option<ColorMap<CAP>>,
}

impl<const CAP: usize> Rainbow<CAP> {
    pub fn new(bucket_size: usize) -> Result<Self, PatternError> {
        validate_linear::<CAP>(bucket_size)?;
        Ok(Self {
            bucket_size,
            map: None,
        })
    }

    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }
}

fn rainbow_color(percent: f32) -> Rgb {
    let (r_sin, g_sin, b_sin) = sine_channels(percent);
    Rgb::from_floats(
        POWER_SCALE * (r_sin * RGB_SCALAR + RGB_OFFSET),
        POWER_SCALE * (g_sin * RGB_SCALAR + RGB_OFFSET),
        POWER_SCALE * (b_sin * RGB_SCALAR + RGB_OFFSET),
    )
}

impl<const CAP: usize> Pattern<CAP> for Rainbow<CAP> {
    fn compute(&self, percent: f32, _idx: usize, _total_idx: usize) -> Rgb {
        rainbow_color(percent)
    }

    fn is_position_dependent(&self) -> bool {
        false
    }

    fn color_map(&mut self) -> Result<&ColorMap<CAP>, MapError> {
        let bucket_size = self.bucket_size;
        match &mut self.map {
            Some(map) => Ok(map),
            slot => {
                let map = build_linear(bucket_size, |percent, _, _| rainbow_color(percent))?;
                Ok(slot.insert(map))
            }
        }
    }

    fn reset(&mut self) {
        self.map = None;
    }
}
