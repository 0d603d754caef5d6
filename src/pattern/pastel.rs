//! Color wheel with per-channel amplitude and offset.

use crate::color::Rgb;
use crate::color_map::{ColorMap, MapError};

use super::{POWER_SCALE, Pattern, PatternError, build_linear, sine_channels, validate_linear};

/// Amplitude and offset for one channel's sine wave.
///
/// The stock rainbow uses 128/128 for every channel; shrinking the scalar
/// relative to the offset washes the channel out toward pastel.
#[derive(Debug, Clone, Copy)]
pub struct ChannelWave {
    pub scalar: f32,
    pub offset: f32,
}

impl ChannelWave {
    pub const fn new(scalar: f32, offset: f32) -> Self {
        Self { scalar, offset }
    }
}

/// Rainbow structure with configurable per-channel saturation and brightness
/// balance. Phase-only.
#[derive(Debug, Clone)]
pub struct Pastel<const CAP: usize> {
    bucket_size: usize,
    red: ChannelWave,
    green: ChannelWave,
    blue: ChannelWave,
    map: Option<ColorMap<CAP>>,
}

impl<const CAP: usize> Pastel<CAP> {
    pub fn new(
        bucket_size: usize,
        red: ChannelWave,
        green: ChannelWave,
        blue: ChannelWave,
    ) -> Result<Self, PatternError> {
        validate_linear::<CAP>(bucket_size)?;
        Ok(Self {
            bucket_size,
            red,
            green,
            blue,
            map: None,
        })
    }
}

fn pastel_color(red: ChannelWave, green: ChannelWave, blue: ChannelWave, percent: f32) -> Rgb {
    let (r_sin, g_sin, b_sin) = sine_channels(percent);
    Rgb::from_floats(
        POWER_SCALE * (r_sin * red.scalar + red.offset),
        POWER_SCALE * (g_sin * green.scalar + green.offset),
        POWER_SCALE * (b_sin * blue.scalar + blue.offset),
    )
}

impl<const CAP: usize> Pattern<CAP> for Pastel<CAP> {
    fn compute(&self, percent: f32, _idx: usize, _total_idx: usize) -> Rgb {
        pastel_color(self.red, self.green, self.blue, percent)
    }

    fn is_position_dependent(&self) -> bool {
        false
    }

    fn color_map(&mut self) -> Result<&ColorMap<CAP>, MapError> {
        let bucket_size = self.bucket_size;
        let (red, green, blue) = (self.red, self.green, self.blue);
        match &mut self.map {
            Some(map) => Ok(map),
            slot => {
                let map = build_linear(bucket_size, |percent, _, _| {
                    pastel_color(red, green, blue, percent)
                })?;
                Ok(slot.insert(map))
            }
        }
    }

    fn reset(&mut self) {
        self.map = None;
    }
}
