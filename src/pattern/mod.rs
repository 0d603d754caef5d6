//! Pattern protocol and the built-in patterns.
//!
//! A pattern is a pure `compute(percent, idx, total_idx)` formula plus a
//! lazily built [`ColorMap`] cache. Phase-only patterns sample one color per
//! phase bucket; position-dependent patterns sample every (bucket, LED) pair.
//! All patterns are stored in an enum ([`PatternSlot`]) to avoid heap
//! allocations.

mod comet;
mod pastel;
mod rainbow;
mod sparkshot;
mod wubwub;
mod yoyo;

pub use comet::Comet;
pub use pastel::{ChannelWave, Pastel};
pub use rainbow::Rainbow;
pub use sparkshot::{MAX_SHOTS, Shot, Sparkshot};
pub use wubwub::Wubwub;
pub use yoyo::{ChannelWeights, Yoyo};

use core::f32::consts::PI;
use core::fmt;

use libm::sinf;

use crate::color::Rgb;
use crate::color_map::{ColorMap, FullColorMap, LinearColorMap, MapError};

/// Fixed power budget applied to every pattern's output (7% of max power).
pub const POWER_SCALE: f32 = 0.07;

const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_PASTEL: &str = "pastel";
const PATTERN_NAME_COMET: &str = "comet";
const PATTERN_NAME_YOYO: &str = "yoyo";
const PATTERN_NAME_WUBWUB: &str = "wubwub";
const PATTERN_NAME_SPARKSHOT: &str = "sparkshot";

const PATTERN_ID_RAINBOW: u8 = 0;
const PATTERN_ID_PASTEL: u8 = 1;
const PATTERN_ID_COMET: u8 = 2;
const PATTERN_ID_YOYO: u8 = 3;
const PATTERN_ID_WUBWUB: u8 = 4;
const PATTERN_ID_SPARKSHOT: u8 = 5;

/// Errors from constructing a pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternError {
    /// The cache layer rejected the requested table.
    Map(MapError),
    /// Fewer phase buckets than the pattern can subdivide.
    TooFewBuckets { minimum: usize },
    /// Channel weights sum to zero; renormalization would divide by zero.
    ZeroWeightSum,
    /// A gradient-driven pattern needs at least one control point.
    EmptyGradient,
    /// A shot-driven pattern needs at least one shot.
    EmptyShotList,
    /// More shots than the bounded shot list can hold.
    TooManyShots { given: usize, max: usize },
    /// Dropoff factors are exponential decay bases and must be in `[0, 1]`.
    DropoffOutOfRange { value: f32 },
    /// An all-black shot color; renormalization would divide by zero.
    DarkShotColor,
}

impl From<MapError> for PatternError {
    fn from(err: MapError) -> Self {
        Self::Map(err)
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(err) => write!(f, "{err}"),
            Self::TooFewBuckets { minimum } => {
                write!(f, "bucket size must be at least {minimum}")
            }
            Self::ZeroWeightSum => write!(f, "channel weights must not sum to zero"),
            Self::EmptyGradient => write!(f, "gradient must hold at least one control point"),
            Self::EmptyShotList => write!(f, "shot list must hold at least one shot"),
            Self::TooManyShots { given, max } => {
                write!(f, "{given} shots exceed the limit of {max}")
            }
            Self::DropoffOutOfRange { value } => {
                write!(f, "dropoff factor {value} outside [0, 1]")
            }
            Self::DarkShotColor => write!(f, "shot color must not be black"),
        }
    }
}

impl core::error::Error for PatternError {}

/// A color pattern with a lazily built lookup table.
///
/// `compute` is a pure function of its arguments; the only mutable state is
/// the cached map, built on first [`Pattern::color_map`] access and discarded
/// by [`Pattern::reset`].
pub trait Pattern<const CAP: usize> {
    /// Evaluate the pattern formula directly, bypassing the cache.
    ///
    /// `percent` is the animation phase in `[0, 1)`; `idx` and `total_idx`
    /// are ignored by phase-only patterns.
    fn compute(&self, percent: f32, idx: usize, total_idx: usize) -> Rgb;

    /// Whether the output varies by LED position (requiring a full map).
    fn is_position_dependent(&self) -> bool;

    /// The precomputed table, building it on first access.
    fn color_map(&mut self) -> Result<&ColorMap<CAP>, MapError>;

    /// Discard the cached table so the next access rebuilds it.
    fn reset(&mut self);
}

/// The three-phase sine wheel shared by the phase-only patterns.
pub(crate) fn sine_channels(percent: f32) -> (f32, f32, f32) {
    let a = percent * 2.0 * PI;
    (
        sinf(a),
        sinf(a - 2.0 * PI / 3.0),
        sinf(a - 4.0 * PI / 3.0),
    )
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn build_linear<const CAP: usize>(
    bucket_size: usize,
    mut compute: impl FnMut(f32, usize, usize) -> Rgb,
) -> Result<ColorMap<CAP>, MapError> {
    let mut map = LinearColorMap::new(bucket_size)?;
    for i in 0..bucket_size {
        let percent = i as f32 / bucket_size as f32;
        map.add_color(i, i, bucket_size, compute(percent, i, bucket_size))?;
    }
    Ok(ColorMap::Linear(map))
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn build_full<const CAP: usize>(
    bucket_size: usize,
    leds_per_strip: usize,
    mut compute: impl FnMut(f32, usize, usize) -> Rgb,
) -> Result<ColorMap<CAP>, MapError> {
    let mut map = FullColorMap::new(bucket_size, leds_per_strip)?;
    for i in 0..bucket_size {
        let percent = i as f32 / bucket_size as f32;
        for j in 0..leds_per_strip {
            map.add_color(i, j, leds_per_strip, compute(percent, j, leds_per_strip))?;
        }
    }
    Ok(ColorMap::Full(map))
}

/// Check a linear table request against the const capacity.
pub(crate) fn validate_linear<const CAP: usize>(bucket_size: usize) -> Result<(), MapError> {
    if bucket_size == 0 {
        return Err(MapError::ZeroBucketSize);
    }
    if bucket_size > CAP {
        return Err(MapError::CapacityExceeded {
            needed: bucket_size,
            capacity: CAP,
        });
    }
    Ok(())
}

/// Check a full table request against the const capacity.
pub(crate) fn validate_full<const CAP: usize>(
    bucket_size: usize,
    leds_per_strip: usize,
) -> Result<(), MapError> {
    if bucket_size == 0 {
        return Err(MapError::ZeroBucketSize);
    }
    if leds_per_strip == 0 {
        return Err(MapError::ZeroLedCount);
    }
    let needed = bucket_size
        .checked_mul(leds_per_strip)
        .ok_or(MapError::CapacityExceeded {
            needed: usize::MAX,
            capacity: CAP,
        })?;
    if needed > CAP {
        return Err(MapError::CapacityExceeded {
            needed,
            capacity: CAP,
        });
    }
    Ok(())
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot<const CAP: usize> {
    /// Three-phase sine color wheel
    Rainbow(Rainbow<CAP>),
    /// Color wheel with per-channel amplitude and offset
    Pastel(Pastel<CAP>),
    /// Color wheel with six traveling comet dots
    Comet(Comet<CAP>),
    /// Bouncing comet with eased head motion and decaying tail
    Yoyo(Yoyo<CAP>),
    /// Traveling standing wave rendered through a gradient
    Wubwub(Wubwub<CAP>),
    /// Prioritized list of moving shots
    Sparkshot(Sparkshot<CAP>),
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    Rainbow = PATTERN_ID_RAINBOW,
    Pastel = PATTERN_ID_PASTEL,
    Comet = PATTERN_ID_COMET,
    Yoyo = PATTERN_ID_YOYO,
    Wubwub = PATTERN_ID_WUBWUB,
    Sparkshot = PATTERN_ID_SPARKSHOT,
}

impl PatternId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_RAINBOW => Self::Rainbow,
            PATTERN_ID_PASTEL => Self::Pastel,
            PATTERN_ID_COMET => Self::Comet,
            PATTERN_ID_YOYO => Self::Yoyo,
            PATTERN_ID_WUBWUB => Self::Wubwub,
            PATTERN_ID_SPARKSHOT => Self::Sparkshot,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::Pastel => PATTERN_NAME_PASTEL,
            Self::Comet => PATTERN_NAME_COMET,
            Self::Yoyo => PATTERN_NAME_YOYO,
            Self::Wubwub => PATTERN_NAME_WUBWUB,
            Self::Sparkshot => PATTERN_NAME_SPARKSHOT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            PATTERN_NAME_PASTEL => Some(Self::Pastel),
            PATTERN_NAME_COMET => Some(Self::Comet),
            PATTERN_NAME_YOYO => Some(Self::Yoyo),
            PATTERN_NAME_WUBWUB => Some(Self::Wubwub),
            PATTERN_NAME_SPARKSHOT => Some(Self::Sparkshot),
            _ => None,
        }
    }
}

impl<const CAP: usize> PatternSlot<CAP> {
    /// Evaluate the underlying pattern formula directly.
    pub fn compute(&self, percent: f32, idx: usize, total_idx: usize) -> Rgb {
        match self {
            Self::Rainbow(pattern) => pattern.compute(percent, idx, total_idx),
            Self::Pastel(pattern) => pattern.compute(percent, idx, total_idx),
            Self::Comet(pattern) => pattern.compute(percent, idx, total_idx),
            Self::Yoyo(pattern) => pattern.compute(percent, idx, total_idx),
            Self::Wubwub(pattern) => pattern.compute(percent, idx, total_idx),
            Self::Sparkshot(pattern) => pattern.compute(percent, idx, total_idx),
        }
    }

    /// Whether the pattern's output varies by LED position.
    pub fn is_position_dependent(&self) -> bool {
        match self {
            Self::Rainbow(pattern) => pattern.is_position_dependent(),
            Self::Pastel(pattern) => pattern.is_position_dependent(),
            Self::Comet(pattern) => pattern.is_position_dependent(),
            Self::Yoyo(pattern) => pattern.is_position_dependent(),
            Self::Wubwub(pattern) => pattern.is_position_dependent(),
            Self::Sparkshot(pattern) => pattern.is_position_dependent(),
        }
    }

    /// The pattern's precomputed table, building it on first access.
    pub fn color_map(&mut self) -> Result<&ColorMap<CAP>, MapError> {
        match self {
            Self::Rainbow(pattern) => pattern.color_map(),
            Self::Pastel(pattern) => pattern.color_map(),
            Self::Comet(pattern) => pattern.color_map(),
            Self::Yoyo(pattern) => pattern.color_map(),
            Self::Wubwub(pattern) => pattern.color_map(),
            Self::Sparkshot(pattern) => pattern.color_map(),
        }
    }

    /// Discard the cached table.
    pub fn reset(&mut self) {
        match self {
            Self::Rainbow(pattern) => Pattern::reset(pattern),
            Self::Pastel(pattern) => Pattern::reset(pattern),
            Self::Comet(pattern) => Pattern::reset(pattern),
            Self::Yoyo(pattern) => Pattern::reset(pattern),
            Self::Wubwub(pattern) => Pattern::reset(pattern),
            Self::Sparkshot(pattern) => Pattern::reset(pattern),
        }
    }

    /// Get the pattern ID for external observation
    pub fn id(&self) -> PatternId {
        match self {
            Self::Rainbow(_) => PatternId::Rainbow,
            Self::Pastel(_) => PatternId::Pastel,
            Self::Comet(_) => PatternId::Comet,
            Self::Yoyo(_) => PatternId::Yoyo,
            Self::Wubwub(_) => PatternId::Wubwub,
            Self::Sparkshot(_) => PatternId::Sparkshot,
        }
    }
}
