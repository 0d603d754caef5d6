//! Precomputed color caches.
//!
//! Two layouts behind one enum: a phase-only table ([`LinearColorMap`]) and a
//! phase-by-position table ([`FullColorMap`]). Both are populated once during
//! a pattern's build pass via [`ColorMap::add_color`] and read-only afterward
//! via [`ColorMap::lookup`].
//!
//! Writes that would land outside the allocated buffer are reported as
//! [`MapError`], never performed. Lookups clamp out-of-range phase and
//! position defensively; the one hard lookup error is querying a full map
//! with a different LED count than it was built for, which would silently
//! misindex the whole table if tolerated.

use core::fmt;

use heapless::Vec;

use crate::color::Rgb;

/// Errors from building or querying a color map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// Bucket count must be at least 1.
    ZeroBucketSize,
    /// LED count must be at least 1 for a full map.
    ZeroLedCount,
    /// The requested table does not fit the const-generic capacity.
    CapacityExceeded { needed: usize, capacity: usize },
    /// Write targeted a bucket outside the table.
    BucketOutOfRange { bucket_idx: usize, bucket_size: usize },
    /// Write targeted an LED position outside the table.
    LedOutOfRange { idx: usize, led_count: usize },
    /// A full map was queried with a different LED count than it was built for.
    LedCountMismatch { built_for: usize, queried: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBucketSize => write!(f, "bucket size must be at least 1"),
            Self::ZeroLedCount => write!(f, "led count must be at least 1"),
            Self::CapacityExceeded { needed, capacity } => {
                write!(f, "map needs {needed} entries but capacity is {capacity}")
            }
            Self::BucketOutOfRange {
                bucket_idx,
                bucket_size,
            } => write!(f, "bucket {bucket_idx} outside table of {bucket_size}"),
            Self::LedOutOfRange { idx, led_count } => {
                write!(f, "led {idx} outside strip of {led_count}")
            }
            Self::LedCountMismatch { built_for, queried } => {
                write!(f, "map built for {built_for} leds, queried with {queried}")
            }
        }
    }
}

impl core::error::Error for MapError {}

/// Discretize a phase fraction into a bucket index.
///
/// Saturates on both ends: negative or NaN input selects bucket 0, input at or
/// above 1.0 selects the last bucket.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn bucket_index(percent: f32, bucket_size: usize) -> usize {
    // Float-to-int `as` casts saturate, so negatives and NaN land on 0.
    let bucket = (percent * bucket_size as f32) as usize;
    bucket.min(bucket_size - 1)
}

/// Phase-only cache: one color per discretized phase step.
#[derive(Debug, Clone)]
pub struct LinearColorMap<const CAP: usize> {
    bucket_size: usize,
    colors: Vec<Rgb, CAP>,
}

impl<const CAP: usize> LinearColorMap<CAP> {
    /// Allocate a table of `bucket_size` black entries.
    pub fn new(bucket_size: usize) -> Result<Self, MapError> {
        if bucket_size == 0 {
            return Err(MapError::ZeroBucketSize);
        }
        let mut colors = Vec::new();
        colors
            .resize(bucket_size, Rgb::BLACK)
            .map_err(|()| MapError::CapacityExceeded {
                needed: bucket_size,
                capacity: CAP,
            })?;
        Ok(Self { bucket_size, colors })
    }

    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }

    /// Store a color at `bucket_idx`. Position arguments are ignored.
    pub fn add_color(
        &mut self,
        bucket_idx: usize,
        _idx: usize,
        _total_idx: usize,
        rgb: Rgb,
    ) -> Result<(), MapError> {
        let bucket_size = self.bucket_size;
        let slot = self
            .colors
            .get_mut(bucket_idx)
            .ok_or(MapError::BucketOutOfRange {
                bucket_idx,
                bucket_size,
            })?;
        *slot = rgb;
        Ok(())
    }

    /// Fetch the color for `percent`. Position arguments are ignored.
    pub fn lookup(&self, percent: f32, _idx: usize, _total_idx: usize) -> Rgb {
        self.colors[bucket_index(percent, self.bucket_size)]
    }
}

/// Phase-by-position cache: one color per (phase step, LED) pair.
///
/// Capacity is `bucket_size * led_count`, with the LED count fixed at
/// construction. Every write and lookup must pass the same `total_idx` the
/// map was built for.
#[derive(Debug, Clone)]
pub struct FullColorMap<const CAP: usize> {
    bucket_size: usize,
    led_count: usize,
    colors: Vec<Rgb, CAP>,
}

impl<const CAP: usize> FullColorMap<CAP> {
    /// Allocate a `bucket_size * led_count` table of black entries.
    pub fn new(bucket_size: usize, led_count: usize) -> Result<Self, MapError> {
        if bucket_size == 0 {
            return Err(MapError::ZeroBucketSize);
        }
        if led_count == 0 {
            return Err(MapError::ZeroLedCount);
        }
        let needed = bucket_size
            .checked_mul(led_count)
            .ok_or(MapError::CapacityExceeded {
                needed: usize::MAX,
                capacity: CAP,
            })?;
        let mut colors = Vec::new();
        colors
            .resize(needed, Rgb::BLACK)
            .map_err(|()| MapError::CapacityExceeded {
                needed,
                capacity: CAP,
            })?;
        Ok(Self {
            bucket_size,
            led_count,
            colors,
        })
    }

    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }

    /// The LED count this map was built for.
    pub fn led_count(&self) -> usize {
        self.led_count
    }

    /// Store a color at `(bucket_idx, idx)`.
    pub fn add_color(
        &mut self,
        bucket_idx: usize,
        idx: usize,
        total_idx: usize,
        rgb: Rgb,
    ) -> Result<(), MapError> {
        if total_idx != self.led_count {
            return Err(MapError::LedCountMismatch {
                built_for: self.led_count,
                queried: total_idx,
            });
        }
        if bucket_idx >= self.bucket_size {
            return Err(MapError::BucketOutOfRange {
                bucket_idx,
                bucket_size: self.bucket_size,
            });
        }
        if idx >= self.led_count {
            return Err(MapError::LedOutOfRange {
                idx,
                led_count: self.led_count,
            });
        }
        self.colors[bucket_idx * self.led_count + idx] = rgb;
        Ok(())
    }

    /// Fetch the color for `(percent, idx)`.
    ///
    /// `total_idx` must match the LED count the map was built for. Phase and
    /// position are clamped into range rather than rejected.
    pub fn lookup(&self, percent: f32, idx: usize, total_idx: usize) -> Result<Rgb, MapError> {
        if total_idx != self.led_count {
            return Err(MapError::LedCountMismatch {
                built_for: self.led_count,
                queried: total_idx,
            });
        }
        let bucket = bucket_index(percent, self.bucket_size);
        let led = idx.min(self.led_count - 1);
        Ok(self.colors[bucket * self.led_count + led])
    }
}

/// A built color cache, in either layout.
#[derive(Debug, Clone)]
pub enum ColorMap<const CAP: usize> {
    Linear(LinearColorMap<CAP>),
    Full(FullColorMap<CAP>),
}

impl<const CAP: usize> ColorMap<CAP> {
    /// Number of discretized phase steps.
    pub fn bucket_size(&self) -> usize {
        match self {
            Self::Linear(map) => map.bucket_size(),
            Self::Full(map) => map.bucket_size(),
        }
    }

    /// Store a color during the build pass.
    pub fn add_color(
        &mut self,
        bucket_idx: usize,
        idx: usize,
        total_idx: usize,
        rgb: Rgb,
    ) -> Result<(), MapError> {
        match self {
            Self::Linear(map) => map.add_color(bucket_idx, idx, total_idx, rgb),
            Self::Full(map) => map.add_color(bucket_idx, idx, total_idx, rgb),
        }
    }

    /// Fetch the precomputed color for a phase and LED position.
    pub fn lookup(&self, percent: f32, idx: usize, total_idx: usize) -> Result<Rgb, MapError> {
        match self {
            Self::Linear(map) => Ok(map.lookup(percent, idx, total_idx)),
            Self::Full(map) => map.lookup(percent, idx, total_idx),
        }
    }
}
