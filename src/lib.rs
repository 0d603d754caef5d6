//! Precomputed color tables for addressable LED strips.
//!
//! A [`pattern::Pattern`] is a pure formula from animation phase (and
//! optionally LED position) to a color. Patterns sample themselves once into a
//! [`color_map::ColorMap`] so a real-time driver can fetch colors by array
//! indexing instead of re-evaluating trigonometry every frame.
//!
//! The crate performs no I/O and no locking. A cached map is mutable state
//! owned by its pattern: rebuilds (`reset` + next access) must not race with
//! lookups from another context — build during setup, read during animation.

#![no_std]

pub mod color;
pub mod color_map;
pub mod curve;
pub mod frame_scheduler;
pub mod pattern;
pub mod phase;
pub mod renderer;

pub use color::{ColorGradient, ControlPoint, Rgb};
pub use color_map::{ColorMap, FullColorMap, LinearColorMap, MapError};
pub use curve::{gaussian_value, s_curve, sharp_s_ramp};
pub use frame_scheduler::FrameScheduler;
pub use pattern::{
    ChannelWave, ChannelWeights, Comet, Pastel, Pattern, PatternError, PatternId, PatternSlot,
    Rainbow, Shot, Sparkshot, Wubwub, Yoyo,
};
pub use phase::PhaseClock;
pub use renderer::StripRenderer;

pub use embassy_time::{Duration, Instant};
pub use smart_leds::RGB8;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The renderer is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[RGB8]);
}
