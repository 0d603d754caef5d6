//! Per-frame strip rendering from a precomputed color map.

use embassy_time::Instant;
use smart_leds::RGB8;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color_map::MapError;
use crate::pattern::PatternSlot;
use crate::phase::PhaseClock;

/// Fills a fixed frame buffer from a pattern's color map, one lookup per LED
/// per frame.
///
/// `MAX_LEDS` bounds the frame buffer; `led_count` is the strip length
/// actually rendered (and, for position-dependent patterns, the length their
/// full maps were built for).
pub struct StripRenderer<const MAX_LEDS: usize, const CAP: usize> {
    slot: PatternSlot<CAP>,
    clock: PhaseClock,
    led_count: usize,
    frame_buffer: [RGB8; MAX_LEDS],
}

impl<const MAX_LEDS: usize, const CAP: usize> StripRenderer<MAX_LEDS, CAP> {
    /// Create a renderer for the first `led_count` LEDs of the buffer.
    ///
    /// A `led_count` beyond `MAX_LEDS` is truncated to the buffer.
    pub fn new(slot: PatternSlot<CAP>, clock: PhaseClock, led_count: usize) -> Self {
        Self {
            slot,
            clock,
            led_count: led_count.min(MAX_LEDS),
            frame_buffer: [RGB8::default(); MAX_LEDS],
        }
    }

    pub fn led_count(&self) -> usize {
        self.led_count
    }

    pub fn pattern(&self) -> &PatternSlot<CAP> {
        &self.slot
    }

    /// Swap in a new pattern; the old cached map goes with it.
    pub fn set_pattern(&mut self, slot: PatternSlot<CAP>) {
        #[cfg(feature = "esp32-log")]
        println!("pattern -> {}", slot.id().as_str());
        self.slot = slot;
    }

    /// Render one frame.
    ///
    /// The first call triggers the pattern's one-time table build; later
    /// calls are pure lookups.
    pub fn render(&mut self, now: Instant) -> Result<&[RGB8], MapError> {
        let percent = self.clock.percent(now);
        let led_count = self.led_count;

        let map = self.slot.color_map()?;
        for (idx, led) in self.frame_buffer[..led_count].iter_mut().enumerate() {
            *led = map.lookup(percent, idx, led_count)?.into();
        }
        Ok(&self.frame_buffer[..led_count])
    }
}
