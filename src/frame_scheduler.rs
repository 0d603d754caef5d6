//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::color_map::MapError;
use crate::renderer::StripRenderer;
use crate::OutputDriver;

/// Default target frame rate.
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// Tracks frame deadlines with drift correction, drives the renderer and the
/// output driver, and tells the caller how long to sleep. If the schedule
/// falls behind by more than two frames, the backlog is skipped instead of
/// replayed.
pub struct FrameScheduler<O: OutputDriver, const MAX_LEDS: usize, const CAP: usize> {
    output: O,
    renderer: StripRenderer<MAX_LEDS, CAP>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O: OutputDriver, const MAX_LEDS: usize, const CAP: usize> FrameScheduler<O, MAX_LEDS, CAP> {
    /// Create a scheduler at the default frame rate.
    pub fn new(renderer: StripRenderer<MAX_LEDS, CAP>, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a scheduler with a custom frame duration.
    pub fn with_frame_duration(
        renderer: StripRenderer<MAX_LEDS, CAP>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Render one frame, write it to the driver, and return timing info.
    ///
    /// The caller should wait until `next_deadline` before calling `tick`
    /// again. Lookup errors from the renderer propagate without advancing the
    /// schedule.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, MapError> {
        // Drift correction: if we've fallen too far behind, reset to now.
        // This prevents catch-up bursts after long stalls.
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let frame = self.renderer.render(now)?;
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &StripRenderer<MAX_LEDS, CAP> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut StripRenderer<MAX_LEDS, CAP> {
        &mut self.renderer
    }
}
