use crate::config::ScrollConfig;

/// Allowed range of the content offset.
///
/// The offset is the vertical position of the content centre relative to the
/// viewport centre. `top` shows the first rows; the other bound shows the
/// last rows. The two are always ordered before clamping, so the sign of
/// `viewport_height - content_height` does not matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBounds {
    top: f32,
    lower: f32,
    upper: f32,
}

impl ScrollBounds {
    pub fn new(viewport_height: f32, content_height: f32) -> Self {
        let area_half = viewport_height / 2.0;
        let content_half = content_height / 2.0;
        let top = area_half - content_half;
        let bottom = content_half - area_half;

        // Content that fits stays pinned to the top.
        if content_height <= viewport_height {
            return Self {
                top,
                lower: top,
                upper: top,
            };
        }

        Self {
            top,
            lower: top.min(bottom),
            upper: top.max(bottom),
        }
    }

    pub const fn top(&self) -> f32 {
        self.top
    }

    pub const fn lower(&self) -> f32 {
        self.lower
    }

    pub const fn upper(&self) -> f32 {
        self.upper
    }

    pub fn contains(&self, offset: f32) -> bool {
        (self.lower..=self.upper).contains(&offset)
    }

    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(self.lower, self.upper)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// A finger is on the content; the offset follows it 1:1.
    Tracking { last_y: f32, last_time: f64 },
    /// Inertial motion after a fling.
    Decelerating { last_time: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollController {
    config: ScrollConfig,
    bounds: ScrollBounds,
    offset: f32,
    velocity: f32,
    phase: ScrollPhase,
}

impl ScrollController {
    pub const fn new(bounds: ScrollBounds, config: ScrollConfig) -> Self {
        Self {
            config,
            bounds,
            offset: bounds.top(),
            velocity: 0.0,
            phase: ScrollPhase::Idle,
        }
    }

    pub const fn offset(&self) -> f32 {
        self.offset
    }

    pub const fn velocity(&self) -> f32 {
        self.velocity
    }

    pub const fn bounds(&self) -> ScrollBounds {
        self.bounds
    }

    pub const fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub const fn is_tracking(&self) -> bool {
        matches!(self.phase, ScrollPhase::Tracking { .. })
    }

    pub const fn is_decelerating(&self) -> bool {
        matches!(self.phase, ScrollPhase::Decelerating { .. })
    }

    /// Halts any motion, including a running fling.
    pub const fn stop(&mut self) {
        self.velocity = 0.0;
        self.phase = ScrollPhase::Idle;
    }

    pub const fn begin(&mut self, y: f32, time: f64) {
        self.velocity = 0.0;
        self.phase = ScrollPhase::Tracking {
            last_y: y,
            last_time: time,
        };
    }

    pub fn track(&mut self, y: f32, time: f64) {
        let ScrollPhase::Tracking { last_y, last_time } = self.phase else {
            return;
        };

        let delta = y - last_y;
        let elapsed = (time - last_time) as f32;
        self.offset = self.bounds.clamp(self.offset + delta);
        if elapsed > 0.0 {
            self.velocity = delta / elapsed;
        }
        self.phase = ScrollPhase::Tracking {
            last_y: y,
            last_time: time,
        };
    }

    /// Ends tracking. Fast releases start decelerating from `time`.
    pub fn release(&mut self, time: f64) {
        if !self.is_tracking() {
            return;
        }

        if self.velocity.abs() > self.config.fling_threshold {
            self.phase = ScrollPhase::Decelerating { last_time: time };
        } else {
            self.stop();
        }
    }

    pub const fn cancel(&mut self) {
        self.stop();
    }

    /// Advances a fling to `time`. Returns whether the content is still moving.
    pub fn step(&mut self, time: f64) -> bool {
        let ScrollPhase::Decelerating { last_time } = self.phase else {
            return false;
        };

        let elapsed = (time - last_time) as f32;
        if elapsed <= 0.0 {
            return true;
        }

        self.velocity *= self
            .config
            .decay_rate
            .powf(elapsed * self.config.reference_frame_rate);
        let desired = self.velocity.mul_add(elapsed, self.offset);
        self.offset = self.bounds.clamp(desired);

        let hit_boundary = !self.bounds.contains(desired);
        if hit_boundary || self.velocity.abs() < self.config.stop_threshold {
            self.stop();
            return false;
        }

        self.phase = ScrollPhase::Decelerating { last_time: time };
        true
    }
}
