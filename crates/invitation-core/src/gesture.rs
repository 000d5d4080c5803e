//! Low-level gesture tracking: dead-zone direction lock and pinch suppression.
//!
//! A [`GestureTracker`] buffers every pointer sample in a plain mutable
//! [`GestureSample`]. Callers only learn about discrete changes: the moment
//! the direction locks, and the classified [`GestureEnd`] on release.

use crate::config::GestureConfig;
use crate::consts::MULTI_TOUCH_CONTACTS;
use crate::input::Point;

/// Axis a gesture was locked to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Transient state of the gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    pub start_x: f32,
    pub start_y: f32,
    pub current_delta_x: f32,
    pub current_delta_y: f32,
    pub direction: Direction,
    pub is_dragging: bool,
    pub is_multi_touch: bool,
}

/// How a finished gesture should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEnd {
    /// Released without ever leaving the dead zone.
    Tap,
    /// Locked horizontal; `delta_x` is the net displacement at release.
    Swipe { delta_x: f32 },
    /// Locked vertical (page scroll or dismiss motion).
    Vertical,
    /// Pinch or zoomed-in content: no action may follow.
    Suppressed,
}

/// Lock a displacement to an axis once it leaves the dead zone.
///
/// Ties go to vertical so that diagonal motion never swipes.
pub fn classify(delta_x: f32, delta_y: f32, dead_zone: f32) -> Direction {
    let (ax, ay) = (delta_x.abs(), delta_y.abs());
    if ax <= dead_zone && ay <= dead_zone {
        Direction::None
    } else if ax > ay {
        Direction::Horizontal
    } else {
        Direction::Vertical
    }
}

#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    config: GestureConfig,
    sample: GestureSample,
    active: bool,
}

impl GestureTracker {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            sample: GestureSample::default(),
            active: false,
        }
    }

    /// Start a gesture at `at`.
    ///
    /// An extra contact landing while a gesture is already active does not
    /// start a new one; it flags the current gesture as multi-touch.
    pub fn begin(&mut self, at: Point, contacts: usize) {
        if self.active && contacts >= MULTI_TOUCH_CONTACTS {
            self.sample.is_multi_touch = true;
            return;
        }

        self.sample = GestureSample {
            start_x: at.x,
            start_y: at.y,
            is_multi_touch: contacts >= MULTI_TOUCH_CONTACTS,
            ..GestureSample::default()
        };
        self.active = true;
    }

    /// Record a pointer move. Returns the direction on the call that locks it.
    pub fn update(&mut self, at: Point, contacts: usize) -> Option<Direction> {
        if !self.active {
            return None;
        }
        if contacts >= MULTI_TOUCH_CONTACTS {
            self.sample.is_multi_touch = true;
        }

        self.record(at);

        if self.sample.is_multi_touch || self.sample.direction != Direction::None {
            return None;
        }

        let direction = classify(
            self.sample.current_delta_x,
            self.sample.current_delta_y,
            self.config.dead_zone,
        );
        if direction == Direction::None {
            return None;
        }

        self.sample.direction = direction;
        self.sample.is_dragging = direction == Direction::Horizontal;
        Some(direction)
    }

    /// Finish the gesture at `at` and classify it.
    ///
    /// `zoom_scale` is the visual zoom the host reports at release (1.0 when
    /// not zoomed). Returns `None` when no gesture was active.
    pub fn finish(&mut self, at: Point, zoom_scale: f32) -> Option<GestureEnd> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.record(at);

        if self.sample.is_multi_touch || zoom_scale > self.config.zoom_tolerance {
            return Some(GestureEnd::Suppressed);
        }

        Some(match self.sample.direction {
            Direction::Horizontal => GestureEnd::Swipe {
                delta_x: self.sample.current_delta_x,
            },
            Direction::Vertical => GestureEnd::Vertical,
            Direction::None => GestureEnd::Tap,
        })
    }

    /// Abandon the gesture without classifying it.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.sample.direction
    }

    pub fn sample(&self) -> &GestureSample {
        &self.sample
    }

    pub fn start(&self) -> Point {
        Point::new(self.sample.start_x, self.sample.start_y)
    }

    fn record(&mut self, at: Point) {
        let (dx, dy) = at.delta_from(self.start());
        self.sample.current_delta_x = dx;
        self.sample.current_delta_y = dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_inside_dead_zone_is_none() {
        assert_eq!(classify(10.0, -10.0, 10.0), Direction::None);
        assert_eq!(classify(10.5, 0.0, 10.0), Direction::Horizontal);
        assert_eq!(classify(3.0, -11.0, 10.0), Direction::Vertical);
    }

    #[test]
    fn diagonal_tie_is_vertical() {
        assert_eq!(classify(20.0, 20.0, 10.0), Direction::Vertical);
    }
}
