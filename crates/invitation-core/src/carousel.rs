//! Swipeable slide carousel.
//!
//! The engine is a state machine driven by pointer callbacks and an explicit
//! clock. Drags and indicator jumps both end in a fixed-length transition
//! that is committed by [`Carousel::tick`] once its deadline passes; no new
//! drag or jump is accepted until the carousel is stationary again.
//!
//! Pointer moves update the drag offset in place without bumping
//! [`Carousel::revision`]; the revision only advances on discrete status
//! changes so a renderer can skip work between them.

use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::{CarouselConfig, GalleryConfig};
use crate::gesture::{Direction, GestureTracker};
use crate::image_set::wrap_index;
use crate::input::{InputSurface, ListenerScope, Point, PressTarget, Subscription};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CarouselStatus {
    #[default]
    Stationary,
    Clicked,
    ClickCanceled,
    Dragging,
    DragEnding,
    MovingLeft,
    MovingRight,
}

impl CarouselStatus {
    /// Whether a slide animation is running.
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::DragEnding | Self::MovingLeft | Self::MovingRight)
    }
}

/// Arrow control pressed at the start of the current click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PendingMove {
    #[default]
    None,
    Left,
    Right,
}

/// Published carousel state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselState {
    pub current_index: usize,
    pub status: CarouselStatus,
    /// Horizontal translate of the three-slide strip. `-width` shows the
    /// current slide; `0` shows the previous one, `-2 * width` the next.
    pub drag_offset: f32,
    pub pending_move: PendingMove,
}

/// Animation class a renderer applies to the slide strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionClass {
    None,
    Transitioning,
    MovingLeft,
    MovingRight,
}

/// Discrete outcome of a carousel callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    /// A plain click on the current slide.
    SlideTapped { index: usize },
    /// A transition started towards `to`.
    TransitionStarted { from: usize, to: usize },
    /// A transition finished; `index` is now current.
    Committed { index: usize },
}

#[derive(Clone, Copy, Debug)]
enum Commit {
    Drag { index: usize },
    Move,
}

#[derive(Clone, Copy, Debug)]
struct PendingCommit {
    started_at: Instant,
    fires_at: Instant,
    commit: Commit,
}

/// How many slides a drag released at `offset` moves by: `1`, `-1` or `0`.
///
/// `offset` is the strip translate (see [`CarouselState::drag_offset`]).
pub fn resolve_drag(offset: f32, width: f32, config: &CarouselConfig) -> isize {
    if offset <= -width * config.forward_ratio {
        1
    } else if offset >= -width * config.backward_ratio {
        -1
    } else {
        0
    }
}

#[derive(Debug)]
pub struct Carousel {
    config: CarouselConfig,
    slide_count: usize,
    state: CarouselState,
    tracker: GestureTracker,
    container_width: f32,
    move_span: (usize, usize),
    timer: Option<PendingCommit>,
    surface: Rc<InputSurface>,
    subscription: Option<Subscription>,
    revision: u64,
}

impl Carousel {
    pub fn new(slide_count: usize, config: &GalleryConfig, surface: Rc<InputSurface>) -> Self {
        Self {
            config: config.carousel,
            slide_count,
            state: CarouselState::default(),
            tracker: GestureTracker::new(config.gesture),
            container_width: 0.0,
            move_span: (0, 0),
            timer: None,
            surface,
            subscription: None,
            revision: 0,
        }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn status(&self) -> CarouselStatus {
        self.state.status
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    /// Bumped on every discrete status change, never on plain drag moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deadline of the pending transition commit, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.map(|t| t.fires_at)
    }

    /// Fraction of the running transition that has elapsed, in `[0, 1]`.
    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        self.timer.map(|t| {
            let total = t.fires_at.saturating_duration_since(t.started_at);
            if total.is_zero() {
                return 1.0;
            }
            let elapsed = now.saturating_duration_since(t.started_at);
            (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
        })
    }

    pub fn transition_class(&self) -> TransitionClass {
        match self.state.status {
            CarouselStatus::DragEnding => TransitionClass::Transitioning,
            CarouselStatus::MovingLeft => TransitionClass::MovingLeft,
            CarouselStatus::MovingRight => TransitionClass::MovingRight,
            _ => TransitionClass::None,
        }
    }

    /// Strip translate to apply, only while a drag is shown.
    pub fn translate_x(&self) -> Option<f32> {
        match self.state.status {
            CarouselStatus::Dragging | CarouselStatus::DragEnding => Some(self.state.drag_offset),
            _ => None,
        }
    }

    /// Slide indices the renderer must lay out, left to right.
    pub fn visible_slides(&self) -> Vec<usize> {
        let n = self.slide_count;
        if n == 0 {
            return Vec::new();
        }
        let current = self.state.current_index;

        match self.state.status {
            CarouselStatus::Dragging | CarouselStatus::DragEnding => [-1, 0, 1]
                .iter()
                .filter_map(|&d| wrap_index(current, d, n))
                .collect(),
            CarouselStatus::MovingRight => {
                let (src, dst) = self.move_span;
                (src..=dst).collect()
            }
            CarouselStatus::MovingLeft => {
                let (src, dst) = self.move_span;
                (dst..=src).collect()
            }
            _ => vec![current],
        }
    }

    /// Pointer pressed inside the carousel.
    ///
    /// Ignored unless stationary and `container_width` is a positive finite
    /// width. Returns whether the press was accepted.
    pub fn pointer_down(
        &mut self,
        at: Point,
        contacts: usize,
        container_width: f32,
        target: PressTarget,
    ) -> bool {
        if self.state.status != CarouselStatus::Stationary || self.slide_count == 0 {
            return false;
        }
        if !(container_width.is_finite() && container_width > 0.0) {
            warn!("Ignoring carousel press with container width {container_width}");
            return false;
        }

        self.container_width = container_width;
        self.tracker.begin(at, contacts);
        self.state.drag_offset = -container_width;
        self.state.pending_move = match target {
            PressTarget::Slide => PendingMove::None,
            PressTarget::ControlLeft => PendingMove::Left,
            PressTarget::ControlRight => PendingMove::Right,
        };
        self.subscription = Some(self.surface.subscribe(ListenerScope::Document));
        self.set_status(CarouselStatus::Clicked);
        true
    }

    /// Pointer moved anywhere on the page while a press is held.
    ///
    /// Returns whether the status changed.
    pub fn pointer_move(&mut self, at: Point, contacts: usize) -> bool {
        match self.state.status {
            CarouselStatus::Clicked => {
                let locked = self.tracker.update(at, contacts);
                if self.tracker.sample().is_multi_touch {
                    self.set_status(CarouselStatus::ClickCanceled);
                    return true;
                }
                match locked {
                    Some(Direction::Horizontal) => {
                        self.apply_drag(at.x);
                        self.set_status(CarouselStatus::Dragging);
                        true
                    }
                    Some(Direction::Vertical) => {
                        self.set_status(CarouselStatus::ClickCanceled);
                        true
                    }
                    _ => false,
                }
            }
            CarouselStatus::Dragging => {
                self.tracker.update(at, contacts);
                self.apply_drag(at.x);
                false
            }
            _ => false,
        }
    }

    /// Pointer released anywhere on the page.
    pub fn pointer_up(&mut self, now: Instant) -> Option<CarouselEvent> {
        self.subscription = None;
        self.tracker.cancel();
        let pending = std::mem::take(&mut self.state.pending_move);

        match self.state.status {
            CarouselStatus::Clicked => match pending {
                PendingMove::Left => self.step(-1, now),
                PendingMove::Right => self.step(1, now),
                PendingMove::None => {
                    self.set_status(CarouselStatus::Stationary);
                    Some(CarouselEvent::SlideTapped {
                        index: self.state.current_index,
                    })
                }
            },
            CarouselStatus::Dragging => Some(self.end_drag(now)),
            CarouselStatus::ClickCanceled => {
                self.set_status(CarouselStatus::Stationary);
                None
            }
            _ => None,
        }
    }

    /// The platform took the pointer away (touch cancel, focus loss).
    ///
    /// A drag in progress snaps back; a click is dropped.
    pub fn pointer_cancel(&mut self, now: Instant) -> Option<CarouselEvent> {
        self.subscription = None;
        self.tracker.cancel();
        self.state.pending_move = PendingMove::None;

        match self.state.status {
            CarouselStatus::Clicked | CarouselStatus::ClickCanceled => {
                self.set_status(CarouselStatus::Stationary);
                None
            }
            CarouselStatus::Dragging => {
                self.state.drag_offset = -self.container_width;
                Some(self.end_drag(now))
            }
            _ => None,
        }
    }

    /// Jump straight to `target` (indicator click). Out-of-range targets
    /// wrap modulo the slide count.
    ///
    /// Accepted only while stationary and when the wrapped target differs
    /// from the current slide.
    pub fn jump_to(&mut self, target: usize, now: Instant) -> Option<CarouselEvent> {
        if self.state.status != CarouselStatus::Stationary || self.slide_count == 0 {
            return None;
        }
        let target = target % self.slide_count;
        if target == self.state.current_index {
            return None;
        }
        Some(self.begin_move(self.state.current_index, target, now))
    }

    pub fn next(&mut self, now: Instant) -> Option<CarouselEvent> {
        if self.state.status != CarouselStatus::Stationary {
            return None;
        }
        self.step(1, now)
    }

    pub fn previous(&mut self, now: Instant) -> Option<CarouselEvent> {
        if self.state.status != CarouselStatus::Stationary {
            return None;
        }
        self.step(-1, now)
    }

    /// Commit the pending transition if its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Option<CarouselEvent> {
        let timer = self.timer?;
        if now < timer.fires_at {
            return None;
        }
        self.timer = None;

        match timer.commit {
            Commit::Drag { index } => {
                self.state.current_index = index;
                self.state.drag_offset = -self.container_width;
            }
            Commit::Move => {
                self.state.pending_move = PendingMove::None;
            }
        }
        self.set_status(CarouselStatus::Stationary);
        debug!("Carousel settled on slide {}", self.state.current_index);
        Some(CarouselEvent::Committed {
            index: self.state.current_index,
        })
    }

    /// Drop timers and listeners, as on unmount. The carousel is left
    /// stationary on its current slide.
    pub fn teardown(&mut self) {
        self.timer = None;
        self.subscription = None;
        self.tracker.cancel();
        self.state.pending_move = PendingMove::None;
        self.state.drag_offset = -self.container_width;
        if self.state.status != CarouselStatus::Stationary {
            self.set_status(CarouselStatus::Stationary);
        }
    }

    fn apply_drag(&mut self, pointer_x: f32) {
        let width = self.container_width;
        let moved = (pointer_x - self.tracker.start().x).clamp(-width, width);
        self.state.drag_offset = moved - width;
    }

    fn end_drag(&mut self, now: Instant) -> CarouselEvent {
        let width = self.container_width;
        let delta = resolve_drag(self.state.drag_offset, width, &self.config);
        let from = self.state.current_index;
        let to = wrap_index(from, delta, self.slide_count).unwrap_or(from);

        self.state.drag_offset = -width * (delta as f32 + 1.0);
        self.schedule(Commit::Drag { index: to }, now);
        self.set_status(CarouselStatus::DragEnding);
        debug!("Drag released: slide {from} -> {to}");
        CarouselEvent::TransitionStarted { from, to }
    }

    fn step(&mut self, delta: isize, now: Instant) -> Option<CarouselEvent> {
        let from = self.state.current_index;
        let to = wrap_index(from, delta, self.slide_count)?;
        if to == from {
            self.set_status(CarouselStatus::Stationary);
            return None;
        }
        Some(self.begin_move(from, to, now))
    }

    fn begin_move(&mut self, from: usize, to: usize, now: Instant) -> CarouselEvent {
        self.state.current_index = to;
        self.move_span = (from, to);
        self.schedule(Commit::Move, now);
        // Animation direction follows index order, not the circular step.
        let status = if from < to {
            CarouselStatus::MovingRight
        } else {
            CarouselStatus::MovingLeft
        };
        self.set_status(status);
        CarouselEvent::TransitionStarted { from, to }
    }

    fn schedule(&mut self, commit: Commit, now: Instant) {
        self.timer = Some(PendingCommit {
            started_at: now,
            fires_at: now + self.transition(),
            commit,
        });
    }

    fn transition(&self) -> Duration {
        self.config.transition()
    }

    fn set_status(&mut self, status: CarouselStatus) {
        if self.state.status != status {
            debug!("Carousel {:?} -> {:?}", self.state.status, status);
            self.state.status = status;
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_drag_bands() {
        let config = CarouselConfig::default();
        let w = 400.0;
        assert_eq!(resolve_drag(-w, w, &config), 0);
        assert_eq!(resolve_drag(-w - 100.0, w, &config), 1);
        assert_eq!(resolve_drag(-w + 100.0, w, &config), -1);
        assert_eq!(resolve_drag(-w - 20.0, w, &config), 0);
        assert_eq!(resolve_drag(-w + 20.0, w, &config), 0);
    }

    #[test]
    fn resolve_drag_boundaries_are_inclusive() {
        let config = CarouselConfig::default();
        let w = 400.0;
        assert_eq!(resolve_drag(-440.0, w, &config), 1);
        assert_eq!(resolve_drag(-439.0, w, &config), 0);
        assert_eq!(resolve_drag(-360.0, w, &config), -1);
        assert_eq!(resolve_drag(-361.0, w, &config), 0);
    }
}
