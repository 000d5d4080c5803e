//! Full-screen single photo viewer.
//!
//! A [`PhotoViewer`] is built fresh each time the overlay opens and owns
//! its own index, independent of the carousel. Swipes past the threshold
//! change photo, a tap closes, and pinch or zoomed-in gestures do nothing.

use std::path::Path;
use std::rc::Rc;

use tracing::{debug, info};

use crate::config::{GalleryConfig, ViewerConfig};
use crate::error::{InvitationError, Result};
use crate::gesture::{GestureEnd, GestureTracker};
use crate::image_set::{wrap_index, ImageSet};
use crate::input::{InputSurface, ListenerScope, Point, Subscription};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewerState {
    pub current_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    IndexChanged { index: usize },
    CloseRequested,
}

/// Horizontal strip of indicator dots that keeps the active dot in view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorStrip {
    pitch: f32,
    count: usize,
    viewport_width: f32,
    scroll: f32,
}

impl IndicatorStrip {
    pub fn new(count: usize, pitch: f32) -> Self {
        Self {
            pitch,
            count,
            viewport_width: f32::INFINITY,
            scroll: 0.0,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.count as f32 * self.pitch
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    /// Centre dot `index` in the visible part of the strip, clamped to the
    /// scrollable range.
    pub fn bring_into_view(&mut self, index: usize) {
        let max_scroll = (self.content_width() - self.viewport_width).max(0.0);
        let centre = index as f32 * self.pitch + self.pitch / 2.0;
        let target = centre - self.viewport_width / 2.0;
        self.scroll = if target.is_finite() {
            target.clamp(0.0, max_scroll)
        } else {
            0.0
        };
    }

    fn set_viewport_width(&mut self, width: f32, index: usize) {
        self.viewport_width = width.max(0.0);
        self.bring_into_view(index);
    }
}

#[derive(Debug)]
pub struct PhotoViewer {
    images: ImageSet,
    config: ViewerConfig,
    state: ViewerState,
    tracker: GestureTracker,
    strip: IndicatorStrip,
    closed: bool,
    subscription: Option<Subscription>,
}

impl PhotoViewer {
    /// Open on `initial` (wrapped into range). Fails on an empty set.
    pub fn open(
        images: ImageSet,
        initial: usize,
        config: &GalleryConfig,
        surface: &Rc<InputSurface>,
    ) -> Result<Self> {
        let current_index =
            wrap_index(initial, 0, images.len()).ok_or(InvitationError::EmptyImageSet)?;
        let mut strip = IndicatorStrip::new(images.len(), config.viewer.indicator_pitch);
        strip.bring_into_view(current_index);
        info!("Photo viewer opened at {}/{}", current_index + 1, images.len());

        Ok(Self {
            images,
            config: config.viewer,
            state: ViewerState { current_index },
            tracker: GestureTracker::new(config.gesture),
            strip,
            closed: false,
            subscription: Some(surface.subscribe(ListenerScope::Overlay)),
        })
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_photo(&self) -> Option<&Path> {
        self.images.get(self.state.current_index)
    }

    /// Header text such as `"3 / 5"`.
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.state.current_index + 1, self.images.len())
    }

    pub fn indicator_strip(&self) -> &IndicatorStrip {
        &self.strip
    }

    pub fn set_indicator_viewport(&mut self, width: f32) {
        self.strip
            .set_viewport_width(width, self.state.current_index);
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn next(&mut self) -> Option<ViewerEvent> {
        self.step(1)
    }

    pub fn previous(&mut self) -> Option<ViewerEvent> {
        self.step(-1)
    }

    /// Indicator click: go straight to `index` (wrapped into range).
    pub fn jump_to(&mut self, index: usize) -> Option<ViewerEvent> {
        let target = wrap_index(index, 0, self.images.len())?;
        self.set_index(target)
    }

    pub fn pointer_down(&mut self, at: Point, contacts: usize) {
        if !self.closed {
            self.tracker.begin(at, contacts);
        }
    }

    pub fn pointer_move(&mut self, at: Point, contacts: usize) {
        if !self.closed {
            self.tracker.update(at, contacts);
        }
    }

    /// Release at `at`; `zoom_scale` is the visual zoom reported by the host.
    pub fn pointer_up(&mut self, at: Point, zoom_scale: f32) -> Option<ViewerEvent> {
        if self.closed {
            return None;
        }

        match self.tracker.finish(at, zoom_scale)? {
            GestureEnd::Swipe { delta_x } if delta_x.abs() > self.config.swipe_threshold => {
                if delta_x > 0.0 {
                    self.previous()
                } else {
                    self.next()
                }
            }
            GestureEnd::Tap => Some(ViewerEvent::CloseRequested),
            GestureEnd::Swipe { .. } | GestureEnd::Vertical | GestureEnd::Suppressed => None,
        }
    }

    pub fn pointer_cancel(&mut self) {
        self.tracker.cancel();
    }

    /// Mark the viewer closed and release its listener.
    ///
    /// Returns `true` only for the first call.
    pub fn close(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.closed = true;
        self.tracker.cancel();
        self.subscription = None;
        info!("Photo viewer closed");
        true
    }

    fn step(&mut self, delta: isize) -> Option<ViewerEvent> {
        let target = wrap_index(self.state.current_index, delta, self.images.len())?;
        self.set_index(target)
    }

    fn set_index(&mut self, index: usize) -> Option<ViewerEvent> {
        if self.closed || index == self.state.current_index {
            return None;
        }
        debug!("Viewer photo {} -> {}", self.state.current_index, index);
        self.state.current_index = index;
        self.strip.bring_into_view(index);
        Some(ViewerEvent::IndexChanged { index })
    }
}
