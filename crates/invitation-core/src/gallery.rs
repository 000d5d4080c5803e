//! Gallery card: carousel, all-photos grid and photo viewer wired together.
//!
//! [`Gallery::handle`] is the single entry point for page input. It routes
//! each [`GalleryInput`] to the carousel or the open overlay and reports
//! what happened as [`GalleryEvent`]s. Deferred work (transition commits,
//! the delayed viewer open after the grid closes) runs in [`Gallery::tick`].

use std::rc::Rc;
use std::time::Instant;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::carousel::{Carousel, CarouselEvent, CarouselStatus};
use crate::config::GalleryConfig;
use crate::image_set::ImageSet;
use crate::input::{InputSurface, Point, PressTarget};
use crate::modal::{ModalConfig, ModalHost, ModalSlot};
use crate::viewer::{PhotoViewer, ViewerEvent};

pub const VIEWER_CLASS: &str = "photo-viewer-modal";
pub const ALL_PHOTOS_CLASS: &str = "all-photo-modal";

/// Content of the page's overlay slot.
#[derive(Debug)]
pub enum Overlay {
    Viewer(PhotoViewer),
    AllPhotos,
}

fn one() -> usize {
    1
}

fn unit_zoom() -> f32 {
    1.0
}

/// Page input, as delivered by a host or a replay script.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GalleryInput {
    CarouselDown {
        at: Point,
        #[serde(default = "one")]
        contacts: usize,
        width: f32,
        #[serde(default)]
        target: PressTarget,
    },
    CarouselMove {
        at: Point,
        #[serde(default = "one")]
        contacts: usize,
    },
    CarouselUp,
    CarouselCancel,
    CarouselNext,
    CarouselPrevious,
    IndicatorClicked {
        index: usize,
    },
    OpenAllPhotos,
    AllPhotosSelected {
        index: usize,
    },
    BackgroundClicked,
    ViewerDown {
        at: Point,
        #[serde(default = "one")]
        contacts: usize,
    },
    ViewerMove {
        at: Point,
        #[serde(default = "one")]
        contacts: usize,
    },
    ViewerUp {
        at: Point,
        #[serde(default = "unit_zoom")]
        zoom_scale: f32,
    },
    ViewerCancel,
    ViewerNext,
    ViewerPrevious,
    ViewerIndicator {
        index: usize,
    },
    ViewerClose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryEvent {
    Carousel(CarouselEvent),
    Viewer(ViewerEvent),
    ViewerOpened { index: usize },
    AllPhotosOpened,
    OverlayClosed,
}

#[derive(Debug)]
pub struct Gallery {
    images: ImageSet,
    config: GalleryConfig,
    surface: Rc<InputSurface>,
    carousel: Carousel,
    modal: ModalSlot<Overlay>,
    pending_viewer: Option<(Instant, usize)>,
}

impl Gallery {
    pub fn new(config: GalleryConfig) -> Self {
        Self::with_images(config.image_set(), config)
    }

    pub fn with_images(images: ImageSet, config: GalleryConfig) -> Self {
        let surface = InputSurface::new();
        let carousel = Carousel::new(images.len(), &config, Rc::clone(&surface));
        Self {
            images,
            config,
            surface,
            carousel,
            modal: ModalSlot::new(),
            pending_viewer: None,
        }
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn surface(&self) -> &Rc<InputSurface> {
        &self.surface
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn overlay(&self) -> Option<&ModalConfig<Overlay>> {
        self.modal.current()
    }

    pub fn viewer(&self) -> Option<&PhotoViewer> {
        match self.modal.current().map(|c| &c.content) {
            Some(Overlay::Viewer(viewer)) => Some(viewer),
            _ => None,
        }
    }

    pub fn viewer_mut(&mut self) -> Option<&mut PhotoViewer> {
        match self.modal.current_mut().map(|c| &mut c.content) {
            Some(Overlay::Viewer(viewer)) => Some(viewer),
            _ => None,
        }
    }

    pub fn is_all_photos_open(&self) -> bool {
        matches!(
            self.modal.current().map(|c| &c.content),
            Some(Overlay::AllPhotos)
        )
    }

    /// Earliest instant at which [`Gallery::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let pending = self.pending_viewer.map(|(at, _)| at);
        match (self.carousel.next_deadline(), pending) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn handle(&mut self, input: GalleryInput, now: Instant) -> Vec<GalleryEvent> {
        let mut events = Vec::new();
        let overlay_open = self.modal.is_open();

        match input {
            GalleryInput::CarouselDown {
                at,
                contacts,
                width,
                target,
            } => {
                if !overlay_open {
                    self.carousel.pointer_down(at, contacts, width, target);
                }
            }
            GalleryInput::CarouselMove { at, contacts } => {
                self.carousel.pointer_move(at, contacts);
            }
            GalleryInput::CarouselUp => {
                if let Some(event) = self.carousel.pointer_up(now) {
                    events.push(GalleryEvent::Carousel(event));
                    if let CarouselEvent::SlideTapped { index } = event {
                        self.open_viewer(index, &mut events);
                    }
                }
            }
            GalleryInput::CarouselCancel => {
                push_carousel(&mut events, self.carousel.pointer_cancel(now));
            }
            GalleryInput::CarouselNext => {
                if !overlay_open {
                    push_carousel(&mut events, self.carousel.next(now));
                }
            }
            GalleryInput::CarouselPrevious => {
                if !overlay_open {
                    push_carousel(&mut events, self.carousel.previous(now));
                }
            }
            GalleryInput::IndicatorClicked { index } => {
                if !overlay_open {
                    push_carousel(&mut events, self.carousel.jump_to(index, now));
                }
            }
            GalleryInput::OpenAllPhotos => {
                if !overlay_open {
                    self.modal.open_modal(
                        ModalConfig::new(Overlay::AllPhotos, ALL_PHOTOS_CLASS)
                            .close_on_click_background(true),
                    );
                    events.push(GalleryEvent::AllPhotosOpened);
                }
            }
            GalleryInput::AllPhotosSelected { index } => {
                self.select_from_grid(index, now, &mut events);
            }
            GalleryInput::BackgroundClicked => {
                if self.modal.click_background() {
                    events.push(GalleryEvent::OverlayClosed);
                }
            }
            GalleryInput::ViewerDown { at, contacts } => {
                if let Some(viewer) = self.viewer_mut() {
                    viewer.pointer_down(at, contacts);
                }
            }
            GalleryInput::ViewerMove { at, contacts } => {
                if let Some(viewer) = self.viewer_mut() {
                    viewer.pointer_move(at, contacts);
                }
            }
            GalleryInput::ViewerUp { at, zoom_scale } => {
                let event = self
                    .viewer_mut()
                    .and_then(|viewer| viewer.pointer_up(at, zoom_scale));
                self.apply_viewer_event(event, &mut events);
            }
            GalleryInput::ViewerCancel => {
                if let Some(viewer) = self.viewer_mut() {
                    viewer.pointer_cancel();
                }
            }
            GalleryInput::ViewerNext => {
                let event = self.viewer_mut().and_then(PhotoViewer::next);
                self.apply_viewer_event(event, &mut events);
            }
            GalleryInput::ViewerPrevious => {
                let event = self.viewer_mut().and_then(PhotoViewer::previous);
                self.apply_viewer_event(event, &mut events);
            }
            GalleryInput::ViewerIndicator { index } => {
                let event = self.viewer_mut().and_then(|viewer| viewer.jump_to(index));
                self.apply_viewer_event(event, &mut events);
            }
            GalleryInput::ViewerClose => {
                self.apply_viewer_event(Some(ViewerEvent::CloseRequested), &mut events);
            }
        }

        events
    }

    /// Run deferred work whose deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Vec<GalleryEvent> {
        let mut events = Vec::new();
        push_carousel(&mut events, self.carousel.tick(now));

        if let Some((at, index)) = self.pending_viewer {
            if now >= at {
                self.pending_viewer = None;
                self.open_viewer(index, &mut events);
            }
        }
        events
    }

    /// Close the open viewer, if any. Repeated calls are no-ops.
    pub fn close_viewer(&mut self) -> bool {
        let Some(viewer) = self.viewer_mut() else {
            return false;
        };
        viewer.close();
        self.modal.close_modal(None);
        true
    }

    /// Unmount: cancel timers, release listeners, close overlays.
    pub fn teardown(&mut self) {
        self.carousel.teardown();
        self.pending_viewer = None;
        if let Some(Overlay::Viewer(mut viewer)) = self.modal.take() {
            viewer.close();
        }
    }

    fn apply_viewer_event(&mut self, event: Option<ViewerEvent>, events: &mut Vec<GalleryEvent>) {
        match event {
            Some(ViewerEvent::CloseRequested) => {
                if self.close_viewer() {
                    events.push(GalleryEvent::OverlayClosed);
                }
            }
            Some(other) => events.push(GalleryEvent::Viewer(other)),
            None => {}
        }
    }

    fn select_from_grid(&mut self, index: usize, now: Instant, events: &mut Vec<GalleryEvent>) {
        if !self.is_all_photos_open() || self.carousel.status() != CarouselStatus::Stationary {
            return;
        }
        self.modal.close_modal(None);
        events.push(GalleryEvent::OverlayClosed);
        self.pending_viewer = Some((now + self.config.all_photos.reopen_delay(), index));
        debug!("Viewer for photo {index} scheduled after grid close");
    }

    fn open_viewer(&mut self, index: usize, events: &mut Vec<GalleryEvent>) {
        match PhotoViewer::open(self.images.clone(), index, &self.config, &self.surface) {
            Ok(viewer) => {
                let index = viewer.current_index();
                self.modal
                    .open_modal(ModalConfig::new(Overlay::Viewer(viewer), VIEWER_CLASS));
                events.push(GalleryEvent::ViewerOpened { index });
            }
            Err(e) => warn!("Photo viewer not opened: {e}"),
        }
    }
}

impl Drop for Gallery {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn push_carousel(events: &mut Vec<GalleryEvent>, event: Option<CarouselEvent>) {
    if let Some(event) = event {
        events.push(GalleryEvent::Carousel(event));
    }
}
