#![allow(dead_code)]

use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use invitation_core::carousel::Carousel;
use invitation_core::config::GalleryConfig;
use invitation_core::image_set::ImageSet;
use invitation_core::input::{InputSurface, Point};

/// Carousel width used throughout the tests.
pub const WIDTH: f32 = 400.0;

/// Build an image set of `n` fake photo paths.
pub fn image_set(n: usize) -> ImageSet {
    (0..n)
        .map(|i| PathBuf::from(format!("photos/{i:02}.jpg")))
        .collect()
}

/// Config whose photo list has `n` entries.
pub fn config_with_photos(n: usize) -> GalleryConfig {
    GalleryConfig {
        photos: image_set(n).iter().map(|p| p.to_path_buf()).collect(),
        ..GalleryConfig::default()
    }
}

pub fn carousel(n: usize) -> (Carousel, Rc<InputSurface>) {
    let surface = InputSurface::new();
    let carousel = Carousel::new(n, &GalleryConfig::default(), Rc::clone(&surface));
    (carousel, surface)
}

pub fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Instant just past the default 300ms transition.
pub fn after_transition(start: Instant) -> Instant {
    start + Duration::from_millis(301)
}

pub fn ms(start: Instant, millis: u64) -> Instant {
    start + Duration::from_millis(millis)
}
