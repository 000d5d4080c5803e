mod common;

use common::{image_set, pt};
use invitation_core::config::GalleryConfig;
use invitation_core::error::InvitationError;
use invitation_core::input::{InputSurface, ListenerScope};
use invitation_core::viewer::{PhotoViewer, ViewerEvent};

fn open(n: usize, initial: usize) -> PhotoViewer {
    let surface = InputSurface::new();
    PhotoViewer::open(image_set(n), initial, &GalleryConfig::default(), &surface)
        .expect("viewer should open on a non-empty set")
}

fn swipe(viewer: &mut PhotoViewer, delta_x: f32) -> Option<ViewerEvent> {
    viewer.pointer_down(pt(200.0, 300.0), 1);
    viewer.pointer_move(pt(200.0 + delta_x / 2.0, 301.0), 1);
    viewer.pointer_up(pt(200.0 + delta_x, 302.0), 1.0)
}

// ---------------------------------------------------------------------------
// Opening
// ---------------------------------------------------------------------------

#[test]
fn test_open_on_empty_set_fails() {
    let surface = InputSurface::new();
    let result = PhotoViewer::open(image_set(0), 0, &GalleryConfig::default(), &surface);
    assert!(matches!(result, Err(InvitationError::EmptyImageSet)));
    assert_eq!(surface.active_count(), 0);
}

#[test]
fn test_open_wraps_initial_index() {
    let viewer = open(5, 7);
    assert_eq!(viewer.current_index(), 2);
    assert_eq!(viewer.counter_label(), "3 / 5");
}

#[test]
fn test_current_photo_follows_index() {
    let mut viewer = open(3, 0);
    viewer.next();
    assert_eq!(
        viewer.current_photo().map(|p| p.to_path_buf()),
        Some(std::path::PathBuf::from("photos/01.jpg"))
    );
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn test_next_n_times_returns_to_start() {
    for n in 1..=7 {
        for k in 0..n {
            let mut viewer = open(n, k);
            for _ in 0..n {
                viewer.next();
            }
            assert_eq!(viewer.current_index(), k, "n={n} k={k}");
        }
    }
}

#[test]
fn test_previous_wraps_from_first() {
    let mut viewer = open(4, 0);
    assert_eq!(viewer.previous(), Some(ViewerEvent::IndexChanged { index: 3 }));
}

#[test]
fn test_indicator_jumps_directly() {
    let mut viewer = open(5, 0);
    assert_eq!(viewer.jump_to(4), Some(ViewerEvent::IndexChanged { index: 4 }));
    assert_eq!(viewer.jump_to(4), None);
}

#[test]
fn test_index_change_scrolls_indicator_strip() {
    let mut viewer = open(30, 0);
    viewer.set_indicator_viewport(160.0);
    assert_eq!(viewer.indicator_strip().scroll_offset(), 0.0);
    viewer.jump_to(15);
    let pitch = GalleryConfig::default().viewer.indicator_pitch;
    let expected = 15.0 * pitch + pitch / 2.0 - 80.0;
    assert_eq!(viewer.indicator_strip().scroll_offset(), expected);
}

// ---------------------------------------------------------------------------
// Gestures
// ---------------------------------------------------------------------------

#[test]
fn test_swipe_left_past_threshold_advances() {
    let mut viewer = open(5, 2);
    assert_eq!(
        swipe(&mut viewer, -80.0),
        Some(ViewerEvent::IndexChanged { index: 3 })
    );
    assert_eq!(viewer.current_index(), 3);
}

#[test]
fn test_swipe_right_past_threshold_retreats() {
    let mut viewer = open(5, 2);
    assert_eq!(
        swipe(&mut viewer, 120.0),
        Some(ViewerEvent::IndexChanged { index: 1 })
    );
}

#[test]
fn test_short_swipe_is_ignored() {
    let mut viewer = open(5, 2);
    assert_eq!(swipe(&mut viewer, 30.0), None);
    assert_eq!(viewer.current_index(), 2);
}

#[test]
fn test_swipe_exactly_at_threshold_is_ignored() {
    for delta_x in [-50.0, 50.0] {
        let mut viewer = open(5, 2);
        assert_eq!(swipe(&mut viewer, delta_x), None);
        assert_eq!(viewer.current_index(), 2);
    }
}

#[test]
fn test_swipe_just_past_threshold_changes_photo() {
    let mut viewer = open(5, 2);
    assert_eq!(
        swipe(&mut viewer, -51.0),
        Some(ViewerEvent::IndexChanged { index: 3 })
    );
}

#[test]
fn test_tap_requests_close() {
    let mut viewer = open(5, 2);
    viewer.pointer_down(pt(100.0, 100.0), 1);
    assert_eq!(
        viewer.pointer_up(pt(100.0, 100.0), 1.0),
        Some(ViewerEvent::CloseRequested)
    );
}

#[test]
fn test_vertical_gesture_never_navigates_or_closes() {
    let mut viewer = open(5, 2);
    viewer.pointer_down(pt(100.0, 100.0), 1);
    viewer.pointer_move(pt(105.0, 160.0), 1);
    viewer.pointer_move(pt(400.0, 170.0), 1);
    assert_eq!(viewer.pointer_up(pt(400.0, 170.0), 1.0), None);
    assert_eq!(viewer.current_index(), 2);
}

#[test]
fn test_pinch_release_never_closes_or_navigates() {
    let mut viewer = open(5, 2);
    viewer.pointer_down(pt(100.0, 100.0), 1);
    viewer.pointer_down(pt(180.0, 120.0), 2);
    viewer.pointer_move(pt(20.0, 100.0), 2);
    assert_eq!(viewer.pointer_up(pt(20.0, 100.0), 1.0), None);

    // Pinch that never moved: still not a tap.
    viewer.pointer_down(pt(100.0, 100.0), 2);
    assert_eq!(viewer.pointer_up(pt(100.0, 100.0), 1.0), None);
    assert_eq!(viewer.current_index(), 2);
}

#[test]
fn test_zoomed_in_swipe_is_ignored() {
    let mut viewer = open(5, 2);
    viewer.pointer_down(pt(300.0, 100.0), 1);
    viewer.pointer_move(pt(200.0, 100.0), 1);
    assert_eq!(viewer.pointer_up(pt(200.0, 100.0), 2.0), None);
    assert_eq!(viewer.current_index(), 2);
}

// ---------------------------------------------------------------------------
// Closing
// ---------------------------------------------------------------------------

#[test]
fn test_close_is_idempotent_and_releases_listener() {
    let surface = InputSurface::new();
    let mut viewer =
        PhotoViewer::open(image_set(3), 0, &GalleryConfig::default(), &surface).unwrap();
    assert!(surface.is_listening(ListenerScope::Overlay));

    assert!(viewer.close());
    assert!(!viewer.close());
    assert!(viewer.is_closed());
    assert!(!surface.is_listening(ListenerScope::Overlay));

    // A closed viewer ignores further input.
    viewer.pointer_down(pt(0.0, 0.0), 1);
    assert_eq!(viewer.pointer_up(pt(0.0, 0.0), 1.0), None);
    assert_eq!(viewer.next(), None);
}
