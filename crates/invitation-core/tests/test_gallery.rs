mod common;

use std::time::Instant;

use common::{config_with_photos, ms, pt, WIDTH};
use invitation_core::carousel::{CarouselEvent, CarouselStatus};
use invitation_core::gallery::{Gallery, GalleryEvent, GalleryInput, ALL_PHOTOS_CLASS, VIEWER_CLASS};
use invitation_core::input::{ListenerScope, PressTarget};
use invitation_core::viewer::ViewerEvent;

fn gallery(n: usize) -> Gallery {
    Gallery::new(config_with_photos(n))
}

fn down(x: f32) -> GalleryInput {
    GalleryInput::CarouselDown {
        at: pt(x, 100.0),
        contacts: 1,
        width: WIDTH,
        target: PressTarget::Slide,
    }
}

fn tap_carousel(g: &mut Gallery, now: Instant) -> Vec<GalleryEvent> {
    g.handle(down(150.0), now);
    g.handle(GalleryInput::CarouselUp, now)
}

fn open_grid(g: &mut Gallery, now: Instant) {
    assert_eq!(
        g.handle(GalleryInput::OpenAllPhotos, now),
        vec![GalleryEvent::AllPhotosOpened]
    );
    assert!(g.is_all_photos_open());
}

// ---------------------------------------------------------------------------
// Carousel -> viewer
// ---------------------------------------------------------------------------

#[test]
fn test_tapping_slide_opens_viewer_on_that_photo() {
    let mut g = gallery(5);
    let now = Instant::now();
    g.handle(GalleryInput::CarouselNext, now);
    g.tick(ms(now, 301));

    let events = tap_carousel(&mut g, ms(now, 400));
    assert_eq!(
        events,
        vec![
            GalleryEvent::Carousel(CarouselEvent::SlideTapped { index: 1 }),
            GalleryEvent::ViewerOpened { index: 1 },
        ]
    );
    let overlay = g.overlay().expect("overlay open");
    assert_eq!(overlay.class_name, VIEWER_CLASS);
    assert!(!overlay.close_on_click_background);
    assert_eq!(g.viewer().map(|v| v.current_index()), Some(1));
    assert!(g.surface().is_listening(ListenerScope::Overlay));
}

#[test]
fn test_viewer_index_is_independent_of_carousel() {
    let mut g = gallery(5);
    let now = Instant::now();
    tap_carousel(&mut g, now);

    assert_eq!(
        g.handle(GalleryInput::ViewerNext, now),
        vec![GalleryEvent::Viewer(ViewerEvent::IndexChanged { index: 1 })]
    );
    assert_eq!(g.carousel().current_index(), 0);
}

#[test]
fn test_viewer_swipe_then_tap_closes() {
    let mut g = gallery(5);
    let now = Instant::now();
    tap_carousel(&mut g, now);

    g.handle(GalleryInput::ViewerDown { at: pt(300.0, 200.0), contacts: 1 }, now);
    g.handle(GalleryInput::ViewerMove { at: pt(220.0, 205.0), contacts: 1 }, now);
    let events = g.handle(
        GalleryInput::ViewerUp { at: pt(220.0, 205.0), zoom_scale: 1.0 },
        now,
    );
    assert_eq!(
        events,
        vec![GalleryEvent::Viewer(ViewerEvent::IndexChanged { index: 1 })]
    );

    g.handle(GalleryInput::ViewerDown { at: pt(100.0, 100.0), contacts: 1 }, now);
    let events = g.handle(
        GalleryInput::ViewerUp { at: pt(100.0, 100.0), zoom_scale: 1.0 },
        now,
    );
    assert_eq!(events, vec![GalleryEvent::OverlayClosed]);
    assert!(g.overlay().is_none());
    assert!(!g.surface().is_listening(ListenerScope::Overlay));
}

#[test]
fn test_viewer_close_is_idempotent() {
    let mut g = gallery(3);
    let now = Instant::now();
    tap_carousel(&mut g, now);

    assert_eq!(
        g.handle(GalleryInput::ViewerClose, now),
        vec![GalleryEvent::OverlayClosed]
    );
    assert!(g.handle(GalleryInput::ViewerClose, now).is_empty());
    assert!(!g.close_viewer());
}

#[test]
fn test_background_click_does_not_close_viewer() {
    let mut g = gallery(3);
    let now = Instant::now();
    tap_carousel(&mut g, now);
    assert!(g.handle(GalleryInput::BackgroundClicked, now).is_empty());
    assert!(g.viewer().is_some());
}

#[test]
fn test_carousel_input_blocked_while_overlay_open() {
    let mut g = gallery(5);
    let now = Instant::now();
    tap_carousel(&mut g, now);

    assert!(g.handle(GalleryInput::CarouselNext, now).is_empty());
    assert!(g.handle(GalleryInput::IndicatorClicked { index: 3 }, now).is_empty());
    g.handle(down(200.0), now);
    assert_eq!(g.carousel().status(), CarouselStatus::Stationary);
    assert!(!g.surface().is_listening(ListenerScope::Document));
}

#[test]
fn test_empty_gallery_never_opens_viewer() {
    let mut g = gallery(0);
    let now = Instant::now();
    assert!(tap_carousel(&mut g, now).is_empty());
    assert!(g.overlay().is_none());
}

// ---------------------------------------------------------------------------
// All-photos grid
// ---------------------------------------------------------------------------

#[test]
fn test_grid_closes_on_background_click() {
    let mut g = gallery(4);
    let now = Instant::now();
    open_grid(&mut g, now);
    assert_eq!(g.overlay().map(|o| o.class_name.as_str()), Some(ALL_PHOTOS_CLASS));

    assert_eq!(
        g.handle(GalleryInput::BackgroundClicked, now),
        vec![GalleryEvent::OverlayClosed]
    );
    assert!(!g.is_all_photos_open());
}

#[test]
fn test_grid_selection_opens_viewer_after_delay() {
    let mut g = gallery(6);
    let now = Instant::now();
    open_grid(&mut g, now);

    assert_eq!(
        g.handle(GalleryInput::AllPhotosSelected { index: 4 }, now),
        vec![GalleryEvent::OverlayClosed]
    );
    assert!(g.overlay().is_none());
    assert_eq!(g.next_deadline(), Some(ms(now, 100)));

    assert!(g.tick(ms(now, 99)).is_empty());
    assert_eq!(
        g.tick(ms(now, 100)),
        vec![GalleryEvent::ViewerOpened { index: 4 }]
    );
    assert_eq!(g.viewer().map(|v| v.current_index()), Some(4));
    assert_eq!(g.next_deadline(), None);
}

#[test]
fn test_grid_selection_ignored_while_carousel_moves() {
    let mut g = gallery(6);
    let now = Instant::now();
    g.handle(GalleryInput::CarouselNext, now);
    open_grid(&mut g, now);

    assert!(g.handle(GalleryInput::AllPhotosSelected { index: 2 }, now).is_empty());
    assert!(g.is_all_photos_open());
}

#[test]
fn test_grid_selection_without_grid_is_ignored() {
    let mut g = gallery(6);
    let now = Instant::now();
    assert!(g.handle(GalleryInput::AllPhotosSelected { index: 2 }, now).is_empty());
    assert_eq!(g.next_deadline(), None);
}

// ---------------------------------------------------------------------------
// Teardown
// ---------------------------------------------------------------------------

#[test]
fn test_teardown_releases_everything() {
    let mut g = gallery(5);
    let now = Instant::now();
    tap_carousel(&mut g, now);
    g.handle(GalleryInput::ViewerClose, now);

    open_grid(&mut g, now);
    g.handle(GalleryInput::AllPhotosSelected { index: 1 }, now);
    assert!(g.next_deadline().is_some());

    g.handle(down(200.0), now);
    assert!(g.surface().is_listening(ListenerScope::Document));

    g.teardown();
    assert_eq!(g.surface().active_count(), 0);
    assert_eq!(g.next_deadline(), None);
    assert!(g.tick(ms(now, 1_000)).is_empty());
}

#[test]
fn test_teardown_closes_open_viewer() {
    let mut g = gallery(5);
    let now = Instant::now();
    tap_carousel(&mut g, now);
    let surface = std::rc::Rc::clone(g.surface());
    drop(g);
    assert_eq!(surface.active_count(), 0);
}

// ---------------------------------------------------------------------------
// Scripted input
// ---------------------------------------------------------------------------

#[test]
fn test_input_deserializes_from_toml() {
    let down: GalleryInput = toml::from_str(
        r#"
        event = "carousel_down"
        at = { x = 10.0, y = 20.0 }
        width = 400.0
        "#,
    )
    .unwrap();
    assert_eq!(
        down,
        GalleryInput::CarouselDown {
            at: pt(10.0, 20.0),
            contacts: 1,
            width: 400.0,
            target: PressTarget::Slide,
        }
    );

    let up: GalleryInput = toml::from_str(
        r#"
        event = "viewer_up"
        at = { x = 0.0, y = 0.0 }
        "#,
    )
    .unwrap();
    assert_eq!(
        up,
        GalleryInput::ViewerUp {
            at: pt(0.0, 0.0),
            zoom_scale: 1.0
        }
    );

    let control: GalleryInput = toml::from_str(
        r#"
        event = "carousel_down"
        at = { x = 390.0, y = 20.0 }
        width = 400.0
        target = "control_right"
        "#,
    )
    .unwrap();
    assert!(matches!(
        control,
        GalleryInput::CarouselDown { target: PressTarget::ControlRight, .. }
    ));
}

#[test]
fn test_input_deserializes_from_json() {
    let input: GalleryInput = serde_json::from_str(
        r#"{"event": "viewer_down", "at": {"x": 12.5, "y": 40.0}, "contacts": 2}"#,
    )
    .unwrap();
    assert_eq!(
        input,
        GalleryInput::ViewerDown {
            at: pt(12.5, 40.0),
            contacts: 2
        }
    );

    let select: GalleryInput =
        serde_json::from_str(r#"{"event": "all_photos_selected", "index": 7}"#).unwrap();
    assert_eq!(select, GalleryInput::AllPhotosSelected { index: 7 });
}

#[test]
fn test_negative_width_press_is_ignored() {
    let mut g = gallery(5);
    let now = Instant::now();
    g.handle(
        GalleryInput::CarouselDown {
            at: pt(200.0, 100.0),
            contacts: 1,
            width: -10.0,
            target: PressTarget::Slide,
        },
        now,
    );
    assert_eq!(g.carousel().status(), CarouselStatus::Stationary);
    assert!(g
        .handle(
            GalleryInput::CarouselMove {
                at: pt(100.0, 100.0),
                contacts: 1,
            },
            now,
        )
        .is_empty());
    assert!(g.handle(GalleryInput::CarouselUp, now).is_empty());
    assert_eq!(g.carousel().current_index(), 0);
}
