use std::path::Path;

use console::Style;
use invitation_core::carousel::CarouselEvent;
use invitation_core::config::GalleryConfig;
use invitation_core::gallery::{Gallery, GalleryEvent, GalleryInput, Overlay};
use invitation_core::viewer::ViewerEvent;

use crate::commands::replay::StepReport;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    event: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().magenta().bold(),
            header: Style::new().magenta().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            event: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

pub fn print_gallery_summary(source: &Path, config: &GalleryConfig) {
    let s = Styles::new();
    print_title(&s, "Invitation Gallery");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Config"),
        s.path.apply_to(source.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Photos"),
        s.value.apply_to(config.photos.len())
    );
    match &config.music {
        Some(music) => println!(
            "  {:<14}{}",
            s.label.apply_to("Music"),
            s.path.apply_to(music.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Music"),
            s.disabled.apply_to("none")
        ),
    }
    println!();

    println!("  {}", s.header.apply_to("Gestures"));
    println!(
        "    {:<16}{}",
        s.label.apply_to("Dead zone"),
        s.value.apply_to(format!("{} px", config.gesture.dead_zone))
    );
    println!(
        "    {:<16}{}",
        s.label.apply_to("Zoom tolerance"),
        s.value.apply_to(format!("{}x", config.gesture.zoom_tolerance))
    );
    println!();

    println!("  {}", s.header.apply_to("Carousel"));
    println!(
        "    {:<16}{}",
        s.label.apply_to("Transition"),
        s.value.apply_to(format!("{} ms", config.carousel.transition_ms))
    );
    println!(
        "    {:<16}{}",
        s.label.apply_to("Advance at"),
        s.value
            .apply_to(format!("{:.0}% of width", config.carousel.forward_ratio * 100.0))
    );
    println!(
        "    {:<16}{}",
        s.label.apply_to("Retreat at"),
        s.value
            .apply_to(format!("{:.0}% of width", config.carousel.backward_ratio * 100.0))
    );
    println!();

    println!("  {}", s.header.apply_to("Viewer"));
    println!(
        "    {:<16}{}",
        s.label.apply_to("Swipe threshold"),
        s.value.apply_to(format!("{} px", config.viewer.swipe_threshold))
    );
    println!(
        "    {:<16}{}",
        s.label.apply_to("Reopen delay"),
        s.value
            .apply_to(format!("{} ms", config.all_photos.reopen_delay_ms))
    );
    println!();

    if config.photos.is_empty() {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Photos"),
            s.disabled.apply_to("none")
        );
    } else {
        println!("  {}", s.header.apply_to("Photos"));
        for (i, photo) in config.photos.iter().enumerate() {
            println!(
                "    {:>3}. {}",
                s.label.apply_to(i + 1),
                s.path.apply_to(photo.display())
            );
        }
    }
    println!();
}

pub fn print_replay(gallery: &Gallery, reports: &[StepReport]) {
    let s = Styles::new();
    print_title(&s, "Replay");

    for report in reports {
        let source = match &report.input {
            Some(input) => s.value.apply_to(describe_input(input)),
            None => s.label.apply_to("timer".to_string()),
        };
        println!(
            "  {}  {}",
            s.label.apply_to(format!("{:>6} ms", report.at_ms)),
            source
        );
        for event in &report.events {
            println!("              {}", s.event.apply_to(describe_event(event)));
        }
        let snap = &report.snapshot;
        println!(
            "              {}",
            s.label.apply_to(format!(
                "slide {} {:?} offset {:.0} overlay {}",
                snap.carousel_index + 1,
                snap.status,
                snap.drag_offset,
                snap.overlay.as_deref().unwrap_or("none")
            ))
        );
    }
    println!();

    let carousel = gallery.carousel();
    println!("  {}", s.header.apply_to("Final state"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Carousel"),
        s.value.apply_to(format!(
            "slide {} of {} ({:?})",
            carousel.current_index() + 1,
            carousel.slide_count(),
            carousel.status()
        ))
    );
    let overlay = match gallery.overlay().map(|o| &o.content) {
        Some(Overlay::Viewer(viewer)) => s.value.apply_to(format!("viewer {}", viewer.counter_label())),
        Some(Overlay::AllPhotos) => s.value.apply_to("all photos".to_string()),
        None => s.disabled.apply_to("none".to_string()),
    };
    println!("    {:<12}{}", s.label.apply_to("Overlay"), overlay);
    println!(
        "    {:<12}{}",
        s.label.apply_to("Listeners"),
        s.value.apply_to(gallery.surface().active_count())
    );
    println!();
}

fn describe_input(input: &GalleryInput) -> String {
    match input {
        GalleryInput::CarouselDown { at, contacts, .. } => {
            format!("carousel press ({}, {}) x{contacts}", at.x, at.y)
        }
        GalleryInput::CarouselMove { at, .. } => format!("carousel move ({}, {})", at.x, at.y),
        GalleryInput::ViewerDown { at, contacts } => {
            format!("viewer press ({}, {}) x{contacts}", at.x, at.y)
        }
        GalleryInput::ViewerMove { at, .. } => format!("viewer move ({}, {})", at.x, at.y),
        GalleryInput::ViewerUp { at, zoom_scale } => {
            format!("viewer release ({}, {}) zoom {zoom_scale}", at.x, at.y)
        }
        other => format!("{other:?}"),
    }
}

fn describe_event(event: &GalleryEvent) -> String {
    match event {
        GalleryEvent::Carousel(CarouselEvent::SlideTapped { index }) => {
            format!("slide {} tapped", index + 1)
        }
        GalleryEvent::Carousel(CarouselEvent::TransitionStarted { from, to }) => {
            format!("carousel {} -> {}", from + 1, to + 1)
        }
        GalleryEvent::Carousel(CarouselEvent::Committed { index }) => {
            format!("carousel settled on {}", index + 1)
        }
        GalleryEvent::Viewer(ViewerEvent::IndexChanged { index }) => {
            format!("viewer shows {}", index + 1)
        }
        GalleryEvent::Viewer(ViewerEvent::CloseRequested) => "viewer close requested".into(),
        GalleryEvent::ViewerOpened { index } => format!("viewer opened on {}", index + 1),
        GalleryEvent::AllPhotosOpened => "all photos opened".into(),
        GalleryEvent::OverlayClosed => "overlay closed".into(),
    }
}
