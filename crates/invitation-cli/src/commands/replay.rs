use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Args;
use invitation_core::carousel::CarouselStatus;
use invitation_core::config::GalleryConfig;
use invitation_core::gallery::{Gallery, GalleryEvent, GalleryInput, Overlay};
use serde::Deserialize;
use tracing::debug;

#[derive(Args)]
pub struct ReplayArgs {
    /// Input script (TOML with [[step]] tables)
    pub script: PathBuf,

    /// Gallery config file; overrides the script's own `config` entry
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stop after the last step instead of running pending timers to completion
    #[arg(long)]
    pub no_settle: bool,
}

/// A scripted session: which gallery to drive and the timed inputs to feed it.
#[derive(Debug, Deserialize)]
pub struct Script {
    /// Gallery config, relative to the script file.
    #[serde(default)]
    pub config: Option<PathBuf>,
    /// Placeholder photo count used when no config is given.
    #[serde(default)]
    pub photos: Option<usize>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct Step {
    /// Milliseconds since the session started.
    #[serde(default)]
    pub at_ms: u64,
    #[serde(flatten)]
    pub input: GalleryInput,
}

/// Published gallery state after a step.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub carousel_index: usize,
    pub status: CarouselStatus,
    pub drag_offset: f32,
    pub overlay: Option<String>,
}

impl Snapshot {
    fn capture(gallery: &Gallery) -> Self {
        let state = gallery.carousel().state();
        let overlay = gallery.overlay().map(|o| match &o.content {
            Overlay::Viewer(viewer) => format!("viewer {}", viewer.counter_label()),
            Overlay::AllPhotos => "all photos".to_string(),
        });
        Self {
            carousel_index: state.current_index,
            status: state.status,
            drag_offset: state.drag_offset,
            overlay,
        }
    }
}

/// What happened at one point of the session.
#[derive(Debug)]
pub struct StepReport {
    pub at_ms: u64,
    pub input: Option<GalleryInput>,
    pub events: Vec<GalleryEvent>,
    pub snapshot: Snapshot,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script: Script = toml::from_str(&text).context("Invalid replay script")?;

    let base = args.script.parent().unwrap_or(Path::new("."));
    let config = match (&args.config, &script.config) {
        (Some(path), _) => GalleryConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        (None, Some(path)) => {
            let path = base.join(path);
            GalleryConfig::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        (None, None) => placeholder_config(script.photos.unwrap_or(5)),
    };

    let mut gallery = Gallery::new(config);
    let reports = play(&mut gallery, &script.steps, !args.no_settle)?;

    crate::summary::print_replay(&gallery, &reports);
    Ok(())
}

fn placeholder_config(photos: usize) -> GalleryConfig {
    GalleryConfig {
        photos: (1..=photos)
            .map(|i| PathBuf::from(format!("photo-{i:02}.jpg")))
            .collect(),
        ..GalleryConfig::default()
    }
}

/// Feed `steps` to `gallery` on a virtual clock.
///
/// Timers that fall due between two steps fire at their own deadline and
/// are reported as separate entries.
pub fn play(gallery: &mut Gallery, steps: &[Step], settle: bool) -> Result<Vec<StepReport>> {
    let start = Instant::now();
    let mut reports = Vec::new();
    let mut last_ms = 0;

    for (i, step) in steps.iter().enumerate() {
        if step.at_ms < last_ms {
            bail!(
                "step {} at {} ms is earlier than the previous step ({} ms)",
                i + 1,
                step.at_ms,
                last_ms
            );
        }
        last_ms = step.at_ms;

        let now = start + Duration::from_millis(step.at_ms);
        run_timers(gallery, start, Some(now), &mut reports);

        debug!("Step {}: {:?}", i + 1, step.input);
        let events = gallery.handle(step.input, now);
        reports.push(StepReport {
            at_ms: step.at_ms,
            input: Some(step.input),
            events,
            snapshot: Snapshot::capture(gallery),
        });
    }

    if settle {
        run_timers(gallery, start, None, &mut reports);
    }
    Ok(reports)
}

fn run_timers(
    gallery: &mut Gallery,
    start: Instant,
    until: Option<Instant>,
    reports: &mut Vec<StepReport>,
) {
    while let Some(deadline) = gallery.next_deadline() {
        if until.is_some_and(|until| deadline > until) {
            break;
        }
        let events = gallery.tick(deadline);
        reports.push(StepReport {
            at_ms: deadline.saturating_duration_since(start).as_millis() as u64,
            input: None,
            events,
            snapshot: Snapshot::capture(gallery),
        });
        if gallery.next_deadline() == Some(deadline) {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invitation_core::carousel::CarouselEvent;

    const SCRIPT: &str = r#"
        photos = 4

        [[step]]
        at_ms = 0
        event = "carousel_down"
        at = { x = 300.0, y = 50.0 }
        width = 400.0

        [[step]]
        at_ms = 40
        event = "carousel_move"
        at = { x = 20.0, y = 55.0 }

        [[step]]
        at_ms = 80
        event = "carousel_up"

        [[step]]
        at_ms = 500
        event = "open_all_photos"

        [[step]]
        at_ms = 600
        event = "all_photos_selected"
        index = 3
    "#;

    #[test]
    fn script_parses_flattened_steps() {
        let script: Script = toml::from_str(SCRIPT).unwrap();
        assert_eq!(script.photos, Some(4));
        assert_eq!(script.steps.len(), 5);
        assert_eq!(script.steps[2].at_ms, 80);
        assert_eq!(script.steps[2].input, GalleryInput::CarouselUp);
    }

    #[test]
    fn play_fires_timers_between_steps() {
        let script: Script = toml::from_str(SCRIPT).unwrap();
        let mut gallery = Gallery::new(placeholder_config(4));
        let reports = play(&mut gallery, &script.steps, true).unwrap();

        // Drag of -280 px on a 400 px slide advances one photo.
        assert_eq!(reports[1].snapshot.status, CarouselStatus::Dragging);
        assert_eq!(reports[1].snapshot.drag_offset, -680.0);
        assert!(reports[2]
            .events
            .contains(&GalleryEvent::Carousel(CarouselEvent::TransitionStarted {
                from: 0,
                to: 1
            })));
        let commit = reports
            .iter()
            .find(|r| r.input.is_none() && r.at_ms == 380)
            .expect("drag commit after the transition");
        assert_eq!(
            commit.events,
            vec![GalleryEvent::Carousel(CarouselEvent::Committed { index: 1 })]
        );

        let last = reports.last().unwrap();
        assert_eq!(last.at_ms, 700);
        assert_eq!(last.events, vec![GalleryEvent::ViewerOpened { index: 3 }]);
        assert_eq!(last.snapshot.overlay.as_deref(), Some("viewer 4 / 4"));
        assert_eq!(gallery.carousel().status(), CarouselStatus::Stationary);
        assert_eq!(gallery.viewer().map(|v| v.current_index()), Some(3));
    }

    #[test]
    fn play_rejects_steps_out_of_order() {
        let script: Script = toml::from_str(
            r#"
            [[step]]
            at_ms = 100
            event = "carousel_next"

            [[step]]
            at_ms = 50
            event = "carousel_previous"
            "#,
        )
        .unwrap();
        let mut gallery = Gallery::new(placeholder_config(3));
        assert!(play(&mut gallery, &script.steps, false).is_err());
    }
}
