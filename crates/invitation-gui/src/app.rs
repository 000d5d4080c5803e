use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use invitation_core::config::GalleryConfig;
use invitation_core::consts::DEFAULT_PRELOAD_MAX_SIDE;
use invitation_core::gallery::{Gallery, GalleryEvent, GalleryInput};
use invitation_core::music::MusicToggle;
use tracing::{info, warn};

use crate::audio::SilentOutput;
use crate::convert::photo_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{PhotoTextures, PointerState, UIState};
use crate::worker;

pub struct InvitationApp {
    pub cmd_tx: Option<mpsc::Sender<WorkerCommand>>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub gallery: Gallery,
    pub music: MusicToggle<SilentOutput>,
    pub textures: PhotoTextures,
    pub pointer: PointerState,
    pub ui_state: UIState,
}

impl InvitationApp {
    pub fn new(ctx: &egui::Context, config_path: Option<PathBuf>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let mut ui_state = UIState::default();
        let cmd_tx = match worker::spawn_worker(result_tx.clone(), ctx.clone()) {
            Ok(tx) => Some(tx),
            Err(e) => {
                ui_state.add_log(format!("ERROR: preload worker unavailable: {e}"));
                None
            }
        };

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            gallery: Gallery::new(GalleryConfig::default()),
            music: MusicToggle::new(SilentOutput::new(None)),
            textures: PhotoTextures::default(),
            pointer: PointerState::default(),
            ui_state,
        };

        if let Some(path) = config_path {
            match GalleryConfig::load(&path) {
                Ok(config) => app.load_gallery(path, config),
                Err(e) => app.ui_state.add_log(format!("ERROR: {}: {e}", path.display())),
            }
        }
        app
    }

    /// Replace the gallery with one built from `config` and start decoding its photos.
    pub fn load_gallery(&mut self, path: PathBuf, config: GalleryConfig) {
        let images = config.image_set();
        info!("Loaded {} ({} photos)", path.display(), images.len());
        self.ui_state.add_log(format!(
            "Opened: {} ({} photos)",
            path.display(),
            images.len()
        ));

        self.music = MusicToggle::new(SilentOutput::new(config.music.clone()));
        self.gallery = Gallery::new(config);
        self.textures.reset(images.len());
        self.pointer = PointerState::default();
        self.ui_state.config_path = Some(path);

        if images.is_empty() {
            return;
        }
        let generation = self.ui_state.begin_preload(images.len());
        self.send_command(WorkerCommand::Preload {
            generation,
            images,
            max_side: DEFAULT_PRELOAD_MAX_SIDE,
        });
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ConfigLoaded { path, config } => {
                    self.load_gallery(path, config);
                }
                WorkerResult::PhotoDecoded {
                    generation,
                    index,
                    photo,
                } => {
                    if !self.ui_state.is_current_preload(generation) {
                        continue;
                    }
                    let texture = ctx.load_texture(
                        format!("photo-{index}"),
                        photo_to_color_image(&photo),
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(index, texture);
                }
                WorkerResult::PreloadComplete {
                    generation,
                    decoded,
                    total,
                    elapsed,
                } => {
                    if !self.ui_state.is_current_preload(generation) {
                        continue;
                    }
                    self.ui_state.finish_preload();
                    self.ui_state.add_log(format!(
                        "Decoded {decoded}/{total} photos in {}",
                        format_duration(elapsed)
                    ));
                }
                WorkerResult::Progress {
                    generation,
                    items_done,
                    items_total,
                } => {
                    if !self.ui_state.is_current_preload(generation) {
                        continue;
                    }
                    self.ui_state.preload_done = Some(items_done);
                    self.ui_state.preload_total = Some(items_total);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    pub fn send_command(&mut self, cmd: WorkerCommand) {
        let sent = self.cmd_tx.as_ref().is_some_and(|tx| tx.send(cmd).is_ok());
        if !sent {
            warn!("Preload worker is gone; photos will not be decoded");
            self.ui_state.finish_preload();
        }
    }

    /// Feed one input to the gallery and log what it did.
    pub fn dispatch(&mut self, input: GalleryInput, now: Instant) {
        let events = self.gallery.handle(input, now);
        self.record(&events);
    }

    fn record(&mut self, events: &[GalleryEvent]) {
        let view_changed = events.iter().any(|e| {
            matches!(
                e,
                GalleryEvent::ViewerOpened { .. }
                    | GalleryEvent::Viewer(_)
                    | GalleryEvent::OverlayClosed
            )
        });
        if view_changed {
            self.pointer.reset_zoom();
        }
    }

    /// First click anywhere starts the background music.
    ///
    /// Runs after the panels so a click on the music button, which already
    /// counts as the first interaction, is not followed by an autoplay.
    fn note_interaction(&mut self, ctx: &egui::Context) {
        if self.music.has_interacted() {
            return;
        }
        let clicked = ctx.input(|i| i.pointer.any_click());
        if clicked && self.music.on_first_interaction() && !self.music.is_playing() {
            self.ui_state
                .add_log("Background music unavailable on this system".into());
        }
    }
}

impl eframe::App for InvitationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        let now = Instant::now();
        let events = self.gallery.tick(now);
        self.record(&events);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::gallery_card::show(ctx, self, now);
        panels::all_photos::show(ctx, self, now);
        panels::viewer_overlay::show(ctx, self, now);
        self.note_interaction(ctx);

        if self.gallery.carousel().status().is_transitioning() {
            ctx.request_repaint();
        } else if let Some(deadline) = self.gallery.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Invitation")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Invitation");
                        ui.label("Wedding invitation photo gallery");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}
