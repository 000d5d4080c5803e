use std::time::Instant;

use invitation_core::carousel::{CarouselStatus, TransitionClass};
use invitation_core::gallery::GalleryInput;
use invitation_core::input::{ListenerScope, PressTarget};

use crate::app::InvitationApp;
use crate::panels::{paint_photo, to_point};
use crate::states::PointerFrame;

const CONTROL_SIZE: egui::Vec2 = egui::vec2(40.0, 64.0);

pub fn show(ctx: &egui::Context, app: &mut InvitationApp, now: Instant) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Our Moments");
        });
        ui.add_space(8.0);

        if app.gallery.images().is_empty() {
            show_placeholder(ui);
            return;
        }

        let width = ui.available_width();
        let height = (width * 1.25).min(ui.available_height() - 96.0).max(160.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

        handle_pointer(ctx, app, rect, now);
        paint_slides(ui, app, rect, now);
        paint_controls(ui, rect);

        ui.add_space(8.0);
        show_indicators(ui, app, now);
        ui.add_space(8.0);
        show_actions(ui, app, now);
    });
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a gallery config to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn control_rects(rect: egui::Rect) -> (egui::Rect, egui::Rect) {
    let left = egui::Rect::from_center_size(
        egui::pos2(rect.left() + CONTROL_SIZE.x / 2.0 + 4.0, rect.center().y),
        CONTROL_SIZE,
    );
    let right = egui::Rect::from_center_size(
        egui::pos2(rect.right() - CONTROL_SIZE.x / 2.0 - 4.0, rect.center().y),
        CONTROL_SIZE,
    );
    (left, right)
}

fn press_target(rect: egui::Rect, pos: egui::Pos2) -> PressTarget {
    let (left, right) = control_rects(rect);
    if left.contains(pos) {
        PressTarget::ControlLeft
    } else if right.contains(pos) {
        PressTarget::ControlRight
    } else {
        PressTarget::Slide
    }
}

/// Route raw pointer input to the carousel.
///
/// Presses only count inside the carousel; once the carousel holds its
/// page-wide listener, moves and the release are delivered from anywhere.
fn handle_pointer(ctx: &egui::Context, app: &mut InvitationApp, rect: egui::Rect, now: Instant) {
    let frame = PointerFrame::read(ctx);

    if let (true, Some(pos)) = (frame.pressed, frame.pos) {
        if rect.contains(pos) && app.gallery.overlay().is_none() {
            app.pointer.last_sent = Some(pos);
            app.dispatch(
                GalleryInput::CarouselDown {
                    at: to_point(pos),
                    contacts: frame.contacts,
                    width: rect.width(),
                    target: press_target(rect, pos),
                },
                now,
            );
        }
    }

    if !app.gallery.surface().is_listening(ListenerScope::Document) {
        return;
    }

    if let Some(pos) = frame.pos {
        if app.pointer.moved_to(pos) || frame.contacts > 1 {
            app.dispatch(
                GalleryInput::CarouselMove {
                    at: to_point(pos),
                    contacts: frame.contacts,
                },
                now,
            );
        }
    }
    if frame.released {
        app.dispatch(GalleryInput::CarouselUp, now);
    }
}

fn paint_slides(ui: &egui::Ui, app: &InvitationApp, rect: egui::Rect, now: Instant) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 8.0, egui::Color32::from_gray(30));

    let carousel = app.gallery.carousel();
    let width = rect.width();
    let slides = carousel.visible_slides();
    let span = slides.len().saturating_sub(1) as f32 * width;
    let transition_secs = app.gallery.config().carousel.transition().as_secs_f32();

    let strip_x = match carousel.transition_class() {
        TransitionClass::MovingRight => {
            -span * ease(carousel.transition_progress(now).unwrap_or(1.0))
        }
        TransitionClass::MovingLeft => {
            -span * (1.0 - ease(carousel.transition_progress(now).unwrap_or(1.0)))
        }
        TransitionClass::Transitioning | TransitionClass::None => match carousel.translate_x() {
            Some(offset) => {
                let time = if carousel.status() == CarouselStatus::DragEnding {
                    transition_secs
                } else {
                    0.0
                };
                ui.ctx()
                    .animate_value_with_time(egui::Id::new("carousel_strip"), offset, time)
            }
            None => 0.0,
        },
    };

    for (k, &index) in slides.iter().enumerate() {
        let left = rect.left() + strip_x + k as f32 * width;
        let slide_rect = egui::Rect::from_min_size(egui::pos2(left, rect.top()), rect.size());
        if slide_rect.intersects(rect) {
            paint_photo(&painter, app.textures.get(index), slide_rect.shrink(4.0), index);
        }
    }
}

fn paint_controls(ui: &egui::Ui, rect: egui::Rect) {
    let painter = ui.painter_at(rect);
    let (left, right) = control_rects(rect);
    for (control, glyph) in [(left, "\u{2039}"), (right, "\u{203A}")] {
        painter.rect_filled(control, 6.0, egui::Color32::from_black_alpha(90));
        painter.text(
            control.center(),
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(32.0),
            egui::Color32::WHITE,
        );
    }
}

fn show_indicators(ui: &mut egui::Ui, app: &mut InvitationApp, now: Instant) {
    let current = app.gallery.carousel().current_index();
    let count = app.gallery.carousel().slide_count();
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        for index in 0..count {
            let dot = if index == current { "\u{25CF}" } else { "\u{25CB}" };
            if ui.add(egui::Button::new(dot).frame(false)).clicked() {
                clicked = Some(index);
            }
        }
    });

    if let Some(index) = clicked {
        app.dispatch(GalleryInput::IndicatorClicked { index }, now);
    }
}

fn show_actions(ui: &mut egui::Ui, app: &mut InvitationApp, now: Instant) {
    ui.horizontal(|ui| {
        if ui.button("View all photos").clicked() {
            app.dispatch(GalleryInput::OpenAllPhotos, now);
        }

        let music_label = if app.music.is_playing() {
            "\u{266B} Pause music"
        } else {
            "\u{266A} Play music"
        };
        if ui.button(music_label).clicked() && !app.music.toggle() {
            app.ui_state
                .add_log("Background music is paused".into());
        }
    });
}

fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
