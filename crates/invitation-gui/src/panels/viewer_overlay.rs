use std::time::Instant;

use invitation_core::gallery::GalleryInput;
use invitation_core::input::ListenerScope;

use crate::app::InvitationApp;
use crate::panels::{paint_photo, to_point};
use crate::states::PointerFrame;

const HEADER_HEIGHT: f32 = 48.0;
const FOOTER_HEIGHT: f32 = 40.0;
const DOT_RADIUS: f32 = 4.0;

struct Layout {
    header: egui::Rect,
    body: egui::Rect,
    footer: egui::Rect,
}

impl Layout {
    fn new(screen: egui::Rect) -> Self {
        let header = egui::Rect::from_min_size(screen.min, egui::vec2(screen.width(), HEADER_HEIGHT));
        let footer = egui::Rect::from_min_max(
            egui::pos2(screen.left(), screen.bottom() - FOOTER_HEIGHT),
            screen.max,
        );
        let body = egui::Rect::from_min_max(
            egui::pos2(screen.left(), header.bottom()),
            egui::pos2(screen.right(), footer.top()),
        );
        Self {
            header,
            body,
            footer,
        }
    }
}

/// Full-screen photo viewer drawn above the page while it is open.
pub fn show(ctx: &egui::Context, app: &mut InvitationApp, now: Instant) {
    let Some(viewer) = app.gallery.viewer() else {
        return;
    };

    let screen = ctx.screen_rect();
    let layout = Layout::new(screen);
    let index = viewer.current_index();
    let count = viewer.len();
    let counter = viewer.counter_label();
    let scroll = viewer.indicator_strip().scroll_offset();
    let pitch = app.gallery.config().viewer.indicator_pitch;
    let zoom = app.pointer.viewer_zoom;

    let mut inputs = Vec::new();

    egui::Area::new(egui::Id::new("photo_viewer"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            // Swallow clicks so nothing underneath reacts.
            ui.allocate_rect(screen, egui::Sense::click_and_drag());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(235));

            let photo_rect = egui::Rect::from_center_size(layout.body.center(), layout.body.size() * zoom);
            paint_photo(
                &ui.painter_at(layout.body),
                app.textures.get(index),
                photo_rect.shrink(8.0),
                index,
            );

            show_header(ui, &layout, &counter, &mut inputs);
            show_arrows(ui, &layout, &mut inputs);
            show_strip(ui, &layout, count, index, pitch, scroll, &mut inputs);
        });

    if let Some(viewer) = app.gallery.viewer_mut() {
        viewer.set_indicator_viewport(layout.footer.width());
    }

    handle_pointer(ctx, app, &layout, &mut inputs);
    handle_keys(ctx, &mut inputs);

    for input in inputs {
        app.dispatch(input, now);
    }
}

fn show_header(ui: &mut egui::Ui, layout: &Layout, counter: &str, inputs: &mut Vec<GalleryInput>) {
    ui.painter().text(
        layout.header.center(),
        egui::Align2::CENTER_CENTER,
        counter,
        egui::FontId::proportional(16.0),
        egui::Color32::WHITE,
    );

    let close_rect = egui::Rect::from_center_size(
        egui::pos2(layout.header.right() - 28.0, layout.header.center().y),
        egui::vec2(36.0, 36.0),
    );
    if ui.put(close_rect, egui::Button::new("\u{2715}")).clicked() {
        inputs.push(GalleryInput::ViewerClose);
    }
}

fn show_arrows(ui: &mut egui::Ui, layout: &Layout, inputs: &mut Vec<GalleryInput>) {
    let size = egui::vec2(40.0, 64.0);
    let prev = egui::Rect::from_center_size(
        egui::pos2(layout.body.left() + 28.0, layout.body.center().y),
        size,
    );
    let next = egui::Rect::from_center_size(
        egui::pos2(layout.body.right() - 28.0, layout.body.center().y),
        size,
    );
    if ui.put(prev, egui::Button::new("\u{2039}")).clicked() {
        inputs.push(GalleryInput::ViewerPrevious);
    }
    if ui.put(next, egui::Button::new("\u{203A}")).clicked() {
        inputs.push(GalleryInput::ViewerNext);
    }
}

fn show_strip(
    ui: &mut egui::Ui,
    layout: &Layout,
    count: usize,
    current: usize,
    pitch: f32,
    scroll: f32,
    inputs: &mut Vec<GalleryInput>,
) {
    let footer = layout.footer;
    let content_width = count as f32 * pitch;
    // Centre a strip narrower than the footer.
    let origin = footer.left() + ((footer.width() - content_width) / 2.0).max(0.0) - scroll;
    let painter = ui.painter_at(footer);

    for index in 0..count {
        let centre = egui::pos2(origin + index as f32 * pitch + pitch / 2.0, footer.center().y);
        if centre.x < footer.left() - pitch || centre.x > footer.right() + pitch {
            continue;
        }
        let hit = egui::Rect::from_center_size(centre, egui::vec2(pitch, pitch)).intersect(footer);
        let response = ui.interact(hit, ui.id().with(("viewer_dot", index)), egui::Sense::click());
        if response.clicked() {
            inputs.push(GalleryInput::ViewerIndicator { index });
        }

        let color = if index == current {
            egui::Color32::WHITE
        } else {
            egui::Color32::from_white_alpha(90)
        };
        painter.circle_filled(centre, DOT_RADIUS, color);
    }
}

/// Swipe and pinch handling for the photo area.
///
/// The viewer holds the overlay listener while open, so moves and the
/// release are forwarded wherever the pointer is.
fn handle_pointer(
    ctx: &egui::Context,
    app: &mut InvitationApp,
    layout: &Layout,
    inputs: &mut Vec<GalleryInput>,
) {
    if !app.gallery.surface().is_listening(ListenerScope::Overlay) {
        return;
    }
    let frame = PointerFrame::read(ctx);

    if frame.zoom_delta != 1.0 {
        app.pointer.apply_zoom(frame.zoom_delta);
    }

    if let (true, Some(pos)) = (frame.pressed, frame.pos) {
        if layout.body.contains(pos) && !on_arrow(layout, pos) {
            app.pointer.last_sent = Some(pos);
            inputs.push(GalleryInput::ViewerDown {
                at: to_point(pos),
                contacts: frame.contacts,
            });
        }
    }

    if frame.down {
        if let Some(pos) = frame.pos {
            if app.pointer.moved_to(pos) || frame.contacts > 1 {
                inputs.push(GalleryInput::ViewerMove {
                    at: to_point(pos),
                    contacts: frame.contacts,
                });
            }
        }
    }

    if frame.released {
        if let Some(pos) = frame.pos.or(app.pointer.last_sent) {
            inputs.push(GalleryInput::ViewerUp {
                at: to_point(pos),
                zoom_scale: app.pointer.viewer_zoom,
            });
        }
    }
}

fn on_arrow(layout: &Layout, pos: egui::Pos2) -> bool {
    pos.x < layout.body.left() + 56.0 || pos.x > layout.body.right() - 56.0
}

fn handle_keys(ctx: &egui::Context, inputs: &mut Vec<GalleryInput>) {
    ctx.input(|i| {
        if i.key_pressed(egui::Key::Escape) {
            inputs.push(GalleryInput::ViewerClose);
        } else if i.key_pressed(egui::Key::ArrowLeft) {
            inputs.push(GalleryInput::ViewerPrevious);
        } else if i.key_pressed(egui::Key::ArrowRight) {
            inputs.push(GalleryInput::ViewerNext);
        }
    });
}
