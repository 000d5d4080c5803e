use std::time::Instant;

use invitation_core::gallery::GalleryInput;

use crate::app::InvitationApp;

const THUMB_SIZE: egui::Vec2 = egui::vec2(96.0, 96.0);

/// Grid of every photo; picking one reopens it in the viewer.
pub fn show(ctx: &egui::Context, app: &mut InvitationApp, now: Instant) {
    if !app.gallery.is_all_photos_open() {
        return;
    }

    let mut selected = None;
    let modal = egui::Modal::new(egui::Id::new("all_photos")).show(ctx, |ui| {
        ui.set_max_width(ctx.screen_rect().width() * 0.85);
        ui.heading("All Photos");
        ui.add_space(6.0);

        egui::ScrollArea::vertical()
            .max_height(ctx.screen_rect().height() * 0.7)
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for index in 0..app.gallery.images().len() {
                        let clicked = match app.textures.get(index) {
                            Some(tex) => {
                                let image = egui::Image::from_texture(
                                    egui::load::SizedTexture::new(tex.id(), tex.size_vec2()),
                                )
                                .fit_to_exact_size(THUMB_SIZE);
                                ui.add(egui::Button::image(image)).clicked()
                            }
                            None => ui
                                .add_sized(THUMB_SIZE, egui::Button::new(format!("{}", index + 1)))
                                .clicked(),
                        };
                        if clicked {
                            selected = Some(index);
                        }
                    }
                });
            });
    });

    if let Some(index) = selected {
        app.dispatch(GalleryInput::AllPhotosSelected { index }, now);
    } else if modal.should_close() {
        app.dispatch(GalleryInput::BackgroundClicked, now);
    }
}
