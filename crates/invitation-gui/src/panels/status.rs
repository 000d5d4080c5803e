use crate::app::InvitationApp;

pub fn show(ctx: &egui::Context, app: &mut InvitationApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        if let (Some(done), Some(total)) = (app.ui_state.preload_done, app.ui_state.preload_total) {
            let fraction = if total > 0 {
                done as f32 / total as f32
            } else {
                0.0
            };
            ui.add(
                egui::ProgressBar::new(fraction)
                    .text(format!("Decoding photos ({done}/{total})"))
                    .animate(true),
            );
        } else {
            // Invisible placeholder, same height
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 3 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            let carousel = app.gallery.carousel();
            if carousel.is_empty() {
                ui.label("No photos");
            } else {
                ui.label(format!(
                    "Slide {}/{}",
                    carousel.current_index() + 1,
                    carousel.slide_count()
                ));
            }
            ui.separator();
            ui.label(format!("Loaded: {}", app.textures.loaded()));
            ui.separator();
            ui.label(format!("{:?}", carousel.status()));
        });

        ui.add_space(2.0);
    });
}
