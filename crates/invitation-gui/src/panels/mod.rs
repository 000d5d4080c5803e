pub mod all_photos;
pub mod gallery_card;
pub mod menu_bar;
pub mod status;
pub mod viewer_overlay;

use invitation_core::input::Point;

pub(crate) fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

/// Paint a photo texture fitted into `rect`, or a numbered placeholder while it decodes.
pub(crate) fn paint_photo(
    painter: &egui::Painter,
    texture: Option<&egui::TextureHandle>,
    rect: egui::Rect,
    index: usize,
) {
    match texture {
        Some(tex) => {
            let img_rect = crate::convert::fit_rect(rect, tex.size_vec2());
            painter.image(
                tex.id(),
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        None => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("Photo {}", index + 1),
                egui::FontId::proportional(16.0),
                egui::Color32::from_gray(110),
            );
        }
    }
}
