use invitation_core::preload::DecodedPhoto;

/// Convert a decoded RGBA8 photo to an egui ColorImage.
pub fn photo_to_color_image(photo: &DecodedPhoto) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [photo.width as usize, photo.height as usize],
        &photo.rgba,
    )
}

/// Largest rect with the photo's aspect ratio that fits inside `bounds`, centred.
pub fn fit_rect(bounds: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / image_size.x).min(bounds.height() / image_size.y);
    egui::Rect::from_center_size(bounds.center(), image_size * scale)
}
