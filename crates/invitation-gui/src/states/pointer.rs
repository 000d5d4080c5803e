/// Raw pointer snapshot for one frame, in screen points.
#[derive(Clone, Copy, Debug)]
pub struct PointerFrame {
    pub pos: Option<egui::Pos2>,
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
    pub contacts: usize,
    pub zoom_delta: f32,
}

impl PointerFrame {
    pub fn read(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            pos: i.pointer.interact_pos(),
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
            down: i.pointer.primary_down(),
            contacts: i.multi_touch().map_or(1, |t| t.num_touches.max(1)),
            zoom_delta: i.zoom_delta(),
        })
    }
}

/// Viewer zoom and the last pointer position handed to the gallery.
pub struct PointerState {
    pub viewer_zoom: f32,
    pub last_sent: Option<egui::Pos2>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            viewer_zoom: 1.0,
            last_sent: None,
        }
    }
}

impl PointerState {
    pub fn apply_zoom(&mut self, zoom_delta: f32) {
        self.viewer_zoom = (self.viewer_zoom * zoom_delta).clamp(1.0, 5.0);
    }

    pub fn reset_zoom(&mut self) {
        self.viewer_zoom = 1.0;
    }

    /// Whether `pos` differs from the last position sent.
    pub fn moved_to(&mut self, pos: egui::Pos2) -> bool {
        if self.last_sent == Some(pos) {
            return false;
        }
        self.last_sent = Some(pos);
        true
    }
}
