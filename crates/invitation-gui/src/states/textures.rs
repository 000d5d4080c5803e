/// Uploaded photo textures, one slot per photo in the gallery.
#[derive(Default)]
pub struct PhotoTextures {
    slots: Vec<Option<egui::TextureHandle>>,
}

impl PhotoTextures {
    pub fn reset(&mut self, len: usize) {
        self.slots.clear();
        self.slots.resize_with(len, || None);
    }

    pub fn insert(&mut self, index: usize, texture: egui::TextureHandle) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(texture);
        }
    }

    pub fn get(&self, index: usize) -> Option<&egui::TextureHandle> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn loaded(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
