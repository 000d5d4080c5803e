use std::path::PathBuf;
use std::time::Duration;

use invitation_core::config::GalleryConfig;
use invitation_core::image_set::ImageSet;
use invitation_core::preload::DecodedPhoto;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode every photo of a freshly loaded gallery. `generation` tags
    /// the results so the UI can drop those of a superseded gallery.
    Preload {
        generation: u64,
        images: ImageSet,
        max_side: u32,
    },
}

/// Results sent from worker or dialog threads back to UI thread.
pub enum WorkerResult {
    ConfigLoaded {
        path: PathBuf,
        config: GalleryConfig,
    },
    PhotoDecoded {
        generation: u64,
        index: usize,
        photo: DecodedPhoto,
    },
    PreloadComplete {
        generation: u64,
        decoded: usize,
        total: usize,
        elapsed: Duration,
    },
    Progress {
        generation: u64,
        items_done: usize,
        items_total: usize,
    },
    Error {
        message: String,
    },
}
