//! Photo decoding for texture upload.
//!
//! Every photo in the set is decoded up front so swiping never waits on
//! disk. Decoding runs across the set with Rayon; a photo that fails to
//! decode is reported in its slot and never aborts the rest.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::Result;
use crate::image_set::ImageSet;

/// RGBA8 pixels of one decoded photo.
#[derive(Clone, Debug)]
pub struct DecodedPhoto {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Outcome of preloading one slot of the image set.
#[derive(Debug)]
pub struct PreloadedPhoto {
    pub index: usize,
    pub path: PathBuf,
    pub result: Result<DecodedPhoto>,
}

/// Decode a single photo, downscaling so its longest side is at most `max_side`.
pub fn load_photo(path: &Path, max_side: Option<u32>) -> Result<DecodedPhoto> {
    let mut img = image::open(path)?;

    if let Some(limit) = max_side {
        if img.width().max(img.height()) > limit {
            img = img.resize(limit, limit, FilterType::Triangle);
        }
    }

    let rgba = img.to_rgba8();
    Ok(DecodedPhoto {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

/// Decode every photo in `set`, returning results in set order.
pub fn preload(set: &ImageSet, max_side: Option<u32>) -> Vec<PreloadedPhoto> {
    preload_with_progress(set, max_side, |_| {})
}

/// Like [`preload`], calling `progress` with the slot index as each photo finishes.
pub fn preload_with_progress(
    set: &ImageSet,
    max_side: Option<u32>,
    progress: impl Fn(usize) + Sync,
) -> Vec<PreloadedPhoto> {
    let paths: Vec<PathBuf> = set.iter().map(Path::to_path_buf).collect();

    paths
        .into_par_iter()
        .enumerate()
        .map(|(index, path)| {
            let result = load_photo(&path, max_side);
            match &result {
                Ok(photo) => debug!(
                    "Preloaded {} ({}x{})",
                    path.display(),
                    photo.width,
                    photo.height
                ),
                Err(e) => warn!("Failed to preload {}: {e}", path.display()),
            }
            progress(index);
            PreloadedPhoto {
                index,
                path,
                result,
            }
        })
        .collect()
}
