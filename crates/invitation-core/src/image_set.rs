use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Ordered, read-only list of photo paths shared by every gallery component.
///
/// Cloning is cheap: all clones point at the same backing slice.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSet {
    photos: Arc<[PathBuf]>,
}

impl ImageSet {
    pub fn new(photos: Vec<PathBuf>) -> Self {
        Self {
            photos: Arc::from(photos),
        }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.photos.get(index).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.photos.iter().map(PathBuf::as_path)
    }

    /// Step `delta` slides from `index`, wrapping around the set.
    pub fn wrap(&self, index: usize, delta: isize) -> Option<usize> {
        wrap_index(index, delta, self.len())
    }
}

impl Default for ImageSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<PathBuf> for ImageSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// `(index + delta) mod len`, always non-negative. `None` when `len == 0`.
pub fn wrap_index(index: usize, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let n = len as isize;
    let base = (index % len) as isize;
    Some((base + delta).rem_euclid(n) as usize)
}
