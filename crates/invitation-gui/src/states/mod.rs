mod pointer;
mod textures;
mod ui;

pub use pointer::{PointerFrame, PointerState};
pub use textures::PhotoTextures;
pub use ui::UIState;
