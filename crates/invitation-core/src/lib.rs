pub mod carousel;
pub mod config;
pub mod consts;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod image_set;
pub mod input;
pub mod modal;
pub mod music;
pub mod preload;
pub mod viewer;
