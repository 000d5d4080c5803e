/// Movement (in logical pixels, either axis) a pointer must exceed before a
/// gesture is locked as horizontal or vertical.
pub const DEFAULT_DEAD_ZONE: f32 = 10.0;

/// Visual zoom scale above which swipe and tap actions are suppressed at
/// gesture end.
pub const DEFAULT_ZOOM_TOLERANCE: f32 = 1.05;

/// Duration of every carousel slide transition, in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// A drag ending past this multiple of the container width (measured from
/// the left edge of the previous slide) advances to the next slide.
pub const DEFAULT_FORWARD_RATIO: f32 = 1.1;

/// A drag ending short of this multiple of the container width retreats to
/// the previous slide.
pub const DEFAULT_BACKWARD_RATIO: f32 = 0.9;

/// Net horizontal displacement the photo viewer needs at release to change
/// photo.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Horizontal distance between indicator dots in the viewer strip.
pub const DEFAULT_INDICATOR_PITCH: f32 = 16.0;

/// Delay between closing the all-photos grid and opening the viewer.
pub const DEFAULT_REOPEN_DELAY_MS: u64 = 100;

/// Contact count at which a touch gesture is treated as pinch/zoom.
pub const MULTI_TOUCH_CONTACTS: usize = 2;

/// Longest side of a preloaded photo used for on-screen textures.
pub const DEFAULT_PRELOAD_MAX_SIDE: u32 = 2048;
