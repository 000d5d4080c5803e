//! Background music toggle.
//!
//! Playback can fail at any time (no output device, autoplay refused); the
//! toggle logs the failure and falls back to paused rather than surfacing
//! an error to the guest.

use tracing::{info, warn};

use crate::error::Result;

/// Audio output the toggle drives.
pub trait Playback {
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
}

#[derive(Debug)]
pub struct MusicToggle<P> {
    backend: P,
    playing: bool,
    has_interacted: bool,
}

impl<P: Playback> MusicToggle<P> {
    pub fn new(backend: P) -> Self {
        Self {
            backend,
            playing: false,
            has_interacted: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn has_interacted(&self) -> bool {
        self.has_interacted
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    /// Any click or touch on the page. The first one tries to start the
    /// music; later ones do nothing. Returns whether playback was attempted.
    pub fn on_first_interaction(&mut self) -> bool {
        if self.has_interacted {
            return false;
        }
        self.has_interacted = true;
        self.start("autoplay");
        true
    }

    /// Music button. Returns the new playing state.
    pub fn toggle(&mut self) -> bool {
        // The button press is itself the first interaction.
        self.has_interacted = true;

        if self.playing {
            self.backend.pause();
            self.playing = false;
            info!("Background music paused");
        } else {
            self.start("toggle");
        }
        self.playing
    }

    fn start(&mut self, reason: &str) {
        match self.backend.play() {
            Ok(()) => {
                self.playing = true;
                info!("Background music playing ({reason})");
            }
            Err(e) => {
                self.playing = false;
                warn!("Background music unavailable ({reason}): {e}");
            }
        }
    }
}
