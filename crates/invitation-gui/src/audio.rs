use std::path::PathBuf;

use invitation_core::error::{InvitationError, Result};
use invitation_core::music::Playback;

/// Playback backend for builds without an audio output.
///
/// Every play request fails, which leaves the music toggle paused.
pub struct SilentOutput {
    track: Option<PathBuf>,
}

impl SilentOutput {
    pub fn new(track: Option<PathBuf>) -> Self {
        Self { track }
    }
}

impl Playback for SilentOutput {
    fn play(&mut self) -> Result<()> {
        match &self.track {
            Some(track) => Err(InvitationError::Playback(format!(
                "no audio output available for {}",
                track.display()
            ))),
            None => Err(InvitationError::Playback("no background track configured".into())),
        }
    }

    fn pause(&mut self) {}
}
