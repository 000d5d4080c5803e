use invitation_core::error::{InvitationError, Result};
use invitation_core::music::{MusicToggle, Playback};

#[derive(Default)]
struct FakeOutput {
    refuse: bool,
    plays: usize,
    pauses: usize,
}

impl Playback for FakeOutput {
    fn play(&mut self) -> Result<()> {
        self.plays += 1;
        if self.refuse {
            Err(InvitationError::Playback("autoplay refused".into()))
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }
}

#[test]
fn test_first_interaction_starts_once() {
    let mut music = MusicToggle::new(FakeOutput::default());
    assert!(music.on_first_interaction());
    assert!(music.is_playing());
    assert!(!music.on_first_interaction());
    assert_eq!(music.backend().plays, 1);
}

#[test]
fn test_toggle_pauses_and_resumes() {
    let mut music = MusicToggle::new(FakeOutput::default());
    assert!(music.toggle());
    assert!(!music.toggle());
    assert_eq!(music.backend().pauses, 1);
    assert!(music.toggle());
    assert_eq!(music.backend().plays, 2);
}

#[test]
fn test_failed_play_falls_back_to_paused() {
    let mut music = MusicToggle::new(FakeOutput {
        refuse: true,
        ..FakeOutput::default()
    });
    assert!(music.on_first_interaction());
    assert!(!music.is_playing());
    assert!(!music.toggle());
    assert!(!music.is_playing());
    assert_eq!(music.backend().pauses, 0);
}

#[test]
fn test_toggle_counts_as_first_interaction() {
    let mut music = MusicToggle::new(FakeOutput::default());
    music.toggle();
    assert!(music.has_interacted());
    assert!(!music.on_first_interaction());
    assert_eq!(music.backend().plays, 1);
}

#[test]
fn test_first_click_on_music_button_leaves_music_playing() {
    // The button handler runs before the page-wide click hook in the same frame.
    let mut music = MusicToggle::new(FakeOutput::default());
    assert!(music.toggle());
    music.on_first_interaction();
    assert!(music.is_playing());
    assert_eq!(music.backend().pauses, 0);
}
