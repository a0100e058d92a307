use std::time::{Duration, Instant};

use crate::{
    animation::ease::Ease,
    foundation::error::{ScratchError, ScratchResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Reveal state of a card. The transition is monotonic: `Revealed` never
/// reverts to `Covered` within a component's lifetime.
pub enum RevealState {
    /// Initial state; the cover is visible and scratchable.
    Covered,
    /// Terminal state; the cover fades out and playback has been requested.
    Revealed,
}

/// Playback handle for the underlying media resource.
///
/// The media element is externally owned; the engine only requests that
/// playback start when the card is revealed. A refusal (e.g. an autoplay
/// block) is logged by the caller and otherwise ignored.
pub trait Playback {
    /// Request playback start.
    fn play(&mut self) -> ScratchResult<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Timed fade applied to the cover once the card is revealed.
pub struct FadeSpec {
    /// Fade duration in milliseconds.
    #[serde(default = "default_fade_duration_ms")]
    pub duration_ms: u64,
    /// Easing applied to fade progress.
    #[serde(default)]
    pub ease: Ease,
}

fn default_fade_duration_ms() -> u64 {
    1000
}

impl Default for FadeSpec {
    fn default() -> Self {
        Self {
            duration_ms: default_fade_duration_ms(),
            ease: Ease::default(),
        }
    }
}

impl FadeSpec {
    /// Validate fade payload invariants.
    pub fn validate(&self) -> ScratchResult<()> {
        if self.duration_ms == 0 {
            return Err(ScratchError::validation("fade duration_ms must be > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
/// The Covered -> Revealed state machine plus its fade clock.
pub struct Reveal {
    state: RevealState,
    fade: FadeSpec,
    revealed_at: Option<Instant>,
}

impl Reveal {
    /// Create a machine in the `Covered` state.
    pub fn new(fade: FadeSpec) -> Self {
        Self {
            state: RevealState::Covered,
            fade,
            revealed_at: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Whether the terminal state has been reached.
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Fire the transition. Returns `true` only on the first call; repeat
    /// calls are no-ops and do not restart the fade.
    pub fn fire(&mut self, at: Instant) -> bool {
        if self.is_revealed() {
            return false;
        }
        self.state = RevealState::Revealed;
        self.revealed_at = Some(at);
        true
    }

    /// Cover opacity at `now`: 1.0 while covered, easing to 0.0 over the
    /// fade duration once revealed.
    pub fn overlay_opacity(&self, now: Instant) -> f64 {
        let Some(start) = self.revealed_at else {
            return 1.0;
        };
        let duration = Duration::from_millis(self.fade.duration_ms);
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= duration {
            return 0.0;
        }
        let t = elapsed.as_secs_f64() / duration.as_secs_f64();
        1.0 - self.fade.ease.apply(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/state.rs"]
mod tests;
