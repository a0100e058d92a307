use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::{
    assets::store::{PreparedFont, PreparedTexture},
    card::config::CardConfig,
    cover,
    foundation::core::{BoundRect, SurfaceSize},
    foundation::error::ScratchResult,
    reveal::state::{Playback, Reveal, RevealState},
    scratch::pointer::PointerEvent,
    scratch::tracker,
    surface::buffer::Surface,
};

/// A mounted scratch card instance.
///
/// Owns the surface, the last computed erasure fraction, and the reveal
/// state machine; the host owns the window/element, delivers pointer and
/// resize events, and samples [`ScratchCard::overlay_opacity`] when
/// presenting. All inputs after [`ScratchCard::unmount`] are no-ops,
/// including texture delivery from a load that was still in flight.
pub struct ScratchCard {
    config: CardConfig,
    surface: Surface,
    texture: Option<PreparedTexture>,
    font: Option<PreparedFont>,
    reveal: Reveal,
    last_fraction: f64,
    playback: Box<dyn Playback>,
    mounted: bool,
}

impl ScratchCard {
    /// Mount a card: validate the configuration and create the surface at
    /// the element's current size.
    ///
    /// The surface starts blank; it stays scratchable while the texture is
    /// still loading, which is visually inconsequential.
    pub fn mount(
        config: CardConfig,
        size: SurfaceSize,
        playback: Box<dyn Playback>,
    ) -> ScratchResult<Self> {
        config.validate()?;
        let surface = Surface::new(size)?;
        let reveal = Reveal::new(config.fade);
        debug!(
            width = size.width,
            height = size.height,
            texture_src = %config.texture_src,
            "scratch card mounted"
        );
        Ok(Self {
            config,
            surface,
            texture: None,
            font: None,
            reveal,
            last_fraction: 0.0,
            playback,
            mounted: true,
        })
    }

    /// Deliver the decoded cover texture (and optional label font) and paint
    /// the cover.
    ///
    /// Late delivery after unmount is ignored; the texture is retained so
    /// the cover can be repainted after a resize.
    pub fn apply_texture(
        &mut self,
        texture: PreparedTexture,
        font: Option<PreparedFont>,
    ) -> ScratchResult<()> {
        if !self.mounted {
            trace!("texture delivered after unmount, ignoring");
            return Ok(());
        }
        cover::paint_cover(&mut self.surface, &texture, &self.config.label, font.as_ref())?;
        self.texture = Some(texture);
        self.font = font;
        self.last_fraction = self.surface.erased_fraction();
        Ok(())
    }

    /// Process one pointer movement sample.
    ///
    /// Maps the client position through the element's live bounding rect,
    /// erases a disc, recomputes the erasure fraction, and fires the reveal
    /// transition on the first threshold crossing. Mouse and touch samples
    /// take the identical path.
    pub fn on_pointer_move(&mut self, event: PointerEvent, rect: BoundRect) {
        if !self.mounted {
            return;
        }
        let local = event.to_local(rect);
        let outcome = tracker::scratch_sample(&mut self.surface, &self.config.scratch, local);
        self.last_fraction = outcome.erased_fraction;
        if outcome.crossed_threshold {
            self.trigger_reveal();
        }
    }

    fn trigger_reveal(&mut self) {
        if !self.reveal.fire(Instant::now()) {
            return;
        }
        debug!(
            fraction = self.last_fraction,
            threshold = self.config.scratch.reveal_threshold,
            "reveal threshold crossed"
        );
        if let Err(err) = self.playback.play() {
            // Autoplay refusal is a known soft failure; the fade still runs.
            warn!(error = %err, "playback request failed");
        }
    }

    /// Recreate the surface at a new element size.
    ///
    /// While covered, the cover is repainted from the retained texture;
    /// once revealed the surface stays transparent.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, size: SurfaceSize) -> ScratchResult<()> {
        if !self.mounted {
            return Ok(());
        }
        self.surface.resize(size)?;
        if self.reveal.state() == RevealState::Covered
            && let Some(texture) = &self.texture
        {
            cover::paint_cover(&mut self.surface, texture, &self.config.label, self.font.as_ref())?;
        }
        self.last_fraction = self.surface.erased_fraction();
        Ok(())
    }

    /// Cover opacity at `now`, for presentation.
    pub fn overlay_opacity(&self, now: Instant) -> f64 {
        self.reveal.overlay_opacity(now)
    }

    /// Current reveal state.
    pub fn reveal_state(&self) -> RevealState {
        self.reveal.state()
    }

    /// Erasure fraction computed for the most recent sample.
    pub fn erased_fraction(&self) -> f64 {
        self.last_fraction
    }

    /// The surface pixel buffer, for presentation.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Card configuration.
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Whether the card is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Tear the card down: every subsequent input (pointer, resize, late
    /// texture delivery) becomes a no-op.
    pub fn unmount(&mut self) {
        self.mounted = false;
        debug!("scratch card unmounted");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/component.rs"]
mod tests;
