//! Cover rendering: the tiled texture plus the glowing centered label that
//! together form the scratchable overlay.

pub mod label;
pub mod pattern;

use crate::{
    assets::store::{PreparedFont, PreparedTexture},
    cover::label::LabelStyle,
    foundation::error::ScratchResult,
    surface::buffer::Surface,
};

/// Paint the full cover: tile the texture across the surface, then stamp the
/// label on top.
///
/// When no font is available the label is skipped; the cover stays
/// scratchable either way.
pub fn paint_cover(
    surface: &mut Surface,
    texture: &PreparedTexture,
    label: &LabelStyle,
    font: Option<&PreparedFont>,
) -> ScratchResult<()> {
    pattern::fill_tiled(surface, texture)?;
    if let Some(font) = font {
        label::paint_label(surface, label, font)?;
    }
    Ok(())
}
