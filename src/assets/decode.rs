use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::store::{PreparedFont, PreparedTexture},
    foundation::error::{ScratchError, ScratchResult},
};

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_texture(bytes: &[u8]) -> ScratchResult<PreparedTexture> {
    let dyn_img = image::load_from_memory(bytes).context("decode texture from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedTexture {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Parse TTF/OTF bytes into a prepared `fontdue` face.
pub fn load_font(bytes: &[u8]) -> ScratchResult<PreparedFont> {
    let font = fontdue::Font::from_bytes(bytes.to_vec(), fontdue::FontSettings::default())
        .map_err(|e| ScratchError::asset(format!("parse font: {e}")))?;
    Ok(PreparedFont {
        font: Arc::new(font),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
