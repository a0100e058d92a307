use crate::{
    assets::store::PreparedTexture,
    foundation::error::{ScratchError, ScratchResult},
    surface::buffer::Surface,
};

/// Fill the surface with the texture tiled from the top-left corner
/// (pattern-repeat semantics). Full overwrite of the pixel buffer.
pub fn fill_tiled(surface: &mut Surface, texture: &PreparedTexture) -> ScratchResult<()> {
    if texture.width == 0 || texture.height == 0 {
        return Err(ScratchError::validation("texture must be non-empty"));
    }
    let tex_row_len = texture.width as usize * 4;
    if texture.rgba8_premul.len() != tex_row_len * texture.height as usize {
        return Err(ScratchError::surface(
            "texture buffer does not match its dimensions",
        ));
    }

    let surf_w = surface.width() as usize;
    let surf_h = surface.height() as usize;
    let tex = texture.rgba8_premul.clone();
    let dst = surface.data_mut();

    for y in 0..surf_h {
        let src_y = y % texture.height as usize;
        let src_row = &tex[src_y * tex_row_len..(src_y + 1) * tex_row_len];
        let dst_row = &mut dst[y * surf_w * 4..(y + 1) * surf_w * 4];

        // Whole-tile copies, then the remainder of the row.
        let mut x = 0usize;
        while x + texture.width as usize <= surf_w {
            dst_row[x * 4..(x + texture.width as usize) * 4].copy_from_slice(src_row);
            x += texture.width as usize;
        }
        let rem = surf_w - x;
        if rem > 0 {
            dst_row[x * 4..].copy_from_slice(&src_row[..rem * 4]);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/cover/pattern.rs"]
mod tests;
