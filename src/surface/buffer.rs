use rayon::prelude::*;

use crate::{
    foundation::core::{Point, SurfaceSize},
    foundation::error::{ScratchError, ScratchResult},
    surface::composite::{self, PremulRgba8},
};

/// The scratch surface: a row-major premultiplied RGBA8 pixel buffer sized
/// to the host element's bounding box.
///
/// One component instance owns exactly one surface; all mutation goes
/// through `&mut self`, so samples are processed strictly in dispatch order.
#[derive(Clone, Debug)]
pub struct Surface {
    size: SurfaceSize,
    data: Vec<u8>,
}

impl Surface {
    /// Create a fully transparent surface.
    pub fn new(size: SurfaceSize) -> ScratchResult<Self> {
        let len = size.byte_len()?;
        Ok(Self {
            size,
            data: vec![0u8; len],
        })
    }

    /// Surface dimensions.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Raw pixel bytes (row-major premultiplied RGBA8).
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw pixel bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Recreate the backing buffer at a new size.
    ///
    /// Previous contents are discarded; the new buffer starts fully
    /// transparent. The caller repaints the cover if one is still wanted.
    pub fn resize(&mut self, size: SurfaceSize) -> ScratchResult<()> {
        let len = size.byte_len()?;
        self.size = size;
        self.data.clear();
        self.data.resize(len, 0);
        Ok(())
    }

    /// Read one pixel; `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = (y as usize * self.size.width as usize + x as usize) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Overwrite the whole surface from a same-sized RGBA8 buffer.
    pub fn fill_from(&mut self, pixels: &[u8]) -> ScratchResult<()> {
        if pixels.len() != self.data.len() {
            return Err(ScratchError::surface(
                "fill_from expects a buffer matching width*height*4",
            ));
        }
        self.data.copy_from_slice(pixels);
        Ok(())
    }

    /// Composite a premultiplied RGBA8 tile over the surface with its
    /// top-left corner at `(dx, dy)`, clipping at the surface edges.
    pub fn composite_over(
        &mut self,
        src: &[u8],
        src_w: u32,
        src_h: u32,
        dx: i64,
        dy: i64,
    ) -> ScratchResult<()> {
        if src.len() != src_w as usize * src_h as usize * 4 {
            return Err(ScratchError::surface(
                "composite_over expects src matching src_w*src_h*4",
            ));
        }
        let w = i64::from(self.size.width);
        let h = i64::from(self.size.height);
        for sy in 0..i64::from(src_h) {
            let py = dy + sy;
            if py < 0 || py >= h {
                continue;
            }
            for sx in 0..i64::from(src_w) {
                let px = dx + sx;
                if px < 0 || px >= w {
                    continue;
                }
                let si = (sy as usize * src_w as usize + sx as usize) * 4;
                let di = (py as usize * self.size.width as usize + px as usize) * 4;
                let out = composite::over(
                    [
                        self.data[di],
                        self.data[di + 1],
                        self.data[di + 2],
                        self.data[di + 3],
                    ],
                    [src[si], src[si + 1], src[si + 2], src[si + 3]],
                    1.0,
                );
                self.data[di..di + 4].copy_from_slice(&out);
            }
        }
        Ok(())
    }

    /// Erase a hard-edged disc centered at `center` via destination-out
    /// compositing, clipped to the surface.
    ///
    /// Pixel membership is tested at the pixel center, so the erased area
    /// tracks the ideal disc area to within rasterization error.
    pub fn erase_disc(&mut self, center: Point, radius: f64) {
        if !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let w = self.size.width as i64;
        let h = self.size.height as i64;
        let r2 = radius * radius;

        let x0 = ((center.x - radius).floor() as i64).max(0);
        let x1 = ((center.x + radius).ceil() as i64).min(w - 1);
        let y0 = ((center.y - radius).floor() as i64).max(0);
        let y1 = ((center.y + radius).ceil() as i64).min(h - 1);
        if x0 > x1 || y0 > y1 {
            return;
        }

        for y in y0..=y1 {
            let dy = y as f64 + 0.5 - center.y;
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - center.x;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let idx = (y as usize * self.size.width as usize + x as usize) * 4;
                let out = composite::destination_out(
                    [
                        self.data[idx],
                        self.data[idx + 1],
                        self.data[idx + 2],
                        self.data[idx + 3],
                    ],
                    255,
                );
                self.data[idx..idx + 4].copy_from_slice(&out);
            }
        }
    }

    /// Fraction of pixels that are fully transparent (alpha == 0), in
    /// `[0, 1]`.
    ///
    /// Every call is a fresh full-buffer scan, O(width*height). The scan is
    /// parallelized but observably identical to a sequential pass.
    pub fn erased_fraction(&self) -> f64 {
        let erased = self
            .data
            .par_chunks_exact(4)
            .filter(|px| px[3] == 0)
            .count();
        erased as f64 / self.size.pixel_count() as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/buffer.rs"]
mod tests;
