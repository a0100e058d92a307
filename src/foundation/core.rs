use crate::foundation::error::{ScratchError, ScratchResult};

pub use kurbo::{Point, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Surface dimensions in device pixels.
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Construct a size, rejecting zero-area surfaces.
    pub fn new(width: u32, height: u32) -> ScratchResult<Self> {
        if width == 0 || height == 0 {
            return Err(ScratchError::validation(
                "surface width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Total pixel count.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Backing buffer length in bytes (RGBA8), checked for overflow.
    pub fn byte_len(self) -> ScratchResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| ScratchError::surface("surface byte length overflow"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Live client rectangle of the host element the surface is bound to.
///
/// The host recomputes this per pointer event (layout can shift underneath,
/// e.g. on resize); the engine never caches it.
pub struct BoundRect {
    /// Top-left corner in client (viewport) coordinates.
    pub origin: Point,
    /// On-screen width in client pixels.
    pub width: f64,
    /// On-screen height in client pixels.
    pub height: f64,
}

impl BoundRect {
    /// Construct a rectangle, rejecting non-finite or negative extents.
    pub fn new(origin: Point, width: f64, height: f64) -> ScratchResult<Self> {
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(ScratchError::validation("bound rect origin must be finite"));
        }
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ScratchError::validation(
                "bound rect extents must be finite and >= 0",
            ));
        }
        Ok(Self {
            origin,
            width,
            height,
        })
    }

    /// Map a client-coordinate point to surface-local coordinates.
    ///
    /// The rect origin maps to `(0, 0)`; the far corner maps to
    /// `(width, height)`.
    pub fn to_local(self, client: Point) -> Point {
        Point::new(client.x - self.origin.x, client.y - self.origin.y)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel (premultiplied).
    pub r: u8,
    /// Green channel (premultiplied).
    pub g: u8,
    /// Blue channel (premultiplied).
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 to premultiplied form.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Flatten to a `[r, g, b, a]` byte array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
