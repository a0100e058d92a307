use crate::foundation::core::{BoundRect, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
/// One pointer movement sample delivered by the host.
///
/// Mouse and single-touch input share the same coordinate mapping and the
/// same erase path; the distinction exists only because hosts dispatch them
/// from two different event sources.
pub enum PointerEvent {
    /// Mouse movement, in client (viewport) coordinates.
    Mouse {
        /// Pointer position in client coordinates.
        client: Point,
    },
    /// First-touch movement, in client (viewport) coordinates.
    Touch {
        /// Touch position in client coordinates.
        client: Point,
    },
}

impl PointerEvent {
    /// Client-coordinate position of the sample.
    pub fn client(self) -> Point {
        match self {
            Self::Mouse { client } | Self::Touch { client } => client,
        }
    }

    /// Map the sample to surface-local coordinates using the element's
    /// live bounding rectangle.
    pub fn to_local(self, rect: BoundRect) -> Point {
        rect.to_local(self.client())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scratch/pointer.rs"]
mod tests;
