//! Scratchfx is a CPU engine for the scratch-card reveal effect.
//!
//! A scratch card is an opaque *cover* (a tiled texture plus a glowing
//! centered label) laid over an underlying media resource. Pointer movement
//! erases discs of the cover via destination-out compositing; once the
//! erased fraction of the surface crosses a threshold the card transitions
//! one-way from `Covered` to `Revealed`, starts a timed ease-out fade of the
//! cover, and requests playback on the underlying media.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: decode the cover texture and label font up front
//!    ([`decode_texture`] / [`load_font`]); the engine itself never does IO.
//! 2. **Paint**: tile the texture and stamp the glowing label onto the
//!    [`Surface`] ([`paint_cover`]).
//! 3. **Scratch**: for each pointer sample, map client coordinates through
//!    the live [`BoundRect`], erase a disc, and rescan the alpha channel
//!    ([`ScratchCard::on_pointer_move`]).
//! 4. **Reveal**: the first threshold crossing fires the one-way transition;
//!    the host samples [`ScratchCard::overlay_opacity`] to present the fade.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded event semantics**: all mutation goes through
//!   `&mut self`; the fraction recomputed for sample N is complete before
//!   sample N+1 is accepted.
//! - **No IO in the engine**: assets arrive decoded; the host owns files,
//!   windows, and the media element.
//! - **Premultiplied RGBA8** end-to-end.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod card;
mod cover;
mod foundation;
mod reveal;
mod scratch;
mod surface;

pub use animation::ease::Ease;
pub use assets::decode::{decode_texture, load_font};
pub use assets::store::{PreparedFont, PreparedTexture};
pub use card::component::ScratchCard;
pub use card::config::CardConfig;
pub use cover::label::{GlowStyle, LabelStyle, MAX_GLOW_RADIUS_PX, label_size_px};
pub use cover::pattern::fill_tiled;
pub use cover::paint_cover;
pub use foundation::core::{BoundRect, Point, Rect, Rgba8Premul, SurfaceSize, Vec2};
pub use foundation::error::{ScratchError, ScratchResult};
pub use reveal::state::{FadeSpec, Playback, Reveal, RevealState};
pub use scratch::pointer::PointerEvent;
pub use scratch::tracker::{ScratchOutcome, ScratchParams, scratch_sample};
pub use surface::blur::blur_rgba8_premul;
pub use surface::buffer::Surface;
pub use surface::composite::{PremulRgba8, destination_out, over, over_in_place};
