use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::*;
use crate::foundation::core::Point;
use crate::foundation::error::ScratchError;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

struct CountingPlayback(Arc<AtomicUsize>);

impl Playback for CountingPlayback {
    fn play(&mut self) -> crate::foundation::error::ScratchResult<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct BlockedPlayback;

impl Playback for BlockedPlayback {
    fn play(&mut self) -> crate::foundation::error::ScratchResult<()> {
        Err(ScratchError::surface("autoplay blocked"))
    }
}

fn white_texture() -> PreparedTexture {
    PreparedTexture {
        width: 1,
        height: 1,
        rgba8_premul: Arc::new(vec![255, 255, 255, 255]),
    }
}

fn mounted_card(width: u32, height: u32) -> (ScratchCard, Arc<AtomicUsize>) {
    init_tracing();
    let plays = Arc::new(AtomicUsize::new(0));
    let config = CardConfig::new("clip.mp4", "foil.png");
    let mut card = ScratchCard::mount(
        config,
        SurfaceSize::new(width, height).unwrap(),
        Box::new(CountingPlayback(plays.clone())),
    )
    .unwrap();
    card.apply_texture(white_texture(), None).unwrap();
    (card, plays)
}

fn full_rect(width: u32, height: u32) -> BoundRect {
    BoundRect::new(Point::new(0.0, 0.0), f64::from(width), f64::from(height)).unwrap()
}

#[test]
fn mount_rejects_invalid_config() {
    let config = CardConfig::new("/abs.mp4", "foil.png");
    assert!(
        ScratchCard::mount(
            config,
            SurfaceSize::new(10, 10).unwrap(),
            Box::new(BlockedPlayback),
        )
        .is_err()
    );
}

#[test]
fn five_discs_reveal_exactly_once() {
    // 100x100 surface, radius-20 discs: one disc covers ~12.6%, five
    // non-overlapping discs ~63%, crossing the 0.45 threshold on the way.
    let (mut card, plays) = mounted_card(100, 100);
    let rect = full_rect(100, 100);

    card.on_pointer_move(
        PointerEvent::Mouse {
            client: Point::new(50.0, 50.0),
        },
        rect,
    );
    assert!((card.erased_fraction() - 0.1257).abs() < 0.003);
    assert_eq!(card.reveal_state(), RevealState::Covered);
    assert_eq!(plays.load(Ordering::SeqCst), 0);

    for (x, y) in [(20.0, 20.0), (80.0, 20.0), (20.0, 80.0), (80.0, 80.0)] {
        card.on_pointer_move(
            PointerEvent::Touch {
                client: Point::new(x, y),
            },
            rect,
        );
    }

    assert!(card.erased_fraction() > 0.45);
    assert_eq!(card.reveal_state(), RevealState::Revealed);
    assert_eq!(plays.load(Ordering::SeqCst), 1, "playback fires exactly once");
}

#[test]
fn revealed_state_is_monotonic() {
    let (mut card, plays) = mounted_card(50, 50);
    let rect = full_rect(50, 50);

    // One giant swipe erases everything.
    for y in [10.0, 25.0, 40.0] {
        for x in [10.0, 25.0, 40.0] {
            card.on_pointer_move(
                PointerEvent::Mouse {
                    client: Point::new(x, y),
                },
                rect,
            );
        }
    }
    assert_eq!(card.reveal_state(), RevealState::Revealed);

    // Further scratching never reverts the state or replays the video.
    for _ in 0..10 {
        card.on_pointer_move(
            PointerEvent::Mouse {
                client: Point::new(25.0, 25.0),
            },
            rect,
        );
    }
    assert_eq!(card.reveal_state(), RevealState::Revealed);
    assert_eq!(plays.load(Ordering::SeqCst), 1);
}

#[test]
fn pointer_coordinates_pass_through_the_live_rect() {
    let (mut card, _plays) = mounted_card(100, 100);

    // The element sits at (200, 300); a client event at its center maps to
    // the surface center.
    let rect = BoundRect::new(Point::new(200.0, 300.0), 100.0, 100.0).unwrap();
    card.on_pointer_move(
        PointerEvent::Mouse {
            client: Point::new(250.0, 350.0),
        },
        rect,
    );

    assert_eq!(card.surface().pixel(50, 50), Some([0, 0, 0, 0]));
    assert_eq!(card.surface().pixel(5, 5), Some([255, 255, 255, 255]));
}

#[test]
fn resize_recreates_surface_and_repaints_cover() {
    let (mut card, _plays) = mounted_card(300, 200);
    let rect = full_rect(300, 200);
    card.on_pointer_move(
        PointerEvent::Mouse {
            client: Point::new(150.0, 100.0),
        },
        rect,
    );
    assert!(card.erased_fraction() > 0.0);

    card.resize(SurfaceSize::new(600, 400).unwrap()).unwrap();
    assert_eq!(card.surface().width(), 600);
    assert_eq!(card.surface().height(), 400);
    // Cover repainted from the retained texture: nothing is erased.
    assert_eq!(card.erased_fraction(), 0.0);

    // A fresh erase at new-dimension coordinates registers.
    card.on_pointer_move(
        PointerEvent::Mouse {
            client: Point::new(500.0, 350.0),
        },
        full_rect(600, 400),
    );
    assert!(card.erased_fraction() > 0.0);
}

#[test]
fn blocked_playback_still_fades() {
    // The playback refusal path emits a warn; route it through the test
    // writer so the output is visible under --nocapture.
    init_tracing();
    let config = CardConfig::new("clip.mp4", "foil.png");
    let mut card = ScratchCard::mount(
        config,
        SurfaceSize::new(20, 20).unwrap(),
        Box::new(BlockedPlayback),
    )
    .unwrap();
    card.apply_texture(white_texture(), None).unwrap();

    let rect = full_rect(20, 20);
    card.on_pointer_move(
        PointerEvent::Mouse {
            client: Point::new(10.0, 10.0),
        },
        rect,
    );

    assert_eq!(card.reveal_state(), RevealState::Revealed);
    let now = Instant::now();
    assert_eq!(card.overlay_opacity(now + Duration::from_secs(2)), 0.0);
}

#[test]
fn unmounted_card_ignores_all_inputs() {
    let (mut card, plays) = mounted_card(100, 100);
    card.unmount();
    assert!(!card.is_mounted());

    let before = card.erased_fraction();
    card.on_pointer_move(
        PointerEvent::Mouse {
            client: Point::new(50.0, 50.0),
        },
        full_rect(100, 100),
    );
    assert_eq!(card.erased_fraction(), before);

    // Late texture delivery from an in-flight load is a no-op, not an error.
    card.apply_texture(white_texture(), None).unwrap();
    card.resize(SurfaceSize::new(10, 10).unwrap()).unwrap();
    assert_eq!(card.surface().width(), 100);
    assert_eq!(plays.load(Ordering::SeqCst), 0);
}

#[test]
fn scratching_before_texture_arrives_is_harmless() {
    let plays = Arc::new(AtomicUsize::new(0));
    let config = CardConfig::new("clip.mp4", "foil.png");
    let mut card = ScratchCard::mount(
        config,
        SurfaceSize::new(100, 100).unwrap(),
        Box::new(CountingPlayback(plays.clone())),
    )
    .unwrap();

    // Blank surface: every pixel is already transparent, so the fraction is
    // 1.0 and the reveal fires on the very first sample. Accepted race: in
    // practice the texture load wins against the first pointer event.
    card.on_pointer_move(
        PointerEvent::Mouse {
            client: Point::new(50.0, 50.0),
        },
        full_rect(100, 100),
    );
    assert_eq!(card.reveal_state(), RevealState::Revealed);
}
