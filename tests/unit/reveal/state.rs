use std::time::Duration;

use super::*;

#[test]
fn fire_succeeds_exactly_once() {
    let mut reveal = Reveal::new(FadeSpec::default());
    assert_eq!(reveal.state(), RevealState::Covered);

    let t0 = Instant::now();
    assert!(reveal.fire(t0));
    assert_eq!(reveal.state(), RevealState::Revealed);

    // Repeat calls are no-ops and do not restart the fade.
    assert!(!reveal.fire(t0 + Duration::from_secs(5)));
    assert_eq!(reveal.overlay_opacity(t0 + Duration::from_secs(2)), 0.0);
}

#[test]
fn opacity_is_full_while_covered() {
    let reveal = Reveal::new(FadeSpec::default());
    assert_eq!(reveal.overlay_opacity(Instant::now()), 1.0);
}

#[test]
fn opacity_eases_from_one_to_zero() {
    let mut reveal = Reveal::new(FadeSpec {
        duration_ms: 1000,
        ease: Ease::OutCubic,
    });
    let t0 = Instant::now();
    reveal.fire(t0);

    assert_eq!(reveal.overlay_opacity(t0), 1.0);
    let early = reveal.overlay_opacity(t0 + Duration::from_millis(250));
    let late = reveal.overlay_opacity(t0 + Duration::from_millis(750));
    assert!(early > late, "fade must decrease: {early} vs {late}");
    assert!(early < 1.0 && late > 0.0);
    assert_eq!(reveal.overlay_opacity(t0 + Duration::from_millis(1000)), 0.0);
}

#[test]
fn opacity_before_reveal_instant_saturates() {
    let mut reveal = Reveal::new(FadeSpec::default());
    let t0 = Instant::now() + Duration::from_secs(1);
    reveal.fire(t0);
    // Sampling "before" the transition clamps to fade start.
    assert_eq!(reveal.overlay_opacity(Instant::now()), 1.0);
}

#[test]
fn fade_spec_validate_rejects_zero_duration() {
    assert!(
        FadeSpec {
            duration_ms: 0,
            ease: Ease::Linear,
        }
        .validate()
        .is_err()
    );
}
