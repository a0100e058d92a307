use super::*;

#[test]
fn endpoints_are_exact_for_all_curves() {
    for ease in [Ease::Linear, Ease::OutQuad, Ease::OutCubic, Ease::InOutCubic] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn out_cubic_midpoint() {
    assert!((Ease::OutCubic.apply(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-2.0), 0.0);
    assert_eq!(Ease::Linear.apply(3.0), 1.0);
}

#[test]
fn default_is_out_cubic() {
    assert_eq!(Ease::default(), Ease::OutCubic);
}
