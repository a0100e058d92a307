use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn destination_out_zero_coverage_is_noop() {
    let dst = [10, 20, 30, 200];
    assert_eq!(destination_out(dst, 0), dst);
}

#[test]
fn destination_out_full_coverage_clears_pixel() {
    let dst = [10, 20, 30, 200];
    assert_eq!(destination_out(dst, 255), [0, 0, 0, 0]);
}

#[test]
fn destination_out_partial_coverage_scales_all_channels() {
    let out = destination_out([255, 255, 255, 255], 128);
    assert_eq!(out, [127, 127, 127, 127]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    let src = vec![0u8; 4];
    assert!(over_in_place(&mut dst, &src, 1.0).is_err());
}
