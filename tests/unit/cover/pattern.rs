use std::sync::Arc;

use super::*;
use crate::foundation::core::SurfaceSize;

fn checker_texture() -> PreparedTexture {
    // 2x2 texture with four distinct opaque pixels.
    #[rustfmt::skip]
    let px = vec![
        10, 0, 0, 255,   0, 20, 0, 255,
        0, 0, 30, 255,   40, 40, 40, 255,
    ];
    PreparedTexture {
        width: 2,
        height: 2,
        rgba8_premul: Arc::new(px),
    }
}

#[test]
fn tiling_repeats_from_top_left() {
    let tex = checker_texture();
    let mut s = Surface::new(SurfaceSize::new(5, 3).unwrap()).unwrap();
    fill_tiled(&mut s, &tex).unwrap();

    for y in 0..3u32 {
        for x in 0..5u32 {
            let expected_idx = ((y % 2) * 2 + (x % 2)) as usize * 4;
            let expected: [u8; 4] = tex.rgba8_premul[expected_idx..expected_idx + 4]
                .try_into()
                .unwrap();
            assert_eq!(s.pixel(x, y), Some(expected), "mismatch at ({x},{y})");
        }
    }
}

#[test]
fn tiling_overwrites_previous_contents() {
    let tex = checker_texture();
    let size = SurfaceSize::new(4, 4).unwrap();
    let mut s = Surface::new(size).unwrap();
    s.fill_from(&vec![9u8; size.byte_len().unwrap()]).unwrap();

    fill_tiled(&mut s, &tex).unwrap();
    assert_eq!(s.pixel(0, 0), Some([10, 0, 0, 255]));
    assert_eq!(s.erased_fraction(), 0.0);
}

#[test]
fn tiling_rejects_inconsistent_texture() {
    let bad = PreparedTexture {
        width: 2,
        height: 2,
        rgba8_premul: Arc::new(vec![0u8; 7]),
    };
    let mut s = Surface::new(SurfaceSize::new(4, 4).unwrap()).unwrap();
    assert!(fill_tiled(&mut s, &bad).is_err());
}
