use super::*;

#[test]
fn canvas_rejects_zero_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(MAX_CANVAS_PX + 1, 10).is_err());
    let c = Canvas::new(64, 32).unwrap();
    assert_eq!(c.pixel_count(), 64 * 32);
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 64.0, 32.0));
}

#[test]
fn hex_rgb_is_lowercase_and_padded() {
    assert_eq!(Rgba8::opaque(255, 0, 10).to_hex_rgb(), "#ff000a");
    assert_eq!(Rgba8::BLACK.to_hex_rgb(), "#000000");
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = [64u8, 0, 128, 128];
    unpremultiply_px(&mut px);
    assert_eq!(px, [128, 0, 255, 128]);

    let mut opaque = [10u8, 20, 30, 255];
    unpremultiply_px(&mut opaque);
    assert_eq!(opaque, [10, 20, 30, 255]);
}
