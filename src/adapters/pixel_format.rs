//! Pixel format conversion helpers for presentation adapters.

/// Background the viewer's page shows through translucent pixels.
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Composites straight-alpha RGBA pixels over an opaque `background`, writing
/// opaque RGBA into `dst`.
///
/// # Panics
/// Panics if the buffers differ in length or are not a whole number of pixels.
pub fn flatten_rgba_onto(src: &[u8], dst: &mut [u8], background: [u8; 3]) {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );
    assert_eq!(
        dst.len(),
        src.len(),
        "dst length {} does not match src length {}",
        dst.len(),
        src.len()
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let alpha = u32::from(src_pixel[3]);

        for channel in 0..3 {
            let fg = u32::from(src_pixel[channel]) * alpha;
            let bg = u32::from(background[channel]) * (255 - alpha);
            dst_pixel[channel] = ((fg + bg + 127) / 255) as u8;
        }
        dst_pixel[3] = 255;
    }
}
