use image::RgbaImage;

/// Convert a decoded RGBA image to an egui ColorImage for texture
/// upload.
pub fn rgba_to_color_image(image: &RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    let pixels = image
        .pixels()
        .map(|p| egui::Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]))
        .collect();

    egui::ColorImage {
        size,
        pixels,
        source_size: Default::default(),
    }
}

/// Fully saturated mid-lightness color for a hue in degrees, matching
/// the measurement palette formula `hsl(h, 70%, 50%)`.
pub fn hsl_color(hue: f32) -> egui::Color32 {
    let h = hue.rem_euclid(360.0);
    let s = 0.7;
    let l = 0.5;

    let c = (1.0 - (2.0 * l - 1.0f32).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u32 {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    egui::Color32::from_rgb(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
