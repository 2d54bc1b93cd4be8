use crate::fractals::Escape;

pub const SATURATION: f32 = 0.7;
pub const LIGHTNESS: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Hue, saturation and lightness, all in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct ColorHSL {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl ColorHSL {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    let (p, q, t) = (p as f64, q as f64, t as f64);
    let channel = if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    };
    channel as f32
}

fn offset_hue(h: f32, offset: f64) -> f32 {
    (h as f64 + offset) as f32
}

#[inline]
fn to_byte(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn hsl_to_rgb(hsl: ColorHSL) -> Color {
    let ColorHSL {
        hue: h,
        saturation: s,
        lightness: l,
    } = hsl;

    if s == 0.0 {
        // achromatic
        let gray = to_byte(l);
        return Color::new(gray, gray, gray);
    }

    let q = if l < 0.5 {
        (l as f64 * (1.0 + s as f64)) as f32
    } else {
        l + s - l * s
    };
    let p = (2.0 * l as f64 - q as f64) as f32;

    Color::new(
        to_byte(hue_to_channel(p, q, offset_hue(h, 1.0 / 3.0))),
        to_byte(hue_to_channel(p, q, h)),
        to_byte(hue_to_channel(p, q, offset_hue(h, -1.0 / 3.0))),
    )
}

/// Bounded points are black; escaped points get the hue `n / max_iterations`.
pub fn set_color(escape: Escape, max_iterations: u32) -> Color {
    match escape {
        Escape::Bounded => Color::BLACK,
        Escape::Diverged(n) => {
            let hue = n as f32 / max_iterations as f32;
            hsl_to_rgb(ColorHSL::new(hue, SATURATION, LIGHTNESS))
        }
    }
}
