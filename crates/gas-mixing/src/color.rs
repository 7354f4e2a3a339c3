use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::SHADE_PER_BAR;

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert HSL to RGB.
    ///
    /// # Arguments
    /// * `hue` - Degrees, any value (wrapped into 0–360)
    /// * `saturation` - 0–1
    /// * `lightness` - 0–1
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 360.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = channel(l);
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::new(
            channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            channel(hue_to_rgb(p, q, h)),
            channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Weighted per-channel mix of two colors.
    pub fn blend(&self, weight: f64, other: &Rgb, other_weight: f64) -> Self {
        let mix = |a: u8, b: u8| -> u8 {
            (a as f64 * weight + b as f64 * other_weight)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    match t {
        t if t < 1.0 / 6.0 => p + (q - p) * 6.0 * t,
        t if t < 1.0 / 2.0 => q,
        t if t < 2.0 / 3.0 => p + (q - p) * (2.0 / 3.0 - t) * 6.0,
        _ => p,
    }
}

fn channel(fraction: f64) -> u8 {
    (fraction * 255.0).round().clamp(0.0, 255.0) as u8
}

/// A CSS color value as used by the mixing view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Transparent,
    White,
    /// Saturation and lightness in percent
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
    Rgb(Rgb),
    /// Alpha in 0–1
    Rgba(Rgb, f64),
}

impl Color {
    pub fn to_rgb(&self) -> Option<Rgb> {
        match *self {
            Color::Transparent => None,
            Color::White => Some(Rgb::new(255, 255, 255)),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => Some(Rgb::from_hsl(hue, saturation / 100.0, lightness / 100.0)),
            Color::Rgb(rgb) | Color::Rgba(rgb, _) => Some(rgb),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Transparent => write!(f, "transparent"),
            Color::White => write!(f, "white"),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({},{}%,{}%)", hue, saturation, lightness),
            Color::Rgb(c) => write!(f, "rgb({},{},{})", c.r, c.g, c.b),
            Color::Rgba(c, alpha) => write!(f, "rgba({},{},{},{:.2})", c.r, c.g, c.b, alpha),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Shade of a gas at `pressure_bar`: full saturation, darker with more gas.
///
/// An empty chamber is white (lightness 100%).
pub fn gas_shade(pressure_bar: f64, hue: f64) -> Color {
    let pressure = if pressure_bar.is_finite() { pressure_bar } else { 0.0 };
    Color::Hsl {
        hue,
        saturation: 100.0,
        lightness: (100.0 - SHADE_PER_BAR * pressure).clamp(0.0, 100.0),
    }
}

/// Color of the whole container once the barrier is gone.
///
/// The two initial shades are mixed in proportion to the chamber volumes.
pub fn blended_container(
    pressure_a_bar: f64,
    hue_a: f64,
    pressure_b_bar: f64,
    hue_b: f64,
    volume_ratio: f64,
) -> Color {
    let white = Rgb::new(255, 255, 255);
    let a = gas_shade(pressure_a_bar, hue_a).to_rgb().unwrap_or(white);
    let b = gas_shade(pressure_b_bar, hue_b).to_rgb().unwrap_or(white);

    let weight_a = volume_ratio / (1.0 + volume_ratio);
    let weight_b = 1.0 / (1.0 + volume_ratio);
    Color::Rgb(a.blend(weight_a, &b, weight_b))
}

/// Color of chamber B after gas A has been pushed into it.
///
/// Red and blue in proportion to the final partial pressures, more opaque with
/// more gas. Transparent when the chamber ends up empty.
pub fn compressed_chamber(final_pressure_a_bar: f64, final_pressure_b_bar: f64) -> Color {
    let sum = final_pressure_a_bar + final_pressure_b_bar;
    if !sum.is_finite() || sum <= 0.0 {
        return Color::Transparent;
    }

    let red = channel(final_pressure_a_bar / sum);
    let blue = channel(final_pressure_b_bar / sum);
    Color::Rgba(Rgb::new(red, 0, blue), (sum / 2.0).min(1.0))
}
