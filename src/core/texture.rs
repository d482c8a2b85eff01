//! Prozedurale Strähnen-Textur (RGBA8) für Cards ohne geladene Textur.
//!
//! Zeile 0 ist die Wurzel, die letzte Zeile die Spitze. Zufallswerte kommen
//! aus einem mulberry32-Generator, gleiche Parameter liefern byte-identische
//! Puffer.

use anyhow::Context;
use glam::{Vec3, Vec4};
use image::{ImageEncoder, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Obergrenze für Breite und Höhe einer erzeugten Textur.
pub const MAX_TEXTURE_SIZE: u32 = 4096;

/// sRGB-Farbe, serialisiert als `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn grey(value: u8) -> Self {
        Self([value, value, value])
    }

    fn to_vec3(self) -> Vec3 {
        let [r, g, b] = self.0;
        Vec3::new(r as f32, g as f32, b as f32) / 255.0
    }
}

impl TryFrom<String> for Rgb {
    type Error = anyhow::Error;

    fn try_from(value: String) -> anyhow::Result<Self> {
        let hex = value.strip_prefix('#').unwrap_or(value.as_str());
        anyhow::ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "Farbe '{}' ist nicht im Format #rrggbb",
            value
        );
        let channel = |i: usize| -> anyhow::Result<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .with_context(|| format!("Ungültiger Farbkanal in '{}'", value))
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        let [r, g, b] = color.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Parameter des Strähnen-Generators. Längen in Pixeln.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrandTextureParams {
    pub width: u32,
    pub height: u32,
    pub strands: u32,
    /// Anteil der Breite, über den die Strähnen verteilt werden
    pub strand_spread: f32,
    pub thickness_root: f32,
    pub thickness_tip: f32,
    /// Seitliche Zufallsverschiebung, relativ zum Strähnenabstand
    pub jitter: f32,
    pub wave_amp: f32,
    /// Wellen über die gesamte Höhe
    pub wave_freq: f32,
    /// Locken-Amplitude, wächst linear zur Spitze hin
    pub curl_amp: f32,
    pub seed: u32,
    pub root_color: Rgb,
    pub tip_color: Rgb,
    pub root_alpha: f32,
    pub tip_alpha: f32,
    /// Ausblendbreite links und rechts, relativ zur Breite (max. 0.49)
    pub horiz_feather: f32,
    pub background_alpha: f32,
}

impl Default for StrandTextureParams {
    fn default() -> Self {
        Self {
            width: 512,
            height: 2048,
            strands: 120,
            strand_spread: 0.9,
            thickness_root: 2.0,
            thickness_tip: 0.3,
            jitter: 0.6,
            wave_amp: 6.0,
            wave_freq: 3.0,
            curl_amp: 0.0,
            seed: 1,
            root_color: Rgb::grey(0x8c),
            tip_color: Rgb::grey(0x66),
            root_alpha: 1.0,
            tip_alpha: 0.0,
            horiz_feather: 0.1,
            background_alpha: 0.0,
        }
    }
}

/// mulberry32: kleiner 32-Bit-Generator mit reproduzierbarer Folge pro Seed.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Gleichverteilt in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Arbeitsfläche mit vormultiplizierten Float-Pixeln.
struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Vec4>,
}

impl Canvas {
    fn filled(width: u32, height: u32, fill: Vec4) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
        }
    }

    /// Zeichnet einen horizontalen Abschnitt `[center - half, center + half]`
    /// in Zeile `y` mit anteiliger Pixelabdeckung (source-over).
    fn blend_span(&mut self, y: u32, center: f32, half: f32, color: Vec3, alpha: f32) {
        let (left, right) = (center - half, center + half);
        let first = left.floor().max(0.0) as u32;
        let last = (right.ceil().max(0.0) as u32).min(self.width);
        let row = (y * self.width) as usize;
        for x in first..last {
            let px = x as f32;
            let coverage = ((px + 1.0).min(right) - px.max(left)).clamp(0.0, 1.0);
            let a = alpha * coverage;
            if a <= 0.0 {
                continue;
            }
            let dst = &mut self.pixels[row + x as usize];
            *dst = (color * a).extend(a) + *dst * (1.0 - a);
        }
    }

    /// Blendet Alpha links und rechts über `fade` Pixel linear auf 0 aus.
    fn feather(&mut self, fade: f32) {
        if fade <= 0.0 {
            return;
        }
        let w = self.width as f32;
        for x in 0..self.width {
            let cx = x as f32 + 0.5;
            let factor = (cx / fade).min((w - cx) / fade).clamp(0.0, 1.0);
            if factor >= 1.0 {
                continue;
            }
            for y in 0..self.height {
                self.pixels[(y * self.width + x) as usize] *= factor;
            }
        }
    }

    /// Wandelt in RGBA8 ohne Vormultiplikation.
    fn into_image(self) -> RgbaImage {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let p = self.pixels[(y * self.width + x) as usize];
            let rgb = if p.w > 0.0 { p.truncate() / p.w } else { Vec3::ZERO };
            Rgba([to_u8(rgb.x), to_u8(rgb.y), to_u8(rgb.z), to_u8(p.w)])
        })
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Erzeugt die Strähnen-Textur.
///
/// Jede Strähne läuft von der Wurzel (oben) zur Spitze (unten) und schwingt
/// seitlich mit Welle und Locke; Farbe, Alpha und Dicke werden entlang der
/// Höhe interpoliert.
pub fn generate_strand_texture(params: &StrandTextureParams) -> RgbaImage {
    let width = params.width.clamp(1, MAX_TEXTURE_SIZE);
    let height = params.height.clamp(1, MAX_TEXTURE_SIZE);
    let (w, h) = (width as f32, height as f32);

    let background = Vec4::new(0.0, 0.0, 0.0, params.background_alpha.clamp(0.0, 1.0));
    let mut canvas = Canvas::filled(width, height, background);
    let mut rng = Mulberry32::new(params.seed);

    let root_color = params.root_color.to_vec3();
    let tip_color = params.tip_color.to_vec3();
    let margin = (1.0 - params.strand_spread.clamp(0.0, 1.0)) * 0.5 * w;
    let count = params.strands as f32;

    for s in 0..params.strands {
        let base_x = lerp(margin, w - margin, (s as f32 + 0.5) / count);
        let x0 = base_x + (rng.next_f32() - 0.5) * params.jitter * (w / count);
        let phase = rng.next_f32() * TAU;
        let curl_phase = rng.next_f32() * TAU;

        for y in 0..height {
            let t = (y as f32 + 0.5) / h;
            let x = x0
                + (phase + t * TAU * params.wave_freq).sin() * params.wave_amp
                + (curl_phase + t * 3.0 * TAU).sin() * params.curl_amp * t;
            let half = lerp(params.thickness_root, params.thickness_tip, t).max(0.0) * 0.5;
            let alpha = lerp(params.root_alpha, params.tip_alpha, t).clamp(0.0, 1.0);
            canvas.blend_span(y, x, half, root_color.lerp(tip_color, t), alpha);
        }
    }

    canvas.feather(params.horiz_feather.clamp(0.0, 0.49) * w);
    log::debug!(
        "Strähnen-Textur {}x{} mit {} Strähnen erzeugt (Seed {})",
        width,
        height,
        params.strands,
        params.seed
    );
    canvas.into_image()
}

/// Fallback-Textur 64x256: vertikaler Grauverlauf zur transparenten Spitze
/// mit leichtem Rauschen.
pub fn default_hair_texture(seed: u32) -> RgbaImage {
    const WIDTH: u32 = 64;
    const HEIGHT: u32 = 256;
    // (Position, Grauwert, Alpha)
    const STOPS: [(f32, f32, f32); 3] = [(0.0, 90.0, 1.0), (0.7, 70.0, 0.4), (1.0, 60.0, 0.0)];

    let mut rng = Mulberry32::new(seed);
    let mut image = RgbaImage::new(WIDTH, HEIGHT);
    for y in 0..HEIGHT {
        let t = (y as f32 + 0.5) / HEIGHT as f32;
        let (lo, hi) = if t < STOPS[1].0 {
            (STOPS[0], STOPS[1])
        } else {
            (STOPS[1], STOPS[2])
        };
        let f = (t - lo.0) / (hi.0 - lo.0);
        let grey = lerp(lo.1, hi.1, f);
        let alpha = (lerp(lo.2, hi.2, f) * 255.0).round() as u8;
        for x in 0..WIDTH {
            let noise = (rng.next_f32() * 20.0).floor();
            let v = (grey + noise).round().min(255.0) as u8;
            image.put_pixel(x, y, Rgba([v, v, v, alpha]));
        }
    }
    image
}

/// Kodiert eine Textur als PNG, z.B. zum Speichern oder Hochladen durch den Host.
pub fn encode_png(image: &RgbaImage) -> anyhow::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgba8,
        )
        .context("PNG-Kodierung fehlgeschlagen")?;
    Ok(bytes)
}
