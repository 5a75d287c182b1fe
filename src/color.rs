//! Color math: hex/RGB/HSL conversions, random palettes, shade ramps,
//! and contrast selection.

use rand::RngExt;

use crate::types::{PaletteEntry, Rgb};

/// Number of swatches in a fresh palette.
pub const PALETTE_SIZE: usize = 5;

/// Number of entries in a shade ramp: 5 darker, the base, 4 lighter.
pub const SHADE_COUNT: usize = 10;

/// Parse a hex color (with or without leading `#`) into an RGB triple.
///
/// Returns `None` unless the string is exactly six hex digits after the
/// optional `#`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    // from_str_radix tolerates a leading sign, so check the digits
    // themselves before parsing.
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(Rgb {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    })
}

/// Format an RGB triple as `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Convert HSL to RGB. Hue is in degrees, saturation and lightness are
/// percentages in [0, 100].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let s = s / 100.0;
    let l = l / 100.0;
    let k = |n: f64| (n + h / 30.0) % 12.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let m = (k(n) - 3.0).min(9.0 - k(n)).min(1.0);
        l - a * m.max(-1.0)
    };
    Rgb {
        r: channel(f(0.0)),
        g: channel(f(8.0)),
        b: channel(f(4.0)),
    }
}

fn channel(value: f64) -> u8 {
    (255.0 * value).round().clamp(0.0, 255.0) as u8
}

/// Generate a random swatch color. Hue is drawn uniformly unless given;
/// saturation stays in [70, 90) and lightness in [45, 65) so swatches
/// never come out near-black, near-white, or washed out.
pub fn generate_color(rng: &mut impl RngExt, base_hue: Option<f64>) -> Rgb {
    let hue = base_hue.unwrap_or_else(|| rng.random_range(0.0..360.0));
    let saturation = rng.random_range(70.0..90.0);
    let lightness = rng.random_range(45.0..65.0);
    hsl_to_rgb(hue, saturation, lightness)
}

/// Build a fresh palette of [`PALETTE_SIZE`] unlocked swatches.
pub fn initial_palette(rng: &mut impl RngExt) -> Vec<PaletteEntry> {
    (0..PALETTE_SIZE)
        .map(|_| PaletteEntry::unlocked(generate_color(&mut *rng, None)))
        .collect()
}

/// Regenerate a palette in place order: locked entries are copied
/// unchanged, unlocked entries get a fresh color.
pub fn generate_palette(rng: &mut impl RngExt, entries: &[PaletteEntry]) -> Vec<PaletteEntry> {
    entries
        .iter()
        .map(|entry| {
            if entry.locked {
                *entry
            } else {
                PaletteEntry::unlocked(generate_color(&mut *rng, None))
            }
        })
        .collect()
}

/// Derive the 10-step shade ramp for a base color, darkest first.
///
/// Darker shades are inserted at the front as the factor grows, so the
/// most-darkened shade ends up at index 0 and the least-darkened next to
/// the base. The base itself sits at index 5, followed by four
/// progressively lighter shades. Returns an empty vec if the hex does
/// not parse.
pub fn generate_shades(hex: &str) -> Vec<String> {
    let Some(rgb) = hex_to_rgb(hex) else {
        return Vec::new();
    };

    let mut shades = Vec::with_capacity(SHADE_COUNT);
    for i in 1..=5 {
        let factor = 1.0 - i as f64 * 0.15;
        shades.insert(0, rgb_to_hex(scale(rgb, factor)));
    }

    if hex.starts_with('#') {
        shades.push(hex.to_string());
    } else {
        shades.push(format!("#{hex}"));
    }

    for i in 1..=4 {
        let factor = 1.0 + i as f64 * 0.15;
        shades.push(rgb_to_hex(scale(rgb, factor)));
    }
    shades
}

fn scale(rgb: Rgb, factor: f64) -> Rgb {
    Rgb {
        r: channel_scale(rgb.r, factor),
        g: channel_scale(rgb.g, factor),
        b: channel_scale(rgb.b, factor),
    }
}

fn channel_scale(value: u8, factor: f64) -> u8 {
    (value as f64 * factor).round().clamp(0.0, 255.0) as u8
}

/// Pick a readable text color for a swatch background: black on bright
/// colors, white on dark ones. Falls back to black on unparseable input.
pub fn contrast_color(hex: &str) -> &'static str {
    let Some(rgb) = hex_to_rgb(hex) else {
        return "#000000";
    };
    let luma = 0.299 * rgb.r as f64 + 0.587 * rgb.g as f64 + 0.114 * rgb.b as f64;
    if luma > 128.0 { "#000000" } else { "#ffffff" }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn hex_parses_with_and_without_hash() {
        let expected = Some(Rgb {
            r: 0x21,
            g: 0x96,
            b: 0xf3,
        });
        assert_eq!(hex_to_rgb("#2196f3"), expected);
        assert_eq!(hex_to_rgb("2196f3"), expected);
        assert_eq!(hex_to_rgb("2196F3"), expected);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(hex_to_rgb("zzzzzz"), None);
        assert_eq!(hex_to_rgb("12345"), None);
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("1234567"), None);
        assert_eq!(hex_to_rgb(""), None);
        // six characters, but not six hex digits
        assert_eq!(hex_to_rgb("+23456"), None);
        assert_eq!(hex_to_rgb("-23456"), None);
        assert_eq!(hex_to_rgb("#+2345"), None);
    }

    #[test]
    fn hex_round_trips_through_rgb() {
        for hex in ["#000000", "#ffffff", "#2196f3", "#0a0b0c"] {
            let rgb = hex_to_rgb(hex).unwrap();
            assert_eq!(rgb_to_hex(rgb), hex);
        }
    }

    #[test]
    fn rgb_round_trips_through_hex() {
        let colors = [
            Rgb { r: 0, g: 0, b: 0 },
            Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
            Rgb { r: 1, g: 2, b: 3 },
            Rgb {
                r: 200,
                g: 100,
                b: 50,
            },
        ];
        for rgb in colors {
            assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), Some(rgb));
        }
    }

    #[test]
    fn hsl_hits_the_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(
            hsl_to_rgb(0.0, 0.0, 100.0),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn generated_colors_stay_in_the_swatch_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let rgb = generate_color(&mut rng, None);
            // lightness in [45, 65) keeps every channel away from the extremes
            let max = rgb.r.max(rgb.g).max(rgb.b);
            let min = rgb.r.min(rgb.g).min(rgb.b);
            assert!(max > 25, "too dark: {rgb:?}");
            assert!(min < 230, "too light: {rgb:?}");
        }
    }

    #[test]
    fn generate_color_respects_a_fixed_hue() {
        let mut rng = StdRng::seed_from_u64(7);
        // hue 0 means red dominates both green and blue
        let rgb = generate_color(&mut rng, Some(0.0));
        assert!(rgb.r > rgb.g);
        assert!(rgb.r > rgb.b);
    }

    #[test]
    fn locked_entries_survive_regeneration() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut palette = initial_palette(&mut rng);
        assert_eq!(palette.len(), PALETTE_SIZE);
        assert!(palette.iter().all(|entry| !entry.locked));

        palette[1].locked = true;
        palette[3].locked = true;
        let before = palette.clone();

        let next = generate_palette(&mut rng, &palette);
        assert_eq!(next.len(), before.len());
        assert_eq!(next[1], before[1]);
        assert_eq!(next[3], before[3]);
        assert!(!next[0].locked);
        assert!(!next[2].locked);
        assert!(!next[4].locked);
    }

    #[test]
    fn shade_ramp_is_ten_entries_around_the_base() {
        let shades = generate_shades("#2196f3");
        assert_eq!(shades.len(), SHADE_COUNT);
        assert_eq!(shades[5], "#2196f3");

        let rgbs: Vec<Rgb> = shades.iter().map(|s| hex_to_rgb(s).unwrap()).collect();
        for pair in rgbs.windows(2) {
            assert!(pair[0].r <= pair[1].r);
            assert!(pair[0].g <= pair[1].g);
            assert!(pair[0].b <= pair[1].b);
        }
    }

    #[test]
    fn shade_ramp_rejects_bad_input() {
        assert!(generate_shades("nope").is_empty());
        assert!(generate_shades("#123").is_empty());
    }

    #[test]
    fn shade_ramp_clamps_bright_channels() {
        let shades = generate_shades("#ffffff");
        assert_eq!(shades.len(), SHADE_COUNT);
        for shade in &shades[5..] {
            assert_eq!(shade.as_str(), "#ffffff");
        }
    }

    #[test]
    fn contrast_prefers_black_on_bright_and_white_on_dark() {
        assert_eq!(contrast_color("#ffffff"), "#000000");
        assert_eq!(contrast_color("#000000"), "#ffffff");
        assert_eq!(contrast_color("#2196f3"), "#ffffff");
        assert_eq!(contrast_color("not-a-color"), "#000000");
    }
}
