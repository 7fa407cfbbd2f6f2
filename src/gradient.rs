// Looping horizontal color ramp used to fill the glyphs.
// Visual: the text is painted with a gradient three times as wide as the line
// that slides sideways, wrapping once per animation period.

use crate::error::Error;
use std::time::Duration;

/// Gradient is this many times wider than the text line.
pub const BACKGROUND_SCALE: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` or `#rgb`.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let bad = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| bad());
        match hex.len() {
            6 => Ok(Self { r: byte(0)?, g: byte(2)?, b: byte(4)? }),
            3 => Ok(Self { r: nibble(0)?, g: nibble(1)?, b: nibble(2)? }),
            _ => Err(bad()),
        }
    }

    /// Pack as 0x00RRGGBB for minifb.
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8;
        Rgb { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
    }
}

pub struct Gradient {
    stops: Vec<Rgb>,  // evenly spaced, left to right
    period: Duration, // one full slide across
}

impl Gradient {
    pub fn new(stops: Vec<Rgb>, period: Duration) -> Self {
        Self { stops, period }
    }

    /// Color at `u` in [0,1] along the ramp (wraps outside).
    pub fn sample(&self, u: f64) -> Rgb {
        match self.stops.len() {
            0 => Rgb { r: 255, g: 255, b: 255 },
            1 => self.stops[0],
            n => {
                let u = u.rem_euclid(1.0);
                let pos = u * (n - 1) as f64;
                let i = (pos.floor() as usize).min(n - 2);
                self.stops[i].lerp(self.stops[i + 1], pos - i as f64)
            }
        }
    }

    /// How far the ramp has slid at `elapsed`, in [0,1).
    pub fn phase(&self, elapsed: Duration) -> f64 {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return 0.0;
        }
        (elapsed.as_secs_f64() / period).fract()
    }

    /// Packed color for a pixel at `x_norm` (0 = left edge of the line, 1 = right edge).
    pub fn color_at(&self, x_norm: f64, elapsed: Duration) -> u32 {
        self.sample(x_norm / BACKGROUND_SCALE + self.phase(elapsed)).to_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::parse("#3b82f6").unwrap(), Rgb { r: 0x3b, g: 0x82, b: 0xf6 });
        assert_eq!(Rgb::parse("#fa0").unwrap(), Rgb { r: 0xff, g: 0xaa, b: 0x00 });
    }

    #[test]
    fn rejects_garbage() {
        for s in ["3b82f6", "#3b82f", "#zzzzzz", "#", "", "#3b82f6ff"] {
            assert!(matches!(Rgb::parse(s), Err(Error::InvalidColor(_))), "{s:?}");
        }
    }

    #[test]
    fn sample_hits_stops_at_ends() {
        let red = Rgb { r: 255, g: 0, b: 0 };
        let blue = Rgb { r: 0, g: 0, b: 255 };
        let g = Gradient::new(vec![red, blue], Duration::from_secs(6));
        assert_eq!(g.sample(0.0), red);
        assert_eq!(g.sample(0.5), Rgb { r: 128, g: 0, b: 128 });
        assert_eq!(g.sample(0.999_999), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn phase_wraps_each_period() {
        let g = Gradient::new(vec![], Duration::from_secs(6));
        assert_eq!(g.phase(Duration::from_secs(3)), 0.5);
        assert_eq!(g.phase(Duration::from_secs(6)), 0.0);
        assert_eq!(g.phase(Duration::from_secs(9)), 0.5);
    }
}
