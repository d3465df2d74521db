use crate::foundation::error::{EngineError, EngineResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> EngineResult<Self> {
        if den == 0 {
            return Err(EngineError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(EngineError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Segment durations are authored in seconds and rounded to whole frames.
    pub fn frames(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// Straight-alpha color. Channels are 0..=255, alpha is 0..=1, matching the
/// CSS color strings the host renderer consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a,
        }
    }

    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)` and `rgba(..)` forms.
    pub fn parse(s: &str) -> EngineResult<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex)
                .ok_or_else(|| EngineError::validation(format!("invalid hex color '{s}'")));
        }
        if let Some(body) = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|b| b.strip_suffix(')'))
        {
            let parts: Vec<f64> = body
                .split(',')
                .map(|p| p.trim().parse::<f64>())
                .collect::<Result<_, _>>()
                .map_err(|_| EngineError::validation(format!("invalid rgb() color '{s}'")))?;
            return match parts.as_slice() {
                [r, g, b] => Ok(Self {
                    r: *r,
                    g: *g,
                    b: *b,
                    a: 1.0,
                }),
                [r, g, b, a] => Ok(Self {
                    r: *r,
                    g: *g,
                    b: *b,
                    a: *a,
                }),
                _ => Err(EngineError::validation(format!(
                    "rgb() color needs 3 or 4 components, got '{s}'"
                ))),
            };
        }
        Err(EngineError::validation(format!("unknown color form '{s}'")))
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        fn nib(b: u8) -> Option<u8> {
            (b as char).to_digit(16).map(|d| d as u8)
        }
        fn byte(hi: u8, lo: u8) -> Option<u8> {
            Some(nib(hi)? * 16 + nib(lo)?)
        }

        let b = hex.as_bytes();
        match b.len() {
            3 => Some(Self::rgb(
                byte(b[0], b[0])?,
                byte(b[1], b[1])?,
                byte(b[2], b[2])?,
            )),
            6 => Some(Self::rgb(
                byte(b[0], b[1])?,
                byte(b[2], b[3])?,
                byte(b[4], b[5])?,
            )),
            8 => Some(Self::rgba(
                byte(b[0], b[1])?,
                byte(b[2], b[3])?,
                byte(b[4], b[5])?,
                f64::from(byte(b[6], b[7])?) / 255.0,
            )),
            _ => None,
        }
    }

    /// CSS form: `#rrggbb` when fully opaque, `rgba(..)` otherwise.
    pub fn to_css(self) -> String {
        let r = self.r.round().clamp(0.0, 255.0) as u8;
        let g = self.g.round().clamp(0.0, 255.0) as u8;
        let b = self.b.round().clamp(0.0, 255.0) as u8;
        let a = self.a.clamp(0.0, 1.0);
        if a >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            // Alpha with enough precision to stay stable under re-parse.
            format!("rgba({r}, {g}, {b}, {})", trim_f64(a))
        }
    }
}

fn trim_f64(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    if s.is_empty() { "0".to_string() } else { s.to_string() }
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_frames_rounds_seconds() {
        let fps = Fps::new(30, 1).unwrap();
        assert_eq!(fps.frames(3.5), 105);
        assert_eq!(fps.frames(2.5), 75);
        assert_eq!(fps.frames(0.0), 0);
    }

    #[test]
    fn fps_rejects_zero() {
        assert!(Fps::new(0, 1).is_err());
        assert!(Fps::new(30, 0).is_err());
    }

    #[test]
    fn color_hex_roundtrip() {
        let c = Color::parse("#3b82f6").unwrap();
        assert_eq!(c.to_css(), "#3b82f6");
        let c = Color::parse("#fff").unwrap();
        assert_eq!(c.to_css(), "#ffffff");
    }

    #[test]
    fn color_rgba_forms() {
        let c = Color::parse("rgba(255, 255, 255, 0.25)").unwrap();
        assert_eq!(c.a, 0.25);
        assert_eq!(c.to_css(), "rgba(255, 255, 255, 0.25)");
    }

    #[test]
    fn color_bad_input_is_error() {
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("blue").is_err());
    }
}
