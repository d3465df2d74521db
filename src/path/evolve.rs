//! Progressive path reveal ("draw-on" animation).
//!
//! A stroke-dash trick: dashing the whole path as one dash of its full arc
//! length and sliding the dash offset reveals a continuous prefix of the
//! path, monotonically in progress, without any clip mask.

use kurbo::{BezPath, CubicBez, ParamCurve, ParamCurveArclen, Point, Shape};

use crate::foundation::error::{EngineError, EngineResult};

const ARCLEN_ACCURACY: f64 = 1e-3;

/// Dash specification revealing a prefix of a path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathEvolution {
    /// Total arc length of the path.
    pub length: f64,
    /// Single dash covering the full path (`stroke-dasharray`).
    pub dash_array: f64,
    /// Dash offset hiding the unrevealed suffix (`stroke-dashoffset`).
    pub dash_offset: f64,
}

impl PathEvolution {
    /// Arc length revealed by this specification.
    pub fn revealed_len(self) -> f64 {
        (self.length - self.dash_offset).clamp(0.0, self.length)
    }
}

/// Evolve `path` to `progress` in [0, 1] (values outside are clamped).
pub fn evolve_path(progress: f64, path: &BezPath) -> PathEvolution {
    let length = path_length(path);
    let p = progress.clamp(0.0, 1.0);
    PathEvolution {
        length,
        dash_array: length,
        dash_offset: (1.0 - p) * length,
    }
}

/// Evolve an SVG path `d` string.
pub fn evolve_svg(progress: f64, d: &str) -> EngineResult<PathEvolution> {
    let path = parse_svg_path(d)?;
    Ok(evolve_path(progress, &path))
}

/// Total arc length of every segment in `path`.
pub fn path_length(path: &BezPath) -> f64 {
    path.segments().map(|seg| seg.arclen(ARCLEN_ACCURACY)).sum()
}

pub fn parse_svg_path(d: &str) -> EngineResult<BezPath> {
    BezPath::from_svg(d)
        .map_err(|e| EngineError::validation(format!("invalid SVG path '{d}': {e}")))
}

/// Horizontally-eased cubic connector between two points, the shape used for
/// node-graph edges. Control points sit at the midpoint X of both ends.
#[derive(Clone, Copy, Debug)]
pub struct Connector {
    cubic: CubicBez,
}

impl Connector {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let mid = (x1 + x2) / 2.0;
        Self {
            cubic: CubicBez::new(
                Point::new(x1, y1),
                Point::new(mid, y1),
                Point::new(mid, y2),
                Point::new(x2, y2),
            ),
        }
    }

    pub fn to_svg(&self) -> String {
        let c = self.cubic;
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            c.p0.x, c.p0.y, c.p1.x, c.p1.y, c.p2.x, c.p2.y, c.p3.x, c.p3.y
        )
    }

    pub fn to_bez_path(&self) -> BezPath {
        self.cubic.to_path(ARCLEN_ACCURACY)
    }

    /// Point at curve parameter `t` in [0, 1], for dots traveling along the
    /// edge.
    pub fn point_at(&self, t: f64) -> Point {
        self.cubic.eval(t.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(len: f64) -> BezPath {
        parse_svg_path(&format!("M 0 0 L {len} 0")).unwrap()
    }

    #[test]
    fn endpoints_reveal_none_and_all() {
        let path = line(100.0);
        let none = evolve_path(0.0, &path);
        let all = evolve_path(1.0, &path);
        assert_eq!(none.revealed_len(), 0.0);
        assert_eq!(all.revealed_len(), all.length);
        assert!((all.length - 100.0).abs() < 1e-6);
    }

    #[test]
    fn reveal_is_monotonic_in_progress() {
        let path = parse_svg_path("M 0 0 C 50 0, 50 80, 100 80 L 160 80").unwrap();
        let mut prev = -1.0;
        for i in 0..=50 {
            let p = f64::from(i) / 50.0;
            let revealed = evolve_path(p, &path).revealed_len();
            assert!(revealed >= prev, "p={p}");
            prev = revealed;
        }
    }

    #[test]
    fn out_of_range_progress_clamps() {
        let path = line(40.0);
        assert_eq!(evolve_path(-2.0, &path).revealed_len(), 0.0);
        let over = evolve_path(3.0, &path);
        assert_eq!(over.revealed_len(), over.length);
    }

    #[test]
    fn dash_spec_is_consistent() {
        let path = line(80.0);
        let e = evolve_path(0.25, &path);
        assert_eq!(e.dash_array, e.length);
        assert!((e.dash_offset - 60.0).abs() < 1e-6);
        assert!((e.revealed_len() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn bad_svg_is_validation_error() {
        assert!(evolve_svg(0.5, "M x y").is_err());
    }

    #[test]
    fn connector_endpoints_and_midpoint() {
        let c = Connector::new(0.0, 0.0, 100.0, 60.0);
        let start = c.point_at(0.0);
        let end = c.point_at(1.0);
        assert_eq!((start.x, start.y), (0.0, 0.0));
        assert_eq!((end.x, end.y), (100.0, 60.0));
        let mid = c.point_at(0.5);
        assert!((mid.x - 50.0).abs() < 1e-9);
        assert!((mid.y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn connector_svg_parses_back() {
        let c = Connector::new(10.0, 20.0, 200.0, 120.0);
        let parsed = parse_svg_path(&c.to_svg()).unwrap();
        let direct = c.to_bez_path();
        assert!((path_length(&parsed) - path_length(&direct)).abs() < 1e-3);
    }
}
