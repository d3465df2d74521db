#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    Bezier(CubicBezier),
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Bezier(b) => b.apply(t),
        }
    }
}

/// CSS-style cubic-bezier timing curve through (0,0) and (1,1) with control
/// points (x1,y1), (x2,y2). x components must lie in [0,1] so progress is a
/// function of time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let u = self.solve_x(t);
        sample_axis(self.y1, self.y2, u)
    }

    // Newton iterations with a bisection fallback for flat derivatives.
    fn solve_x(self, x: f64) -> f64 {
        let mut u = x;
        for _ in 0..8 {
            let err = sample_axis(self.x1, self.x2, u) - x;
            if err.abs() < 1e-7 {
                return u;
            }
            let d = sample_axis_deriv(self.x1, self.x2, u);
            if d.abs() < 1e-6 {
                break;
            }
            u -= err / d;
            u = u.clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0f64, 1.0f64);
        u = x;
        for _ in 0..32 {
            let cur = sample_axis(self.x1, self.x2, u);
            if (cur - x).abs() < 1e-7 {
                break;
            }
            if cur < x {
                lo = u;
            } else {
                hi = u;
            }
            u = (lo + hi) / 2.0;
        }
        u
    }
}

fn sample_axis(p1: f64, p2: f64, u: f64) -> f64 {
    // Cubic bezier with endpoints 0 and 1.
    let v = 1.0 - u;
    3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u
}

fn sample_axis_deriv(p1: f64, p2: f64, u: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * p1 + 6.0 * v * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}
