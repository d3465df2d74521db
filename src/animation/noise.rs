//! String-keyed coherent value noise.
//!
//! Used for organic drift, shake and flicker on top of otherwise regular
//! motion. The key string is the sole source of decorrelation: two calls
//! with the same key and coordinates always agree, different keys are
//! unrelated even at identical coordinates. Output is in [-1, 1].

use crate::foundation::rand::{mix64, stable_hash64};

/// 2D coherent noise for `key` at `(x, y)`.
pub fn noise2(key: &str, x: f64, y: f64) -> f64 {
    noise3(key, x, y, 0.0)
}

/// 3D coherent noise for `key` at `(x, y, z)`.
pub fn noise3(key: &str, x: f64, y: f64, z: f64) -> f64 {
    let seed = stable_hash64(key);

    let (ix, fx) = split(x);
    let (iy, fy) = split(y);
    let (iz, fz) = split(z);

    let ux = fade(fx);
    let uy = fade(fy);
    let uz = fade(fz);

    let mut corners = [0.0f64; 8];
    for (i, c) in corners.iter_mut().enumerate() {
        let dx = (i & 1) as i64;
        let dy = ((i >> 1) & 1) as i64;
        let dz = ((i >> 2) & 1) as i64;
        *c = lattice(seed, ix + dx, iy + dy, iz + dz);
    }

    let x00 = lerp(corners[0], corners[1], ux);
    let x10 = lerp(corners[2], corners[3], ux);
    let x01 = lerp(corners[4], corners[5], ux);
    let x11 = lerp(corners[6], corners[7], ux);
    let y0 = lerp(x00, x10, uy);
    let y1 = lerp(x01, x11, uy);
    lerp(y0, y1, uz)
}

fn split(v: f64) -> (i64, f64) {
    let f = v.floor();
    (f as i64, v - f)
}

// Quintic fade keeps first and second derivatives continuous across cells.
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Deterministic lattice value in [-1, 1].
fn lattice(seed: u64, x: i64, y: i64, z: i64) -> f64 {
    let mut h = seed;
    h = mix64(h ^ (x as u64).wrapping_mul(0xD6E8_FEB8_6659_FD93));
    h = mix64(h ^ (y as u64).wrapping_mul(0xA076_1D64_78BD_642F));
    h = mix64(h ^ (z as u64).wrapping_mul(0xE703_7ED1_A0B4_28DB));
    let unit = ((h >> 11) as f64) * (1.0 / ((1u64 << 53) as f64));
    unit * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_same_coords_is_identical() {
        let a = noise2("camera.shake", 1.25, -3.5);
        let b = noise2("camera.shake", 1.25, -3.5);
        assert_eq!(a, b);
        let a3 = noise3("drift", 0.1, 0.2, 0.3);
        assert_eq!(a3, noise3("drift", 0.1, 0.2, 0.3));
    }

    #[test]
    fn output_is_bounded() {
        for i in 0..500 {
            let t = f64::from(i) * 0.173;
            let v = noise3("bounds", t, t * 0.7, t * 0.3);
            assert!((-1.0..=1.0).contains(&v), "v={v}");
        }
    }

    #[test]
    fn keys_decorrelate() {
        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;
        let mut any_diff = false;
        for i in 0..1000 {
            let t = f64::from(i) * 0.31;
            let a = noise2("key-a", t, 0.0);
            let b = noise2("key-b", t, 0.0);
            any_diff |= a != b;
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }
        assert!(any_diff);
        let corr = dot / (norm_a.sqrt() * norm_b.sqrt());
        assert!(corr.abs() < 0.2, "corr={corr}");
    }

    #[test]
    fn nearby_coordinates_vary_smoothly() {
        let step = 0.01;
        for i in 0..400 {
            let t = f64::from(i) * step;
            let d = (noise2("smooth", t + step, 0.4) - noise2("smooth", t, 0.4)).abs();
            // Lattice values span at most 2.0 per unit cell; with quintic
            // fade the local slope stays well under 4 per unit.
            assert!(d < 4.0 * step + 1e-9, "jump {d} at t={t}");
        }
    }

    #[test]
    fn integer_lattice_points_are_lattice_values() {
        let v = noise3("lat", 3.0, -2.0, 5.0);
        assert!((-1.0..=1.0).contains(&v));
        // No fractional part: interpolation must be exact at the corner.
        assert_eq!(v, noise3("lat", 3.0, -2.0, 5.0));
    }
}
