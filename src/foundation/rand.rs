//! Deterministic pseudo-random sources.
//!
//! Everything decorative in a scene (particle positions, rain columns, leak
//! blobs) is drawn from these at scene construction time and stored in
//! immutable arrays, never re-rolled per frame.

#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Stable 64-bit hash of a label, independent of platform and process.
pub fn stable_hash64(label: &str) -> u64 {
    let mut state = 0xCBF2_9CE4_8422_2325u64;
    for &b in label.as_bytes() {
        state ^= u64::from(b);
        state = state.wrapping_mul(0x0000_0100_0000_01B3);
    }
    mix64(state)
}

pub(crate) fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic value in [0, 1) for `(label, index)`. Same inputs, same
/// output, regardless of call order or frame being rendered.
pub fn seeded_unit(label: &str, index: u64) -> f64 {
    let seed = stable_hash64(label) ^ mix64(index.wrapping_mul(0xD6E8_FEB8_6659_FD93));
    Rng64::new(seed).next_f64_01()
}

/// `seeded_unit` mapped into [lo, hi).
pub fn seeded_range(label: &str, index: u64, lo: f64, hi: f64) -> f64 {
    lo + seeded_unit(label, index) * (hi - lo)
}
