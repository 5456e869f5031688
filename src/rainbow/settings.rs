//! Per-run color settings.

use super::palette::{foreground_code, PALETTE_SIZE};

/// Default horizontal rainbow frequency (color steps per column).
pub const DEFAULT_FREQ_H: f64 = 0.23;

/// Default vertical rainbow frequency (color steps per line).
pub const DEFAULT_FREQ_V: f64 = 0.1;

/// Immutable gradient parameters for one invocation.
///
/// Built once at startup. Clock and random seeds are passed in explicitly so
/// the colorizer is deterministic for a given value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorConfig {
    /// Color steps per column
    pub freq_h: f64,
    /// Color steps per line
    pub freq_v: f64,
    /// Fractional palette rotation in `[0, 1)`
    pub phase_offset: f64,
    /// Whole-entry palette rotation
    pub index_offset: i64,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FREQ_H, DEFAULT_FREQ_V)
    }
}

impl ColorConfig {
    /// Create settings with the given frequencies and no rotation.
    pub fn new(freq_h: f64, freq_v: f64) -> Self {
        Self {
            freq_h,
            freq_v,
            phase_offset: 0.0,
            index_offset: 0,
        }
    }

    /// Set the fractional rotation, wrapped into `[0, 1)`.
    pub fn with_phase_offset(mut self, phase_offset: f64) -> Self {
        let wrapped = phase_offset.rem_euclid(1.0);
        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        self.phase_offset = if wrapped >= 1.0 { 0.0 } else { wrapped };
        self
    }

    /// Derive the rotation from a wall-clock time: seconds mod 10, in tenths.
    pub fn with_clock_phase(self, unix_seconds: i64) -> Self {
        self.with_phase_offset(unix_seconds.rem_euclid(10) as f64 / 10.0)
    }

    /// Set the whole-entry palette rotation.
    pub fn with_index_offset(mut self, index_offset: i64) -> Self {
        self.index_offset = index_offset;
        self
    }

    /// Draw a random palette rotation from `seed`.
    pub fn with_random_offset(self, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        self.with_index_offset(i64::from(rng.u32(..i32::MAX as u32)))
    }

    /// Color index for a cursor position, truncated toward zero.
    pub fn color_index(&self, line: u64, column: u64) -> i64 {
        let phase = self.phase_offset * PALETTE_SIZE as f64;
        (phase + column as f64 * self.freq_h + line as f64 * self.freq_v) as i64
    }

    /// SGR sequence for a color index, after palette rotation.
    pub fn code_for(&self, color_index: i64) -> String {
        foreground_code(self.index_offset.wrapping_add(color_index))
    }
}
