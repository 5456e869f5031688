//! The fixed 256-color rainbow palette.

/// ANSI 256-color indices forming a smooth hue cycle.
pub const PALETTE: [u8; 30] = [
    39, 38, 44, 43, 49, 48, 84, 83, 119, 118, 154, 148, 184, 178, 214, 208, 209, 203, 204, 198,
    199, 163, 164, 128, 129, 93, 99, 63, 69, 33,
];

/// Number of entries in [`PALETTE`].
pub const PALETTE_SIZE: usize = PALETTE.len();

/// SGR sequence resetting all attributes.
pub const RESET: &str = "\x1b[0m";

/// Look up the terminal color for a (possibly negative) palette position.
///
/// Wraps with a mathematical modulo so every `i64` maps into the palette.
pub fn color_at(position: i64) -> u8 {
    // PALETTE_SIZE fits in i64 and rem_euclid yields 0..PALETTE_SIZE
    PALETTE[position.rem_euclid(PALETTE_SIZE as i64) as usize]
}

/// Foreground SGR sequence selecting the color at `position`.
pub fn foreground_code(position: i64) -> String {
    format!("\x1b[38;5;{}m", color_at(position))
}
