//! Rainbow colorization engine.
//!
//! # Module Structure
//!
//! - [`palette`] - The fixed 30-entry 256-color palette
//! - [`escape`] - Approximate ANSI escape sequence detector
//! - [`settings`] - Immutable gradient parameters ([`ColorConfig`])
//! - [`state`] - Cursor and color memory ([`ColorState`])
//! - [`colorizer`] - The per-character transducer
//!
//! # Usage
//!
//! ```
//! use lolcat::rainbow::{ColorConfig, Colorizer};
//!
//! let mut colorizer = Colorizer::new(ColorConfig::new(0.0, 0.0));
//! assert_eq!(colorizer.colorize_str("hi"), "\x1b[38;5;39mhi\x1b[0m");
//! ```

pub mod colorizer;
pub mod escape;
pub mod palette;
pub mod settings;
pub mod state;

pub use colorizer::{display_width, Colorizer, WidthFn};
pub use escape::EscapeState;
pub use palette::{PALETTE, PALETTE_SIZE, RESET};
pub use settings::{ColorConfig, DEFAULT_FREQ_H, DEFAULT_FREQ_V};
pub use state::ColorState;
