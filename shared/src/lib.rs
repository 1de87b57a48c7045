pub mod colors;
pub mod territory;

pub use colors::{parse_hex_rgb, with_alpha};
pub use territory::*;
