#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// axis-aligned rectangle types and overlap math.
pub mod rect;

/// oriented rectangles and point rotation.
pub mod rotated;

/// image size type.
pub mod size;

pub use rect::{IntRect, Rect};
pub use rotated::{rotate_points, RotatedRect};
pub use size::ImageSize;
