#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

use std::sync::Arc;

use detpost_geometry::{Rect, RotatedRect};

/// Error type for the post-processing pipeline.
pub mod error;

/// Label and color table configuration.
pub mod labels;

/// Tensor layout transposition.
pub mod layout;

/// Per-candidate decoding: arg-max and box reconstruction.
pub mod decode;

/// Greedy non-max suppression.
pub mod nms;

/// The unified post-processing pipeline.
pub mod pipeline;

pub use error::PostProcessError;
pub use labels::Label;
pub use pipeline::{ModelVariant, PostProcessor, PostProcessorBuilder};

/// Bounding-box geometry of a detection, axis-aligned or oriented.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxShape {
    /// An axis-aligned rectangle.
    Axis(Rect),
    /// An oriented rectangle with a rotation angle.
    Oriented(RotatedRect),
}

impl BoxShape {
    /// The axis-aligned rectangle backing this shape.
    ///
    /// For oriented boxes this is the unrotated rectangle, which is also
    /// what suppression overlaps are computed on: an approximation that
    /// trades exact rotated-polygon overlap for the much cheaper rectangle
    /// test.
    pub fn bounding_rect(&self) -> &Rect {
        match self {
            BoxShape::Axis(rect) => rect,
            BoxShape::Oriented(rotated) => &rotated.rect,
        }
    }

    /// The four corner points of the shape, rotated for oriented boxes.
    pub fn corners(&self) -> [[f32; 2]; 4] {
        match self {
            BoxShape::Axis(rect) => rect.corners(),
            BoxShape::Oriented(rotated) => rotated.corners(),
        }
    }
}

/// Represents a detected object in an image.
#[derive(Debug, Clone)]
pub struct Detection {
    /// The class label of the detected object, shared with the pipeline.
    pub label: Arc<Label>,
    /// The bounding-box geometry in absolute pixel coordinates.
    pub shape: BoxShape,
    /// The confidence score of the detection (typically between 0 and 1).
    pub score: f32,
}

/// Single best-class result for a whole image.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The name of the best class.
    pub label_name: String,
    /// The index of the best class in the model output.
    pub label_index: usize,
    /// The confidence score of the best class.
    pub score: f32,
}
