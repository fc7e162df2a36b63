use std::sync::Arc;

use detpost_geometry::{Rect, RotatedRect};

use crate::error::PostProcessError;
use crate::labels::Label;
use crate::{BoxShape, Detection};

/// Find the index and value of the maximum score in a segment.
///
/// Single forward scan tracking the running maximum; ties keep the
/// first-seen index. The scan exits early as soon as the running maximum
/// exceeds 0.5: class scores are mutually exclusive softmax-like outputs,
/// so a later class beating an already-above-0.5 score does not happen in
/// practice. This is a speed shortcut, not an exact arg-max; on a
/// pathological row where a later class does score higher, the earlier
/// index wins.
///
/// # Arguments
///
/// * `scores` - The class-score segment, must be non-empty.
///
/// # Returns
///
/// The `(index, value)` pair of the maximum, or
/// [`PostProcessError::EmptyScoreSegment`] for a zero-length input.
pub fn index_of_max(scores: &[f32]) -> Result<(usize, f32), PostProcessError> {
    let (first, rest) = scores
        .split_first()
        .ok_or(PostProcessError::EmptyScoreSegment)?;

    let mut max_index = 0;
    let mut max_value = *first;
    for (i, &value) in rest.iter().enumerate() {
        if value > max_value {
            max_value = value;
            max_index = i + 1;
        }
        if max_value > 0.5 {
            break;
        }
    }

    Ok((max_index, max_value))
}

/// Decode one candidate row into a scored detection.
///
/// The row starts with `box_channels` geometry values (center x, center y,
/// width, height, and the rotation angle when `box_channels` is 5) followed
/// by one score per class. Center coordinates and sizes are multiplied by
/// `scale` to land in absolute pixel units, then converted to a top-left
/// rectangle. No score floor is applied here; every row decodes to a
/// candidate and filtering happens at suppression.
pub(crate) fn decode_row(
    row: &[f32],
    box_channels: usize,
    scale: [f32; 2],
    labels: &[Arc<Label>],
) -> Result<Detection, PostProcessError> {
    let (class_index, score) = index_of_max(&row[box_channels..])?;

    let rect = Rect::from_center(
        row[0] * scale[0],
        row[1] * scale[1],
        row[2] * scale[0],
        row[3] * scale[1],
    );

    let shape = if box_channels == 5 {
        BoxShape::Oriented(RotatedRect {
            rect,
            angle: row[4],
        })
    } else {
        BoxShape::Axis(rect)
    };

    Ok(Detection {
        label: labels[class_index].clone(),
        shape,
        score,
    })
}
