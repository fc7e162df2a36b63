use crate::error::PostProcessError;

/// Transpose a flat row-major `rows x cols` buffer into `cols x rows`.
///
/// Detection models commonly emit output channel-major
/// (`[channel][candidate]`) while decoding wants candidate-major rows; this
/// swaps the axes without altering any element. Runs in O(rows * cols) time
/// and allocates the same amount of auxiliary space, since the differing
/// strides rule out an in-place swap.
///
/// # Arguments
///
/// * `data` - The flat buffer, of length `rows * cols`.
/// * `rows` - Number of rows of the input view.
/// * `cols` - Number of columns of the input view.
///
/// # Returns
///
/// The transposed buffer, or [`PostProcessError::InvalidShape`] when the
/// buffer length does not match the declared shape.
///
/// # Examples
///
/// ```
/// use detpost_dnn::layout::transpose;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let transposed = transpose(&data, 2, 3).unwrap();
/// assert_eq!(transposed, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
/// ```
pub fn transpose(data: &[f32], rows: usize, cols: usize) -> Result<Vec<f32>, PostProcessError> {
    if data.len() != rows * cols {
        return Err(PostProcessError::InvalidShape(rows * cols, data.len()));
    }

    let mut transposed = vec![0.0f32; data.len()];
    for i in 0..rows {
        let row_offset = i * cols;
        for j in 0..cols {
            transposed[j * rows + i] = data[row_offset + j];
        }
    }

    Ok(transposed)
}
