use std::sync::Arc;

use detpost_geometry::ImageSize;

use crate::error::PostProcessError;
use crate::labels::{build_labels, Label};
use crate::{decode, layout, nms, Classification, Detection};

/// The model head the pipeline decodes, replacing one wrapper type per
/// architecture with a single parameterized pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelVariant {
    /// YOLO detection head: channel-major output, boxes in model-input
    /// pixel units.
    Yolo,
    /// YOLO oriented-box head: like [`ModelVariant::Yolo`] with a rotation
    /// angle channel after the box geometry.
    YoloOriented,
    /// YOLO classification head: a flat per-class score vector, no boxes.
    YoloClassify,
    /// RT-DETR detection head: candidate-major output, boxes in normalized
    /// `[0, 1]` units.
    Rtdetr,
}

impl ModelVariant {
    /// Whether the raw output is channel-major and needs transposition
    /// before row decoding.
    fn needs_transpose(&self) -> bool {
        matches!(self, ModelVariant::Yolo | ModelVariant::YoloOriented)
    }

    /// Number of geometry channels preceding the class-score block, or
    /// `None` for heads without boxes.
    fn box_channels(&self) -> Option<usize> {
        match self {
            ModelVariant::Yolo | ModelVariant::Rtdetr => Some(4),
            ModelVariant::YoloOriented => Some(5),
            ModelVariant::YoloClassify => None,
        }
    }

    /// Per-axis factor that takes decoded coordinates to absolute pixels.
    fn scale(&self, image_size: ImageSize, input_size: ImageSize) -> [f32; 2] {
        match self {
            // model emits input-pixel units; rescale by the resize ratio
            ModelVariant::Yolo | ModelVariant::YoloOriented | ModelVariant::YoloClassify => [
                image_size.width as f32 / input_size.width as f32,
                image_size.height as f32 / input_size.height as f32,
            ],
            // model emits normalized units; scale by the image itself
            ModelVariant::Rtdetr => [image_size.width as f32, image_size.height as f32],
        }
    }
}

/// Builder for the detection post-processor.
///
/// This struct provides a convenient way to configure and create a
/// [`PostProcessor`] instance.
///
/// # Examples
///
/// ```
/// use detpost_dnn::{ModelVariant, PostProcessorBuilder};
///
/// let processor = PostProcessorBuilder::new(
///     ModelVariant::Rtdetr,
///     vec!["person".to_string(), "car".to_string()],
/// )
/// .with_colors(vec![[255, 0, 0], [0, 255, 0]])
/// .build()
/// .unwrap();
/// assert_eq!(processor.labels().len(), 2);
/// ```
pub struct PostProcessorBuilder {
    variant: ModelVariant,
    label_names: Vec<String>,
    colors: Option<Vec<[u8; 3]>>,
    input_size: ImageSize,
}

impl PostProcessorBuilder {
    /// Creates a new builder for the given model variant and ordered label
    /// name list (as read from the model metadata).
    pub fn new(variant: ModelVariant, label_names: Vec<String>) -> Self {
        Self {
            variant,
            label_names,
            colors: None,
            input_size: ImageSize {
                width: 640,
                height: 640,
            },
        }
    }

    /// Sets the per-label display colors, one per label in order.
    pub fn with_colors(mut self, colors: Vec<[u8; 3]>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Sets the model input size used to rescale YOLO boxes back to the
    /// original image. Defaults to 640x640.
    pub fn with_input_size(mut self, input_size: ImageSize) -> Self {
        self.input_size = input_size;
        self
    }

    /// Builds the post-processor, validating the color table eagerly.
    ///
    /// # Returns
    ///
    /// The configured [`PostProcessor`], or
    /// [`PostProcessError::ColorCountMismatch`] when an explicit color table
    /// does not cover every label.
    pub fn build(self) -> Result<PostProcessor, PostProcessError> {
        let labels = build_labels(self.label_names, self.colors)?;
        Ok(PostProcessor {
            variant: self.variant,
            labels,
            input_size: self.input_size,
        })
    }
}

/// Unified post-processor for detection and classification model output.
///
/// All state is immutable after [`PostProcessorBuilder::build`]; `detect`
/// and `classify` take `&self`, never retain the caller's buffers, and are
/// safe to call from multiple threads. Multiple instances are fully
/// independent.
pub struct PostProcessor {
    variant: ModelVariant,
    labels: Vec<Arc<Label>>,
    input_size: ImageSize,
}

impl PostProcessor {
    /// The shared label table, in model order.
    pub fn labels(&self) -> &[Arc<Label>] {
        &self.labels
    }

    /// Decode a raw detection output tensor into suppressed detections.
    ///
    /// # Arguments
    ///
    /// * `output` - The flat output buffer of one inference call.
    /// * `shape` - Its declared `[rows, cols]` shape, as produced by the
    ///   backend: `[row_width, candidates]` for channel-major variants,
    ///   `[candidates, row_width]` for candidate-major ones.
    /// * `image_size` - The original (pre-resize) image size.
    /// * `conf_threshold` - Minimum score for a candidate to survive.
    /// * `iou_threshold` - Maximum allowed overlap between kept boxes.
    ///
    /// # Returns
    ///
    /// The kept detections sorted by score descending, or a
    /// [`PostProcessError`] when the buffer disagrees with the declared
    /// shape or the shape with the configured label count.
    pub fn detect(
        &self,
        output: &[f32],
        shape: [usize; 2],
        image_size: ImageSize,
        conf_threshold: f32,
        iou_threshold: f32,
    ) -> Result<Vec<Detection>, PostProcessError> {
        let box_channels = self
            .variant
            .box_channels()
            .ok_or(PostProcessError::UnsupportedVariant("box detection"))?;
        let row_width = self.labels.len() + box_channels;

        if output.len() != shape[0] * shape[1] {
            return Err(PostProcessError::InvalidShape(
                shape[0] * shape[1],
                output.len(),
            ));
        }

        // channel-major output is transposed into candidate-major rows
        let transposed;
        let rows: &[f32] = if self.variant.needs_transpose() {
            if shape[0] != row_width {
                return Err(PostProcessError::InvalidRowWidth(row_width, shape[0]));
            }
            transposed = layout::transpose(output, shape[0], shape[1])?;
            &transposed
        } else {
            if shape[1] != row_width {
                return Err(PostProcessError::InvalidRowWidth(row_width, shape[1]));
            }
            output
        };

        let scale = self.variant.scale(image_size, self.input_size);

        let mut candidates = Vec::with_capacity(rows.len() / row_width);
        for row in rows.chunks_exact(row_width) {
            candidates.push(decode::decode_row(row, box_channels, scale, &self.labels)?);
        }
        log::debug!("decoded {} candidates", candidates.len());

        let kept = nms::non_max_suppression(candidates, conf_threshold, iou_threshold);
        log::debug!("kept {} detections after suppression", kept.len());

        Ok(kept)
    }

    /// Pick the best class from a flat whole-image score vector.
    ///
    /// # Returns
    ///
    /// The best-class [`Classification`], or a [`PostProcessError`] when the
    /// vector length does not match the label count.
    pub fn classify(&self, scores: &[f32]) -> Result<Classification, PostProcessError> {
        if scores.len() != self.labels.len() {
            return Err(PostProcessError::InvalidShape(
                self.labels.len(),
                scores.len(),
            ));
        }

        let (label_index, score) = decode::index_of_max(scores)?;
        Ok(Classification {
            label_name: self.labels[label_index].name.clone(),
            label_index,
            score,
        })
    }
}
