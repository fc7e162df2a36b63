use std::cmp::Ordering;

use crate::Detection;

/// Greedy non-max suppression over scored detections.
///
/// Candidates below `conf_threshold` are dropped, the rest are sorted by
/// score descending (stable, so equal scores keep their original order and
/// the output is deterministic), and the highest-scoring survivor repeatedly
/// claims the kept set while removing every remaining candidate whose IoU
/// with it exceeds `iou_threshold`. Overlap is computed on the
/// integer-rounded axis-aligned bounding rect of each detection; for
/// oriented boxes that is the unrotated rect (see
/// [`BoxShape::bounding_rect`](crate::BoxShape::bounding_rect)).
///
/// Suppression is class-agnostic and never fails: an empty input yields an
/// empty kept set. Thresholds are accepted unchecked; values outside
/// `[0, 1]` simply change selectivity.
///
/// # Arguments
///
/// * `detections` - The unsorted candidate list.
/// * `conf_threshold` - Minimum score to be eligible at all.
/// * `iou_threshold` - Maximum allowed overlap with a kept box.
///
/// # Returns
///
/// The kept detections, sorted by score descending.
pub fn non_max_suppression(
    detections: Vec<Detection>,
    conf_threshold: f32,
    iou_threshold: f32,
) -> Vec<Detection> {
    let mut candidates: Vec<Detection> = detections
        .into_iter()
        .filter(|detection| detection.score >= conf_threshold)
        .collect();

    // stable sort: original index breaks score ties
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
    });

    let mut kept = Vec::with_capacity(candidates.len());
    while !candidates.is_empty() {
        let best = candidates.remove(0);
        let best_rect = best.shape.bounding_rect().to_int();
        candidates
            .retain(|other| other.shape.bounding_rect().to_int().iou(&best_rect) <= iou_threshold);
        kept.push(best);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::non_max_suppression;
    use crate::labels::Label;
    use crate::{BoxShape, Detection};
    use detpost_geometry::Rect;
    use std::sync::Arc;

    fn detection(x: f32, y: f32, size: f32, score: f32) -> Detection {
        Detection {
            label: Arc::new(Label {
                id: 0,
                name: "object".to_string(),
                color: [255, 0, 0],
            }),
            shape: BoxShape::Axis(Rect {
                x,
                y,
                width: size,
                height: size,
            }),
            score,
        }
    }

    #[test]
    fn identical_boxes_keep_only_the_best() {
        let candidates = vec![
            detection(10.0, 10.0, 20.0, 0.8),
            detection(10.0, 10.0, 20.0, 0.9),
        ];
        let kept = non_max_suppression(candidates, 0.25, 0.5);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].score, 0.9);
    }

    #[test]
    fn confidence_floor_filters_everything_above_one() {
        let candidates = vec![
            detection(0.0, 0.0, 10.0, 1.0),
            detection(50.0, 50.0, 10.0, 0.99),
        ];
        let kept = non_max_suppression(candidates, 1.1, 0.5);
        assert!(kept.is_empty());
    }

    #[test]
    fn unit_iou_threshold_keeps_all_distinct_boxes() {
        let candidates = vec![
            detection(0.0, 0.0, 10.0, 0.5),
            detection(100.0, 0.0, 10.0, 0.9),
            detection(0.0, 100.0, 10.0, 0.7),
        ];
        let kept = non_max_suppression(candidates, 0.25, 1.0);
        assert_eq!(kept.len(), 3);
        // sorted by score descending
        assert_eq!(kept[0].score, 0.9);
        assert_eq!(kept[1].score, 0.7);
        assert_eq!(kept[2].score, 0.5);
    }

    #[test]
    fn kept_boxes_never_exceed_iou_threshold() {
        let iou_threshold = 0.4;
        let candidates = vec![
            detection(0.0, 0.0, 20.0, 0.9),
            detection(5.0, 0.0, 20.0, 0.8),
            detection(40.0, 40.0, 20.0, 0.7),
            detection(42.0, 40.0, 20.0, 0.6),
            detection(200.0, 200.0, 20.0, 0.3),
        ];
        let input_len = candidates.len();
        let kept = non_max_suppression(candidates, 0.25, iou_threshold);

        assert!(kept.len() <= input_len);
        for detection in &kept {
            assert!(detection.score >= 0.25);
        }
        for (i, a) in kept.iter().enumerate() {
            for b in kept.iter().skip(i + 1) {
                let iou = a
                    .shape
                    .bounding_rect()
                    .to_int()
                    .iou(&b.shape.bounding_rect().to_int());
                assert!(iou <= iou_threshold);
            }
        }
    }

    #[test]
    fn equal_scores_keep_original_order() {
        let candidates = vec![
            detection(0.0, 0.0, 10.0, 0.8),
            detection(100.0, 0.0, 10.0, 0.8),
        ];
        let kept = non_max_suppression(candidates, 0.25, 0.5);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].shape.bounding_rect().x, 0.0);
        assert_eq!(kept[1].shape.bounding_rect().x, 100.0);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let kept = non_max_suppression(Vec::new(), 0.25, 0.5);
        assert!(kept.is_empty());
    }
}
