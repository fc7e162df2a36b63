use std::sync::Arc;

use crate::error::PostProcessError;

/// A trained class of the model: index, display name and display color.
///
/// Labels are built once at pipeline setup and shared read-only across all
/// detections that reference them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// The class index in the model output.
    pub id: u32,
    /// The class name from the model label list.
    pub name: String,
    /// Display color as RGB, handed through to presentation code.
    pub color: [u8; 3],
}

/// Build the shared label table from an ordered name list and an optional
/// color table.
///
/// When a color table is supplied its length must match the label count; the
/// mismatch is a configuration error surfaced here, at setup time, rather
/// than at prediction time. Without a table, a deterministic per-index
/// palette is derived.
pub(crate) fn build_labels(
    names: Vec<String>,
    colors: Option<Vec<[u8; 3]>>,
) -> Result<Vec<Arc<Label>>, PostProcessError> {
    if let Some(colors) = &colors {
        if colors.len() != names.len() {
            return Err(PostProcessError::ColorCountMismatch(
                names.len(),
                colors.len(),
            ));
        }
    }

    Ok(names
        .into_iter()
        .enumerate()
        .map(|(id, name)| {
            let color = match &colors {
                Some(colors) => colors[id],
                None => default_color(id),
            };
            Arc::new(Label {
                id: id as u32,
                name,
                color,
            })
        })
        .collect())
}

/// Deterministic fallback palette: golden-angle hue stepping per label index.
fn default_color(index: usize) -> [u8; 3] {
    let hue = (index as f32 * 137.508) % 360.0;
    let sector = hue / 60.0;
    let fraction = sector - sector.floor();
    let rising = (255.0 * fraction) as u8;
    let falling = (255.0 * (1.0 - fraction)) as u8;
    match sector as u32 {
        0 => [255, rising, 0],
        1 => [falling, 255, 0],
        2 => [0, 255, rising],
        3 => [0, falling, 255],
        4 => [rising, 0, 255],
        _ => [255, 0, falling],
    }
}
