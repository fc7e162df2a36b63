use crate::rect::Rect;

/// Oriented rectangle: an axis-aligned rectangle plus a rotation angle.
///
/// The corners are never stored; they are derived on demand by rotating the
/// axis-aligned corners about the rectangle center by `angle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedRect {
    /// The unrotated rectangle.
    pub rect: Rect,
    /// Rotation angle in radians, counter-clockwise about the rect center.
    pub angle: f32,
}

impl RotatedRect {
    /// The four corner points after rotation, clockwise from the rotated
    /// top-left.
    ///
    /// # Examples
    ///
    /// ```
    /// use detpost_geometry::{Rect, RotatedRect};
    ///
    /// let rot = RotatedRect {
    ///     rect: Rect { x: 0.0, y: 0.0, width: 10.0, height: 4.0 },
    ///     angle: std::f32::consts::FRAC_PI_2,
    /// };
    /// let corners = rot.corners();
    /// // a 10x4 rect rotated 90 degrees about (5, 2) has a 4x10 footprint
    /// assert!((corners[0][0] - 7.0).abs() < 1e-4);
    /// assert!((corners[0][1] + 3.0).abs() < 1e-4);
    /// ```
    pub fn corners(&self) -> [[f32; 2]; 4] {
        let mut points = self.rect.corners();
        rotate_points(&mut points, self.rect.center(), self.angle);
        points
    }
}

/// Rotate a set of points about a pivot by an angle in radians.
///
/// Standard 2D rotation: `x' = px + dx·cosθ − dy·sinθ`,
/// `y' = py + dx·sinθ + dy·cosθ`, where `dx`, `dy` are the point offsets from
/// the pivot. NaN and infinities propagate.
pub fn rotate_points(points: &mut [[f32; 2]], pivot: [f32; 2], angle: f32) {
    let (sin_angle, cos_angle) = angle.sin_cos();
    for point in points.iter_mut() {
        let dx = point[0] - pivot[0];
        let dy = point[1] - pivot[1];
        point[0] = pivot[0] + dx * cos_angle - dy * sin_angle;
        point[1] = pivot[1] + dx * sin_angle + dy * cos_angle;
    }
}

#[cfg(test)]
mod tests {
    use super::{rotate_points, RotatedRect};
    use crate::rect::Rect;
    use approx::assert_relative_eq;

    #[test]
    fn rotation_round_trip_restores_corners() {
        let rect = Rect {
            x: 3.0,
            y: -2.0,
            width: 7.0,
            height: 11.0,
        };
        let pivot = [1.0, 1.0];
        let angle = 0.83f32;

        let original = rect.corners();
        let mut points = original;
        rotate_points(&mut points, pivot, angle);
        rotate_points(&mut points, pivot, -angle);

        for (rotated, expected) in points.iter().zip(original.iter()) {
            assert_relative_eq!(rotated[0], expected[0], epsilon = 1e-4);
            assert_relative_eq!(rotated[1], expected[1], epsilon = 1e-4);
        }
    }

    #[test]
    fn quarter_turn_swaps_footprint() {
        let rot = RotatedRect {
            rect: Rect {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 4.0,
            },
            angle: std::f32::consts::FRAC_PI_2,
        };
        let corners = rot.corners();

        // same corners as the unrotated rect turned 90 degrees about (5, 2):
        // (0,0) -> (7,-3), (10,0) -> (7,7), (10,4) -> (3,7), (0,4) -> (3,-3)
        let expected = [[7.0, -3.0], [7.0, 7.0], [3.0, 7.0], [3.0, -3.0]];
        for (corner, exp) in corners.iter().zip(expected.iter()) {
            assert_relative_eq!(corner[0], exp[0], epsilon = 1e-4);
            assert_relative_eq!(corner[1], exp[1], epsilon = 1e-4);
        }

        // footprint is 4 wide and 10 tall, centered at the same point
        let xs: Vec<f32> = corners.iter().map(|c| c[0]).collect();
        let ys: Vec<f32> = corners.iter().map(|c| c[1]).collect();
        let width = xs.iter().cloned().fold(f32::MIN, f32::max)
            - xs.iter().cloned().fold(f32::MAX, f32::min);
        let height = ys.iter().cloned().fold(f32::MIN, f32::max)
            - ys.iter().cloned().fold(f32::MAX, f32::min);
        assert_relative_eq!(width, 4.0, epsilon = 1e-4);
        assert_relative_eq!(height, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn zero_angle_is_identity() {
        let mut points = [[1.5f32, 2.5], [-3.0, 4.0]];
        let expected = points;
        rotate_points(&mut points, [10.0, 10.0], 0.0);
        assert_eq!(points, expected);
    }
}
