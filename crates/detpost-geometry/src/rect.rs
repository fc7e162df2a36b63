/// Axis-aligned rectangle in absolute pixel units.
///
/// The rectangle is stored as its top-left corner plus width and height, all
/// in `f32`. Degenerate sizes are allowed; see [`Rect::area`].
///
/// # Examples
///
/// ```
/// use detpost_geometry::Rect;
///
/// let rect = Rect {
///     x: 10.0,
///     y: 20.0,
///     width: 30.0,
///     height: 40.0,
/// };
/// assert_eq!(rect.area(), 1200.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x: f32,
    /// The y-coordinate of the top-left corner.
    pub y: f32,
    /// The width of the rectangle.
    pub width: f32,
    /// The height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its center point and size.
    ///
    /// This is the form detection models emit boxes in; the stored
    /// representation is top-left plus size.
    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            x: cx - width * 0.5,
            y: cy - height * 0.5,
            width,
            height,
        }
    }

    /// The signed area of the rectangle.
    ///
    /// Negative widths or heights produce a negative area rather than an
    /// error; NaN and infinities propagate.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// The center point of the rectangle as `[x, y]`.
    pub fn center(&self) -> [f32; 2] {
        [
            self.x + self.width * 0.5,
            self.y + self.height * 0.5,
        ]
    }

    /// The four corner points in clockwise order starting at the top-left.
    pub fn corners(&self) -> [[f32; 2]; 4] {
        [
            [self.x, self.y],
            [self.x + self.width, self.y],
            [self.x + self.width, self.y + self.height],
            [self.x, self.y + self.height],
        ]
    }

    /// Convert to an integer rectangle by truncating each field.
    ///
    /// Suppression operates on integer rectangles; the conversion truncates
    /// toward zero rather than rounding.
    pub fn to_int(&self) -> IntRect {
        IntRect {
            x: self.x as i32,
            y: self.y as i32,
            width: self.width as i32,
            height: self.height as i32,
        }
    }
}

/// Axis-aligned rectangle with integer coordinates, used as suppression input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntRect {
    /// The x-coordinate of the top-left corner.
    pub x: i32,
    /// The y-coordinate of the top-left corner.
    pub y: i32,
    /// The width of the rectangle.
    pub width: i32,
    /// The height of the rectangle.
    pub height: i32,
}

impl IntRect {
    /// Intersection-over-Union between two rectangles.
    ///
    /// Returns a value in `[0, 1]` for well-formed rectangles; a zero or
    /// negative union yields `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use detpost_geometry::IntRect;
    ///
    /// let a = IntRect { x: 0, y: 0, width: 10, height: 10 };
    /// let b = IntRect { x: 5, y: 0, width: 10, height: 10 };
    /// assert!((a.iou(&b) - 1.0 / 3.0).abs() < 1e-6);
    /// ```
    pub fn iou(&self, other: &IntRect) -> f32 {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        let intersection = ((x2 - x1).max(0) * (y2 - y1).max(0)) as f32;
        let union =
            (self.width * self.height + other.width * other.height) as f32 - intersection;

        if union > 0.0 {
            intersection / union
        } else {
            0.0
        }
    }
}
