use crate::math::Point2;

/// Direction an arc segment bends in, named in the y-down reference space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// Positive-angle sweep.
    Clockwise,
    /// Negative-angle sweep.
    CounterClockwise,
}

/// A single path drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Begins the subpath at a point.
    MoveTo(Point2),
    /// Straight segment to a point.
    LineTo(Point2),
    /// Circular arc segment to a point.
    ArcTo {
        /// Endpoint of the arc.
        end: Point2,
        /// Radius of the arc's circle.
        radius: f64,
        /// Bend direction of the arc.
        sweep: SweepDirection,
    },
    /// Closes the subpath back to the last `MoveTo`.
    Close,
}

/// An ordered path command sequence describing one closed index outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    /// The drawing commands in emission order.
    pub commands: Vec<PathCommand>,
}

impl Outline {
    /// Returns the endpoint of every point-carrying command, in order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                PathCommand::ArcTo { end, .. } => Some(*end),
                PathCommand::Close => None,
            })
            .collect()
    }

    /// Returns whether the outline ends with a [`PathCommand::Close`].
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Computes the signed area of the vertex polygon (shoelace formula),
    /// taking arc segments as their chords.
    ///
    /// Positive for counter-clockwise traversal with the x axis pointing
    /// right and the y axis pointing up.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let points = self.vertices();
        let n = points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            sum += points[i].x * points[j].y - points[j].x * points[i].y;
        }
        sum * 0.5
    }
}
