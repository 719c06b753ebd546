use super::vec2::Vec2;

/// Axis-aligned bounding box. All predicates use closed intervals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bound {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bound {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest box around `points`, or `None` for an empty set.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bound = Bound::new(*first, *first);
        for p in rest {
            bound.min.x = bound.min.x.min(p.x);
            bound.min.y = bound.min.y.min(p.y);
            bound.max.x = bound.max.x.max(p.x);
            bound.max.y = bound.max.y.max(p.y);
        }
        Some(bound)
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        let d = Vec2::new(dx, dy);
        self.min += d;
        self.max += d;
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Overlap of both boxes. Touching boxes give a zero-area bound.
    pub fn intersect(&self, other: &Bound) -> Option<Bound> {
        let min = Vec2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Vec2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));

        if max.x - min.x < 0.0 || max.y - min.y < 0.0 {
            return None;
        }
        Some(Bound::new(min, max))
    }

    pub fn union(&self, other: &Bound) -> Bound {
        Bound::new(
            Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }

    #[inline]
    pub fn intersects(&self, other: &Bound) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    #[inline]
    pub fn contains_bound(&self, other: &Bound) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }

    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
