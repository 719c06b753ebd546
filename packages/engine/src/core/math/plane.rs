use super::bound::Bound;
use super::vec2::Vec2;

/// Friction used when the caller does not pass one.
pub const DEFAULT_FRICTION: f32 = 0.02;

/// Straight boundary segment.
///
/// Distances are measured to the infinite line through the segment; the
/// segment's bound only decides which grid cells see the plane.
#[derive(Clone, Debug)]
pub struct Plane {
    start: Vec2,
    end: Vec2,
    normal: Vec2,
    tangent: Vec2,
    friction: f32,
    bound: Bound,
}

impl Plane {
    pub fn new(start: Vec2, end: Vec2, friction: f32) -> Self {
        let tangent = (end - start).normalize();
        let normal = tangent.perpendicular();
        let bound = Bound::new(
            Vec2::new(start.x.min(end.x), start.y.min(end.y)),
            Vec2::new(start.x.max(end.x), start.y.max(end.y)),
        );

        Self {
            start,
            end,
            normal,
            tangent,
            friction,
            bound,
        }
    }

    pub fn start(&self) -> Vec2 { self.start }

    pub fn end(&self) -> Vec2 { self.end }

    pub fn friction(&self) -> f32 { self.friction }

    pub fn bound(&self) -> &Bound { &self.bound }

    /// Unsigned perpendicular distance from `position` to the plane's line.
    #[inline]
    pub fn distance_to(&self, position: Vec2) -> f32 {
        (position.dot(self.normal) - self.start.dot(self.normal)).abs()
    }

    /// Straight segments have one normal; the position is kept in the
    /// signature for curved boundaries.
    #[inline]
    pub fn normal_at(&self, _position: Vec2) -> Vec2 {
        self.normal
    }

    #[inline]
    pub fn tangent_at(&self, _position: Vec2) -> Vec2 {
        self.tangent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_unit_tangent_and_normal() {
        let plane = Plane::new(Vec2::new(0.0, 10.0), Vec2::new(50.0, 10.0), DEFAULT_FRICTION);
        assert_eq!(plane.tangent_at(Vec2::ZERO), Vec2::new(1.0, 0.0));
        assert_eq!(plane.normal_at(Vec2::ZERO), Vec2::new(0.0, 1.0));
        assert_eq!(plane.friction(), DEFAULT_FRICTION);
    }

    #[test]
    fn distance_is_unsigned_and_uses_infinite_line() {
        let plane = Plane::new(Vec2::new(0.0, 10.0), Vec2::new(50.0, 10.0), 0.0);
        assert!((plane.distance_to(Vec2::new(5.0, 7.0)) - 3.0).abs() < 1e-6);
        assert!((plane.distance_to(Vec2::new(5.0, 13.0)) - 3.0).abs() < 1e-6);
        // Past the end of the segment the line still counts.
        assert!((plane.distance_to(Vec2::new(500.0, 12.0)) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn diagonal_plane_distance() {
        let plane = Plane::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), 0.0);
        let d = plane.distance_to(Vec2::new(0.0, 2.0));
        assert!((d - 2.0f32.sqrt()).abs() < 1e-5);
        assert_eq!(*plane.bound(), Bound::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn bound_is_ordered_for_reversed_endpoints() {
        let plane = Plane::new(Vec2::new(40.0, 30.0), Vec2::new(10.0, 5.0), 0.1);
        assert_eq!(plane.bound().min, Vec2::new(10.0, 5.0));
        assert_eq!(plane.bound().max, Vec2::new(40.0, 30.0));
    }
}
