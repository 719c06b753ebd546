use super::*;

impl World {
    /// Adds a boundary segment and registers it with every cell whose bound
    /// intersects the segment's bound. Returns the plane index.
    pub fn add_boundary(&mut self, start: Vec2, end: Vec2, friction: f32) -> Result<usize, ConfigError> {
        if !start.is_finite() || !end.is_finite() || (end - start).normalize() == Vec2::ZERO {
            return Err(ConfigError::DegenerateBoundary);
        }
        if !(friction.is_finite() && friction >= 0.0) {
            return Err(ConfigError::InvalidFriction(friction));
        }

        let plane = Plane::new(start, end, friction);
        let plane_index = self.planes.len();

        let mut touched = 0usize;
        for cell in self.cells.iter_mut() {
            if cell.overlaps(plane.bound()) {
                cell.planes.push(plane_index);
                touched += 1;
            }
        }
        self.planes.push(plane);

        console_log!(
            "boundary #{} ({}, {}) -> ({}, {}) registered with {} cells",
            plane_index, start.x, start.y, end.x, end.y, touched
        );
        Ok(plane_index)
    }
}
