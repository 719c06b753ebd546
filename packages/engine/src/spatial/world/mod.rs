//! World - uniform grid of cells plus the boundary planes
//!
//! Cells are laid out row-major: cell `(row, col)` sits at
//! `(col * cell_width, row * cell_width)` with index `row * columns + col`.
//! The grid covers `ceil(width / cell_width)` columns and
//! `ceil(height / cell_width)` rows, so every in-world point has a cell.

use crate::core::math::{Plane, Vec2};
use crate::domain::{CellIndex, ConfigError, Particle};

use super::cell::Cell;

/// Grid cell edge length in world units
pub const CELL_WIDTH: f32 = 20.0;

/// Upper bound on grid size; larger worlds are rejected at construction.
pub const MAX_CELLS: usize = 1 << 22;

mod boundaries;
mod buckets;
mod indexing;
mod queries;

pub struct World {
    width: f32,
    height: f32,
    cell_width: f32,
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    planes: Vec<Plane>,
}

impl World {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        Self::with_cell_width(width, height, CELL_WIDTH)
    }

    pub fn with_cell_width(width: f32, height: f32, cell_width: f32) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidWorldSize { width, height });
        }
        if !(cell_width.is_finite() && cell_width > 0.0) {
            return Err(ConfigError::InvalidOption {
                name: "cellWidth",
                value: cell_width,
                reason: "must be finite and > 0",
            });
        }

        let columns = (width / cell_width).ceil() as usize;
        let rows = (height / cell_width).ceil() as usize;
        let cell_count = match columns.checked_mul(rows) {
            Some(count) if count <= MAX_CELLS => count,
            _ => return Err(ConfigError::InvalidWorldSize { width, height }),
        };

        let mut cells = Vec::with_capacity(cell_count);
        for row in 0..rows {
            for col in 0..columns {
                let position = Vec2::new(col as f32 * cell_width, row as f32 * cell_width);
                cells.push(Cell::new(row * columns + col, position, cell_width));
            }
        }

        let mut world = Self {
            width,
            height,
            cell_width,
            columns,
            rows,
            cells,
            planes: Vec::new(),
        };
        world.link_neighbors();
        Ok(world)
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn cell_width(&self) -> f32 { self.cell_width }

    /// Grid dimensions as (columns, rows).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    pub fn cells(&self) -> &[Cell] { &self.cells }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn planes(&self) -> &[Plane] { &self.planes }

    pub fn plane_count(&self) -> usize { self.planes.len() }

    /// True iff the position lies outside `[0, width] x [0, height]`.
    #[inline]
    pub fn is_out_of_bounds(&self, particle: &Particle) -> bool {
        self.is_position_out_of_bounds(particle.position)
    }

    #[inline]
    pub fn is_position_out_of_bounds(&self, p: Vec2) -> bool {
        !(p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height)
    }
}

#[cfg(test)]
mod tests;
