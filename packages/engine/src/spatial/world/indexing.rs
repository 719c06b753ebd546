use super::*;

impl World {
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> CellIndex {
        row * self.columns + col
    }

    #[inline]
    pub fn coords(&self, index: CellIndex) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// First cell (lowest index) whose closed bound contains `p`.
    ///
    /// Bounds share their edges, so a point on an edge belongs to the cell
    /// above/left of it: `max(ceil(v / w) - 1, 0)` per axis.
    pub fn locate(&self, p: Vec2) -> Option<CellIndex> {
        if self.is_position_out_of_bounds(p) {
            return None;
        }
        let col = axis_slot(p.x, self.cell_width).min(self.columns - 1);
        let row = axis_slot(p.y, self.cell_width).min(self.rows - 1);
        let index = self.index(row, col);
        debug_assert!(self.cells[index].contains_point(p));
        Some(index)
    }

    /// Moore neighborhood of every cell, clipped at the grid edges.
    pub(super) fn link_neighbors(&mut self) {
        let rows = self.rows as isize;
        let columns = self.columns as isize;

        for index in 0..self.cells.len() {
            let (row, col) = self.coords(index);
            let (row, col) = (row as isize, col as isize);
            let mut neighbors = Vec::with_capacity(8);

            for dr in -1..=1isize {
                for dc in -1..=1isize {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let r = row + dr;
                    let c = col + dc;
                    if r < 0 || r >= rows || c < 0 || c >= columns {
                        continue;
                    }
                    neighbors.push((r * columns + c) as CellIndex);
                }
            }
            self.cells[index].neighbors = neighbors;
        }
    }
}

#[inline]
fn axis_slot(v: f32, cell_width: f32) -> usize {
    let slot = (v / cell_width).ceil();
    if slot <= 1.0 {
        0
    } else {
        slot as usize - 1
    }
}
