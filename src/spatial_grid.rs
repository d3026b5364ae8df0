/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct used to find neighbouring scale
 * particles when building bonds. It divides the world rectangle into square
 * cells so each particle is only compared with the particles in its own and
 * the adjacent cells instead of with every other particle.
 *
 * With the cell size equal to the bond threshold, every pair closer than the
 * threshold is guaranteed to be in the same or adjacent cells.
 */

use nannou::prelude::*;

pub struct SpatialGrid {
    pub cell_size: f32,
    pub grid: Vec<Vec<usize>>,
    pub columns: usize,
    pub rows: usize,
    origin: Point2,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, bounds: Rect) -> Self {
        let columns = ((bounds.w() / cell_size).ceil() as usize).max(1);
        let rows = ((bounds.h() / cell_size).ceil() as usize).max(1);

        Self {
            cell_size,
            grid: vec![Vec::new(); columns * rows],
            columns,
            rows,
            origin: pt2(bounds.left(), bounds.bottom()),
        }
    }

    // Convert world coordinates to (column, row), clamped to the grid
    #[inline]
    fn cell_coords(&self, pos: Point2) -> (usize, usize) {
        let column = ((pos.x - self.origin.x) / self.cell_size).clamp(0.0, self.columns as f32 - 1.0) as usize;
        let row = ((pos.y - self.origin.y) / self.cell_size).clamp(0.0, self.rows as f32 - 1.0) as usize;
        (column, row)
    }

    #[inline]
    pub fn pos_to_cell_index(&self, pos: Point2) -> usize {
        let (column, row) = self.cell_coords(pos);
        row * self.columns + column
    }

    #[inline]
    pub fn insert(&mut self, index: usize, position: Point2) {
        let cell_index = self.pos_to_cell_index(position);
        self.grid[cell_index].push(index);
    }

    /// Indices stored in the cell containing `position` and its eight neighbours.
    pub fn get_nearby_indices(&self, position: Point2) -> Vec<usize> {
        let (column, row) = self.cell_coords(position);
        let mut result = Vec::new();

        for check_row in row.saturating_sub(1)..=(row + 1).min(self.rows - 1) {
            let row_index = check_row * self.columns;
            for check_column in column.saturating_sub(1)..=(column + 1).min(self.columns - 1) {
                result.extend_from_slice(&self.grid[row_index + check_column]);
            }
        }

        result
    }
}
