//! Square toroidal board shared by both game modes.

use life_core::{Coord, Error, Result};
use serde::{Deserialize, Serialize};

/// An n-by-n toroidal grid of cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<C> {
    size: i32,
    cells: Vec<C>,
}

impl<C: Copy + Default + PartialEq> Grid<C> {
    /// Create an all-default grid. The size is fixed for the grid's lifetime.
    pub fn new(size: i32) -> Result<Self> {
        if size <= 0 {
            return Err(Error::Validation(format!(
                "grid size must be positive, got {size}"
            )));
        }
        Ok(Self {
            size,
            cells: vec![C::default(); (size * size) as usize],
        })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Get the cell at a coordinate (with toroidal wrapping)
    pub fn get(&self, at: Coord) -> C {
        let wrapped = at.wrap(self.size);
        self.cells[self.coord_to_index(wrapped)]
    }

    /// Set the cell at a coordinate (with toroidal wrapping)
    pub fn set(&mut self, at: Coord, value: C) {
        let wrapped = at.wrap(self.size);
        let index = self.coord_to_index(wrapped);
        self.cells[index] = value;
    }

    /// Whether a coordinate lies inside the board without wrapping
    pub fn in_bounds(&self, at: Coord) -> bool {
        at.row >= 0 && at.row < self.size && at.col >= 0 && at.col < self.size
    }

    /// Number of cells currently holding `value`
    pub fn count(&self, value: C) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Reset every cell to the default value
    pub fn clear(&mut self) {
        self.cells.fill(C::default());
    }

    fn coord_to_index(&self, at: Coord) -> usize {
        (at.row * self.size + at.col) as usize
    }

    fn index_to_coord(&self, index: usize) -> Coord {
        Coord::new(index as i32 / self.size, index as i32 % self.size)
    }

    /// Iterator over all coordinates
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(move |i| self.index_to_coord(i))
    }

    /// Iterator over all cells with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = (Coord, C)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (self.index_to_coord(i), cell))
    }

    /// Read-only view of the raw cells in row-major order
    pub fn cells(&self) -> &[C] {
        &self.cells
    }
}
