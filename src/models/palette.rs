//! Palette and cell data structures.
//!
//! A palette is an ordered, index-addressed row of cells. Its length is
//! always within [`MIN_CELLS`]..=[`MAX_CELLS`]; only the store mutates it.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// Smallest palette allowed.
pub const MIN_CELLS: usize = 1;

/// Largest palette allowed.
pub const MAX_CELLS: usize = 100;

/// Palette size used when nothing else is requested.
pub const DEFAULT_CELLS: usize = 20;

/// Lightness step (percentage points) for lighten/darken.
pub const DEFAULT_SHADE_STEP: f32 = 10.0;

/// Clamps a requested palette size into the allowed range.
#[must_use]
pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_CELLS, MAX_CELLS)
}

/// One swatch: a color and whether it is protected from regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Swatch color
    pub color: RgbColor,
    /// Locked cells are skipped by random regeneration
    pub locked: bool,
}

impl Cell {
    /// Creates an unlocked cell.
    #[must_use]
    pub const fn unlocked(color: RgbColor) -> Self {
        Self {
            color,
            locked: false,
        }
    }
}

/// Ordered collection of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    cells: Vec<Cell>,
}

impl Palette {
    /// Builds a palette of unlocked cells.
    ///
    /// Returns `None` when the color count is outside the allowed range.
    pub fn from_colors(colors: impl IntoIterator<Item = RgbColor>) -> Option<Self> {
        let cells: Vec<Cell> = colors.into_iter().map(Cell::unlocked).collect();
        (MIN_CELLS..=MAX_CELLS)
            .contains(&cells.len())
            .then_some(Self { cells })
    }

    /// Read-only view of the cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a palette holds at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates the cells in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Colors in order.
    #[must_use]
    pub fn colors(&self) -> Vec<RgbColor> {
        self.cells.iter().map(|cell| cell.color).collect()
    }

    /// Colors in order as `#RRGGBB` strings.
    #[must_use]
    pub fn hex_colors(&self) -> Vec<String> {
        self.cells.iter().map(|cell| cell.color.to_hex()).collect()
    }

    /// Positions of locked cells.
    #[must_use]
    pub fn locked_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.locked)
            .map(|(i, _)| i)
            .collect()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Vec<Cell> {
        &mut self.cells
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_size() {
        assert_eq!(clamp_size(0), 1);
        assert_eq!(clamp_size(1), 1);
        assert_eq!(clamp_size(20), 20);
        assert_eq!(clamp_size(100), 100);
        assert_eq!(clamp_size(250), 100);
    }

    #[test]
    fn test_from_colors_bounds() {
        assert!(Palette::from_colors(Vec::new()).is_none());
        assert!(Palette::from_colors(vec![RgbColor::default(); 101]).is_none());

        let palette = Palette::from_colors(vec![RgbColor::new(1, 2, 3); 3]).unwrap();
        assert_eq!(palette.len(), 3);
        assert!(palette.iter().all(|cell| !cell.locked));
        assert_eq!(palette.hex_colors(), vec!["#010203"; 3]);
    }

    #[test]
    fn test_serialize_shape() {
        let palette = Palette::from_colors([RgbColor::new(0x11, 0x22, 0x33)]).unwrap();
        let json = serde_json::to_value(&palette).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"cells": [{"color": "#112233", "locked": false}]})
        );
    }

    #[test]
    fn test_locked_positions() {
        let mut palette = Palette::from_colors(vec![RgbColor::default(); 4]).unwrap();
        palette.cells_mut()[1].locked = true;
        palette.cells_mut()[3].locked = true;
        assert_eq!(palette.locked_positions(), vec![1, 3]);
    }
}
