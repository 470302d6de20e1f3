use super::types::GridCell;

/// Collection of valued grid cells that fade out over time.
///
/// Each animation tick subtracts a fixed decrement from every cell's opacity
/// and drops cells that reach zero. Cells are never otherwise mutated; a new
/// sample at the same coordinates inserts a fresh cell at full opacity rather
/// than reviving an old one. The tick is driven by the owner (a frame clock
/// in an application, a plain loop in tests), so decay is steppable and
/// fully decoupled from pointer input.
#[derive(Debug, Clone, Default)]
pub struct DecayTrail {
    cells: Vec<GridCell>,
    fade_decrement: f64,
}

impl DecayTrail {
    pub fn new(fade_decrement: f64) -> Self {
        Self {
            cells: Vec::new(),
            fade_decrement,
        }
    }

    /// Insert a cell at full opacity.
    pub fn push(&mut self, mut cell: GridCell) {
        cell.opacity = 1.0;
        self.cells.push(cell);
    }

    /// Apply one decay step: every opacity strictly decreases, cells at or
    /// below zero are removed.
    pub fn tick(&mut self) {
        for cell in &mut self.cells {
            cell.opacity -= self.fade_decrement;
        }
        self.cells.retain(|cell| cell.opacity > 0.0);
    }

    /// Drop every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
