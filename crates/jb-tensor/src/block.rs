use crate::error::{Result, TensorError};
use crate::matrix::Matrix;

/// A square tile: `size` rows starting at `row` and `size` columns starting at `col`.
///
/// A `Block` is only an index range. It never owns or borrows storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub row: usize,
    pub col: usize,
    pub size: usize,
}

impl Block {
    pub fn new(row: usize, col: usize, size: usize) -> Self {
        Block { row, col, size }
    }

    /// Returns true if the tile lies entirely inside an n×n matrix.
    pub fn fits(&self, n: usize) -> bool {
        self.row + self.size <= n && self.col + self.size <= n
    }

    /// Checks that the tile lies inside an n×n matrix.
    pub fn ensure_fits(&self, n: usize) -> Result<()> {
        if !self.fits(n) {
            return Err(TensorError::DimensionMismatch(format!(
                "block [{}..{}, {}..{}] exceeds {}x{} matrix",
                self.row,
                self.row + self.size,
                self.col,
                self.col + self.size,
                n,
                n
            )));
        }
        Ok(())
    }
}

/// A borrowed, bounds-checked tile of a matrix.
#[derive(Debug, Clone, Copy)]
pub struct BlockView<'a> {
    matrix: &'a Matrix,
    block: Block,
}

impl<'a> BlockView<'a> {
    /// # Errors
    /// Returns `DimensionMismatch` if `block` is not inside `matrix`.
    pub fn new(matrix: &'a Matrix, block: Block) -> Result<Self> {
        block.ensure_fits(matrix.n())?;
        Ok(BlockView { matrix, block })
    }

    pub fn matrix(&self) -> &'a Matrix {
        self.matrix
    }

    pub fn block(&self) -> Block {
        self.block
    }

    pub fn size(&self) -> usize {
        self.block.size
    }

    /// Reads element (i, j) relative to the tile origin.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix.get(self.block.row + i, self.block.col + j)
    }
}
