use jb_linalg::SolverConfig;
use jb_tensor::BackendKind;

/// Matrix sizes swept when the caller has no preference.
pub const DEFAULT_SIZES: [usize; 9] = [4, 8, 16, 32, 64, 128, 256, 512, 1024];

/// Configuration for one benchmark sweep.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Backend both stages run on.
    pub backend: BackendKind,
    /// Tile size for the multiply stage. `None` uses the backend's direct
    /// product instead of the block-partitioned one.
    pub block_size: Option<usize>,
    /// Stopping criteria for the decompose stage.
    pub solver: SolverConfig,
    /// Seed for the random operands.
    pub seed: u64,
    /// Feed ½(C + Cᵗ) to the decompose stage instead of the raw product C.
    /// The product of two random matrices is not symmetric, so with this off
    /// the solver's symmetry precondition rejects it.
    pub symmetrize: bool,
}

impl BenchConfig {
    pub fn new(backend: BackendKind) -> Self {
        Self {
            backend,
            ..Self::default()
        }
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_symmetrize(mut self, symmetrize: bool) -> Self {
        self.symmetrize = symmetrize;
        self
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Array,
            block_size: None,
            solver: SolverConfig::default(),
            seed: 0,
            symmetrize: true,
        }
    }
}
