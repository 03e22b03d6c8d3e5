//! # Contour Generator
//!
//! Entry point for tracing. A [`ContourGenerator`] owns a mesh and the
//! existence map derived from its mask, and traces any number of levels
//! against them. Every trace call rebuilds its own flag lattice and saddle
//! cache, so calls are independent and may run concurrently.
//!
//! ## Parallel levels
//!
//! With the `parallel` feature (on by default) the multi-level entry points
//! trace levels on rayon's pool once their number reaches
//! [`GlobalConfig::parallel_threshold`]. Results come back in level order
//! either way.


use crate::error::{ContourError, ContourResult};
use crate::existence::ExistenceMap;
use crate::levels::{ChunkSizes, LevelPair};
use crate::mesh::QuadMesh;
use crate::path::{assemble_path, ContourPath, ContourSet};
use crate::trace::trace_points;
use config::constants::GlobalConfig;
use tracing::debug;

/// Traces contours of a scalar field on a quad mesh.
///
/// # Example
///
/// ```rust
/// use contour_trace::{ChunkSizes, ContourGenerator, QuadMesh};
///
/// let mesh = QuadMesh::from_values(4, 3, vec![
///     0.0, 1.0, 2.0, 3.0,
///     0.0, 1.0, 2.0, 3.0,
///     0.0, 1.0, 2.0, 3.0,
/// ]).unwrap();
/// let generator = ContourGenerator::new(mesh).with_chunk_sizes(ChunkSizes::NONE);
///
/// let lines = generator.lines(1.5).unwrap();
/// assert_eq!(lines.len(), 1);
///
/// let band = generator.filled(0.5, 2.5).unwrap();
/// assert!(band.paths[0].is_closed());
/// ```
#[derive(Debug, Clone)]
pub struct ContourGenerator {
    mesh: QuadMesh,
    existence: ExistenceMap,
    chunks: ChunkSizes,
    config: GlobalConfig,
}

impl ContourGenerator {
    /// Creates a generator, building the existence map from the mesh mask.
    pub fn new(mesh: QuadMesh) -> Self {
        let existence = ExistenceMap::build(mesh.nx(), mesh.ny(), mesh.mask());
        Self {
            mesh,
            existence,
            chunks: ChunkSizes::NONE,
            config: GlobalConfig::default(),
        }
    }

    /// Sets the chunk sizes used for filled contours.
    pub fn with_chunk_sizes(mut self, chunks: ChunkSizes) -> Self {
        self.chunks = chunks;
        self
    }

    /// Sets the parallelism configuration.
    pub fn with_config(mut self, config: GlobalConfig) -> Self {
        self.config = config;
        self
    }

    /// The mesh being contoured.
    pub fn mesh(&self) -> &QuadMesh {
        &self.mesh
    }

    /// Zone existence derived from the mesh mask.
    pub fn existence(&self) -> &ExistenceMap {
        &self.existence
    }

    /// Chunk sizes applied to filled contours.
    pub fn chunk_sizes(&self) -> ChunkSizes {
        self.chunks
    }

    /// Parallelism configuration for the multi-level entry points.
    pub fn config(&self) -> GlobalConfig {
        self.config
    }

    /// Traces one level pair; the pair decides between lines and bands.
    ///
    /// # Errors
    ///
    /// Only internal invariant violations. Inputs were validated when the
    /// mesh and level pair were built.
    pub fn trace(&self, levels: LevelPair) -> ContourResult<ContourSet> {
        let mode = levels.mode();
        let chunks = self.chunks.resolve(self.mesh.nx(), self.mesh.ny(), mode);
        let raw = trace_points(&self.mesh, &self.existence, levels, chunks)?;

        let paths = raw
            .curves()
            .map(|(points, tags)| assemble_path(points, tags, mode))
            .collect::<ContourResult<Vec<_>>>()?;

        debug!(
            ?mode,
            lower = levels.lower(),
            upper = levels.upper(),
            paths = paths.len(),
            "Traced contour set"
        );
        Ok(ContourSet { levels, paths })
    }

    /// Traces contour lines at `level`.
    pub fn lines(&self, level: f64) -> ContourResult<ContourSet> {
        self.trace(LevelPair::line(level)?)
    }

    /// Traces filled polygons for values between `lower` and `upper`.
    ///
    /// # Errors
    ///
    /// Rejects `lower >= upper` and non-finite levels.
    pub fn filled(&self, lower: f64, upper: f64) -> ContourResult<ContourSet> {
        self.trace(band(lower, upper)?)
    }

    /// Traces contour lines at every level, returned in input order.
    pub fn multi_lines(&self, levels: &[f64]) -> ContourResult<Vec<ContourSet>> {
        let pairs = levels
            .iter()
            .map(|&level| LevelPair::line(level))
            .collect::<ContourResult<Vec<_>>>()?;
        self.trace_all(&pairs)
    }

    /// Traces one band per consecutive pair of `levels`.
    ///
    /// `n` levels give `n - 1` bands; fewer than two levels give none.
    ///
    /// # Errors
    ///
    /// Levels must be finite and strictly increasing.
    pub fn multi_filled(&self, levels: &[f64]) -> ContourResult<Vec<ContourSet>> {
        let pairs = levels
            .windows(2)
            .map(|pair| band(pair[0], pair[1]))
            .collect::<ContourResult<Vec<_>>>()?;
        self.trace_all(&pairs)
    }

    fn trace_all(&self, pairs: &[LevelPair]) -> ContourResult<Vec<ContourSet>> {
        #[cfg(feature = "parallel")]
        {
            if self.config.should_parallelize(pairs.len()) {
                use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
                debug!(levels = pairs.len(), "Tracing levels in parallel");
                return pairs.par_iter().map(|&pair| self.trace(pair)).collect();
            }
        }

        pairs.iter().map(|&pair| self.trace(pair)).collect()
    }
}

/// Level pair for a band, which needs `lower < upper`.
fn band(lower: f64, upper: f64) -> ContourResult<LevelPair> {
    let levels = LevelPair::new(lower, upper)?;
    if !levels.is_filled() {
        return Err(ContourError::InvalidLevels { lower, upper });
    }
    Ok(levels)
}

/// Traces one level pair on `mesh` in a single call.
///
/// `mask`, when given, replaces any mask attached to the mesh. Chunking
/// only affects filled contours.
///
/// # Errors
///
/// Invalid-input errors for a mask of the wrong length; internal invariant
/// errors from the tracer.
///
/// # Example
///
/// ```rust
/// use contour_trace::{trace, ChunkSizes, LevelPair, QuadMesh};
///
/// let mesh = QuadMesh::from_values(3, 3, vec![
///     0.0, 0.0, 0.0,
///     0.0, 2.0, 0.0,
///     0.0, 0.0, 0.0,
/// ]).unwrap();
/// let paths = trace(&mesh, None, LevelPair::line(1.0).unwrap(), ChunkSizes::NONE).unwrap();
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths[0].len(), 5);
/// ```
pub fn trace(
    mesh: &QuadMesh,
    mask: Option<&[bool]>,
    levels: LevelPair,
    chunk_sizes: ChunkSizes,
) -> ContourResult<Vec<ContourPath>> {
    let mesh = match mask {
        Some(mask) => mesh.clone().with_mask(mask.to_vec())?,
        None => mesh.clone(),
    };
    let generator = ContourGenerator::new(mesh)
        .with_chunk_sizes(chunk_sizes)
        .with_config(GlobalConfig::sequential());
    Ok(generator.trace(levels)?.paths)
}
