// Copyright @yucwang 2026

//! Per-worker uniform random streams.
//!
//! A `RandomSource` expands one master seed into a row key followed by one
//! generator per worker. Each `WorkerRng` is an owned value that is moved
//! into its worker thread, so a worker can only ever draw from its own stream.
//!
//! `WorkerRng::begin_row` replaces the worker's state with a stream derived
//! from the row key and the row index. The per-worker state therefore only
//! matters to callers that never call `begin_row`; the renderer always does,
//! which keeps its output independent of the worker count.

use crate::math::constants::{Float, Vector2f};
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::{Pcg32, Pcg64};
use std::fmt;
use std::num::NonZeroUsize;

pub const MASTER_SEED: u64 = 1234;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RngError {
    NoWorkers,
    UnknownWorker { id: usize, workers: usize },
}

impl fmt::Display for RngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RngError::NoWorkers => write!(f, "random source needs at least one worker"),
            RngError::UnknownWorker { id, workers } => {
                write!(f, "worker {} has no stream ({} streams allocated)", id, workers)
            }
        }
    }
}

impl std::error::Error for RngError {}

pub struct RandomSource {
    master_seed: u64,
    streams: Vec<WorkerRng>,
}

impl RandomSource {
    pub fn init(workers: usize) -> Result<Self, RngError> {
        Self::with_seed(workers, MASTER_SEED)
    }

    pub fn with_seed(workers: usize, master_seed: u64) -> Result<Self, RngError> {
        let workers = NonZeroUsize::new(workers).ok_or(RngError::NoWorkers)?;
        Ok(Self::for_workers(workers, master_seed))
    }

    pub fn for_workers(workers: NonZeroUsize, master_seed: u64) -> Self {
        let mut expander = Pcg64::seed_from_u64(master_seed);
        // Drawn first so it does not depend on the number of workers.
        let row_key = expander.next_u64();
        let streams = (0..workers.get())
            .map(|id| WorkerRng {
                id,
                row_key,
                rng: Pcg32::new(expander.next_u64(), id as u64),
            })
            .collect();

        Self { master_seed, streams }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn workers(&self) -> usize {
        self.streams.len()
    }

    /// Borrows the stream that belongs to `id`.
    pub fn stream(&mut self, id: usize) -> Result<&mut WorkerRng, RngError> {
        let workers = self.streams.len();
        self.streams
            .get_mut(id)
            .ok_or(RngError::UnknownWorker { id, workers })
    }

    pub fn into_streams(self) -> Vec<WorkerRng> {
        self.streams
    }
}

#[derive(Debug, Clone)]
pub struct WorkerRng {
    id: usize,
    row_key: u64,
    rng: Pcg32,
}

impl WorkerRng {
    pub fn id(&self) -> usize {
        self.id
    }

    /// Re-keys the stream for an image row. Rows are claimed dynamically, so
    /// the sequence a row sees depends on the row only, not on the worker.
    pub fn begin_row(&mut self, row: usize) {
        let row = row as u64;
        self.rng = Pcg32::new(self.row_key ^ row.wrapping_mul(0x9E37_79B9_7F4A_7C15), row);
    }

    /// Uniform sample in [0, 1).
    pub fn next(&mut self) -> Float {
        self.rng.gen::<Float>()
    }

    pub fn next_2d(&mut self) -> Vector2f {
        let x = self.next();
        let y = self.next();
        Vector2f::new(x, y)
    }
}
