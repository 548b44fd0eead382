//! Execution strategy for bulk coordinate transformations.
//!
//! The caller's `nprocs` hint selects a strategy once; the strategy is then
//! passed by reference into every bulk operation. Results are identical for
//! both strategies, only the scheduling differs.

use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::error::{ProjectionError, ProjectionResult};
use crate::projector::Projector;

#[derive(Debug, Clone, Default)]
pub enum Executor {
    /// Transform on the calling thread.
    #[default]
    Serial,
    /// Transform on a dedicated worker pool.
    Parallel {
        pool: Arc<ThreadPool>,
        nprocs: usize,
    },
}

impl Executor {
    pub fn serial() -> Self {
        Executor::Serial
    }

    /// Select a strategy from a worker count: `0` or `1` runs serially.
    pub fn from_nprocs(nprocs: usize) -> ProjectionResult<Self> {
        if nprocs <= 1 {
            return Ok(Executor::Serial);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(nprocs)
            .thread_name(|i| format!("projection-worker-{}", i))
            .build()
            .map_err(|e| ProjectionError::ThreadPool(e.to_string()))?;
        debug!(nprocs, "Created projection worker pool");
        Ok(Executor::Parallel {
            pool: Arc::new(pool),
            nprocs,
        })
    }

    /// Number of workers this strategy uses.
    pub fn nprocs(&self) -> usize {
        match self {
            Executor::Serial => 1,
            Executor::Parallel { nprocs, .. } => *nprocs,
        }
    }

    /// Apply `f` to every element, preserving order.
    pub fn map<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        match self {
            Executor::Serial => items.iter().map(f).collect(),
            Executor::Parallel { pool, .. } => pool.install(|| items.par_iter().map(f).collect()),
        }
    }

    /// Apply `f` to element pairs of two equally long slices, returning
    /// the two output components separately.
    pub fn map_pairs<F>(&self, a: &[f64], b: &[f64], f: F) -> (Vec<f64>, Vec<f64>)
    where
        F: Fn(f64, f64) -> (f64, f64) + Sync + Send,
    {
        debug_assert_eq!(a.len(), b.len());
        match self {
            Executor::Serial => a.iter().zip(b).map(|(&u, &v)| f(u, v)).unzip(),
            Executor::Parallel { pool, .. } => pool.install(|| {
                a.par_iter()
                    .zip(b.par_iter())
                    .map(|(&u, &v)| f(u, v))
                    .unzip()
            }),
        }
    }

    /// Project lon/lat arrays (degrees) to planar x/y arrays.
    pub fn project(&self, projector: &dyn Projector, lons: &[f64], lats: &[f64]) -> (Vec<f64>, Vec<f64>) {
        self.map_pairs(lons, lats, |lon, lat| projector.forward(lon, lat))
    }

    /// Unproject planar x/y arrays to lon/lat arrays (degrees).
    pub fn unproject(&self, projector: &dyn Projector, xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>) {
        self.map_pairs(xs, ys, |x, y| projector.inverse(x, y))
    }
}
