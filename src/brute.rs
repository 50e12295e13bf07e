//! Exhaustive chromatic-number search.
//!
//! Every string of length `n` over the first `n` alphabet colors is a candidate coloring
//! (digit `i` is the color of vertex `i`), `n^n` candidates in all. Candidates are walked
//! with a fixed-radix odometer, the last vertex being the least significant digit. The
//! minimum number of distinct colors over all proper candidates is the chromatic number.
//!
//! ## Invalid-prefix skipping
//!
//! If the earliest conflict of a candidate is between vertex `j` and some earlier vertex,
//! every candidate agreeing on digits `0..=j` has the same conflict. With
//! [`BruteForceConfig::skip_invalid_prefixes`] the odometer then advances digit `j`
//! directly, passing over that whole block. The candidates skipped are all improper, so the
//! result is unchanged; only the work drops.
//!
//! ## Parallel mode
//!
//! The candidate space is split by its leading digits into `n^p` independent blocks which
//! run on a rayon pool. Each block reports its best candidate; the reduction keeps the
//! lowest count and, among equals, the earliest block, so the coloring returned matches the
//! sequential one.

use crate::color::{Coloring, ALPHABET_LEN};
use crate::error::{ColoringError, Result};
use crate::graph::{EdgeThreshold, Graph};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

// ============================================================================
// Configuration
// ============================================================================

/// Brute-force search parameters.
#[derive(Clone, Debug)]
pub struct BruteForceConfig {
    /// Split the candidate space across a rayon pool.
    pub parallel: bool,
    /// Worker threads for parallel mode; `None` uses the global rayon pool.
    pub workers: Option<usize>,
    /// Abort with [`ColoringError::SearchAborted`] once this much time has passed.
    pub deadline: Option<Duration>,
    /// Pass over blocks of candidates that share an improper prefix.
    pub skip_invalid_prefixes: bool,
    /// Candidates examined between deadline/cancellation checks.
    pub poll_interval: u64,
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            workers: None,
            deadline: None,
            skip_invalid_prefixes: true,
            poll_interval: 4096,
        }
    }
}

/// Counters gathered during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates examined one by one.
    pub evaluated: u64,
    /// Examined candidates that were proper colorings.
    pub valid: u64,
    /// Blocks of improper candidates passed over without examination.
    pub skipped_blocks: u64,
    /// Independent blocks the candidate space was split into.
    pub blocks: u64,
}

impl SearchStats {
    fn merge(&mut self, other: &SearchStats) {
        self.evaluated += other.evaluated;
        self.valid += other.valid;
        self.skipped_blocks += other.skipped_blocks;
        self.blocks += other.blocks;
    }
}

/// Result of a completed brute-force search.
#[derive(Clone, Debug)]
pub struct BruteForceOutcome {
    /// The chromatic number.
    pub chromatic_number: usize,
    /// The first optimal coloring in odometer order.
    pub coloring: Coloring,
    /// Work counters.
    pub stats: SearchStats,
}

// ============================================================================
// Solver
// ============================================================================

/// Exhaustive search driver.
#[derive(Clone, Debug, Default)]
pub struct BruteForceSolver {
    config: BruteForceConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl BruteForceSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: BruteForceConfig) -> Self {
        Self { config, cancel: None }
    }

    /// Lets another thread stop the search by setting `flag`.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &BruteForceConfig {
        &self.config
    }

    /// Finds the chromatic number of `graph` at `threshold`.
    ///
    /// # Errors
    /// - [`ColoringError::UnsupportedSize`] if the graph has more vertices than the alphabet
    ///   has colors (checked before any work).
    /// - [`ColoringError::WorkerPool`] if a dedicated pool was requested and failed to start.
    /// - [`ColoringError::SearchAborted`] on deadline or cancellation.
    pub fn solve(&self, graph: &Graph, threshold: EdgeThreshold) -> Result<BruteForceOutcome> {
        let n = graph.vertex_count();
        check_supported(n)?;

        let adj = graph.adjacency_bits(threshold);
        let prefix_len = if self.config.parallel {
            prefix_len_for(n, self.config.workers.unwrap_or_else(rayon::current_num_threads))
        } else {
            0
        };
        log::info!(
            "brute force: n={n} threshold={threshold} edges={} candidates~{:.3e} parallel={} prefix_len={prefix_len}",
            graph.edge_count(threshold),
            (n as f64).powi(n as i32),
            self.config.parallel,
        );

        let ctx = SearchContext {
            adj: &adj,
            n,
            radix: n as u8,
            prefix_len,
            skip_invalid_prefixes: self.config.skip_invalid_prefixes,
            poll_interval: self.config.poll_interval.max(1),
            // A deadline past what `Instant` can represent never fires.
            deadline: self
                .config
                .deadline
                .and_then(|d| Instant::now().checked_add(d)),
            cancel: self.cancel.as_deref(),
            abort: AtomicBool::new(false),
        };

        let blocks = if self.config.parallel {
            match self.config.workers {
                Some(workers) => rayon::ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .build()?
                    .install(|| run_blocks_parallel(&ctx)),
                None => run_blocks_parallel(&ctx),
            }
        } else {
            vec![search_block(&ctx, 0)]
        };

        let outcome = reduce_blocks(blocks, n)?;
        log::info!(
            "brute force: chromatic number {} (evaluated={} valid={} skipped_blocks={})",
            outcome.chromatic_number,
            outcome.stats.evaluated,
            outcome.stats.valid,
            outcome.stats.skipped_blocks
        );
        debug_assert!(crate::validate::is_proper(graph, threshold, &outcome.coloring));
        Ok(outcome)
    }
}

/// Rejects graphs the alphabet cannot cover.
///
/// # Errors
/// Returns [`ColoringError::UnsupportedSize`] if `n > 36`.
pub fn check_supported(n: usize) -> Result<()> {
    if n > ALPHABET_LEN {
        return Err(ColoringError::UnsupportedSize {
            vertices: n,
            alphabet: ALPHABET_LEN,
        });
    }
    Ok(())
}

/// Chromatic number by exhaustive search with the default configuration.
///
/// # Errors
/// See [`BruteForceSolver::solve`].
pub fn brute_force_chromatic_number(graph: &Graph, threshold: EdgeThreshold) -> Result<usize> {
    BruteForceSolver::default()
        .solve(graph, threshold)
        .map(|o| o.chromatic_number)
}

// ============================================================================
// Block search
// ============================================================================

struct SearchContext<'a> {
    /// Neighbor bitsets at the query threshold.
    adj: &'a [u64],
    n: usize,
    radix: u8,
    /// Leading digits fixed per block.
    prefix_len: usize,
    skip_invalid_prefixes: bool,
    poll_interval: u64,
    deadline: Option<Instant>,
    cancel: Option<&'a AtomicBool>,
    /// Set by the first block that stops early so the others follow.
    abort: AtomicBool,
}

impl SearchContext<'_> {
    fn block_count(&self) -> usize {
        usize::from(self.radix).pow(self.prefix_len as u32)
    }

    fn should_stop(&self) -> bool {
        if self.abort.load(Ordering::Relaxed) {
            return true;
        }
        let cancelled = self.cancel.is_some_and(|c| c.load(Ordering::Relaxed));
        let expired = self.deadline.is_some_and(|d| Instant::now() >= d);
        if cancelled || expired {
            self.abort.store(true, Ordering::Relaxed);
            return true;
        }
        false
    }
}

struct BlockResult {
    /// Best `(count, digits)` found in the block.
    best: Option<(usize, Vec<u8>)>,
    stats: SearchStats,
    aborted: bool,
}

fn run_blocks_parallel(ctx: &SearchContext<'_>) -> Vec<BlockResult> {
    (0..ctx.block_count())
        .into_par_iter()
        .map(|block| search_block(ctx, block))
        .collect()
}

/// Writes the base-`radix` digits of `index` into `out`, most significant first.
fn index_to_digits(mut index: usize, radix: u8, out: &mut [u8]) {
    for d in out.iter_mut().rev() {
        *d = (index % usize::from(radix)) as u8;
        index /= usize::from(radix);
    }
    debug_assert_eq!(index, 0, "index out of range for prefix");
}

/// Enumerates every candidate whose leading `prefix_len` digits spell `block`.
fn search_block(ctx: &SearchContext<'_>, block: usize) -> BlockResult {
    let n = ctx.n;
    let p = ctx.prefix_len;
    let mut digits = vec![0u8; n];
    index_to_digits(block, ctx.radix, &mut digits[..p]);

    let mut result = BlockResult {
        best: None,
        stats: SearchStats {
            blocks: 1,
            ..SearchStats::default()
        },
        aborted: false,
    };

    if ctx.skip_invalid_prefixes && first_conflict(ctx.adj, &digits[..p]).is_some() {
        result.stats.skipped_blocks += 1;
        return result;
    }

    let mut best_count = usize::MAX;
    let mut since_poll = 0u64;
    loop {
        if since_poll == 0 && ctx.should_stop() {
            result.aborted = true;
            break;
        }
        since_poll = (since_poll + 1) % ctx.poll_interval;

        result.stats.evaluated += 1;
        let advance_at = match first_conflict(ctx.adj, &digits) {
            None => {
                result.stats.valid += 1;
                let count = distinct_digits(&digits);
                if count < best_count {
                    best_count = count;
                    result.best = Some((count, digits.clone()));
                }
                n - 1
            }
            Some(j) if ctx.skip_invalid_prefixes => {
                if j < n - 1 {
                    result.stats.skipped_blocks += 1;
                }
                j
            }
            Some(_) => n - 1,
        };

        if !advance(&mut digits, advance_at, p, ctx.radix) {
            break;
        }
    }

    log::trace!(
        "block {block}: best={:?} evaluated={} aborted={}",
        result.best.as_ref().map(|(c, _)| *c),
        result.stats.evaluated,
        result.aborted
    );
    result
}

/// Increments the odometer at position `pos`, zeroing every later position and carrying
/// toward position `floor`. Returns `false` once the carry would pass `floor`.
fn advance(digits: &mut [u8], pos: usize, floor: usize, radix: u8) -> bool {
    if pos < floor || pos >= digits.len() {
        return false;
    }
    digits[pos + 1..].fill(0);
    let mut i = pos;
    loop {
        digits[i] += 1;
        if digits[i] < radix {
            return true;
        }
        digits[i] = 0;
        if i == floor {
            return false;
        }
        i -= 1;
    }
}

/// Smallest `j` such that vertex `j` shares a color with an adjacent earlier vertex.
#[inline]
fn first_conflict(adj: &[u64], digits: &[u8]) -> Option<usize> {
    for j in 1..digits.len() {
        let color = digits[j];
        let mut earlier = adj[j] & ((1u64 << j) - 1);
        while earlier != 0 {
            let i = earlier.trailing_zeros() as usize;
            earlier &= earlier - 1;
            if digits[i] == color {
                return Some(j);
            }
        }
    }
    None
}

#[inline]
fn distinct_digits(digits: &[u8]) -> usize {
    digits
        .iter()
        .fold(0u64, |mask, &d| mask | (1u64 << d))
        .count_ones() as usize
}

/// Picks how many leading digits to fix so that there are a few blocks per worker.
fn prefix_len_for(n: usize, workers: usize) -> usize {
    let target = (workers.max(1) * 4) as u64;
    let mut p = 0usize;
    let mut blocks = 1u64;
    while p < n && p < 3 && blocks < target {
        blocks *= n as u64;
        p += 1;
    }
    p
}

fn reduce_blocks(blocks: Vec<BlockResult>, n: usize) -> Result<BruteForceOutcome> {
    let mut stats = SearchStats::default();
    let mut aborted = false;
    let mut best: Option<(usize, Vec<u8>)> = None;

    // Blocks arrive in prefix order; strict `<` keeps the earliest among equals.
    for block in blocks {
        stats.merge(&block.stats);
        aborted |= block.aborted;
        if let Some((count, digits)) = block.best {
            if best.as_ref().map_or(true, |(b, _)| count < *b) {
                best = Some((count, digits));
            }
        }
    }

    if aborted {
        return Err(ColoringError::SearchAborted {
            evaluated: stats.evaluated,
        });
    }

    // The all-distinct candidate is always proper, so a finished search has a best.
    let (chromatic_number, digits) = match best {
        Some(found) => found,
        None => (n, (0..n as u8).collect()),
    };
    let coloring = Coloring::from_digits(&digits).ok_or(ColoringError::UnsupportedSize {
        vertices: n,
        alphabet: ALPHABET_LEN,
    })?;
    Ok(BruteForceOutcome {
        chromatic_number,
        coloring,
        stats,
    })
}

// ============================================================================
// Tests
// ============================================================================
