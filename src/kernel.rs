//! Monte Carlo sampling and reduction kernel
//!
//! Trials are split statically across a fork-join pool. Each worker owns a
//! seeded `SmallRng` and a local hit counter; the counters are combined by
//! a plain sum at the join, so the total is independent of how the pool
//! schedules the workers.

use std::fmt;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::real::Precision;
use crate::seed::{time_seed, worker_seed};

/// Trial count used when none is given on the command line
pub const DEFAULT_TRIALS: u64 = 100_000_000;

/// Error from an estimation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// The requested trial count was zero
    NoTrials,
}

impl std::error::Error for KernelError {}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTrials => write!(f, "trial count must be positive"),
        }
    }
}

/// Outcome of one estimation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiEstimate<T> {
    /// The estimate, in the precision it was computed at
    pub value: T,
    /// Trials that landed inside the quarter circle
    pub inside: u64,
    /// Total trials
    pub trials: u64,
    /// Wall-clock time from fork to reduced total
    pub runtime: Duration,
}

/// Whether `(x, y)` lies inside the unit quarter circle
///
/// Points exactly on the arc count as inside.
///
/// # Example
///
/// ```
/// use quadrant::kernel::in_quarter_circle;
///
/// assert!(in_quarter_circle(1.0_f64, 0.0));
/// assert!(in_quarter_circle(0.5_f64, 0.5));
/// assert!(!in_quarter_circle(0.8_f64, 0.7));
/// ```
#[inline]
pub fn in_quarter_circle<T: Precision>(x: T, y: T) -> bool {
    x * x + y * y <= T::one()
}

/// One worker's loop: draw `trials` coordinate pairs from `rng` and count
/// the hits
///
/// Each draw takes two independent values in the unit interval, rounds
/// them into `T`, and runs the circle test in `T` arithmetic.
pub fn count_inside<T, R>(rng: &mut R, trials: u64) -> u64
where
    T: Precision,
    R: Rng,
{
    let mut inside = 0;
    for _ in 0..trials {
        let x = T::from_f64(rng.gen());
        let y = T::from_f64(rng.gen());
        if in_quarter_circle(x, y) {
            inside += 1;
        }
    }
    inside
}

/// Trials assigned to `worker` when `n` trials are split over `workers`
///
/// The first `n % workers` workers take one extra trial, so the shares
/// always sum to exactly `n`. `workers` must be positive.
#[inline]
pub fn trials_for(n: u64, workers: usize, worker: usize) -> u64 {
    let workers = workers as u64;
    let share = n / workers;
    if (worker as u64) < n % workers {
        share + 1
    } else {
        share
    }
}

/// The estimate `4 * inside / trials` in `T` arithmetic
///
/// # Example
///
/// ```
/// use quadrant::kernel::pi_from_counts;
///
/// // every draw inside the circle pins the estimate at 4
/// let hi: f64 = pi_from_counts(1, 1);
/// assert_eq!(hi, 4.0);
/// ```
#[inline]
pub fn pi_from_counts<T: Precision>(inside: u64, trials: u64) -> T {
    T::from_f64(4.0) * T::ratio(inside, trials)
}

/// Estimate π from `n` uniform draws
///
/// Forks one worker per available thread, seeds each from the current
/// time and its worker index, and reduces the per-worker hit counts into
/// the estimate. Returns [`KernelError::NoTrials`] when `n` is zero.
pub fn estimate_pi<T: Precision>(
    n: u64,
) -> Result<PiEstimate<T>, KernelError> {
    estimate_pi_with(n, rayon::current_num_threads(), time_seed())
}

/// Estimate π with an explicit worker count and base seed
///
/// Fixing `(n, workers, base_seed)` fixes every draw, so the hit count is
/// identical from run to run regardless of scheduling. A `workers` of
/// zero is treated as one.
pub fn estimate_pi_with<T: Precision>(
    n: u64,
    workers: usize,
    base_seed: u64,
) -> Result<PiEstimate<T>, KernelError> {
    if n == 0 {
        return Err(KernelError::NoTrials);
    }
    let workers = workers.max(1);

    let start = Instant::now();
    let inside: u64 = (0..workers)
        .into_par_iter()
        .map(|w| {
            let mut rng = SmallRng::seed_from_u64(worker_seed(base_seed, w));
            count_inside::<T, _>(&mut rng, trials_for(n, workers, w))
        })
        .sum();
    let runtime = start.elapsed();

    Ok(PiEstimate {
        value: pi_from_counts(inside, n),
        inside,
        trials: n,
        runtime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use std::f64::consts::PI;

    #[test]
    fn arc_points_count_as_inside() {
        assert!(in_quarter_circle(1.0_f64, 0.0));
        assert!(in_quarter_circle(0.0_f64, 1.0));
        assert!(!in_quarter_circle(1.0_f64, 1E-4));
    }

    // A stuck generator puts every draw at the origin; one trial must land
    // inside and pin the estimate at exactly 4.
    #[test]
    fn origin_draw_is_a_hit() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(count_inside::<f64, _>(&mut rng, 1), 1);

        let pi: f64 = pi_from_counts(1, 1);
        assert_eq!(pi, 4.0);
    }

    #[test]
    fn corner_draws_all_miss() {
        // all-ones bits put every draw at ~(1, 1), outside the arc
        let mut rng = StepRng::new(u64::MAX, 0);
        assert_eq!(count_inside::<f64, _>(&mut rng, 100), 0);
    }

    #[test]
    fn float_precision_counts_too() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(count_inside::<f32, _>(&mut rng, 3), 3);
        let pi: f32 = pi_from_counts(3, 3);
        assert_eq!(pi, 4.0);
    }

    #[test]
    fn shares_cover_every_trial() {
        for (n, workers) in
            [(100, 7), (100_000_000, 16), (1, 4), (13, 13), (5, 8)]
        {
            let total: u64 =
                (0..workers).map(|w| trials_for(n, workers, w)).sum();
            assert_eq!(total, n);
        }
    }

    #[test]
    fn chunking_does_not_change_the_total() {
        let mut rng = SmallRng::seed_from_u64(42);
        let points: Vec<(f64, f64)> =
            (0..10_000).map(|_| (rng.gen(), rng.gen())).collect();

        let count = |ps: &[(f64, f64)]| -> u64 {
            ps.iter().filter(|&&(x, y)| in_quarter_circle(x, y)).count()
                as u64
        };

        let total = count(&points);
        for chunks in [2, 3, 7, 16, 100] {
            let size = points.len() / chunks + 1;
            let summed: u64 = points.chunks(size).map(count).sum();
            assert_eq!(summed, total);
        }
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let a = estimate_pi_with::<f64>(100_000, 4, 0xBAD_5EED).unwrap();
        let b = estimate_pi_with::<f64>(100_000, 4, 0xBAD_5EED).unwrap();
        assert_eq!(a.inside, b.inside);
        assert_eq!(a.value, b.value);
    }

    #[test]
    fn single_worker_matches_the_bare_loop() {
        let est = estimate_pi_with::<f64>(1_000, 1, 99).unwrap();
        let mut rng = SmallRng::seed_from_u64(worker_seed(99, 0));
        assert_eq!(est.inside, count_inside::<f64, _>(&mut rng, 1_000));
    }

    #[test]
    fn converges_at_large_n() {
        let est = estimate_pi_with::<f64>(1_000_000, 4, 0xDECAF).unwrap();
        assert::close(est.value, PI, 0.01);
        assert!(est.inside <= est.trials);
    }

    #[test]
    fn reported_trials_echo_the_input() {
        for n in [1, 17, 100_000] {
            let est = estimate_pi_with::<f64>(n, 3, 7).unwrap();
            assert_eq!(est.trials, n);
        }
    }

    #[test]
    fn zero_trials_are_rejected() {
        assert_eq!(
            estimate_pi_with::<f64>(0, 4, 1).unwrap_err(),
            KernelError::NoTrials
        );
        assert_eq!(estimate_pi::<f64>(0).unwrap_err(), KernelError::NoTrials);
        assert_eq!(
            KernelError::NoTrials.to_string(),
            "trial count must be positive"
        );
    }

    #[test]
    fn zero_workers_fall_back_to_one() {
        let est = estimate_pi_with::<f64>(100, 0, 5).unwrap();
        assert!(est.inside <= 100);
    }

    proptest! {
        #[test]
        fn shares_sum_to_n(n in 0u64..10_000_000, workers in 1usize..128) {
            let total: u64 =
                (0..workers).map(|w| trials_for(n, workers, w)).sum();
            prop_assert_eq!(total, n);
        }

        #[test]
        fn estimate_stays_in_range(
            (trials, inside) in (1u64..1_000_000)
                .prop_flat_map(|t| (Just(t), 0..=t))
        ) {
            let pi: f64 = pi_from_counts(inside, trials);
            prop_assert!((0.0..=4.0).contains(&pi));
        }

        #[test]
        fn hit_count_never_exceeds_trials(
            n in 1u64..20_000,
            workers in 1usize..9,
            seed in proptest::num::u64::ANY,
        ) {
            let est = estimate_pi_with::<f64>(n, workers, seed).unwrap();
            prop_assert!(est.inside <= n);
            prop_assert!((0.0..=4.0).contains(&est.value));
        }
    }
}
