//! Closed-form decay policies evaluated on the base step array.
//!
//! Every policy here maps a step position `x` to a value independently of
//! its neighbours, with `x / n_steps` as the decay progress in `[0, 1]`.

use super::generator::{constant_of, ScheduleGenerator};
use num_traits::Float;

impl<T: Float> ScheduleGenerator<T> {
    /// Exponential decay.
    ///
    /// # Formula
    ///
    /// ```text
    /// value = initial_value * decay_rate^(x / n_steps)          (continuous)
    /// value = initial_value * decay_rate^floor(x / n_steps)     (staircase)
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_core::schedule::ScheduleGenerator;
    ///
    /// let generator = ScheduleGenerator::<f64>::new(3).unwrap();
    /// let sequence = generator.exponential_decay(1.0, 0.25, false);
    /// assert_eq!(sequence[0], 1.0);
    /// assert!((sequence[1] - 0.5).abs() < 1e-12);
    /// assert!((sequence[2] - 0.25).abs() < 1e-12);
    /// ```
    pub fn exponential_decay(&self, initial_value: T, decay_rate: T, staircase: bool) -> Vec<T> {
        let n = self.horizon();
        self.map_steps(|x| initial_value * decay_rate.powf(progress(x / n, staircase)))
    }

    /// Cosine decay from `initial_value` down to `initial_value * alpha`.
    ///
    /// # Formula
    ///
    /// ```text
    /// value = initial_value * ((1 - alpha) * 0.5 * (1 + cos(pi * min(x, n_steps) / n_steps)) + alpha)
    /// ```
    pub fn cosine_decay(&self, initial_value: T, alpha: T) -> Vec<T> {
        let n = self.horizon();
        let half = constant_of::<T>(0.5);
        let pi = constant_of::<T>(std::f64::consts::PI);

        self.map_steps(|x| {
            let cosine = half * (T::one() + (pi * (x.min(n) / n)).cos());
            initial_value * ((T::one() - alpha) * cosine + alpha)
        })
    }

    /// Inverse time decay.
    ///
    /// # Formula
    ///
    /// ```text
    /// value = initial_value / (1 + decay_rate * x / n_steps)          (continuous)
    /// value = initial_value / (1 + decay_rate * floor(x / n_steps))   (staircase)
    /// ```
    pub fn inverse_time_decay(&self, initial_value: T, decay_rate: T, staircase: bool) -> Vec<T> {
        let n = self.horizon();
        self.map_steps(|x| initial_value / (T::one() + decay_rate * progress(x / n, staircase)))
    }

    /// Polynomial decay from `initial_value` to `end_value`.
    ///
    /// Without `cycle` the step is clamped to `n_steps`, so the schedule
    /// settles at `end_value`. With `cycle` the horizon is stretched to the
    /// next multiple of `n_steps` at or above the step, restarting the decay
    /// each time a multiple is crossed. Step 0 uses a horizon of one
    /// multiple.
    ///
    /// # Formula
    ///
    /// ```text
    /// value = (initial_value - end_value) * (1 - min(x, n_steps) / n_steps)^power + end_value
    /// value = (initial_value - end_value) * (1 - x / h)^power + end_value,
    ///         h = n_steps * max(ceil(x / n_steps), 1)                          (cycle)
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_core::schedule::ScheduleGenerator;
    ///
    /// let generator = ScheduleGenerator::<f64>::new(3).unwrap();
    /// let sequence = generator.polynomial_decay(1.0, 0.0, 1.0, false);
    /// assert_eq!(sequence, vec![1.0, 0.5, 0.0]);
    /// ```
    pub fn polynomial_decay(&self, initial_value: T, end_value: T, power: T, cycle: bool) -> Vec<T> {
        let n = self.horizon();
        let span = initial_value - end_value;

        self.map_steps(|x| {
            let ratio = if cycle {
                let multiple = (x / n).ceil();
                let multiple = if multiple == T::zero() {
                    T::one()
                } else {
                    multiple
                };
                x / (n * multiple)
            } else {
                x.min(n) / n
            };

            span * (T::one() - ratio).powf(power) + end_value
        })
    }
}

/// Decay progress, quantised to whole intervals for staircase variants.
#[inline]
fn progress<T: Float>(ratio: T, staircase: bool) -> T {
    if staircase {
        ratio.floor()
    } else {
        ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn generator(n: usize) -> ScheduleGenerator<f64> {
        ScheduleGenerator::new(n).unwrap()
    }

    // ========================================
    // Exponential decay
    // ========================================

    #[test]
    fn test_exponential_unit_rate_is_constant() {
        let sequence = generator(17).exponential_decay(0.3, 1.0, false);
        assert!(sequence.iter().all(|&v| v == 0.3));
    }

    #[test]
    fn test_exponential_continuous_endpoints() {
        let sequence = generator(10).exponential_decay(2.0, 0.1, false);
        assert_eq!(sequence[0], 2.0);
        assert_relative_eq!(sequence[9], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_exponential_continuous_monotone() {
        let sequence = generator(50).exponential_decay(1.0, 0.5, false);
        assert!(sequence.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_exponential_staircase_drops_only_at_end() {
        let sequence = generator(5).exponential_decay(1.0, 0.5, true);
        assert_eq!(sequence, vec![1.0, 1.0, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_exponential_single_step() {
        let sequence = generator(1).exponential_decay(0.7, 0.5, false);
        assert_eq!(sequence, vec![0.7]);
    }

    // ========================================
    // Cosine decay
    // ========================================

    #[test]
    fn test_cosine_alpha_one_is_constant() {
        for n in [1, 2, 9, 64] {
            let sequence = generator(n).cosine_decay(0.05, 1.0);
            assert_eq!(sequence.len(), n);
            assert!(sequence.iter().all(|&v| v == 0.05));
        }
    }

    #[test]
    fn test_cosine_reaches_alpha_fraction() {
        let sequence = generator(20).cosine_decay(1.0, 0.1);
        assert_relative_eq!(sequence[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(sequence[19], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_cosine_midpoint() {
        // steps = [0, 1.5, 3], midpoint is pi/2
        let sequence = generator(3).cosine_decay(2.0, 0.0);
        assert_abs_diff_eq!(sequence[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sequence[2], 0.0, epsilon = 1e-12);
    }

    // ========================================
    // Inverse time decay
    // ========================================

    #[test]
    fn test_inverse_time_continuous() {
        // steps = [0, 1.5, 3], ratios [0, 0.5, 1]
        let sequence = generator(3).inverse_time_decay(1.0, 2.0, false);
        assert_relative_eq!(sequence[0], 1.0);
        assert_relative_eq!(sequence[1], 0.5);
        assert_relative_eq!(sequence[2], 1.0 / 3.0);
    }

    #[test]
    fn test_inverse_time_staircase() {
        let sequence = generator(4).inverse_time_decay(1.0, 1.0, true);
        assert_eq!(sequence, vec![1.0, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_inverse_time_zero_rate_is_constant() {
        let sequence = generator(8).inverse_time_decay(0.4, 0.0, false);
        assert!(sequence.iter().all(|&v| v == 0.4));
    }

    // ========================================
    // Polynomial decay
    // ========================================

    #[test]
    fn test_polynomial_linear_power() {
        let sequence = generator(5).polynomial_decay(1.0, 0.0, 1.0, false);
        let expected = [1.0, 0.75, 0.5, 0.25, 0.0];
        for (got, want) in sequence.iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_polynomial_quadratic_power() {
        let sequence = generator(3).polynomial_decay(1.0, 0.1, 2.0, false);
        assert_relative_eq!(sequence[0], 1.0);
        assert_relative_eq!(sequence[1], 0.9 * 0.25 + 0.1, epsilon = 1e-12);
        assert_relative_eq!(sequence[2], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_polynomial_cycle_starts_at_initial() {
        let sequence = generator(6).polynomial_decay(1.0, 0.0, 1.0, true);
        assert_eq!(sequence[0], 1.0);
        assert!(sequence.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_polynomial_cycle_matches_non_cycle_within_horizon() {
        let g = generator(9);
        let cycled = g.polynomial_decay(0.5, 0.01, 1.5, true);
        let clamped = g.polynomial_decay(0.5, 0.01, 1.5, false);
        for (a, b) in cycled.iter().zip(&clamped) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_polynomial_ends_at_end_value() {
        let sequence = generator(12).polynomial_decay(3.0, 0.5, 0.7, false);
        assert_relative_eq!(sequence[11], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_progress_staircase_floor() {
        assert_eq!(progress(0.99_f64, true), 0.0);
        assert_eq!(progress(1.0_f64, true), 1.0);
        assert_eq!(progress(0.25_f64, false), 0.25);
    }
}
