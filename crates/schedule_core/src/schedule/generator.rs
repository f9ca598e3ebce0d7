//! Step-index base array shared by every decay policy.

use crate::types::ScheduleError;
use num_traits::Float;

/// Generator of decay schedules over a fixed number of steps.
///
/// Holds `n_steps` and the base array `steps`, `n_steps` points evenly
/// spaced over `[0, n_steps]` with both endpoints included. The base array
/// is computed once and never mutated; each decay method borrows it and
/// returns a freshly allocated sequence of length `n_steps`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for schedule values (default `f64`)
///
/// # Example
///
/// ```
/// use schedule_core::schedule::ScheduleGenerator;
///
/// let generator: ScheduleGenerator = ScheduleGenerator::new(5).unwrap();
/// assert_eq!(generator.steps(), &[0.0, 1.25, 2.5, 3.75, 5.0]);
///
/// let lr = generator.exponential_decay(0.1, 0.5, false);
/// assert_eq!(lr.len(), 5);
/// assert_eq!(lr[0], 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleGenerator<T: Float = f64> {
    /// Number of discrete optimisation steps
    n_steps: usize,
    /// Evenly spaced step positions from 0 to `n_steps`
    steps: Vec<T>,
}

impl<T: Float> ScheduleGenerator<T> {
    /// Construct a generator for `n_steps` steps.
    ///
    /// # Arguments
    ///
    /// * `n_steps` - Number of steps, must be at least 1
    ///
    /// # Returns
    ///
    /// * `Ok(ScheduleGenerator)` - Generator with its base array computed
    /// * `Err(ScheduleError::InvalidStepCount)` - If `n_steps == 0`
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_core::schedule::ScheduleGenerator;
    ///
    /// let single = ScheduleGenerator::<f64>::new(1).unwrap();
    /// assert_eq!(single.steps(), &[0.0]);
    ///
    /// assert!(ScheduleGenerator::<f64>::new(0).is_err());
    /// ```
    pub fn new(n_steps: usize) -> Result<Self, ScheduleError> {
        if n_steps == 0 {
            return Err(ScheduleError::InvalidStepCount(n_steps));
        }

        Ok(Self {
            n_steps,
            steps: linspace(n_steps),
        })
    }

    /// Returns the number of steps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the base array of step positions.
    #[inline]
    pub fn steps(&self) -> &[T] {
        &self.steps
    }

    /// Returns the length of every generated schedule.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the generator has no steps.
    /// Note: This is never true for a constructed generator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step count as a float, the denominator of every step ratio.
    #[inline]
    pub(crate) fn horizon(&self) -> T {
        cast(self.n_steps)
    }

    /// Apply `f` to every base step position.
    #[inline]
    pub(crate) fn map_steps<F>(&self, f: F) -> Vec<T>
    where
        F: Fn(T) -> T,
    {
        self.steps.iter().map(|&x| f(x)).collect()
    }

    /// Build a sequence whose first element is `initial` and whose element
    /// `i + 1` is `f(i)` for `i` in `0..n_steps - 1`.
    #[inline]
    pub(crate) fn seeded<F>(&self, initial: T, f: F) -> Vec<T>
    where
        F: FnMut(usize) -> T,
    {
        let mut sequence = Vec::with_capacity(self.n_steps);
        sequence.push(initial);
        sequence.extend((0..self.n_steps - 1).map(f));
        sequence
    }
}

/// `n` evenly spaced points over `[0, n]`, endpoint pinned exactly.
fn linspace<T: Float>(n: usize) -> Vec<T> {
    if n == 1 {
        return vec![T::zero()];
    }

    let end: T = cast(n);
    let delta = end / cast(n - 1);
    (0..n)
        .map(|i| if i == n - 1 { end } else { cast::<T>(i) * delta })
        .collect()
}

/// Convert an index into the schedule's float type.
#[inline]
pub(crate) fn cast<T: Float>(value: usize) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Convert an `f64` constant into the schedule's float type.
#[inline]
pub(crate) fn constant_of<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
