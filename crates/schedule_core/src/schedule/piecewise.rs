//! Piecewise constant and constant schedules.

use super::generator::ScheduleGenerator;
use crate::types::ScheduleError;
use num_traits::Float;

impl<T: Float> ScheduleGenerator<T> {
    /// Piecewise constant schedule.
    ///
    /// The step axis is split at `boundaries`, with 0 and `n_steps` added
    /// as the outer edges, and `values[k]` fills the half-open piece
    /// `[edges[k], edges[k + 1])`.
    ///
    /// # Arguments
    ///
    /// * `boundaries` - Interior step indices, non-decreasing and `<= n_steps`
    /// * `values` - One value per piece, `boundaries.len() + 1` in total
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<T>)` - The schedule
    /// * `Err(ScheduleError::ArityMismatch)` - `values.len() != boundaries.len() + 1`
    /// * `Err(ScheduleError::InvalidBoundaries)` - Boundaries do not partition `[0, n_steps)`
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_core::schedule::ScheduleGenerator;
    ///
    /// let generator = ScheduleGenerator::<f64>::new(6).unwrap();
    /// let sequence = generator
    ///     .piecewise_constant_decay(&[2, 4], &[1.0, 2.0, 3.0])
    ///     .unwrap();
    /// assert_eq!(sequence, vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
    ///
    /// assert!(generator.piecewise_constant_decay(&[2, 4], &[1.0, 2.0]).is_err());
    /// ```
    pub fn piecewise_constant_decay(
        &self,
        boundaries: &[usize],
        values: &[T],
    ) -> Result<Vec<T>, ScheduleError> {
        check_arity(boundaries, values.len())?;
        check_boundaries(boundaries, self.n_steps())?;

        let mut sequence = vec![T::zero(); self.n_steps()];
        let edges = std::iter::once(0)
            .chain(boundaries.iter().copied())
            .chain(std::iter::once(self.n_steps()));
        let starts = edges.clone();

        for ((start, end), &value) in starts.zip(edges.skip(1)).zip(values) {
            sequence[start..end].fill(value);
        }

        Ok(sequence)
    }

    /// Constant schedule: `value` at every step.
    pub fn constant(&self, value: T) -> Vec<T> {
        vec![value; self.n_steps()]
    }
}

/// Require exactly one value per piece.
pub(crate) fn check_arity(boundaries: &[usize], values: usize) -> Result<(), ScheduleError> {
    if values != boundaries.len() + 1 {
        return Err(ScheduleError::arity_mismatch(boundaries.len(), values));
    }
    Ok(())
}

/// Require boundaries to be non-decreasing and no larger than `limit`.
pub(crate) fn check_boundaries(boundaries: &[usize], limit: usize) -> Result<(), ScheduleError> {
    let mut previous = 0;
    for (index, &boundary) in boundaries.iter().enumerate() {
        if boundary < previous || boundary > limit {
            return Err(ScheduleError::InvalidBoundaries {
                index,
                boundary,
                n_steps: limit,
            });
        }
        previous = boundary;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(n: usize) -> ScheduleGenerator<f64> {
        ScheduleGenerator::new(n).unwrap()
    }

    #[test]
    fn test_piecewise_three_pieces() {
        let sequence = generator(6)
            .piecewise_constant_decay(&[2, 4], &[1.0, 2.0, 3.0])
            .unwrap();
        assert_eq!(sequence, vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn test_piecewise_arity_mismatch() {
        let result = generator(6).piecewise_constant_decay(&[2, 4], &[1.0, 2.0]);
        assert_eq!(
            result,
            Err(ScheduleError::ArityMismatch {
                boundaries: 2,
                values: 2
            })
        );
    }

    #[test]
    fn test_piecewise_too_many_values() {
        let result = generator(6).piecewise_constant_decay(&[3], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(ScheduleError::ArityMismatch { .. })));
    }

    #[test]
    fn test_piecewise_no_boundaries() {
        let sequence = generator(4).piecewise_constant_decay(&[], &[0.5]).unwrap();
        assert_eq!(sequence, vec![0.5; 4]);
    }

    #[test]
    fn test_piecewise_empty_pieces() {
        // Repeated boundaries and a boundary at n_steps produce empty pieces
        let sequence = generator(4)
            .piecewise_constant_decay(&[0, 2, 2, 4], &[9.0, 1.0, 8.0, 2.0, 7.0])
            .unwrap();
        assert_eq!(sequence, vec![1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_piecewise_decreasing_boundaries() {
        let result = generator(6).piecewise_constant_decay(&[4, 2], &[1.0, 2.0, 3.0]);
        assert_eq!(
            result,
            Err(ScheduleError::InvalidBoundaries {
                index: 1,
                boundary: 2,
                n_steps: 6
            })
        );
    }

    #[test]
    fn test_piecewise_boundary_beyond_end() {
        let result = generator(6).piecewise_constant_decay(&[7], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(ScheduleError::InvalidBoundaries { boundary: 7, .. })
        ));
    }

    #[test]
    fn test_constant() {
        for n in [1, 3, 100] {
            let sequence = generator(n).constant(0.01);
            assert_eq!(sequence.len(), n);
            assert!(sequence.iter().all(|&v| v == 0.01));
        }
    }

    #[test]
    fn test_check_boundaries_accepts_limit() {
        assert!(check_boundaries(&[1, 5, 5], 5).is_ok());
        assert!(check_boundaries(&[6], 5).is_err());
    }
}
