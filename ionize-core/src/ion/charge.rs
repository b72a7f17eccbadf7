//! Charge-state bookkeeping
//!
//! Every ion method assumes the charge states are sorted ascending and form a
//! contiguous run of integers that skips zero. The helpers here establish and check
//! that invariant.

use crate::errors::ValidationError;
use crate::values::FloatValue;
use std::collections::HashSet;

/// Convert valences supplied as floats into integers
///
/// Fails on the first value with a fractional part (or a non-finite value).
pub fn valences_from_floats(values: &[FloatValue]) -> Result<Vec<i32>, ValidationError> {
    values
        .iter()
        .map(|&value| {
            if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
                Ok(value as i32)
            } else {
                Err(ValidationError::NonIntegerValence(value))
            }
        })
        .collect()
}

/// Check that `z` is a set of non-zero valences forming a contiguous run
///
/// The order of `z` does not matter.
pub fn validate_charge_states(z: &[i32]) -> Result<(), ValidationError> {
    let (min, max) = match (z.iter().min(), z.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Err(ValidationError::NoChargeStates),
    };

    let mut seen = HashSet::with_capacity(z.len());
    for &valence in z {
        if valence == 0 {
            return Err(ValidationError::ZeroChargeState);
        }
        if !seen.insert(valence) {
            return Err(ValidationError::DuplicateChargeState(valence));
        }
    }

    let full: HashSet<i32> = (min..=max).filter(|&valence| valence != 0).collect();
    if seen != full {
        return Err(ValidationError::MissingChargeStates { z: z.to_vec() });
    }
    Ok(())
}

/// Permutation that sorts `z` ascending
pub(crate) fn charge_order(z: &[i32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..z.len()).collect();
    order.sort_by_key(|&index| z[index]);
    order
}

/// Reorder `values` so that `values[i]` becomes `values[order[i]]`
pub(crate) fn permute<T: Clone>(values: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&index| values[index].clone()).collect()
}

/// Charge states with the neutral state inserted
pub(crate) fn with_neutral(z: &[i32]) -> Vec<i32> {
    let mut z0 = Vec::with_capacity(z.len() + 1);
    z0.extend_from_slice(z);
    z0.push(0);
    z0.sort_unstable();
    z0
}

/// Sign of a valence as a float
pub(crate) fn charge_sign(z: i32) -> FloatValue {
    if z < 0 {
        -1.0
    } else {
        1.0
    }
}
