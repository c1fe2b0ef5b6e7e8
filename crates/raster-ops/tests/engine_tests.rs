//! Tests for the axis-stacked apply engine through the public API.

use ndarray::{Array, ArrayViewD, ArrayViewMutD, IxDyn};
use raster_ops::{apply_stacked, Result};

fn identity(input: ArrayViewD<'_, f64>, mut output: ArrayViewMutD<'_, f64>) -> Result<()> {
    output.assign(&input);
    Ok(())
}

fn numbered(shape: &[usize]) -> ndarray::ArrayD<f64> {
    let mut counter = 0.0;
    Array::from_shape_fn(IxDyn(shape), |_| {
        counter += 1.0;
        counter
    })
}

// ============================================================================
// Identity round-trip: permute + reshape + inverse must be a no-op
// ============================================================================

#[test]
fn test_identity_all_rank3_pairs() {
    let array = numbered(&[2, 3, 4]);
    for first in -3isize..3 {
        for second in -3isize..3 {
            let f = first.rem_euclid(3);
            let s = second.rem_euclid(3);
            if f == s {
                continue;
            }
            let result =
                apply_stacked(array.view(), 2, Some(&[first, second]), None, identity).unwrap();
            assert_eq!(result, array, "axes ({}, {})", first, second);
        }
    }
}

#[test]
fn test_identity_rank1_op_on_rank4() {
    let array = numbered(&[2, 2, 3, 2]);
    for axis in 0..4isize {
        let result = apply_stacked(array.view(), 1, Some(&[axis]), None, identity).unwrap();
        assert_eq!(result, array, "axis {}", axis);
    }
}

#[test]
fn test_identity_full_rank_op() {
    let array = numbered(&[3, 4]);
    let result = apply_stacked(array.view(), 2, Some(&[1, 0]), None, identity).unwrap();
    assert_eq!(result, array);
}

// ============================================================================
// Stack bookkeeping
// ============================================================================

#[test]
fn test_each_slice_visited_once() {
    let array = numbered(&[3, 2, 2]);
    let mut visits = 0usize;
    apply_stacked(array.view(), 2, None, None, |slice, mut out| {
        visits += 1;
        out.assign(&slice);
        Ok(())
    })
    .unwrap();
    assert_eq!(visits, 3);
}

#[test]
fn test_non_operating_values_untouched() {
    let array = numbered(&[4, 3, 3]);
    // Scale only the middle stack slice; the others must come through
    // bit-identical.
    let mut index = 0usize;
    let result = apply_stacked(array.view(), 2, None, None, |slice, mut out| {
        let factor = if index == 1 { 2.0 } else { 1.0 };
        index += 1;
        out.assign(&slice.mapv(|v| v * factor));
        Ok(())
    })
    .unwrap();

    for i in 0..4 {
        let factor = if i == 1 { 2.0 } else { 1.0 };
        for j in 0..3 {
            for k in 0..3 {
                assert_eq!(result[[i, j, k]], array[[i, j, k]] * factor);
            }
        }
    }
}

#[test]
fn test_shape_changing_reduction() {
    let array = numbered(&[2, 3, 5]);
    // Reduce the last axis to a single mean value per (i, j).
    let result = apply_stacked(array.view(), 1, Some(&[-1]), Some(&[1]), |slice, mut out| {
        out[[0]] = slice.sum() / slice.len() as f64;
        Ok(())
    })
    .unwrap();
    assert_eq!(result.shape(), &[2, 3, 1]);
    // First run of five values is 1..=5, mean 3.
    assert!((result[[0, 0, 0]] - 3.0).abs() < 1e-12);
}

// ============================================================================
// Validation failures
// ============================================================================

#[test]
fn test_invalid_selection_rejected_before_op_runs() {
    let array = numbered(&[2, 2]);
    let mut ran = false;
    let result = apply_stacked(array.view(), 2, Some(&[0, 5]), None, |slice, mut out| {
        ran = true;
        out.assign(&slice);
        Ok(())
    });
    assert!(result.is_err());
    assert!(!ran);
}

#[test]
fn test_op_rank_larger_than_array_rank_rejected() {
    let array = numbered(&[4]);
    assert!(apply_stacked(array.view(), 2, None, None, identity).is_err());
}
