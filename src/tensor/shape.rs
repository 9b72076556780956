//! `shape` contains the runtime shape "arithmetics" shared by layouts
//! and by the stacking kernels.
//!
//! Shapes are plain `usize` slices in row-major order. Strides are
//! counted in elements, not bytes.

use crate::error::{Result, StackError};

/// Turns a shape into its intrinsic (row-major, contiguous) strides.
pub fn intrinsic_strides_in_place(mut shape: Vec<usize>) -> Vec<usize> {
    let mut product = 1;
    for stride in shape.iter_mut().rev() {
        let tmp = product;
        product *= *stride;
        *stride = tmp;
    }

    shape
}

#[inline]
pub fn num_elements(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Resolves a possibly negative `axis` among `positions` slots.
///
/// Valid axes lie in `[-positions, positions - 1]`; negative values
/// count from the end.
pub fn normalize_axis(axis: isize, positions: usize) -> Result<usize> {
    let positions = positions as isize;
    if axis < -positions || axis >= positions {
        return Err(StackError::InvalidAxis {
            axis,
            min: -positions,
            max: positions - 1,
        });
    }

    let axis = if axis < 0 { axis + positions } else { axis };
    Ok(axis as usize)
}

/// Inserts a dimension of size `dim` before position `axis`.
pub fn insert_axis(shape: &[usize], axis: usize, dim: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(shape.len() + 1);
    out.extend_from_slice(&shape[..axis]);
    out.push(dim);
    out.extend_from_slice(&shape[axis..]);

    out
}

/// Drops the entry at position `axis`, works on shapes and strides alike.
pub fn remove_axis(values: &[usize], axis: usize) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != axis)
        .map(|(_, x)| *x)
        .collect()
}

/// Splits a shape into the number of `outer` blocks before `axis`
/// and the `inner` block length from `axis` on.
pub fn split_at_axis(shape: &[usize], axis: usize) -> (usize, usize) {
    (num_elements(&shape[..axis]), num_elements(&shape[axis..]))
}

/// Length of the largest run of elements that are contiguous in storage,
/// i.e. the product of the trailing dimensions whose strides are intrinsic.
///
/// Axes of size one never break contiguity. The result is always a
/// product of trailing dimensions of `shape`.
pub fn contiguous_chunk_size(shape: &[usize], strides: &[usize]) -> usize {
    let mut expected = 1;
    for (dim, stride) in shape.iter().zip(strides).rev() {
        if *dim == 1 {
            continue;
        }
        if *stride != expected {
            return expected;
        }
        expected *= dim;
    }

    expected
}
