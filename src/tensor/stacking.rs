//! `stacking` joins N tensors of identical shape along a new axis.
//!
//! Seen flat, every input is made of `outer` blocks of `inner`
//! elements, where `outer` is the product of the dimensions before
//! the stacking axis and `inner` the product of the remaining ones.
//! The output is made of `outer` groups, each holding one block of
//! every input in input order: block `g * N + i` of the output is
//! block `g` of input `i`.
//!
//! The copy never looks at the values, so the same generic kernel
//! serves every element type.

use super::heap_layout::HeapLayout;
use super::layout::Layout;
use super::shape::{insert_axis, normalize_axis, num_elements, split_at_axis};
use super::slice_layout::SliceLayout;
use super::tensor::Tensor;
use crate::error::{Result, StackError};
use rayon::prelude::*;
use typenum::Unsigned;

/// Validated geometry of one stacking operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackPlan {
    axis: usize,
    values_count: usize,
    outer: usize,
    inner: usize,
    input_shape: Vec<usize>,
    output_shape: Vec<usize>,
}

impl StackPlan {
    /// `axis` may be negative, in which case `rank + 1` is added to it.
    pub fn new(input_shape: &[usize], axis: isize, values_count: usize) -> Result<Self> {
        if values_count < 1 {
            return Err(StackError::InvalidInputCount { count: values_count });
        }
        let axis = normalize_axis(axis, input_shape.len() + 1)?;
        let (outer, inner) = split_at_axis(input_shape, axis);

        Ok(StackPlan {
            axis,
            values_count,
            outer,
            inner,
            input_shape: input_shape.to_vec(),
            output_shape: insert_axis(input_shape, axis, values_count),
        })
    }

    /// Checks that every input shape equals the planned input shape.
    pub fn check_shapes<'a, I>(&self, shapes: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a [usize]>,
    {
        for (index, shape) in shapes.into_iter().enumerate() {
            if shape != self.input_shape.as_slice() {
                return Err(StackError::ShapeMismatch {
                    index,
                    expected: self.input_shape.clone(),
                    actual: shape.to_vec(),
                });
            }
        }

        Ok(())
    }

    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    #[inline]
    pub fn values_count(&self) -> usize {
        self.values_count
    }

    #[inline]
    pub fn outer(&self) -> usize {
        self.outer
    }

    #[inline]
    pub fn inner(&self) -> usize {
        self.inner
    }

    #[inline]
    pub fn input_shape(&self) -> &[usize] {
        &self.input_shape
    }

    #[inline]
    pub fn output_shape(&self) -> &[usize] {
        &self.output_shape
    }

    /// Elements in one output group, i.e. one block of every input.
    #[inline]
    pub fn group_len(&self) -> usize {
        self.values_count * self.inner
    }

    #[inline]
    pub fn output_len(&self) -> usize {
        num_elements(&self.output_shape)
    }
}

/// Interleaves contiguous inputs into `out`, one output group per rayon task.
///
/// `inputs` must hold `plan.values_count()` slices of `plan.outer() * plan.inner()`
/// elements and `out` must hold `plan.output_len()` elements.
pub(crate) fn interleave_into<T>(inputs: &[&[T]], out: &mut [T], plan: &StackPlan)
where
    T: Copy + Send + Sync,
{
    if out.is_empty() {
        return;
    }
    let inner = plan.inner();

    out.par_chunks_mut(plan.group_len())
        .enumerate()
        .for_each(|(g, group)| {
            for (block, input) in group.chunks_mut(inner).zip(inputs.iter()) {
                block.copy_from_slice(&input[g * inner..(g + 1) * inner]);
            }
        });
}

/// Interleaves inputs of any layout by walking their contiguous chunks.
///
/// The chunk size is the smallest contiguous run among the inputs,
/// capped by `inner`. Both are products of trailing dimensions of
/// the common input shape, so the chunk size divides `inner`.
fn interleave_chunks<T, L>(inputs: &[&Tensor<T, L>], out: &mut [T], plan: &StackPlan)
where
    T: Copy + 'static,
    L: for<'a> Layout<'a, T>,
{
    if out.is_empty() {
        return;
    }
    let inner = plan.inner();
    let chunk_size = inputs
        .iter()
        .map(|input| input.opt_chunk_size())
        .fold(inner, usize::min);

    let mut iters: Vec<_> = inputs.iter().map(|input| input.chunks(chunk_size)).collect();
    for group in out.chunks_mut(plan.group_len()) {
        for (block, iter) in group.chunks_mut(inner).zip(iters.iter_mut()) {
            for (piece, chunk) in block.chunks_mut(chunk_size).zip(iter.by_ref()) {
                piece.copy_from_slice(chunk);
            }
        }
    }
}

impl<T, L> Tensor<T, L>
where
    T: Copy + Default + Send + Sync + 'static,
    L: for<'a> Layout<'a, T>,
{
    /// Stacks `inputs` along a new axis inserted at `axis`.
    ///
    /// `axis` lies in `[-(rank + 1), rank]`, negative values count from
    /// the end. All inputs must share the same shape. Inputs may be
    /// strided views, contiguous ones are copied in parallel.
    ///
    /// ```
    /// use tenstack::prelude::*;
    ///
    /// let a: HeapTensor<f32> = Tensor::from_vec(vec![1.0, 4.0], vec![2]).unwrap();
    /// let b: HeapTensor<f32> = Tensor::from_vec(vec![2.0, 5.0], vec![2]).unwrap();
    /// let c = Tensor::stack(&[&a, &b], 1).unwrap();
    ///
    /// assert_eq!(c.shape(), vec![2, 2]);
    /// assert_eq!(c.to_vec(), vec![1.0, 2.0, 4.0, 5.0]);
    /// ```
    pub fn stack(inputs: &[&Self], axis: isize) -> Result<Tensor<T, HeapLayout<T>>> {
        let first = match inputs.first() {
            Some(first) => first,
            None => return Err(StackError::InvalidInputCount { count: 0 }),
        };
        let plan = StackPlan::new(&first.shape(), axis, inputs.len())?;
        let shapes: Vec<Vec<usize>> = inputs.iter().map(|input| input.shape()).collect();
        plan.check_shapes(shapes.iter().map(Vec::as_slice))?;

        let mut out: Tensor<T, HeapLayout<T>> = Tensor::alloc(plan.output_shape().to_vec());
        let contiguous: Option<Vec<&[T]>> = inputs.iter().map(|input| input.contiguous()).collect();
        match contiguous {
            Some(slices) => {
                log::trace!("stacking {} contiguous inputs into {:?}", slices.len(), plan.output_shape());
                interleave_into(&slices, &mut out, &plan);
            }
            None => {
                log::trace!("stacking {} strided inputs into {:?}", inputs.len(), plan.output_shape());
                interleave_chunks(inputs, &mut out, &plan);
            }
        }

        Ok(out)
    }

    /// `stack` with the axis given as a type-level unsigned integer.
    pub fn stack_at<Ax>(inputs: &[&Self]) -> Result<Tensor<T, HeapLayout<T>>>
    where
        Ax: Unsigned,
    {
        Self::stack(inputs, Ax::USIZE as isize)
    }

    /// Splits the tensor into views along `axis`, the inverse of `stack`.
    ///
    /// `axis` lies in `[-rank, rank - 1]`.
    pub fn unstack(&self, axis: isize) -> Result<Vec<Tensor<T, SliceLayout<'_, T>>>> {
        let axis = normalize_axis(axis, self.rank())?;
        let dim = self.shape()[axis];

        (0..dim).map(|index| self.select(axis as isize, index)).collect()
    }
}
