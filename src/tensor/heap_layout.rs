use super::layout::{Alloc, DynamicFill, Layout};
use super::shape::{intrinsic_strides_in_place, num_elements};
use super::slice_layout::SliceLayout;
use crate::error::{Result, StackError};
use std::ops::{Deref, DerefMut};

/// `Vec`-backed contiguous layout whose shape is only known at runtime.
/// It owns its data, which makes it the layout of every freshly
/// allocated tensor, stacking results included.
#[derive(Debug, PartialEq, Clone)]
pub struct HeapLayout<T> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T> HeapLayout<T> {
    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        let expected = num_elements(&shape);
        if data.len() != expected {
            return Err(StackError::DataLength {
                shape,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self::from_vec_unchecked(data, shape))
    }

    pub(crate) fn from_vec_unchecked(data: Vec<T>, shape: Vec<usize>) -> Self {
        HeapLayout {
            data,
            strides: intrinsic_strides_in_place(shape.clone()),
            shape,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Alloc for HeapLayout<T>
where
    T: Default + Clone,
{
    fn alloc(shape: Vec<usize>) -> Self {
        Self::fill(T::default(), shape)
    }
}

impl<T> DynamicFill<T> for HeapLayout<T>
where
    T: Clone,
{
    fn fill(value: T, shape: Vec<usize>) -> Self {
        HeapLayout {
            data: vec![value; num_elements(&shape)],
            strides: intrinsic_strides_in_place(shape.clone()),
            shape,
        }
    }
}

impl<'a, T> Layout<'a, T> for HeapLayout<T>
where
    T: 'a,
{
    type Iter = std::slice::Chunks<'a, T>;

    #[inline]
    fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    #[inline]
    fn strides(&self) -> Vec<usize> {
        self.strides.clone()
    }

    #[inline]
    fn offset(&self) -> usize {
        0
    }

    #[inline]
    fn opt_chunk_size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn num_elements(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn chunks(&'a self, chunk_size: usize) -> Self::Iter {
        self.data.chunks(chunk_size)
    }

    #[inline]
    fn contiguous(&'a self) -> Option<&'a [T]> {
        Some(self.data.as_slice())
    }

    #[inline]
    fn as_view_unchecked(
        &'a self,
        offset: usize,
        shape: Vec<usize>,
        strides: Vec<usize>,
        num_elements: usize,
        opt_chunk_size: usize,
    ) -> SliceLayout<'a, T> {
        SliceLayout::from_slice_unchecked(&self.data, offset, shape, strides, num_elements, opt_chunk_size)
    }
}

impl<T> Deref for HeapLayout<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.data.as_slice()
    }
}

impl<T> DerefMut for HeapLayout<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.data.as_mut_slice()
    }
}
