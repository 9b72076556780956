use super::layout::Layout;
use rayon::prelude::*;

mod strided_chunks;
pub use strided_chunks::StridedChunks;

/// `SliceLayout` is a very flexible non-contiguous slice-backed layout.
/// It enables the creation of tensors that are views on other
/// tensors because it does not own the data. The internal slice
/// can point to any contiguous part of memory that can be borrowed,
/// e.g. the storage of a `HeapLayout` or of an engine tensor.
///
/// `SliceLayout` comes with some memory overhead to be able to keep
/// track of how borrowed data is used. It stores:
/// * the offset of the first element in the slice
/// * the shape
/// * the actual strides in the borrowed storage
/// * the number of elements
/// * the optimal chunk size (i.e. largest contiguous data pieces)
///
/// Views produced by `select` and `unstack` use this layout.
#[derive(Debug, Clone)]
pub struct SliceLayout<'a, T> {
    data: &'a [T],
    offset: usize,
    shape: Vec<usize>,
    strides: Vec<usize>,
    num_elements: usize,
    opt_chunk_size: usize,
}

impl<'a, T> SliceLayout<'a, T> {
    pub fn from_slice_unchecked(
        slice: &'a [T],
        offset: usize,
        shape: Vec<usize>,
        strides: Vec<usize>,
        num_elements: usize,
        opt_chunk_size: usize,
    ) -> Self {
        SliceLayout {
            data: slice,
            offset,
            shape,
            strides,
            num_elements,
            opt_chunk_size,
        }
    }
}

impl<'s, 'a, T> Layout<'a, T> for SliceLayout<'s, T>
where
    T: 'a,
{
    type Iter = StridedChunks<'a, T>;

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
        self.offset
    }

    #[inline]
    fn opt_chunk_size(&self) -> usize {
        self.opt_chunk_size
    }

    #[inline]
    fn num_elements(&self) -> usize {
        self.num_elements
    }

    #[inline]
    fn chunks(&'a self, chunk_size: usize) -> Self::Iter {
        StridedChunks::new(
            self.data,
            self.offset,
            &self.shape,
            &self.strides,
            self.num_elements,
            chunk_size,
        )
    }

    fn contiguous(&'a self) -> Option<&'a [T]> {
        if self.num_elements == 0 {
            return Some(&self.data[..0]);
        }
        if self.opt_chunk_size < self.num_elements {
            return None;
        }

        Some(&self.data[self.offset..self.offset + self.num_elements])
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
        SliceLayout::from_slice_unchecked(self.data, offset, shape, strides, num_elements, opt_chunk_size)
    }
}

impl<'a, T> PartialEq for SliceLayout<'a, T>
where
    T: Send + Sync + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.shape != other.shape {
            return false;
        }
        if self.num_elements == 0 {
            return true;
        }

        let chunk_size = self.opt_chunk_size.min(other.opt_chunk_size);
        for (self_chunk, other_chunk) in self.chunks(chunk_size).zip(other.chunks(chunk_size)) {
            if !self_chunk
                .par_iter()
                .zip(other_chunk.par_iter())
                .all(|(x, y)| *x == *y)
            {
                return false;
            }
        }

        true
    }
}
