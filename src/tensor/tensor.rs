use super::heap_layout::HeapLayout;
use super::layout::{Alloc, DynamicFill, Layout};
use super::shape::{
    contiguous_chunk_size, intrinsic_strides_in_place, normalize_axis, num_elements, remove_axis,
};
use super::slice_layout::SliceLayout;
use crate::error::{Result, StackError};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// The central struct of the `tensor` module.
///
/// `Tensor` is a generic structure that provides a unique interface
/// for all layouts. It is parametrized by the following generics:
/// * T the data scalar type,
/// * L the layout.
///
/// L represents the Layout that internally stores the tensor's data:
/// * `HeapLayout` owns its data, every allocating operation returns it,
/// * `SliceLayout` borrows data and is used for views such as
///   the result of `select` or `unstack`.
///
/// The tensor dereferences to its layout, so shape information and
/// chunk iteration are available directly on the tensor.
///
/// For ease of use, aliases for common cases are defined in the `prelude` of the `tensor` module.
#[derive(Debug, PartialEq, Clone)]
pub struct Tensor<T, L> {
    layout: L,
    _phantoms: PhantomData<T>,
}

impl<T, L> Tensor<T, L> {
    pub(crate) fn from_layout(layout: L) -> Self {
        Tensor {
            layout,
            _phantoms: PhantomData,
        }
    }

    pub fn alloc(shape: Vec<usize>) -> Self
    where
        L: Alloc,
    {
        Self::from_layout(L::alloc(shape))
    }

    pub fn fill(value: T, shape: Vec<usize>) -> Self
    where
        L: DynamicFill<T>,
    {
        Self::from_layout(L::fill(value, shape))
    }
}

impl<T> Tensor<T, HeapLayout<T>> {
    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        Ok(Self::from_layout(HeapLayout::from_vec(data, shape)?))
    }

    pub fn from_slice(data: &[T], shape: Vec<usize>) -> Result<Self>
    where
        T: Clone,
    {
        Self::from_vec(data.to_vec(), shape)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.layout.into_vec()
    }
}

impl<'s, T> Tensor<T, SliceLayout<'s, T>> {
    /// Contiguous row-major view on a borrowed slice.
    pub fn view_slice(data: &'s [T], shape: Vec<usize>) -> Result<Self> {
        let expected = num_elements(&shape);
        if data.len() != expected {
            return Err(StackError::DataLength {
                shape,
                expected,
                actual: data.len(),
            });
        }
        let strides = intrinsic_strides_in_place(shape.clone());

        Ok(Self::from_layout(SliceLayout::from_slice_unchecked(
            data, 0, shape, strides, expected, expected,
        )))
    }
}

impl<T, L> Tensor<T, L>
where
    T: 'static,
    L: for<'a> Layout<'a, T>,
{
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape().len()
    }

    pub fn as_view(&self) -> Tensor<T, SliceLayout<'_, T>> {
        let num_elements = self.num_elements();
        Tensor::from_layout(self.as_view_unchecked(
            self.offset(),
            self.shape(),
            self.strides(),
            num_elements,
            self.opt_chunk_size(),
        ))
    }

    /// Zero-copy view of the slice at `index` along `axis`.
    /// The axis is removed from the resulting shape.
    pub fn select(&self, axis: isize, index: usize) -> Result<Tensor<T, SliceLayout<'_, T>>> {
        let shape = self.shape();
        let axis = normalize_axis(axis, shape.len())?;
        let dim = shape[axis];
        if index >= dim {
            return Err(StackError::IndexOutOfRange { axis, index, dim });
        }

        let strides = self.strides();
        let offset = self.offset() + index * strides[axis];
        let shape = remove_axis(&shape, axis);
        let strides = remove_axis(&strides, axis);
        let num_elements = num_elements(&shape);
        let opt_chunk_size = contiguous_chunk_size(&shape, &strides).min(num_elements.max(1));

        Ok(Tensor::from_layout(self.as_view_unchecked(
            offset,
            shape,
            strides,
            num_elements,
            opt_chunk_size,
        )))
    }

    /// Copies the elements in row-major order into a freshly allocated tensor.
    pub fn to_contiguous(&self) -> Tensor<T, HeapLayout<T>>
    where
        T: Clone,
    {
        Tensor::from_layout(HeapLayout::from_vec_unchecked(self.to_vec(), self.shape()))
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        if let Some(data) = self.contiguous() {
            return data.to_vec();
        }

        let mut out = Vec::with_capacity(self.num_elements());
        for chunk in self.chunks(self.opt_chunk_size()) {
            out.extend_from_slice(chunk);
        }

        out
    }
}

impl<T, L> Deref for Tensor<T, L> {
    type Target = L;

    fn deref(&self) -> &Self::Target {
        &self.layout
    }
}

impl<T, L> DerefMut for Tensor<T, L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.layout
    }
}
