use super::slice_layout::SliceLayout;

/// This trait defines the basic behavior of any data layout.
///
/// It provides utility methods to access basic information
/// about the data such as its shape, strides and offset in storage.
///
/// It also provides a `chunks` method that returns an Iterator
/// of `&[T]` slices of a given length in row-major order.
/// This method is used by the copy kernels to move maximal
/// contiguous runs of data at once. `chunk_size` must divide
/// `opt_chunk_size` or be a multiple of it made of whole trailing
/// dimensions.
pub trait Layout<'a, T>
where
    T: 'a,
{
    type Iter: Iterator<Item = &'a [T]>;

    fn shape(&self) -> Vec<usize>;
    fn strides(&self) -> Vec<usize>;
    fn offset(&self) -> usize;
    fn opt_chunk_size(&self) -> usize;
    fn num_elements(&self) -> usize;
    fn chunks(&'a self, chunk_size: usize) -> Self::Iter;

    /// The elements as one slice when they are contiguous in storage.
    fn contiguous(&'a self) -> Option<&'a [T]>;

    /// Builds a view on the same storage. `offset` and `strides` are
    /// absolute, i.e. expressed in the underlying storage.
    fn as_view_unchecked(
        &'a self,
        offset: usize,
        shape: Vec<usize>,
        strides: Vec<usize>,
        num_elements: usize,
        opt_chunk_size: usize,
    ) -> SliceLayout<'a, T>;
}

pub trait Alloc {
    fn alloc(shape: Vec<usize>) -> Self;
}

pub trait DynamicFill<T> {
    fn fill(value: T, shape: Vec<usize>) -> Self;
}
