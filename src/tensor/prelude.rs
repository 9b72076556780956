use super::heap_layout::HeapLayout;
use super::slice_layout::SliceLayout;

pub use super::layout::{Alloc, DynamicFill, Layout};
pub use super::stacking::StackPlan;
pub use super::tensor::Tensor;

pub type HeapTensor<T> = Tensor<T, HeapLayout<T>>;
pub type SliceTensor<'a, T> = Tensor<T, SliceLayout<'a, T>>;
