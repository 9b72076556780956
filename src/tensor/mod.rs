//! `tensor` is a collection of tools to interact with multidimensional arrays
//! whose shape is only known at runtime. It defines various ways to store data,
//! owned or borrowed with arbitrary strides, and the stacking operation that
//! joins tensors of identical shape along a new axis. Axes can also be given
//! at compile time thanks to type level integers from the `typenum` crate.

pub mod dtype;
pub mod heap_layout;
pub mod layout;
pub mod prelude;
pub mod shape;
pub mod slice_layout;
pub mod stacking;
pub mod tensor;
