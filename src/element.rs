//! `element` defines the `Element` trait that ties a Rust scalar type
//! to its runtime `DType` tag and to its variant in `TensorData`.
//!
//! It is implemented for all supported numeric primitive types
//! thanks to the `expand_impl` procedural macro from the
//! `tenstack_macros` crate.

use crate::kernel::dyn_tensor::TensorData;
use crate::tensor::dtype::DType;
use std::fmt::Debug;
use tenstack_macros::expand_impl;

pub trait Element: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    const DTYPE: DType;

    fn wrap(data: Vec<Self>) -> TensorData;
    fn unwrap_ref(data: &TensorData) -> Option<&[Self]>;
    fn unwrap_mut(data: &mut TensorData) -> Option<&mut [Self]>;
}

#[expand_impl(
    Float32<T=f32>,
    Float64<T=f64>,
    Int8<T=i8>,
    Int16<T=i16>,
    Int32<T=i32>,
    Int64<T=i64>,
    UInt8<T=u8>,
    UInt16<T=u16>,
    UInt32<T=u32>,
    UInt64<T=u64>,
)]
impl<T> Element for T {
    const DTYPE: DType = DType::Placeholder;

    #[inline]
    fn wrap(data: Vec<T>) -> TensorData {
        TensorData::Placeholder(data)
    }

    #[inline]
    fn unwrap_ref(data: &TensorData) -> Option<&[T]> {
        match data {
            TensorData::Placeholder(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    #[inline]
    fn unwrap_mut(data: &mut TensorData) -> Option<&mut [T]> {
        match data {
            TensorData::Placeholder(values) => Some(values.as_mut_slice()),
            _ => None,
        }
    }
}
