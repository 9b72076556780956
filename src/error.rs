//! `error` gathers everything that can go wrong while building tensors
//! or stacking them. All checks happen before any data is written so
//! a failed call leaves its output untouched.

use crate::tensor::dtype::DType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StackError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack needs at least one input, got {count}")]
    InvalidInputCount { count: usize },

    #[error("values_count is {expected} but {actual} inputs were supplied")]
    InputCountMismatch { expected: usize, actual: usize },

    #[error("input {index} has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        index: usize,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("input {index} has element type {actual}, expected {expected}")]
    TypeMismatch {
        index: usize,
        expected: DType,
        actual: DType,
    },

    #[error("axis {axis} is outside of [{min}, {max}]")]
    InvalidAxis { axis: isize, min: isize, max: isize },

    #[error("output has element type {actual}, expected {expected}")]
    OutputTypeMismatch { expected: DType, actual: DType },

    #[error("output has shape {actual:?}, expected {expected:?}")]
    OutputShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("shape {shape:?} holds {expected} elements, got {actual}")]
    DataLength {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("index {index} is out of range for axis {axis} of size {dim}")]
    IndexOutOfRange { axis: usize, index: usize, dim: usize },
}
