//! `kernel` is the side of the crate a host inference engine talks to.
//!
//! Engine tensors carry their element type at runtime (`DynTensor`),
//! operator parameters come from the model description (`StackOptions`)
//! and `StackOp` follows the usual prepare / eval kernel life cycle.

pub mod dyn_tensor;
pub mod options;
pub mod stack_op;

pub use dyn_tensor::{DynTensor, TensorData};
pub use options::StackOptions;
pub use stack_op::StackOp;
