pub use crate::element::Element;
pub use crate::error::{Result, StackError};
pub use crate::kernel::{DynTensor, StackOp, StackOptions, TensorData};
pub use crate::tensor::dtype::{DType, DTypeVisitor};
pub use crate::tensor::prelude::*;
