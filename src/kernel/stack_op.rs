use super::dyn_tensor::DynTensor;
use super::options::StackOptions;
use crate::element::Element;
use crate::error::{Result, StackError};
use crate::tensor::dtype::DTypeVisitor;
use crate::tensor::stacking::{interleave_into, StackPlan};

/// Engine-facing stack kernel.
///
/// `prepare` validates the inputs and sizes the output, `eval` copies.
/// Both run every check again, so a failed call never writes into
/// the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackOp {
    options: StackOptions,
}

impl StackOp {
    pub fn new(options: StackOptions) -> Self {
        StackOp { options }
    }

    #[inline]
    pub fn options(&self) -> &StackOptions {
        &self.options
    }

    /// Validates `inputs` against the options: input count first,
    /// then element types, then shapes, then the axis.
    pub fn plan(&self, inputs: &[&DynTensor]) -> Result<StackPlan> {
        let values_count = self.options.values_count;
        if values_count < 1 {
            return Err(StackError::InvalidInputCount { count: values_count });
        }
        if inputs.len() != values_count {
            return Err(StackError::InputCountMismatch {
                expected: values_count,
                actual: inputs.len(),
            });
        }

        let first = inputs[0];
        for (index, input) in inputs.iter().enumerate() {
            if input.dtype() != first.dtype() {
                return Err(StackError::TypeMismatch {
                    index,
                    expected: first.dtype(),
                    actual: input.dtype(),
                });
            }
        }
        for (index, input) in inputs.iter().enumerate() {
            if input.shape() != first.shape() {
                return Err(StackError::ShapeMismatch {
                    index,
                    expected: first.shape().to_vec(),
                    actual: input.shape().to_vec(),
                });
            }
        }

        StackPlan::new(first.shape(), self.options.axis as isize, values_count)
    }

    /// Validates the inputs and resizes `output` to the stacked shape.
    pub fn prepare(&self, inputs: &[&DynTensor], output: &mut DynTensor) -> Result<StackPlan> {
        let plan = self.plan(inputs)?;
        let dtype = inputs[0].dtype();
        if output.dtype() != dtype {
            return Err(StackError::OutputTypeMismatch {
                expected: dtype,
                actual: output.dtype(),
            });
        }

        log::debug!(
            "stack: {} x {} {:?} along axis {} -> {:?}",
            plan.values_count(),
            dtype,
            plan.input_shape(),
            plan.axis(),
            plan.output_shape()
        );
        output.resize(plan.output_shape().to_vec());

        Ok(plan)
    }

    /// Copies the inputs into `output`, which must already have the stacked shape.
    pub fn eval(&self, inputs: &[&DynTensor], output: &mut DynTensor) -> Result<()> {
        let plan = self.plan(inputs)?;
        let dtype = inputs[0].dtype();
        if output.dtype() != dtype {
            return Err(StackError::OutputTypeMismatch {
                expected: dtype,
                actual: output.dtype(),
            });
        }
        if output.shape() != plan.output_shape() {
            return Err(StackError::OutputShapeMismatch {
                expected: plan.output_shape().to_vec(),
                actual: output.shape().to_vec(),
            });
        }

        log::trace!("stack: copying {} {} elements", plan.output_len(), dtype);
        dtype.visit(CopyStacked {
            inputs,
            output,
            plan: &plan,
        });

        Ok(())
    }

    pub fn invoke(&self, inputs: &[&DynTensor], output: &mut DynTensor) -> Result<()> {
        self.prepare(inputs, output)?;
        self.eval(inputs, output)
    }
}

struct CopyStacked<'a, 'b> {
    inputs: &'a [&'a DynTensor],
    output: &'b mut DynTensor,
    plan: &'a StackPlan,
}

impl<'a, 'b> DTypeVisitor for CopyStacked<'a, 'b> {
    type Output = ();

    fn visit<T: Element>(self) {
        let slices: Option<Vec<&[T]>> = self.inputs.iter().map(|input| input.as_slice::<T>()).collect();
        if let (Some(slices), Some(out)) = (slices, self.output.as_mut_slice::<T>()) {
            interleave_into(&slices, out, self.plan);
        }
    }
}
