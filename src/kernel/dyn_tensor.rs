use crate::element::Element;
use crate::error::{Result, StackError};
use crate::tensor::dtype::{DType, DTypeVisitor};
use crate::tensor::shape::num_elements;
use crate::tensor::slice_layout::SliceLayout;
use crate::tensor::tensor::Tensor;

/// Storage of an engine tensor, one variant per supported element type.
#[derive(Debug, Clone, PartialEq)]
pub enum TensorData {
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
}

struct Zeros(usize);

impl DTypeVisitor for Zeros {
    type Output = TensorData;

    fn visit<T: Element>(self) -> TensorData {
        T::wrap(vec![T::default(); self.0])
    }
}

struct Len<'a>(&'a TensorData);

impl<'a> DTypeVisitor for Len<'a> {
    type Output = usize;

    fn visit<T: Element>(self) -> usize {
        T::unwrap_ref(self.0).map_or(0, <[T]>::len)
    }
}

impl TensorData {
    pub fn zeros(dtype: DType, len: usize) -> Self {
        dtype.visit(Zeros(len))
    }

    pub fn dtype(&self) -> DType {
        match self {
            TensorData::Float32(_) => DType::Float32,
            TensorData::Float64(_) => DType::Float64,
            TensorData::Int8(_) => DType::Int8,
            TensorData::Int16(_) => DType::Int16,
            TensorData::Int32(_) => DType::Int32,
            TensorData::Int64(_) => DType::Int64,
            TensorData::UInt8(_) => DType::UInt8,
            TensorData::UInt16(_) => DType::UInt16,
            TensorData::UInt32(_) => DType::UInt32,
            TensorData::UInt64(_) => DType::UInt64,
        }
    }

    pub fn len(&self) -> usize {
        self.dtype().visit(Len(self))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tensor as handed over by the host engine: the element type is only
/// known at runtime through its `DType` tag.
///
/// The shape is fixed by the engine (`resize`), the content is filled
/// by the caller (`populate`) and read back through typed accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct DynTensor {
    data: TensorData,
    shape: Vec<usize>,
}

impl DynTensor {
    pub fn new<T: Element>(data: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        let expected = num_elements(&shape);
        if data.len() != expected {
            return Err(StackError::DataLength {
                shape,
                expected,
                actual: data.len(),
            });
        }

        Ok(DynTensor {
            data: T::wrap(data),
            shape,
        })
    }

    pub fn zeros(dtype: DType, shape: Vec<usize>) -> Self {
        DynTensor {
            data: TensorData::zeros(dtype, num_elements(&shape)),
            shape,
        }
    }

    /// Output slot whose shape is not known yet, to be sized by a kernel's `prepare`.
    pub fn unallocated(dtype: DType) -> Self {
        Self::zeros(dtype, vec![0])
    }

    #[inline]
    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn num_elements(&self) -> usize {
        num_elements(&self.shape)
    }

    #[inline]
    pub fn data(&self) -> &TensorData {
        &self.data
    }

    /// Reallocates zeroed storage for `shape`, keeping the element type.
    pub fn resize(&mut self, shape: Vec<usize>) {
        if shape == self.shape {
            return;
        }
        self.data = TensorData::zeros(self.dtype(), num_elements(&shape));
        self.shape = shape;
    }

    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::unwrap_ref(&self.data)
    }

    pub fn as_mut_slice<T: Element>(&mut self) -> Option<&mut [T]> {
        T::unwrap_mut(&mut self.data)
    }

    pub fn to_vec<T: Element>(&self) -> Option<Vec<T>> {
        self.as_slice().map(<[T]>::to_vec)
    }

    /// Copies `values` into the tensor, which must have type `T` and as many elements.
    pub fn populate<T: Element>(&mut self, values: &[T]) -> Result<()> {
        let dtype = self.dtype();
        let shape = self.shape.clone();
        let data = self.as_mut_slice::<T>().ok_or(StackError::TypeMismatch {
            index: 0,
            expected: dtype,
            actual: T::DTYPE,
        })?;
        if data.len() != values.len() {
            return Err(StackError::DataLength {
                shape,
                expected: data.len(),
                actual: values.len(),
            });
        }
        data.copy_from_slice(values);

        Ok(())
    }

    /// Typed zero-copy view, `None` if the element type is not `T`.
    pub fn view<T: Element>(&self) -> Option<Tensor<T, SliceLayout<'_, T>>> {
        let data = self.as_slice::<T>()?;
        Tensor::view_slice(data, self.shape.clone()).ok()
    }
}
