#[cfg(test)]
mod tests {
    use super::prelude::*;
    use typenum::{U0, U1, U2};

    fn range_f32(from: usize, to: usize) -> Vec<f32> {
        (from..to).map(|x| x as f32).collect()
    }

    #[test]
    fn stack_vectors_axis_0() {
        let a: HeapTensor<f32> = Tensor::from_vec(vec![1.0, 4.0], vec![2]).unwrap();
        let b: HeapTensor<f32> = Tensor::from_vec(vec![2.0, 5.0], vec![2]).unwrap();
        let c: HeapTensor<f32> = Tensor::from_vec(vec![3.0, 6.0], vec![2]).unwrap();

        let d = Tensor::stack(&[&a, &b, &c], 0).unwrap();
        assert_eq!(d.shape(), vec![3, 2]);
        assert_eq!(d.to_vec(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn stack_vectors_axis_1() {
        let a: HeapTensor<f32> = Tensor::from_vec(vec![1.0, 4.0], vec![2]).unwrap();
        let b: HeapTensor<f32> = Tensor::from_vec(vec![2.0, 5.0], vec![2]).unwrap();
        let c: HeapTensor<f32> = Tensor::from_vec(vec![3.0, 6.0], vec![2]).unwrap();

        let d = Tensor::stack(&[&a, &b, &c], 1).unwrap();
        assert_eq!(d.shape(), vec![2, 3]);
        assert_eq!(d.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let e = Tensor::stack(&[&a, &b, &c], -1).unwrap();
        assert_eq!(d, e);
    }

    #[test]
    fn stack_matrices() {
        let a: HeapTensor<i32> = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], vec![2, 3]).unwrap();
        let b: HeapTensor<i32> = Tensor::from_vec(vec![7, 8, 9, 10, 11, 12], vec![2, 3]).unwrap();

        let c = Tensor::stack(&[&a, &b], 1).unwrap();
        assert_eq!(c.shape(), vec![2, 2, 3]);
        assert_eq!(c.to_vec(), vec![1, 2, 3, 7, 8, 9, 4, 5, 6, 10, 11, 12]);

        let d = Tensor::stack(&[&a, &b], 2).unwrap();
        assert_eq!(d.shape(), vec![2, 3, 2]);
        assert_eq!(d.to_vec(), vec![1, 7, 2, 8, 3, 9, 4, 10, 5, 11, 6, 12]);

        let e = Tensor::stack(&[&a, &b], -3).unwrap();
        assert_eq!(e.shape(), vec![2, 2, 3]);
        assert_eq!(e.to_vec(), (1..=12).collect::<Vec<i32>>());
    }

    #[test]
    fn stack_four_dimensions() {
        let a: HeapTensor<f32> = Tensor::from_vec(range_f32(1, 17), vec![2, 2, 2, 2]).unwrap();
        let b: HeapTensor<f32> = Tensor::from_vec(range_f32(17, 33), vec![2, 2, 2, 2]).unwrap();

        let c = Tensor::stack(&[&a, &b], 1).unwrap();
        assert_eq!(c.shape(), vec![2, 2, 2, 2, 2]);

        let mut expected = range_f32(1, 9);
        expected.extend(range_f32(17, 25));
        expected.extend(range_f32(9, 17));
        expected.extend(range_f32(25, 33));
        assert_eq!(c.to_vec(), expected);
    }

    #[test]
    fn stack_at() {
        let a: HeapTensor<u8> = Tensor::from_vec(vec![1, 4], vec![2]).unwrap();
        let b: HeapTensor<u8> = Tensor::from_vec(vec![2, 5], vec![2]).unwrap();

        assert_eq!(Tensor::stack_at::<U0>(&[&a, &b]).unwrap().to_vec(), vec![1, 4, 2, 5]);
        assert_eq!(Tensor::stack_at::<U1>(&[&a, &b]).unwrap().to_vec(), vec![1, 2, 4, 5]);
        assert!(Tensor::stack_at::<U2>(&[&a, &b]).is_err());
    }

    #[test]
    fn stack_int64_wide_values() {
        let a: HeapTensor<i64> = Tensor::from_vec(vec![1 << 33, 5], vec![2]).unwrap();
        let b: HeapTensor<i64> = Tensor::from_vec(vec![-(1 << 34), -7], vec![2]).unwrap();

        let c = Tensor::stack(&[&a, &b], 1).unwrap();
        assert_eq!(c.into_vec(), vec![1 << 33, -(1 << 34), 5, -7]);
    }

    #[test]
    fn stack_single_input() {
        let a: HeapTensor<f64> = Tensor::from_vec(vec![1.0, 2.0, 3.0], vec![3]).unwrap();

        let b = Tensor::stack(&[&a], 1).unwrap();
        assert_eq!(b.shape(), vec![3, 1]);
        assert_eq!(b.to_vec(), a.to_vec());
    }

    #[test]
    fn stack_scalars() {
        let a: HeapTensor<i16> = Tensor::fill(3, vec![]);
        let b: HeapTensor<i16> = Tensor::fill(-1, vec![]);

        let c = Tensor::stack(&[&a, &b, &a], 0).unwrap();
        assert_eq!(c.shape(), vec![3]);
        assert_eq!(c.to_vec(), vec![3, -1, 3]);
        assert!(Tensor::stack(&[&a, &b], 1).is_err());
    }

    #[test]
    fn stack_zero_size() {
        let a: HeapTensor<u32> = Tensor::alloc(vec![2, 0, 3]);

        let b = Tensor::stack(&[&a, &a], 1).unwrap();
        assert_eq!(b.shape(), vec![2, 2, 0, 3]);
        assert_eq!(b.num_elements(), 0);

        let c = Tensor::stack(&[&a, &a], 3).unwrap();
        assert_eq!(c.shape(), vec![2, 0, 3, 2]);
        assert!(c.to_vec().is_empty());
    }

    #[test]
    fn stack_strided_views() {
        let a: HeapTensor<i32> = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], vec![2, 3]).unwrap();
        let columns = a.unstack(1).unwrap();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[1].to_vec(), vec![2, 5]);
        assert!(columns[1].contiguous().is_none());

        let views: Vec<&SliceTensor<i32>> = columns.iter().collect();
        let b = Tensor::stack(&views, 0).unwrap();
        assert_eq!(b.shape(), vec![3, 2]);
        assert_eq!(b.to_vec(), vec![1, 4, 2, 5, 3, 6]);

        let c = Tensor::stack(&views, 1).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn stack_row_blocks() {
        let a: HeapTensor<i32> = Tensor::from_vec((1..=12).collect(), vec![2, 2, 3]).unwrap();
        let blocks = a.unstack(1).unwrap();
        assert_eq!(blocks[0].to_vec(), vec![1, 2, 3, 7, 8, 9]);
        assert_eq!(blocks[0].opt_chunk_size(), 3);

        let views: Vec<&SliceTensor<i32>> = blocks.iter().collect();
        let b = Tensor::stack(&views, 1).unwrap();
        assert_eq!(b, a);
    }

    #[test]
    fn unstack_inverts_stack() {
        let a: HeapTensor<f32> = Tensor::from_vec(range_f32(0, 6), vec![2, 3]).unwrap();
        let b: HeapTensor<f32> = Tensor::from_vec(range_f32(6, 12), vec![2, 3]).unwrap();

        for axis in -3..=2 {
            let c = Tensor::stack(&[&a, &b], axis).unwrap();
            let parts = c.unstack(axis).unwrap();
            assert_eq!(parts.len(), 2);
            assert_eq!(parts[0].to_contiguous(), a);
            assert_eq!(parts[1].to_contiguous(), b);
        }
    }

    #[test]
    fn select() {
        let a: HeapTensor<i32> = Tensor::from_vec((1..=12).collect(), vec![2, 2, 3]).unwrap();

        let b = a.select(2, 1).unwrap();
        assert_eq!(b.shape(), vec![2, 2]);
        assert_eq!(b.strides(), vec![6, 3]);
        assert_eq!(b.to_vec(), vec![2, 5, 8, 11]);

        let c = b.select(-1, 0).unwrap();
        assert_eq!(c.to_vec(), vec![2, 8]);

        assert_eq!(
            a.select(0, 2).unwrap_err(),
            StackError::IndexOutOfRange { axis: 0, index: 2, dim: 2 }
        );
    }

    #[test]
    fn views_compare_by_content() {
        let a: HeapTensor<i32> = Tensor::from_vec(vec![1, 2, 1, 2], vec![2, 2]).unwrap();
        let rows = a.unstack(0).unwrap();
        assert_eq!(rows[0], rows[1]);
        assert_eq!(rows[0], a.as_view().select(0, 1).unwrap());

        let columns = a.unstack(1).unwrap();
        assert_ne!(columns[0], columns[1]);
    }

    #[test]
    fn errors() {
        let a: HeapTensor<f32> = Tensor::from_vec(vec![1.0, 2.0], vec![2]).unwrap();
        let b: HeapTensor<f32> = Tensor::from_vec(vec![1.0, 2.0, 3.0], vec![3]).unwrap();

        let empty: [&HeapTensor<f32>; 0] = [];
        assert_eq!(
            Tensor::stack(&empty, 0).unwrap_err(),
            StackError::InvalidInputCount { count: 0 }
        );
        assert_eq!(
            Tensor::stack(&[&a, &b], 0).unwrap_err(),
            StackError::ShapeMismatch {
                index: 1,
                expected: vec![2],
                actual: vec![3]
            }
        );
        assert_eq!(
            Tensor::stack(&[&a, &a], 2).unwrap_err(),
            StackError::InvalidAxis { axis: 2, min: -2, max: 1 }
        );
        assert_eq!(
            Tensor::stack(&[&a, &a], -3).unwrap_err(),
            StackError::InvalidAxis { axis: -3, min: -2, max: 1 }
        );
        assert_eq!(
            HeapTensor::from_vec(vec![1.0_f32; 5], vec![2, 3]).unwrap_err(),
            StackError::DataLength {
                shape: vec![2, 3],
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn error_messages() {
        let err = StackError::InvalidAxis { axis: 3, min: -3, max: 2 };
        assert_eq!(err.to_string(), "axis 3 is outside of [-3, 2]");

        let err = StackError::TypeMismatch {
            index: 1,
            expected: DType::Float32,
            actual: DType::Int8,
        };
        assert_eq!(err.to_string(), "input 1 has element type int8, expected float32");
    }
}

pub mod element;
pub mod error;
pub mod kernel;
pub mod prelude;
pub mod tensor;


pub use error::{Result, StackError};
