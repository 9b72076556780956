use crate::element::Element;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime tag of the scalar type stored in a tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
}

/// Generic code that has to be monomorphized for the scalar type
/// behind a runtime `DType`.
///
/// `DType::visit` performs the single `match` and calls `visit::<T>`
/// with the matching `Element` type, so kernels are written once
/// for all element types.
pub trait DTypeVisitor {
    type Output;

    fn visit<T: Element>(self) -> Self::Output;
}

impl DType {
    pub fn size_in_bytes(self) -> usize {
        match self {
            DType::Int8 | DType::UInt8 => 1,
            DType::Int16 | DType::UInt16 => 2,
            DType::Float32 | DType::Int32 | DType::UInt32 => 4,
            DType::Float64 | DType::Int64 | DType::UInt64 => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
        }
    }

    pub fn visit<V: DTypeVisitor>(self, visitor: V) -> V::Output {
        match self {
            DType::Float32 => visitor.visit::<f32>(),
            DType::Float64 => visitor.visit::<f64>(),
            DType::Int8 => visitor.visit::<i8>(),
            DType::Int16 => visitor.visit::<i16>(),
            DType::Int32 => visitor.visit::<i32>(),
            DType::Int64 => visitor.visit::<i64>(),
            DType::UInt8 => visitor.visit::<u8>(),
            DType::UInt16 => visitor.visit::<u16>(),
            DType::UInt32 => visitor.visit::<u32>(),
            DType::UInt64 => visitor.visit::<u64>(),
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Width;

    impl DTypeVisitor for Width {
        type Output = usize;

        fn visit<T: Element>(self) -> usize {
            std::mem::size_of::<T>()
        }
    }

    #[test]
    fn visit_matches_size() {
        for dtype in &[
            DType::Float32,
            DType::Float64,
            DType::Int8,
            DType::Int16,
            DType::Int32,
            DType::Int64,
            DType::UInt8,
            DType::UInt16,
            DType::UInt32,
            DType::UInt64,
        ] {
            assert_eq!(dtype.visit(Width), dtype.size_in_bytes());
        }
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&DType::UInt8).unwrap(), "\"uint8\"");
        assert_eq!(serde_json::from_str::<DType>("\"float32\"").unwrap(), DType::Float32);
        assert_eq!(DType::Int64.to_string(), "int64");
    }
}
