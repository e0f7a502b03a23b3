use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ty::Ty;

/// Representation kind of a single interpreter value.
///
/// Every node that produces a value is fixed to one kind for its whole
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueKind {
    Bool1,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    FloatExtended80,
    Address,
    FunctionAddress,
}

impl ValueKind {
    pub const ALL: [ValueKind; 10] = [
        ValueKind::Bool1,
        ValueKind::Int8,
        ValueKind::Int16,
        ValueKind::Int32,
        ValueKind::Int64,
        ValueKind::Float32,
        ValueKind::Float64,
        ValueKind::FloatExtended80,
        ValueKind::Address,
        ValueKind::FunctionAddress,
    ];

    /// Resolves the kind carrying values of `ty`.
    ///
    /// Aggregates, vectors, wide integers and `void` have no single-value
    /// representation; reaching this point with one of them means the parser
    /// built an instruction it should have rejected.
    pub fn from_ty(ty: &Ty) -> Result<Self> {
        let kind = match ty {
            Ty::I1 => ValueKind::Bool1,
            Ty::I8 => ValueKind::Int8,
            Ty::I16 => ValueKind::Int16,
            Ty::I32 => ValueKind::Int32,
            Ty::I64 => ValueKind::Int64,
            Ty::F32 => ValueKind::Float32,
            Ty::F64 => ValueKind::Float64,
            Ty::X86Fp80 => ValueKind::FloatExtended80,
            Ty::Ptr(pointee) if pointee.is_function() => ValueKind::FunctionAddress,
            Ty::Ptr(_) => ValueKind::Address,
            other => {
                return Err(Error::internal(format!(
                    "no value kind for base type {}",
                    other
                )))
            }
        };
        Ok(kind)
    }

    pub fn bit_width(self) -> u32 {
        match self {
            ValueKind::Bool1 => 1,
            ValueKind::Int8 => 8,
            ValueKind::Int16 => 16,
            ValueKind::Int32 | ValueKind::Float32 => 32,
            ValueKind::Int64
            | ValueKind::Float64
            | ValueKind::Address
            | ValueKind::FunctionAddress => 64,
            ValueKind::FloatExtended80 => 80,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            ValueKind::Bool1
                | ValueKind::Int8
                | ValueKind::Int16
                | ValueKind::Int32
                | ValueKind::Int64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(
            self,
            ValueKind::Float32 | ValueKind::Float64 | ValueKind::FloatExtended80
        )
    }

    pub fn is_pointer(self) -> bool {
        matches!(self, ValueKind::Address | ValueKind::FunctionAddress)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Bool1 => "i1",
            ValueKind::Int8 => "i8",
            ValueKind::Int16 => "i16",
            ValueKind::Int32 => "i32",
            ValueKind::Int64 => "i64",
            ValueKind::Float32 => "float",
            ValueKind::Float64 => "double",
            ValueKind::FloatExtended80 => "x86_fp80",
            ValueKind::Address => "ptr",
            ValueKind::FunctionAddress => "fnptr",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
