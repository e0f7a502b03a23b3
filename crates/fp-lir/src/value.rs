use std::fmt::{Display, Formatter};

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::kind::ValueKind;

/// Raw memory address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, From, Serialize, Deserialize)]
pub struct Address(pub u64);

impl Address {
    pub const NULL: Address = Address(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Address of a function entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, From, Serialize, Deserialize)]
pub struct FunctionAddress(pub u64);

impl FunctionAddress {
    pub const NULL: FunctionAddress = FunctionAddress(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl Display for FunctionAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{:#x}", self.0)
    }
}

const F64_EXP_MASK: u64 = 0x7ff;
const F64_FRACTION_MASK: u64 = (1 << 52) - 1;
const F80_EXP_MASK: u16 = 0x7fff;
const F80_INTEGER_BIT: u64 = 1 << 63;
const F80_BIAS: i32 = 16383;
const F64_BIAS: i32 = 1023;

/// x87 extended precision float in its raw 80-bit encoding.
///
/// The significand carries an explicit integer bit. Equality and hashing are
/// on the encoding, so `NaN == NaN` holds when the payloads agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct X86Fp80 {
    pub sign_exponent: u16,
    pub significand: u64,
}

impl X86Fp80 {
    pub const ZERO: X86Fp80 = X86Fp80 {
        sign_exponent: 0,
        significand: 0,
    };

    pub fn from_raw(sign_exponent: u16, significand: u64) -> Self {
        Self {
            sign_exponent,
            significand,
        }
    }

    /// Widens an `f64`; every `f64` is exactly representable.
    pub fn from_f64(value: f64) -> Self {
        let bits = value.to_bits();
        let sign = ((bits >> 63) as u16) << 15;
        let exponent = (bits >> 52) & F64_EXP_MASK;
        let fraction = bits & F64_FRACTION_MASK;

        let (exponent, significand) = match (exponent, fraction) {
            (0, 0) => (0, 0),
            (F64_EXP_MASK, fraction) => (F80_EXP_MASK, F80_INTEGER_BIT | (fraction << 11)),
            (0, fraction) => {
                // subnormal: normalize so the integer bit is set
                let shift = fraction.leading_zeros();
                let exponent = F80_BIAS + 63 - 1074 - shift as i32;
                (exponent as u16, fraction << shift)
            }
            (exponent, fraction) => (
                (exponent as i32 - F64_BIAS + F80_BIAS) as u16,
                F80_INTEGER_BIT | (fraction << 11),
            ),
        };
        Self {
            sign_exponent: sign | exponent,
            significand,
        }
    }

    /// Narrows to `f64`, truncating precision and flushing out-of-range
    /// magnitudes to zero or infinity.
    pub fn to_f64(self) -> f64 {
        let sign = ((self.sign_exponent >> 15) as u64) << 63;
        let exponent = self.sign_exponent & F80_EXP_MASK;
        let mut significand = self.significand;

        if exponent == F80_EXP_MASK {
            let fraction = (significand << 1) >> 12;
            return if significand << 1 == 0 {
                f64::from_bits(sign | (F64_EXP_MASK << 52))
            } else {
                // keep NaN-ness even if the payload was below f64 precision
                f64::from_bits(sign | (F64_EXP_MASK << 52) | fraction | (1 << 51))
            };
        }
        if significand == 0 {
            return f64::from_bits(sign);
        }

        let mut unbiased = exponent as i32 - F80_BIAS;
        if exponent == 0 {
            unbiased += 1;
        }
        let shift = significand.leading_zeros();
        significand <<= shift;
        unbiased -= shift as i32;

        if unbiased > F64_BIAS {
            return f64::from_bits(sign | (F64_EXP_MASK << 52));
        }
        if unbiased >= 1 - F64_BIAS {
            let exponent = (unbiased + F64_BIAS) as u64;
            let fraction = (significand >> 11) & F64_FRACTION_MASK;
            return f64::from_bits(sign | (exponent << 52) | fraction);
        }
        let shift = (-1011 - unbiased) as u32;
        let fraction = if shift < 64 { significand >> shift } else { 0 };
        f64::from_bits(sign | fraction)
    }

    pub fn is_sign_negative(self) -> bool {
        self.sign_exponent & 0x8000 != 0
    }

    pub fn is_nan(self) -> bool {
        self.sign_exponent & F80_EXP_MASK == F80_EXP_MASK && self.significand << 1 != 0
    }

    pub fn to_le_bytes(self) -> [u8; 10] {
        let mut bytes = [0u8; 10];
        bytes[..8].copy_from_slice(&self.significand.to_le_bytes());
        bytes[8..].copy_from_slice(&self.sign_exponent.to_le_bytes());
        bytes
    }

    pub fn from_le_bytes(bytes: [u8; 10]) -> Self {
        let mut significand = [0u8; 8];
        significand.copy_from_slice(&bytes[..8]);
        Self {
            significand: u64::from_le_bytes(significand),
            sign_exponent: u16::from_le_bytes([bytes[8], bytes[9]]),
        }
    }
}

impl From<f64> for X86Fp80 {
    fn from(value: f64) -> Self {
        X86Fp80::from_f64(value)
    }
}

impl Display for X86Fp80 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

/// A resolved interpreter value, tagged with its representation kind.
#[derive(Debug, Clone, Copy, PartialEq, From, Serialize, Deserialize)]
pub enum Value {
    Bool1(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    FloatExtended80(X86Fp80),
    Address(Address),
    FunctionAddress(FunctionAddress),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool1(_) => ValueKind::Bool1,
            Value::Int8(_) => ValueKind::Int8,
            Value::Int16(_) => ValueKind::Int16,
            Value::Int32(_) => ValueKind::Int32,
            Value::Int64(_) => ValueKind::Int64,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float64(_) => ValueKind::Float64,
            Value::FloatExtended80(_) => ValueKind::FloatExtended80,
            Value::Address(_) => ValueKind::Address,
            Value::FunctionAddress(_) => ValueKind::FunctionAddress,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool1(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Value::Int8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Value::Int16(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_fp80(&self) -> Option<X86Fp80> {
        match self {
            Value::FloatExtended80(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<Address> {
        match self {
            Value::Address(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_function_address(&self) -> Option<FunctionAddress> {
        match self {
            Value::FunctionAddress(v) => Some(*v),
            _ => None,
        }
    }

    /// Zero of the given kind, as used for `zeroinitializer` operands.
    pub fn zero(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Bool1 => Value::Bool1(false),
            ValueKind::Int8 => Value::Int8(0),
            ValueKind::Int16 => Value::Int16(0),
            ValueKind::Int32 => Value::Int32(0),
            ValueKind::Int64 => Value::Int64(0),
            ValueKind::Float32 => Value::Float32(0.0),
            ValueKind::Float64 => Value::Float64(0.0),
            ValueKind::FloatExtended80 => Value::FloatExtended80(X86Fp80::ZERO),
            ValueKind::Address => Value::Address(Address::NULL),
            ValueKind::FunctionAddress => Value::FunctionAddress(FunctionAddress::NULL),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool1(v) => write!(f, "{} {}", self.kind(), v),
            Value::Int8(v) => write!(f, "{} {}", self.kind(), v),
            Value::Int16(v) => write!(f, "{} {}", self.kind(), v),
            Value::Int32(v) => write!(f, "{} {}", self.kind(), v),
            Value::Int64(v) => write!(f, "{} {}", self.kind(), v),
            Value::Float32(v) => write!(f, "{} {}", self.kind(), v),
            Value::Float64(v) => write!(f, "{} {}", self.kind(), v),
            Value::FloatExtended80(v) => write!(f, "{} {}", self.kind(), v),
            Value::Address(v) => write!(f, "{} {}", self.kind(), v),
            Value::FunctionAddress(v) => write!(f, "{} {}", self.kind(), v),
        }
    }
}
