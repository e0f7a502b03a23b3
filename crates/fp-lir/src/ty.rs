use std::fmt::{Display, Formatter};

/// Base type of an LIR value as handed over by the bitcode parser.
///
/// Only a subset of these shapes can be carried by a single interpreter
/// value; see [`crate::ValueKind::from_ty`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    I1,
    I8,
    I16,
    I32,
    I64,
    I128,
    F32,
    F64,
    X86Fp80,
    Ptr(Box<Ty>),
    Array(Box<Ty>, u64),
    Struct {
        fields: Vec<Ty>,
        packed: bool,
        name: Option<String>,
    },
    Function {
        return_type: Box<Ty>,
        param_types: Vec<Ty>,
        is_variadic: bool,
    },
    Vector(Box<Ty>, u32),
    Void,
}

impl Ty {
    pub fn ptr(pointee: Ty) -> Self {
        Ty::Ptr(Box::new(pointee))
    }

    pub fn function(return_type: Ty, param_types: Vec<Ty>) -> Self {
        Ty::Function {
            return_type: Box::new(return_type),
            param_types,
            is_variadic: false,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Ty::Function { .. })
    }
}

impl Display for Ty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Ty::*;

        match self {
            I1 => write!(f, "i1"),
            I8 => write!(f, "i8"),
            I16 => write!(f, "i16"),
            I32 => write!(f, "i32"),
            I64 => write!(f, "i64"),
            I128 => write!(f, "i128"),
            F32 => write!(f, "float"),
            F64 => write!(f, "double"),
            X86Fp80 => write!(f, "x86_fp80"),
            Void => write!(f, "void"),
            Ptr(inner) => write!(f, "{}*", inner),
            Array(inner, count) => write!(f, "[{} x {}]", count, inner),
            Struct {
                fields,
                packed,
                name,
            } => {
                if let Some(name) = name {
                    return write!(f, "%{}", name);
                }
                let body = fields
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                if *packed {
                    write!(f, "<{{ {} }}>", body)
                } else {
                    write!(f, "{{ {} }}", body)
                }
            }
            Function {
                return_type,
                param_types,
                is_variadic,
            } => {
                let mut params = param_types
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>();
                if *is_variadic {
                    params.push("...".into());
                }
                write!(f, "{} ({})", return_type, params.join(", "))
            }
            Vector(inner, count) => write!(f, "<{} x {}>", count, inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_pointer_types() {
        assert_eq!(Ty::ptr(Ty::I8).to_string(), "i8*");
        let callee = Ty::function(Ty::I32, vec![Ty::I64, Ty::ptr(Ty::I8)]);
        assert_eq!(Ty::ptr(callee).to_string(), "i32 (i64, i8*)*");
    }

    #[test]
    fn formats_aggregates() {
        let packed = Ty::Struct {
            fields: vec![Ty::I8, Ty::F64],
            packed: true,
            name: None,
        };
        assert_eq!(packed.to_string(), "<{ i8, double }>");
        assert_eq!(Ty::Vector(Box::new(Ty::F32), 4).to_string(), "<4 x float>");
    }
}
