//! Type graph variants.
//!
//! Named types are referenced by identity (`NamedRef`), never expanded, so
//! recursive and self-referential declarations stay finite.

use serde::{Deserialize, Serialize};

/// A node of the resolved type graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Type {
    Basic(Basic),
    Array {
        len: u64,
        elem: Box<Type>,
    },
    Slice {
        elem: Box<Type>,
    },
    Struct(StructType),
    Pointer {
        elem: Box<Type>,
    },
    /// Multi-value result list. Only legal inside a signature.
    Tuple {
        elems: Vec<Type>,
    },
    Signature(Signature),
    Interface(Interface),
    Map {
        key: Box<Type>,
        elem: Box<Type>,
    },
    Chan {
        dir: ChanDir,
        elem: Box<Type>,
    },
    Named(NamedRef),
    TypeParam(TypeParam),
}

impl Type {
    pub fn basic(kind: BasicKind) -> Self {
        Type::Basic(Basic {
            kind,
            name: kind.default_name().to_string(),
        })
    }

    /// A basic type spelled with an alias name (`byte`, `rune`).
    pub fn basic_named(kind: BasicKind, name: impl Into<String>) -> Self {
        Type::Basic(Basic {
            kind,
            name: name.into(),
        })
    }

    pub fn named(package: Option<PackageRef>, name: impl Into<String>) -> Self {
        Type::Named(NamedRef {
            package,
            name: name.into(),
        })
    }

    pub fn pointer(elem: Type) -> Self {
        Type::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: Type) -> Self {
        Type::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn map(key: Type, elem: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            elem: Box::new(elem),
        }
    }

    pub fn type_param(index: u32, name: impl Into<String>, constraint: Type) -> Self {
        Type::TypeParam(TypeParam::new(index, name, constraint))
    }

    /// The empty interface, `any`.
    pub fn any() -> Self {
        Type::Interface(Interface::default())
    }
}

/// A predeclared type. `name` is the spelling used at the declaration site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basic {
    pub kind: BasicKind,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    UnsafePointer,
    UntypedBool,
    UntypedInt,
    UntypedRune,
    UntypedFloat,
    UntypedComplex,
    UntypedString,
    UntypedNil,
}

impl BasicKind {
    pub fn default_name(&self) -> &'static str {
        match self {
            BasicKind::Bool => "bool",
            BasicKind::Int => "int",
            BasicKind::Int8 => "int8",
            BasicKind::Int16 => "int16",
            BasicKind::Int32 => "int32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint => "uint",
            BasicKind::Uint8 => "uint8",
            BasicKind::Uint16 => "uint16",
            BasicKind::Uint32 => "uint32",
            BasicKind::Uint64 => "uint64",
            BasicKind::Uintptr => "uintptr",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
            BasicKind::Complex64 => "complex64",
            BasicKind::Complex128 => "complex128",
            BasicKind::String => "string",
            BasicKind::UnsafePointer => "Pointer",
            BasicKind::UntypedBool => "untyped bool",
            BasicKind::UntypedInt => "untyped int",
            BasicKind::UntypedRune => "untyped rune",
            BasicKind::UntypedFloat => "untyped float",
            BasicKind::UntypedComplex => "untyped complex",
            BasicKind::UntypedString => "untyped string",
            BasicKind::UntypedNil => "untyped nil",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructType {
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A struct field in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: Type,
    #[serde(default)]
    pub embedded: bool,
}

/// A function or method signature. Parameter names are not part of the
/// surface and are not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub type_params: Vec<TypeParam>,
    #[serde(default)]
    pub params: Vec<Type>,
    #[serde(default)]
    pub results: Vec<Type>,
    /// When set, the last parameter is a slice spelled `...elem`.
    #[serde(default)]
    pub variadic: bool,
    /// Present only on method signatures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv: Option<Box<Type>>,
}

/// An interface type. `methods` is the complete method set, including
/// methods contributed by embedded interfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(default)]
    pub methods: Vec<InterfaceMethod>,
    #[serde(default)]
    pub embeddeds: Vec<Embedded>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceMethod {
    pub name: String,
    pub signature: Signature,
}

/// An element embedded in an interface body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "embed", rename_all = "snake_case")]
pub enum Embedded {
    /// An inline interface literal; its constraint terms are flattened.
    Interface(Interface),
    /// A type-set union `t1 | ~t2 | ...`.
    Union { terms: Vec<Term> },
    /// Any other embedded type, such as a named interface. Contributes
    /// methods only, which are already part of the method set.
    Type { ty: Type },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(default)]
    pub tilde: bool,
    pub ty: Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    Send,
    Recv,
    Both,
}

/// Identity of the package that declares a named type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageRef {
    pub path: String,
    pub name: String,
}

impl PackageRef {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// Reference to a defined type. `package` is `None` for predeclared
/// named types such as `error` and `comparable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub package: Option<PackageRef>,
    pub name: String,
}

/// A generic type parameter. Only `index` and `constraint` reach the
/// canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParam {
    pub index: u32,
    pub name: String,
    pub constraint: Box<Type>,
}

impl TypeParam {
    pub fn new(index: u32, name: impl Into<String>, constraint: Type) -> Self {
        Self {
            index,
            name: name.into(),
            constraint: Box::new(constraint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_deserializes_from_tagged_json() {
        let ty: Type = serde_json::from_value(json!({
            "type": "map",
            "key": {"type": "basic", "kind": "string", "name": "string"},
            "elem": {"type": "slice", "elem": {"type": "basic", "kind": "uint8", "name": "byte"}}
        }))
        .unwrap();
        assert_eq!(
            ty,
            Type::map(
                Type::basic(BasicKind::String),
                Type::slice(Type::basic_named(BasicKind::Uint8, "byte"))
            )
        );
    }

    #[test]
    fn test_unknown_type_tag_is_rejected() {
        let err = serde_json::from_value::<Type>(json!({"type": "union", "terms": []}));
        assert!(err.is_err());
    }

    #[test]
    fn test_named_ref_without_package() {
        let ty: Type = serde_json::from_value(json!({"type": "named", "name": "error"})).unwrap();
        assert_eq!(ty, Type::named(None, "error"));
    }
}
