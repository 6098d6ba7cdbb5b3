//! Packages and the named objects they declare.

use super::constant::ConstValue;
use super::types::{Signature, Type, TypeParam};
use serde::{Deserialize, Serialize};

/// The loader's output: every package of the program being checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Import path, used in the `pkg <path>` scope label.
    pub path: String,
    /// Short name, used to qualify named types seen from other packages.
    pub name: String,
    /// Top-level objects of the package scope, exported or not.
    #[serde(default)]
    pub objects: Vec<Object>,
}

impl Package {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            objects: Vec::new(),
        }
    }

    pub fn with_object(mut self, object: Object) -> Self {
        self.objects.push(object);
        self
    }

    /// Whether any path segment is `internal`.
    pub fn is_internal(&self) -> bool {
        self.path.split('/').any(|segment| segment == "internal")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    pub decl: ObjectKind,
}

impl Object {
    pub fn new(name: impl Into<String>, decl: ObjectKind) -> Self {
        Self {
            name: name.into(),
            decl,
        }
    }
}

/// Declaration kinds found in a package scope. Methods are not package-scope
/// objects; they are reached through [`TypeDecl`] method sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectKind {
    Const { ty: Type, value: ConstValue },
    Var { ty: Type },
    #[serde(rename = "type")]
    TypeName(TypeDecl),
    Func { signature: Signature },
}

/// A type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// `type N = T` rather than `type N T`.
    #[serde(default)]
    pub alias: bool,
    /// The aliased type for aliases, the underlying type otherwise.
    pub ty: Type,
    #[serde(default)]
    pub type_params: Vec<TypeParam>,
    /// Method set of `N`.
    #[serde(default)]
    pub value_methods: Vec<MethodSel>,
    /// Method set of `*N`, a superset of `value_methods`.
    #[serde(default)]
    pub pointer_methods: Vec<MethodSel>,
}

impl TypeDecl {
    pub fn defined(ty: Type) -> Self {
        Self {
            alias: false,
            ty,
            type_params: Vec::new(),
            value_methods: Vec::new(),
            pointer_methods: Vec::new(),
        }
    }

    pub fn alias(ty: Type) -> Self {
        Self {
            alias: true,
            ..Self::defined(ty)
        }
    }
}

/// A method as selected on a receiver (`N` or `*N`), promoted methods
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSel {
    pub name: String,
    pub recv: Type,
    /// Receiver type parameters of a generic base type.
    #[serde(default)]
    pub recv_type_params: Vec<TypeParam>,
    pub signature: Signature,
}
