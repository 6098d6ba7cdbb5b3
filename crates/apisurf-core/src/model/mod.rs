//! Semantic model handed to the extractor by the program loader.
//!
//! The model is a closed set of tagged unions: every type and object variant
//! the extractor understands is enumerated here, so an unclassifiable input is
//! rejected when the model is deserialized rather than deep inside extraction.

pub mod constant;
pub mod object;
pub mod types;

pub use constant::{ConstValue, Rational};
pub use object::{MethodSel, Object, ObjectKind, Package, Program, TypeDecl};
pub use types::{
    Basic, BasicKind, ChanDir, Embedded, Field, Interface, InterfaceMethod, NamedRef, PackageRef,
    Signature, StructType, Term, Type, TypeParam,
};

/// Reports whether `name` is visible outside its package.
///
/// A name is exported when its first character is an uppercase letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_exported() {
        assert!(is_exported("Reader"));
        assert!(is_exported("Ünicode"));
        assert!(!is_exported("reader"));
        assert!(!is_exported("_Hidden"));
        assert!(!is_exported(""));
    }
}
