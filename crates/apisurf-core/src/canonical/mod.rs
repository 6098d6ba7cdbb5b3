//! Type canonicalizer.
//!
//! Renders any node of the type graph as a single-line string. The output is
//! a pure function of the node and the package being rendered: named types
//! from that package are written bare, all others are qualified with their
//! package's short name.
//!
//! Struct bodies and interface method signatures are not inlined; the
//! extractor emits them as features of their own.

pub mod constant;

use crate::errors::{ApiSurfError, Result};
use crate::model::{
    is_exported, Basic, BasicKind, ChanDir, Embedded, Interface, Signature, Type, TypeParam,
};

pub use constant::{render_const_value, ConstRendering};

/// Canonical type printer bound to the package currently being exported.
#[derive(Debug, Clone, Copy)]
pub struct TypeWriter<'a> {
    current: Option<&'a str>,
}

impl<'a> TypeWriter<'a> {
    /// `current` is the import path of the package being exported, if any.
    pub fn new(current: Option<&'a str>) -> Self {
        Self { current }
    }

    pub fn current_package(&self) -> Option<&'a str> {
        self.current
    }

    /// Render a type.
    ///
    /// # Errors
    ///
    /// `UntypedNil`, `TupleType` or `VariadicNotSlice` when the graph holds a
    /// node that can never appear on a declared surface.
    pub fn type_string(&self, ty: &Type) -> Result<String> {
        let mut buf = String::new();
        self.write_type(&mut buf, ty)?;
        Ok(buf)
    }

    /// Render a signature without the leading `func` keyword.
    pub fn signature_string(&self, sig: &Signature) -> Result<String> {
        let mut buf = String::new();
        self.write_signature(&mut buf, sig)?;
        Ok(buf)
    }

    /// Render a type-parameter list: `[$0 any, $1 comparable]`, or
    /// `[$0, $1]` without constraints.
    pub fn type_params_string(
        &self,
        tparams: &[TypeParam],
        with_constraints: bool,
    ) -> Result<String> {
        let mut buf = String::new();
        self.write_type_params(&mut buf, tparams, with_constraints)?;
        Ok(buf)
    }

    fn write_type(&self, buf: &mut String, ty: &Type) -> Result<()> {
        match ty {
            Type::Basic(basic) => buf.push_str(basic_name(basic)?),
            Type::Array { len, elem } => {
                buf.push_str(&format!("[{}]", len));
                self.write_type(buf, elem)?;
            }
            Type::Slice { elem } => {
                buf.push_str("[]");
                self.write_type(buf, elem)?;
            }
            Type::Struct(_) => buf.push_str("struct"),
            Type::Pointer { elem } => {
                buf.push('*');
                self.write_type(buf, elem)?;
            }
            Type::Tuple { .. } => return Err(ApiSurfError::TupleType),
            Type::Signature(sig) => {
                buf.push_str("func");
                self.write_signature(buf, sig)?;
            }
            Type::Interface(iface) => self.write_interface(buf, iface)?,
            Type::Map { key, elem } => {
                buf.push_str("map[");
                self.write_type(buf, key)?;
                buf.push(']');
                self.write_type(buf, elem)?;
            }
            Type::Chan { dir, elem } => {
                buf.push_str(match dir {
                    ChanDir::Send => "chan<- ",
                    ChanDir::Recv => "<-chan ",
                    ChanDir::Both => "chan ",
                });
                self.write_type(buf, elem)?;
            }
            Type::Named(named) => {
                if let Some(pkg) = &named.package {
                    if Some(pkg.path.as_str()) != self.current {
                        buf.push_str(&pkg.name);
                        buf.push('.');
                    }
                }
                buf.push_str(&named.name);
            }
            // Parameter names may change without breaking callers.
            Type::TypeParam(tp) => buf.push_str(&format!("${}", tp.index)),
        }
        Ok(())
    }

    fn write_interface(&self, buf: &mut String, iface: &Interface) -> Result<()> {
        let methods = sorted_method_names(iface);
        let embeddeds = self.sorted_embeddeds(iface)?;

        // Method names and constraint terms are written back to back.
        let padded = !iface.methods.is_empty() || !iface.embeddeds.is_empty();
        buf.push_str("interface{");
        if padded {
            buf.push(' ');
        }
        buf.push_str(&methods.join(", "));
        buf.push_str(&embeddeds.join(", "));
        if padded {
            buf.push(' ');
        }
        buf.push('}');
        Ok(())
    }

    /// Constraint terms embedded in an interface, flattened through inline
    /// interfaces. Embedded named interfaces contribute nothing here.
    fn sorted_embeddeds(&self, iface: &Interface) -> Result<Vec<String>> {
        let mut list = Vec::with_capacity(iface.embeddeds.len());
        for embedded in &iface.embeddeds {
            match embedded {
                Embedded::Interface(inner) => list.extend(self.sorted_embeddeds(inner)?),
                Embedded::Union { terms } => {
                    let mut rendered = Vec::with_capacity(terms.len());
                    for term in terms {
                        let mut t = String::new();
                        if term.tilde {
                            t.push('~');
                        }
                        self.write_type(&mut t, &term.ty)?;
                        rendered.push(t);
                    }
                    list.push(rendered.join(" | "));
                }
                Embedded::Type { .. } => {}
            }
        }
        list.sort();
        Ok(list)
    }

    fn write_signature(&self, buf: &mut String, sig: &Signature) -> Result<()> {
        if !sig.type_params.is_empty() {
            self.write_type_params(buf, &sig.type_params, true)?;
        }
        self.write_params(buf, &sig.params, sig.variadic)?;
        match sig.results.as_slice() {
            [] => {}
            [single] => {
                buf.push(' ');
                self.write_type(buf, single)?;
            }
            many => {
                buf.push(' ');
                self.write_params(buf, many, false)?;
            }
        }
        Ok(())
    }

    fn write_type_params(
        &self,
        buf: &mut String,
        tparams: &[TypeParam],
        with_constraints: bool,
    ) -> Result<()> {
        buf.push('[');
        for (i, tp) in tparams.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            buf.push_str(&format!("${}", tp.index));
            if with_constraints {
                buf.push(' ');
                self.write_type(buf, &tp.constraint)?;
            }
        }
        buf.push(']');
        Ok(())
    }

    fn write_params(&self, buf: &mut String, params: &[Type], variadic: bool) -> Result<()> {
        buf.push('(');
        let n = params.len();
        for (i, ty) in params.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            if variadic && i + 1 == n {
                let Type::Slice { elem } = ty else {
                    return Err(ApiSurfError::VariadicNotSlice {
                        found: self.type_string(ty)?,
                    });
                };
                buf.push_str("...");
                self.write_type(buf, elem)?;
            } else {
                self.write_type(buf, ty)?;
            }
        }
        buf.push(')');
        Ok(())
    }
}

/// Canonical spelling of a predeclared type.
fn basic_name(basic: &Basic) -> Result<&str> {
    let name = match basic.kind {
        BasicKind::UnsafePointer => "unsafe.Pointer",
        BasicKind::UntypedBool => "ideal-bool",
        BasicKind::UntypedInt => "ideal-int",
        BasicKind::UntypedRune => "ideal-rune",
        BasicKind::UntypedFloat => "ideal-float",
        BasicKind::UntypedComplex => "ideal-complex",
        BasicKind::UntypedString => "ideal-string",
        BasicKind::UntypedNil => return Err(ApiSurfError::UntypedNil),
        _ => match basic.name.as_str() {
            "byte" => "uint8",
            "rune" => "int32",
            other => other,
        },
    };
    Ok(name)
}

/// Exported method names of an interface, sorted.
fn sorted_method_names(iface: &Interface) -> Vec<String> {
    let mut names: Vec<String> = iface
        .methods
        .iter()
        .filter(|m| is_exported(&m.name))
        .map(|m| m.name.clone())
        .collect();
    names.sort();
    names
}
