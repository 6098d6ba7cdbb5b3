//! Feature extraction.
//!
//! Walks every exported object of a package and emits one feature per
//! declaration fact into an [`ExtractionContext`]. Struct fields and
//! interface methods are emitted under a nested scope of their own.

pub mod context;
pub mod feature_set;

pub use context::ExtractionContext;
pub use feature_set::FeatureSet;

use crate::canonical::{render_const_value, TypeWriter};
use crate::errors::{ApiSurfError, Result};
use crate::model::{
    is_exported, ConstValue, Interface, MethodSel, Object, ObjectKind, Package, Program,
    Signature, StructType, Type, TypeDecl,
};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    skip_internal: bool,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            skip_internal: true,
        }
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether packages under an `internal` path segment are skipped.
    pub fn skip_internal(mut self, skip: bool) -> Self {
        self.skip_internal = skip;
        self
    }

    /// Export every package of `program`, one at a time, in the given order.
    ///
    /// # Errors
    ///
    /// Any invariant violation raised while exporting a package.
    pub fn export_program(&self, ctx: &mut ExtractionContext, program: &Program) -> Result<()> {
        for pkg in &program.packages {
            if self.skip_internal && pkg.is_internal() {
                tracing::debug!(package = %pkg.path, "skipping internal package");
                continue;
            }
            self.export_package(ctx, pkg)?;
        }
        Ok(())
    }

    /// Export the exported top-level objects of `pkg`, ordered by name.
    ///
    /// # Errors
    ///
    /// Any invariant violation raised while rendering or emitting a feature.
    pub fn export_package(&self, ctx: &mut ExtractionContext, pkg: &Package) -> Result<()> {
        let before = ctx.features().len();
        let mut objects: Vec<&Object> = pkg
            .objects
            .iter()
            .filter(|obj| is_exported(&obj.name))
            .collect();
        objects.sort_by(|a, b| a.name.cmp(&b.name));

        let walker = PackageWalker {
            w: TypeWriter::new(Some(pkg.path.as_str())),
        };
        ctx.in_scope(format!("pkg {}", pkg.path), |ctx| {
            for obj in objects {
                walker.emit_object(ctx, obj)?;
            }
            Ok(())
        })?;

        tracing::debug!(
            package = %pkg.path,
            feature_count = ctx.features().len() - before,
            "package exported"
        );
        Ok(())
    }
}

struct PackageWalker<'a> {
    w: TypeWriter<'a>,
}

impl PackageWalker<'_> {
    fn emit_object(&self, ctx: &mut ExtractionContext, obj: &Object) -> Result<()> {
        match &obj.decl {
            ObjectKind::Const { ty, value } => self.emit_const(ctx, &obj.name, ty, value),
            ObjectKind::Var { ty } => {
                ctx.emit(&format!("var {} {}", obj.name, self.w.type_string(ty)?))
            }
            ObjectKind::TypeName(decl) => self.emit_type(ctx, &obj.name, decl),
            ObjectKind::Func { signature } => self.emit_func(ctx, &obj.name, signature),
        }
    }

    fn emit_const(
        &self,
        ctx: &mut ExtractionContext,
        name: &str,
        ty: &Type,
        value: &ConstValue,
    ) -> Result<()> {
        ctx.emit(&format!("const {} {}", name, self.w.type_string(ty)?))?;
        let rendered = render_const_value(value);
        ctx.emit(&format!("const {} = {}", name, rendered.feature_value()))
    }

    fn emit_func(&self, ctx: &mut ExtractionContext, name: &str, sig: &Signature) -> Result<()> {
        if sig.recv.is_some() {
            return Err(ApiSurfError::FunctionWithReceiver {
                name: name.to_string(),
            });
        }
        ctx.emit(&format!("func {}{}", name, self.w.signature_string(sig)?))
    }

    fn emit_type(&self, ctx: &mut ExtractionContext, name: &str, decl: &TypeDecl) -> Result<()> {
        if decl.alias {
            return ctx.emit(&format!("type {} = {}", name, self.w.type_string(&decl.ty)?));
        }

        let mut name = name.to_string();
        if !decl.type_params.is_empty() {
            name.push_str(&self.w.type_params_string(&decl.type_params, true)?);
        }

        match &decl.ty {
            Type::Struct(st) => self.emit_struct_type(ctx, &name, st)?,
            // Interface methods are covered by the interface scope.
            Type::Interface(iface) => return self.emit_iface_type(ctx, &name, iface),
            underlying => {
                ctx.emit(&format!("type {} {}", name, self.w.type_string(underlying)?))?
            }
        }

        let mut emitted = BTreeSet::new();
        for m in sorted_methods(&decl.value_methods) {
            if is_exported(&m.name) {
                self.emit_method(ctx, m)?;
                emitted.insert(m.name.as_str());
            }
        }
        for m in sorted_methods(&decl.pointer_methods) {
            if is_exported(&m.name) && !emitted.contains(m.name.as_str()) {
                self.emit_method(ctx, m)?;
            }
        }
        Ok(())
    }

    fn emit_struct_type(
        &self,
        ctx: &mut ExtractionContext,
        name: &str,
        st: &StructType,
    ) -> Result<()> {
        let label = format!("type {} struct", name);
        ctx.emit(&label)?;
        ctx.in_scope(label, |ctx| {
            for field in st.fields.iter().filter(|f| is_exported(&f.name)) {
                let ty = self.w.type_string(&field.ty)?;
                if field.embedded {
                    ctx.emit(&format!("embedded {}", ty))?;
                } else {
                    ctx.emit(&format!("{} {}", field.name, ty))?;
                }
            }
            Ok(())
        })
    }

    fn emit_iface_type(
        &self,
        ctx: &mut ExtractionContext,
        name: &str,
        iface: &Interface,
    ) -> Result<()> {
        let mut methods: Vec<_> = iface.methods.iter().collect();
        methods.sort_by(|a, b| a.name.cmp(&b.name));

        let (names, complete) = ctx.in_scope(format!("type {} interface", name), |ctx| {
            let mut names = Vec::new();
            let mut complete = true;
            for m in methods {
                if !is_exported(&m.name) {
                    complete = false;
                    continue;
                }
                ctx.emit(&format!("{}{}", m.name, self.w.signature_string(&m.signature)?))?;
                names.push(m.name.as_str());
            }
            if !complete {
                ctx.emit("unexported methods")?;
            }
            Ok((names, complete))
        })?;

        if !complete {
            return Ok(());
        }
        if names.is_empty() {
            return ctx.emit(&format!("type {} interface {{}}", name));
        }
        ctx.emit(&format!("type {} interface {{ {} }}", name, names.join(", ")))
    }

    fn emit_method(&self, ctx: &mut ExtractionContext, m: &MethodSel) -> Result<()> {
        let base = match &m.recv {
            Type::Pointer { elem } => elem.as_ref(),
            other => other,
        };
        let Type::Named(named) = base else {
            return Err(ApiSurfError::ReceiverNotNamed {
                method: m.name.clone(),
            });
        };
        let recv = self.w.type_string(&m.recv)?;
        if !is_exported(&named.name) {
            return Err(ApiSurfError::UnexportedReceiverBase {
                receiver: recv,
                method: m.name.clone(),
            });
        }

        let tps = if m.recv_type_params.is_empty() {
            String::new()
        } else {
            self.w.type_params_string(&m.recv_type_params, false)?
        };
        ctx.emit(&format!(
            "method ({}{}) {}{}",
            recv,
            tps,
            m.name,
            self.w.signature_string(&m.signature)?
        ))
    }
}

fn sorted_methods(methods: &[MethodSel]) -> Vec<&MethodSel> {
    let mut sorted: Vec<&MethodSel> = methods.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}
