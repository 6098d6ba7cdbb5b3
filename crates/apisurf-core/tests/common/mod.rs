//! JSON fixture helpers for semantic-model tests.

use apisurf_core::{ExtractionContext, Extractor, Program};
use serde_json::{json, Value};

#[allow(dead_code)]
pub fn basic(kind: &str) -> Value {
    json!({"type": "basic", "kind": kind, "name": kind})
}

#[allow(dead_code)]
pub fn untyped(kind: &str) -> Value {
    json!({"type": "basic", "kind": format!("untyped_{kind}"), "name": format!("untyped {kind}")})
}

#[allow(dead_code)]
pub fn named(pkg: Option<(&str, &str)>, name: &str) -> Value {
    match pkg {
        Some((path, short)) => {
            json!({"type": "named", "package": {"path": path, "name": short}, "name": name})
        }
        None => json!({"type": "named", "name": name}),
    }
}

#[allow(dead_code)]
pub fn pointer(elem: Value) -> Value {
    json!({"type": "pointer", "elem": elem})
}

#[allow(dead_code)]
pub fn slice(elem: Value) -> Value {
    json!({"type": "slice", "elem": elem})
}

#[allow(dead_code)]
pub fn sig(params: Vec<Value>, results: Vec<Value>) -> Value {
    json!({"params": params, "results": results})
}

#[allow(dead_code)]
pub fn program(packages: Vec<Value>) -> Program {
    serde_json::from_value(json!({ "packages": packages })).expect("fixture must deserialize")
}

/// Export every package of `program` and return the sorted feature list.
#[allow(dead_code)]
pub fn extract(program: &Program) -> apisurf_core::Result<Vec<String>> {
    let mut ctx = ExtractionContext::new();
    Extractor::new().export_program(&mut ctx, program)?;
    Ok(ctx.into_features().list())
}
