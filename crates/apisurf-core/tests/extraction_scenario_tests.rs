#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use apisurf_core::errors::{ApiSurfError, ExError, ExErrorKind};
use apisurf_core::{ExtractionContext, Extractor};
use common::{basic, extract, named, pointer, program, sig, slice, untyped};
use serde_json::{json, Value};

const GEO: (&str, &str) = ("example.com/geo", "geo");

fn tparam(index: u32, name: &str, constraint: Value) -> Value {
    json!({"index": index, "name": name, "constraint": constraint})
}

fn any() -> Value {
    json!({"type": "interface"})
}

fn geo_package() -> Value {
    let point = named(Some(GEO), "Point");
    let pair = named(Some(GEO), "Pair");
    let k = json!({"type": "type_param", "index": 0, "name": "K", "constraint": named(None, "comparable")});
    let v = json!({"type": "type_param", "index": 1, "name": "V", "constraint": any()});
    let string_m = json!({"name": "String", "recv": point, "signature": sig(vec![], vec![basic("string")])});
    let scale_m = json!({"name": "Scale", "recv": pointer(point.clone()), "signature": sig(vec![basic("float64")], vec![])});
    let get_m = json!({
        "name": "Get",
        "recv": pointer(pair),
        "recv_type_params": [tparam(0, "K", any()), tparam(1, "V", any())],
        "signature": sig(vec![], vec![k.clone(), v.clone()])
    });

    json!({
        "path": "example.com/geo",
        "name": "geo",
        "objects": [
            {"name": "debug", "decl": {"kind": "var", "ty": basic("bool")}},
            {"name": "MaxX", "decl": {"kind": "const", "ty": untyped("int"), "value": {"kind": "int", "value": "5"}}},
            {"name": "Half", "decl": {"kind": "const", "ty": untyped("float"), "value": {"kind": "float", "num": "7", "den": "2"}}},
            {"name": "Origin", "decl": {"kind": "var", "ty": pointer(point.clone())}},
            {"name": "Point", "decl": {
                "kind": "type",
                "ty": {"type": "struct", "fields": [
                    {"name": "X", "ty": basic("float64")},
                    {"name": "Y", "ty": basic("float64")},
                    {"name": "tag", "ty": basic("string")}
                ]},
                "value_methods": [string_m],
                "pointer_methods": [scale_m, string_m]
            }},
            {"name": "Shape", "decl": {
                "kind": "type",
                "ty": {"type": "interface", "methods": [
                    {"name": "Area", "signature": sig(vec![], vec![basic("float64")])},
                    {"name": "sealed", "signature": sig(vec![], vec![])}
                ]}
            }},
            {"name": "Pair", "decl": {
                "kind": "type",
                "ty": {"type": "struct", "fields": [
                    {"name": "Key", "ty": k},
                    {"name": "Val", "ty": v}
                ]},
                "type_params": [tparam(0, "K", named(None, "comparable")), tparam(1, "V", any())],
                "pointer_methods": [get_m]
            }},
            {"name": "NewPoint", "decl": {"kind": "func", "signature": sig(vec![basic("float64"), basic("float64")], vec![pointer(point)])}},
            {"name": "Printf", "decl": {"kind": "func", "signature": {
                "params": [basic("string"), slice(any())],
                "results": [basic("int"), named(None, "error")],
                "variadic": true
            }}},
            {"name": "Reader", "decl": {"kind": "type", "alias": true, "ty": named(Some(("io", "io")), "Reader")}}
        ]
    })
}

#[test]
fn test_scenario_geo_package_surface() {
    let features = extract(&program(vec![geo_package()])).unwrap();
    let expected = vec![
        "pkg example.com/geo, const Half = 3.5  // 7/2",
        "pkg example.com/geo, const Half ideal-float",
        "pkg example.com/geo, const MaxX = 5",
        "pkg example.com/geo, const MaxX ideal-int",
        "pkg example.com/geo, func NewPoint(float64, float64) *Point",
        "pkg example.com/geo, func Printf(string, ...interface{}) (int, error)",
        "pkg example.com/geo, method (*Pair[$0, $1]) Get() ($0, $1)",
        "pkg example.com/geo, method (*Point) Scale(float64)",
        "pkg example.com/geo, method (Point) String() string",
        "pkg example.com/geo, type Pair[$0 comparable, $1 interface{}] struct",
        "pkg example.com/geo, type Pair[$0 comparable, $1 interface{}] struct, Key $0",
        "pkg example.com/geo, type Pair[$0 comparable, $1 interface{}] struct, Val $1",
        "pkg example.com/geo, type Point struct",
        "pkg example.com/geo, type Point struct, X float64",
        "pkg example.com/geo, type Point struct, Y float64",
        "pkg example.com/geo, type Reader = io.Reader",
        "pkg example.com/geo, type Shape interface, Area() float64",
        "pkg example.com/geo, type Shape interface, unexported methods",
        "pkg example.com/geo, var Origin *Point",
    ];
    assert_eq!(features, expected);
}

#[test]
fn test_scenario_const_max_x_round_trip() {
    let pkg = json!({
        "path": "x",
        "name": "x",
        "objects": [
            {"name": "MaxX", "decl": {"kind": "const", "ty": untyped("int"), "value": {"kind": "int", "value": "5"}}}
        ]
    });
    let features = extract(&program(vec![pkg])).unwrap();
    assert_eq!(features, vec!["pkg x, const MaxX = 5", "pkg x, const MaxX ideal-int"]);
}

#[test]
fn test_scenario_hidden_methods_do_not_change_surface() {
    let iface = |methods: Vec<Value>| {
        json!({
            "path": "x",
            "name": "x",
            "objects": [{"name": "Sealed", "decl": {"kind": "type", "ty": {"type": "interface", "methods": methods}}}]
        })
    };
    let before = extract(&program(vec![iface(vec![
        json!({"name": "Kind", "signature": sig(vec![], vec![basic("string")])}),
        json!({"name": "seal", "signature": sig(vec![], vec![])}),
    ])]))
    .unwrap();
    let after = extract(&program(vec![iface(vec![
        json!({"name": "Kind", "signature": sig(vec![], vec![basic("string")])}),
        json!({"name": "seal", "signature": sig(vec![], vec![])}),
        json!({"name": "reseal", "signature": sig(vec![basic("int")], vec![])}),
    ])]))
    .unwrap();

    assert_eq!(before, after);
    assert!(before.contains(&"pkg x, type Sealed interface, unexported methods".to_string()));
    assert!(before.iter().all(|f| !f.contains("interface {")));
}

#[test]
fn test_scenario_internal_packages_are_skipped() {
    let internal = json!({
        "path": "example.com/geo/internal/calc",
        "name": "calc",
        "objects": [{"name": "Add", "decl": {"kind": "func", "signature": sig(vec![], vec![])}}]
    });
    let prog = program(vec![geo_package(), internal]);
    let features = extract(&prog).unwrap();
    assert!(features.iter().all(|f| !f.contains("internal")));

    let mut ctx = ExtractionContext::new();
    Extractor::new()
        .skip_internal(false)
        .export_program(&mut ctx, &prog)
        .unwrap();
    assert!(ctx
        .features()
        .contains("pkg example.com/geo/internal/calc, func Add()"));
}

#[test]
fn test_scenario_cross_package_qualification() {
    let pkg = json!({
        "path": "example.com/render",
        "name": "render",
        "objects": [
            {"name": "Draw", "decl": {"kind": "func", "signature": sig(
                vec![pointer(named(Some(GEO), "Point")), json!({"type": "map", "key": basic("string"), "elem": named(Some(("example.com/render", "render")), "Style")})],
                vec![]
            )}}
        ]
    });
    let features = extract(&program(vec![pkg])).unwrap();
    assert_eq!(
        features,
        vec!["pkg example.com/render, func Draw(*geo.Point, map[string]Style)"]
    );
}

#[test]
fn test_scenario_duplicate_feature_aborts_run() {
    let pkg = json!({
        "path": "x",
        "name": "x",
        "objects": [{"name": "F", "decl": {"kind": "func", "signature": sig(vec![], vec![])}}]
    });
    let err = extract(&program(vec![pkg.clone(), pkg])).unwrap_err();
    assert_eq!(
        err,
        ApiSurfError::DuplicateFeature {
            feature: "pkg x, func F()".to_string()
        }
    );
    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::DuplicateFeature);
    assert!(ex.kind().is_defect());
}

#[test]
fn test_scenario_untyped_nil_var_is_a_defect() {
    let pkg = json!({
        "path": "x",
        "name": "x",
        "objects": [{"name": "Nothing", "decl": {"kind": "var", "ty": untyped("nil")}}]
    });
    let err = extract(&program(vec![pkg])).unwrap_err();
    assert_eq!(err, ApiSurfError::UntypedNil);
}

#[test]
fn test_scenario_newline_in_string_constant_is_escaped() {
    let pkg = json!({
        "path": "x",
        "name": "x",
        "objects": [
            {"name": "Banner", "decl": {"kind": "const", "ty": untyped("string"), "value": {"kind": "string", "value": "hello\nworld"}}}
        ]
    });
    let features = extract(&program(vec![pkg])).unwrap();
    assert!(features.contains(&"pkg x, const Banner = \"hello\\nworld\"".to_string()));
}

#[test]
fn test_scenario_generic_function_and_constraint_interface() {
    let number = json!({"type": "interface", "embeddeds": [
        {"embed": "union", "terms": [
            {"tilde": true, "ty": basic("int")},
            {"tilde": true, "ty": basic("float64")}
        ]}
    ]});
    let t = json!({"type": "type_param", "index": 0, "name": "T", "constraint": named(Some(("x", "x")), "Number")});
    let pkg = json!({
        "path": "x",
        "name": "x",
        "objects": [
            {"name": "Number", "decl": {"kind": "type", "ty": number}},
            {"name": "Sum", "decl": {"kind": "func", "signature": {
                "type_params": [tparam(0, "T", named(Some(("x", "x")), "Number"))],
                "params": [slice(t.clone())],
                "results": [t]
            }}}
        ]
    });
    let features = extract(&program(vec![pkg])).unwrap();
    assert_eq!(
        features,
        vec![
            "pkg x, func Sum[$0 Number]([]$0) $0",
            "pkg x, type Number interface {}",
        ]
    );
}
