//! Best-effort names for object literal properties.
//!
//! Options objects are written in many shapes (`{ count }`, `{ "count": n }`,
//! `{ [name]: v }`, `{ 1: v }`). These helpers turn each shape into a string
//! name where one can be read off the syntax, and return `None` otherwise.

use swc_ecma_ast::{Expr, Lit, Prop, PropName};

/// Resolve the name of a property in an object literal.
pub fn resolve_prop_name(prop: &Prop) -> Option<String> {
    match prop {
        Prop::Shorthand(ident) => Some(ident.sym.to_string()),
        Prop::KeyValue(kv) => prop_name_text(&kv.key),
        Prop::Assign(assign) => Some(assign.key.sym.to_string()),
        Prop::Getter(getter) => prop_name_text(&getter.key),
        Prop::Setter(setter) => prop_name_text(&setter.key),
        Prop::Method(method) => prop_name_text(&method.key),
    }
}

/// Extract the text of a property key.
///
/// Computed keys resolve to the identifier or literal inside the brackets, so
/// `{ [name]: v }` yields `name`.
pub fn prop_name_text(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|s| s.to_string()),
        PropName::Num(n) => Some(n.value.to_string()),
        PropName::BigInt(b) => Some(b.value.to_string()),
        PropName::Computed(computed) => computed_name(&computed.expr),
    }
}

fn computed_name(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
        Expr::Lit(Lit::Num(n)) => Some(n.value.to_string()),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
            .quasis
            .first()
            .and_then(|q| q.cooked.as_ref())
            .and_then(|s| s.as_str().map(|s| s.to_string())),
        Expr::Paren(paren) => computed_name(&paren.expr),
        _ => None,
    }
}
