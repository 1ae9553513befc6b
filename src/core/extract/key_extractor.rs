//! AST visitor that collects translation keys from calls to the translation function.
//!
//! Recognized call shapes, with `t` as the configured function name:
//!
//! ```ignore
//! t("home.title")                       // key "home.title"
//! i18n.t("home.title")                  // method-style call, same key
//! t(`Hello ${name}`)                    // key "Hello ${}"
//! t("items", { count: n, unit })        // plural, params {count, unit}
//! t("title", { context: "admin" })      // context "admin" (when enabled)
//! t(keyVariable)                        // skipped, not statically known
//! ```

use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, MemberProp, Module, PropOrSpread};
use swc_ecma_visit::{Visit, VisitWith};

use super::prop_name::resolve_prop_name;
use crate::core::keys::{DEFAULT_CONTEXT, ExtractionResult, KeyMetadata, TEMPLATE_PLACEHOLDER};

/// Option that turns a key into a plural key.
const COUNT_OPTION: &str = "count";

/// Option that moves a key into another context.
const CONTEXT_OPTION: &str = "context";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Name of the translation function (`t`).
    pub function_name: String,
    /// Whether `context` options partition keys into separate files.
    pub contexts: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            function_name: "t".to_string(),
            contexts: false,
        }
    }
}

pub struct KeyExtractor<'a> {
    options: &'a ExtractOptions,
    result: ExtractionResult,
}

impl<'a> KeyExtractor<'a> {
    pub fn new(options: &'a ExtractOptions) -> Self {
        Self {
            options,
            result: ExtractionResult::new(),
        }
    }

    /// Walk a module and return every key found in it.
    pub fn extract(mut self, module: &Module) -> ExtractionResult {
        self.visit_module(module);
        self.result
    }

    fn collect_call(&mut self, node: &CallExpr) {
        if callee_name(&node.callee) != Some(self.options.function_name.as_str()) {
            return;
        }

        let Some(key_arg) = node.args.first() else {
            return;
        };
        let Some(key) = static_key(key_arg) else {
            return;
        };

        let mut metadata = KeyMetadata::default();
        let mut context = DEFAULT_CONTEXT.to_string();

        if let Some(ExprOrSpread { spread: None, expr }) = node.args.get(1)
            && let Expr::Object(options) = unwrap_parens(expr)
        {
            for prop in &options.props {
                let PropOrSpread::Prop(prop) = prop else {
                    continue;
                };
                let Some(name) = resolve_prop_name(prop) else {
                    continue;
                };

                match name.as_str() {
                    COUNT_OPTION => {
                        metadata.plural = true;
                        metadata.params.insert(name);
                    }
                    CONTEXT_OPTION if self.options.contexts => {
                        if let swc_ecma_ast::Prop::KeyValue(kv) = &**prop
                            && let Some(value) = string_literal(&kv.value)
                        {
                            context = value;
                        }
                    }
                    _ => {
                        metadata.params.insert(name);
                    }
                }
            }
        }

        self.result.insert(&context, key, metadata);
    }
}

impl Visit for KeyExtractor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.collect_call(node);
        // Keys may be nested: t("outer", { inner: t("inner") })
        node.visit_children_with(self);
    }
}

/// Name of the function being called: `t(...)` gives `t`, `i18n.t(...)` gives `t`.
fn callee_name(callee: &Callee) -> Option<&str> {
    let Callee::Expr(expr) = callee else {
        return None;
    };
    match unwrap_parens(expr) {
        Expr::Ident(ident) => Some(ident.sym.as_str()),
        Expr::Member(member) => match &member.prop {
            MemberProp::Ident(prop) => Some(prop.sym.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Key text of the first argument, if it is statically known.
fn static_key(arg: &ExprOrSpread) -> Option<String> {
    if arg.spread.is_some() {
        return None;
    }
    match unwrap_parens(&arg.expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
        Expr::Tpl(tpl) => Some(
            tpl.quasis
                .iter()
                .map(|quasi| {
                    quasi
                        .cooked
                        .as_ref()
                        .and_then(|cooked| cooked.as_str())
                        .unwrap_or(quasi.raw.as_str())
                })
                .collect::<Vec<_>>()
                .join(TEMPLATE_PLACEHOLDER),
        ),
        _ => None,
    }
}

fn string_literal(expr: &Expr) -> Option<String> {
    match unwrap_parens(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}
