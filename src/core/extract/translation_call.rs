//! Classification of translation function calls: `t(...)` and `i18next.t(...)`.
//!
//! Callees are matched by spelling only. A local variable that shadows `t` is
//! still treated as the translation function, and an alias such as
//! `const translate = i18next.t` is not recognized.

use swc_common::SourceMap;
use swc_ecma_ast::{CallExpr, Callee, Expr, Lit, MemberProp, Tpl};

use crate::core::data::Reason;
use crate::core::extract::Outcome;
use crate::core::parsers::jsx::snippet_of;

/// Name of the bare translation function.
pub const TRANSLATE_FN: &str = "t";

/// Object whose `t` member is also a translation function.
pub const I18NEXT_OBJECT: &str = "i18next";

/// Returns true for `t(...)` and `i18next.t(...)`.
pub fn is_translation_callee(callee: &Callee) -> bool {
    let Callee::Expr(expr) = callee else {
        return false;
    };
    match strip_parens(expr) {
        Expr::Ident(ident) => ident.sym == TRANSLATE_FN,
        Expr::Member(member) => {
            matches!(
                (&*member.obj, &member.prop),
                (Expr::Ident(obj), MemberProp::Ident(prop))
                    if obj.sym == I18NEXT_OBJECT && prop.sym == TRANSLATE_FN
            )
        }
        _ => false,
    }
}

/// Classify a call expression.
///
/// Returns `None` for calls that are not translation calls and for translation
/// calls without arguments.
pub fn classify_call(call: &CallExpr, source_map: &SourceMap) -> Option<Outcome> {
    if !is_translation_callee(&call.callee) {
        return None;
    }
    let arg = call.args.first()?;

    let rejected = |reason| Outcome::Rejected {
        key: snippet_of(source_map, call.span),
        reason,
    };

    // `t(...keys)` is never a literal, whatever is spread
    if arg.spread.is_some() {
        return Some(rejected(Reason::UnsupportedArgument));
    }

    let outcome = match strip_parens(&arg.expr) {
        Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
            Some(value) => Outcome::Accepted(value.to_owned()),
            None => rejected(Reason::UnsupportedArgument),
        },
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => Outcome::AcceptedWithWarning {
            key: template_text(tpl),
            reason: Reason::TemplateWithoutExpressions,
        },
        Expr::Tpl(_) => rejected(Reason::TemplateWithExpressions),
        _ => rejected(Reason::UnsupportedArgument),
    };
    Some(outcome)
}

/// Skip grouping parentheses: `((expr))` is `expr`.
fn strip_parens(mut expr: &Expr) -> &Expr {
    while let Expr::Paren(paren) = expr {
        expr = &*paren.expr;
    }
    expr
}

/// Concatenated text of a template's literal segments.
fn template_text(tpl: &Tpl) -> String {
    tpl.quasis
        .iter()
        .map(|quasi| {
            quasi
                .cooked
                .as_ref()
                .and_then(|cooked| cooked.as_str())
                .unwrap_or(quasi.raw.as_str())
        })
        .collect()
}
