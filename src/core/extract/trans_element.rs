//! Classification of `<Trans>` markup elements.
//!
//! A `<Trans>` key comes either from a string-literal `i18nKey` attribute or,
//! without one, from the element's text when that text is its only child.

use swc_common::SourceMap;
use swc_ecma_ast::{
    JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement, JSXElementChild, JSXElementName,
};

use crate::core::data::Reason;
use crate::core::extract::Outcome;
use crate::core::parsers::jsx::snippet_of;

/// Tag name of the markup translation component.
pub const TRANS_COMPONENT: &str = "Trans";

/// Attribute carrying an explicit key on `<Trans>`.
pub const KEY_ATTRIBUTE: &str = "i18nKey";

/// Classify a JSX element. Returns `None` for anything that isn't `<Trans>`.
///
/// | `i18nKey="…"` | children            | outcome                                   |
/// |---------------|---------------------|-------------------------------------------|
/// | yes           | simple text or none | accept the attribute                      |
/// | yes           | anything else       | reject, keyed by the attribute            |
/// | no            | simple text         | accept the trimmed text                   |
/// | no            | anything else       | reject, keyed by the element's source     |
pub fn classify_trans(element: &JSXElement, source_map: &SourceMap) -> Option<Outcome> {
    if !is_trans(&element.opening.name) {
        return None;
    }

    let key_attr = key_attribute(&element.opening.attrs);
    let simple_text = simple_text(&element.children);

    let outcome = match (key_attr, simple_text) {
        (Some(key), Some(_)) => Outcome::Accepted(key),
        (Some(key), None) if element.children.is_empty() => Outcome::Accepted(key),
        (Some(key), None) => Outcome::Rejected {
            key,
            reason: Reason::ComplexTransChildren,
        },
        (None, Some(text)) => Outcome::Accepted(text),
        (None, None) => Outcome::Rejected {
            key: snippet_of(source_map, element.span),
            reason: Reason::MissingKeyOrComplexChildren,
        },
    };
    Some(outcome)
}

fn is_trans(name: &JSXElementName) -> bool {
    matches!(name, JSXElementName::Ident(ident) if ident.sym == TRANS_COMPONENT)
}

/// Value of the first `i18nKey` attribute, when that value is a plain string.
///
/// `i18nKey={"key"}` and `i18nKey={key}` both count as absent.
fn key_attribute(attrs: &[JSXAttrOrSpread]) -> Option<String> {
    let attr = attrs.iter().find_map(|attr| match attr {
        JSXAttrOrSpread::JSXAttr(attr)
            if matches!(&attr.name, JSXAttrName::Ident(name) if name.sym == KEY_ATTRIBUTE) =>
        {
            Some(attr)
        }
        _ => None,
    })?;

    match &attr.value {
        Some(JSXAttrValue::Str(s)) => s.value.as_str().map(str::to_owned),
        _ => None,
    }
}

/// Trimmed text of a sole, non-blank text child.
fn simple_text(children: &[JSXElementChild]) -> Option<String> {
    let [JSXElementChild::JSXText(text)] = children else {
        return None;
    };
    let trimmed = text.value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
