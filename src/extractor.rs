//! The symbol-list extractor
//!
//! Converts one argument fragment into the ordered list of names a public
//! declaration should cover, or fails with a single descriptive error. This
//! is a pure function of its input: nothing is mutated, nothing is cached,
//! and running it twice on the same fragment gives the same answer.

use crate::error::{ErrorKind, PubmarkError, Result};
use crate::fragment::query::FragmentQuery;
use crate::fragment::Fragment;

const USAGE_HINT: &str =
    "expected a comma-separated list of identifiers and/or macro names, e.g. `@public foo, @bar, baz`";

/// Extract the symbol names a fragment designates, in order.
///
/// Accepts a bare identifier, a zero-argument macro reference, or a group
/// mixing both. Duplicates are passed through untouched and an empty group
/// yields an empty list.
pub fn extract_symbols(fragment: &Fragment) -> Result<Vec<String>> {
    match fragment {
        Fragment::Identifier(name) => Ok(vec![name.clone()]),
        Fragment::MacroCall(_) => match FragmentQuery::macro_reference_name(fragment) {
            Some(name) => Ok(vec![name.to_string()]),
            None => Err(unsupported_shape(fragment)),
        },
        Fragment::Group(elements) => {
            let mut names = Vec::with_capacity(elements.len());
            for element in elements {
                match element {
                    Fragment::Identifier(name) => names.push(name.clone()),
                    other => match FragmentQuery::macro_reference_name(other) {
                        Some(name) => names.push(name.to_string()),
                        None => return Err(unsupported_element(other)),
                    },
                }
            }
            Ok(names)
        }
        Fragment::Call(_) | Fragment::LineMarker(_) | Fragment::Literal(_) => {
            Err(unsupported_shape(fragment))
        }
    }
}

fn unsupported_shape(fragment: &Fragment) -> PubmarkError {
    PubmarkError::new(
        ErrorKind::MalformedArgument,
        format!(
            "cannot mark {} `{}` as public",
            fragment.shape_name(),
            fragment
        ),
    )
    .with_help(USAGE_HINT)
}

fn unsupported_element(element: &Fragment) -> PubmarkError {
    PubmarkError::new(
        ErrorKind::MalformedArgument,
        format!(
            "unexpected {} `{}` in public name list",
            element.shape_name(),
            element
        ),
    )
    .with_help(USAGE_HINT)
}
