// Use types re-exported in the parent module (fragment/mod.rs)
use super::{Fragment, SIGIL};

/// Query API for structural fragment checks
pub struct FragmentQuery;

impl FragmentQuery {
    /// Check whether a fragment is a macro name used with no arguments.
    ///
    /// The parser represents a zero-argument macro call as exactly two
    /// components: the name token and the auto-inserted line marker. Any
    /// argument pushes the component count past two, so this check never has
    /// to count arguments directly. Never fails; unrecognized shapes are
    /// simply not macro references.
    pub fn is_macro_reference(fragment: &Fragment) -> bool {
        Self::macro_reference_name(fragment).is_some()
    }

    /// The sigil-prefixed name of a zero-argument macro call, or `None` if
    /// the fragment is not shaped like one
    pub fn macro_reference_name(fragment: &Fragment) -> Option<&str> {
        let call = match fragment {
            Fragment::MacroCall(call) => call,
            _ => return None,
        };

        if call.components.len() != 2 {
            return None;
        }

        let name = match &call.components[0] {
            Fragment::Identifier(name) => name,
            _ => return None,
        };

        // A lone sigil cannot be a macro name
        if name.chars().count() < 2 || !name.starts_with(SIGIL) {
            return None;
        }

        match &call.components[1] {
            Fragment::LineMarker(_) => Some(name),
            _ => None,
        }
    }
}
