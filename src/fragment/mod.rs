//! Syntax fragment definitions
//!
//! This module contains the closed set of fragment shapes the public-marking
//! macro can receive as its argument, as laid out by the invocation parser.

pub mod query;

use crate::error::SourceLocation;
use serde::Serialize;
use std::fmt;

/// The sigil that prefixes macro-style names
pub const SIGIL: char = '@';

/// An already-parsed, immutable piece of invocation syntax
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Fragment {
    /// A bare name such as `foo`, or a sigil-prefixed token such as `@foo`
    Identifier(String),
    /// A tagged macro-invocation node, distinct from a plain call
    MacroCall(MacroCallFragment),
    /// A parenthesized, comma-separated group of fragments
    Group(Vec<Fragment>),
    /// A plain function call such as `foo()`
    Call(CallFragment),
    /// A source location marker inserted by the parser, never user-written
    LineMarker(SourceLocation),
    /// A literal value
    Literal(LiteralFragment),
}

/// A macro invocation as the parser lays it out: the name token first, then
/// the auto-inserted line marker, then any arguments. A macro used with no
/// arguments therefore always has exactly two components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroCallFragment {
    pub components: Vec<Fragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallFragment {
    pub callee: String,
    pub args: Vec<Fragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LiteralFragment {
    Int(i64),
    String(String),
}

impl Fragment {
    /// Human-readable tag for this fragment's shape, used in error messages
    pub fn shape_name(&self) -> &'static str {
        match self {
            Fragment::Identifier(_) => "identifier",
            Fragment::MacroCall(_) => "macro call",
            Fragment::Group(_) => "group",
            Fragment::Call(_) => "function call",
            Fragment::LineMarker(_) => "line marker",
            Fragment::Literal(_) => "literal",
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Identifier(name) => write!(f, "{}", name),
            Fragment::MacroCall(call) => {
                let mut first = true;
                for component in &call.components {
                    // Markers are parser bookkeeping, not surface syntax
                    if matches!(component, Fragment::LineMarker(_)) {
                        continue;
                    }
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", component)?;
                    first = false;
                }
                Ok(())
            }
            Fragment::Group(elements) => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, ")")
            }
            Fragment::Call(call) => {
                write!(f, "{}(", call.callee)?;
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Fragment::LineMarker(location) => write!(f, "#= {} =#", location),
            Fragment::Literal(LiteralFragment::Int(value)) => write!(f, "{}", value),
            Fragment::Literal(LiteralFragment::String(value)) => write!(f, "{:?}", value),
        }
    }
}

/// One parsed `@public` call: its argument fragment plus the call site the
/// emitted declaration is attributed to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicInvocation {
    pub argument: Fragment,
    pub location: SourceLocation,
}
