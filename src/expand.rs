//! Expansion-time dispatch for `@public` invocations
//!
//! Decides once, from the host version, whether a native public declaration
//! can be emitted. When it can, the extractor validates the argument and the
//! resulting declaration is attributed to the call site. When it cannot, the
//! invocation is discarded without validation: old hosts never fail on input
//! that a newer host would reject. That asymmetry is deliberate and matches
//! the original shim.

use crate::config::Config;
use crate::debug_println;
use crate::error::{ErrorCollection, Result, SourceLocation};
use crate::extractor::extract_symbols;
use crate::fragment::PublicInvocation;
use crate::lexer::Lexer;
use crate::parser::Parser;
use serde::Serialize;

/// A native "declare these names public" statement, attributed to the
/// lexical scope of the invocation it was expanded from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicDecl {
    pub names: Vec<String>,
    pub location: SourceLocation,
}

pub struct Expander {
    config: Config,
}

impl Expander {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Expand one invocation: a declaration on supporting hosts, nothing on
    /// hosts without the native construct
    pub fn expand(&self, invocation: &PublicInvocation) -> Result<Option<PublicDecl>> {
        if !self.config.host_version.supports_public_keyword() {
            debug_println!(
                "DEBUG: host {} lacks a public declaration, discarding invocation at {}",
                self.config.host_version,
                invocation.location
            );
            return Ok(None);
        }

        let names = extract_symbols(&invocation.argument)?;
        Ok(Some(PublicDecl {
            names,
            location: invocation.location.clone(),
        }))
    }

    /// Expand every invocation in a source text, collecting all errors
    /// instead of stopping at the first
    pub fn expand_unit(&self, source: &str) -> (Vec<PublicDecl>, ErrorCollection) {
        let mut lexer = Lexer::new(source.to_string());
        let tokens = match lexer.tokenize() {
            Ok(tokens) => tokens,
            Err(err) => {
                let mut errors = ErrorCollection::new();
                errors.add(err);
                return (Vec::new(), errors);
            }
        };

        let (invocations, mut errors) = Parser::new(tokens).parse_unit();

        let mut declarations = Vec::new();
        for invocation in &invocations {
            match self.expand(invocation) {
                Ok(Some(declaration)) => declarations.push(declaration),
                Ok(None) => {}
                Err(err) => errors.add(err),
            }
        }

        (declarations, errors)
    }
}
