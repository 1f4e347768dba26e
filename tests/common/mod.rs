#![allow(dead_code)]

use pubmark::config::{Config, HostVersion};
use pubmark::error::{ErrorCollection, PubmarkError, Result};
use pubmark::expand::{Expander, PublicDecl};
use pubmark::extractor::extract_symbols;
use pubmark::fragment::Fragment;
use pubmark::lexer::Lexer;
use pubmark::parser::Parser;

/// Parse a single bare expression into a fragment
pub fn parse_fragment(code: &str) -> Result<Fragment> {
    let mut lexer = Lexer::new(code.to_string());
    let tokens = lexer.tokenize()?;
    Parser::new(tokens).parse_fragment()
}

/// Parse a bare expression and run the extractor on it
pub fn extract(code: &str) -> Result<Vec<String>> {
    let fragment = parse_fragment(code)?;
    extract_symbols(&fragment)
}

/// Expand a whole source text against a specific host version
pub fn expand_with_version(
    code: &str,
    major: u32,
    minor: u32,
) -> (Vec<PublicDecl>, ErrorCollection) {
    let config = Config {
        host_version: HostVersion::new(major, minor),
    };
    Expander::new(config).expand_unit(code)
}

/// Capture the error a source text produces on a supporting host
pub fn expand_error(code: &str) -> PubmarkError {
    let (_, errors) = expand_with_version(code, 1, 11);
    match errors.errors().first() {
        Some(error) => error.clone(),
        None => panic!("expected an error for {:?}, but expansion succeeded", code),
    }
}
