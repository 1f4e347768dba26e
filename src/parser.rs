use crate::error::{
    ErrorCollection, ErrorKind, PubmarkError, Result, SourceLocation, Span,
};
use crate::fragment::{CallFragment, Fragment, LiteralFragment, MacroCallFragment, PublicInvocation};
use crate::lexer::{Token, TokenType};
use nonempty::NonEmpty;

/// Recursive descent parser for the `@public` invocation surface.
///
/// Macro-call nodes are laid out the way the extractor expects them: name
/// token first, then an auto-inserted line marker, then any space-separated
/// arguments. Top-level comma-separated arguments collapse into a single
/// group, so `@public a, b` and `@public (a, b)` produce the same shape.
pub struct Parser {
    tokens: NonEmpty<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: NonEmpty<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse every invocation in a compilation unit, recovering at line
    /// boundaries so one bad line does not hide errors on the next
    pub fn parse_unit(&mut self) -> (Vec<PublicInvocation>, ErrorCollection) {
        let mut invocations = Vec::new();
        let mut errors = ErrorCollection::new();

        while !self.is_at_end() {
            if self.match_token(&TokenType::Newline) {
                continue;
            }
            match self.parse_invocation() {
                Ok(invocation) => invocations.push(invocation),
                Err(err) => {
                    errors.add(err);
                    self.synchronize();
                }
            }
        }

        (invocations, errors)
    }

    /// Parse one `@public …` invocation up to the end of its line
    pub fn parse_invocation(&mut self) -> Result<PublicInvocation> {
        while self.match_token(&TokenType::Newline) {}

        let location = self.current_location();
        self.consume(&TokenType::At, "expected `@public`")?;
        let macro_name = self.consume_identifier("expected a macro name after `@`")?;
        if macro_name != "public" {
            return Err(PubmarkError::new(
                ErrorKind::SyntaxError,
                format!("unknown macro `@{}`", macro_name),
            )
            .with_span(Span::single(location))
            .with_help("only `@public` invocations are understood here"));
        }

        if self.check_line_end() {
            return Err(PubmarkError::new(
                ErrorKind::UnexpectedEof,
                "expected at least one name after `@public`",
            )
            .with_span(Span::single(self.current_location())));
        }

        let mut arguments = vec![self.expression()?];
        while self.match_token(&TokenType::Comma) {
            arguments.push(self.expression()?);
        }

        if !self.check_line_end() {
            let token = self.peek().clone();
            return Err(PubmarkError::new(
                ErrorKind::UnexpectedToken,
                format!("expected end of line, found {}", describe(&token.token_type)),
            )
            .with_span(Span::single(SourceLocation::new(token.line, token.column))));
        }

        // A lone argument stays bare; a comma list becomes a group
        let argument = if arguments.len() == 1 {
            match arguments.pop() {
                Some(argument) => argument,
                None => Fragment::Group(Vec::new()),
            }
        } else {
            Fragment::Group(arguments)
        };

        Ok(PublicInvocation { argument, location })
    }

    /// Parse a single bare expression (test and tooling entry point)
    pub fn parse_fragment(&mut self) -> Result<Fragment> {
        while self.match_token(&TokenType::Newline) {}
        self.expression()
    }

    fn expression(&mut self) -> Result<Fragment> {
        let token = self.peek().clone();
        match &token.token_type {
            TokenType::At => self.macro_call(),
            TokenType::Identifier(name) => {
                let name = name.clone();
                self.advance();
                if self.check(&TokenType::LeftParen) {
                    self.finish_call(name)
                } else {
                    Ok(Fragment::Identifier(name))
                }
            }
            TokenType::LeftParen => self.group(),
            TokenType::IntLiteral(value) => {
                let value = *value;
                self.advance();
                Ok(Fragment::Literal(LiteralFragment::Int(value)))
            }
            TokenType::StringLiteral(value) => {
                let value = value.clone();
                self.advance();
                Ok(Fragment::Literal(LiteralFragment::String(value)))
            }
            other => Err(PubmarkError::new(
                ErrorKind::UnexpectedToken,
                format!("expected a name, found {}", describe(other)),
            )
            .with_span(Span::single(SourceLocation::new(token.line, token.column)))),
        }
    }

    fn macro_call(&mut self) -> Result<Fragment> {
        let location = self.current_location();
        self.consume(&TokenType::At, "expected `@`")?;
        let name = self.consume_identifier("expected a macro name after `@`")?;

        // Name token first, marker second, arguments after: a macro used
        // with no arguments keeps exactly two components
        let mut components = vec![
            Fragment::Identifier(format!("@{}", name)),
            Fragment::LineMarker(location),
        ];
        while self.starts_expression() {
            components.push(self.expression()?);
        }

        Ok(Fragment::MacroCall(MacroCallFragment { components }))
    }

    fn group(&mut self) -> Result<Fragment> {
        self.consume(&TokenType::LeftParen, "expected `(`")?;

        let mut elements = Vec::new();
        if !self.check(&TokenType::RightParen) {
            loop {
                elements.push(self.expression()?);
                if !self.match_token(&TokenType::Comma) {
                    break;
                }
                if self.check(&TokenType::RightParen) {
                    break;
                }
            }
        }

        self.consume(&TokenType::RightParen, "expected `)` to close the group")?;
        Ok(Fragment::Group(elements))
    }

    fn finish_call(&mut self, callee: String) -> Result<Fragment> {
        self.consume(&TokenType::LeftParen, "expected `(`")?;

        let mut args = Vec::new();
        if !self.check(&TokenType::RightParen) {
            loop {
                args.push(self.expression()?);
                if !self.match_token(&TokenType::Comma) {
                    break;
                }
            }
        }

        self.consume(&TokenType::RightParen, "expected `)` after call arguments")?;
        Ok(Fragment::Call(CallFragment { callee, args }))
    }

    fn starts_expression(&self) -> bool {
        matches!(
            self.peek().token_type,
            TokenType::At
                | TokenType::Identifier(_)
                | TokenType::LeftParen
                | TokenType::IntLiteral(_)
                | TokenType::StringLiteral(_)
        )
    }

    fn check_line_end(&self) -> bool {
        matches!(
            self.peek().token_type,
            TokenType::Newline | TokenType::Eof
        )
    }

    fn synchronize(&mut self) {
        while !self.is_at_end() {
            if self.match_token(&TokenType::Newline) {
                return;
            }
            self.advance();
        }
    }

    fn consume(&mut self, expected: &TokenType, message: &str) -> Result<()> {
        if self.check(expected) {
            self.advance();
            Ok(())
        } else {
            let token = self.peek();
            Err(PubmarkError::new(
                ErrorKind::UnexpectedToken,
                format!("{}, found {}", message, describe(&token.token_type)),
            )
            .with_span(Span::single(SourceLocation::new(token.line, token.column))))
        }
    }

    fn consume_identifier(&mut self, message: &str) -> Result<String> {
        let token = self.peek().clone();
        match token.token_type {
            TokenType::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            other => Err(PubmarkError::new(
                ErrorKind::UnexpectedToken,
                format!("{}, found {}", message, describe(&other)),
            )
            .with_span(Span::single(SourceLocation::new(token.line, token.column)))),
        }
    }

    fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, token_type: &TokenType) -> bool {
        &self.peek().token_type == token_type
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    // The token list always ends with EOF, so peeking never fails
    fn peek(&self) -> &Token {
        self.tokens
            .get(self.current)
            .unwrap_or_else(|| self.tokens.last())
    }

    fn current_location(&self) -> SourceLocation {
        let token = self.peek();
        SourceLocation::new(token.line, token.column)
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().token_type, TokenType::Eof)
    }
}

fn describe(token_type: &TokenType) -> String {
    match token_type {
        TokenType::Identifier(name) => format!("identifier `{}`", name),
        TokenType::IntLiteral(value) => format!("literal `{}`", value),
        TokenType::StringLiteral(value) => format!("literal `{:?}`", value),
        TokenType::At => "`@`".to_string(),
        TokenType::LeftParen => "`(`".to_string(),
        TokenType::RightParen => "`)`".to_string(),
        TokenType::Comma => "`,`".to_string(),
        TokenType::Newline => "end of line".to_string(),
        TokenType::Eof => "end of input".to_string(),
    }
}
