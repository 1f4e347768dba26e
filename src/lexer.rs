use crate::error::{ErrorKind, PubmarkError, Result, SourceLocation, Span};
use nonempty::NonEmpty;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    // Identifiers and literals
    Identifier(String),
    IntLiteral(i64),
    StringLiteral(String),

    // Punctuation
    At,
    LeftParen,
    RightParen,
    Comma,

    // Special
    Newline,
    Eof,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub line: usize,
    pub column: usize,
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: String) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the whole input. The trailing EOF token is always present,
    /// which is what makes the result nonempty.
    pub fn tokenize(&mut self) -> Result<NonEmpty<Token>> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.skip_blanks_and_comments();
            if self.is_at_end() {
                break;
            }
            tokens.push(self.next_token()?);
        }

        tokens.push(self.eof_token());
        match NonEmpty::from_vec(tokens) {
            Some(tokens) => Ok(tokens),
            // Unreachable: EOF was just pushed
            None => Ok(NonEmpty::new(self.eof_token())),
        }
    }

    fn next_token(&mut self) -> Result<Token> {
        let start_line = self.line;
        let start_column = self.column;
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Ok(self.eof_token()),
        };

        let token_type = match ch {
            '\n' => TokenType::Newline,
            '@' => TokenType::At,
            '(' => TokenType::LeftParen,
            ')' => TokenType::RightParen,
            ',' => TokenType::Comma,
            '"' => self.string_literal(start_line, start_column)?,
            _ if ch.is_ascii_digit() => self.int_literal(ch),
            _ if ch.is_alphabetic() || ch == '_' => self.identifier(ch),
            _ => {
                return Err(PubmarkError::new(
                    ErrorKind::InvalidCharacter,
                    format!("unexpected character `{}`", ch),
                )
                .with_span(Span::single(SourceLocation::new(
                    start_line,
                    start_column,
                ))));
            }
        };

        Ok(Token {
            token_type,
            line: start_line,
            column: start_column,
        })
    }

    fn string_literal(&mut self, start_line: usize, start_column: usize) -> Result<TokenType> {
        let mut value = String::new();

        loop {
            match self.advance() {
                Some('"') => return Ok(TokenType::StringLiteral(value)),
                Some('\n') | None => {
                    return Err(PubmarkError::new(
                        ErrorKind::UnterminatedString,
                        "string literal is missing a closing `\"`",
                    )
                    .with_span(Span::single(SourceLocation::new(
                        start_line,
                        start_column,
                    ))));
                }
                Some(ch) => value.push(ch),
            }
        }
    }

    fn int_literal(&mut self, first: char) -> TokenType {
        let mut digits = String::from(first);
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.advance();
        }
        TokenType::IntLiteral(digits.parse().unwrap_or(0))
    }

    fn identifier(&mut self, first: char) -> TokenType {
        let mut name = String::from(first);
        while let Some(ch) = self.peek() {
            if !ch.is_alphanumeric() && ch != '_' {
                break;
            }
            name.push(ch);
            self.advance();
        }
        TokenType::Identifier(name)
    }

    fn skip_blanks_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '#' => {
                    while let Some(ch) = self.peek() {
                        if ch == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn eof_token(&self) -> Token {
        Token {
            token_type: TokenType::Eof,
            line: self.line,
            column: self.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_types(source: &str) -> Vec<TokenType> {
        let mut lexer = Lexer::new(source.to_string());
        lexer
            .tokenize()
            .expect("tokenize should succeed")
            .into_iter()
            .map(|t| t.token_type)
            .collect()
    }

    #[test]
    fn test_tokenize_invocation() {
        assert_eq!(
            token_types("@public foo, @bar"),
            vec![
                TokenType::At,
                TokenType::Identifier("public".to_string()),
                TokenType::Identifier("foo".to_string()),
                TokenType::Comma,
                TokenType::At,
                TokenType::Identifier("bar".to_string()),
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            token_types("foo # trailing comment"),
            vec![TokenType::Identifier("foo".to_string()), TokenType::Eof]
        );
    }

    #[test]
    fn test_eof_is_always_present() {
        assert_eq!(token_types(""), vec![TokenType::Eof]);
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        let mut lexer = Lexer::new("\"oops".to_string());
        let err = lexer.tokenize().expect_err("should fail");
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
    }
}
