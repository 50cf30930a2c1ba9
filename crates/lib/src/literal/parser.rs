//! Recursive-descent parser producing [`Literal`] trees.

use super::Literal;
use super::errors::{ParseError, Span};
use super::lexer::{SpannedToken, Token};

type Result<T> = std::result::Result<T, ParseError>;

/// Deepest nesting of lists, tuples and dicts accepted before parsing stops.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser over a token stream produced by [`super::lexer::tokenize`]
pub struct Parser<'a> {
    tokens: &'a [SpannedToken],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [SpannedToken]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Peek at current token
    fn peek(&self) -> Option<&'a SpannedToken> {
        self.tokens.get(self.pos)
    }

    /// Advance to next token
    fn advance(&mut self) -> Option<&'a SpannedToken> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Check if current token matches expected
    fn check(&self, expected: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(&t.token) == std::mem::discriminant(expected))
    }

    /// Consume token if it matches
    fn consume(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn current_span(&self) -> Span {
        self.peek().map(|t| t.span).unwrap_or_default()
    }

    fn unexpected(&self, wanted: &str) -> ParseError {
        let found = self
            .peek()
            .map_or_else(|| Token::Eof.describe(), |t| t.token.describe());
        ParseError::Parser {
            span: self.current_span(),
            message: format!("expected {wanted}, found {found}"),
        }
    }

    /// Expect a token, error if not found
    fn expect(&mut self, expected: Token) -> Result<Span> {
        if self.check(&expected) {
            let span = self.current_span();
            self.pos += 1;
            Ok(span)
        } else {
            Err(self.unexpected(&expected.describe()))
        }
    }

    /// Parse the entire input as a single literal expression
    pub fn parse(&mut self) -> Result<Literal> {
        let value = self.parse_value()?;
        if !self.check(&Token::Eof) {
            return Err(self.unexpected("end of input"));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Literal> {
        let Some(spanned) = self.peek() else {
            return Err(self.unexpected("a value"));
        };
        match &spanned.token {
            Token::None => {
                self.advance();
                Ok(Literal::None)
            }
            Token::True => {
                self.advance();
                Ok(Literal::Bool(true))
            }
            Token::False => {
                self.advance();
                Ok(Literal::Bool(false))
            }
            Token::Int(_) | Token::Float(_) | Token::Inf | Token::Nan => self.parse_number(false),
            Token::Minus => {
                self.advance();
                self.parse_number(true)
            }
            Token::Plus => {
                self.advance();
                self.parse_number(false)
            }
            Token::Str(_) | Token::Bytes(_) => self.parse_strings(),
            Token::LBracket => self.nested(|parser| {
                parser.advance();
                let (items, _) = parser.parse_items(&Token::RBracket)?;
                Ok(Literal::List(items))
            }),
            Token::LParen => self.nested(Self::parse_parenthesized),
            Token::LBrace => self.nested(Self::parse_dict),
            Token::Name(name) => Err(ParseError::Parser {
                span: spanned.span,
                message: format!("'{name}' is not a literal"),
            }),
            _ => Err(self.unexpected("a value")),
        }
    }

    /// Runs `parse` one container level deeper, failing past [`MAX_NESTING_DEPTH`].
    fn nested(&mut self, parse: impl FnOnce(&mut Self) -> Result<Literal>) -> Result<Literal> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::Parser {
                span: self.current_span(),
                message: format!("nesting too deep (limit {MAX_NESTING_DEPTH})"),
            });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses one numeric token; `negative` reflects a preceding `-`.
    fn parse_number(&mut self, negative: bool) -> Result<Literal> {
        let Some(spanned) = self.peek() else {
            return Err(self.unexpected("a number"));
        };
        let literal = match &spanned.token {
            Token::Int(digits) => {
                let text = if negative {
                    format!("-{digits}")
                } else {
                    digits.clone()
                };
                let value = text.parse::<i64>().map_err(|_| ParseError::Parser {
                    span: spanned.span,
                    message: format!("integer {text} does not fit in 64 bits"),
                })?;
                Literal::Int(value)
            }
            Token::Float(value) => Literal::Float(if negative { -value } else { *value }),
            Token::Inf => Literal::Float(if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Token::Nan => Literal::Float(f64::NAN),
            _ => return Err(self.unexpected("a number after the sign")),
        };
        self.advance();
        Ok(literal)
    }

    /// Parses one or more adjacent string literals, concatenating them.
    fn parse_strings(&mut self) -> Result<Literal> {
        let mut result: Option<Literal> = None;
        while let Some(spanned) = self.peek() {
            let next = match (&spanned.token, result.take()) {
                (Token::Str(s), None) => Literal::Str(s.clone()),
                (Token::Bytes(b), None) => Literal::Bytes(b.clone()),
                (Token::Str(s), Some(Literal::Str(mut acc))) => {
                    acc.push_str(s);
                    Literal::Str(acc)
                }
                (Token::Bytes(b), Some(Literal::Bytes(mut acc))) => {
                    acc.extend_from_slice(b);
                    Literal::Bytes(acc)
                }
                (Token::Str(_) | Token::Bytes(_), Some(_)) => {
                    return Err(ParseError::Parser {
                        span: spanned.span,
                        message: "cannot mix bytes and non-bytes literals".to_string(),
                    });
                }
                (_, done) => {
                    result = done;
                    break;
                }
            };
            result = Some(next);
            self.advance();
        }
        result.ok_or_else(|| self.unexpected("a string"))
    }

    /// Parses comma-separated values up to `close`, consuming it.
    ///
    /// Returns the items and whether a comma was seen.
    fn parse_items(&mut self, close: &Token) -> Result<(Vec<Literal>, bool)> {
        let mut items = Vec::new();
        let mut saw_comma = false;
        loop {
            if self.consume(close) {
                return Ok((items, saw_comma));
            }
            items.push(self.parse_value()?);
            if self.consume(&Token::Comma) {
                saw_comma = true;
                continue;
            }
            if self.consume(close) {
                return Ok((items, saw_comma));
            }
            return Err(self.unexpected(&format!("',' or {}", close.describe())));
        }
    }

    fn parse_parenthesized(&mut self) -> Result<Literal> {
        self.expect(Token::LParen)?;
        let (mut items, saw_comma) = self.parse_items(&Token::RParen)?;
        if items.len() == 1 && !saw_comma {
            // Plain grouping: `(x)` is just `x`
            return Ok(items.remove(0));
        }
        Ok(Literal::Tuple(items))
    }

    fn parse_dict(&mut self) -> Result<Literal> {
        self.expect(Token::LBrace)?;
        let mut entries = Vec::new();
        loop {
            if self.consume(&Token::RBrace) {
                return Ok(Literal::Dict(entries));
            }
            let key_span = self.current_span();
            let key = match self.parse_value()? {
                Literal::Str(key) => key,
                other => {
                    return Err(ParseError::Parser {
                        span: key_span,
                        message: format!("mapping keys must be strings, found {}", other.type_name()),
                    });
                }
            };
            self.expect(Token::Colon)?;
            let value = self.parse_value()?;
            entries.push((key, value));
            if self.consume(&Token::Comma) {
                continue;
            }
            if self.consume(&Token::RBrace) {
                return Ok(Literal::Dict(entries));
            }
            return Err(self.unexpected("',' or '}'"));
        }
    }
}
