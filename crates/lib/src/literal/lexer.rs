//! Tokenizer for literal text.

use logos::Logos;

use super::errors::{ParseError, Span};
use super::repr::{unescape_bytes, unescape_str};

/// Tokens of the literal grammar
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    // Keywords
    #[token("None")]
    None,
    #[token("True")]
    True,
    #[token("False")]
    False,
    #[token("inf")]
    Inf,
    #[token("nan")]
    Nan,

    // Literals
    /// Unsigned digits; the parser applies the sign before narrowing to i64
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),

    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    #[regex(r"'([^'\\\n]|\\.)*'", |lex| quoted_str(lex.slice()))]
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| quoted_str(lex.slice()))]
    Str(String),

    #[regex(r"[bB]'([^'\\\n]|\\.)*'", |lex| quoted_bytes(lex.slice()))]
    #[regex(r#"[bB]"([^"\\\n]|\\.)*""#, |lex| quoted_bytes(lex.slice()))]
    Bytes(Vec<u8>),

    /// Any bare word that is not a keyword; never a valid literal
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),

    // Signs
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Punctuation
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // End of input
    Eof,
}

fn quoted_str(slice: &str) -> Option<String> {
    unescape_str(slice.get(1..slice.len().checked_sub(1)?)?)
}

fn quoted_bytes(slice: &str) -> Option<Vec<u8>> {
    unescape_bytes(slice.get(2..slice.len().checked_sub(1)?)?)
}

impl Token {
    /// Short human description used in parser error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::None => "'None'".to_string(),
            Token::True => "'True'".to_string(),
            Token::False => "'False'".to_string(),
            Token::Inf => "'inf'".to_string(),
            Token::Nan => "'nan'".to_string(),
            Token::Int(digits) => format!("integer {digits}"),
            Token::Float(value) => format!("float {value}"),
            Token::Str(_) => "string".to_string(),
            Token::Bytes(_) => "bytes".to_string(),
            Token::Name(name) => format!("name '{name}'"),
            Token::Minus => "'-'".to_string(),
            Token::Plus => "'+'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::LBracket => "'['".to_string(),
            Token::RBracket => "']'".to_string(),
            Token::LBrace => "'{'".to_string(),
            Token::RBrace => "'}'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Colon => "':'".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// A token with its source span
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}

/// Splits `source` into tokens, terminated by [`Token::Eof`].
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, ParseError> {
    let mut lex = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token_result) = lex.next() {
        let span = Span::new(lex.span().start, lex.span().end);
        match token_result {
            Ok(token) => tokens.push(SpannedToken::new(token, span)),
            Err(()) => {
                let text = lex.slice();
                let message = if text.starts_with(['\'', '"']) || text.starts_with(['b', 'B']) {
                    format!("malformed string literal {text}")
                } else {
                    format!("unexpected {text:?}")
                };
                return Err(ParseError::Lexer { span, message });
            }
        }
    }

    tokens.push(SpannedToken::new(
        Token::Eof,
        Span::new(source.len(), source.len()),
    ));
    Ok(tokens)
}
