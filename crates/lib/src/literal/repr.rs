//! Quoting and escaping for literal text.
//!
//! The quoting rules follow the familiar Python `repr` conventions: single
//! quotes unless the text contains a single quote and no double quote,
//! backslash escapes for control characters, `b'..'` for byte strings.

use std::fmt::Write;

/// Quotes `text` as a string literal.
pub fn quote_str(text: &str) -> String {
    let quote = pick_quote(text.contains('\''), text.contains('"'));
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = u32::from(c);
                let _ = match code {
                    0..=0xff => write!(out, "\\x{code:02x}"),
                    0x100..=0xffff => write!(out, "\\u{code:04x}"),
                    _ => write!(out, "\\U{code:08x}"),
                };
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Quotes `bytes` as a byte-string literal.
pub fn quote_bytes(bytes: &[u8]) -> String {
    let quote = pick_quote(bytes.contains(&b'\''), bytes.contains(&b'"'));
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if char::from(b) == quote => {
                out.push('\\');
                out.push(quote);
            }
            0x20..=0x7e => out.push(char::from(b)),
            b => {
                let _ = write!(out, "\\x{b:02x}");
            }
        }
    }
    out.push(quote);
    out
}

fn pick_quote(has_single: bool, has_double: bool) -> char {
    if has_single && !has_double { '"' } else { '\'' }
}

/// Formats a float so that the literal parser reads back the same value.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{value:?}")
    }
}

/// Decodes the body of a quoted string literal (quotes already stripped).
///
/// Unknown escapes are kept verbatim, backslash included.
pub(crate) fn unescape_str(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = chars.next()?;
        match escaped {
            'x' => out.push(char::from_u32(take_hex(&mut chars, 2)?)?),
            'u' => out.push(char::from_u32(take_hex(&mut chars, 4)?)?),
            'U' => out.push(char::from_u32(take_hex(&mut chars, 8)?)?),
            '0'..='7' => out.push(char::from_u32(take_octal(escaped, &mut chars))?),
            other => match simple_escape(other) {
                Some(decoded) => out.push(char::from(decoded)),
                None => {
                    out.push('\\');
                    out.push(other);
                }
            },
        }
    }
    Some(out)
}

/// Decodes the body of a quoted byte-string literal (prefix and quotes stripped).
pub(crate) fn unescape_bytes(body: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_ascii() {
            return None;
        }
        if c != '\\' {
            out.push(u8::try_from(c).ok()?);
            continue;
        }
        let escaped = chars.next()?;
        match escaped {
            'x' => out.push(u8::try_from(take_hex(&mut chars, 2)?).ok()?),
            '0'..='7' => out.push(u8::try_from(take_octal(escaped, &mut chars)).ok()?),
            other => match simple_escape(other) {
                Some(decoded) => out.push(decoded),
                None => {
                    out.push(b'\\');
                    out.push(u8::try_from(other).ok()?);
                }
            },
        }
    }
    Some(out)
}

fn simple_escape(c: char) -> Option<u8> {
    Some(match c {
        '\\' => b'\\',
        '\'' => b'\'',
        '"' => b'"',
        'n' => b'\n',
        'r' => b'\r',
        't' => b'\t',
        'a' => 0x07,
        'b' => 0x08,
        'f' => 0x0c,
        'v' => 0x0b,
        _ => return None,
    })
}

fn take_hex(chars: &mut impl Iterator<Item = char>, digits: usize) -> Option<u32> {
    let mut code = 0;
    for _ in 0..digits {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    Some(code)
}

fn take_octal(first: char, chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u32 {
    let mut code = first.to_digit(8).unwrap_or(0);
    for _ in 0..2 {
        match chars.peek().and_then(|c| c.to_digit(8)) {
            Some(digit) => {
                code = code * 8 + digit;
                chars.next();
            }
            None => break,
        }
    }
    code
}
