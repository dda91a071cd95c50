//! Text codec for the canonical literal syntax.
//!
//! Ranges print as `empty`, `[lo,hi)`, `(lo,hi]`, `[lo,hi]`, or `(lo,hi)`
//! with either bound omissible for unbounded; multiranges wrap
//! comma-separated range literals in `{`/`}`. Values that are empty or
//! contain delimiters, quotes, backslashes, or whitespace are
//! double-quoted; output escapes `"` and `\` with a backslash, input also
//! accepts doubled quotes. Element encoding is delegated to the subtype.


use crate::{
    bound::Bound, error::ParseError, multirange::Multirange, range::Range, subtype::Subtype,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

// ---- formatting --------------------------------------------------------

fn needs_quoting(text: &str) -> bool {
    text.is_empty()
        || text.chars().any(|ch| {
            ch.is_whitespace()
                || matches!(ch, ',' | '"' | '\\' | '(' | ')' | '[' | ']' | '{' | '}')
        })
}

fn fmt_value(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    if !needs_quoting(text) {
        return f.write_str(text);
    }

    f.write_char('"')?;
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            f.write_char('\\')?;
        }
        f.write_char(ch)?;
    }
    f.write_char('"')
}

impl<T: Subtype> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((lower, upper)) = self.bounds() else {
            return f.write_str("empty");
        };

        match lower {
            Bound::Unbounded => f.write_char('(')?,
            Bound::Inclusive(value) => {
                f.write_char('[')?;
                fmt_value(f, &value.format())?;
            }
            Bound::Exclusive(value) => {
                f.write_char('(')?;
                fmt_value(f, &value.format())?;
            }
        }

        f.write_char(',')?;

        match upper {
            Bound::Unbounded => f.write_char(')'),
            Bound::Inclusive(value) => {
                fmt_value(f, &value.format())?;
                f.write_char(']')
            }
            Bound::Exclusive(value) => {
                fmt_value(f, &value.format())?;
                f.write_char(')')
            }
        }
    }
}

impl<T: Subtype> fmt::Display for Multirange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (index, range) in self.ranges().iter().enumerate() {
            if index > 0 {
                f.write_char(',')?;
            }
            write!(f, "{range}")?;
        }
        f.write_char('}')
    }
}

// ---- parsing -----------------------------------------------------------

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.advance() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(self.error_at(
                format!("expected {expected:?}, found {ch:?}"),
                self.pos - 1,
            )),
            None => Err(self.error_at(format!("expected {expected:?}, found end of input"), self.pos)),
        }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        self.error_at(message, self.pos)
    }

    fn error_at(&self, message: impl Into<String>, position: usize) -> ParseError {
        ParseError::malformed(message, position)
    }

    /// Everything consumed; trailing whitespace allowed.
    fn finish(mut self) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.peek().is_some() {
            return Err(self.error("unexpected trailing characters"));
        }
        Ok(())
    }
}

/// One bound value, stopping before the delimiter. `None` means the bound
/// was omitted (unbounded); a quoted value is `Some` even when the quoted
/// text is empty.
fn scan_bound_value(scanner: &mut Scanner) -> Result<Option<String>, ParseError> {
    if scanner.peek() == Some('"') {
        scanner.advance();
        let mut out = String::new();
        loop {
            match scanner.advance() {
                Some('\\') => match scanner.advance() {
                    Some(escaped) => out.push(escaped),
                    None => return Err(scanner.error("unterminated quoted value")),
                },
                Some('"') => {
                    // doubled quote is a literal quote
                    if scanner.peek() == Some('"') {
                        scanner.advance();
                        out.push('"');
                    } else {
                        return Ok(Some(out));
                    }
                }
                Some(ch) => out.push(ch),
                None => return Err(scanner.error("unterminated quoted value")),
            }
        }
    }

    let mut out = String::new();
    while let Some(ch) = scanner.peek() {
        if matches!(ch, ',' | ')' | ']') {
            break;
        }
        out.push(ch);
        scanner.advance();
    }

    if out.is_empty() { Ok(None) } else { Ok(Some(out)) }
}

fn parse_bound<T: Subtype>(raw: Option<&str>, inclusive: bool) -> Result<Bound<T>, ParseError> {
    match raw {
        None => Ok(Bound::Unbounded),
        Some(text) => {
            let value = T::parse(text)?;
            Ok(if inclusive {
                Bound::Inclusive(value)
            } else {
                Bound::Exclusive(value)
            })
        }
    }
}

fn parse_range_body<T: Subtype>(
    scanner: &mut Scanner,
    allow_empty: bool,
) -> Result<Range<T>, ParseError> {
    if allow_empty && scanner.peek().is_some_and(|ch| ch.is_ascii_alphabetic()) {
        let start = scanner.pos;
        let mut word = String::new();
        while let Some(ch) = scanner.peek() {
            if !ch.is_ascii_alphabetic() {
                break;
            }
            word.push(ch);
            scanner.advance();
        }
        if word.eq_ignore_ascii_case("empty") {
            return Ok(Range::empty());
        }
        return Err(scanner.error_at(format!("expected range literal, found {word:?}"), start));
    }

    let lower_inclusive = match scanner.peek() {
        Some('[') => true,
        Some('(') => false,
        _ => return Err(scanner.error("expected '[' or '('")),
    };
    scanner.advance();

    let lower_raw = scan_bound_value(scanner)?;
    scanner.expect(',')?;
    let upper_raw = scan_bound_value(scanner)?;

    let upper_inclusive = match scanner.advance() {
        Some(']') => true,
        Some(')') => false,
        Some(ch) => {
            return Err(scanner.error_at(
                format!("expected ']' or ')', found {ch:?}"),
                scanner.pos - 1,
            ));
        }
        None => return Err(scanner.error("unexpected end of input")),
    };

    let lower = parse_bound(lower_raw.as_deref(), lower_inclusive)?;
    let upper = parse_bound(upper_raw.as_deref(), upper_inclusive)?;

    Range::new(lower, upper).map_err(Into::into)
}

/// Parse one range literal.
pub fn parse_range<T: Subtype>(input: &str) -> Result<Range<T>, ParseError> {
    let mut scanner = Scanner::new(input);
    scanner.skip_whitespace();
    let range = parse_range_body(&mut scanner, true)?;
    scanner.finish()?;
    Ok(range)
}

/// Parse one multirange literal. Members must be bracketed range
/// literals; `empty` is not a valid member, and `{}` is the empty
/// multirange.
pub fn parse_multirange<T: Subtype>(input: &str) -> Result<Multirange<T>, ParseError> {
    let mut scanner = Scanner::new(input);
    scanner.skip_whitespace();
    scanner.expect('{')?;
    scanner.skip_whitespace();

    let mut members = Vec::new();
    if scanner.peek() == Some('}') {
        scanner.advance();
    } else {
        loop {
            members.push(parse_range_body(&mut scanner, false)?);
            scanner.skip_whitespace();
            match scanner.advance() {
                Some(',') => scanner.skip_whitespace(),
                Some('}') => break,
                Some(ch) => {
                    return Err(scanner.error_at(
                        format!("expected ',' or '}}', found {ch:?}"),
                        scanner.pos - 1,
                    ));
                }
                None => return Err(scanner.error("unexpected end of input")),
            }
        }
    }

    scanner.finish()?;
    Ok(Multirange::from_ranges(members))
}

impl<T: Subtype> FromStr for Range<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s)
    }
}

impl<T: Subtype> FromStr for Multirange<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_multirange(s)
    }
}

// ---- serde (canonical text form) ---------------------------------------

impl<T: Subtype> Serialize for Range<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: Subtype> Deserialize<'de> for Range<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

impl<T: Subtype> Serialize for Multirange<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: Subtype> Deserialize<'de> for Multirange<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
