//! Numeric-aware version ordering.
//!
//! Versions are split on `.` and compared segment by segment. Inside a
//! segment, runs of digits compare as numbers and everything else compares
//! as text, so `10.2.0 > 9.9.9` and `1.0.0-rc10 > 1.0.0-rc9`. A digit run
//! sorts below a text run at the same position, so `2` vs `x1` has a
//! well-defined answer and the ordering stays total.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Number(&'a str),
    Text(&'a str),
}

fn tokenize(segment: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut digits = None;

    for (i, c) in segment.char_indices() {
        let is_digit = c.is_ascii_digit();
        match digits {
            Some(d) if d != is_digit => {
                tokens.push(token(&segment[start..i], d));
                start = i;
            }
            _ => {}
        }
        digits = Some(is_digit);
    }
    if let Some(d) = digits {
        tokens.push(token(&segment[start..], d));
    }
    tokens
}

fn token(s: &str, digits: bool) -> Token<'_> {
    if digits {
        Token::Number(s)
    } else {
        Token::Text(s)
    }
}

/// Compares two digit strings by value without parsing, so arbitrarily long
/// runs never overflow.
fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_tokens(a: &Token<'_>, b: &Token<'_>) -> Ordering {
    match (a, b) {
        (Token::Number(x), Token::Number(y)) => compare_numbers(x, y),
        (Token::Text(x), Token::Text(y)) => x.cmp(y),
        (Token::Number(_), Token::Text(_)) => Ordering::Less,
        (Token::Text(_), Token::Number(_)) => Ordering::Greater,
    }
}

fn compare_segments(a: &str, b: &str) -> Ordering {
    let left = tokenize(a);
    let right = tokenize(b);
    for (x, y) in left.iter().zip(right.iter()) {
        let ord = compare_tokens(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    left.len().cmp(&right.len())
}

/// Ascending numeric-aware comparison of two version strings.
///
/// Distinct strings never compare equal: versions that only differ in
/// leading zeros (`1.01` vs `1.1`) fall back to plain string order.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => {
                let ord = compare_segments(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return a.cmp(b),
        }
    }
}

/// Sorts version-bearing items newest first.
pub fn sort_descending<T, F>(items: &mut [T], version_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| compare_versions(version_of(b), version_of(a)));
}
