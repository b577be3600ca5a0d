//! Whitespace-separated problem input and answer formatting.
//!
//! The input format is `N S` followed by `N` items. `N` is a non-negative
//! count, `S` the 64-bit threshold, and each item a 32-bit signed integer.
//! Tokens after the `N`th item are ignored.

use std::io::Read;
use std::str::FromStr;

use crate::error::{Result, RunError};
use crate::subsequence::Subsequence;

/// One parsed instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    pub items: Vec<i32>,
    pub max_sum: i64,
}

fn parse_token<T: FromStr>(position: usize, token: &str, expected: &'static str) -> Result<T> {
    token.parse::<T>().map_err(|_| RunError::InvalidToken {
        position,
        token: token.to_string(),
        expected,
    })
}

pub fn parse_instance(text: &str) -> Result<ProblemInstance> {
    let mut tokens = text.split_ascii_whitespace().enumerate();

    let (pos, n) = tokens
        .next()
        .ok_or(RunError::MissingHeader { field: "N" })?;
    let n: usize = parse_token(pos, n, "non-negative count")?;

    let (pos, s) = tokens
        .next()
        .ok_or(RunError::MissingHeader { field: "S" })?;
    let max_sum: i64 = parse_token(pos, s, "64-bit integer")?;

    let mut items = Vec::with_capacity(n.min(1 << 20));
    for (pos, token) in tokens.take(n) {
        items.push(parse_token(pos, token, "32-bit integer")?);
    }
    if items.len() < n {
        return Err(RunError::MissingItems {
            expected: n,
            found: items.len(),
        });
    }

    Ok(ProblemInstance { items, max_sum })
}

/// Read the whole of `reader` and parse it.
pub fn read_instance<R: Read>(mut reader: R) -> Result<ProblemInstance> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_instance(&text)
}

/// `"{length} {start + 1}"`, plus `" {sum}"` when `with_sum` is set.
pub fn format_answer(best: &Subsequence, with_sum: bool) -> String {
    if with_sum {
        format!("{} {} {}", best.length, best.one_based_start(), best.sum)
    } else {
        format!("{} {}", best.length, best.one_based_start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_items_across_lines() {
        let inst = parse_instance("5 0\n1 -2 3\n-4 5\n").unwrap();
        assert_eq!(inst.max_sum, 0);
        assert_eq!(inst.items, vec![1, -2, 3, -4, 5]);
    }

    #[test]
    fn zero_items() {
        let inst = parse_instance("0 -7").unwrap();
        assert!(inst.items.is_empty());
        assert_eq!(inst.max_sum, -7);
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let inst = parse_instance("2 10 4 4 99 junk").unwrap();
        assert_eq!(inst.items, vec![4, 4]);
    }

    #[test]
    fn missing_header_values() {
        assert!(matches!(
            parse_instance("   "),
            Err(RunError::MissingHeader { field: "N" })
        ));
        assert!(matches!(
            parse_instance("3"),
            Err(RunError::MissingHeader { field: "S" })
        ));
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(matches!(
            parse_instance("-1 5"),
            Err(RunError::InvalidToken { position: 0, .. })
        ));
    }

    #[test]
    fn item_out_of_i32_range_is_rejected() {
        let err = parse_instance("2 0 1 3000000000").unwrap_err();
        assert!(matches!(err, RunError::InvalidToken { position: 3, .. }));
    }

    #[test]
    fn short_input_reports_counts() {
        assert!(matches!(
            parse_instance("4 1 1 2"),
            Err(RunError::MissingItems {
                expected: 4,
                found: 2
            })
        ));
    }

    #[test]
    fn reads_from_any_reader() {
        let inst = read_instance("3 4 5 5 5".as_bytes()).unwrap();
        assert_eq!(inst.items, vec![5, 5, 5]);
    }

    #[test]
    fn formats_one_based_start() {
        let best = Subsequence::new(1, 3, 2);
        assert_eq!(format_answer(&best, false), "3 2");
        assert_eq!(format_answer(&best, true), "3 2 2");
        assert_eq!(format_answer(&Subsequence::default(), false), "0 1");
    }
}
