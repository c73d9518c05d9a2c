// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text preference tables.
//!
//! The format is whitespace separated, with `#` starting a comment:
//!
//! ```text
//! # size
//! 3
//! # proposers, one row each, most preferred first
//! 1 2 3
//! 2 1 3
//! 1 2 3
//! # receivers
//! 2 1 3
//! 1 2 3
//! 1 2 3
//! ```
//!
//! Persons are numbered from 1 in the text and from 0 in the table.

use super::PreferenceTable;
use crate::errors::{ParseError, PreferenceError};
use crate::person::MAX_PEOPLE;
use std::str::FromStr;

impl FromStr for PreferenceTable {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("").trim()))
            .filter(|(_, line)| !line.is_empty());

        let size = match lines.next() {
            Some((line, content)) => {
                let values = parse_numbers(line, content)?;
                match values.as_slice() {
                    [n] => *n,
                    _ => {
                        return Err(ParseError::InvalidToken {
                            line,
                            token: content.to_string(),
                        })
                    }
                }
            }
            None => return Err(ParseError::MissingSize),
        };
        if size > MAX_PEOPLE {
            return Err(PreferenceError::TooManyPeople {
                size,
                max: MAX_PEOPLE,
            }
            .into());
        }

        let mut rows = Vec::with_capacity(2 * size);
        for (line, content) in lines.by_ref().take(2 * size) {
            let row: Vec<usize> = parse_numbers(line, content)?
                .into_iter()
                .map(|value| value - 1)
                .collect();
            rows.push(row);
        }
        if rows.len() < 2 * size {
            return Err(ParseError::MissingRows {
                expected: 2 * size,
                found: rows.len(),
            });
        }
        if let Some((line, _)) = lines.next() {
            return Err(ParseError::TrailingData { line });
        }

        let receiver_rows = rows.split_off(size);
        Ok(PreferenceTable::new(rows, receiver_rows)?)
    }
}

/// Parse one line of positive integers.
fn parse_numbers(line: usize, content: &str) -> Result<Vec<usize>, ParseError> {
    content
        .split_whitespace()
        .map(|token| match token.parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ParseError::InvalidToken {
                line,
                token: token.to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{Proposer, Receiver};

    const SAMPLE: &str = "\
# size
3
# proposers
1 2 3
2 1 3   # trailing comment
1 2 3

# receivers
2 1 3
1 2 3
1 2 3
";

    #[test]
    fn test_parse_sample() {
        let table: PreferenceTable = SAMPLE.parse().unwrap();
        assert_eq!(table.size(), 3);
        assert_eq!(
            table.proposer_row(Proposer::new(1)),
            &[Receiver::new(1), Receiver::new(0), Receiver::new(2)]
        );
        assert_eq!(
            table.receiver_row(Receiver::new(0)),
            &[Proposer::new(1), Proposer::new(0), Proposer::new(2)]
        );
    }

    #[test]
    fn test_parse_missing_size() {
        assert_eq!("# nothing\n".parse::<PreferenceTable>(), Err(ParseError::MissingSize));
    }

    #[test]
    fn test_parse_invalid_token() {
        let err = "2\n1 x\n".parse::<PreferenceTable>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidToken {
                line: 2,
                token: "x".to_string()
            }
        );

        // Zero is not a valid one-based person.
        let err = "1\n0\n1\n".parse::<PreferenceTable>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidToken { line: 2, .. }));
    }

    #[test]
    fn test_parse_missing_and_trailing_rows() {
        let err = "2\n1 2\n2 1\n1 2\n".parse::<PreferenceTable>().unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingRows {
                expected: 4,
                found: 3
            }
        );

        let err = "1\n1\n1\n1\n".parse::<PreferenceTable>().unwrap_err();
        assert_eq!(err, ParseError::TrailingData { line: 4 });
    }

    #[test]
    fn test_parse_rejects_huge_size() {
        let err = "100000\n".parse::<PreferenceTable>().unwrap_err();
        assert!(matches!(
            err,
            ParseError::Preference(PreferenceError::TooManyPeople { size: 100000, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_rankings() {
        let err = "2\n1 1\n2 1\n1 2\n1 2\n".parse::<PreferenceTable>().unwrap_err();
        assert!(matches!(
            err,
            ParseError::Preference(PreferenceError::Duplicate { person: 0, value: 0, .. })
        ));
    }
}
