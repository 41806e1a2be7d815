//! Population list parsing

use crate::error::InputError;

/// Parse comma-separated population values, expecting exactly `expected` of them
///
/// Whitespace around values is ignored. Values must be non-negative integers.
pub fn parse_populations(text: &str, expected: usize) -> Result<Vec<u64>, InputError> {
    if text.trim().is_empty() {
        if expected == 0 {
            return Ok(Vec::new());
        }
        return Err(InputError::CountMismatch { expected, found: 0 });
    }

    let populations = text.split(',')
        .enumerate()
        .map(|(i, raw)| {
            let value = raw.trim();
            value.parse::<u64>().map_err(|_| InputError::InvalidValue {
                position: i + 1,
                value: value.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if populations.len() != expected {
        return Err(InputError::CountMismatch {
            expected,
            found: populations.len(),
        });
    }

    log::debug!("Parsed {} population values", populations.len());

    Ok(populations)
}

/// `count` copies of `value`
pub fn default_populations(count: usize, value: u64) -> Vec<u64> {
    vec![value; count]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_trims_values() {
        assert_eq!(parse_populations(" 10, 20 ,0,7", 4).unwrap(), vec![10, 20, 0, 7]);
    }

    #[test]
    fn rejects_non_integer_values() {
        assert_eq!(
            parse_populations("10,abc,30", 3),
            Err(InputError::InvalidValue { position: 2, value: "abc".to_string() })
        );
        assert_eq!(
            parse_populations("10,2.5", 2),
            Err(InputError::InvalidValue { position: 2, value: "2.5".to_string() })
        );
    }

    #[test]
    fn rejects_negative_values() {
        assert!(matches!(
            parse_populations("-1,4", 2),
            Err(InputError::InvalidValue { position: 1, .. })
        ));
    }

    #[test]
    fn rejects_wrong_count() {
        assert_eq!(
            parse_populations("1,2,3", 4),
            Err(InputError::CountMismatch { expected: 4, found: 3 })
        );
        assert_eq!(
            parse_populations("  ", 2),
            Err(InputError::CountMismatch { expected: 2, found: 0 })
        );
        assert_eq!(parse_populations("", 0).unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn trailing_comma_is_an_invalid_value() {
        assert!(matches!(
            parse_populations("1,2,", 3),
            Err(InputError::InvalidValue { position: 3, .. })
        ));
    }

    #[test]
    fn default_repeats_value() {
        assert_eq!(default_populations(3, 10), vec![10, 10, 10]);
    }
}
