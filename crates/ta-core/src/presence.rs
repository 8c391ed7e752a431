//! Duration text classification.
//!
//! The export spells durations as alternating value/unit tokens:
//! "45 s", "12 min 30 s", "1 h 2 min 3 s". Only the token count and, for
//! the minutes/seconds form, the total are needed.

use crate::time_slot::parse_clock_tokens;
use crate::types::{DurationCategory, InputError};

/// Stays strictly longer than this count as full attendance.
pub const FULL_PRESENCE_SECONDS: u32 = 30 * 60;

/// Buckets a duration string.
pub fn classify_duration(text: &str) -> Result<DurationCategory, InputError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    match tokens.len() {
        2 => Ok(DurationCategory::Minimal),
        4 => {
            let seconds = parse_clock_tokens(&[tokens[0], tokens[2]])?;
            if seconds > FULL_PRESENCE_SECONDS {
                Ok(DurationCategory::Full)
            } else {
                Ok(DurationCategory::Partial)
            }
        }
        n if n >= 6 => Ok(DurationCategory::Full),
        count => Err(InputError::DurationFormat {
            value: text.to_string(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_only_is_minimal() {
        assert_eq!(classify_duration("45 seconds").unwrap(), DurationCategory::Minimal);
        assert_eq!(classify_duration("59 с").unwrap(), DurationCategory::Minimal);
    }

    #[test]
    fn minutes_and_seconds_threshold() {
        assert_eq!(
            classify_duration("12 minutes 3 seconds").unwrap(),
            DurationCategory::Partial
        );
        assert_eq!(
            classify_duration("30 minutes 0 seconds").unwrap(),
            DurationCategory::Partial
        );
        assert_eq!(
            classify_duration("30 minutes 1 seconds").unwrap(),
            DurationCategory::Full
        );
        assert_eq!(
            classify_duration("58 мин 12 с").unwrap(),
            DurationCategory::Full
        );
    }

    #[test]
    fn hours_are_always_full() {
        assert_eq!(
            classify_duration("1 hour 2 minutes 3 seconds").unwrap(),
            DurationCategory::Full
        );
        assert_eq!(
            classify_duration("1 d 0 h 0 min 5 s").unwrap(),
            DurationCategory::Full
        );
    }

    #[test]
    fn odd_token_counts_are_rejected() {
        for text in ["", "45", "12 minutes 30", "1 h 2 min 3"] {
            let err = classify_duration(text).unwrap_err();
            assert!(
                matches!(err, InputError::DurationFormat { .. }),
                "{text:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn huge_minute_count_is_rejected() {
        assert_eq!(
            classify_duration("99999999 min 0 s"),
            Err(InputError::ClockRange {
                value: "99999999:0".to_string()
            })
        );
    }

    #[test]
    fn non_numeric_minutes_are_rejected() {
        let err = classify_duration("a minutes 3 seconds").unwrap_err();
        assert!(matches!(err, InputError::Number { .. }));
    }
}
