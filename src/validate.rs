//! Acceptance rules for typed page-number input.
//!
//! Raw field text is judged by numeric value, not by integer lexing: the
//! field historically accepted any text that denotes a whole number, so
//! `" 5 "`, `"5.0"` and `"1e1"` all pass while `"5.5"`, `"inf"` and plain
//! words do not. Rejection never escapes the widget boundary; callers log
//! the reason and revert the visible field.

use thiserror::Error;

/// Why a submitted page number was rejected.
///
/// Consumed by logging and tests only; the host-facing contract is simply
/// that no notification fires.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageInputRejection {
    #[error("input is not numeric")]
    NotNumeric,

    #[error("value is not finite")]
    NotFinite,

    #[error("value has a fractional part")]
    NotWhole,

    #[error("value is outside the valid page range")]
    OutOfRange,

    #[error("value equals the current page")]
    SamePage,
}

/// Validate raw field text against the current page and page bound.
///
/// Returns the parsed page on success. All of the following must hold:
/// the text parses as a number, the value is finite, whole, at least 1,
/// at most `max_page`, and differs from `current_page`. The last rule
/// turns a same-page submission into a no-op instead of a redundant
/// navigation request.
pub fn validate_page_input(
    raw: &str,
    current_page: usize,
    max_page: usize,
) -> Result<usize, PageInputRejection> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| PageInputRejection::NotNumeric)?;

    if !value.is_finite() {
        return Err(PageInputRejection::NotFinite);
    }
    if value.fract() != 0.0 {
        return Err(PageInputRejection::NotWhole);
    }
    if value < 1.0 || value > max_page as f64 {
        return Err(PageInputRejection::OutOfRange);
    }

    let page = value as usize;
    if page == current_page {
        return Err(PageInputRejection::SamePage);
    }

    Ok(page)
}

/// Convenience predicate over [`validate_page_input`].
pub fn is_valid_page_input(raw: &str, current_page: usize, max_page: usize) -> bool {
    validate_page_input(raw, current_page, max_page).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_distinct_in_range_page() {
        assert_eq!(validate_page_input("5", 4, 5), Ok(5));
        assert_eq!(validate_page_input("1", 4, 5), Ok(1));
        assert_eq!(validate_page_input("3", 4, 5), Ok(3));
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        assert_eq!(
            validate_page_input("foo", 4, 5),
            Err(PageInputRejection::NotNumeric)
        );
        assert_eq!(
            validate_page_input("", 4, 5),
            Err(PageInputRejection::NotNumeric)
        );
        assert_eq!(
            validate_page_input("3three", 4, 5),
            Err(PageInputRejection::NotNumeric)
        );
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert_eq!(
            validate_page_input("inf", 4, 5),
            Err(PageInputRejection::NotFinite)
        );
        assert_eq!(
            validate_page_input("infinity", 4, 5),
            Err(PageInputRejection::NotFinite)
        );
        // NaN is not finite either; it must not slip through as numeric.
        assert_eq!(
            validate_page_input("NaN", 4, 5),
            Err(PageInputRejection::NotFinite)
        );
    }

    #[test]
    fn test_rejects_fractional_values() {
        assert_eq!(
            validate_page_input("5.5", 4, 6),
            Err(PageInputRejection::NotWhole)
        );
        assert_eq!(
            validate_page_input("1.01", 4, 6),
            Err(PageInputRejection::NotWhole)
        );
    }

    #[test]
    fn test_accepts_whole_values_in_any_numeric_form() {
        assert_eq!(validate_page_input("5.0", 4, 5), Ok(5));
        assert_eq!(validate_page_input(" 5 ", 4, 5), Ok(5));
        assert_eq!(validate_page_input("1e1", 4, 10), Ok(10));
    }

    #[test]
    fn test_rejects_out_of_range_pages() {
        assert_eq!(
            validate_page_input("0", 4, 5),
            Err(PageInputRejection::OutOfRange)
        );
        assert_eq!(
            validate_page_input("7", 4, 5),
            Err(PageInputRejection::OutOfRange)
        );
        assert_eq!(
            validate_page_input("-2", 4, 5),
            Err(PageInputRejection::OutOfRange)
        );
        assert_eq!(
            validate_page_input("1e300", 4, 5),
            Err(PageInputRejection::OutOfRange)
        );
    }

    #[test]
    fn test_rejects_current_page_as_no_op() {
        assert_eq!(
            validate_page_input("4", 4, 5),
            Err(PageInputRejection::SamePage)
        );
        // Same page in a different numeric spelling is still a no-op.
        assert_eq!(
            validate_page_input("4.0", 4, 5),
            Err(PageInputRejection::SamePage)
        );
    }

    #[test]
    fn test_zero_max_rejects_everything() {
        for raw in ["0", "1", "2"] {
            assert_eq!(
                validate_page_input(raw, 0, 0),
                Err(PageInputRejection::OutOfRange)
            );
        }
    }

    #[test]
    fn test_predicate_mirrors_validation() {
        assert!(is_valid_page_input("5", 4, 5));
        assert!(!is_valid_page_input("4", 4, 5));
        assert!(!is_valid_page_input("foo", 4, 5));
    }
}
