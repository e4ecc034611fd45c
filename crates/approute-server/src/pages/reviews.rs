use approute::{html, not_found, PageResult, Params, Segment};

/// Review numbers above this render as not found
const MAX_REVIEW: i64 = 100;

pub fn segment() -> Segment {
    Segment::new().page(page)
}

fn page(params: &Params) -> PageResult {
    let product = params.one("productID").unwrap_or_default();
    let review = params.one("reviewID").unwrap_or_default();

    if parse_leading_int(review).is_some_and(|n| n > MAX_REVIEW) {
        return not_found();
    }

    Ok(html! { h1 { "Review " (review) " for Product " (product) } })
}

/// Parses the integer prefix of `s`
///
/// Leading whitespace and one sign are accepted. A `0x`/`0X` prefix switches
/// to hexadecimal digits; otherwise as many ASCII decimal digits as follow are
/// read. Returns `None` when there are no digits; saturates on overflow.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut seen = false;
    let mut value: i64 = 0;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        let digit = i64::from(digit);
        value = if negative {
            value.saturating_mul(radix.into()).saturating_sub(digit)
        } else {
            value.saturating_mul(radix.into()).saturating_add(digit)
        };
    }

    seen.then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approute::ParamValue;
    use rstest::rstest;

    #[rstest]
    #[case("50", Some(50))]
    #[case("101", Some(101))]
    #[case("  7", Some(7))]
    #[case("-3", Some(-3))]
    #[case("+12", Some(12))]
    #[case("150abc", Some(150))]
    #[case("007", Some(7))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("-", None)]
    #[case("0x65", Some(101))]
    #[case("0X1f", Some(31))]
    #[case("-0x10", Some(-16))]
    #[case("0xZZ", None)]
    #[case("99999999999999999999999", Some(i64::MAX))]
    fn test_parse_leading_int(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_leading_int(input), expected);
    }

    fn params(review: &str) -> Params {
        Params::from_iter([
            ("productID", ParamValue::One("42".to_string())),
            ("reviewID", ParamValue::One(review.to_string())),
        ])
    }

    #[test]
    fn test_guard_boundary() {
        assert!(page(&params("100")).is_ok());
        assert!(page(&params("101")).is_err());
        assert!(page(&params("0x64")).is_ok());
        assert!(page(&params("0x65")).is_err());
    }

    #[test]
    fn test_non_numeric_review_renders() {
        assert_eq!(
            page(&params("latest")).unwrap().into_string(),
            "<h1>Review latest for Product 42</h1>"
        );
    }
}
