//! Amount parsing and display for budgets and prices.

/// Coerce free-text form input to an amount.
///
/// Surrounding whitespace is ignored and an empty field is zero. Anything
/// that is not a finite decimal number also becomes zero rather than an
/// error.
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$1,200,000`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Compact thousands form used on board cards, e.g. `$450k`.
pub fn format_thousands(amount: f64) -> String {
    let k = amount / 1000.0;
    let text = format!("{k:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("${text}k")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_decimals_and_whitespace() {
        assert_eq!(parse_amount("450000"), 450_000.0);
        assert_eq!(parse_amount("  1250.5 "), 1250.5);
        assert_eq!(parse_amount("-20"), -20.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
    }

    #[test]
    fn parse_coerces_garbage_to_zero() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("12abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn usd_groups_thousands() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.0), "$999");
        assert_eq!(format_usd(450_000.0), "$450,000");
        assert_eq!(format_usd(1_200_000.0), "$1,200,000");
        assert_eq!(format_usd(-1500.0), "-$1,500");
    }

    #[test]
    fn thousands_trims_trailing_zero() {
        assert_eq!(format_thousands(450_000.0), "$450k");
        assert_eq!(format_thousands(1_260.0), "$1.3k");
        assert_eq!(format_thousands(0.0), "$0k");
    }
}
