use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a value as whole-dollar US currency, e.g. `$110,000`.
///
/// Fractional dollars round half away from zero, matching how the dashboard
/// displayed salaries in the summary panel.
pub fn format_currency(value: Decimal) -> String {
    // A Decimal's 96-bit mantissa always fits in i128 once rounded to whole
    // dollars, so this conversion cannot fail.
    let whole = value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i128()
        .unwrap_or_default();

    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a percent value with one fractional digit and an explicit sign
/// for non-negative values, e.g. `+10.0%`, `+0.0%`, `-3.2%`.
pub fn format_percent(value: Decimal) -> String {
    let v = value.to_f64().unwrap_or(0.0);
    format!("{v:+.1}%")
}
