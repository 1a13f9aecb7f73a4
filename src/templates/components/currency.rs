/// "£ 1,234,567.89": symbol, space, thousands separators, two decimals.
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{symbol} {}", format_thousands(value))
}

/// Two-decimal number with comma thousands separators ("-12,345.60").
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Rounding can turn a tiny negative into "0.00"; don't print "-0.00".
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
