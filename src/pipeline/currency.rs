//! Brazilian-locale currency formatting.

/// Formats a numeric amount as Brazilian currency text: thousands separated by
/// `.`, decimals by `,`, two decimal digits, `R$ ` prefix.
///
/// Not idempotent: the input must be a plain number. Feeding an
/// already-formatted value back through the pipeline fails the numeric parse
/// upstream instead of formatting twice.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("R$ {sign}{grouped},{frac_part}")
}
