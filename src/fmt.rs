/// Insert comma thousands separators into a plain digit string.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Group an integer with comma thousands separators: 12543 -> "12,543"
pub fn group_thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Format a non-negative metric value with grouped integer part and a fixed
/// number of decimals: (31752.0, 0) -> "31,752", (921.5, 1) -> "921.5"
pub fn metric_value(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.max(0.0));
    match fixed.split_once('.') {
        Some((whole, frac)) => format!("{}.{}", group_digits(whole), frac),
        None => group_digits(&fixed),
    }
}
