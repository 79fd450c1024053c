//! Text formatting shared by every result renderer.

const RUPEE: char = '₹';

/// Formats an amount as rupees with Indian digit grouping and at most two
/// fraction digits, e.g. `12345678.5` → `₹1,23,45,678.5`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}", RUPEE, amount);
    }

    let (whole, paise) = round_to_paise(amount);
    let fraction = match paise {
        0 => String::new(),
        f if f % 10 == 0 => format!(".{}", f / 10),
        f => format!(".{:02}", f),
    };
    let sign = if amount < 0.0 && (whole != "0" || paise > 0) {
        "-"
    } else {
        ""
    };

    format!("{}{}{}{}", RUPEE, sign, group_en_in(&whole), fraction)
}

/// Whole rupees (as digits) and paise of `|amount|`, rounded half away from
/// zero on the shortest decimal form of the value, so `1.005` gives paise 1.
fn round_to_paise(amount: f64) -> (String, u32) {
    let text = amount.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(2).map_or(false, |d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let whole = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
    let paise = u32::from(digits[split]) * 10 + u32::from(digits[split + 1]);
    (whole, paise)
}

/// Formats a delta with an explicit direction: `+₹500`, `-₹500`, `₹0`.
pub fn format_signed_currency(delta: f64) -> String {
    if delta > 0.0 {
        format!("+{}", format_currency(delta))
    } else if delta < 0.0 {
        format!("-{}", format_currency(delta.abs()))
    } else {
        format_currency(0.0)
    }
}

/// Like [`format_signed_currency`] but never prints `+`; used for gaps where
/// a surplus reads as a plain amount.
pub fn format_gap(gap: f64) -> String {
    if gap >= 0.0 {
        format_currency(gap)
    } else {
        format!("-{}", format_currency(gap.abs()))
    }
}

fn group_en_in(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `emergency_fund` → `Emergency Fund`
pub fn title_case_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;
    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if at_word_start && ch.is_alphanumeric() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !ch.is_alphanumeric();
    }
    out
}

/// Fixed-point rendering with `digits` decimals. Exact ties round away from
/// zero (`12.25` → `12.3`), not to even.
pub fn fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scale = 10f64.powi(digits as i32);
    format!("{:.*}", digits, (value * scale).round() / scale)
}

/// `0.8` → `80%`
pub fn ratio_as_percent(ratio: f64) -> String {
    format!("{}%", fixed(ratio * 100.0, 0))
}
