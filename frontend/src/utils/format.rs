const NBSP: char = '\u{a0}';

/// Groups the integer part with dots, vi-VN style.
pub fn group_thousands(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// `500000000` -> `500.000.000 ₫`
pub fn format_vnd(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    format!("{}{}₫", group_thousands(amount), NBSP)
}

pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Up to two upper-cased initials from the first name parts.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Short employee reference: the explicit id, else the tail of the user id.
pub fn short_employee_ref(employee_id: Option<&str>, user_id: &str) -> String {
    match employee_id.filter(|id| !id.trim().is_empty()) {
        Some(id) => id.to_string(),
        None => {
            let chars: Vec<char> = user_id.chars().collect();
            let start = chars.len().saturating_sub(3);
            chars[start..].iter().collect()
        }
    }
}

pub fn dash_if_empty(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vnd_groups_with_dots_and_symbol() {
        assert_eq!(format_vnd(500_000_000.0), "500.000.000\u{a0}₫");
        assert_eq!(format_vnd(0.0), "0\u{a0}₫");
        assert_eq!(format_vnd(999.0), "999\u{a0}₫");
        assert_eq!(format_vnd(1_000.4), "1.000\u{a0}₫");
        assert_eq!(format_vnd(-25_000.0), "-25.000\u{a0}₫");
        assert_eq!(format_vnd(f64::NAN), "0\u{a0}₫");
    }

    #[test]
    fn percent_drops_trailing_zero() {
        assert_eq!(format_percent(25.0), "25%");
        assert_eq!(format_percent(12.5), "12.5%");
    }

    #[test]
    fn initials_take_first_two_parts() {
        assert_eq!(initials("nguyen van an"), "NV");
        assert_eq!(initials("Lan"), "L");
        assert_eq!(initials("  "), "");
        assert_eq!(initials("Đặng Thu Thảo"), "ĐT");
    }

    #[test]
    fn short_employee_ref_falls_back_to_user_id_tail() {
        assert_eq!(short_employee_ref(Some("EMP-12"), "64f0abc"), "EMP-12");
        assert_eq!(short_employee_ref(None, "64f0abc"), "abc");
        assert_eq!(short_employee_ref(Some(""), "ab"), "ab");
    }
}
