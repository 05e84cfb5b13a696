//! Rupee and ratio formatting utilities
//!
//! Amounts are whole rupees grouped in the Indian style: the last three
//! digits form one group, everything above is grouped in pairs.

/// Group a rupee amount Indian-style, without the currency sign
///
/// # Examples
/// ```
/// use nidhi::util::format::group_rupees;
///
/// assert_eq!(group_rupees(500), "500");
/// assert_eq!(group_rupees(12500), "12,500");
/// assert_eq!(group_rupees(125000), "1,25,000");
/// ```
pub fn group_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = Vec::new();
    let head_bytes = head.as_bytes();
    let mut i = head_bytes.len();
    while i > 0 {
        let start = i.saturating_sub(2);
        groups.push(head[start..i].to_string());
        i = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Format a rupee amount with the currency sign
///
/// # Examples
/// ```
/// use nidhi::util::format::format_rupees;
///
/// assert_eq!(format_rupees(12500), "₹12,500");
/// ```
pub fn format_rupees(amount: u64) -> String {
    format!("₹{}", group_rupees(amount))
}

/// Label for a percentage score, e.g. "78%"
pub fn percent_label(score: u8) -> String {
    format!("{}%", score)
}

/// Label for a current/target pair, e.g. "₹15,000 / ₹25,000"
pub fn rupee_pair(current: u64, target: u64) -> String {
    format!("{} / {}", format_rupees(current), format_rupees(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_ungrouped() {
        assert_eq!(group_rupees(0), "0");
        assert_eq!(group_rupees(42), "42");
        assert_eq!(group_rupees(999), "999");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_rupees(1000), "1,000");
        assert_eq!(group_rupees(25000), "25,000");
        assert_eq!(group_rupees(100000), "1,00,000");
        assert_eq!(group_rupees(1234567), "12,34,567");
        assert_eq!(group_rupees(123456789), "12,34,56,789");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(12500), "₹12,500");
        assert_eq!(format_rupees(50000), "₹50,000");
    }

    #[test]
    fn test_rupee_pair() {
        assert_eq!(rupee_pair(15000, 25000), "₹15,000 / ₹25,000");
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(78), "78%");
    }
}
