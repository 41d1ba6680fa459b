use subtle::ConstantTimeEq;

/// Constant-time string comparison for credential checks.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("admin123", "admin123"));
        assert!(!constant_time_compare("admin123", "admin124"));
        assert!(!constant_time_compare("admin123", "admin12"));
        assert!(!constant_time_compare("", "admin"));
        assert!(constant_time_compare("", ""));
    }
}
