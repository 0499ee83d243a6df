/// Drop every double quote, then trim surrounding whitespace.
pub fn clean_str(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_str() {
        assert_eq!(clean_str("  Jane "), "Jane");
        assert_eq!(clean_str("\"Bob\""), "Bob");
        assert_eq!(clean_str(" \"O\"Neil\" "), "ONeil");
        assert_eq!(clean_str(""), "");
    }
}
