#[cfg(test)]
mod common_tests {
    use crate::common::common::{parse_key_value, parse_log_level};

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("trace"), Some(log::LevelFilter::Trace));
        assert_eq!(parse_log_level("off"), Some(log::LevelFilter::Off));
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("id=42"), Ok((String::from("id"), String::from("42"))));
        assert_eq!(parse_key_value("filter=a=b"), Ok((String::from("filter"), String::from("a=b"))));
        assert_eq!(parse_key_value("empty="), Ok((String::from("empty"), String::new())));
    }

    #[test]
    fn test_parse_key_value_rejects_missing_key() {
        assert!(parse_key_value("=value").is_err());
        assert!(parse_key_value("novalue").is_err());
    }
}
