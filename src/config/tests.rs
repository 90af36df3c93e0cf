#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_init_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            assert_eq!(config.cluster.nodes.len(), 1);
        }

        #[test]
        fn test_toml_roundtrip() {
            let config = Configuration::init();
            let toml_string = toml::to_string(&config).unwrap();
            assert!(toml_string.contains("[cluster]"));
            let loaded = Configuration::load(toml_string.as_bytes()).unwrap();
            assert_eq!(loaded.cluster, config.cluster);
            assert_eq!(loaded.log_level, config.log_level);
        }

        #[test]
        fn test_load_parse_error() {
            let result = Configuration::load(b"log_level = ");
            assert!(result.is_err());
        }

        #[test]
        fn test_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_rejects_empty_node_list() {
            let mut config = Configuration::init();
            config.cluster.nodes.clear();
            let error = config.validate().unwrap_err();
            assert!(error.to_string().contains("at least one node"));
        }

        #[test]
        fn test_rejects_non_websocket_scheme() {
            let mut config = Configuration::init();
            config.cluster.nodes = vec![String::from("http://127.0.0.1:5000")];
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_accepts_wss_scheme() {
            let mut config = Configuration::init();
            config.cluster.nodes = vec![String::from("wss://node-a:5000"), String::from("WS://node-b:5000")];
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_rejects_duplicate_nodes() {
            let mut config = Configuration::init();
            config.cluster.nodes = vec![String::from("ws://a:5000"), String::from("ws://a:5000")];
            let error = config.validate().unwrap_err();
            assert!(error.to_string().contains("listed twice"));
        }

        #[test]
        fn test_rejects_empty_user() {
            let mut config = Configuration::init();
            config.cluster.user = String::from("  ");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_rejects_sentry_without_dsn() {
            let mut config = Configuration::init();
            config.sentry_config.enabled = true;
            assert!(config.validate().is_err());
        }
    }

    mod file_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use tempfile::tempdir;

        #[test]
        fn test_save_and_load_file() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            Configuration::save_from_config(path, &Configuration::init()).unwrap();
            let loaded = Configuration::load_file(path).unwrap();
            assert_eq!(loaded.cluster.user, "admin");
        }

        #[test]
        fn test_load_missing_file() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("missing.toml");
            let result = Configuration::load_file(path.to_str().unwrap());
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }

        #[test]
        fn test_load_from_file_creates_defaults() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            assert!(Configuration::load_from_file(path, false).is_err());
            assert!(!std::path::Path::new(path).exists());

            assert!(Configuration::load_from_file(path, true).is_err());
            assert!(std::path::Path::new(path).exists());

            let config = Configuration::load_from_file(path, false).unwrap();
            assert_eq!(config.log_level, "info");
        }

        #[test]
        fn test_load_from_file_validates() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            let mut config = Configuration::init();
            config.cluster.nodes.clear();
            Configuration::save_from_config(path, &config).unwrap();
            let result = Configuration::load_from_file(path, false);
            assert!(matches!(result, Err(ConfigurationError::ValidationError(_))));
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_validation_error_display() {
            let error = ConfigurationError::ValidationError(String::from("bad node"));
            assert_eq!(format!("{}", error), "[VALIDATE CONFIG] bad node");
        }

        #[test]
        fn test_io_error_display() {
            let error = ConfigurationError::IOError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
            assert_eq!(format!("{}", error), "gone");
        }
    }
}
