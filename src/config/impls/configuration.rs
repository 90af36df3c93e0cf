use std::fs::File;
use std::io::Write;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cluster_config::ClusterConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::sentry_config::SentryConfig;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            cluster: ClusterConfig {
                nodes: vec!(String::from("ws://127.0.0.1:5000")),
                user: String::from("admin"),
                password: String::from("admin")
            },
            sentry_config: SentryConfig::default()
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`. With `create`, a missing or broken file is
    /// replaced by the defaults and an error is still returned so the user
    /// can edit it first.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(error);
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(error)
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(e)
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!(
                "log_level \"{}\" must be one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        self.cluster.check().map_err(ConfigurationError::ValidationError)?;
        if self.sentry_config.enabled && self.sentry_config.dsn.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("sentry_config.dsn is required when Sentry is enabled")));
        }
        Ok(())
    }
}
