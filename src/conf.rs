use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    //store
    pub jobs_file: String,
    pub upload_dir: String,
    pub max_upload_bytes: usize,
    //email
    pub smtp_server: String,
    pub smtp_port: u16,
    pub business_email: String,
    pub business_password: String,
}

/// Store paths only; readable without mail credentials.
#[derive(Deserialize, Debug, Clone)]
pub struct StoreSettings {
    pub jobs_file: String,
    pub upload_dir: String,
}

fn load(env: Environment) -> Result<Config, ConfigError> {
    Config::builder()
        .set_default("service_name", "Inspirit Engineering Solutions")?
        .set_default("listen_port", "8000")?
        .set_default("jobs_file", "data/jobs.json")?
        .set_default("upload_dir", "uploads")?
        .set_default("max_upload_bytes", 10 * 1024 * 1024)?
        .set_default("smtp_server", "smtp.gmail.com")?
        .set_default("smtp_port", 587)?
        .add_source(env.try_parsing(true))
        .build()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default())
    }

    fn from_source(env: Environment) -> Result<Self, ConfigError> {
        load(env)?.try_deserialize()
    }
}

impl StoreSettings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default())
    }

    fn from_source(env: Environment) -> Result<Self, ConfigError> {
        load(env)?.try_deserialize()
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}

#[cfg(test)]
pub mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().source(Some(vars))
    }

    #[test]
    fn test_defaults_fill_optional_keys() {
        let s = Settings::from_source(env(&[
            ("BUSINESS_EMAIL", "hr@example.com"),
            ("BUSINESS_PASSWORD", "secret"),
        ]))
        .unwrap();
        assert_eq!(s.listen_port, "8000");
        assert_eq!(s.smtp_server, "smtp.gmail.com");
        assert_eq!(s.smtp_port, 587);
        assert_eq!(s.jobs_file, "data/jobs.json");
        assert_eq!(s.business_email, "hr@example.com");
    }

    #[test]
    fn test_overrides_from_environment() {
        let s = Settings::from_source(env(&[
            ("BUSINESS_EMAIL", "hr@example.com"),
            ("BUSINESS_PASSWORD", "secret"),
            ("UPLOAD_DIR", "/srv/uploads"),
            ("SMTP_PORT", "2525"),
        ]))
        .unwrap();
        assert_eq!(s.upload_dir, "/srv/uploads");
        assert_eq!(s.smtp_port, 2525);
    }

    #[test]
    fn test_missing_credentials_is_an_error() {
        assert!(Settings::from_source(env(&[])).is_err());
    }

    #[test]
    fn test_store_settings_need_no_credentials() {
        let s = StoreSettings::from_source(env(&[("JOBS_FILE", "/srv/jobs.json")])).unwrap();
        assert_eq!(s.jobs_file, "/srv/jobs.json");
        assert_eq!(s.upload_dir, "uploads");
    }
}
