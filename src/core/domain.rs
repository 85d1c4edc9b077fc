use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const DEFAULT_CAPACITY: usize = 10;

// Identifiable defines the lookup key shared by catalog and registry records
pub trait Identifiable {
    fn id(&self) -> &str;
}

// OutputFormat selects how replies and log lines are rendered
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = LibraryError;

    fn from_str(s: &str) -> LibraryResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(LibraryError::validation(
                format!("unsupported format {:?}", other).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// PatronSeed describes a patron registered at startup
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PatronSeed {
    pub name: String,
    pub id: String,
}

impl PatronSeed {
    pub fn new(name: &str, id: &str) -> Self {
        PatronSeed {
            name: name.to_string(),
            id: id.to_string(),
        }
    }
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub initial_capacity: usize,
    pub patrons: Vec<PatronSeed>,
    pub output: OutputFormat,
    pub log_level: String,
    pub log_format: OutputFormat,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            initial_capacity: DEFAULT_CAPACITY,
            patrons: vec![
                PatronSeed::new("Mandeep", "1001"),
                PatronSeed::new("Cameron", "1002"),
            ],
            output: OutputFormat::Text,
            log_level: "warn".to_string(),
            log_format: OutputFormat::Text,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Overlays LMS_* variables resolved by `lookup` on top of the defaults.
    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let branch = lookup("LMS_BRANCH").unwrap_or_else(|| "main".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Some(capacity) = lookup("LMS_INITIAL_CAPACITY") {
            config.initial_capacity = capacity.trim().parse::<usize>().map_err(|err| {
                LibraryError::validation(
                    format!("invalid LMS_INITIAL_CAPACITY {:?}: {}", capacity, err).as_str(), Some("400".to_string()))
            })?;
        }
        if let Some(patrons) = lookup("LMS_PATRONS") {
            config.patrons = serde_json::from_str(patrons.as_str())?;
        }
        if let Some(output) = lookup("LMS_OUTPUT") {
            config.output = output.parse()?;
        }
        if let Some(level) = lookup("LMS_LOG_LEVEL") {
            config.log_level = level.trim().to_ascii_lowercase();
        }
        if let Some(format) = lookup("LMS_LOG_FORMAT") {
            config.log_format = format.parse()?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.initial_capacity == 0 {
            return Err(LibraryError::validation("initial capacity must be positive", Some("400".to_string())));
        }
        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(LibraryError::validation(
                format!("unknown log level {:?}", self.log_level).as_str(), Some("400".to_string())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::{Configuration, OutputFormat, PatronSeed};
    use crate::core::library::LibraryError;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(10, config.initial_capacity);
        assert_eq!(vec![PatronSeed::new("Mandeep", "1001"), PatronSeed::new("Cameron", "1002")], config.patrons);
        assert_eq!(OutputFormat::Text, config.output);
    }

    #[test]
    fn test_should_use_defaults_without_env() {
        let config = Configuration::from_lookup(lookup_from(&[])).expect("should build config");
        assert_eq!("main", config.branch_id.as_str());
        assert_eq!(2, config.patrons.len());
        assert_eq!("warn", config.log_level.as_str());
    }

    #[test]
    fn test_should_overlay_env() {
        let config = Configuration::from_lookup(lookup_from(&[
            ("LMS_BRANCH", "east"),
            ("LMS_INITIAL_CAPACITY", "4"),
            ("LMS_PATRONS", r#"[{"name":"Ada","id":"7"}]"#),
            ("LMS_OUTPUT", "JSON"),
            ("LMS_LOG_LEVEL", "Debug"),
            ("LMS_LOG_FORMAT", "json"),
        ])).expect("should build config");
        assert_eq!("east", config.branch_id.as_str());
        assert_eq!(4, config.initial_capacity);
        assert_eq!(vec![PatronSeed::new("Ada", "7")], config.patrons);
        assert_eq!(OutputFormat::Json, config.output);
        assert_eq!("debug", config.log_level.as_str());
        assert_eq!(OutputFormat::Json, config.log_format);
    }

    #[test]
    fn test_should_reject_bad_values() {
        let res = Configuration::from_lookup(lookup_from(&[("LMS_INITIAL_CAPACITY", "many")]));
        assert!(matches!(res, Err(LibraryError::Validation{ .. })));
        let res = Configuration::from_lookup(lookup_from(&[("LMS_INITIAL_CAPACITY", "0")]));
        assert!(matches!(res, Err(LibraryError::Validation{ .. })));
        let res = Configuration::from_lookup(lookup_from(&[("LMS_OUTPUT", "xml")]));
        assert!(matches!(res, Err(LibraryError::Validation{ .. })));
        let res = Configuration::from_lookup(lookup_from(&[("LMS_LOG_LEVEL", "loud")]));
        assert!(matches!(res, Err(LibraryError::Validation{ .. })));
        let res = Configuration::from_lookup(lookup_from(&[("LMS_PATRONS", "not json")]));
        assert!(matches!(res, Err(LibraryError::Serialization{ .. })));
    }
}
