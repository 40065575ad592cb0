use crate::Result;
use crate::leads::LeadFormat;
use crate::recency::{AgeGroup, EventColumns};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly
pub const CONFIG_FILE_NAME: &str = "evstat.toml";

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub recency: RecencyConfig,

    #[serde(default)]
    pub leads: LeadsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RecencyConfig {
    /// Delimited file of events, starting with a header row
    #[serde(default = "default_events_path")]
    pub events_path: Utf8PathBuf,

    /// Recency window widths, in the unit of the event timestamps
    #[serde(default = "default_age_groups")]
    pub age_groups: Vec<f64>,

    /// Reference time the windows are measured back from; the current time when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of_time: Option<f64>,

    #[serde(default = "default_timestamp_column")]
    pub timestamp_column: String,

    #[serde(default = "default_category_column")]
    pub category_column: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LeadsConfig {
    /// Lead-generation daily summary file
    #[serde(default = "default_data_path")]
    pub data_path: Utf8PathBuf,

    /// `chrono` format of the `sum_date` column
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_quote_char")]
    pub quote_char: String,
}

fn default_events_path() -> Utf8PathBuf {
    Utf8PathBuf::from("data/events.csv")
}

fn default_age_groups() -> Vec<f64> {
    vec![1.0, 5.0, 8.0]
}

fn default_timestamp_column() -> String {
    "Timestamp".to_string()
}

fn default_category_column() -> String {
    "Category".to_string()
}

fn default_data_path() -> Utf8PathBuf {
    Utf8PathBuf::from("data/lead_daily_sum_sample_data.csv")
}

fn default_date_format() -> String {
    "%d-%b-%Y".to_string()
}

fn default_quote_char() -> String {
    "'".to_string()
}

impl Default for RecencyConfig {
    fn default() -> Self {
        Self {
            events_path: default_events_path(),
            age_groups: default_age_groups(),
            as_of_time: None,
            timestamp_column: default_timestamp_column(),
            category_column: default_category_column(),
        }
    }
}

impl Default for LeadsConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            date_format: default_date_format(),
            quote_char: default_quote_char(),
        }
    }
}

impl RecencyConfig {
    #[must_use]
    pub fn event_columns(&self) -> EventColumns<'_> {
        EventColumns {
            timestamp: &self.timestamp_column,
            category: &self.category_column,
        }
    }
}

impl LeadsConfig {
    /// The file layout described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `quote_char` is not a single ASCII character.
    pub fn lead_format(&self) -> Result<LeadFormat<'_>> {
        let quote = match self.quote_char.as_bytes() {
            [quote] if quote.is_ascii() => *quote,
            _ => return Err(app_err!("quote_char must be a single ASCII character, got '{}'", self.quote_char)),
        };

        Ok(LeadFormat {
            date_format: &self.date_format,
            quote,
        })
    }
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading evstat configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading evstat configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if an age group is negative or not finite, the as-of time is not
    /// finite, or the lead file layout is unusable
    pub fn validate(&self) -> Result<()> {
        let _ = AgeGroup::from_widths(self.recency.age_groups.iter().copied())?;

        if let Some(width) = self.recency.age_groups.iter().find(|width| !width.is_finite()) {
            return Err(app_err!("age group widths must be finite, got {width}"));
        }

        if let Some(as_of_time) = self.recency.as_of_time
            && !as_of_time.is_finite()
        {
            return Err(app_err!("as_of_time must be finite, got {as_of_time}"));
        }

        if self.recency.timestamp_column.is_empty() {
            return Err(app_err!("timestamp_column must not be empty"));
        }

        if self.leads.date_format.is_empty() {
            return Err(app_err!("date_format must not be empty"));
        }

        let _ = self.leads.lead_format()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
