//! Common processing logic shared between the recency and leaders commands.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::reports::{self, LeadersReport, RecencyReport};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use std::fs;
use std::io::Write;
use strum::IntoStaticStr;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between the recency and leaders commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file (default is `evstat.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,

    /// Output results to a CSV file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Output results to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output results to the console. If omitted, console output is shown only when no other reports are generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

/// A result that can be rendered by every report generator.
pub trait Report {
    fn console(&self, use_colors: bool, writer: &mut String) -> Result<()>;
    fn csv(&self, writer: &mut String) -> Result<()>;
    fn json(&self, writer: &mut String) -> Result<()>;
}

impl Report for RecencyReport<f64> {
    fn console(&self, use_colors: bool, writer: &mut String) -> Result<()> {
        reports::console_recency(self, use_colors, writer)
    }

    fn csv(&self, writer: &mut String) -> Result<()> {
        reports::csv_recency(self, writer)
    }

    fn json(&self, writer: &mut String) -> Result<()> {
        reports::json_recency(self, writer)
    }
}

impl Report for LeadersReport {
    fn console(&self, use_colors: bool, writer: &mut String) -> Result<()> {
        reports::console_leaders(self, use_colors, writer)
    }

    fn csv(&self, writer: &mut String) -> Result<()> {
        reports::csv_leaders(self, writer)
    }

    fn json(&self, writer: &mut String) -> Result<()> {
        reports::json_leaders(self, writer)
    }
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    host: &'a mut H,
    color: ColorMode,
    console: bool,
    csv: Option<Utf8PathBuf>,
    json: Option<Utf8PathBuf>,
}

impl<'a, H: Host> Common<'a, H> {
    /// Create a new Common processor with logger and config
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

        Ok(Self {
            config,
            host,
            color: args.color,
            console: args.console,
            csv: args.csv.clone(),
            json: args.json.clone(),
        })
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        if log_level == LogLevel::None {
            return;
        }

        let level: &'static str = log_level.into();
        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        // a logger may already be installed when several commands run in one process
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
            .try_init();
    }

    /// Render `report` to the requested outputs.
    ///
    /// # Errors
    ///
    /// Returns an error if a report cannot be generated or written
    pub fn report(&mut self, report: &impl Report) -> Result<()> {
        let generating_files = self.csv.is_some() || self.json.is_some();

        if self.console || !generating_files {
            let mut console_output = String::new();
            let use_colors = match self.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    use std::io::{IsTerminal, stdout};
                    stdout().is_terminal()
                }
            };
            report.console(use_colors, &mut console_output)?;
            let _ = write!(self.host.output(), "{console_output}");
        }

        if let Some(filename) = &self.csv {
            let mut output = String::new();
            report.csv(&mut output)?;
            fs::write(filename, output).into_app_err_with(|| format!("writing CSV report to '{filename}'"))?;
        }

        if let Some(filename) = &self.json {
            let mut output = String::new();
            report.json(&mut output)?;
            fs::write(filename, output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
        }

        Ok(())
    }
}
