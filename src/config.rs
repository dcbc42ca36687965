//! Command-line and manifest configuration.
//!
//! Datasets come from, in order of precedence: a TOML manifest
//! (`--config`), positional `LABEL=PATH` arguments, or the Virginia
//! tables for 2020, 2016 and 2012.
//!
//! ```toml
//! [[datasets]]
//! label = "VA2020_"
//! path = "Voting Data Virginia - VA2020.csv"
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::RunConfig;
use crate::counties::Affiliation;
use crate::error::{Error, Result};
use crate::render::{RenderOptions, SpringLayout};
use crate::topology::HomologyConfig;

/// One election-year table and the label prefixing its output files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub path: PathBuf,
}

impl Dataset {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Parse `LABEL=PATH`, or a bare `PATH` labelled by its file stem
    pub fn parse(arg: &str) -> Result<Self> {
        if let Some((label, path)) = arg.split_once('=') {
            if label.is_empty() || path.is_empty() {
                return Err(Error::DatasetArg(arg.to_string()));
            }
            return Ok(Self::new(label, path));
        }

        let path = Path::new(arg);
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::DatasetArg(arg.to_string()))?;
        Ok(Self::new(format!("{stem}_"), path))
    }
}

fn parse_dataset_arg(arg: &str) -> std::result::Result<Dataset, String> {
    Dataset::parse(arg).map_err(|e| e.to_string())
}

/// The election years analysed when no dataset is given
pub fn default_datasets() -> Vec<Dataset> {
    ["2020", "2016", "2012"]
        .iter()
        .map(|year| {
            Dataset::new(
                format!("VA{year}_"),
                format!("Voting Data Virginia - VA{year}.csv"),
            )
        })
        .collect()
}

/// Dataset list read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

impl Manifest {
    /// Load a manifest; relative dataset paths resolve against its directory
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Self::from_toml(&text).map_err(|source| Error::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            for dataset in &mut manifest.datasets {
                if dataset.path.is_relative() {
                    dataset.path = base.join(&dataset.path);
                }
            }
        }
        Ok(manifest)
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Betti numbers of same-party county regions across election years",
    long_about = None
)]
pub struct Config {
    /// Datasets as LABEL=PATH (or PATH, labelled by file stem)
    #[arg(value_parser = parse_dataset_arg)]
    pub datasets: Vec<Dataset>,

    /// TOML manifest listing datasets; overrides positional datasets
    #[arg(long, short = 'c', env = "VOTE_TOPOLOGY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Affiliations to analyse (default: both, Republican first)
    #[arg(long, short = 'a', value_enum)]
    pub affiliation: Vec<Affiliation>,

    /// Directory for rendered SVG files
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip rendering
    #[arg(long)]
    pub no_render: bool,

    /// Seed of the spring layout
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Highest homology dimension to report
    #[arg(long)]
    pub max_dimension: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Used when RUST_LOG is unset
    #[arg(long, value_enum, default_value_t = LogLevel::Info, env = "VOTE_TOPOLOGY_LOG_LEVEL")]
    pub log_level: LogLevel,
}

impl Config {
    pub fn datasets(&self) -> Result<Vec<Dataset>> {
        if let Some(path) = &self.config {
            return Ok(Manifest::load(path)?.datasets);
        }
        if !self.datasets.is_empty() {
            return Ok(self.datasets.clone());
        }
        Ok(default_datasets())
    }

    /// Requested affiliations in vote order without repeats
    pub fn affiliations(&self) -> Vec<Affiliation> {
        if self.affiliation.is_empty() {
            return Affiliation::ALL.to_vec();
        }
        let mut affiliations = self.affiliation.clone();
        affiliations.sort();
        affiliations.dedup();
        affiliations
    }

    pub fn run_config(&self) -> Result<RunConfig> {
        Ok(RunConfig {
            datasets: self.datasets()?,
            affiliations: self.affiliations(),
            homology: HomologyConfig {
                max_dimension: self.max_dimension,
            },
            output_dir: (!self.no_render).then(|| self.output_dir.clone()),
            render: RenderOptions {
                layout: SpringLayout::with_seed(self.seed),
                ..RenderOptions::default()
            },
        })
    }
}
