//! Command-line interface for the phuml utility
//!
//! Reads the raw definitions extracted from a codebase as JSON and writes a
//! Graphviz DOT class diagram or a statistics summary.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use phuml::core::logging::init_logging;
use phuml::parser::{RawDefinition, StructureBuilder};
use phuml::processor::{DigraphGenerator, Processor};
use phuml::summary::{StatisticsProcessor, Summary};
use phuml::{DigraphConfiguration, ThemeName};

/// phUML - Generate UML class diagrams in the Graphviz DOT language
#[derive(Parser)]
#[command(name = "phuml")]
#[command(about = "A Rust utility to turn class and interface definitions into UML class diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error); defaults to PHUML_LOG_LEVEL or warn
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json); defaults to PHUML_LOG_FORMAT or compact
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a class diagram in the DOT language
    Dot {
        /// JSON file with the raw definitions (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the digraph (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: DiagramOptions,
    },

    /// Print statistics about the definitions
    Statistics {
        /// JSON file with the raw definitions (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the statistics (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check that the definitions build a valid codebase
    Validate {
        /// JSON file with the raw definitions (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Diagram knobs; each flag overrides the value read from --config
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagramOptions {
    /// JSON configuration file used as the base configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not show attributes (constants are still shown)
    #[arg(long, overrides_with = "show_attributes")]
    pub hide_attributes: bool,

    /// Show attributes even if the configuration file hides them
    #[arg(long, overrides_with = "hide_attributes")]
    pub show_attributes: bool,

    /// Do not show methods
    #[arg(long, overrides_with = "show_methods")]
    pub hide_methods: bool,

    /// Show methods even if the configuration file hides them
    #[arg(long, overrides_with = "hide_methods")]
    pub show_methods: bool,

    /// Do not show private attributes and methods
    #[arg(long, overrides_with = "show_private")]
    pub hide_private: bool,

    /// Show private members even if the configuration file hides them
    #[arg(long, overrides_with = "hide_private")]
    pub show_private: bool,

    /// Do not show protected attributes and methods
    #[arg(long, overrides_with = "show_protected")]
    pub hide_protected: bool,

    /// Show protected members even if the configuration file hides them
    #[arg(long, overrides_with = "hide_protected")]
    pub show_protected: bool,

    /// Do not draw association edges
    #[arg(long, overrides_with = "associations")]
    pub no_associations: bool,

    /// Draw association edges even if the configuration file disables them
    #[arg(long, overrides_with = "no_associations")]
    pub associations: bool,

    /// Leave empty attribute and method blocks out of the labels
    #[arg(long, overrides_with = "show_empty_blocks")]
    pub hide_empty_blocks: bool,

    /// Keep empty blocks even if the configuration file hides them
    #[arg(long, overrides_with = "hide_empty_blocks")]
    pub show_empty_blocks: bool,

    /// Color theme for the diagram
    #[arg(long, value_enum)]
    pub theme: Option<ThemeChoice>,
}

/// Supported color themes
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ThemeChoice {
    Phuml,
    Php,
    Classic,
}

impl From<ThemeChoice> for ThemeName {
    fn from(value: ThemeChoice) -> Self {
        match value {
            ThemeChoice::Phuml => ThemeName::Phuml,
            ThemeChoice::Php => ThemeName::Php,
            ThemeChoice::Classic => ThemeName::Classic,
        }
    }
}

impl DiagramOptions {
    /// Flags applied on top of a base configuration; a flag left unset keeps
    /// the base value
    pub fn apply(&self, mut configuration: DigraphConfiguration) -> DigraphConfiguration {
        toggle(&mut configuration.hide_attributes, self.hide_attributes, self.show_attributes);
        toggle(&mut configuration.hide_methods, self.hide_methods, self.show_methods);
        toggle(&mut configuration.hide_private, self.hide_private, self.show_private);
        toggle(&mut configuration.hide_protected, self.hide_protected, self.show_protected);
        toggle(
            &mut configuration.hide_empty_blocks,
            self.hide_empty_blocks,
            self.show_empty_blocks,
        );
        toggle(
            &mut configuration.extract_associations,
            self.associations,
            self.no_associations,
        );
        if let Some(theme) = self.theme {
            configuration.theme = theme.into();
        }
        configuration
    }
}

fn toggle(value: &mut bool, on: bool, off: bool) {
    if on {
        *value = true;
    } else if off {
        *value = false;
    }
}

/// Main CLI application
#[derive(Default)]
pub struct PhumlApp;

impl PhumlApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        let log_level = cli.log_level.map(|l| l.as_str());
        let log_format = cli.log_format.map(|f| f.as_str());
        if let Err(e) = init_logging(log_level, log_format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("phUML v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Dot {
                input,
                output,
                options,
            } => self.dot_command(input, output, &options, cli.verbose),
            Commands::Statistics {
                input,
                output,
                json,
            } => self.statistics_command(input, output, json, cli.verbose),
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
        }
    }

    /// Handle the dot command
    fn dot_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        options: &DiagramOptions,
        verbose: bool,
    ) -> Result<()> {
        let configuration = self.configuration(options)?;
        debug!(?configuration, "Resolved configuration");

        let raws = self.read_definitions(input, verbose)?;
        let digraph = DigraphGenerator::from_configuration(&configuration)?.generate(&raws)?;

        if verbose {
            eprintln!("Generated digraph for {} definitions", raws.len());
        }
        self.write_output(output, &digraph)
    }

    /// Handle the statistics command
    fn statistics_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let raws = self.read_definitions(input, verbose)?;
        let codebase = StructureBuilder::new().build(&raws)?;

        let text = if json {
            serde_json::to_string_pretty(&Summary::from(&codebase))?
        } else {
            StatisticsProcessor::new()?.process(&codebase)?
        };
        self.write_output(output, &text)
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let raws = self.read_definitions(input, verbose)?;
        match StructureBuilder::new().build(&raws) {
            Ok(codebase) => {
                println!(
                    "✓ Valid codebase: {} classes, {} interfaces",
                    codebase.classes().count(),
                    codebase.interfaces().count()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid codebase: {}", e);
                Err(anyhow!("Validation failed"))
            }
        }
    }

    /// Base configuration from --config, then the flags on top
    pub fn configuration(&self, options: &DiagramOptions) -> Result<DigraphConfiguration> {
        let base = match &options.config {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| {
                    anyhow!("Failed to read config file '{}': {}", path.display(), e)
                })?;
                DigraphConfiguration::from_json(&json)
                    .with_context(|| format!("Invalid config file '{}'", path.display()))?
            }
            None => DigraphConfiguration::default(),
        };
        Ok(options.apply(base))
    }

    fn read_definitions(&self, input: Option<PathBuf>, verbose: bool) -> Result<Vec<RawDefinition>> {
        let content = self.read_input(input)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }
        Ok(RawDefinition::list_from_json(&content)?)
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout();
                stdout.write_all(content.as_bytes())?;
                if !content.is_empty() && !content.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing_dot_command() {
        let args = vec![
            "phuml",
            "dot",
            "--input",
            "codebase.json",
            "--output",
            "diagram.dot",
            "--hide-private",
            "--theme",
            "php",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Dot {
                input,
                output,
                options,
            } => {
                assert_eq!(input.unwrap().to_string_lossy(), "codebase.json");
                assert_eq!(output.unwrap().to_string_lossy(), "diagram.dot");
                assert!(options.hide_private);
                assert!(!options.hide_protected);
                assert!(!options.no_associations);
                assert_eq!(options.theme, Some(ThemeChoice::Php));
            }
            _ => panic!("Expected Dot command"),
        }
    }

    #[test]
    fn test_cli_parsing_all_diagram_flags() {
        let args = vec![
            "phuml",
            "dot",
            "--hide-attributes",
            "--hide-methods",
            "--hide-protected",
            "--no-associations",
            "--hide-empty-blocks",
            "--config",
            "phuml.json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Dot { options, .. } => {
                assert!(options.hide_attributes);
                assert!(options.hide_methods);
                assert!(options.hide_protected);
                assert!(options.no_associations);
                assert!(options.hide_empty_blocks);
                assert_eq!(options.config.unwrap().to_string_lossy(), "phuml.json");
            }
            _ => panic!("Expected Dot command"),
        }
    }

    #[test]
    fn test_cli_parsing_statistics_command() {
        let args = vec!["phuml", "statistics", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Statistics { input, json, .. } => {
                assert!(input.is_none());
                assert!(json);
            }
            _ => panic!("Expected Statistics command"),
        }
    }

    #[test]
    fn test_cli_parsing_validate_command() {
        let args = vec!["phuml", "validate", "-i", "codebase.json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Validate { input } => {
                assert_eq!(input.unwrap().to_string_lossy(), "codebase.json");
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parsing_logging_flags() {
        let args = vec!["phuml", "--log-level", "debug", "--log-format", "json", "validate"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.log_format, Some(LogFormat::Json));

        let cli = Cli::try_parse_from(vec!["phuml", "validate"]).unwrap();
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_theme() {
        let args = vec!["phuml", "dot", "--theme", "neon"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_verbose_flag() {
        let args = vec!["phuml", "--verbose", "dot"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_options_override_base_configuration() {
        let base = DigraphConfiguration::new()
            .with_hidden_methods(true)
            .with_theme(ThemeName::Classic);
        let options = DiagramOptions {
            no_associations: true,
            theme: Some(ThemeChoice::Php),
            ..Default::default()
        };

        let configuration = options.apply(base);
        assert!(configuration.hide_methods);
        assert!(!configuration.extract_associations);
        assert_eq!(configuration.theme, ThemeName::Php);
    }

    #[test]
    fn test_negating_flags_switch_off_base_configuration() {
        let base = DigraphConfiguration::new()
            .with_hidden_private(true)
            .with_hidden_empty_blocks(true)
            .with_associations(false);
        let cli = Cli::try_parse_from([
            "phuml",
            "dot",
            "--show-private",
            "--show-empty-blocks",
            "--associations",
        ])
        .unwrap();
        let Commands::Dot { options, .. } = cli.command else {
            panic!("expected dot command");
        };

        let configuration = options.apply(base);
        assert!(!configuration.hide_private);
        assert!(!configuration.hide_empty_blocks);
        assert!(configuration.extract_associations);
    }

    #[test]
    fn test_last_of_opposite_flags_wins() {
        let cli =
            Cli::try_parse_from(["phuml", "dot", "--hide-private", "--show-private"]).unwrap();
        let Commands::Dot { options, .. } = cli.command else {
            panic!("expected dot command");
        };
        assert!(!options.hide_private);
        assert!(options.show_private);
        assert!(!options.apply(DigraphConfiguration::new()).hide_private);
    }

    #[test]
    fn test_configuration_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("phuml.json");
        fs::write(&path, r#"{"hide_private": true, "theme": "classic"}"#).unwrap();

        let options = DiagramOptions {
            config: Some(path),
            hide_protected: true,
            ..Default::default()
        };
        let configuration = PhumlApp::new().configuration(&options).unwrap();
        assert!(configuration.hide_private);
        assert!(configuration.hide_protected);
        assert_eq!(configuration.theme, ThemeName::Classic);
    }

    #[test]
    fn test_configuration_file_missing() {
        let options = DiagramOptions {
            config: Some(PathBuf::from("/nonexistent/phuml.json")),
            ..Default::default()
        };
        let err = PhumlApp::new().configuration(&options).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_read_input_from_file() {
        let app = PhumlApp::new();
        let input = r#"[{"kind": "class", "name": "User"}]"#;

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("codebase.json");
        fs::write(&file_path, input).unwrap();

        let content = app.read_input(Some(file_path)).unwrap();
        assert_eq!(content, input);
    }

    #[test]
    fn test_write_output_to_file() {
        let app = PhumlApp::new();
        let output = "digraph \"phUML\" {\n}\n";

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("diagram.dot");

        app.write_output(Some(file_path.clone()), output).unwrap();

        let read_content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(read_content, output);
    }

    #[test]
    fn test_dot_command_writes_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("codebase.json");
        let output = dir.path().join("diagram.dot");
        fs::write(
            &input,
            r#"[{"kind": "class", "name": "Animal"}, {"kind": "class", "name": "Dog", "extends": "Animal"}]"#,
        )
        .unwrap();

        PhumlApp::new()
            .dot_command(Some(input), Some(output.clone()), &DiagramOptions::default(), false)
            .unwrap();

        let dot = fs::read_to_string(&output).unwrap();
        assert!(dot.contains("\"Animal\" -> \"Dog\""));
    }
}
