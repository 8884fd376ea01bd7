// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use reflow_mobile::app_config::{self, Config, OutputFormat};
use reflow_mobile::file_utils::FileManager;
use reflow_mobile::reflow::{MarkupDocument, ReflowEngine, count_characters};

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Markup,
    Plain,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Markup => OutputFormat::Markup,
            CliOutputFormat::Plain => OutputFormat::Plain,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reflow an article (or every article in a directory) into mobile markup
    Reflow(ReflowArgs),

    /// Count visible and total characters
    Count(CountArgs),

    /// Generate shell completions for reflow-mobile
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ReflowArgs {
    /// Input article file or directory of .txt/.md articles
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output file (single input only; stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output representation
    #[arg(long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

#[derive(Parser, Debug)]
struct CountArgs {
    /// Input article file
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Count the rendered visible text instead of the raw file
    #[arg(short, long)]
    rendered: bool,
}

/// reflow-mobile - Mobile text reflow for generated articles
///
/// Splits long article lines into short segments that read well on a phone,
/// keeps lists and tables intact, and renders headings and emphasis as
/// tiered style markup.
#[derive(Parser, Debug)]
#[command(name = "reflow-mobile")]
#[command(version)]
#[command(about = "Reflow generated articles for mobile reading")]
#[command(long_about = "reflow-mobile rewrites long article lines into short mobile-readable segments.

EXAMPLES:
    reflow-mobile reflow article.md                  # Print markup to stdout
    reflow-mobile reflow article.md -o out.markup    # Write markup to a file
    reflow-mobile reflow --format json article.md    # Emit markup nodes as JSON
    reflow-mobile reflow -f articles/                # Reflow every .txt/.md file in a directory
    reflow-mobile count article.md                   # Visible/total character counts
    reflow-mobile count --rendered article.md        # Counts of the rendered text
    reflow-mobile completions bash > reflow.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in reflow.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "reflow.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Prefix and ANSI colour for a log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "1;31"),
            Level::Warn => ("WARN ", "1;33"),
            Level::Info => ("INFO ", "1;32"),
            Level::Debug => ("DEBUG", "1;36"),
            Level::Trace => ("TRACE", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (prefix, colour) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour,
                now,
                prefix,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept everything at the logger; the max level does the filtering
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "reflow-mobile", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load_or_default(&cli.config_path)?;
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let engine = config.build_engine()?;

    match cli.command {
        Commands::Reflow(args) => run_reflow(&config, &engine, args),
        Commands::Count(args) => run_count(&engine, args),
        Commands::Completions { .. } => Ok(()),
    }
}

fn run_reflow(config: &Config, engine: &ReflowEngine, args: ReflowArgs) -> Result<()> {
    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.output.format);

    if args.input_path.is_file() {
        let rendered = render_file(engine, &args.input_path, format)?;
        match &args.output {
            Some(output) => {
                if output.exists() && !args.force_overwrite {
                    warn!("Output file already exists: {:?}. Use -f to force overwrite.", output);
                    return Ok(());
                }
                FileManager::write_to_file(output, &rendered)?;
                info!("Success: {:?}", output);
            }
            None => println!("{}", rendered),
        }
        return Ok(());
    }

    if args.input_path.is_dir() {
        if args.output.is_some() {
            return Err(anyhow!("--output cannot be used with a directory input"));
        }
        return reflow_folder(config, engine, &args.input_path, format, args.force_overwrite);
    }

    Err(anyhow!("Input path does not exist: {:?}", args.input_path))
}

// Helper function to process an entire folder of articles
fn reflow_folder(
    config: &Config,
    engine: &ReflowEngine,
    input_dir: &Path,
    format: OutputFormat,
    force_overwrite: bool,
) -> Result<()> {
    info!("Reflowing articles in directory: {:?}", input_dir);

    let articles = FileManager::find_articles(input_dir, &config.output.suffix)?;
    let mut processed_count = 0;

    for article in &articles {
        let output_dir = article.parent().unwrap_or(Path::new("."));
        let output = FileManager::generate_output_path(
            article,
            output_dir,
            &config.output.suffix,
            format.extension(),
        );

        if output.exists() && !force_overwrite {
            warn!("Skipping {:?}: output already exists. Use -f to force overwrite.", output);
            continue;
        }

        match render_file(engine, article, format)
            .and_then(|rendered| FileManager::write_to_file(&output, &rendered))
        {
            Ok(()) => {
                debug!("Wrote {:?}", output);
                processed_count += 1;
            }
            Err(e) => error!("Error processing file {:?}: {}", article, e),
        }
    }

    info!("Finished processing {} of {} files", processed_count, articles.len());

    Ok(())
}

// Helper function to reflow one file into the requested representation
fn render_file(engine: &ReflowEngine, path: &Path, format: OutputFormat) -> Result<String> {
    let raw = FileManager::read_to_string(path)?;

    let rendered = match format {
        OutputFormat::Markup => {
            let outcome = engine.reflow_outcome(&raw);
            if let Some(e) = &outcome.degraded {
                warn!("Kept {:?} unchanged: {}", path, e);
            }
            outcome.output
        }
        OutputFormat::Plain => render_document(engine, &raw)
            .map(|document| document.to_plain_text())
            .unwrap_or(raw),
        OutputFormat::Json => match render_document(engine, &raw) {
            Some(document) => document.to_json().context("Failed to serialize markup to JSON")?,
            None => serde_json::to_string_pretty(&raw).context("Failed to serialize text to JSON")?,
        },
    };

    Ok(rendered)
}

// Fail-soft document rendering for the non-markup formats
fn render_document(engine: &ReflowEngine, raw: &str) -> Option<MarkupDocument> {
    match engine.try_reflow(raw) {
        Ok(document) => Some(document),
        Err(e) => {
            warn!("Reflow failed, keeping original text: {}", e);
            None
        }
    }
}

fn run_count(engine: &ReflowEngine, args: CountArgs) -> Result<()> {
    let raw = FileManager::read_to_string(&args.input_path)?;

    let text = if args.rendered {
        render_document(engine, &raw)
            .map(|document| document.to_plain_text())
            .unwrap_or(raw)
    } else {
        raw
    };

    let count = count_characters(&text);
    println!("visible: {}", count.visible);
    println!("total: {}", count.total);

    Ok(())
}
