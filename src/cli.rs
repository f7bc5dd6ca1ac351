use clap::Parser;

use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter};
use crate::ports::outbound::ReportFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'csv'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Returns
    /// A boxed ReportFormatter trait object appropriate for this format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Returns
    /// A static string containing the progress message to display
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Csv => "📝 Generating CSV report...",
        }
    }
}

/// Trace Debian container packages and correlate them with known vulnerabilities and bugs
#[derive(Parser, Debug)]
#[command(name = "debtective")]
#[command(version)]
#[command(about = "Trace Debian container packages and correlate them with known vulnerabilities and bugs", long_about = None)]
pub struct Args {
    /// Image reference to audit (e.g. debian:stretch)
    #[arg(short, long)]
    pub image: String,

    /// Directory holding the captured listing and data feeds
    #[arg(short, long)]
    pub data_dir: Option<String>,

    /// Output format: json or csv (defaults to json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Skip the bug tracker correlation
    #[arg(long)]
    pub skip_bugs: bool,

    /// Skip the registry metadata lookup
    #[arg(long)]
    pub offline: bool,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Exit with code 1 when vulnerabilities or bugs were found
    #[arg(long)]
    pub fail_on_findings: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
