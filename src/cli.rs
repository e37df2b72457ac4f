use clap::Parser;

use crate::adapters::outbound::formatters::{JsonReportFormatter, TableReportFormatter};
use crate::ports::outbound::ReportFormatter;

#[derive(Debug, Clone, Copy)]
pub enum ReportFormat {
    Json,
    Table,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "table" | "txt" => Ok(ReportFormat::Table),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'table'",
                s
            )),
        }
    }
}

impl ReportFormat {
    /// Creates a formatter instance for the specified report format
    ///
    /// # Returns
    /// A boxed ReportFormatter trait object appropriate for this format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            ReportFormat::Json => Box::new(JsonReportFormatter::new()),
            ReportFormat::Table => Box::new(TableReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified report format
    pub fn progress_message(&self) -> &'static str {
        match self {
            ReportFormat::Json => "📝 Generating JSON report...",
            ReportFormat::Table => "📝 Generating table report...",
        }
    }
}

/// Check SAP security note applicability for a client system snapshot
#[derive(Parser, Debug)]
#[command(name = "sapnote-check")]
#[command(version)]
#[command(
    about = "Match a client system's installed components against a monthly SAP security note batch",
    long_about = None
)]
pub struct Args {
    /// Path to the client system snapshot (JSON)
    #[arg(short, long)]
    pub system: String,

    /// Path to the monthly note batch document (JSON)
    #[arg(short, long)]
    pub batch: String,

    /// Report format: json or table (defaults to json)
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Also record NOT_APPLICABLE rows (full matrix instead of the
    /// default sparse, APPLICABLE-only result set)
    #[arg(long)]
    pub full_matrix: bool,

    /// Path to a config file (defaults to ./sapnote-check.config.yml if present)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
