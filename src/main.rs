use std::path::{Path, PathBuf};
use std::process;

use owo_colors::OwoColorize;

use debtective::adapters::outbound::console::StderrProgressReporter;
use debtective::adapters::outbound::filesystem::{
    BugCsvReader, CatalogCsvReader, DpkgListingReader, FileSystemWriter, StdoutPresenter,
    VulnerabilityJsonReader,
};
use debtective::adapters::outbound::network::{CachingImageMetadataClient, DockerHubMetadataClient};
use debtective::application::dto::{AuditRequest, AuditResponse};
use debtective::application::use_cases::RunAuditUseCase;
use debtective::cli::{Args, OutputFormat};
use debtective::config::{self, ConfigFile};
use debtective::ports::outbound::OutputPresenter;
use debtective::shared::error::{AuditError, ExitCode};
use debtective::shared::Result;

#[tokio::main]
async fn main() {
    // Invalid arguments exit with code 2 via clap before we get here
    let args = Args::parse_args();

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;

    // CLI arguments take precedence over config file values
    let data_dir = args
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(|| "data".to_string());
    let data_dir = PathBuf::from(data_dir);
    validate_data_dir(&data_dir)?;

    let format = args
        .format
        .or_else(|| config.format.as_deref().and_then(|f| f.parse().ok()))
        .unwrap_or(OutputFormat::Json);
    let check_bugs = !(args.skip_bugs || config.skip_bugs.unwrap_or(false));
    let offline = args.offline || config.offline.unwrap_or(false);
    let fail_on_findings = args.fail_on_findings || config.fail_on_findings.unwrap_or(false);

    let request = AuditRequest::new(args.image.clone(), check_bugs, !offline);

    // Create adapters (Dependency Injection)
    let listing_source = DpkgListingReader::new(&data_dir, &request.container_id());
    let catalog_feed = CatalogCsvReader::new(&data_dir);
    let vulnerability_feed = VulnerabilityJsonReader::new(&data_dir);
    let bug_feed = check_bugs.then(|| BugCsvReader::new(&data_dir));
    let metadata_client = if offline {
        None
    } else {
        Some(CachingImageMetadataClient::new(DockerHubMetadataClient::new()?))
    };
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = RunAuditUseCase::new(
        listing_source,
        catalog_feed,
        vulnerability_feed,
        bug_feed,
        metadata_client,
        progress_reporter,
    );

    let response = use_case.execute(request).await?;

    print_summary(&response);

    eprintln!("{}", format.progress_message());
    let formatter = format.create_formatter();
    let formatted_output = formatter.format(&response)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    if fail_on_findings && response.has_findings() {
        return Ok(ExitCode::FindingsDetected);
    }
    Ok(ExitCode::Success)
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(Path::new(path)),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

fn print_summary(response: &AuditResponse) {
    eprintln!();
    eprintln!("{}", "📦 Audit summary".bold());
    if !response.release.is_empty() {
        eprintln!("   Release: {}", response.release);
    }
    eprintln!("   Installed packages: {}", response.installed_count);
    eprintln!(
        "   Tracked: {} ({} untracked)",
        response.tracked_packages.len(),
        response.untracked_count()
    );

    let vuln_count = response.vulnerabilities.len();
    if vuln_count > 0 {
        eprintln!("   Vulnerabilities: {}", vuln_count.red().bold());
    } else {
        eprintln!("   Vulnerabilities: {}", "none".green());
    }

    match &response.bugs {
        Some(bugs) if !bugs.is_empty() => {
            eprintln!("   Defect reports: {}", bugs.len().red().bold());
        }
        Some(_) => eprintln!("   Defect reports: {}", "none".green()),
        None => eprintln!("   Defect reports: not checked"),
    }
    eprintln!();
}

fn validate_data_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AuditError::InvalidDataDir {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(AuditError::InvalidDataDir {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
