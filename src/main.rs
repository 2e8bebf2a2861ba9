mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod sbom_conversion;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{
    FileSystemReader, FileSystemSource, FileSystemWriter, StdoutPresenter,
};
use adapters::outbound::formatters::SpdxJsonFormatter;
use application::dto::{ConvertRequest, PruneRequest};
use application::use_cases::{ConvertSbomUseCase, PruneDependenciesUseCase};
use cli::{Cli, Command, ConvertArgs, PruneArgs};
use config::ConfigFile;
use ports::outbound::{OutputPresenter, SbomFormatter};
use sbom_conversion::domain::ProjectContext;
use shared::error::ExitCode;
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(cli) {
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

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Convert(args) => run_convert(args),
        Command::Prune(args) => run_prune(args),
    }
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    // CLI values take precedence over the config file
    let context = ProjectContext::new(&args.namespace, &args.project_uuid)
        .with_organization(args.organization.or(config.organization))
        .with_person_email(args.person_email.or(config.person_email))
        .with_namespace_base(config.document_namespace_base)
        .with_application_version(config.application_version);

    // Create adapters (Dependency Injection)
    let source = FileSystemSource::for_conversion(args.cyclonedx, args.dependencies);
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ConvertSbomUseCase::new(source, progress_reporter);
    let response = use_case.execute(ConvertRequest::new(context))?;

    eprintln!("📝 Generating SPDX 2.3 JSON output...");
    let formatted_output = SpdxJsonFormatter::new().format(&response.document)?;
    present(&formatted_output, args.output)?;

    Ok(())
}

fn run_prune(args: PruneArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    // Config keys first, then -e; the exclusion file is merged by the use case
    let mut exclusion_keys = config.exclusion_keys();
    exclusion_keys.extend(args.exclude);

    let source = FileSystemSource::for_pruning(args.spdx);
    let exclusion_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = PruneDependenciesUseCase::new(source, exclusion_reader, progress_reporter);
    let response = use_case.execute(PruneRequest::new(args.exclusions, exclusion_keys))?;

    let formatter = SpdxJsonFormatter::new();

    if let Some(original_path) = args.original_output {
        let original_output = formatter.format(&response.original)?;
        FileSystemWriter::new(original_path.clone()).present(&original_output)?;
        eprintln!(
            "💾 Unpruned document written to {}",
            original_path.display()
        );
    }

    eprintln!("📝 Generating SPDX 2.3 JSON output...");
    let formatted_output = formatter.format(&response.document)?;
    present(&formatted_output, args.output)?;

    Ok(())
}

/// Loads the config given with `-c`, or discovers one in the working directory
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path);
    }

    let cwd = std::env::current_dir()?;
    Ok(config::discover_config(&cwd)?.unwrap_or_default())
}

fn present(content: &str, output: Option<PathBuf>) -> Result<()> {
    let presenter: Box<dyn OutputPresenter> = match output {
        Some(ref output_path) => Box::new(FileSystemWriter::new(output_path.clone())),
        None => Box::new(StdoutPresenter::new()),
    };

    presenter.present(content)?;

    if let Some(output_path) = output {
        eprintln!("✅ SPDX document written to {}", output_path.display());
    }
    Ok(())
}
