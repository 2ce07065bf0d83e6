use anyhow::Context;
use clap::error::ErrorKind;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use tls_metadata_check::adapters::outbound::console::StderrProgressReporter;
use tls_metadata_check::adapters::outbound::filesystem::FileSystemRegistryReader;
use tls_metadata_check::adapters::outbound::formatters::MarkdownReportRenderer;
use tls_metadata_check::application::dto::{ComplianceRequest, OutputFormat};
use tls_metadata_check::application::factories::{FormatterFactory, PresenterFactory};
use tls_metadata_check::application::use_cases::CheckComplianceUseCase;
use tls_metadata_check::cli::Args;
use tls_metadata_check::compliance::domain::MetadataField;
use tls_metadata_check::compliance::policies::RuleSet;
use tls_metadata_check::config::{self, ConfigFile};
use tls_metadata_check::shared::error::{ComplianceError, ExitCode};
use tls_metadata_check::shared::Result;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // Help and version requests are not failures
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            exit_code_for(&e)
        }
    };

    process::exit(code.as_i32());
}

/// Settings for one run after merging the config file and the command line
#[derive(Debug, PartialEq)]
struct Settings {
    format: OutputFormat,
    rules: RuleSet,
    audit_fields: Vec<MetadataField>,
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = merge_settings(&args, config.as_ref())?;

    // Create adapters (Dependency Injection)
    let registry_reader = FileSystemRegistryReader::new();
    let renderer = MarkdownReportRenderer::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = CheckComplianceUseCase::new(registry_reader, renderer, progress_reporter);

    let mut request = ComplianceRequest::new(args.registry.clone(), settings.rules);
    if let Some(baseline) = args.baseline.clone() {
        request = request.with_baseline(baseline, settings.audit_fields);
    }

    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let output = formatter.format(&response.violations, response.audit.as_ref())?;

    let presenter = PresenterFactory::create(args.output);
    presenter.present(&output)?;

    if response.has_findings() {
        Ok(ExitCode::ViolationsDetected)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Loads the explicit config file, or discovers one next to the registry
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path).map(Some);
    }
    config::discover_config(&registry_dir(&args.registry))
}

fn registry_dir(registry: &Path) -> PathBuf {
    match registry.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Command-line values win over config values, which win over defaults
fn merge_settings(args: &Args, config: Option<&ConfigFile>) -> Result<Settings> {
    let format = match (args.format, config.and_then(|c| c.format.as_deref())) {
        (Some(format), _) => format,
        (None, Some(name)) => OutputFormat::from_str(name)
            .map_err(anyhow::Error::msg)
            .context("Invalid config: format")?,
        (None, None) => OutputFormat::default(),
    };

    let rules = if !args.rules.is_empty() {
        RuleSet::parse(&args.rules).map_err(|message| ComplianceError::Validation { message })?
    } else {
        match config {
            Some(config) => config.rule_set()?.unwrap_or_default(),
            None => RuleSet::default(),
        }
    };

    let audit_fields = match config {
        Some(config) => config.audit_fields()?,
        None => None,
    }
    .unwrap_or_else(|| vec![MetadataField::Description]);

    Ok(Settings {
        format,
        rules,
        audit_fields,
    })
}

/// Rule selections rejected on the command line count as invalid arguments
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ComplianceError>() {
        Some(ComplianceError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tls_metadata_check::compliance::policies::RuleId;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["tls-metadata-check", "-r", "dir/registry.json"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn config(yaml: &str) -> ConfigFile {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = merge_settings(&args(&[]), None).unwrap();

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.rules, RuleSet::default());
        assert_eq!(settings.audit_fields, vec![MetadataField::Description]);
    }

    #[test]
    fn test_config_values_apply() {
        let config = config("format: json\nrules: [missing-owner]\naudit_fields: [owner]\n");

        let settings = merge_settings(&args(&[]), Some(&config)).unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.rules.ids(), &[RuleId::MissingOwner]);
        assert_eq!(settings.audit_fields, vec![MetadataField::OwningComponent]);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = config("format: json\nrules: [missing-owner]\n");

        let settings = merge_settings(
            &args(&["-f", "markdown", "--rule", "missing-description"]),
            Some(&config),
        )
        .unwrap();

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.rules.ids(), &[RuleId::MissingDescription]);
    }

    #[test]
    fn test_invalid_cli_rule_is_invalid_argument() {
        let err = merge_settings(&args(&["--rule", "missing-expiry"]), None).unwrap_err();
        assert_eq!(exit_code_for(&err), ExitCode::InvalidArguments);
    }

    #[test]
    fn test_invalid_config_format_is_application_error() {
        let config = config("format: xml\n");

        let err = merge_settings(&args(&[]), Some(&config)).unwrap_err();

        assert!(format!("{:#}", err).contains("Invalid config: format"));
        assert_eq!(exit_code_for(&err), ExitCode::ApplicationError);
    }

    #[test]
    fn test_registry_dir() {
        assert_eq!(registry_dir(Path::new("registry.json")), PathBuf::from("."));
        assert_eq!(
            registry_dir(Path::new("dir/registry.json")),
            PathBuf::from("dir")
        );
    }
}
