use super::audit_registry::AuditRegistryUseCase;
use crate::application::dto::{ComplianceRequest, ComplianceResponse};
use crate::application::read_models::AuditReport;
use crate::compliance::domain::{Registry, Violation};
use crate::compliance::policies::RuleSet;
use crate::compliance::services::ViolationClassifier;
use crate::ports::outbound::{ProgressReporter, RegistryReader, ReportRenderer};
use crate::shared::Result;
use std::path::Path;

/// CheckComplianceUseCase - Core use case for a compliance run
///
/// Loads the registry, applies each selected rule and optionally audits the
/// registry against a baseline, using generic dependency injection for all
/// infrastructure dependencies.
///
/// # Type Parameters
/// * `RR` - RegistryReader implementation
/// * `R` - ReportRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckComplianceUseCase<RR, R, PR>
where
    R: ReportRenderer,
{
    registry_reader: RR,
    classifier: ViolationClassifier<R>,
    progress_reporter: PR,
}

impl<RR, R, PR> CheckComplianceUseCase<RR, R, PR>
where
    RR: RegistryReader,
    R: ReportRenderer,
    PR: ProgressReporter,
{
    /// Creates a new CheckComplianceUseCase with injected dependencies
    pub fn new(registry_reader: RR, renderer: R, progress_reporter: PR) -> Self {
        Self {
            registry_reader,
            classifier: ViolationClassifier::new(renderer),
            progress_reporter,
        }
    }

    /// Executes the compliance run
    ///
    /// # Returns
    /// One violation per rule, plus the audit report when a baseline was given
    ///
    /// # Errors
    /// Returns an error if a registry cannot be loaded or a report fails to render
    pub fn execute(&self, request: ComplianceRequest) -> Result<ComplianceResponse> {
        // Step 1: Load the registry snapshot
        let registry = self.load_registry(&request.registry_path, "registry")?;

        // Step 2: Apply every rule
        let violations = self.classify(&request.rules, &registry)?;

        // Step 3: Audit against the baseline if requested
        let audit = match &request.baseline_path {
            Some(baseline_path) => Some(self.audit(&registry, baseline_path, &request)?),
            None => None,
        };

        let response = ComplianceResponse::new(registry.len(), violations, audit);
        self.progress_reporter.report_completion(&format!(
            "✅ Checked {} entries: {} offending across {} rule(s)",
            response.entry_count,
            response.offending_count(),
            request.rules.len()
        ));
        Ok(response)
    }

    fn load_registry(&self, path: &Path, label: &str) -> Result<Registry> {
        self.progress_reporter
            .report(&format!("🔍 Loading {}: {}", label, path.display()));
        let registry = self.registry_reader.read_registry(path)?;
        self.progress_reporter.report(&format!(
            "   Found {} certificate/key pairs and {} CA bundles",
            registry.cert_key_pairs.len(),
            registry.certificate_authority_bundles.len()
        ));
        Ok(registry)
    }

    fn classify(&self, rules: &RuleSet, registry: &Registry) -> Result<Vec<Violation>> {
        let total = rules.len();
        let mut violations = Vec::with_capacity(total);

        for (index, rule) in rules.rules().enumerate() {
            self.progress_reporter
                .report_progress(index, total, Some(rule.name()));
            violations.push(self.classifier.classify_with(rule, rule.name(), registry)?);
        }
        self.progress_reporter.report_progress(total, total, None);

        Ok(violations)
    }

    fn audit(
        &self,
        registry: &Registry,
        baseline_path: &Path,
        request: &ComplianceRequest,
    ) -> Result<AuditReport> {
        let expected = self.load_registry(baseline_path, "baseline")?;
        let report = AuditRegistryUseCase::new(request.audit_fields.clone()).execute(registry, &expected);

        if !report.missing.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  {} baseline entries are missing from the registry",
                report.missing.len()
            ));
        }
        Ok(report)
    }
}
