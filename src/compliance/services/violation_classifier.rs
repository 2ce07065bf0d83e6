use crate::compliance::domain::{Registry, RegistryEntry, Violation};
use crate::compliance::policies::{ComplianceRule, GroupKey, MissingDescription, RuleSet};
use crate::ports::outbound::ReportRenderer;
use crate::shared::Result;

/// Splits `registry` into the entries that violate `rule` and those that comply
///
/// Both halves keep the input order. Every entry lands in exactly one half.
pub fn partition(rule: &dyn ComplianceRule, registry: &Registry) -> (Registry, Registry) {
    let (offending_certs, compliant_certs) = split_entries(rule, &registry.cert_key_pairs);
    let (offending_bundles, compliant_bundles) =
        split_entries(rule, &registry.certificate_authority_bundles);

    (
        Registry::new(offending_certs, offending_bundles),
        Registry::new(compliant_certs, compliant_bundles),
    )
}

fn split_entries<E: RegistryEntry + Clone>(
    rule: &dyn ComplianceRule,
    entries: &[E],
) -> (Vec<E>, Vec<E>) {
    entries
        .iter()
        .cloned()
        .partition(|entry| rule.violates(entry.metadata()))
}

/// Offending entries the report cannot list because they have no group key
fn count_unattributed(group_by: GroupKey, registry: &Registry) -> usize {
    let certs = registry
        .cert_key_pairs
        .iter()
        .filter(|entry| group_by.key_for(*entry).is_none())
        .count();
    let bundles = registry
        .certificate_authority_bundles
        .iter()
        .filter(|entry| group_by.key_for(*entry).is_none())
        .count();
    certs + bundles
}

/// ViolationClassifier - Applies compliance rules and renders their reports
///
/// Classification is a pure filter over the registry; the only fallible
/// step is rendering, whose errors are propagated unchanged.
pub struct ViolationClassifier<R: ReportRenderer> {
    renderer: R,
}

impl<R: ReportRenderer> ViolationClassifier<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Collects every entry without a description into a violation named `name`
    pub fn classify(&self, name: &str, registry: &Registry) -> Result<Violation> {
        self.classify_with(&MissingDescription, name, registry)
    }

    /// Collects every entry violating `rule` into a violation named `name`
    ///
    /// The returned violation's registry holds the offending entries in input
    /// order and its markdown holds the rendered report for that subset.
    pub fn classify_with(
        &self,
        rule: &dyn ComplianceRule,
        name: &str,
        registry: &Registry,
    ) -> Result<Violation> {
        let (offending, _) = partition(rule, registry);
        let layout = rule.report_layout();
        let markdown = self.renderer.render(&layout, &offending)?;
        let unattributed = count_unattributed(layout.group_by, &offending);
        Ok(Violation::new(name, offending, markdown).with_unattributed(unattributed))
    }

    /// Runs every rule of `rules`, one violation per rule, in rule order
    pub fn classify_all(&self, rules: &RuleSet, registry: &Registry) -> Result<Vec<Violation>> {
        rules
            .rules()
            .map(|rule| self.classify_with(rule, rule.name(), registry))
            .collect()
    }
}
