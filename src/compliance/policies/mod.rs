mod metadata_rule;
mod rule_set;

pub use metadata_rule::{ComplianceRule, GroupKey, MissingDescription, MissingOwner, ReportLayout};
pub use rule_set::{RuleId, RuleSet};
