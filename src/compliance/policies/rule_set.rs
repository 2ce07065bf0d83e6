use super::metadata_rule::{ComplianceRule, MissingDescription, MissingOwner};
use std::fmt;
use std::str::FromStr;

static MISSING_DESCRIPTION: MissingDescription = MissingDescription;
static MISSING_OWNER: MissingOwner = MissingOwner;

/// Identifier of a built-in compliance rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    MissingDescription,
    MissingOwner,
}

impl RuleId {
    pub fn rule(&self) -> &'static dyn ComplianceRule {
        match self {
            RuleId::MissingDescription => &MISSING_DESCRIPTION,
            RuleId::MissingOwner => &MISSING_OWNER,
        }
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "missing-description" | "description" => Ok(RuleId::MissingDescription),
            "missing-owner" | "owner" => Ok(RuleId::MissingOwner),
            _ => Err(format!(
                "Invalid rule: {}. Please specify 'missing-description' or 'missing-owner'",
                s
            )),
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule().name())
    }
}

/// Ordered, duplicate-free selection of rules for one compliance run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    ids: Vec<RuleId>,
}

impl RuleSet {
    /// Builds a rule set, dropping repeated ids but keeping first-seen order
    pub fn new(ids: impl IntoIterator<Item = RuleId>) -> Self {
        let mut unique = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self { ids: unique }
    }

    /// Parses rule identifiers such as `missing-description`
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, String> {
        let ids = names
            .iter()
            .map(|name| RuleId::from_str(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(ids))
    }

    pub fn ids(&self) -> &[RuleId] {
        &self.ids
    }

    pub fn rules(&self) -> impl Iterator<Item = &'static dyn ComplianceRule> + '_ {
        self.ids.iter().map(RuleId::rule)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new([RuleId::MissingDescription])
    }
}
