use super::markdown::MarkdownBuilder;
use crate::application::read_models::{ViolationReportBuilder, ViolationReportView};
use crate::compliance::domain::Registry;
use crate::compliance::policies::ReportLayout;
use crate::ports::outbound::ReportRenderer;
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use std::fmt;

/// MarkdownReportRenderer adapter rendering one rule's report as Markdown
///
/// Only attributable entries are listed, grouped by key in lexicographic
/// order. A report with nothing to list renders as an empty document.
pub struct MarkdownReportRenderer;

impl MarkdownReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write_report(md: &mut MarkdownBuilder, view: &ViolationReportView) -> fmt::Result {
        md.title(1, &view.title)?;
        md.title(2, &format!("{} ({})", view.heading, view.total_count()))?;

        for section in view.sections() {
            md.title(3, &format!("{} ({})", section.heading(), section.count()))?;
            md.ordered_list_start();
            for group in &section.groups {
                for location in &group.locations {
                    md.new_ordered_list_item()?;
                    md.textf(format_args!(
                        "ns/{} {}/{}\n",
                        location.namespace,
                        section.kind.resource(),
                        location.name
                    ))?;
                    md.textf(format_args!("**{}:** {}", view.group_label, group.key))?;
                    md.text("\n")?;
                }
            }
            md.ordered_list_end()?;
            md.text("\n")?;
        }
        Ok(())
    }
}

impl Default for MarkdownReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn render(&self, layout: &ReportLayout, registry: &Registry) -> Result<Vec<u8>> {
        let view = ViolationReportBuilder::build(layout, registry);
        if view.is_empty() {
            return Ok(Vec::new());
        }

        let mut md = MarkdownBuilder::new();
        Self::write_report(&mut md, &view).map_err(|e| ComplianceError::RenderError {
            title: view.title.clone(),
            details: e.to_string(),
        })?;
        Ok(md.into_bytes())
    }
}
