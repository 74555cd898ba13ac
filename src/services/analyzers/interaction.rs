use crate::models::config::UnitOptions;
use crate::models::qa::Snapshot;
use crate::services::analyzers::Analyzer;
use async_trait::async_trait;
use serde_json::{json, Value};

pub const NAME: &str = "interaction";

const DEFAULT_MAX_LISTED: u64 = 20;

/// Describes forms and interactive elements, the building blocks of user flows.
pub struct InteractionAnalyzer {
    max_listed: usize,
}

impl InteractionAnalyzer {
    pub fn new(options: UnitOptions) -> Self {
        let max_listed = options.u64_setting("max_listed").unwrap_or(DEFAULT_MAX_LISTED);
        Self {
            max_listed: usize::try_from(max_listed).unwrap_or(usize::MAX),
        }
    }
}

#[async_trait]
impl Analyzer for InteractionAnalyzer {
    fn name(&self) -> &str {
        NAME
    }

    async fn analyze(&self, snapshot: &Snapshot) -> anyhow::Result<Value> {
        let unlabeled: Vec<&str> = snapshot
            .interactive_elements
            .iter()
            .filter(|e| e.label.as_deref().map(str::trim).unwrap_or_default().is_empty())
            .map(|e| e.selector.as_deref().unwrap_or(e.tag_name.as_str()))
            .take(self.max_listed)
            .collect();
        let form_fields: usize = snapshot.forms.iter().map(|f| f.field_count).sum();

        Ok(json!({
            "form_count": snapshot.forms.len(),
            "form_field_count": form_fields,
            "interactive_element_count": snapshot.interactive_elements.len(),
            "unlabeled_elements": unlabeled,
        }))
    }
}
