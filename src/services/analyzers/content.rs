use crate::models::config::UnitOptions;
use crate::models::qa::Snapshot;
use crate::services::analyzers::Analyzer;
use crate::utils::{count_elements, parse_document, visible_text};
use async_trait::async_trait;
use serde_json::{json, Value};

pub const NAME: &str = "content";

const DEFAULT_MIN_WORDS: u64 = 100;

pub struct ContentAnalyzer {
    min_words: u64,
}

impl ContentAnalyzer {
    pub fn new(options: UnitOptions) -> Self {
        Self {
            min_words: options.u64_setting("min_words").unwrap_or(DEFAULT_MIN_WORDS),
        }
    }

    fn summarise(&self, snapshot: &Snapshot) -> Value {
        let document = parse_document(&snapshot.html);
        let word_count = visible_text(&document).split_whitespace().count() as u64;
        let title = snapshot.title.trim();

        json!({
            "has_title": !title.is_empty(),
            "title_length": title.chars().count(),
            "word_count": word_count,
            "thin_content": word_count < self.min_words,
            "headings": {
                "h1": count_elements(&document, "h1"),
                "h2": count_elements(&document, "h2"),
                "h3": count_elements(&document, "h3"),
            },
        })
    }
}

#[async_trait]
impl Analyzer for ContentAnalyzer {
    fn name(&self) -> &str {
        NAME
    }

    async fn analyze(&self, snapshot: &Snapshot) -> anyhow::Result<Value> {
        Ok(self.summarise(snapshot))
    }
}
