use crate::models::config::UnitOptions;
use crate::models::qa::Snapshot;
use crate::services::analyzers::Analyzer;
use crate::utils::{count_elements, parse_document, select};
use async_trait::async_trait;
use serde_json::{json, Value};

pub const NAME: &str = "layout";

const DEFAULT_MOBILE_BREAKPOINT: u64 = 768;

pub struct LayoutAnalyzer {
    mobile_breakpoint: u64,
}

impl LayoutAnalyzer {
    pub fn new(options: UnitOptions) -> Self {
        Self {
            mobile_breakpoint: options
                .u64_setting("mobile_breakpoint")
                .unwrap_or(DEFAULT_MOBILE_BREAKPOINT),
        }
    }

    fn summarise(&self, snapshot: &Snapshot) -> Value {
        let document = parse_document(&snapshot.html);
        let responsive_meta = select(&document, "meta[name]").iter().any(|meta| {
            meta.value()
                .attr("name")
                .is_some_and(|n| n.eq_ignore_ascii_case("viewport"))
        });

        json!({
            "viewport": {
                "width": snapshot.viewport.width,
                "height": snapshot.viewport.height,
            },
            "mobile_viewport": u64::from(snapshot.viewport.width) < self.mobile_breakpoint,
            "responsive_meta": responsive_meta,
            "image_count": count_elements(&document, "img"),
            "section_count": count_elements(&document, "section, article"),
            "has_navigation": count_elements(&document, "nav") > 0,
        })
    }
}

#[async_trait]
impl Analyzer for LayoutAnalyzer {
    fn name(&self) -> &str {
        NAME
    }

    async fn analyze(&self, snapshot: &Snapshot) -> anyhow::Result<Value> {
        Ok(self.summarise(snapshot))
    }
}
