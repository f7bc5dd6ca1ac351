use std::collections::HashMap;

use async_trait::async_trait;
use debtective::correlation::domain::BugOrigin;
use debtective::prelude::*;

/// Mock BugFeed for testing
#[derive(Default)]
pub struct MockBugFeed {
    bugs: HashMap<String, Vec<BugRecord>>,
    should_fail: bool,
}

impl MockBugFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bug(
        mut self,
        source: &str,
        debianbug: u64,
        found_in: &str,
        fixed_in: Option<&str>,
    ) -> Self {
        self.bugs
            .entry(source.to_string())
            .or_default()
            .push(BugRecord {
                source: source.to_string(),
                debianbug,
                found_in: found_in.to_string(),
                fixed_in: fixed_in.map(String::from),
                origin: BugOrigin::Normal,
                status: "open".to_string(),
                severity: "normal".to_string(),
                arrival: None,
                last_modified: None,
            });
        self
    }

    pub fn with_failure() -> Self {
        Self {
            bugs: HashMap::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl BugFeed for MockBugFeed {
    async fn fetch_bugs(&self, source: &str) -> Result<Vec<BugRecord>> {
        if self.should_fail {
            anyhow::bail!("Mock bug fetch failure");
        }
        Ok(self.bugs.get(source).cloned().unwrap_or_default())
    }
}
