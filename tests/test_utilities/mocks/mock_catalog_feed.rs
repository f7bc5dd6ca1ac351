use debtective::prelude::*;

/// Mock CatalogFeed for testing, built from in-memory entries
pub struct MockCatalogFeed {
    pub entries: Vec<CatalogEntry>,
    pub should_fail: bool,
}

impl MockCatalogFeed {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            entries: vec![],
            should_fail: true,
        }
    }
}

impl CatalogFeed for MockCatalogFeed {
    fn load_catalog(&self) -> Result<PackageCatalog> {
        if self.should_fail {
            anyhow::bail!("Mock catalog load failure");
        }
        Ok(PackageCatalog::new(self.entries.clone()))
    }
}
