/// A binary package found installed in the audited container.
///
/// Produced by the extractor from raw `dpkg -l` listing lines and immutable
/// thereafter. The architecture qualifier (e.g. `:amd64`) has already been
/// stripped from the package name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstalledPackage {
    /// Identifier of the container the package was found in
    pub container_id: String,
    /// Binary package name, without architecture qualifier
    pub package: String,
    /// Installed version string
    pub version: String,
}

impl InstalledPackage {
    pub fn new(
        container_id: impl Into<String>,
        package: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            container_id: container_id.into(),
            package: package.into(),
            version: version.into(),
        }
    }
}
