use crate::shared::Result;

/// PackageListingSource port for acquiring the raw package listing of a
/// container image.
///
/// How the listing is produced (running `dpkg -l` in a container, reading a
/// captured file) is an adapter concern; the core only consumes the ordered
/// sequence of raw lines.
pub trait PackageListingSource {
    /// Reads the content of the container's `/etc/debian_version`.
    ///
    /// # Returns
    /// The raw release version string; an empty string when the container
    /// does not report one.
    fn read_release_version(&self) -> Result<String>;

    /// Reads the raw `dpkg -l` listing, one line per entry.
    ///
    /// # Errors
    /// Returns an error if the listing cannot be acquired at all; an empty
    /// listing is a valid result, not an error.
    fn read_listing(&self) -> Result<Vec<String>>;
}
