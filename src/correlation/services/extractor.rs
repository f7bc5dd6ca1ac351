use std::collections::HashSet;

use crate::correlation::domain::InstalledPackage;

/// PackageExtractor service for parsing raw `dpkg -l` listing lines.
///
/// This is a pure transform: lines whose status flag does not mark the
/// package as fully installed (`ii`) are dropped, and malformed lines are
/// skipped rather than failing the batch.
pub struct PackageExtractor;

impl PackageExtractor {
    /// Extracts installed packages from a raw listing.
    ///
    /// Splitting happens on single spaces and duplicate tokens are collapsed
    /// while preserving first-occurrence order; that guards against listings
    /// whose alignment columns repeat the empty token a varying number of
    /// times. Tokens 3 and 4 of the collapsed line are the package name and
    /// version. The architecture qualifier after the last `:` is stripped
    /// from the name, and the output is deduplicated.
    pub fn extract(container_id: &str, lines: &[String]) -> Vec<InstalledPackage> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut packages = Vec::new();

        for line in lines {
            if !line.starts_with("ii") {
                continue;
            }

            let tokens = collapse_duplicates(line.split(' '));
            let (Some(package), Some(version)) = (tokens.get(2), tokens.get(3)) else {
                continue;
            };

            let package = strip_architecture(package).to_string();
            let version = version.to_string();
            if seen.insert((package.clone(), version.clone())) {
                packages.push(InstalledPackage::new(container_id, package, version));
            }
        }

        packages
    }
}

/// Collapses duplicate tokens, keeping the first occurrence of each.
fn collapse_duplicates<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    tokens.filter(|token| seen.insert(*token)).collect()
}

/// Strips the architecture qualifier (text after the last `:`) from a
/// binary package name, e.g. `libgcc1:amd64` becomes `libgcc1`.
fn strip_architecture(package: &str) -> &str {
    match package.rsplit_once(':') {
        Some((name, _arch)) => name,
        None => package,
    }
}
