use std::cmp::Ordering;

/// NewType wrapper for a Debian package version string.
///
/// A Debian version has the shape `[epoch:]upstream_version[-debian_revision]`.
/// The wrapper keeps the raw string and implements `Ord` with Debian's native
/// ordering rules, so it can be used both for sorting and for range membership
/// tests. Malformed input never panics; missing components compare as lowest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DebianVersion(String);

impl DebianVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DebianVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialOrd for DebianVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DebianVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}

/// Upper bound of a bug's version range.
///
/// A bug record without a fix version is still open, so the bound must
/// compare greater than every real version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpperBound {
    Fixed(DebianVersion),
    Unbounded,
}

impl UpperBound {
    /// Returns true when `version` lies strictly below this bound.
    pub fn admits(&self, version: &DebianVersion) -> bool {
        match self {
            UpperBound::Fixed(fixed) => version < fixed,
            UpperBound::Unbounded => true,
        }
    }
}

/// Compares two Debian version strings.
///
/// Equal strings compare equal without any parsing; otherwise epochs are
/// compared numerically first, then the upstream components, then the Debian
/// revisions. Epochs that fail to parse fall back to 0.
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let (epoch_a, rest_a) = split_epoch(a);
    let (epoch_b, rest_b) = split_epoch(b);

    if epoch_a != epoch_b {
        return epoch_a.cmp(&epoch_b);
    }

    let (upstream_a, revision_a) = split_revision(rest_a);
    let (upstream_b, revision_b) = split_revision(rest_b);

    match compare_component(upstream_a, upstream_b) {
        Ordering::Equal => compare_component(revision_a, revision_b),
        ordering => ordering,
    }
}

/// Splits the numeric epoch off a version string. No colon means epoch 0.
fn split_epoch(version: &str) -> (u64, &str) {
    match version.split_once(':') {
        Some((epoch, rest)) => (epoch.parse().unwrap_or(0), rest),
        None => (0, version),
    }
}

/// Splits the Debian revision off at the last hyphen. No hyphen means an
/// empty revision, which sorts below any non-empty one.
fn split_revision(version: &str) -> (&str, &str) {
    match version.rsplit_once('-') {
        Some((upstream, revision)) => (upstream, revision),
        None => (version, ""),
    }
}

/// Compares one version component (upstream or revision) with the Debian
/// algorithm: alternate between comparing the longest non-digit prefixes
/// lexically (with tilde sorting before everything, including end of string,
/// and letters before non-letters) and the longest digit prefixes numerically.
fn compare_component(a: &str, b: &str) -> Ordering {
    let mut a = a.as_bytes();
    let mut b = b.as_bytes();

    loop {
        let (a_nondigit, a_rest) = take_nondigits(a);
        let (b_nondigit, b_rest) = take_nondigits(b);

        match compare_nondigits(a_nondigit, b_nondigit) {
            Ordering::Equal => {}
            ordering => return ordering,
        }

        let (a_digits, a_tail) = take_digits(a_rest);
        let (b_digits, b_tail) = take_digits(b_rest);

        match compare_digits(a_digits, b_digits) {
            Ordering::Equal => {}
            ordering => return ordering,
        }

        if a_tail.is_empty() && b_tail.is_empty() {
            return Ordering::Equal;
        }
        a = a_tail;
        b = b_tail;
    }
}

fn take_nondigits(s: &[u8]) -> (&[u8], &[u8]) {
    let end = s.iter().position(|c| c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn take_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let end = s
        .iter()
        .position(|c| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Weight of a byte in a non-digit run. Tilde sorts before end of string
/// (weight 0), letters sort before every other character.
fn char_weight(c: Option<u8>) -> i32 {
    match c {
        None => 0,
        Some(b'~') => -1,
        Some(c) if c.is_ascii_alphabetic() => c as i32,
        Some(c) => c as i32 + 256,
    }
}

fn compare_nondigits(a: &[u8], b: &[u8]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let wa = char_weight(a.get(i).copied());
        let wb = char_weight(b.get(i).copied());
        match wa.cmp(&wb) {
            Ordering::Equal => {}
            ordering => return ordering,
        }
    }
    Ordering::Equal
}

/// Numeric comparison of two digit runs, ignoring leading zeros. An empty
/// run counts as zero.
fn compare_digits(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        ordering => ordering,
    }
}

fn strip_leading_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[start..]
}
