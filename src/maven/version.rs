use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A Maven version string with Maven's ordering semantics.
///
/// The raw string is kept for presentation, while comparison works on a normalized list of items:
///  the lowercased string is split at '.', '-', '_' and every transition between digits and letters.
///  Trailing "null" items ('0' and release qualifiers like 'final') are stripped, so "1", "1.0"
///  and "1.0-ga" are equal.
#[derive(Clone, Debug)]
pub struct MavenVersion {
    raw: String,
    items: Vec<VersionItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum VersionItem {
    /// digits without leading zeros, compared by length first
    Number(String),
    Qualifier(Qualifier),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Qualifier {
    Alpha,
    Beta,
    Milestone,
    ReleaseCandidate,
    Snapshot,
    Release,
    ServicePack,
    Other(String),
}
impl Qualifier {
    fn parse(s: &str, followed_by_digit: bool) -> Qualifier {
        match s {
            "alpha" => Qualifier::Alpha,
            "beta" => Qualifier::Beta,
            "milestone" => Qualifier::Milestone,
            "a" if followed_by_digit => Qualifier::Alpha,
            "b" if followed_by_digit => Qualifier::Beta,
            "m" if followed_by_digit => Qualifier::Milestone,
            "rc" | "cr" => Qualifier::ReleaseCandidate,
            "snapshot" => Qualifier::Snapshot,
            "" | "ga" | "final" | "release" => Qualifier::Release,
            "sp" => Qualifier::ServicePack,
            other => Qualifier::Other(other.to_string()),
        }
    }
}

impl VersionItem {
    fn is_null(&self) -> bool {
        match self {
            VersionItem::Number(n) => n.is_empty(),
            VersionItem::Qualifier(q) => *q == Qualifier::Release,
        }
    }

    fn compare(left: Option<&VersionItem>, right: Option<&VersionItem>) -> Ordering {
        match (left, right) {
            (None, None) => Ordering::Equal,
            (Some(item), None) => item.compare_to_null(),
            (None, Some(item)) => item.compare_to_null().reverse(),
            (Some(VersionItem::Number(l)), Some(VersionItem::Number(r))) => {
                l.len().cmp(&r.len()).then_with(|| l.cmp(r))
            }
            (Some(VersionItem::Number(_)), Some(VersionItem::Qualifier(_))) => Ordering::Greater,
            (Some(VersionItem::Qualifier(_)), Some(VersionItem::Number(_))) => Ordering::Less,
            (Some(VersionItem::Qualifier(l)), Some(VersionItem::Qualifier(r))) => l.cmp(r),
        }
    }

    /// compare against a missing item, which is '0' for numbers and a release for qualifiers
    fn compare_to_null(&self) -> Ordering {
        match self {
            VersionItem::Number(n) => if n.is_empty() { Ordering::Equal } else { Ordering::Greater },
            VersionItem::Qualifier(q) => q.cmp(&Qualifier::Release),
        }
    }
}

impl MavenVersion {
    pub fn parse(raw: &str) -> MavenVersion {
        MavenVersion {
            raw: raw.to_string(),
            items: Self::parse_items(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_snapshot(&self) -> bool {
        self.raw.ends_with("-SNAPSHOT")
    }

    fn parse_items(raw: &str) -> Vec<VersionItem> {
        let lowercase = raw.trim().to_lowercase();

        let mut tokens: Vec<(String, bool)> = Vec::new(); // (token, is_numeric)
        let mut current = String::new();
        let mut current_is_numeric = false;

        for c in lowercase.chars() {
            if c == '.' || c == '-' || c == '_' {
                tokens.push((std::mem::take(&mut current), current_is_numeric));
                current_is_numeric = false;
                continue;
            }

            let is_digit = c.is_ascii_digit();
            if !current.is_empty() && is_digit != current_is_numeric {
                tokens.push((std::mem::take(&mut current), current_is_numeric));
            }
            current_is_numeric = is_digit;
            current.push(c);
        }
        tokens.push((current, current_is_numeric));

        let mut items = Vec::with_capacity(tokens.len());
        for (idx, (token, is_numeric)) in tokens.iter().enumerate() {
            if *is_numeric {
                items.push(VersionItem::Number(token.trim_start_matches('0').to_string()));
            }
            else {
                let followed_by_digit = tokens.get(idx + 1)
                    .map(|(_, next_is_numeric)| *next_is_numeric)
                    .unwrap_or(false);

                // "1.0-alpha" is the same as "1-alpha"
                while items.last().map(|i| matches!(i, VersionItem::Number(n) if n.is_empty())).unwrap_or(false) {
                    items.pop();
                }
                items.push(VersionItem::Qualifier(Qualifier::parse(token, followed_by_digit)));
            }
        }

        while items.last().map(VersionItem::is_null).unwrap_or(false) {
            items.pop();
        }
        items
    }
}

impl PartialEq for MavenVersion {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}
impl Eq for MavenVersion {}

impl Hash for MavenVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl Ord for MavenVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.items.len().max(other.items.len());
        (0..len)
            .map(|i| VersionItem::compare(self.items.get(i), other.items.get(i)))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}
impl PartialOrd for MavenVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for MavenVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for MavenVersion {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MavenVersion::parse(s))
    }
}

impl From<&str> for MavenVersion {
    fn from(value: &str) -> Self {
        MavenVersion::parse(value)
    }
}

impl Serialize for MavenVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for MavenVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(MavenVersion::parse(&raw))
    }
}
