//! Display-name normalization.
//!
//! The platform shows names as "First Middle Last", optionally with a guest
//! marker. Some participants type their group code into the name, e.g.
//! "Ivan Ivanovich Ivanov (МП-21)". The parser reorders the name to
//! "Last First Middle" and picks up such an embedded group code.

/// Group code prefixes recognized inside display names.
pub const DEFAULT_GROUP_PREFIXES: [&str; 4] = ["мп", "мт", "мк", "мн"];

/// Markers the platform appends to guest display names (lowercased).
const GUEST_MARKERS: [&str; 2] = ["(guest)", "(гость)"];

/// A normalized display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub full_name: String,
    pub embedded_group: Option<String>,
}

/// Parses raw display names using a fixed set of group prefixes.
#[derive(Debug, Clone)]
pub struct IdentityParser {
    group_prefixes: Vec<String>,
}

impl Default for IdentityParser {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_PREFIXES)
    }
}

impl IdentityParser {
    /// Creates a parser; prefixes are matched case-insensitively.
    pub fn new<I, S>(group_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            group_prefixes: group_prefixes
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Normalizes a display name.
    ///
    /// Returns `None` for names with fewer than two tokens; such a
    /// registration carries no usable identity.
    pub fn parse(&self, raw: &str) -> Option<ParsedName> {
        let mut tokens: Vec<String> = raw.split_whitespace().map(String::from).collect();
        if tokens.len() < 2 {
            return None;
        }

        // "First Middle Last" -> "Last First Middle"; anything past the third token stays put.
        let head = tokens.len().min(3);
        tokens[..head].rotate_right(1);

        let mut embedded_group = None;
        for token in &mut tokens {
            if GUEST_MARKERS.contains(&token.to_lowercase().as_str()) {
                token.clear();
                continue;
            }
            if self.is_group_code(token) {
                *token = token.replace(')', "");
                embedded_group = Some(token.clone());
            }
        }

        let full_name = tokens
            .iter()
            .filter(|t| !t.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        Some(ParsedName {
            full_name,
            embedded_group,
        })
    }

    fn is_group_code(&self, token: &str) -> bool {
        let before_hyphen = token.split('-').next().unwrap_or_default();
        let lowered = before_hyphen.to_lowercase();
        let candidate = lowered.strip_prefix('(').unwrap_or(&lowered);
        self.group_prefixes.iter().any(|p| p == candidate)
    }
}
