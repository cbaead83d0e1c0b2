use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fallback list used when neither the local file nor the remote source
/// yields any names. Fixed at compile time, never empty.
pub const DEFAULT_HISTORICAL_FIGURES: &[&str] = &[
    "Albert Einstein",
    "Marie Curie",
    "Leonardo da Vinci",
    "Isaac Newton",
    "Charles Darwin",
    "Galileo Galilei",
    "Nikola Tesla",
    "Ada Lovelace",
    "Alan Turing",
    "Rosalind Franklin",
    "Stephen Hawking",
    "Katherine Johnson",
    "Aristotle",
    "Cleopatra",
    "William Shakespeare",
    "Jane Austen",
    "Mahatma Gandhi",
    "Martin Luther King Jr.",
    "Nelson Mandela",
    "Eleanor Roosevelt",
];

/// An ordered, non-empty list of candidate greeting names.
///
/// Constructed from exactly one winning source per invocation and never
/// mutated afterwards. Non-emptiness is enforced at construction so that
/// [`NameList::pick`] can always return a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameList(Vec<String>);

impl NameList {
    /// Parses one name per line, trimming whitespace and skipping blank
    /// lines. Returns `None` when no names remain.
    pub fn parse(text: &str) -> Option<Self> {
        let names: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self::from_names(names)
    }

    pub fn from_names(names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            None
        } else {
            Some(Self(names))
        }
    }

    /// The built-in fallback list. Infallible by construction.
    pub fn builtin() -> Self {
        Self(
            DEFAULT_HISTORICAL_FIGURES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        )
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Picks one name uniformly at random. The non-empty invariant makes
    /// the index access safe.
    pub fn pick(&self) -> &str {
        let idx = rand::thread_rng().gen_range(0..self.0.len());
        &self.0[idx]
    }
}

/// Which source won the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    Local,
    Remote,
    BuiltIn,
}

/// Outcome of name-source resolution. Carried for observability and tests;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNames {
    pub source: SourceKind,
    pub names: NameList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let list = NameList::parse("Ada Lovelace\n\n  Alan Turing  \n\n").unwrap();
        assert_eq!(list.names(), &["Ada Lovelace", "Alan Turing"]);
    }

    #[test]
    fn test_parse_empty_input_yields_none() {
        assert!(NameList::parse("").is_none());
        assert!(NameList::parse("\n\n   \n").is_none());
    }

    #[test]
    fn test_builtin_is_never_empty_and_stable() {
        let first = NameList::builtin();
        let second = NameList::builtin();
        assert!(first.len() > 0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pick_returns_member() {
        let list = NameList::parse("Marie Curie\nIsaac Newton\nCleopatra").unwrap();
        for _ in 0..50 {
            assert!(list.contains(list.pick()));
        }
    }

    #[test]
    fn test_pick_single_entry() {
        let list = NameList::parse("Marie Curie\n").unwrap();
        assert_eq!(list.pick(), "Marie Curie");
    }
}
