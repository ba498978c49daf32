use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// Relative day words understood by the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Keyword {
    Today,
    Yesterday,
    Tomorrow,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

pub struct Keywords;

impl Keywords {
    /// Returns the global keyword registry (input → canonical).
    ///
    /// Seeded with every canonical keyword mapping to itself. Keys are stored
    /// lowercased, so lookups are case-insensitive. Synonyms from the config
    /// file are merged in with [`extend`](Self::extend).
    fn registry() -> &'static RwLock<HashMap<String, Keyword>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, Keyword>>> = Lazy::new(|| {
            let m = Keyword::iter()
                .map(|k| (k.as_ref().to_string(), k))
                .collect::<HashMap<_, _>>();
            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Extends the global registry with user-defined synonyms.
    ///
    /// Each pair is `(alias, target)`. The target must already be known to the
    /// registry, otherwise the pair is ignored.
    ///
    /// ```toml
    /// [synonyms]
    /// ytd  = "yesterday"
    /// hoy  = "today"
    /// ```
    pub fn extend(synonyms: &[(String, String)]) {
        let mut reg = match Self::registry().write() {
            Ok(reg) => reg,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (alias, target) in synonyms {
            match reg.get(&target.to_ascii_lowercase()) {
                Some(&canonical) => {
                    reg.insert(alias.to_ascii_lowercase(), canonical);
                }
                None => {
                    tracing::warn!(alias = %alias, target = %target, "ignoring synonym for unknown keyword")
                }
            }
        }
    }

    /// Returns `true` if `word` is a canonical keyword (eg "today").
    pub fn is_canonical(word: &str) -> bool {
        Keyword::iter().any(|key| key.as_ref() == word.to_ascii_lowercase())
    }

    /// Looks up the canonical keyword behind `input`, synonyms included.
    pub fn lookup(input: &str) -> Option<Keyword> {
        let reg = match Self::registry().read() {
            Ok(reg) => reg,
            Err(poisoned) => poisoned.into_inner(),
        };
        reg.get(&input.trim().to_ascii_lowercase()).copied()
    }

    /// Returns `true` if `input` equals (case-insensitively) `keyword` or one of its synonyms.
    pub fn matches(keyword: Keyword, input: &str) -> bool {
        Self::lookup(input) == Some(keyword)
    }
}
