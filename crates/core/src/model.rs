// crates/core/src/model.rs
use serde::{Deserialize, Serialize};

/// One `Name:`-delimited block of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetRecord {
    pub name: String,
    pub mib_enum: Option<u32>,
    pub mime_name: Option<String>,
    pub aliases: Vec<String>,
}

impl CharsetRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mib_enum: None,
            mime_name: None,
            aliases: Vec::new(),
        }
    }

    /// MIB enum with `-1` standing in for a missing value.
    pub fn mib_enum_or_sentinel(&self) -> i64 {
        self.mib_enum.map_or(-1, i64::from)
    }

    /// Append an alias unless it is empty, the `None` placeholder or already listed.
    ///
    /// Returns `true` when the alias was added.
    pub fn push_alias(&mut self, alias: &str) -> bool {
        let alias = alias.trim();
        if alias.is_empty() || alias == "None" || self.aliases.iter().any(|a| a == alias) {
            return false;
        }
        self.aliases.push(alias.to_string());
        true
    }

    /// ASCII case-insensitive match against the name, the MIME name and every alias.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self
                .mime_name
                .as_deref()
                .is_some_and(|m| m.eq_ignore_ascii_case(name))
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// Figures reported in the header/footer comments of the rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Number of records.
    pub charsets: usize,
    /// Longest alias list, without the terminating sentinel.
    pub max_aliases: usize,
    /// Longest record name, in characters.
    pub max_name_len: usize,
}

impl RegistryStats {
    pub fn from_records(records: &[CharsetRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            stats.observe(record);
            stats
        })
    }

    pub(crate) fn observe(&mut self, record: &CharsetRecord) {
        self.charsets += 1;
        self.max_aliases = self.max_aliases.max(record.aliases.len());
        self.max_name_len = self.max_name_len.max(record.name.chars().count());
    }
}

/// Parsed registry: records in source order plus their statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    records: Vec<CharsetRecord>,
    stats: RegistryStats,
}

impl Registry {
    pub fn from_records(records: Vec<CharsetRecord>) -> Self {
        let stats = RegistryStats::from_records(&records);
        Self { records, stats }
    }

    pub(crate) fn from_parts(records: Vec<CharsetRecord>, stats: RegistryStats) -> Self {
        Self { records, stats }
    }

    pub fn records(&self) -> &[CharsetRecord] {
        &self.records
    }

    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }

    /// First record, in source order, that [`matches`](CharsetRecord::matches) `name`.
    pub fn lookup(&self, name: &str) -> Option<&CharsetRecord> {
        self.records.iter().find(|r| r.matches(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin1() -> CharsetRecord {
        let mut record = CharsetRecord::new("ISO_8859-1:1987");
        record.mib_enum = Some(4);
        record.push_alias("iso-ir-100");
        record.push_alias("ISO-8859-1");
        record.push_alias("latin1");
        record.mime_name = Some("ISO-8859-1".to_string());
        record
    }

    #[test]
    fn push_alias_skips_placeholder_and_duplicates() {
        let mut record = CharsetRecord::new("X");
        assert!(record.push_alias("a "));
        assert!(!record.push_alias("a"));
        assert!(!record.push_alias("None"));
        assert!(!record.push_alias("   "));
        assert_eq!(record.aliases, vec!["a".to_string()]);
    }

    #[test]
    fn sentinel_for_missing_mib_enum() {
        let mut record = CharsetRecord::new("X");
        assert_eq!(record.mib_enum_or_sentinel(), -1);
        record.mib_enum = Some(2252);
        assert_eq!(record.mib_enum_or_sentinel(), 2252);
    }

    #[test]
    fn matches_is_case_insensitive_across_all_names() {
        let record = latin1();
        assert!(record.matches("iso_8859-1:1987"));
        assert!(record.matches("iso-8859-1"));
        assert!(record.matches("LATIN1"));
        assert!(!record.matches("latin2"));
    }

    #[test]
    fn stats_track_longest_alias_list_and_name() {
        let mut short = CharsetRecord::new("UTF-8");
        short.push_alias("csUTF8");
        let registry = Registry::from_records(vec![latin1(), short]);

        assert_eq!(
            *registry.stats(),
            RegistryStats {
                charsets: 2,
                max_aliases: 3,
                max_name_len: "ISO_8859-1:1987".len(),
            }
        );
        assert_eq!(registry.lookup("csutf8").map(|r| r.name.as_str()), Some("UTF-8"));
        assert!(!registry.contains("KOI8-R"));
    }
}
