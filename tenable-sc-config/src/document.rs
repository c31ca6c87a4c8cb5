// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

//! In-memory INI document.
//!
//! A [`Document`] is an ordered list of named sections, each holding
//! ordered `key -> value` entries. A value is `None` for a valueless entry:
//! either a bare line in a parsed file or a comment entry added to an
//! example document.
//!
//! Parsing goes through `rust-ini` with quote and escape handling off, so
//! values are kept exactly as written apart from surrounding whitespace. Keys read from text are folded to
//! lowercase while section names keep their case, so lookups of the known
//! key names (`hostname`, `username`, ...) work whatever case the file
//! uses. Section names are matched case-insensitively by
//! [`Document::find_section`].

use ini::{Ini, ParseOption};
use log::*;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, Option<String>)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `key` is present, with or without a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Value stored for `key`. Absent keys and valueless entries both
    /// return `None`; use [`Section::contains_key`] to tell them apart.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains_key_ignore_case(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.eq_ignore_ascii_case(key))
    }

    /// Like [`Section::get`], matching `key` ignoring ASCII case.
    pub fn get_ignore_case(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .and_then(|(_, v)| v.as_deref())
    }

    /// Insert or replace an entry, keeping its first position.
    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text.
    ///
    /// Lines without a `=` or `:` separator become valueless entries of the
    /// section they appear in. Entries placed before the first section
    /// header are dropped. A section header repeated with the same name is
    /// merged into the first occurrence, later values replacing earlier
    /// ones.
    pub fn parse(text: &str) -> Result<Self, ini::ParseError> {
        let mut valueless: Vec<(Option<String>, String)> = Vec::new();
        let mut current: Option<String> = None;
        let mut kept = String::with_capacity(text.len());

        for line in text.lines() {
            let trimmed = line.trim();
            if let Some(header) = trimmed.strip_prefix('[') {
                if let Some(end) = header.find(']') {
                    current = Some(header[..end].trim().to_string());
                }
            } else if !trimmed.is_empty()
                && !trimmed.starts_with(['#', ';'])
                && !trimmed.contains(['=', ':'])
            {
                // rust-ini requires a separator on every key line
                valueless.push((current.clone(), trimmed.to_lowercase()));
                kept.push('\n');
                continue;
            }
            kept.push_str(line);
            kept.push('\n');
        }

        let ini = Ini::load_from_str_opt(
            &kept,
            ParseOption {
                enabled_quote: false,
                enabled_escape: false,
                ..Default::default()
            },
        )?;

        let mut document = Document::new();
        for (name, properties) in ini.iter() {
            let Some(name) = name else {
                if properties.iter().next().is_some() {
                    debug!("Ignoring entries found before the first section");
                }
                continue;
            };
            let section = document.section_entry(name);
            for (key, value) in properties.iter() {
                section.set(key.to_lowercase(), Some(value.to_string()));
            }
        }

        for (name, key) in valueless {
            match name {
                Some(name) => document.section_entry(&name).set(key, None),
                None => {
                    debug!("Ignoring valueless entry found before the first section")
                }
            }
        }

        Ok(document)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Section whose name matches `name` exactly.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// First section whose name matches `name` ignoring ASCII case.
    ///
    /// Two sections folding to the same name are ambiguous; the first one
    /// in file order wins and a warning is logged.
    pub fn find_section(&self, name: &str) -> Option<&Section> {
        self.find_section_position(name).map(|i| &self.sections[i])
    }

    pub(crate) fn find_section_position(&self, name: &str) -> Option<usize> {
        let mut matches = self
            .sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.name.eq_ignore_ascii_case(name));
        let (index, first) = matches.next()?;
        if let Some((_, other)) = matches.next() {
            warn!(
                "Sections [{}] and [{}] both match [{}], using [{}]",
                first.name, other.name, name, first.name
            );
        }
        Some(index)
    }

    pub(crate) fn section_at(&self, index: usize) -> &Section {
        &self.sections[index]
    }

    /// Section named exactly `name`, appended if missing.
    pub fn section_entry(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in section.entries() {
                match value {
                    Some(value) => writeln!(f, "{} = {}", key, value)?,
                    None => writeln!(f, "{}", key)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Unit Testing
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections_and_keys() {
        let doc = Document::parse(
            "[SecurityCenter]\nHostName = sc.example.com\n\n[User]\nusername: alice\n",
        )
        .unwrap(); //#[allow_ci]

        let sc = doc.section("SecurityCenter").unwrap(); //#[allow_ci]
        assert_eq!(sc.get("hostname"), Some("sc.example.com"));
        assert!(!sc.contains_key("HostName"));
        let user = doc.section("User").unwrap(); //#[allow_ci]
        assert_eq!(user.get("username"), Some("alice"));
    }

    #[test]
    fn test_parse_comments_and_valueless_lines() {
        let doc = Document::parse(
            "# leading comment\n[User]\n; another comment\nusername\npassword = x\n",
        )
        .unwrap(); //#[allow_ci]

        let user = doc.section("User").unwrap(); //#[allow_ci]
        assert!(user.contains_key("username"));
        assert_eq!(user.get("username"), None);
        assert_eq!(user.get("password"), Some("x"));
        assert_eq!(user.entries().count(), 2);
    }

    #[test]
    fn test_parse_keeps_quotes_and_backslashes() {
        let doc = Document::parse(
            "[User]\na = \"quoted\"\nb = 'single'\nc = \"half\nd = C:\\temp\\n\n",
        )
        .unwrap(); //#[allow_ci]

        let user = doc.section("User").unwrap(); //#[allow_ci]
        assert_eq!(user.get("a"), Some("\"quoted\""));
        assert_eq!(user.get("b"), Some("'single'"));
        assert_eq!(user.get("c"), Some("\"half"));
        assert_eq!(user.get("d"), Some("C:\\temp\\n"));
    }

    #[test]
    fn test_parse_unterminated_header_fails() {
        assert!(Document::parse("[User\nusername = a\n").is_err());
    }

    #[test]
    fn test_parse_empty_text() {
        let doc = Document::parse("").unwrap(); //#[allow_ci]
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_merges_repeated_section() {
        let doc = Document::parse("[User]\na = 1\n[User]\na = 2\nb = 3\n")
            .unwrap(); //#[allow_ci]
        assert_eq!(doc.sections().count(), 1);
        let user = doc.section("User").unwrap(); //#[allow_ci]
        assert_eq!(user.get("a"), Some("2"));
        assert_eq!(user.get("b"), Some("3"));
    }

    #[test]
    fn test_find_section_ignores_case() {
        let doc = Document::parse("[SECURITYCENTER]\nhostname = h\n[user]\n")
            .unwrap(); //#[allow_ci]
        assert!(doc.find_section("SecurityCenter").is_some());
        assert!(doc.find_section("User").is_some());
        assert!(doc.section("SecurityCenter").is_none());
    }

    #[test]
    fn test_find_section_prefers_first_of_ambiguous() {
        let doc = Document::parse("[user]\na = first\n[USER]\na = second\n")
            .unwrap(); //#[allow_ci]
        let user = doc.find_section("User").unwrap(); //#[allow_ci]
        assert_eq!(user.name(), "user");
        assert_eq!(user.get("a"), Some("first"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut section = Section::new("User");
        section.set("username", Some("a".to_string()));
        section.set("password", Some("b".to_string()));
        section.set("username", Some("c".to_string()));
        let keys: Vec<&str> = section.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["username", "password"]);
        assert_eq!(section.get("username"), Some("c"));
    }

    #[test]
    fn test_display_renders_ini() {
        let mut doc = Document::new();
        let sc = doc.section_entry("SecurityCenter");
        sc.set("# a comment", None);
        sc.set("hostname", Some("sc.example.com".to_string()));

        assert_eq!(
            doc.to_string(),
            "[SecurityCenter]\n# a comment\nhostname = sc.example.com\n\n"
        );
    }

    #[test]
    fn test_rendered_document_reads_back() {
        let mut doc = Document::new();
        let user = doc.section_entry("User");
        user.set("# Keep this secret", None);
        user.set("username", Some("alice".to_string()));

        let parsed = Document::parse(&doc.to_string()).unwrap(); //#[allow_ci]
        let user = parsed.section("User").unwrap(); //#[allow_ci]
        assert_eq!(user.get("username"), Some("alice"));
        assert_eq!(user.entries().count(), 1);
    }
}
