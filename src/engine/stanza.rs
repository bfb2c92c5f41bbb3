//! Stanza parser for the Debian `Packages` index format.
//!
//! A `Packages` file is a sequence of stanzas separated by blank lines.
//! Each stanza is a set of `Key: value` lines; a line starting with a
//! space or tab continues the previous field across physical lines.
//! This is deliberately not a general RFC822 parser: it supports exactly
//! the conventions the `Packages` format uses and tolerates everything
//! else by ignoring it.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

/// Raw field mapping for one stanza, before typed projection.
pub type FieldMap = HashMap<String, String>;

/// Lazily parse stanzas out of `Packages` text.
///
/// Yields one [`FieldMap`] per stanza, in file order. A stanza still in
/// progress when the input ends is emitted, so files without a trailing
/// blank line lose no data.
pub fn stanzas(input: &str) -> Stanzas<'_> {
    Stanzas {
        lines: input.lines(),
        done: false,
    }
}

/// Iterator over the stanzas of one `Packages` file.
pub struct Stanzas<'a> {
    lines: std::str::Lines<'a>,
    done: bool,
}

impl Iterator for Stanzas<'_> {
    type Item = FieldMap;

    fn next(&mut self) -> Option<FieldMap> {
        if self.done {
            return None;
        }

        let mut fields = FieldMap::new();
        let mut last_key: Option<String> = None;

        loop {
            let Some(raw) = self.lines.next() else {
                self.done = true;
                return if fields.is_empty() { None } else { Some(fields) };
            };
            let line = raw.trim_end();

            if line.is_empty() {
                if fields.is_empty() {
                    // Stray blank lines between stanzas
                    last_key = None;
                    continue;
                }
                return Some(fields);
            }

            if (line.starts_with(' ') || line.starts_with('\t')) && last_key.is_some() {
                // Continuation: append to the most recent field
                if let Some(value) = last_key.as_ref().and_then(|k| fields.get_mut(k)) {
                    value.push(' ');
                    value.push_str(line.trim());
                }
                continue;
            }

            if let Some((key, value)) = line.split_once(':') {
                let key = key.trim().to_string();
                fields.insert(key.clone(), value.trim().to_string());
                last_key = Some(key);
            }
            // Lines with no colon and no live continuation are ignored
        }
    }
}

/// Read a `Packages` file, tolerating absence and bad bytes.
///
/// A missing file is a valid state (distribution declared but not yet
/// populated) and yields `None`. Invalid UTF-8 is recovered through
/// lossy substitution rather than failing the whole file. Any other
/// read error is logged and treated as "no data" so nothing from the
/// parsing layer escapes the scanner boundary.
pub fn read_packages_text(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read Packages file, skipping");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_single_stanza() {
        let input = "Package: foo\nVersion: 1.0\n";
        let all: Vec<FieldMap> = stanzas(input).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0]["Package"], "foo");
        assert_eq!(all[0]["Version"], "1.0");
    }

    #[test]
    fn blank_lines_separate_stanzas() {
        let input = "Package: foo\n\nPackage: bar\n\n";
        let all: Vec<FieldMap> = stanzas(input).collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0]["Package"], "foo");
        assert_eq!(all[1]["Package"], "bar");
    }

    #[test]
    fn continuation_lines_join_with_single_spaces() {
        let input = "Description: a tool\n that does things\n\tacross lines\n";
        let all: Vec<FieldMap> = stanzas(input).collect();
        assert_eq!(all[0]["Description"], "a tool that does things across lines");
    }

    #[test]
    fn last_stanza_emitted_without_trailing_blank_line() {
        let input = "Package: foo\n\nPackage: bar";
        let all: Vec<FieldMap> = stanzas(input).collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1]["Package"], "bar");
    }

    #[test]
    fn colon_free_lines_are_ignored() {
        let input = "garbage line\nPackage: foo\nmore garbage\nVersion: 1.0\n";
        let all: Vec<FieldMap> = stanzas(input).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0]["Package"], "foo");
        assert_eq!(all[0]["Version"], "1.0");
    }

    #[test]
    fn repeated_key_overwrites_value() {
        let input = "Package: foo\nPackage: bar\n";
        let all: Vec<FieldMap> = stanzas(input).collect();
        assert_eq!(all[0]["Package"], "bar");
    }

    #[test]
    fn value_may_contain_colons() {
        let input = "Homepage: https://example.com/foo\n";
        let all: Vec<FieldMap> = stanzas(input).collect();
        assert_eq!(all[0]["Homepage"], "https://example.com/foo");
    }

    #[test]
    fn multiple_blank_lines_yield_no_empty_stanzas() {
        let input = "\n\nPackage: foo\n\n\n\nPackage: bar\n\n\n";
        let all: Vec<FieldMap> = stanzas(input).collect();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn leading_indent_without_prior_key_parses_as_field() {
        // No continuation target exists, so the colon branch applies and
        // the key is trimmed
        let input = "  Package: foo\n";
        let all: Vec<FieldMap> = stanzas(input).collect();
        assert_eq!(all[0]["Package"], "foo");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(stanzas("").count(), 0);
        assert_eq!(stanzas("\n\n\n").count(), 0);
    }

    #[test]
    fn missing_file_is_none() {
        assert_eq!(read_packages_text(Path::new("/nonexistent/Packages")), None);
    }

    #[test]
    fn invalid_utf8_is_substituted() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Packages");
        std::fs::write(&path, b"Package: foo\xff\nVersion: 1.0\n").unwrap();
        let text = read_packages_text(&path).unwrap();
        assert!(text.contains("foo\u{fffd}"));
        assert!(text.contains("Version: 1.0"));
    }
}
