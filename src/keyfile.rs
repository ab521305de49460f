//! Minimal reader for the `.ini`-style key files tablet data is stored in.
//!
//! Supports `[Section]` headers, `Key=Value` entries, and `#` comments. Later duplicate keys
//! replace earlier ones, and values are kept verbatim apart from surrounding whitespace.

use std::{fs, path::Path};

use crate::{Error, Result};

/// Maximum length for a key file line.
pub const LINE_MAX: usize = 4096;

/// Separator for list values.
pub const LIST_SEPARATOR: char = ';';

/// One `[Section]` of a [KeyFile].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyFileSection {
    name: String,
    entries: Vec<(String, String)>,
}

impl KeyFileSection {
    /// Creates a new [KeyFileSection].
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Gets the section name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Gets the value for `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Gets whether the section has an entry for `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Sets `key` to `value`, replacing an existing entry.
    pub fn set_value<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let (key, value) = (key.into(), value.into());
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

/// Parsed contents of a key file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyFile {
    sections: Vec<KeyFileSection>,
}

impl KeyFile {
    /// Creates a new, empty [KeyFile].
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Reads and parses the key file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        Self::parse(&contents)
            .map_err(|err| Error::KeyFile(format!("{}: {err}", path.display())))
    }

    /// Parses key file `contents`.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut file = Self::new();

        for (num, line) in contents.lines().enumerate() {
            let num = num.saturating_add(1);

            if line.len() > LINE_MAX {
                return Err(Error::KeyFile(format!(
                    "line {num} exceeds the max line length: {LINE_MAX}"
                )));
            }

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .filter(|n| !n.is_empty())
                    .ok_or(Error::KeyFile(format!("line {num}: invalid group header")))?;
                if file.section(name).is_some() {
                    return Err(Error::KeyFile(format!("line {num}: duplicate group [{name}]")));
                }
                file.sections.push(KeyFileSection::new(name));
                continue;
            }

            let (key, value) = line
                .split_once('=')
                .ok_or(Error::KeyFile(format!("line {num}: expected `Key=Value`")))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::KeyFile(format!("line {num}: empty key")));
            }

            file.sections
                .last_mut()
                .ok_or(Error::KeyFile(format!("line {num}: entry outside of a group")))?
                .set_value(key, value.trim());
        }

        Ok(file)
    }

    /// Gets the section called `name`.
    pub fn section(&self, name: &str) -> Option<&KeyFileSection> {
        self.sections.iter().find(|s| s.name() == name)
    }

    /// Gets the string value of `key` in `section`.
    pub fn string(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.value(key))
    }

    /// Gets the `;`-separated list value of `key` in `section`.
    ///
    /// Empty items (such as a trailing `;`) are dropped.
    pub fn string_list(&self, section: &str, key: &str) -> Vec<&str> {
        self.string(section, key)
            .map(|v| {
                v.split(LIST_SEPARATOR)
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Gets the boolean value of `key` in `section`.
    pub fn boolean(&self, section: &str, key: &str) -> Result<Option<bool>> {
        match self.string(section, key) {
            None => Ok(None),
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(Some(true)),
            Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(Some(false)),
            Some(v) => Err(Error::KeyFile(format!(
                "[{section}] {key}: invalid boolean `{v}`"
            ))),
        }
    }

    /// Gets the integer value of `key` in `section`.
    pub fn integer(&self, section: &str, key: &str) -> Result<Option<u32>> {
        self.string(section, key)
            .map(|v| {
                v.parse::<u32>().map_err(|err| {
                    Error::KeyFile(format!("[{section}] {key}: invalid integer `{v}`: {err}"))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLET: &str = r#"
# comment
[Device]
Name=Wacom Intuos Pro M
DeviceMatch=usb:056a:0357;bluetooth:056a:0360;

[Features]
Touch = true
Buttons=9
"#;

    #[test]
    fn test_parse() -> Result<()> {
        let file = KeyFile::parse(TABLET)?;

        assert!(file.section("Features").is_some());
        assert!(file.section("Buttons").is_none());

        assert_eq!(file.string("Device", "Name"), Some("Wacom Intuos Pro M"));
        assert_eq!(
            file.string_list("Device", "DeviceMatch"),
            ["usb:056a:0357", "bluetooth:056a:0360"]
        );
        assert!(file.string_list("Device", "IntegratedIn").is_empty());

        assert_eq!(file.boolean("Features", "Touch")?, Some(true));
        assert_eq!(file.boolean("Features", "Ring")?, None);
        assert_eq!(file.integer("Features", "Buttons")?, Some(9));

        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert!(KeyFile::parse("Name=orphan").is_err());
        assert!(KeyFile::parse("[Device\nName=x").is_err());
        assert!(KeyFile::parse("[Device]\njust text").is_err());
        assert!(KeyFile::parse("[Device]\n[Device]").is_err());

        let long = format!("[Device]\nName={}", "x".repeat(LINE_MAX));
        assert!(KeyFile::parse(&long).is_err());

        let file = KeyFile::parse("[Features]\nTouch=maybe\nButtons=-1").unwrap();
        assert!(file.boolean("Features", "Touch").is_err());
        assert!(file.integer("Features", "Buttons").is_err());
    }

    #[test]
    fn test_duplicate_key_replaces() {
        let file = KeyFile::parse("[Device]\nName=first\nName=second").unwrap();
        assert_eq!(file.string("Device", "Name"), Some("second"));
    }
}
