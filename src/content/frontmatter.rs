//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Marker of an MDX metadata export (`export const metadata = { ... }`)
const MDX_EXPORT: &str = "export const metadata";

/// Custom deserializer that handles a single string, a list of strings, or null
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Metadata header of a post's content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub categories: Vec<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Unlike a renderer, a listing cannot fall back to defaults: a file
    /// without a readable header is an error.
    pub fn parse(content: &str) -> Result<(Self, &str), String> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        // YAML front-matter (---)
        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        // JSON front-matter (;;; or {"key":)
        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        // MDX metadata export, possibly after import lines
        if content.contains(MDX_EXPORT) {
            return Self::parse_mdx_export(content);
        }

        Err("no front-matter found".to_string())
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str), String> {
        let (yaml_content, remaining) = split_yaml_fences(content)
            .ok_or_else(|| "unterminated YAML front-matter".to_string())?;
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)
            .map_err(|e| format!("failed to parse YAML front-matter: {}", e))?;
        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str), String> {
        // JSON front-matter ends with ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            let end_pos = rest
                .find(";;;")
                .ok_or_else(|| "unterminated JSON front-matter".to_string())?;
            let json_content = &rest[..end_pos];
            let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

            let fm: FrontMatter = serde_json::from_str(json_content)
                .map_err(|e| format!("failed to parse JSON front-matter: {}", e))?;
            return Ok((fm, remaining));
        }

        // Leading JSON object: stream a single value and keep the rest as body
        let mut stream = serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();
        match stream.next() {
            Some(Ok(fm)) => {
                let remaining = content[stream.byte_offset()..].trim_start_matches(['\n', '\r']);
                Ok((fm, remaining))
            }
            Some(Err(e)) => Err(format!("failed to parse JSON front-matter: {}", e)),
            None => Err("invalid JSON front-matter".to_string()),
        }
    }

    fn parse_mdx_export(content: &str) -> Result<(Self, &str), String> {
        let invalid = || "invalid metadata export".to_string();

        let start = content.find(MDX_EXPORT).ok_or_else(invalid)?;
        let after = &content[start + MDX_EXPORT.len()..];
        // `export const metadataFoo` is a different binding
        if after.starts_with(|c: char| c.is_alphanumeric() || c == '_' || c == '$') {
            return Err(invalid());
        }

        // Skip an optional type annotation (`: Metadata`)
        let eq = after.find('=').ok_or_else(invalid)?;
        let literal = after[eq + 1..].trim_start();
        if !literal.starts_with('{') {
            return Err("metadata export is not an object literal".to_string());
        }
        let end = object_literal_end(literal)
            .ok_or_else(|| "unterminated metadata object".to_string())?;

        let fm: FrontMatter = json5::from_str(&literal[..end])
            .map_err(|e| format!("failed to parse metadata export: {}", e))?;

        let remaining = literal[end..]
            .trim_start()
            .trim_start_matches(';')
            .trim_start_matches(['\n', '\r']);
        Ok((fm, remaining))
    }

    /// Parse the date string into a timestamp
    pub fn parse_date(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// Split `---` fenced YAML into (header, body)
///
/// Fences are lines that are exactly `---`; `----` or `---foo` do not count.
fn split_yaml_fences(content: &str) -> Option<(&str, &str)> {
    let is_fence = |line: &str| line.trim_end_matches(['\n', '\r']) == "---";

    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if !is_fence(first) {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if is_fence(line) {
            return Some((&content[start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Byte length of the object literal at the start of `s`, braces included
fn object_literal_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse a date string in the accepted ISO 8601 variants
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 with offset, compared on the UTC timeline
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())
}
