//! YAML frontmatter extraction from content files.
//!
//! Frontmatter is metadata at the start of a file, delimited by `---` lines:
//!
//! ```markdown
//! ---
//! title: New Datacenter Online
//! date: 2024-02-01
//! tags: [infrastructure, network]
//! ---
//!
//! The body of the post starts here.
//! ```
//!
//! # Usage
//!
//! ```rust
//! use atelier_content::markdown::extract_frontmatter;
//!
//! let content = "---\ntitle: Test\ndraft: true\n---\n\nBody";
//! let fm = extract_frontmatter(content).unwrap();
//!
//! assert!(fm.has_header());
//! assert_eq!(fm.get_str("title"), Some("Test"));
//! assert_eq!(fm.get_bool("draft"), Some(true));
//! assert_eq!(fm.body().trim(), "Body");
//! ```

use atelier_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// Result of frontmatter extraction.
///
/// Holds the attribute mapping (empty when there is no header) and the body
/// text following the header.
#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    attributes: Mapping,
    body: &'a str,
    has_header: bool,
}

impl<'a> Frontmatter<'a> {
    fn without_header(body: &'a str) -> Self {
        Self {
            attributes: Mapping::new(),
            body,
            has_header: false,
        }
    }

    fn with_header(attributes: Mapping, body: &'a str) -> Self {
        Self {
            attributes,
            body,
            has_header: true,
        }
    }

    /// Check if a header block was present (it may still be empty).
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// The parsed attributes.
    pub fn attributes(&self) -> &Mapping {
        &self.attributes
    }

    /// Take ownership of the attributes.
    pub fn into_attributes(self) -> Mapping {
        self.attributes
    }

    /// Get the body content (everything after the header).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Get a raw attribute value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Whether `key` is present with a non-null value.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_null())
    }

    /// Get a string attribute.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Get a scalar attribute rendered as a string.
    ///
    /// Numbers and booleans are formatted; sequences and mappings yield `None`.
    /// Useful for fields such as `date` that authors may leave unquoted.
    pub fn get_scalar_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    /// Get a boolean attribute. The strings `"true"` and `"false"` are accepted.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Get a list of strings.
    ///
    /// Sequence items that are scalars are rendered as strings; other items are
    /// dropped. A single scalar is treated as a one-item list. Returns an empty
    /// vec when the field is missing.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Sequence(seq)) => seq.iter().filter_map(scalar_to_string).collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => scalar_to_string(other).into_iter().collect(),
        }
    }

    /// Deserialize the attributes into a specific type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use atelier_content::markdown::extract_frontmatter;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Project {
    ///     title: String,
    ///     website: Option<String>,
    /// }
    ///
    /// let fm = extract_frontmatter("---\ntitle: Forge\n---\n").unwrap();
    /// let project: Project = fm.deserialize().unwrap();
    /// assert_eq!(project.title, "Forge");
    /// assert!(project.website.is_none());
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_yaml::from_value(Value::Mapping(self.attributes.clone()))
            .map_err(|e| Error::malformed(format!("Failed to deserialize frontmatter: {e}")))
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Strip a leading byte order mark and the opening delimiter line,
/// returning what follows it.
///
/// Trailing whitespace after the delimiter is allowed. The line must end with
/// a newline.
fn after_opening_delimiter(content: &str) -> Option<&str> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let (line, rest) = content.split_once('\n')?;
    is_delimiter_line(line).then_some(rest)
}

fn is_delimiter_line(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Extract YAML frontmatter from a content file.
///
/// # Behavior
///
/// - A leading byte order mark is ignored when looking for the header
/// - Delimiter lines may carry trailing whitespace
/// - No opening `---` line: empty attributes, body is the whole input
/// - Opening `---` with no closing `---` line: [`Error::MalformedFrontmatter`]
/// - Header that is not a YAML mapping: [`Error::MalformedFrontmatter`]
/// - Empty header: empty attributes, body after the header
///
/// # Example
///
/// ```rust
/// use atelier_content::markdown::extract_frontmatter;
///
/// let fm = extract_frontmatter("# Just Markdown").unwrap();
/// assert!(!fm.has_header());
/// assert!(fm.attributes().is_empty());
/// assert_eq!(fm.body(), "# Just Markdown");
///
/// assert!(extract_frontmatter("---\ntitle: Never closed\n").is_err());
/// ```
pub fn extract_frontmatter(content: &str) -> Result<Frontmatter<'_>> {
    let Some(header_and_body) = after_opening_delimiter(content) else {
        log::debug!("no frontmatter header found");
        return Ok(Frontmatter::without_header(content));
    };

    let mut offset = 0;
    for line in header_and_body.split_inclusive('\n') {
        if is_delimiter_line(line) {
            let yaml = &header_and_body[..offset];
            let body = &header_and_body[offset + line.len()..];
            let attributes = parse_attributes(yaml)?;
            log::debug!("parsed frontmatter with {} attributes", attributes.len());
            return Ok(Frontmatter::with_header(attributes, body));
        }
        offset += line.len();
    }

    log::debug!("frontmatter header is never closed");
    Err(Error::malformed(
        "opening `---` delimiter has no closing `---` line",
    ))
}

fn parse_attributes(yaml: &str) -> Result<Mapping> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(mapping)) => Ok(mapping),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(Error::malformed("frontmatter must be a key-value mapping")),
        Err(e) => {
            log::debug!("frontmatter YAML failed to parse: {e}");
            Err(Error::malformed(format!("invalid YAML: {e}")))
        }
    }
}

/// Strip frontmatter from content, returning only the body.
///
/// Malformed headers are left in place and the input is returned unchanged.
pub fn strip_frontmatter(content: &str) -> &str {
    extract_frontmatter(content)
        .map(|fm| fm.body())
        .unwrap_or(content)
}

// ============================================================================
// Tests
// ============================================================================
