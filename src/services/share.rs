//! Shareable-state port.
//!
//! The store never touches an address bar directly. Embedding layers hand
//! it something implementing [`ShareState`], a get/set view over named
//! parameters, and the store reads or writes [`SHARE_PARAM`] through it.

use std::collections::HashMap;
use std::fmt;

/// Query parameter carrying the share token.
pub const SHARE_PARAM: &str = "colors";

/// Key-value view over the addressable state an embedding layer controls.
pub trait ShareState {
    /// Returns the value of `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory share state, for tests and headless embedding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryShareState {
    values: HashMap<String, String>,
}

impl MemoryShareState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding a share token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let mut state = Self::new();
        state.set(SHARE_PARAM, token);
        state
    }
}

impl ShareState for MemoryShareState {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// A share link: base URL plus ordered query parameters.
///
/// Values are percent-decoded on parse and percent-encoded on display,
/// leaving unreserved characters (`A-Z a-z 0-9 - _ . ~`) as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareUrl {
    base: String,
    params: Vec<(String, String)>,
    fragment: Option<String>,
}

impl ShareUrl {
    /// Parses a URL, splitting off its query string and fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettekit::services::{ShareState, ShareUrl};
    ///
    /// let mut url = ShareUrl::parse("https://example.com/app?theme=dark");
    /// url.set("colors", "WyIjMTEyMjMzIl0");
    /// assert_eq!(url.to_string(), "https://example.com/app?theme=dark&colors=WyIjMTEyMjMzIl0");
    /// ```
    #[must_use]
    pub fn parse(url: &str) -> Self {
        let url = url.trim();
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (url, None),
        };
        let (base, query) = rest.split_once('?').unwrap_or((rest, ""));

        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (percent_decode(key), percent_decode(value))
            })
            .collect();

        Self {
            base: base.to_string(),
            params,
            fragment,
        }
    }

    /// The URL without query string or fragment.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl ShareState for ShareUrl {
    fn get(&self, key: &str) -> Option<String> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(slot) = self.params.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value.to_string();
        } else {
            self.params.push((key.to_string(), value.to_string()));
        }
    }
}

impl fmt::Display for ShareUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{}={}", percent_encode(key), percent_encode(value))?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Decodes `%XX` escapes and `+` as space. Malformed escapes are kept as-is.
/// Value of a single hex digit; signs and other characters are rejected.
fn hex_value(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|v| v as u8)
}

fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                let (hi, lo) = (bytes[i + 1], bytes[i + 2]);
                if let (Some(hi), Some(lo)) = (hex_value(hi), hex_value(lo)) {
                    out.push((hi << 4) | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
