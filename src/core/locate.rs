//! Script locator: finds the inline script that carries the dictionary data.
//!
//! The locator walks the markup stream once. A start tag accepted by the
//! [`ScriptMatcher`] switches it into "inside target script" mode, any
//! `</script>` switches it back out. The first text token seen while inside
//! that contains the marker substring is the result.

use super::markup::{Tag, Token};

/// Selects the script element and the text block of interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptMatcher {
    /// Required value of the `type` attribute. `None` accepts any script.
    pub script_type: Option<String>,
    /// Substring identifying the array declaration statement.
    pub marker: String,
}

impl ScriptMatcher {
    pub fn new(script_type: Option<String>, marker: impl Into<String>) -> Self {
        Self {
            script_type,
            marker: marker.into(),
        }
    }

    /// Whether a start tag opens a candidate script.
    ///
    /// Matches on tag name and the `type` attribute value, so attribute order,
    /// quoting and extra attributes don't matter.
    pub fn accepts(&self, tag: &Tag) -> bool {
        if tag.name != "script" || tag.self_closing {
            return false;
        }
        match &self.script_type {
            None => true,
            Some(expected) => tag
                .attribute("type")
                .is_some_and(|actual| actual.trim().eq_ignore_ascii_case(expected.trim())),
        }
    }
}

/// Return the text of the first matching script block containing the marker.
pub fn locate_script<'a, I>(stream: I, matcher: &ScriptMatcher) -> Option<&'a str>
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut inside = false;
    for token in stream {
        match token {
            Token::StartTag(tag) if matcher.accepts(&tag) => inside = true,
            Token::EndTag(name) if name == "script" => inside = false,
            Token::Text(text) if inside && text.contains(matcher.marker.as_str()) => {
                return Some(text);
            }
            _ => {}
        }
    }
    None
}
