//! Core extraction engine.
//!
//! Turns a dictionary result page into translation pairs in three steps:
//!
//! 1. **Locate**: tokenize the document and find the inline script holding
//!    the term arrays (`markup`, `locate`).
//! 2. **Parse**: parse that script once and pull the string literals out of
//!    the source and target `new Array(...)` declarations (`parsers`).
//! 3. **Align**: pair both lists index by index (`align`).
//!
//! Only a malformed script is an error. A missing script block or lists of
//! different length both degrade to an empty result.

pub mod align;
pub mod locate;
pub mod markup;
pub mod parsers;

use log::{debug, warn};

pub use align::{TranslationPair, align};
pub use locate::{ScriptMatcher, locate_script};
pub use markup::{Token, Tokenizer};
pub use parsers::script::{ParsedScript, ScriptParseError, extract_literal_list};

/// Default `type` attribute of the data script on dict.cc.
pub const DEFAULT_SCRIPT_TYPE: &str = "text/javascript";
/// Default marker: the start of the source array declaration.
pub const DEFAULT_MARKER: &str = "var c1Arr = new Array";
/// Default variable holding the source-language terms.
pub const DEFAULT_SOURCE_VARIABLE: &str = "c1Arr";
/// Default variable holding the target-language terms.
pub const DEFAULT_TARGET_VARIABLE: &str = "c2Arr";

/// Document-format constants the extraction depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinels {
    pub matcher: ScriptMatcher,
    pub source_variable: String,
    pub target_variable: String,
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            matcher: ScriptMatcher::new(Some(DEFAULT_SCRIPT_TYPE.to_string()), DEFAULT_MARKER),
            source_variable: DEFAULT_SOURCE_VARIABLE.to_string(),
            target_variable: DEFAULT_TARGET_VARIABLE.to_string(),
        }
    }
}

/// Run the whole pipeline over a document.
///
/// # Returns
/// - `Ok(pairs)`, possibly empty when the script block is missing or the
///   lists don't line up
/// - `Err` when the located script is not valid JavaScript
pub fn extract_translations(
    document: &str,
    sentinels: &Sentinels,
) -> Result<Vec<TranslationPair>, ScriptParseError> {
    let script = match locate_script(Tokenizer::new(document), &sentinels.matcher) {
        Some(script) => {
            debug!("Located data script ({} bytes)", script.len());
            script
        }
        None => {
            debug!(
                "No script block containing {:?} found",
                sentinels.matcher.marker
            );
            ""
        }
    };

    let parsed = ParsedScript::parse(script)?;
    let source = parsed.literal_list(&sentinels.source_variable);
    let target = parsed.literal_list(&sentinels.target_variable);
    debug!(
        "Extracted {} {} and {} {} terms",
        source.len(),
        sentinels.source_variable,
        target.len(),
        sentinels.target_variable
    );

    if source.len() != target.len() {
        warn!(
            "Term lists differ in length ({} vs {}), discarding both",
            source.len(),
            target.len()
        );
    }

    Ok(align(&source, &target))
}
