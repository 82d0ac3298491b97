//! Forward-only HTML tokenizer.
//!
//! Produces the markup stream consumed by the script locator. This is not a
//! full HTML5 tokenizer: it recognizes tags with attributes, text runs,
//! comments and doctypes, which is all the locator needs. Script and
//! style content is emitted verbatim as one raw text token so that `<` inside
//! JavaScript never opens a tag.
//!
//! Slices are only ever cut at ASCII structural bytes, so every slice
//! endpoint is a UTF-8 char boundary.

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

/// A start tag with its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Lowercased tag name.
    pub name: String,
    /// Attributes in source order. Names are lowercased, values are
    /// unquoted with character references decoded. `None` for bare
    /// attributes like `async`.
    pub attributes: Vec<(String, Option<String>)>,
    pub self_closing: bool,
}

impl Tag {
    /// Value of the first attribute named `name` (lowercase).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_deref().unwrap_or(""))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    StartTag(Tag),
    EndTag(String),
    /// Raw text, character references are not decoded.
    Text(&'a str),
    Comment(&'a str),
    Doctype(&'a str),
}

/// Tokenizer over a complete document.
///
/// Implements `Iterator`; end of stream is `None`.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    /// Set after a `<script>`/`<style>` start tag: the next token is the raw
    /// element content up to this close tag.
    raw_text_end: Option<&'static str>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            raw_text_end: None,
        }
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    fn raw_text(&mut self, close_tag: &str) -> Option<Token<'a>> {
        let start = self.pos;
        let mut from = start;
        // `</script` only closes when followed by whitespace, `/`, `>` or EOF.
        let end = loop {
            let Some(offset) = find_ignore_ascii_case(&self.input[from..], close_tag) else {
                break self.input.len();
            };
            let candidate = from + offset;
            match self.bytes().get(candidate + close_tag.len()) {
                None | Some(b'\t' | b'\n' | b'\x0c' | b'\r' | b' ' | b'/' | b'>') => {
                    break candidate;
                }
                Some(_) => from = candidate + 1,
            }
        };
        self.pos = end;
        if end > start {
            Some(Token::Text(&self.input[start..end]))
        } else {
            None
        }
    }

    fn text(&mut self, skip: usize) -> Token<'a> {
        let start = self.pos;
        let end = self.bytes()[start + skip..]
            .iter()
            .position(|&b| b == b'<')
            .map(|offset| start + skip + offset)
            .unwrap_or(self.input.len());
        self.pos = end;
        Token::Text(&self.input[start..end])
    }

    fn comment(&mut self) -> Token<'a> {
        let start = self.pos + COMMENT_START.len();
        match self.input[start..].find(COMMENT_END) {
            Some(offset) => {
                self.pos = start + offset + COMMENT_END.len();
                Token::Comment(&self.input[start..start + offset])
            }
            None => {
                self.pos = self.input.len();
                Token::Comment(&self.input[start..])
            }
        }
    }

    /// `<!doctype ...>` and bogus `<!...>` / `<?...>` declarations.
    fn declaration(&mut self) -> Token<'a> {
        let start = self.pos + 2;
        let end = self.input[start..]
            .find('>')
            .map(|offset| start + offset)
            .unwrap_or(self.input.len());
        self.pos = (end + 1).min(self.input.len());
        let body = &self.input[start..end];
        if starts_with_ignore_ascii_case(body.as_bytes(), b"doctype") {
            Token::Doctype(body["doctype".len()..].trim())
        } else {
            Token::Comment(body)
        }
    }

    fn end_tag(&mut self) -> Token<'a> {
        let bytes = self.bytes();
        let start = self.pos + 2;
        let mut i = start;
        while i < bytes.len() && is_name_byte(bytes[i]) {
            i += 1;
        }
        let name = self.input[start..i].to_ascii_lowercase();
        while i < bytes.len() && bytes[i] != b'>' {
            i += 1;
        }
        self.pos = (i + 1).min(bytes.len());
        Token::EndTag(name)
    }

    fn start_tag(&mut self) -> Token<'a> {
        let bytes = self.bytes();
        let len = bytes.len();
        let start = self.pos + 1;
        let mut k = start;
        while k < len && is_name_byte(bytes[k]) {
            k += 1;
        }
        let name = self.input[start..k].to_ascii_lowercase();
        let mut attributes = Vec::new();
        let mut self_closing = false;

        loop {
            while k < len && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k >= len {
                break;
            }
            match bytes[k] {
                b'>' => {
                    k += 1;
                    break;
                }
                b'/' => {
                    if k + 1 < len && bytes[k + 1] == b'>' {
                        self_closing = true;
                        k += 2;
                        break;
                    }
                    k += 1;
                    continue;
                }
                _ => {}
            }

            let name_start = k;
            while k < len && is_attribute_name_byte(bytes[k]) {
                k += 1;
            }
            if name_start == k {
                // Stray quote or `=`; skip it.
                k += 1;
                continue;
            }
            let attribute_name = self.input[name_start..k].to_ascii_lowercase();

            let mut j = k;
            while j < len && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j >= len || bytes[j] != b'=' {
                attributes.push((attribute_name, None));
                continue;
            }
            k = j + 1;
            while k < len && bytes[k].is_ascii_whitespace() {
                k += 1;
            }

            let value = if k < len && (bytes[k] == b'"' || bytes[k] == b'\'') {
                let quote = bytes[k];
                let value_start = k + 1;
                k = value_start;
                while k < len && bytes[k] != quote {
                    k += 1;
                }
                let raw = &self.input[value_start..k];
                if k < len {
                    k += 1;
                }
                decode_entities(raw)
            } else {
                let value_start = k;
                while k < len && !bytes[k].is_ascii_whitespace() && bytes[k] != b'>' {
                    if bytes[k] == b'/' && k + 1 < len && bytes[k + 1] == b'>' {
                        break;
                    }
                    k += 1;
                }
                decode_entities(&self.input[value_start..k])
            };
            attributes.push((attribute_name, Some(value)));
        }

        self.pos = k;
        // `<script/>` stays out of raw-text mode; it holds no data to locate.
        if !self_closing {
            self.raw_text_end = match name.as_str() {
                "script" => Some("</script"),
                "style" => Some("</style"),
                _ => None,
            };
        }

        Token::StartTag(Tag {
            name,
            attributes,
            self_closing,
        })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(close_tag) = self.raw_text_end.take()
            && let Some(token) = self.raw_text(close_tag)
        {
            return Some(token);
        }

        let bytes = self.bytes();
        if self.pos >= bytes.len() {
            return None;
        }
        if bytes[self.pos] != b'<' {
            return Some(self.text(0));
        }

        let rest = &bytes[self.pos..];
        let token = if rest.starts_with(COMMENT_START.as_bytes()) {
            self.comment()
        } else if rest.len() > 1 && (rest[1] == b'!' || rest[1] == b'?') {
            self.declaration()
        } else if rest.len() > 2 && rest[1] == b'/' && rest[2].is_ascii_alphabetic() {
            self.end_tag()
        } else if rest.len() > 1 && rest[1].is_ascii_alphabetic() {
            self.start_tag()
        } else {
            // A lone `<` is just text.
            self.text(1)
        };
        Some(token)
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

fn is_attribute_name_byte(b: u8) -> bool {
    !b.is_ascii_whitespace() && !matches!(b, b'>' | b'/' | b'=' | b'"' | b'\'')
}

fn starts_with_ignore_ascii_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && haystack[..needle.len()].eq_ignore_ascii_case(needle)
}

/// Find an ASCII `needle` starting with `<` in `haystack`, ignoring case.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let needle = needle.as_bytes();
    let mut i = 0;
    while i + needle.len() <= bytes.len() {
        let offset = bytes[i..].iter().position(|&b| b == needle[0])?;
        i += offset;
        if starts_with_ignore_ascii_case(&bytes[i..], needle) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Decode the character references that show up in attribute values.
/// Unknown references are left untouched.
pub fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest.find(';').and_then(|semi| {
            let entity = &rest[1..semi];
            let ch = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => {
                    if let Some(hex) = entity
                        .strip_prefix("#x")
                        .or_else(|| entity.strip_prefix("#X"))
                    {
                        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
                    } else if let Some(dec) = entity.strip_prefix('#') {
                        dec.parse::<u32>().ok().and_then(char::from_u32)
                    } else {
                        None
                    }
                }
            };
            ch.map(|c| (c, semi))
        });
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
