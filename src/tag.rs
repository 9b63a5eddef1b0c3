//! The per-field annotation grammar.
//!
//! An annotation is `[!|?|="<default>"] ["<default>"] <description>`: an
//! optional role marker, an optional double-quoted default immediately after
//! it, and everything else (trimmed) as the description.

/// Role selected by the leading marker character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    /// `!`: required positional parameter.
    Required,
    /// `?`: optional positional parameter.
    Optional,
    /// `=`: flag that must carry a quoted default.
    Default,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Annotation {
    pub(crate) default: String,
    pub(crate) description: String,
    pub(crate) marker: Option<Marker>,
}

impl Annotation {
    fn description_only(tag: &str) -> Annotation {
        Annotation { default: String::new(), description: tag.trim().to_string(), marker: None }
    }
}

pub(crate) fn parse(tag: &str) -> Annotation {
    let marker = match tag.as_bytes().first() {
        Some(b'!') => Some(Marker::Required),
        Some(b'?') => Some(Marker::Optional),
        Some(b'=') => Some(Marker::Default),
        _ => None,
    };
    let body = if marker.is_some() { &tag[1..] } else { tag };

    if !body.starts_with('"') {
        if marker == Some(Marker::Default) {
            // `=` is only a marker when a complete quoted literal follows
            return Annotation::description_only(tag);
        }
        return Annotation {
            default: String::new(),
            description: body.trim().to_string(),
            marker,
        };
    }

    match unquote(body) {
        Some((default, rest)) => Annotation {
            default,
            description: rest.trim().to_string(),
            marker,
        },
        // unterminated literal: no marker is recognized and the whole
        // annotation becomes the description
        None => Annotation::description_only(tag),
    }
}

/// Unquotes a leading double-quoted literal, returning the unescaped value
/// and the remainder after the closing quote. `None` if the literal never
/// closes.
fn unquote(s: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut iter = s.char_indices();
    iter.next(); // opening quote
    while let Some((i, c)) = iter.next() {
        match c {
            '"' => return Some((value, &s[i + 1..])),
            '\\' => match iter.next() {
                Some((_, esc)) => value.push(match esc {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '0' => '\0',
                    other => other, // `\"`, `\\` and anything else verbatim
                }),
                None => return None,
            },
            _ => value.push(c),
        }
    }
    None
}
