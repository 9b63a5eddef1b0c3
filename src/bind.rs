//! Value bindings: typed, settable views over one descriptor field.
//!
//! The supported storage kinds form a closed set: `bool`, `String`, and
//! sequences of either. Anything else is unrepresentable here, which is what
//! makes an unsupported field a compile-time error rather than a silently
//! skipped one.

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("invalid boolean literal `{0}`")]
    BadBool(String),

    #[error("can't set a single value on a sequence field")]
    ScalarOnSequence,

    #[error("can't set multiple values on a scalar field")]
    SequenceOnScalar,

    #[error("element {index}: {source}")]
    Element {
        index: usize,
        source: Box<BindError>,
    },
}

/// A binding over one field of the descriptor `D`, selected by storage kind.
///
/// Each variant carries the accessor for its field; constructing a `Slot`
/// for any other storage kind does not typecheck.
pub enum Slot<D> {
    Bool(fn(&mut D) -> &mut bool),
    Str(fn(&mut D) -> &mut String),
    BoolSeq(fn(&mut D) -> &mut Vec<bool>),
    StrSeq(fn(&mut D) -> &mut Vec<String>),
}

impl<D> Clone for Slot<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Slot<D> {}

impl<D> Slot<D> {
    pub fn is_sequence(&self) -> bool {
        matches!(self, Slot::BoolSeq(_) | Slot::StrSeq(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Slot::Bool(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Slot::Str(_))
    }

    /// Sets a scalar field from one token. On failure the previous value is
    /// left untouched.
    pub fn set(&self, opts: &mut D, text: &str) -> Result<(), BindError> {
        match self {
            Slot::Bool(field) => {
                let value = parse_bool(text).ok_or_else(|| BindError::BadBool(text.to_string()))?;
                *field(opts) = value;
                Ok(())
            }
            Slot::Str(field) => {
                *field(opts) = text.to_string();
                Ok(())
            }
            Slot::BoolSeq(_) | Slot::StrSeq(_) => Err(BindError::ScalarOnSequence),
        }
    }

    /// Replaces a sequence field with one element per token. Either every
    /// element binds, or the field keeps its previous value and the error
    /// names the first failing element.
    pub fn set_all(&self, opts: &mut D, texts: &[String]) -> Result<(), BindError> {
        match self {
            Slot::StrSeq(field) => {
                *field(opts) = texts.to_vec();
                Ok(())
            }
            Slot::BoolSeq(field) => {
                let mut values = Vec::with_capacity(texts.len());
                for (index, text) in texts.iter().enumerate() {
                    match parse_bool(text) {
                        Some(value) => values.push(value),
                        None => {
                            return Err(BindError::Element {
                                index,
                                source: Box::new(BindError::BadBool(text.clone())),
                            })
                        }
                    }
                }
                *field(opts) = values;
                Ok(())
            }
            Slot::Bool(_) | Slot::Str(_) => Err(BindError::SequenceOnScalar),
        }
    }

    /// The current value as text: exactly `true`/`false` for booleans, the
    /// literal text for strings, empty for sequences.
    pub fn render(&self, opts: &mut D) -> String {
        match self {
            Slot::Bool(field) => {
                if *field(opts) {
                    "true".to_string()
                } else {
                    "false".to_string()
                }
            }
            Slot::Str(field) => field(opts).clone(),
            Slot::BoolSeq(_) | Slot::StrSeq(_) => String::new(),
        }
    }
}

/// Boolean literals accepted by `Slot::set`.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
