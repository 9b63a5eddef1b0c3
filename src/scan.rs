//! Argument vector scanning: the flag phase of a parse.

use crate::cmd::Binding;
use crate::error::{Error, Result};

pub(crate) struct Scanner {
    rargs: Vec<String>,
}

impl Scanner {
    pub(crate) fn new(args: &[String]) -> Scanner {
        let mut rargs = args.to_vec();
        rargs.reverse();
        Scanner { rargs }
    }

    fn peek(&self) -> Option<&str> {
        self.rargs.last().map(String::as_str)
    }

    /// The next token, if it looks like a flag. A lone `-` is a positional.
    pub(crate) fn peek_flag(&self) -> Option<&str> {
        self.peek().filter(|it| it.len() > 1 && it.starts_with('-'))
    }

    pub(crate) fn next(&mut self) -> Option<String> {
        self.rargs.pop()
    }

    pub(crate) fn next_value(&mut self, flag: &str) -> Result<String> {
        if self.peek_flag().is_some() {
            return Err(Error::MissingValue(flag.to_string()));
        }
        self.next().ok_or_else(|| Error::MissingValue(flag.to_string()))
    }

    /// The unconsumed tokens, in order.
    pub(crate) fn rest(mut self) -> Vec<String> {
        self.rargs.reverse();
        self.rargs
    }
}

/// Consumes leading flag tokens, applying each to its binding. Stops at the
/// first non-flag token or after a `--` terminator; the rest of the vector is
/// positional. `-h`/`-help`/`--help` surfaces as [`Error::Help`] unless a
/// real flag shadows the name.
pub(crate) fn apply_flags<D>(
    flags: &[Binding<D>],
    opts: &mut D,
    scan: &mut Scanner,
) -> Result<()> {
    while let Some(token) = scan.peek_flag() {
        if token == "--" {
            scan.next();
            break;
        }
        let token = scan.next().unwrap();
        let body = token.strip_prefix("--").or_else(|| token.strip_prefix('-')).unwrap();
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (body, None),
        };
        let Some(flag) = flags.iter().find(|f| f.name == name) else {
            if matches!(name, "help" | "h") {
                return Err(Error::Help);
            }
            return Err(Error::UnknownFlag(name.to_string()));
        };
        let value = match inline {
            Some(value) => value,
            // boolean flags don't consume the next token
            None if flag.slot.is_bool() => "true".to_string(),
            None => scan.next_value(name)?,
        };
        flag.slot.set(opts, &value).map_err(|err| Error::BadFlagValue {
            flag: name.to_string(),
            reason: err.to_string(),
        })?;
    }
    Ok(())
}
