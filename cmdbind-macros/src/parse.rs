use std::mem;

#[cfg(not(test))]
use proc_macro::{Delimiter, TokenStream, TokenTree};
#[cfg(test)]
use proc_macro2::{Delimiter, TokenStream, TokenTree};

use crate::ast;

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub(crate) struct Error {
    msg: String,
}

macro_rules! format_err {
    ($($tt:tt)*) => {
        Error { msg: format!($($tt)*) }
    };
}

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(format_err!($($tt)*))
    };
}

pub(crate) fn parse(ts: TokenStream) -> Result<ast::Opts> {
    let mut p = Parser::new(ts);
    opts(&mut p)
}

fn opts(p: &mut Parser) -> Result<ast::Opts> {
    let is_pub = p.eat_keyword("pub");
    p.expect_keyword("struct")?;
    let name = p.expect_ident()?;
    let mut res = ast::Opts { is_pub, name, fields: Vec::new() };

    p.enter_delim(Delimiter::Brace)?;
    while !p.end() {
        res.fields.push(field(p)?);
    }
    p.exit_delim()?;
    if !p.end() {
        bail!("unexpected tokens after the struct body");
    }
    Ok(res)
}

fn field(p: &mut Parser) -> Result<ast::Field> {
    let name = p.expect_ident()?;
    p.expect_punct(':')?;
    let kind = kind(p)?;
    p.expect_punct('=')?;
    let tag = p.expect_string()?;
    p.eat_punct(',');
    Ok(ast::Field { name, kind, tag })
}

fn kind(p: &mut Parser) -> Result<ast::Kind> {
    let name = p.expect_ident()?;
    let res = match name.as_str() {
        "bool" => ast::Kind::Bool,
        "String" => ast::Kind::Str,
        "Vec" => {
            p.expect_punct('<')?;
            let element = p.expect_ident()?;
            p.expect_punct('>')?;
            match element.as_str() {
                "bool" => ast::Kind::BoolVec,
                "String" => ast::Kind::StrVec,
                _ => bail!("unsupported element type `{}`, expected `bool` or `String`", element),
            }
        }
        _ => bail!(
            "unsupported field type `{}`, expected `bool`, `String`, `Vec<bool>` or `Vec<String>`",
            name
        ),
    };
    Ok(res)
}

struct Parser {
    stack: Vec<Vec<TokenTree>>,
    ts: Vec<TokenTree>,
}

impl Parser {
    fn new(ts: TokenStream) -> Self {
        let mut ts = ts.into_iter().collect::<Vec<_>>();
        ts.reverse();
        Self { stack: Vec::new(), ts }
    }

    fn enter_delim(&mut self, delimiter: Delimiter) -> Result<()> {
        match self.ts.pop() {
            Some(TokenTree::Group(g)) if g.delimiter() == delimiter => {
                let mut ts = g.stream().into_iter().collect::<Vec<_>>();
                ts.reverse();
                let ts = mem::replace(&mut self.ts, ts);
                self.stack.push(ts);
            }
            _ => bail!("expected `{{`"),
        }
        Ok(())
    }
    fn exit_delim(&mut self) -> Result<()> {
        if !self.end() {
            bail!("expected `}}`")
        }
        self.ts = self.stack.pop().unwrap();
        Ok(())
    }
    fn end(&mut self) -> bool {
        self.ts.last().is_none()
    }

    fn expect_keyword(&mut self, kw: &str) -> Result<()> {
        if !self.eat_keyword(kw) {
            bail!("expected `{}`", kw)
        }
        Ok(())
    }
    fn eat_keyword(&mut self, kw: &str) -> bool {
        if self.at_keyword(kw) {
            self.ts.pop().unwrap();
            true
        } else {
            false
        }
    }
    fn at_keyword(&mut self, kw: &str) -> bool {
        match self.ts.last() {
            Some(TokenTree::Ident(ident)) => &ident.to_string() == kw,
            _ => false,
        }
    }

    fn expect_ident(&mut self) -> Result<String> {
        match self.ts.pop() {
            Some(TokenTree::Ident(ident)) => Ok(ident.to_string()),
            other => {
                let next = other.map(|it| it.to_string()).unwrap_or_default();
                bail!("expected an identifier, got `{}`", next)
            }
        }
    }

    fn expect_punct(&mut self, punct: char) -> Result<()> {
        if !self.eat_punct(punct) {
            bail!("expected `{}`", punct)
        }
        Ok(())
    }
    fn eat_punct(&mut self, punct: char) -> bool {
        match self.ts.last() {
            Some(TokenTree::Punct(p)) if p.as_char() == punct => {
                self.ts.pop();
                true
            }
            _ => false,
        }
    }

    /// A string literal, kept as verbatim source text so the emitter can
    /// splice it through unchanged.
    fn expect_string(&mut self) -> Result<String> {
        match self.ts.pop() {
            Some(TokenTree::Literal(lit)) => {
                let text = lit.to_string();
                if text.starts_with('"') || text.starts_with("r\"") || text.starts_with("r#") {
                    Ok(text)
                } else {
                    bail!("expected a string literal, got `{}`", text)
                }
            }
            _ => bail!("expected a string literal"),
        }
    }
}
