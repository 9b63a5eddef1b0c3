use std::fmt::Write;

use crate::ast;

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

pub(crate) fn emit(opts: &ast::Opts) -> String {
    let mut buf = String::new();
    emit_struct(&mut buf, opts);
    blank_line(&mut buf);
    emit_fields_impl(&mut buf, opts);
    buf
}

fn emit_struct(buf: &mut String, opts: &ast::Opts) {
    let vis = if opts.is_pub { "pub " } else { "" };
    w!(buf, "#[derive(Debug, Clone, Default)]\n");
    w!(buf, "{}struct {}", vis, opts.name);
    if opts.fields.is_empty() {
        w!(buf, ";\n");
        return;
    }
    w!(buf, " {{\n");
    for field in &opts.fields {
        w!(buf, "    pub {}: {},\n", snake(&field.name), storage_ty(field.kind));
    }
    w!(buf, "}}\n");
}

fn emit_fields_impl(buf: &mut String, opts: &ast::Opts) {
    w!(buf, "impl ::cmdbind::Fields for {} {{\n", opts.name);
    w!(buf, "    fn fields() -> ::std::vec::Vec<::cmdbind::Field<Self>> {{\n");
    w!(buf, "        ::std::vec![\n");
    for field in &opts.fields {
        w!(
            buf,
            "            ::cmdbind::Field::new({:?}, {}, ::cmdbind::Slot::{}(|opts| &mut opts.{})),\n",
            field.name,
            field.tag,
            slot_variant(field.kind),
            snake(&field.name)
        );
    }
    w!(buf, "        ]\n");
    w!(buf, "    }}\n");
    w!(buf, "}}\n");
}

fn storage_ty(kind: ast::Kind) -> &'static str {
    match kind {
        ast::Kind::Bool => "bool",
        ast::Kind::Str => "::std::string::String",
        ast::Kind::BoolVec => "::std::vec::Vec<bool>",
        ast::Kind::StrVec => "::std::vec::Vec<::std::string::String>",
    }
}

fn slot_variant(kind: ast::Kind) -> &'static str {
    match kind {
        ast::Kind::Bool => "Bool",
        ast::Kind::Str => "Str",
        ast::Kind::BoolVec => "BoolSeq",
        ast::Kind::StrVec => "StrSeq",
    }
}

fn blank_line(buf: &mut String) {
    w!(buf, "\n");
}

fn snake(s: &str) -> String {
    let mut out = String::new();
    let mut prev_lower = false;
    for c in s.chars() {
        if c == '_' || c == '-' {
            if !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        } else if c.is_uppercase() {
            if prev_lower && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = true;
        }
    }
    out
}
