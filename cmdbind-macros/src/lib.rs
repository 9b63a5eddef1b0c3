mod ast;
mod parse;
mod emit;

/// Declares a descriptor struct: CamelCase field names, the closed type set
/// `bool` / `String` / `Vec<String>` / `Vec<bool>`, and one annotation
/// literal per field. Expands to the struct plus its `cmdbind::Fields` impl.
#[cfg(not(test))]
#[proc_macro]
pub fn opts(ts: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let opts = parse::parse(ts).unwrap();
    let text = emit::emit(&opts);
    text.parse().unwrap()
}

#[cfg(test)]
pub fn compile(src: &str) -> String {
    use proc_macro2::TokenStream;

    let ts = src.parse::<TokenStream>().unwrap();
    let opts = parse::parse(ts).unwrap();
    emit::emit(&opts)
}
