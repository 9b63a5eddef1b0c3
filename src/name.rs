//! Field name translation.
//!
//! Declared identifiers are mixed-case words, with runs of capitals meaning
//! an acronym; the external flag/argument name is lowercase with single
//! hyphens between words:
//!
//! ```text
//! "FooBar"                  => "foo-bar"
//! "Lol"                     => "lol"
//! "FOO"                     => "foo"
//! "FirstNameLOLCat"         => "first-name-lol-cat"
//! "FooBar_baz_CATz_LOLCaT"  => "foo-bar-baz-catz-lol-ca-t"
//! "Plan9From800Outer_space" => "plan9-from800-outer-space"
//! ```

pub(crate) fn translate(name: &str) -> String {
    let mut out = hyphenate(&split_words(name));
    if out.ends_with('-') {
        out.pop();
    }
    out.to_lowercase()
}

fn is_lower_or_digit(c: char) -> bool {
    c.is_lowercase() || c.is_numeric()
}

fn is_sep(c: char) -> bool {
    c == '-' || c == '_'
}

/// First pass: underscores after `Upper+lower+` words become boundaries
/// around the word, and an acronym run flowing into a lowercase-starting
/// word is split before the word's capital.
fn split_words(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        if let Some(end) = protected_word(&chars, i) {
            out.push('-');
            out.extend(&chars[i..end]);
            out.push('-');
            i = end + 1; // the underscore is consumed
            continue;
        }
        let run = upper_run(&chars, i);
        if run >= 2 && chars.get(i + run).copied().is_some_and(|c| c.is_lowercase()) {
            out.push('-');
            out.extend(&chars[i..i + run - 1]);
            out.push('-');
            out.push(chars[i + run - 1]);
            i += run;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// `Upper+ lower/digit+ _` starting at `i`: the word keeps its capitals,
/// the underscore marks the boundary. Returns the index of the underscore.
fn protected_word(chars: &[char], i: usize) -> Option<usize> {
    let mut j = i;
    while j < chars.len() && chars[j].is_uppercase() {
        j += 1;
    }
    if j == i {
        return None;
    }
    let word_end = j;
    while j < chars.len() && is_lower_or_digit(chars[j]) {
        j += 1;
    }
    if j == word_end {
        return None;
    }
    (chars.get(j) == Some(&'_')).then_some(j)
}

fn upper_run(chars: &[char], i: usize) -> usize {
    chars[i..].iter().take_while(|c| c.is_uppercase()).count()
}

/// Second pass: a hyphen goes after every capitalized word, and any run of
/// separators collapses into the single hyphen before the next word.
fn hyphenate(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_uppercase() && chars.get(i + 1).copied().is_some_and(is_lower_or_digit) {
            out.push(c);
            i += 1;
            while i < chars.len() && is_lower_or_digit(chars[i]) {
                out.push(chars[i]);
                i += 1;
            }
            while i < chars.len() && is_sep(chars[i]) {
                i += 1;
            }
            out.push('-');
            continue;
        }
        if !is_sep(c) && chars.get(i + 1).copied().is_some_and(is_sep) {
            out.push(c);
            i += 1;
            while i < chars.len() && is_sep(chars[i]) {
                i += 1;
            }
            out.push('-');
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}
