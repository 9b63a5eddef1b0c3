//! Usage text rendering.

use std::fmt::Write;

use crate::cmd::{Binding, Command, Fields};
use crate::prog::Program;

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

/// `name <arg> [<opt-arg>] <var>...`
pub(crate) fn synopsis<D: Fields>(cmd: &Command<D>) -> String {
    let mut out = String::new();
    w!(out, "{}", cmd.name);
    for arg in &cmd.args {
        if arg.optional {
            w!(out, " [<{}>]", arg.name);
        } else {
            w!(out, " <{}>", arg.name);
        }
    }
    if let Some(var) = &cmd.var_arg {
        if var.optional {
            w!(out, " [<{}>...]", var.name);
        } else {
            w!(out, " <{}>...", var.name);
        }
    }
    out
}

pub(crate) fn command_usage<D: Fields>(cmd: &Command<D>, program: Option<&str>) -> String {
    let mut out = String::new();
    if !cmd.description.is_empty() {
        w!(out, "{}\n", cmd.description);
    }
    w!(out, "Usage: ");
    if let Some(program) = program {
        w!(out, "{program} ");
    }
    if cmd.flags.is_empty() {
        w!(out, "{}\n", synopsis(cmd));
    } else {
        w!(out, "{} [options]{}\n", cmd.name, synopsis(cmd).split_off(cmd.name.len()));
        w!(out, "Options:\n");
        options(&mut out, &cmd.flags);
    }

    if !cmd.args.is_empty() || cmd.var_arg.is_some() {
        w!(out, "Arguments:\n");
        let mut rows = Vec::new();
        for arg in &cmd.args {
            rows.push((format!("<{}>", arg.name), argument_blurb(arg)));
        }
        if let Some(var) = &cmd.var_arg {
            rows.push((format!("<{}>...", var.name), var.description.clone()));
        }
        columns(&mut out, &rows);
    }
    out
}

fn argument_blurb<D>(arg: &Binding<D>) -> String {
    if arg.shown_default.is_empty() {
        arg.description.clone()
    } else if arg.slot.is_string() {
        format!("{} (default: {:?})", arg.description, arg.shown_default)
    } else {
        format!("{} (default: {})", arg.description, arg.shown_default)
    }
}

fn options<D>(out: &mut String, flags: &[Binding<D>]) {
    let mut rows = Vec::new();
    for flag in flags {
        let left = if flag.slot.is_bool() {
            if flag.shown_default == "false" {
                format!("-{}", flag.name)
            } else {
                format!("-{}=true", flag.name)
            }
        } else if flag.slot.is_string() {
            format!("-{} {:?}", flag.name, flag.shown_default)
        } else {
            format!("-{} {}", flag.name, flag.shown_default)
        };
        rows.push((left, flag.description.clone()));
    }
    columns(out, &rows);
}

pub(crate) fn program_usage<G: Fields>(program: &Program<G>) -> String {
    let mut out = String::new();
    let has_commands = !program.commands.is_empty();
    if program.global_flags.is_empty() {
        if has_commands {
            w!(out, "Usage: {} <command>\n", program.name);
        } else {
            w!(out, "Usage: {}\n", program.name);
        }
    } else {
        if has_commands {
            w!(out, "Usage: {} [options] <command>\n", program.name);
        } else {
            w!(out, "Usage: {} [options]\n", program.name);
        }
        w!(out, "Options:\n");
        options(&mut out, &program.global_flags);
    }
    if has_commands {
        w!(out, "Commands:\n");
        let mut rows: Vec<(String, String)> = program
            .commands
            .iter()
            .map(|cmd| (cmd.synopsis(), cmd.description().to_string()))
            .collect();
        rows.sort();
        rows.push(("help <cmd>".to_string(), "More information about a command".to_string()));
        columns(&mut out, &rows);
    }
    out
}

/// Two aligned columns, two spaces of indent and padding.
fn columns(out: &mut String, rows: &[(String, String)]) {
    let width = rows.iter().map(|(left, _)| left.chars().count()).max().unwrap_or(0);
    for (left, right) in rows {
        if right.is_empty() {
            w!(out, "  {left}\n");
        } else {
            w!(out, "  {left:<width$}  {right}\n");
        }
    }
}
