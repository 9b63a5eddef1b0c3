use std::cell::Cell;
use std::rc::Rc;

use cmdbind::{Error, Program};

cmdbind::opts! {
    struct Globals {
        Quiet: bool = "Suppress status messages",
    }
}

cmdbind::opts! {
    struct EchoOpts {
        Text: String = r#"?"hello" Text to print"#,
    }
}

fn program() -> (Program<Globals>, Rc<Cell<u32>>) {
    let runs = Rc::new(Cell::new(0));
    let counter = runs.clone();
    let mut program = Program::<Globals>::with_globals("demo");
    program.quiet_when(|globals| globals.quiet);
    program.cmd("echo", "Print text", move |_: &EchoOpts, _ctx| {
        counter.set(counter.get() + 1);
        Ok(())
    });
    program.cmd("version", "Show version", |_: &(), ctx| {
        ctx.log("demo v1.2.3");
        Ok(())
    });
    (program, runs)
}

#[test]
fn runs_the_named_command() {
    let (mut program, runs) = program();
    let ran = program.run(&crate::argv("echo hi")).unwrap();
    assert_eq!(ran.as_deref(), Some("echo"));
    assert_eq!(runs.get(), 1);
}

#[test]
fn unknown_command() {
    let (mut program, _) = program();
    let err = program.run(&crate::argv("nope")).unwrap_err();
    assert_eq!(err.to_string(), "unknown command `nope`");
}

#[test]
fn no_command_specified() {
    let (mut program, _) = program();
    let err = program.run(&crate::argv("")).unwrap_err();
    assert!(matches!(err, Error::NoCommand));
}

#[test]
fn default_command_runs_on_empty_input() {
    let (mut program, runs) = program();
    program.default_command("echo");
    let ran = program.run(&crate::argv("")).unwrap();
    assert_eq!(ran.as_deref(), Some("echo"));
    assert_eq!(runs.get(), 1);
}

#[test]
fn global_flags_are_parsed_before_the_command_name() {
    let (mut program, runs) = program();
    program.run(&crate::argv("-quiet echo")).unwrap();
    assert!(program.globals().quiet);
    assert_eq!(runs.get(), 1);

    program.run(&crate::argv("echo")).unwrap();
    assert!(!program.globals().quiet);
}

#[test]
fn unknown_global_flag() {
    let (mut program, _) = program();
    let err = program.run(&crate::argv("-loud echo")).unwrap_err();
    assert_eq!(err.to_string(), "unknown flag: `-loud`");
}

#[test]
fn command_errors_carry_command_context() {
    let (mut program, _) = program();
    let err = program.run(&crate::argv("echo -bogus")).unwrap_err();
    assert_eq!(err.to_string(), "echo: unknown flag: `-bogus`");
}

#[test]
fn handler_errors_propagate() {
    let (mut program, _) = program();
    program.cmd("fail", "Always fails", |_: &(), ctx| Err(ctx.fail("kaboom")));
    let err = program.run(&crate::argv("fail")).unwrap_err();
    assert_eq!(err.to_string(), "fail: kaboom");
}

#[test]
fn registration_replaces_by_name() {
    let (mut program, runs) = program();
    // a later registration under the same name wins
    program.cmd("echo", "Print text twice", |_: &(), _ctx| Ok(()));
    assert_eq!(program.command_names(), vec!["echo".to_string(), "version".to_string()]);

    program.run(&crate::argv("echo")).unwrap();
    assert_eq!(runs.get(), 0);
}

#[test]
fn help_is_reserved() {
    let (mut program, _) = program();
    let ran = program.run(&crate::argv("help")).unwrap();
    assert_eq!(ran.as_deref(), Some("help"));

    let ran = program.run(&crate::argv("help echo")).unwrap();
    assert_eq!(ran.as_deref(), Some("help"));

    let err = program.run(&crate::argv("help nope")).unwrap_err();
    assert_eq!(err.to_string(), "unknown command `nope`");
}

#[test]
fn help_flag_renders_usage_instead_of_running() {
    let (mut program, runs) = program();
    let ran = program.run(&crate::argv("echo -help")).unwrap();
    assert_eq!(ran, None);
    assert_eq!(runs.get(), 0);
}
