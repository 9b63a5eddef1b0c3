use expect_test::expect;

use cmdbind::{Command, Program};

cmdbind::opts! {
    struct GreetOpts {
        Shout: bool = "Print the greeting in uppercase",
        FirstName: String = r#"="John" Name of a cool person"#,
        Name: String = "! Who to greet",
        Files: Vec<String> = "? Files to mention",
    }
}

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

fn greet() -> Command<GreetOpts> {
    Command::new("greet", "Greet someone", |_, _| Ok(()))
}

#[test]
fn command_usage() {
    let cmd = greet();
    expect![[r#"
        Greet someone
        Usage: demo greet [options] <name> [<files>...]
        Options:
          -shout              Print the greeting in uppercase
          -first-name "John"  Name of a cool person
        Arguments:
          <name>      Who to greet
          <files>...  Files to mention
    "#]]
    .assert_eq(&cmd.usage(Some("demo")));
}

#[test]
fn bare_command_usage() {
    let cmd: Command<()> = Command::new("version", "Show version", |_, _| Ok(()));
    assert_eq!(cmd.flag_count(), 0);
    expect![[r#"
        Show version
        Usage: version
    "#]]
    .assert_eq(&cmd.usage(None));
}

#[test]
fn optional_positional_defaults_are_shown() {
    let cmd: Command<EchoOpts> = Command::new("echo", "Print text", |_, _| Ok(()));
    expect![[r#"
        Print text
        Usage: echo [<text>]
        Arguments:
          <text>  Text to print (default: "hello")
    "#]]
    .assert_eq(&cmd.usage(None));
}

#[test]
fn program_usage() {
    let mut program = Program::<Globals>::with_globals("demo");
    program.cmd("echo", "Print text", |_: &EchoOpts, _| Ok(()));
    program.cmd("version", "Show version", |_: &(), _| Ok(()));
    expect![[r#"
        Usage: demo [options] <command>
        Options:
          -quiet  Suppress status messages
        Commands:
          echo [<text>]  Print text
          version        Show version
          help <cmd>     More information about a command
    "#]]
    .assert_eq(&program.usage());
}
