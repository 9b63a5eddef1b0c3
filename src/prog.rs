//! Program-level dispatch: the named command registry, program-global flags,
//! and the run loop that partitions an argument vector and invokes handlers.

use std::fmt;

use crate::cmd::{Binding, Command, DynCommand, Fields};
use crate::error::{Error, Result};
use crate::help;
use crate::scan::{self, Scanner};
use crate::tag::Marker;

/// What a handler sees of the program for the duration of one run.
pub struct Context<'a> {
    pub(crate) program: &'a str,
    pub(crate) command: &'a str,
    pub(crate) quiet: bool,
}

impl Context<'_> {
    pub fn program_name(&self) -> &str {
        self.program
    }

    pub fn command_name(&self) -> &str {
        self.command
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Prints a status line to stdout unless the program is quiet.
    pub fn log(&self, msg: impl fmt::Display) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    /// Wraps a message as a handler error: `return Err(ctx.fail(..))`.
    pub fn fail(&self, msg: impl fmt::Display) -> Error {
        Error::msg(msg)
    }
}

/// A named collection of commands with optional program-global flags bound
/// to the descriptor `G`.
///
/// The program is an explicit value, built once in `main` and threaded
/// through; there is no process-wide registry.
pub struct Program<G: Fields = ()> {
    pub(crate) name: String,
    pub(crate) commands: Vec<Box<dyn DynCommand>>,
    pub(crate) global_flags: Vec<Binding<G>>,
    default_command: Option<String>,
    template: G,
    globals: G,
    quiet_when: Option<fn(&G) -> bool>,
}

impl Program<()> {
    pub fn new(name: impl Into<String>) -> Program<()> {
        Program::with_globals(name)
    }
}

impl<G: Fields> Program<G> {
    /// A program whose global flags come from `G`'s declared fields.
    ///
    /// Panics if `G` declares anything but plain flags; positional or
    /// sequence-typed globals are a programmer error.
    pub fn with_globals(name: impl Into<String>) -> Program<G> {
        let name = name.into();
        let mut template = G::default();
        let mut global_flags = Vec::new();
        for field in G::fields() {
            let owner = format!("program `{name}`");
            let Some((binding, marker)) = Binding::from_field(&owner, &field, &mut template)
            else {
                continue;
            };
            if binding.slot.is_sequence()
                || matches!(marker, Some(Marker::Required) | Some(Marker::Optional))
            {
                panic!("program `{name}`: global field `{}` must be a plain flag", binding.name);
            }
            global_flags.push(binding);
        }
        let globals = template.clone();
        Program {
            name,
            commands: Vec::new(),
            global_flags,
            default_command: None,
            template,
            globals,
            quiet_when: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a command built from `D`'s fields. Shorthand for
    /// [`Program::add`].
    pub fn cmd<D: Fields>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl FnMut(&D, &Context<'_>) -> Result<()> + 'static,
    ) -> &mut Self {
        self.add(Command::new(name, description, handler));
        self
    }

    /// Adds a command. A command with the same name replaces the previous
    /// one.
    pub fn add<D: Fields>(&mut self, cmd: Command<D>) {
        let cmd: Box<dyn DynCommand> = Box::new(cmd);
        match self.commands.iter_mut().find(|it| it.name() == cmd.name()) {
            Some(slot) => *slot = cmd,
            None => self.commands.push(cmd),
        }
    }

    /// The command to run when the argument vector names none.
    pub fn default_command(&mut self, name: impl Into<String>) -> &mut Self {
        self.default_command = Some(name.into());
        self
    }

    /// Handlers see `Context::is_quiet() == true` when this predicate holds
    /// over the parsed globals. Pairs with a boolean global flag.
    pub fn quiet_when(&mut self, predicate: fn(&G) -> bool) -> &mut Self {
        self.quiet_when = Some(predicate);
        self
    }

    /// The program-global flag values from the most recent run.
    pub fn globals(&self) -> &G {
        &self.globals
    }

    /// Registered command names, sorted.
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> =
            self.commands.iter().map(|cmd| cmd.name().to_string()).collect();
        names.sort();
        names
    }

    pub fn usage(&self) -> String {
        help::program_usage(self)
    }

    /// Parses global flags, looks up the named command and runs it; returns
    /// the name of the command run, or `None` when help was rendered
    /// instead. The reserved name `help` works without being registered.
    pub fn run(&mut self, args: &[String]) -> Result<Option<String>> {
        self.globals = self.template.clone();
        let mut scan = Scanner::new(args);
        match scan::apply_flags(&self.global_flags, &mut self.globals, &mut scan) {
            Err(Error::Help) => {
                eprint!("{}", self.usage());
                return Ok(None);
            }
            other => other?,
        }
        let quiet = self.quiet_when.is_some_and(|quiet| quiet(&self.globals));

        let rest = scan.rest();
        let Some((name, cmd_args)) = rest.split_first() else {
            return match self.default_command.clone() {
                Some(name) => self.run_command(&name, &[], quiet),
                None => Err(Error::NoCommand),
            };
        };
        if name == "help" && self.find(name).is_none() {
            return self.run_help(cmd_args);
        }
        self.run_command(name, cmd_args, quiet)
    }

    /// Runs with the process argument vector; on failure prints the error
    /// with a help pointer and exits unsuccessfully.
    pub fn main(&mut self) {
        let args: Vec<String> = std::env::args().skip(1).collect();
        if let Err(err) = self.run(&args) {
            self.report(&err);
            std::process::exit(1);
        }
    }

    /// Prints `err` to stderr the way [`Program::main`] does.
    pub fn report(&self, err: &Error) {
        let program = &self.name;
        match err {
            Error::InCommand { command, source } => {
                eprintln!("{program} {command}: {source}. See '{program} {command} -help'");
            }
            Error::NoCommand => {
                eprintln!("{program}: no command specified");
                eprint!("{}", self.usage());
            }
            other => {
                eprintln!("{program}: {other}. See '{program} help'");
            }
        }
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|cmd| cmd.name() == name)
    }

    fn run_command(&mut self, name: &str, args: &[String], quiet: bool) -> Result<Option<String>> {
        let program = self.name.clone();
        let Some(index) = self.find(name) else {
            return Err(Error::UnknownCommand(name.to_string()));
        };
        let ctx = Context { program: &program, command: name, quiet };
        match self.commands[index].run(&ctx, args) {
            Ok(()) => Ok(Some(name.to_string())),
            Err(Error::Help) => {
                eprint!("{}", self.commands[index].usage(Some(&program)));
                Ok(None)
            }
            Err(err) => Err(err.in_command(name)),
        }
    }

    fn run_help(&mut self, args: &[String]) -> Result<Option<String>> {
        match args.first().map(String::as_str) {
            None => eprint!("{}", self.usage()),
            Some("help") => eprintln!("Usage: {} help <command>", self.name),
            Some(name) => match self.find(name) {
                Some(index) => {
                    eprint!("{}", self.commands[index].usage(Some(&self.name)));
                }
                None => return Err(Error::UnknownCommand(name.to_string())),
            },
        }
        Ok(Some("help".to_string()))
    }
}
