//! Command definitions: the walk over a descriptor's declared fields and the
//! per-command parse/run machinery built from it.

use crate::bind::Slot;
use crate::error::{Error, Result};
use crate::help;
use crate::prog::Context;
use crate::scan::{self, Scanner};
use crate::tag::{self, Marker};
use crate::name;

/// One declared field of a descriptor: the identifier as written, its
/// annotation, and the binding over its storage.
///
/// The `opts!` macro produces these; hand-written [`Fields`] impls can too.
pub struct Field<D> {
    pub(crate) name: &'static str,
    pub(crate) tag: &'static str,
    pub(crate) slot: Slot<D>,
}

impl<D> Field<D> {
    pub fn new(name: &'static str, tag: &'static str, slot: Slot<D>) -> Field<D> {
        Field { name, tag, slot }
    }
}

/// A descriptor type whose fields declare a command's inputs.
pub trait Fields: Default + Clone + 'static {
    fn fields() -> Vec<Field<Self>>;
}

/// The empty descriptor, for handlers that take no options.
impl Fields for () {
    fn fields() -> Vec<Field<Self>> {
        Vec::new()
    }
}

/// A named flag or positional parameter, bound to one descriptor field.
pub(crate) struct Binding<D> {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) optional: bool,
    pub(crate) slot: Slot<D>,
    /// Rendered default, shown in usage text.
    pub(crate) shown_default: String,
}

impl<D> Binding<D> {
    /// Translates, parses the annotation and applies the default. `None` for
    /// fields whose name is not externally visible. The caller classifies
    /// via the returned marker.
    pub(crate) fn from_field(
        owner: &str,
        field: &Field<D>,
        template: &mut D,
    ) -> Option<(Binding<D>, Option<Marker>)> {
        if !field.name.chars().next().is_some_and(char::is_uppercase) {
            return None;
        }
        let annotation = tag::parse(field.tag);
        let name = name::translate(field.name);
        if !annotation.default.is_empty() && !field.slot.is_sequence() {
            if let Err(err) = field.slot.set(template, &annotation.default) {
                panic!("{owner}: bad default {:?} for `{name}`: {err}", annotation.default);
            }
        }
        let shown_default = field.slot.render(template);
        let binding = Binding {
            name,
            description: annotation.description,
            optional: false,
            slot: field.slot,
            shown_default,
        };
        Some((binding, annotation.marker))
    }
}

type Handler<D> = Box<dyn FnMut(&D, &Context<'_>) -> Result<()>>;

/// A named command: flags, positional parameters, at most one variadic slot,
/// and a handler receiving the populated descriptor.
pub struct Command<D: Fields> {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) flags: Vec<Binding<D>>,
    pub(crate) args: Vec<Binding<D>>,
    pub(crate) var_arg: Option<Binding<D>>,
    /// Pristine descriptor with annotation defaults applied; every parse
    /// starts from a copy of it.
    template: D,
    values: D,
    handler: Handler<D>,
}

impl<D: Fields> Command<D> {
    /// Builds a command from `D`'s declared fields.
    ///
    /// Panics on structural mistakes: two sequence-typed fields, a required
    /// positional declared after an optional one, or a default the field's
    /// binding rejects. These are programmer errors, caught at registration.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl FnMut(&D, &Context<'_>) -> Result<()> + 'static,
    ) -> Command<D> {
        let mut cmd = Command {
            name: name.into(),
            description: description.into(),
            flags: Vec::new(),
            args: Vec::new(),
            var_arg: None,
            template: D::default(),
            values: D::default(),
            handler: Box::new(handler),
        };
        for field in D::fields() {
            cmd.bind_field(&field);
        }
        let mut seen_optional = false;
        for arg in &cmd.args {
            if arg.optional {
                seen_optional = true;
            } else if seen_optional {
                panic!(
                    "command `{}`: required argument `<{}>` declared after an optional one",
                    cmd.name, arg.name
                );
            }
        }
        cmd.values = cmd.template.clone();
        cmd
    }

    fn bind_field(&mut self, field: &Field<D>) {
        let owner = format!("command `{}`", self.name);
        let Some((mut binding, marker)) = Binding::from_field(&owner, field, &mut self.template)
        else {
            return;
        };
        // a sequence-typed field is always the variadic slot, whatever its
        // marker says
        if binding.slot.is_sequence() {
            binding.optional = marker != Some(Marker::Required);
            if let Some(existing) = &self.var_arg {
                panic!(
                    "command `{}`: multiple variadic arguments (`<{}>` and `<{}>`)",
                    self.name, existing.name, binding.name
                );
            }
            self.var_arg = Some(binding);
            return;
        }
        match marker {
            Some(Marker::Required) => self.args.push(binding),
            Some(Marker::Optional) => {
                binding.optional = true;
                self.args.push(binding);
            }
            Some(Marker::Default) | None => self.flags.push(binding),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of flags, used to decide whether usage needs an `[options]`
    /// marker.
    pub fn flag_count(&self) -> usize {
        self.flags.len()
    }

    /// The values populated by the most recent parse (annotation defaults
    /// before any parse).
    pub fn opts(&self) -> &D {
        &self.values
    }

    /// `name <arg> [<opt-arg>] <var>...`
    pub fn synopsis(&self) -> String {
        help::synopsis(self)
    }

    pub fn usage(&self, program: Option<&str>) -> String {
        help::command_usage(self, program)
    }

    /// Parses an argument vector into the descriptor: leading flags, then
    /// positional parameters in declaration order, then everything left into
    /// the variadic slot. Each call starts from the pristine defaults, so
    /// parsing is idempotent.
    pub fn parse(&mut self, args: &[String]) -> Result<()> {
        self.values = self.template.clone();
        let mut scan = Scanner::new(args);
        scan::apply_flags(&self.flags, &mut self.values, &mut scan)?;
        let rest = scan.rest();

        let filled = self.args.len().min(rest.len());
        for (arg, token) in self.args.iter().zip(&rest) {
            arg.slot.set(&mut self.values, token).map_err(|err| Error::BadArgValue {
                arg: arg.name.clone(),
                reason: err.to_string(),
            })?;
        }
        if let Some(missing) = self.args.iter().skip(filled).find(|arg| !arg.optional) {
            return Err(Error::MissingArg(missing.name.clone()));
        }

        if rest.len() > filled {
            if let Some(var) = &self.var_arg {
                var.slot.set_all(&mut self.values, &rest[filled..]).map_err(|err| {
                    Error::BadArgValue { arg: var.name.clone(), reason: err.to_string() }
                })?;
            }
            // surplus tokens with no variadic slot are dropped, not an error
        }
        Ok(())
    }

    /// Parses, then invokes the handler with the populated descriptor.
    pub fn run(&mut self, ctx: &Context<'_>, args: &[String]) -> Result<()> {
        self.parse(args)?;
        (self.handler)(&self.values, ctx)
    }
}

/// Object-safe view of a command, for heterogeneous registries.
pub(crate) trait DynCommand {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn flag_count(&self) -> usize;
    fn synopsis(&self) -> String;
    fn usage(&self, program: Option<&str>) -> String;
    fn run(&mut self, ctx: &Context<'_>, args: &[String]) -> Result<()>;
}

impl<D: Fields> DynCommand for Command<D> {
    fn name(&self) -> &str {
        Command::name(self)
    }
    fn description(&self) -> &str {
        Command::description(self)
    }
    fn flag_count(&self) -> usize {
        Command::flag_count(self)
    }
    fn synopsis(&self) -> String {
        Command::synopsis(self)
    }
    fn usage(&self, program: Option<&str>) -> String {
        Command::usage(self, program)
    }
    fn run(&mut self, ctx: &Context<'_>, args: &[String]) -> Result<()> {
        Command::run(self, ctx, args)
    }
}
