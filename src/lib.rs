//! Declarative command line argument binding.
//!
//! A descriptor struct declares a command's inputs: each field carries a
//! compact annotation with an optional role marker (`!` for a required
//! positional parameter, `?` for an optional one), an optional quoted
//! default, and the rest as the description. Sequence-typed fields absorb
//! all trailing tokens. Field names become flag/argument names
//! (`FirstName` turns into `first-name`).
//!
//! ```no_run
//! cmdbind::opts! {
//!     pub struct LsOpts {
//!         Long: bool = "List in long format",
//!         Dir: String = r#"?"." Directory to list"#,
//!     }
//! }
//!
//! fn main() {
//!     let mut program = cmdbind::Program::new("demo");
//!     program.cmd("ls", "List files", |opts: &LsOpts, _ctx| {
//!         println!("listing {} (long: {})", opts.dir, opts.long);
//!         Ok(())
//!     });
//!     program.main();
//! }
//! ```

pub use cmdbind_macros::opts;

mod bind;
mod cmd;
mod error;
mod help;
mod name;
mod prog;
mod scan;
mod tag;

pub use crate::bind::{BindError, Slot};
pub use crate::cmd::{Command, Field, Fields};
pub use crate::error::{Error, Result};
pub use crate::prog::{Context, Program};
