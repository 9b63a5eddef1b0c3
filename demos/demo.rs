//! A small multi-command program exercising flags, positional parameters and
//! the variadic slot:
//!
//! ```console
//! $ cargo run --example demo -- ls -long /tmp
//! $ cargo run --example demo -- greet -shout Ada notes.txt todo.md
//! $ cargo run --example demo -- help greet
//! ```

use cmdbind::Program;

cmdbind::opts! {
    struct Globals {
        Quiet: bool = "Suppress status messages",
    }
}

cmdbind::opts! {
    struct LsOpts {
        Long: bool = "List in long format",
        Dir: String = r#"?"." Directory to list"#,
    }
}

cmdbind::opts! {
    struct GreetOpts {
        Shout: bool = "Print the greeting in uppercase",
        FirstName: String = r#"="John" Name of a cool person"#,
        Name: String = "! Who to greet",
        Files: Vec<String> = "? Files to mention",
    }
}

fn main() {
    let mut program = Program::<Globals>::with_globals("demo");
    program.quiet_when(|globals| globals.quiet);

    program.cmd("version", "Show version", |_: &(), ctx| {
        ctx.log("demo v1.2.3");
        Ok(())
    });

    program.cmd("ls", "List files", |opts: &LsOpts, ctx| {
        let entries = std::fs::read_dir(&opts.dir).map_err(|err| ctx.fail(err))?;
        for entry in entries {
            let entry = entry.map_err(|err| ctx.fail(err))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if opts.long {
                let meta = entry.metadata().map_err(|err| ctx.fail(err))?;
                println!("{:10}  {}", meta.len(), name);
            } else {
                println!("{name}");
            }
        }
        Ok(())
    });

    program.cmd("greet", "Greet someone", |opts: &GreetOpts, ctx| {
        let mut greeting = format!("Hello {}, from {}", opts.name, opts.first_name);
        if !opts.files.is_empty() {
            greeting.push_str(&format!(" (see: {})", opts.files.join(", ")));
        }
        if opts.shout {
            greeting = greeting.to_uppercase();
        }
        ctx.log(greeting);
        Ok(())
    });

    program.main();
}
