use expect_test::expect;

cmdbind::opts! {
    struct LsOpts {
        Long: bool = "List in long format",
        Dir: String = r#"?"." Directory to list"#,
    }
}

cmdbind::opts! {
    struct GreetOpts {
        FirstName: String = r#"="John" Name of a cool person"#,
        Shout: bool = "Print the greeting in uppercase",
    }
}

#[test]
fn flags_then_positionals() {
    let mut cmd = crate::command::<LsOpts>("ls");
    crate::check(
        &mut cmd,
        "-long /tmp",
        expect![[r#"
            LsOpts {
                long: true,
                dir: "/tmp",
            }
        "#]],
    );
}

#[test]
fn defaults_apply_when_nothing_is_given() {
    let mut cmd = crate::command::<LsOpts>("ls");
    crate::check(
        &mut cmd,
        "",
        expect![[r#"
            LsOpts {
                long: false,
                dir: ".",
            }
        "#]],
    );
}

#[test]
fn flag_spellings() {
    let mut cmd = crate::command::<LsOpts>("ls");
    crate::check(
        &mut cmd,
        "--long=false /x",
        expect![[r#"
            LsOpts {
                long: false,
                dir: "/x",
            }
        "#]],
    );
    crate::check(
        &mut cmd,
        "--long",
        expect![[r#"
            LsOpts {
                long: true,
                dir: ".",
            }
        "#]],
    );
}

#[test]
fn double_dash_ends_the_flag_phase() {
    let mut cmd = crate::command::<LsOpts>("ls");
    crate::check(
        &mut cmd,
        "-- -long",
        expect![[r#"
            LsOpts {
                long: false,
                dir: "-long",
            }
        "#]],
    );
}

#[test]
fn unknown_flag() {
    let mut cmd = crate::command::<LsOpts>("ls");
    crate::check(&mut cmd, "-werbose", expect![[r#"unknown flag: `-werbose`"#]]);
}

#[test]
fn malformed_flag_value() {
    let mut cmd = crate::command::<LsOpts>("ls");
    crate::check(
        &mut cmd,
        "-long=banana",
        expect![[r#"can't parse `-long`: invalid boolean literal `banana`"#]],
    );
}

#[test]
fn translated_flag_names() {
    let mut cmd = crate::command::<GreetOpts>("greet");
    crate::check(
        &mut cmd,
        "-first-name Bob -shout",
        expect![[r#"
            GreetOpts {
                first_name: "Bob",
                shout: true,
            }
        "#]],
    );
    crate::check(
        &mut cmd,
        "-first-name=Eve",
        expect![[r#"
            GreetOpts {
                first_name: "Eve",
                shout: false,
            }
        "#]],
    );
}

#[test]
fn flag_default_survives_until_overridden() {
    let mut cmd = crate::command::<GreetOpts>("greet");
    crate::check(
        &mut cmd,
        "",
        expect![[r#"
            GreetOpts {
                first_name: "John",
                shout: false,
            }
        "#]],
    );
}

#[test]
fn missing_flag_value() {
    let mut cmd = crate::command::<GreetOpts>("greet");
    crate::check(&mut cmd, "-first-name", expect![[r#"expected a value for `-first-name`"#]]);
    crate::check(
        &mut cmd,
        "-first-name -shout",
        expect![[r#"expected a value for `-first-name`"#]],
    );
}

#[test]
fn surplus_positionals_are_ignored() {
    // one declared positional, no variadic slot: the extra tokens are
    // dropped, not an error
    let mut cmd = crate::command::<LsOpts>("ls");
    cmd.parse(&crate::argv("/srv extra1 extra2")).unwrap();
    assert_eq!(cmd.opts().dir, "/srv");
}
