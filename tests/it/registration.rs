cmdbind::opts! {
    struct TwoTails {
        Sources: Vec<String> = "! Source files",
        Sinks: Vec<String> = "! Sink files",
    }
}

cmdbind::opts! {
    struct Disordered {
        Dir: String = r#"?"." Directory to list"#,
        Name: String = "! Who to greet",
    }
}

#[test]
#[should_panic(expected = "multiple variadic arguments")]
fn two_sequence_fields_fail_at_registration() {
    let _cmd = crate::command::<TwoTails>("copy");
}

#[test]
#[should_panic(expected = "declared after an optional one")]
fn required_after_optional_fails_at_registration() {
    let _cmd = crate::command::<Disordered>("greet");
}
