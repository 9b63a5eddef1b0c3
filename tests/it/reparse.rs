cmdbind::opts! {
    struct RunOpts {
        Long: bool = "List in long format",
        Dir: String = r#"?"." Directory to list"#,
        Files: Vec<String> = "? Files to touch",
    }
}

#[test]
fn parsing_is_idempotent() {
    let mut cmd = crate::command::<RunOpts>("run");
    let args = crate::argv("-long /tmp a b");

    cmd.parse(&args).unwrap();
    let first = format!("{:?}", cmd.opts());
    cmd.parse(&args).unwrap();
    let second = format!("{:?}", cmd.opts());

    // no accumulation: the sequence is reallocated, not appended to
    assert_eq!(first, second);
    assert_eq!(cmd.opts().files, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn a_later_parse_fully_overwrites() {
    let mut cmd = crate::command::<RunOpts>("run");

    cmd.parse(&crate::argv("-long /tmp a b")).unwrap();
    assert!(cmd.opts().long);

    cmd.parse(&crate::argv("")).unwrap();
    assert!(!cmd.opts().long);
    assert_eq!(cmd.opts().dir, ".");
    assert_eq!(cmd.opts().files, Vec::<String>::new());
}
