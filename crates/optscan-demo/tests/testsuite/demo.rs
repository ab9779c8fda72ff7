fn demo_cmd() -> snapbox::cmd::Command {
    snapbox::cmd::Command::new(snapbox::cmd::cargo_bin!("optscan-demo")).env_remove("RUST_LOG")
}

#[test]
fn no_arguments() {
    demo_cmd().assert().success().stdout_matches("");
}

#[test]
fn recognized() {
    demo_cmd()
        .args(["--aaa", "-b", "val", "-bval", "--ccc", "--eee", "-dcx"])
        .assert()
        .success()
        .stdout_matches(
            r#"option aaa
option b with arg val
option b with arg val
option ccc
option eee
option d
option c with arg x
"#,
        );
}

#[test]
fn separate_value_looks_like_option() {
    demo_cmd()
        .args(["--bbb", "--aaa", "-b", "-a"])
        .assert()
        .success()
        .stdout_matches(
            r#"option bbb with arg --aaa
option b with arg -a
"#,
        );
}

#[test]
fn anomalies() {
    demo_cmd()
        .args(["--xyz=val", "-az", "--aaa=1", "--ccc", "orphan", "--bbb"])
        .assert()
        .success()
        .stdout_matches(
            r#"unrecognized option `xyz`
option a
unrecognized option `z`
option `aaa` doesn't allow an argument
option ccc
option `bbb` requires an argument
non-option ARGV-elements: orphan
"#,
        );
}

#[test]
fn end_of_options() {
    demo_cmd()
        .args(["one", "-", "--", "-a", "--bbb", "--"])
        .assert()
        .success()
        .stdout_matches(
            r#"non-option ARGV-elements: one - -a --bbb --
"#,
        );
}

#[test]
fn positionals_keep_order() {
    demo_cmd()
        .args(["one", "-cvalue", "two", "--eee", "three"])
        .assert()
        .success()
        .stdout_matches(
            r#"option c with arg value
option eee
non-option ARGV-elements: one two three
"#,
        );
}
