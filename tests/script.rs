use std::io::Write;
use std::process::Command;

fn run_calc_file(source: &str) -> std::process::Output {
    let mut tmp = tempfile::NamedTempFile::with_suffix(".calc").expect("failed to create temp file");
    tmp.write_all(source.as_bytes()).expect("failed to write");
    tmp.flush().expect("failed to flush");
    Command::new(env!("CARGO_BIN_EXE_smartcalc"))
        .arg(tmp.path())
        .output()
        .expect("failed to run smartcalc")
}

#[test]
fn script_lines_share_variables() {
    let out = run_calc_file("a = 3\nb = 4\n\na * a + b * b\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.trim(), "25");
}

#[test]
fn script_prints_each_result() {
    let out = run_calc_file("1 + 1\n2 * 3\n7 / 2\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.trim(), "2\n6\n3");
}

#[test]
fn script_with_error_exits_nonzero() {
    let out = run_calc_file("1 +\n5\n");
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.trim(), "5");
}

#[test]
fn script_exit_command() {
    let out = run_calc_file("9\n/exit\n10\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.trim(), "9\nBye!");
}

#[test]
fn missing_script_fails() {
    let out = Command::new(env!("CARGO_BIN_EXE_smartcalc"))
        .arg("/nonexistent/definitely/not/here.calc")
        .output()
        .expect("failed to run smartcalc");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("cannot read"));
}
