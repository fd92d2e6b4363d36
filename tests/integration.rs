use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::process::Stdio;

fn build_workspace() {
    assert!(process::Command::new(env!("CARGO"))
        .args(["build"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to run cargo build")
        .wait()
        .expect("failed to wait on cargo build")
        .success());
}

fn driver_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("debug")
        .join("mipsfix")
}

fn run(args: &[&str], stdin: &str) -> process::Output {
    let mut child = process::Command::new(driver_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("mipsfix failed to start");

    child
        .stdin
        .take()
        .expect("stdin handle present")
        .write_all(stdin.as_bytes())
        .expect("can write to mipsfix stdin");

    child.wait_with_output().expect("mipsfix did not exit")
}

#[test]
fn no_flags_writes_preamble_then_body() {
    build_workspace();

    let out = run(&[], "add $3,$4,$5\n");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with(".include \"macro.inc\"\n"));
    assert!(stdout.contains("\tadd\t$3,$4,$5\n"));
}

#[test]
fn no_macro_inc_suppresses_preamble() {
    build_workspace();

    let out = run(&["--no-macro-inc"], "add $3,$4,$5\n");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("macro.inc"));
    assert!(stdout.starts_with("\tadd\t$3,$4,$5\n"));
}

#[test]
fn force_stdin_fails_on_empty_input() {
    build_workspace();

    let out = run(&["--force-stdin"], "");
    assert!(!out.status.success());
}

#[test]
fn empty_stdin_falls_back_to_positional_file() {
    build_workspace();

    let sample = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/fallback.asm");
    let out = run(&[sample.to_str().unwrap()], "");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("stdin was empty"));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("\tadd\t$8,$9,$10\n"));
}

#[test]
fn sdata_limit_from_passthrough_flag_changes_output() {
    build_workspace();

    let body = "lh $2,2($2)\nsw $2,Map_water_height\n";
    let without_limit = run(&[], body);
    let with_limit = run(&["-G4"], body);

    assert!(without_limit.status.success());
    assert!(with_limit.status.success());

    let without_stdout = String::from_utf8_lossy(&without_limit.stdout);
    let with_stdout = String::from_utf8_lossy(&with_limit.stdout);
    assert_eq!(without_stdout.matches("\tnop").count(), 0);
    assert_eq!(with_stdout.matches("\tnop").count(), 1);
}

#[test]
fn run_assembler_pipes_rewritten_output_through() {
    build_workspace();

    let out = run(
        &[
            "--run-assembler",
            "--gnu-as-path",
            "cat",
            "--no-macro-inc",
            "--dont-force-G0",
        ],
        "add $3,$4,$5\n",
    );
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "\tadd\t$3,$4,$5\n");
}

#[test]
fn kpic_is_stripped_before_reaching_the_assembler() {
    build_workspace();

    // `echo` isn't a real assembler, but it reflects its argv to stdout,
    // which is enough to observe what the driver actually spawned it with.
    let out = run(
        &[
            "--run-assembler",
            "--gnu-as-path",
            "echo",
            "--dont-force-G0",
            "--no-macro-inc",
            "-KPIC",
        ],
        "add $3,$4,$5\n",
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("KPIC"));
}

#[test]
fn dont_force_g0_omits_synthesized_flag() {
    build_workspace();

    let out = run(
        &[
            "--run-assembler",
            "--gnu-as-path",
            "echo",
            "--dont-force-G0",
            "--no-macro-inc",
        ],
        "add $3,$4,$5\n",
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("-G0"));
}
