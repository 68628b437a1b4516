use std::io::Write;
use std::process::{Command, Stdio};

fn run_binary(exe: &str, args: &[&str], input: &str) -> (String, bool) {
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("binary did not exit");
    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        output.status.success(),
    )
}

#[test]
fn interactive_smoke_test() {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let (out, ok) = run_binary(
        exe,
        &[],
        "set show_board false\ne2\ne4\ne7\ne5\nd1\nh5\nfen\nquit\n",
    );

    assert!(ok);
    assert!(out.contains("White to move"));
    assert!(out.contains("selected e2: e3 e4"));
    assert!(out.contains("move 1: e2-e4"));
    assert!(out.contains("move 2: e7-e5"));
    assert!(out.contains("move 3: Qd1-h5"));
    assert!(out.contains("rnbqkbnr/pppp1ppp/8/4p2Q/4P3/8/PPPP1PPP/RNB1KBNR"));
}

#[test]
fn check_status_reports_attackers() {
    let exe = env!("CARGO_BIN_EXE_check_status");
    let (out, ok) = run_binary(exe, &["4r2k/8/8/8/8/8/8/4K3"], "");
    assert!(ok);
    assert!(out.contains("check white by rook@e8"));
    assert!(out.contains("check black none"));
}

#[test]
fn check_status_rejects_bad_fen() {
    let exe = env!("CARGO_BIN_EXE_check_status");
    let (_, ok) = run_binary(exe, &["not/a/fen"], "");
    assert!(!ok);
}
