use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::prelude::OutputAssertExt;
use predicates::prelude::*;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

const AMBIGUOUS: &str = "Use exactly one input method";

fn wordlist(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

/// The binary with stdin on /dev/null, which does not count as piped input
fn packer() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("param-packer"));
    cmd.stdin(Stdio::null());
    cmd
}

#[test]
fn file_input_single_payload() {
    let file = wordlist(b"foo\nbar\n\n  baz  \n");
    let mut cmd = packer();
    cmd.arg("-f").arg(file.path());

    cmd.assert()
        .success()
        .stdout("foo=XNLV1&bar=XNLV2&baz=XNLV3\n");
}

#[test]
fn file_input_keeps_invalid_utf8_bytes() {
    let mut content = "пароль\nid".as_bytes().to_vec();
    content.extend_from_slice(b"\xff\n");
    let file = wordlist(&content);

    let output = packer().arg("-f").arg(file.path()).output().unwrap();

    let mut expected = "пароль=XNLV1&id".as_bytes().to_vec();
    expected.extend_from_slice(b"\xff=XNLV2\n");
    assert!(output.status.success());
    assert_eq!(output.stdout, expected);
}

#[test]
fn piped_input_batch_chunks() {
    let mut cmd = cargo_bin_cmd!("param-packer");
    cmd.args(["-n", "2"]).write_stdin("a\nb\nc\nd\ne\n");

    cmd.assert()
        .success()
        .stdout("a=XNLV1&b=XNLV2\n---\nc=XNLV1&d=XNLV2\n---\ne=XNLV1\n");
}

#[test]
fn empty_file_prints_empty_line() {
    let file = wordlist(b"");
    let mut cmd = packer();
    cmd.arg("-f").arg(file.path());

    cmd.assert().success().stdout("\n");
}

#[test]
fn empty_file_chunked_prints_nothing() {
    let file = wordlist(b"\n   \n");
    let mut cmd = packer();
    cmd.arg("-f").arg(file.path()).args(["-n", "3"]);

    cmd.assert().success().stdout("");
}

#[test]
fn negative_chunk_size_means_whole_list() {
    let mut cmd = cargo_bin_cmd!("param-packer");
    cmd.args(["-n", "-1"]).write_stdin("a\nb\nc\n");

    cmd.assert().success().stdout("a=XNLV1&b=XNLV2&c=XNLV3\n");
}

#[test]
fn file_and_interactive_is_ambiguous() {
    let file = wordlist(b"foo\n");
    let mut cmd = packer();
    cmd.arg("-f").arg(file.path()).arg("-i");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(AMBIGUOUS));
}

#[test]
fn file_and_pipe_is_ambiguous() {
    let file = wordlist(b"foo\n");
    let mut cmd = cargo_bin_cmd!("param-packer");
    cmd.arg("-f").arg(file.path()).write_stdin("bar\n");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(AMBIGUOUS));
}

#[test]
fn interactive_and_pipe_is_ambiguous() {
    let mut cmd = cargo_bin_cmd!("param-packer");
    cmd.arg("-i").write_stdin("bar\n");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(AMBIGUOUS));
}

#[test]
fn no_input_method_is_ambiguous() {
    let mut cmd = packer();

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(AMBIGUOUS).and(predicate::str::contains("0 selected")));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = packer();
    cmd.arg("-f").arg(dir.path().join("nope.txt"));

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to read input file"));
}

#[test]
fn interactive_input_prompts_on_stderr() {
    // stdin is closed, so the paste ends immediately
    let mut cmd = packer();
    cmd.arg("-i");

    cmd.assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains("press Ctrl+D when done"));
}

#[test]
fn interactive_output_shows_numbered_chunks() {
    let file = wordlist(b"a\nb\nc\n");
    let mut cmd = packer();
    cmd.arg("-f").arg(file.path()).args(["-n", "2", "-oi"]);

    cmd.assert()
        .success()
        .stdout("Chunk 1:\na=XNLV1&b=XNLV2\nChunk 2:\nc=XNLV1\n")
        .stderr(predicate::str::contains("Press Enter for the next chunk"));
}

#[test]
fn interactive_output_with_piped_input_warns() {
    let mut cmd = cargo_bin_cmd!("param-packer");
    cmd.args(["-oi", "-n", "1"]).write_stdin("a\nb\n");

    cmd.assert()
        .success()
        .stdout("Chunk 1:\na=XNLV1\nChunk 2:\nb=XNLV1\n")
        .stderr(predicate::str::contains("will not pause"));
}
