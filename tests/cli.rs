use assert_cmd::Command;
use predicates::prelude::*;

fn textcodec() -> Command {
    Command::cargo_bin("textcodec").unwrap()
}

#[test]
fn test_enc_literal() {
    textcodec()
        .args(["enc", "--scheme", "Hex", "-i", "A123456"])
        .assert()
        .success()
        .stdout("41313233343536");
}

#[test]
fn test_enc_stdin_strips_newline() {
    textcodec()
        .args(["enc", "-s", "Base64"])
        .write_stdin("A123456\n")
        .assert()
        .success()
        .stdout("QTEyMzQ1Ng==");
}

#[test]
fn test_dec_literal() {
    textcodec()
        .args(["dec", "-s", "base32", "-i", "ieytemzugu3a"])
        .assert()
        .success()
        .stdout("A123456");
}

#[test]
fn test_dec_invalid_input_exit_code() {
    textcodec()
        .args(["dec", "-s", "Bin", "-i", "0101"])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("invalid length"));
}

#[test]
fn test_unknown_scheme_exit_code() {
    textcodec()
        .args(["enc", "-s", "Base99", "-i", "x"])
        .assert()
        .code(13)
        .stderr(predicate::str::contains("unknown codec: Base99"));
}

#[test]
fn test_jmp_prints_target() {
    textcodec()
        .args(["jmp", "-s", "URL", "-i", "https%3A%2F%2Fexample.com"])
        .assert()
        .success()
        .stdout("https://example.com");
}

#[test]
fn test_jmp_invalid_target_exit_code() {
    textcodec()
        .args(["jmp", "-s", "Base64", "-i", "aGVsbG8="])
        .assert()
        .code(11)
        .stderr(predicate::str::contains("invalid redirect target: hello"));
}

#[test]
fn test_morse_partial_loss_warning() {
    textcodec()
        .args(["enc", "-s", "MorseCode", "-i", "hi!"])
        .assert()
        .success()
        .stdout(".... ..")
        .stderr(predicate::str::contains("could not carry 1 item(s): !"));
}

#[test]
fn test_enc_json() {
    textcodec()
        .args(["enc", "-s", "Dec", "-i", "A", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"text\""))
        .stdout(predicate::str::contains("\"scheme\": \"Dec\""))
        .stdout(predicate::str::contains("\"value\": \"65\""));
}

#[test]
fn test_list() {
    textcodec()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("UnicodeEscapeLong"))
        .stdout(predicate::str::contains("MorseCode"));
}

#[test]
fn test_info_json() {
    textcodec()
        .args(["info", "hex", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Hex\""))
        .stdout(predicate::str::contains("\"unit\": \"Utf8Bytes\""));
}

#[test]
fn test_file_input() {
    let path = std::env::temp_dir().join(format!("textcodec-cli-{}.txt", std::process::id()));
    std::fs::write(&path, "hello\n").unwrap();

    textcodec()
        .args(["enc", "-s", "CodePoint", "-i"])
        .arg(format!("@{}", path.display()))
        .assert()
        .success()
        .stdout("104,101,108,108,111");

    std::fs::remove_file(&path).unwrap();
}
