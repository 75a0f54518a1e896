use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

// md5("10"), sha1("admin") and md5("password")
const MD5_10: &str = "d3d9446802a44259755d38e6d163e820";
const SHA1_ADMIN: &str = "d033e22ae348aeb5660fc2140aec35850c4da997";
const MD5_PASSWORD: &str = "5f4dcc3b5aa765d61d8327deb882cf99";

fn unhash() -> Command {
    Command::cargo_bin("unhash").unwrap()
}

#[test]
fn brute_force_finds_digits() {
    unhash()
        .args(["brute-force", MD5_10, "-a", "md5", "--charset", "digits", "-l", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 10"));
}

#[test]
fn brute_force_reports_safety_limit() {
    unhash()
        .args([
            "brute-force",
            MD5_10,
            "-a",
            "md5",
            "--custom-charset",
            "01",
            "-l",
            "3",
            "-m",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("safety limit reached"))
        .stdout(predicate::str::contains("Result: NOT FOUND"));
}

#[test]
fn brute_force_rejects_repeated_charset() {
    unhash()
        .args(["brute-force", MD5_10, "-a", "md5", "--custom-charset", "0110"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid search parameters"));
}

#[test]
fn rainbow_uses_demo_words() {
    unhash()
        .args(["rainbow", SHA1_ADMIN, "-a", "sha1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: admin"));
}

#[test]
fn rainbow_accepts_uppercase_digest() {
    unhash()
        .args(["rainbow", &MD5_PASSWORD.to_uppercase(), "-a", "md5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: password"));
}

#[test]
fn rainbow_with_word_list_misses() {
    let mut words = NamedTempFile::new().unwrap();
    writeln!(words, "hunter2\ntrustno1").unwrap();

    unhash()
        .args(["rainbow", SHA1_ADMIN, "-a", "sha1", "--wordlist"])
        .arg(words.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: NOT FOUND"));
}

#[test]
fn rainbow_refuses_empty_word_list() {
    let mut words = NamedTempFile::new().unwrap();
    writeln!(words, "\n   \n").unwrap();

    unhash()
        .args(["rainbow", SHA1_ADMIN, "-a", "sha1", "--wordlist"])
        .arg(words.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is empty"));
}

#[test]
fn dictionary_finds_word() {
    let mut words = NamedTempFile::new().unwrap();
    writeln!(words, "root\n\nadmin\nguest").unwrap();

    unhash()
        .args(["dictionary", SHA1_ADMIN, "-a", "sha1"])
        .arg(words.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: admin"));
}

#[test]
fn dictionary_missing_word_list_fails() {
    unhash()
        .args(["dictionary", SHA1_ADMIN, "-a", "sha1", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn unsupported_algorithm_is_rejected() {
    unhash()
        .args(["rainbow", MD5_PASSWORD, "-a", "MD5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported hash algorithm"));
}

#[test]
fn non_hex_digest_is_rejected() {
    unhash()
        .args(["rainbow", "not-a-digest", "-a", "md5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid hexadecimal"));
}
