use std::{fs, io::Write};

use tempfile::{tempdir, NamedTempFile};
use unhash_core::{CrackError, DictionaryAttack, HashFunction, SearchOutcome};

fn word_list(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn finds_word_in_file() {
    let file = word_list(b"foo\nbar\nbaz\n");
    let target = HashFunction::Sha256.digest("bar");

    let outcome = DictionaryAttack::new(HashFunction::Sha256, target.as_str())
        .search_file(file.path())
        .unwrap();

    let SearchOutcome::Found(found) = outcome else {
        panic!("expected a match, got {outcome:?}");
    };
    assert_eq!("bar", found.plaintext);
    assert_eq!(2, found.attempts);
}

#[test]
fn handles_crlf_and_latin1_lines() {
    let file = word_list(b"caf\xe9\r\n\r\nletmein\r\nqwerty");
    let target = HashFunction::Md5.digest("qwerty").to_uppercase();

    let outcome = DictionaryAttack::new(HashFunction::Md5, target)
        .search_file(file.path())
        .unwrap();

    assert_eq!(Some("qwerty"), outcome.plaintext());
    assert_eq!(3, outcome.attempts());
}

#[test]
fn blank_file_is_not_found() {
    let file = word_list(b"\n\n  \n");

    let outcome = DictionaryAttack::new(HashFunction::Sha1, HashFunction::Sha1.digest("x"))
        .search_file(file.path())
        .unwrap();

    assert_eq!(
        0,
        match outcome {
            SearchOutcome::NotFound { attempts, .. } => attempts,
            other => panic!("expected an exhausted word list, got {other:?}"),
        }
    );
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rockyou.txt");

    let result = DictionaryAttack::new(HashFunction::Md5, HashFunction::Md5.digest("x"))
        .search_file(&path);

    match result {
        Err(CrackError::SourceUnavailable { path: actual, .. }) => assert_eq!(path, actual),
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}

#[test]
fn directory_is_source_unavailable() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("words")).unwrap();

    let result = DictionaryAttack::new(HashFunction::Md5, HashFunction::Md5.digest("x"))
        .search_file(&dir.path().join("words"));

    assert!(matches!(result, Err(CrackError::SourceUnavailable { .. })));
}
