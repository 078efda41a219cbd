// Integration tests for wordham
// These exercise the session against a real file-backed store

use std::fs;
use std::path::{Path, PathBuf};
use wordham::core::{Classification, Word};
use wordham::selector::{SequenceRandom, ThreadRandom, WordSelector};
use wordham::session::{GuessError, Outcome, Session, SessionError};
use wordham::store::{FileBackend, STORAGE_KEY, StateStore, StorageUpdate, StoreError};
use wordham::wordlists::Dictionary;
use wordham::wordlists::loader::words_from_slice;

const WORDS: &[&str] = &["crane", "slate", "hello", "speed", "erase"];

fn dictionary() -> Dictionary {
    Dictionary::new(words_from_slice(WORDS)).unwrap()
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wordham_it_{name}"));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn file_store(dir: &Path) -> StateStore<FileBackend> {
    StateStore::new(FileBackend::new(dir))
}

#[test]
fn test_game_survives_restart() {
    let dict = dictionary();
    let dir = temp_dir("restart");

    {
        let random = SequenceRandom::new(vec![0.5]);
        let mut session = Session::start(&dict, file_store(&dir), random).unwrap();
        assert_eq!(session.word().text(), "hello");
        session.submit("speed").unwrap();
        session.tick(30).unwrap();
    }

    // Reloading picks up the same word and progress
    let session = Session::start(&dict, file_store(&dir), ThreadRandom).unwrap();
    assert_eq!(session.word().text(), "hello");
    assert_eq!(session.attempts().len(), 1);
    assert_eq!(session.duration(), 30);
    assert_eq!(session.used_letters().get('e'), Some(Classification::Present));

    let raw = fs::read_to_string(dir.join(format!("{STORAGE_KEY}.json"))).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["wordIndex"], 2);
    assert_eq!(json["duration"], 30);
    assert_eq!(json["attempts"][0][0], serde_json::json!(["s", 0]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_every_word_played_once_per_cycle() {
    let dict = dictionary();
    let dir = temp_dir("cycle");
    let mut session = Session::start(&dict, file_store(&dir), ThreadRandom).unwrap();
    let mut seen = Vec::new();

    for _ in 0..WORDS.len() {
        seen.push(session.word_index());
        let target = session.word().text().to_string();
        assert_eq!(session.submit(&target).unwrap().outcome, Some(Outcome::Won));
        session.next_game().unwrap();
    }

    seen.sort_unstable();
    assert_eq!(seen, (0..WORDS.len()).collect::<Vec<_>>());

    // The cycle is complete, so the last `next_game` started over
    let storage = session.store().read().unwrap();
    assert!(storage.past_words.is_empty());
    assert_eq!(storage.word_index, Some(session.word_index()));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_rejected_guess_leaves_file_untouched() {
    let dict = dictionary();
    let dir = temp_dir("rejected");
    let mut session = Session::start(&dict, file_store(&dir), ThreadRandom).unwrap();
    let path = dir.join(format!("{STORAGE_KEY}.json"));
    let before = fs::read_to_string(&path).unwrap();

    let err = session.submit("zzzzz").unwrap_err();
    assert!(matches!(err, SessionError::Rejected(GuessError::NotInWordList(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_file_is_reported_not_reset() {
    let dict = dictionary();
    let dir = temp_dir("corrupt");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{STORAGE_KEY}.json"));
    fs::write(&path, "{\"duration\": \"ten\"}").unwrap();

    let result = Session::start(&dict, file_store(&dir), ThreadRandom);
    assert!(matches!(result, Err(StoreError::Corrupt(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"duration\": \"ten\"}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_selector_reads_history_from_store() {
    let dict = dictionary();
    let dir = temp_dir("selector");
    let mut store = file_store(&dir);
    store
        .write(StorageUpdate::new().past_words(vec![0, 1, 2, 3]))
        .unwrap();

    let past = store.read().unwrap().past_words;
    let mut selector = WordSelector::new(&dict, ThreadRandom);
    let picked = selector.pick_word(&mut store, &past, None).unwrap();
    assert_eq!(picked.word_index, 4);
    assert_eq!(picked.word, Word::new("erase").unwrap());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_file_starts_fresh_game() {
    let dict = dictionary();
    let dir = temp_dir("empty");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{STORAGE_KEY}.json"));
    fs::write(&path, "").unwrap();

    let random = SequenceRandom::new(vec![0.0]);
    let session = Session::start(&dict, file_store(&dir), random).unwrap();
    assert_eq!(session.word().text(), "crane");
    assert!(session.attempts().is_empty());

    let raw = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["wordIndex"], 0);

    let _ = fs::remove_dir_all(&dir);
}
