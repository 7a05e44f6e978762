use std::fs;

use ts_script::{ExecLog, ScoreTestEntry, ScriptContext, ScriptDir, ScriptEntry, TestEntry};
use ts_test_support::{script_dir, FakeHost, FakeScore, ScoreElement};

fn melody() -> FakeScore {
    FakeScore::new("Melody")
        .with(ScoreElement::new("clef", "G").at(1.0, 2.0))
        .with(ScoreElement::new("note", "C4").at(10.0, 2.0))
        .with(ScoreElement::new("note", "E4").at(20.0, 4.0))
}

fn execute(host: &FakeHost, resolver: &ScriptDir, entry: &ScriptEntry) -> (bool, ExecLog) {
    let mut log = ExecLog::new();
    let passed = {
        let mut ctx = ScriptContext::new(host, resolver, &mut log);
        entry.execute(&mut ctx)
    };
    (passed, log)
}

#[test]
fn execute_passes_when_content_matches_reference() {
    let dir = script_dir();
    melody().write(&dir.path().join("ref.mscx")).expect("reference written");

    let mut relaid = melody();
    relaid.elements[2].position.x = 99.0;
    let host = FakeHost::new().with_score(relaid);
    let resolver = ScriptDir::new(dir.path(), true);

    let (passed, log) = execute(&host, &resolver, &ScoreTestEntry::new("ref.mscx").into());
    assert!(passed, "layout-only changes should pass: {}", log.as_str());
    assert!(log.is_empty());
}

#[test]
fn execute_fails_with_diff_text_when_content_differs() {
    let dir = script_dir();
    melody().write(&dir.path().join("ref.mscx")).expect("reference written");

    let mut changed = melody();
    changed.elements[1].text = "D4".to_string();
    let host = FakeHost::new().with_score(changed);
    let resolver = ScriptDir::new(dir.path(), true);

    let (passed, log) = execute(&host, &resolver, &ScoreTestEntry::new("ref.mscx").into());
    assert!(!passed);
    assert!(log.as_str().starts_with("score test: fail\n"));
    assert!(log.as_str().contains("- [1] note C4"));
    assert!(log.as_str().contains("+ [1] note D4"));
}

#[test]
fn execute_fails_without_current_score() {
    let dir = script_dir();
    melody().write(&dir.path().join("ref.mscx")).expect("reference written");
    let host = FakeHost::new();
    let resolver = ScriptDir::new(dir.path(), true);

    let (passed, log) = execute(&host, &resolver, &ScoreTestEntry::new("ref.mscx").into());
    assert!(!passed);
    assert_eq!(log.as_str(), "score test: no current score\n");
}

#[test]
fn execute_fails_when_reference_cannot_be_loaded() {
    let dir = script_dir();
    fs::write(dir.path().join("broken.mscx"), "not a score").expect("write");
    let host = FakeHost::new().with_score(melody());
    let resolver = ScriptDir::new(dir.path(), true);

    for name in ["missing.mscx", "broken.mscx"] {
        let (passed, log) = execute(&host, &resolver, &ScoreTestEntry::new(name).into());
        assert!(!passed);
        assert!(log.as_str().contains("could not load reference score"));
        assert!(log
            .as_str()
            .contains(&dir.path().join(name).display().to_string()));
    }
}

#[test]
fn record_synthesizes_first_free_name() {
    let dir = script_dir();
    fs::write(dir.path().join("1.mscx"), "{}").expect("write");
    fs::write(dir.path().join("2.mscx"), "{}").expect("write");

    let host = FakeHost::new().with_score(melody());
    let resolver = ScriptDir::new(dir.path(), true);
    let mut log = ExecLog::new();
    let mut ctx = ScriptContext::new(&host, &resolver, &mut log);

    let entry = ScoreTestEntry::from_context(&mut ctx, None).expect("recording should pass");
    assert_eq!(entry.ref_path(), "3.mscx");
    assert_eq!(entry.serialize(), "test score 3.mscx");
    assert_eq!(
        FakeScore::read(&dir.path().join("3.mscx")).expect("saved score"),
        melody()
    );
}

#[test]
fn record_reuses_lowest_gap() {
    let dir = script_dir();
    fs::write(dir.path().join("2.mscx"), "{}").expect("write");

    let host = FakeHost::new().with_score(melody());
    let resolver = ScriptDir::new(dir.path(), true);
    let mut log = ExecLog::new();
    let mut ctx = ScriptContext::new(&host, &resolver, &mut log);

    let entry = ScoreTestEntry::from_context(&mut ctx, None).expect("recording should pass");
    assert_eq!(entry.ref_path(), "1.mscx");
}

#[test]
fn record_stores_absolute_path_when_relative_storage_is_off() {
    let dir = script_dir();
    let host = FakeHost::new().with_score(melody());
    let resolver = ScriptDir::new(dir.path(), false);
    let mut log = ExecLog::new();
    let mut ctx = ScriptContext::new(&host, &resolver, &mut log);

    let entry =
        ScoreTestEntry::from_context(&mut ctx, Some("named.mscx")).expect("recording should pass");
    let expected = dir.path().join("named.mscx");
    assert_eq!(entry.ref_path(), expected.to_string_lossy());
    assert!(expected.is_file());
}

#[test]
fn recorded_reference_passes_until_score_changes() {
    let dir = script_dir();
    let resolver = ScriptDir::new(dir.path(), true);
    let host = FakeHost::new().with_score(melody());

    let entry = {
        let mut log = ExecLog::new();
        let mut ctx = ScriptContext::new(&host, &resolver, &mut log);
        ScoreTestEntry::from_context(&mut ctx, None).expect("recording should pass")
    };
    let entry = ScriptEntry::from(entry);

    let (passed, _) = execute(&host, &resolver, &entry);
    assert!(passed);

    let edited = FakeHost::new().with_score(melody().with(ScoreElement::new("note", "G4")));
    let (passed, log) = execute(&edited, &resolver, &entry);
    assert!(!passed);
    assert!(log.as_str().contains("+ [3] note G4"));
}

#[test]
fn record_fails_without_current_score() {
    let dir = script_dir();
    let host = FakeHost::new();
    let resolver = ScriptDir::new(dir.path(), true);
    let mut log = ExecLog::new();
    let mut ctx = ScriptContext::new(&host, &resolver, &mut log);

    assert!(ScoreTestEntry::from_context(&mut ctx, None).is_none());
    assert!(log.as_str().contains("no current score"));
    assert!(!dir.path().join("1.mscx").exists());
}

#[test]
fn record_reports_save_failure() {
    let dir = script_dir();
    let host = FakeHost::new().with_score(melody());
    let resolver = ScriptDir::new(dir.path(), true);
    let mut log = ExecLog::new();
    let mut ctx = ScriptContext::new(&host, &resolver, &mut log);

    assert!(ScoreTestEntry::from_context(&mut ctx, Some("no/such/dir/ref.mscx")).is_none());
    assert!(log.as_str().contains("failed to save score"));
}
