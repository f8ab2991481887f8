use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_daybook"))
}

/// Isolated HOME/XDG layout so tests never touch a real journal.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create tempdir"),
        }
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn data_home(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    fn default_journal(&self) -> PathBuf {
        self.data_home().join("daybook").join("journal.json")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env_remove("DAYBOOK_PATH")
            .env_remove("DAYBOOK_CONFIG")
            .env_remove("DAYBOOK_LOG")
            .env("NO_COLOR", "1")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run daybook")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "daybook {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn daybook");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(input.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait daybook")
    }
}

fn first_id(list_output: &str) -> String {
    list_output
        .lines()
        .next()
        .and_then(|line| line.split('\t').next())
        .expect("list row")
        .to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_add_list_search_flow() {
    let sandbox = Sandbox::new();

    let added = sandbox.run_ok(&["add", "Walked", "the", "dog."]);
    assert!(added.starts_with("Added entry "));
    sandbox.run_ok(&["add", "Rain all day"]);
    assert!(sandbox.default_journal().exists());

    let listed = sandbox.run_ok(&["list"]);
    let rows: Vec<&str> = listed.lines().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].ends_with("\tWalked the dog."));
    assert!(rows[1].ends_with("\tRain all day"));

    let found = sandbox.run_ok(&["search", "dog"]);
    assert_eq!(found.lines().count(), 1);
    assert!(found.contains("Walked the dog."));

    // case sensitive
    let none = sandbox.run_ok(&["search", "rain"]);
    assert_eq!(none.trim(), "Nothing found.");
}

#[test]
fn test_add_from_stdin_and_explicit_date() {
    let sandbox = Sandbox::new();

    let output = sandbox.run_with_stdin(&["add", "--date", "2021-07-04"], "Fireworks tonight\n");
    assert!(output.status.success(), "{}", stderr(&output));

    let by_date = sandbox.run_ok(&["search", "2021-07"]);
    assert!(by_date.contains("\t2021-07-04\tFireworks tonight"));
}

#[test]
fn test_stdin_keeps_trailing_spaces() {
    let sandbox = Sandbox::new();

    let output = sandbox.run_with_stdin(&["add"], "tabs and spaces \t\n");
    assert!(output.status.success(), "{}", stderr(&output));

    let shown = sandbox.run_ok(&["random", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&shown).expect("json");
    assert_eq!(value["text"], "tabs and spaces \t");
}

#[test]
fn test_add_rejects_bad_date_and_empty_text() {
    let sandbox = Sandbox::new();

    let bad_date = sandbox.run(&["add", "--date", "July 4th", "text"]);
    assert_eq!(bad_date.status.code(), Some(4));

    let empty = sandbox.run(&["add"]);
    assert_eq!(empty.status.code(), Some(4));
    assert!(stderr(&empty).contains("Entry text is empty"));
    assert!(!sandbox.default_journal().exists());
}

#[test]
fn test_random_on_empty_journal() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["random"]);
    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("The journal is empty."));
}

#[test]
fn test_random_returns_the_only_entry() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["add", "only one"]);
    let shown = sandbox.run_ok(&["random", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&shown).expect("json");
    assert_eq!(value["text"], "only one");
}

#[test]
fn test_stats_words_scenario() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["add", "The cat sat."]);
    sandbox.run_ok(&["add", "The dog sat on the cat."]);

    let words = sandbox.run_ok(&["stats", "words", "-n", "3"]);
    assert_eq!(words.trim_end(), "the\t3\ncat\t2\nsat\t2");
}

#[test]
fn test_stats_on_empty_journal() {
    let sandbox = Sandbox::new();

    let words = sandbox.run_ok(&["stats", "words"]);
    assert_eq!(words.trim(), "No words in the journal yet.");

    let letters = sandbox.run_ok(&["stats", "letters"]);
    assert_eq!(letters.lines().count(), 26);
    assert!(letters.lines().all(|line| line.ends_with("\t0\t0.00")));

    let combos = sandbox.run_ok(&["stats", "combos", "--json"]);
    assert_eq!(combos.trim(), "[]");
}

#[test]
fn test_stats_longest_and_combos() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["add", "abc"]);
    sandbox.run_ok(&["add", "abc extraordinary"]);

    let longest = sandbox.run_ok(&["stats", "longest"]);
    assert_eq!(longest.trim_end(), "extraordinary\t13\nabc\t3");

    let combos = sandbox.run_ok(&["stats", "combos"]);
    assert_eq!(combos.trim_end(), "abc abc\t1\nabc extraordinary\t1");
}

#[test]
fn test_stats_limits_come_from_config() {
    let sandbox = Sandbox::new();
    let config_dir = sandbox.config_home().join("daybook");
    std::fs::create_dir_all(&config_dir).expect("config dir");
    std::fs::write(config_dir.join("config.toml"), "[stats]\nwords = 1\n").expect("config");
    sandbox.run_ok(&["add", "one two two"]);

    let words = sandbox.run_ok(&["stats", "words"]);
    assert_eq!(words.trim_end(), "two\t2");
}

#[test]
fn test_delete_by_prefix() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["add", "same words"]);
    sandbox.run_ok(&["add", "same words"]);

    let listed = sandbox.run_ok(&["list"]);
    let id = first_id(&listed);
    let deleted = sandbox.run_ok(&["delete", &id[..13], "--yes"]);
    assert!(deleted.contains(&id));

    let remaining = sandbox.run_ok(&["list"]);
    assert_eq!(remaining.lines().count(), 1);
    assert_ne!(first_id(&remaining), id);
}

#[test]
fn test_delete_missing_leaves_journal_unchanged() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["add", "keep"]);
    let before = std::fs::read(sandbox.default_journal()).expect("read journal");

    let output = sandbox.run(&["delete", "00000000-0000-4000-8000-000000000000", "--yes"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        std::fs::read(sandbox.default_journal()).expect("read journal"),
        before
    );
}

#[test]
fn test_delete_requires_confirmation_when_not_interactive() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["add", "keep"]);
    let id = first_id(&sandbox.run_ok(&["list"]));

    let output = sandbox.run(&["delete", &id]);
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(sandbox.run_ok(&["list"]).lines().count(), 1);
}

#[test]
fn test_corrupted_journal_is_fatal() {
    let sandbox = Sandbox::new();
    let path = sandbox.default_journal();
    std::fs::create_dir_all(path.parent().expect("parent")).expect("data dir");
    std::fs::write(&path, "{ definitely not json").expect("write");

    let output = sandbox.run(&["add", "should not land"]);
    assert_eq!(output.status.code(), Some(6));
    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "{ definitely not json"
    );
}

#[test]
fn test_init_records_journal_path() {
    let sandbox = Sandbox::new();
    let custom = sandbox.dir.path().join("elsewhere").join("mine.json");
    let custom_str = custom.to_string_lossy().to_string();

    sandbox.run_ok(&["init", "--path", &custom_str]);
    let again = sandbox.run(&["init", "--path", &custom_str]);
    assert_eq!(again.status.code(), Some(4));

    sandbox.run_ok(&["add", "in the custom place"]);
    assert!(custom.exists());
    assert!(!sandbox.default_journal().exists());
}

#[test]
fn test_journal_flag_overrides_default() {
    let sandbox = Sandbox::new();
    let explicit = sandbox.dir.path().join("flag.json");
    let explicit_str = explicit.to_string_lossy().to_string();

    sandbox.run_ok(&["--journal", &explicit_str, "add", "flagged"]);
    assert!(explicit.exists());
    assert!(is_journal_document(&explicit));
}

#[test]
fn test_list_json() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["add", "first"]);
    sandbox.run_ok(&["add", "second"]);

    let out = sandbox.run_ok(&["list", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    let texts: Vec<&str> = value
        .as_array()
        .expect("array")
        .iter()
        .map(|entry| entry["text"].as_str().expect("text"))
        .collect();
    assert_eq!(texts, vec!["first", "second"]);
}

fn is_journal_document(path: &Path) -> bool {
    let raw = std::fs::read_to_string(path).expect("read journal");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("journal json");
    value["format_version"] == "1" && value["entries"].is_array()
}
