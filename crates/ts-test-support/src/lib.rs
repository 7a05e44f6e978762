mod host;
mod score;
mod view;

pub use host::FakeHost;
pub use score::{FakeScore, ScoreElement};
pub use view::{FakePage, FakeView, PageMark};

use tempfile::TempDir;

pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

pub fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

pub fn script_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("ts-script-")
        .tempdir()
        .expect("temp script dir should be created")
}
