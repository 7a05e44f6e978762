use std::fmt::Display;
use std::path::PathBuf;

use ts_core::{PathResolver, ScoreHost};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecLog {
    text: String,
}

impl ExecLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, message: impl Display) {
        self.text.push_str(&message.to_string());
        self.text.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

pub struct ScriptContext<'a, H: ScoreHost> {
    host: &'a H,
    paths: &'a dyn PathResolver,
    exec_log: &'a mut ExecLog,
}

impl<'a, H: ScoreHost> ScriptContext<'a, H> {
    pub fn new(host: &'a H, paths: &'a dyn PathResolver, exec_log: &'a mut ExecLog) -> Self {
        Self {
            host,
            paths,
            exec_log,
        }
    }

    pub fn host(&self) -> &'a H {
        self.host
    }

    pub fn current_score(&self) -> Option<&'a H::Score> {
        self.host.current_score()
    }

    pub fn current_view(&self) -> Option<&'a H::View> {
        self.host.current_view()
    }

    pub fn absolute_file_path(&self, path: &str) -> PathBuf {
        self.paths.absolute_path(path)
    }

    pub fn relative_paths(&self) -> bool {
        self.paths.relative_paths()
    }

    pub fn exec_log(&mut self) -> &mut ExecLog {
        self.exec_log
    }

    // Stored form of a freshly recorded reference: the name as given, or its absolute path.
    pub(crate) fn stored_path(&self, file_name: &str, file_path: &std::path::Path) -> String {
        if self.relative_paths() {
            file_name.to_string()
        } else {
            file_path.to_string_lossy().into_owned()
        }
    }
}
