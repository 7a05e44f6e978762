use std::fmt;

use ts_core::{ScoreHost, TestScriptError};

use crate::{ImageTestEntry, ScoreTestEntry, ScriptContext};

pub const SCRIPT_TEST: &str = "test";
pub const TEST_SCORE: &str = "score";
pub const TEST_IMAGE: &str = "image";

pub type ParseFn = fn(&[String]) -> Result<ScriptEntry, TestScriptError>;

pub const TEST_TYPES: &[(&str, ParseFn)] = &[
    (TEST_SCORE, parse_entry::<ScoreTestEntry>),
    (TEST_IMAGE, parse_entry::<ImageTestEntry>),
];

pub trait TestEntry: Sized + Into<ScriptEntry> {
    const KEYWORD: &'static str;

    fn parse(tokens: &[String]) -> Result<Self, TestScriptError>;
    fn serialize(&self) -> String;
    fn check<H: ScoreHost>(&self, ctx: &ScriptContext<'_, H>) -> Result<(), TestScriptError>;
    fn record<H: ScoreHost>(
        ctx: &ScriptContext<'_, H>,
        file_name: &str,
    ) -> Result<Self, TestScriptError>;

    fn from_context<H: ScoreHost>(
        ctx: &mut ScriptContext<'_, H>,
        file_name: Option<&str>,
    ) -> Option<Self> {
        match Self::record(ctx, file_name.unwrap_or_default()) {
            Ok(entry) => {
                tracing::info!(entry = %entry.serialize(), "recorded test entry");
                Some(entry)
            }
            Err(error) => {
                tracing::warn!(code = error.code(), "{}", error);
                ctx.exec_log().line(&error);
                None
            }
        }
    }
}

fn parse_entry<T: TestEntry>(tokens: &[String]) -> Result<ScriptEntry, TestScriptError> {
    T::parse(tokens).map(Into::into)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEntry {
    ScoreTest(ScoreTestEntry),
    ImageTest(ImageTestEntry),
}

impl ScriptEntry {
    // tokens[0] is taken to be the `test` marker.
    pub fn try_deserialize(tokens: &[String]) -> Result<Self, TestScriptError> {
        if tokens.len() < 2 {
            return Err(TestScriptError::TokenCount {
                statement: SCRIPT_TEST,
                count: tokens.len(),
            });
        }

        let keyword = tokens[1].as_str();
        let (_, parse) = TEST_TYPES
            .iter()
            .find(|(name, _)| *name == keyword)
            .ok_or_else(|| TestScriptError::UnsupportedTestType {
                keyword: keyword.to_string(),
            })?;
        parse(tokens)
    }

    pub fn deserialize(tokens: &[String]) -> Option<Self> {
        match Self::try_deserialize(tokens) {
            Ok(entry) => Some(entry),
            Err(error @ TestScriptError::TokenCount { .. }) => {
                tracing::debug!(code = error.code(), "{}", error);
                None
            }
            Err(error) => {
                tracing::warn!(code = error.code(), "{}", error);
                None
            }
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::ScoreTest(_) => ScoreTestEntry::KEYWORD,
            Self::ImageTest(_) => ImageTestEntry::KEYWORD,
        }
    }

    pub fn serialize(&self) -> String {
        match self {
            Self::ScoreTest(entry) => entry.serialize(),
            Self::ImageTest(entry) => entry.serialize(),
        }
    }

    pub fn check<H: ScoreHost>(&self, ctx: &ScriptContext<'_, H>) -> Result<(), TestScriptError> {
        match self {
            Self::ScoreTest(entry) => entry.check(ctx),
            Self::ImageTest(entry) => entry.check(ctx),
        }
    }

    pub fn execute<H: ScoreHost>(&self, ctx: &mut ScriptContext<'_, H>) -> bool {
        match self.check(ctx) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(code = error.code(), statement = %self, "{}", error);
                ctx.exec_log().line(&error);
                false
            }
        }
    }
}

impl fmt::Display for ScriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<ScoreTestEntry> for ScriptEntry {
    fn from(entry: ScoreTestEntry) -> Self {
        Self::ScoreTest(entry)
    }
}

impl From<ImageTestEntry> for ScriptEntry {
    fn from(entry: ImageTestEntry) -> Self {
        Self::ImageTest(entry)
    }
}
