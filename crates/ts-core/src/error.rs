use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct HostError {
    pub code: String,
    pub message: String,
}

impl HostError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TestScriptError {
    #[error("{statement}: unexpected number of tokens: {count}")]
    TokenCount {
        statement: &'static str,
        count: usize,
    },
    #[error("test: unsupported type: {keyword}")]
    UnsupportedTestType { keyword: String },
    #[error("unknown image test type: {subtype}")]
    UnknownImageTestType { subtype: String },
    #[error("test image: \"{token}\" is not a valid page index")]
    InvalidPageIndex { token: String },
    #[error("{statement}: reference path is empty")]
    EmptyRefPath { statement: &'static str },
    #[error("score test: no current score")]
    NoCurrentScore,
    #[error("image test: no score view")]
    NoScoreView,
    #[error("score test: could not load reference score {}: {source}", .path.display())]
    ReferenceScoreLoad { path: PathBuf, source: HostError },
    #[error("image test: could not load reference image {}: {source}", .path.display())]
    ReferenceImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("score test: fail\n{raw_diff}")]
    ScoreMismatch { raw_diff: String },
    #[error("image test: page {page} differs from reference image {}", .path.display())]
    ImageMismatch { page: usize, path: PathBuf },
    #[error("image test: cannot record without a file name")]
    MissingFileName,
    #[error("image test: page {page} does not exist")]
    PageOutOfRange { page: usize },
    #[error("image test: failed to render page {page}: {source}")]
    Render { page: usize, source: HostError },
    #[error("score test: failed to save score {}: {source}", .path.display())]
    SaveScore { path: PathBuf, source: HostError },
    #[error("image test: failed to save image {}: {source}", .path.display())]
    SaveImage {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Failed to read settings {}: {source}", .path.display())]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse settings {}: {source}", .path.display())]
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl TestScriptError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TokenCount { .. } => "TEST_TOKEN_COUNT",
            Self::UnsupportedTestType { .. } => "TEST_UNSUPPORTED_TYPE",
            Self::UnknownImageTestType { .. } => "TEST_IMAGE_UNKNOWN_TYPE",
            Self::InvalidPageIndex { .. } => "TEST_IMAGE_PAGE_INDEX",
            Self::EmptyRefPath { .. } => "TEST_EMPTY_REF_PATH",
            Self::NoCurrentScore => "TEST_NO_CURRENT_SCORE",
            Self::NoScoreView => "TEST_NO_SCORE_VIEW",
            Self::ReferenceScoreLoad { .. } => "TEST_REFERENCE_SCORE_LOAD",
            Self::ReferenceImageLoad { .. } => "TEST_REFERENCE_IMAGE_LOAD",
            Self::ScoreMismatch { .. } => "TEST_SCORE_MISMATCH",
            Self::ImageMismatch { .. } => "TEST_IMAGE_MISMATCH",
            Self::MissingFileName => "TEST_RECORD_FILE_NAME",
            Self::PageOutOfRange { .. } => "TEST_IMAGE_PAGE_RANGE",
            Self::Render { .. } => "TEST_IMAGE_RENDER",
            Self::SaveScore { .. } => "TEST_RECORD_SAVE_SCORE",
            Self::SaveImage { .. } => "TEST_RECORD_SAVE_IMAGE",
            Self::SettingsRead { .. } => "TEST_SETTINGS_READ",
            Self::SettingsParse { .. } => "TEST_SETTINGS_PARSE",
        }
    }

    pub fn is_malformed_statement(&self) -> bool {
        matches!(
            self,
            Self::TokenCount { .. }
                | Self::UnsupportedTestType { .. }
                | Self::UnknownImageTestType { .. }
                | Self::InvalidPageIndex { .. }
                | Self::EmptyRefPath { .. }
        )
    }
}
