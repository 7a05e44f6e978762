use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_core::{HostError, Point, ScoreDiff};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreElement {
    pub kind: String,
    pub text: String,
    #[serde(default)]
    pub position: Point,
}

impl ScoreElement {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            position: Point::default(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    fn same_content(&self, other: &ScoreElement, text_only: bool) -> bool {
        self.kind == other.kind
            && self.text == other.text
            && (text_only || self.position == other.position)
    }

    fn describe(&self, text_only: bool) -> String {
        if text_only {
            format!("{} {}", self.kind, self.text)
        } else {
            format!(
                "{} {} @({}, {})",
                self.kind, self.text, self.position.x, self.position.y
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FakeScore {
    pub title: String,
    #[serde(default)]
    pub elements: Vec<ScoreElement>,
}

impl FakeScore {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn with(mut self, element: ScoreElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn read(path: &Path) -> Result<Self, HostError> {
        let raw = fs::read_to_string(path).map_err(|error| {
            HostError::new("SCORE_READ", format!("{}: {}", path.display(), error))
        })?;
        let score: FakeScore = serde_json::from_str(&raw).map_err(|error| {
            HostError::new("SCORE_PARSE", format!("{}: {}", path.display(), error))
        })?;
        if let Some(index) = score.elements.iter().position(|e| e.kind.is_empty()) {
            return Err(HostError::new(
                "SCORE_STRUCTURE",
                format!("element {} has no kind", index),
            ));
        }
        Ok(score)
    }

    pub fn write(&self, path: &Path) -> Result<(), HostError> {
        let payload = serde_json::to_string_pretty(self)
            .map_err(|error| HostError::new("SCORE_WRITE", error.to_string()))?;
        fs::write(path, payload).map_err(|error| {
            HostError::new("SCORE_WRITE", format!("{}: {}", path.display(), error))
        })
    }

    // `-` lines come from the reference, `+` lines from the current score.
    pub fn diff(&self, reference: &FakeScore, text_only: bool) -> ScoreDiff {
        let mut raw = String::new();
        if self.title != reference.title {
            raw.push_str(&format!("- title {}\n+ title {}\n", reference.title, self.title));
        }

        let len = self.elements.len().max(reference.elements.len());
        for index in 0..len {
            let current = self.elements.get(index);
            let expected = reference.elements.get(index);
            if let (Some(current), Some(expected)) = (current, expected) {
                if current.same_content(expected, text_only) {
                    continue;
                }
            }
            if let Some(expected) = expected {
                raw.push_str(&format!("- [{}] {}\n", index, expected.describe(text_only)));
            }
            if let Some(current) = current {
                raw.push_str(&format!("+ [{}] {}\n", index, current.describe(text_only)));
            }
        }

        if raw.is_empty() {
            ScoreDiff::equal()
        } else {
            ScoreDiff::different(raw)
        }
    }
}
