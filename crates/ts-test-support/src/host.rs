use std::path::Path;

use ts_core::{HostError, ScoreDiff, ScoreHost};

use crate::{FakeScore, FakeView};

#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    pub score: Option<FakeScore>,
    pub view: Option<FakeView>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, score: FakeScore) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_view(mut self, view: FakeView) -> Self {
        self.view = Some(view);
        self
    }
}

impl ScoreHost for FakeHost {
    type Score = FakeScore;
    type View = FakeView;

    fn current_score(&self) -> Option<&FakeScore> {
        self.score.as_ref()
    }

    fn current_view(&self) -> Option<&FakeView> {
        self.view.as_ref()
    }

    fn read_score(&self, path: &Path) -> Result<FakeScore, HostError> {
        FakeScore::read(path)
    }

    fn save_score(&self, score: &FakeScore, path: &Path) -> Result<(), HostError> {
        score.write(path)
    }

    fn diff_scores(
        &self,
        current: &FakeScore,
        reference: &FakeScore,
        text_only: bool,
    ) -> ScoreDiff {
        current.diff(reference, text_only)
    }
}
