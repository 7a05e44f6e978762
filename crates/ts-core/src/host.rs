use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::{HostError, Point, Rect, RenderParams, ScoreDiff};

pub trait ScoreHost {
    type Score;
    type View: ScoreView;

    fn current_score(&self) -> Option<&Self::Score>;
    fn current_view(&self) -> Option<&Self::View>;
    fn read_score(&self, path: &Path) -> Result<Self::Score, HostError>;
    fn save_score(&self, score: &Self::Score, path: &Path) -> Result<(), HostError>;
    fn diff_scores(&self, current: &Self::Score, reference: &Self::Score, text_only: bool)
        -> ScoreDiff;

    fn score_file_extension(&self) -> &str {
        "mscx"
    }
}

pub trait ScoreView {
    fn canvas_viewport(&self) -> Rect;
    fn page_at(&self, point: Point) -> Option<usize>;
    fn page_bounds(&self, page_index: usize) -> Option<Rect>;
    fn render_rect(&self, rect: Rect, params: &RenderParams) -> Result<DynamicImage, HostError>;
}

pub trait PathResolver {
    fn absolute_path(&self, path: &str) -> PathBuf;
    fn relative_paths(&self) -> bool;
}
