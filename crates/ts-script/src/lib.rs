mod context;
mod entry;
pub mod raster;
mod settings;

pub use context::{ExecLog, ScriptContext};
pub use entry::{
    ParseFn, ScriptEntry, TestEntry, SCRIPT_TEST, TEST_IMAGE, TEST_SCORE, TEST_TYPES,
};
pub use image_test::{ImageTestEntry, IMAGE_TEST_PAGE};
pub use score_test::ScoreTestEntry;
pub use settings::{load_settings, ScriptDir, ScriptSettings};
pub use ts_core::{
    HostError, PathResolver, Point, Rect, RenderParams, ScoreDiff, ScoreHost, ScoreView,
    TestScriptError,
};
