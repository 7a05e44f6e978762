use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right()) / 2.0,
            (self.top + self.bottom()) / 2.0,
        )
    }

    // Half-open: the right and bottom edges belong to the next rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreDiff {
    pub equal: bool,
    pub raw_diff: String,
}

impl ScoreDiff {
    pub fn equal() -> Self {
        Self {
            equal: true,
            raw_diff: String::new(),
        }
    }

    pub fn different(raw_diff: impl Into<String>) -> Self {
        Self {
            equal: false,
            raw_diff: raw_diff.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderParams {
    pub dpi: u32,
    pub transparent: bool,
    pub print_mode: bool,
}

impl RenderParams {
    pub const IMAGE_TEST: RenderParams = RenderParams {
        dpi: 130,
        transparent: true,
        print_mode: false,
    };
}
