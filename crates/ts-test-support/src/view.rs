use std::cell::Cell;

use image::{DynamicImage, Rgba, RgbaImage};
use ts_core::{HostError, Point, Rect, RenderParams, ScoreView};

const POINTS_PER_INCH: f64 = 72.0;
const PAGE_GAP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMark {
    pub x: u32,
    pub y: u32,
    pub color: [u8; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakePage {
    pub bounds: Rect,
    pub marks: Vec<PageMark>,
}

#[derive(Debug, Clone)]
pub struct FakeView {
    pub viewport: Rect,
    pub pages: Vec<FakePage>,
    last_render: Cell<Option<(Rect, RenderParams)>>,
}

impl FakeView {
    // Pages laid out left to right; the viewport starts over the first page.
    pub fn with_pages(count: usize, page_width: f64, page_height: f64) -> Self {
        let pages = (0..count)
            .map(|index| FakePage {
                bounds: Rect::new(
                    index as f64 * (page_width + PAGE_GAP),
                    0.0,
                    page_width,
                    page_height,
                ),
                marks: Vec::new(),
            })
            .collect();
        Self {
            viewport: Rect::new(0.0, 0.0, page_width, page_height),
            pages,
            last_render: Cell::new(None),
        }
    }

    pub fn scroll_to(mut self, viewport: Rect) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_mark(mut self, page_index: usize, x: u32, y: u32, color: [u8; 4]) -> Self {
        if let Some(page) = self.pages.get_mut(page_index) {
            page.marks.push(PageMark { x, y, color });
        }
        self
    }

    pub fn last_render(&self) -> Option<(Rect, RenderParams)> {
        self.last_render.get()
    }
}

impl ScoreView for FakeView {
    fn canvas_viewport(&self) -> Rect {
        self.viewport
    }

    fn page_at(&self, point: Point) -> Option<usize> {
        self.pages.iter().position(|page| page.bounds.contains(point))
    }

    fn page_bounds(&self, page_index: usize) -> Option<Rect> {
        self.pages.get(page_index).map(|page| page.bounds)
    }

    fn render_rect(&self, rect: Rect, params: &RenderParams) -> Result<DynamicImage, HostError> {
        let (index, page) = self
            .pages
            .iter()
            .enumerate()
            .find(|(_, page)| page.bounds == rect)
            .ok_or_else(|| HostError::new("RENDER_RECT", format!("no page at {:?}", rect)))?;
        self.last_render.set(Some((rect, *params)));

        let scale = f64::from(params.dpi) / POINTS_PER_INCH;
        let width = (rect.width * scale).round() as u32;
        let height = (rect.height * scale).round() as u32;
        let background = if params.transparent {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([255, 255, 255, 255])
        };

        let mut image = RgbaImage::from_pixel(width, height, background);
        // One staff row per page so different pages never render alike.
        let staff_y = index as u32 + 1;
        if staff_y < height {
            for x in 0..width {
                image.put_pixel(x, staff_y, Rgba([0, 0, 0, 255]));
            }
        }
        for mark in &page.marks {
            if mark.x < width && mark.y < height {
                image.put_pixel(mark.x, mark.y, Rgba(mark.color));
            }
        }
        Ok(DynamicImage::ImageRgba8(image))
    }
}
