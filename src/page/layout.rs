use crate::constants::*;
use crate::visibility::Span;

/// Columns and rows for `count` cards, collapsing on narrow windows.
pub fn grid(count: usize, width: f32, columns: usize, mobile_columns: usize) -> (usize, usize) {
    let columns = if width < MOBILE_BREAKPOINT { mobile_columns } else { columns };
    let columns = columns.min(count).max(1);
    (columns, count.div_ceil(columns))
}

// Sections stacked top to bottom under the fixed header, in page coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub sections: Vec<Span>,
    pub total_height: f32,
}

impl Layout {
    pub fn new() -> Self {
        Self { sections: Vec::new(), total_height: HEADER_HEIGHT }
    }

    pub fn compute_layout(&mut self, heights: impl IntoIterator<Item = f32>) {
        self.sections.clear();
        let mut top = HEADER_HEIGHT;
        for height in heights {
            self.sections.push(Span::new(top, height));
            top += height;
        }
        self.total_height = top;
    }

    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.total_height - viewport_height).max(0.0)
    }

    /// Scroll position that puts section `index` right under the header.
    pub fn scroll_to(&self, index: usize, viewport_height: f32) -> f32 {
        let top = self.sections.get(index).map_or(0.0, |span| span.top - HEADER_HEIGHT);
        top.clamp(0.0, self.max_scroll(viewport_height))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}
