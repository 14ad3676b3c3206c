use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Greedy first-fit line wrapping for variable-width chips (tags)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowLayout {
    pub max_width: f64,
    /// Horizontal gap between items on a line
    pub item_spacing: f64,
    /// Vertical gap between lines
    pub line_spacing: f64,
}

/// Result of a layout pass: one origin per item, in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowPlacement {
    pub origins: Vec<Point>,
    pub size: Size,
    pub line_count: usize,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl FlowLayout {
    pub fn new(max_width: f64, item_spacing: f64, line_spacing: f64) -> Self {
        Self {
            max_width,
            item_spacing,
            line_spacing,
        }
    }

    /// Place items left to right, starting a new line whenever the next item
    /// would not fit in what is left of the current one.
    /// An item wider than `max_width` still gets placed, alone on its line.
    pub fn place(&self, items: &[Size]) -> FlowPlacement {
        let mut origins = Vec::with_capacity(items.len());

        let mut x = 0.0_f64;
        let mut y = 0.0_f64;
        let mut line_height = 0.0_f64;
        let mut line_items = 0usize;
        let mut widest = 0.0_f64;
        let mut line_count = 0usize;

        for item in items {
            let needed = if line_items == 0 {
                item.width
            } else {
                self.item_spacing + item.width
            };

            if line_items > 0 && x + needed > self.max_width {
                y += line_height + self.line_spacing;
                x = 0.0;
                line_height = 0.0;
                line_items = 0;
            }

            if line_items == 0 {
                line_count += 1;
            } else {
                x += self.item_spacing;
            }

            origins.push(Point { x, y });
            x += item.width;
            line_height = line_height.max(item.height);
            widest = widest.max(x);
            line_items += 1;
        }

        let height = if line_count == 0 { 0.0 } else { y + line_height };

        FlowPlacement {
            origins,
            size: Size::new(widest, height),
            line_count,
        }
    }
}
