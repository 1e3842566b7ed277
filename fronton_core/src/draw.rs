//! Drawing primitives supplied by the host
//!
//! The game only ever draws filled circles, filled rectangles and debug text.
//! [`DrawList`] records those calls so a host can batch them (the web client
//! flushes shapes to the GPU and text to a DOM overlay) and tests can inspect
//! exactly what a frame drew.

use glam::Vec2;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized `[r, g, b, a]` for shaders
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Render target the game draws onto
pub trait Surface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// `origin` is the top-left corner
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Text anchored at the top-left of the screen; `\n` starts a new line
    fn debug_print(&mut self, text: &str);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    Text(String),
}

/// Surface that records draw calls for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Rect {
                origin,
                size,
                color,
            } => Some((*origin, *size, *color)),
            _ => None,
        })
    }

    /// All text blocks layered from the top-left, later blocks on top.
    ///
    /// Blank characters never erase what an earlier block printed, so a block
    /// starting with `"\n\n"` lands on the third line below existing text.
    pub fn debug_text(&self) -> String {
        let mut rows: Vec<Vec<char>> = Vec::new();
        for cmd in &self.commands {
            let DrawCommand::Text(text) = cmd else {
                continue;
            };
            for (row, line) in text.split('\n').enumerate() {
                if rows.len() <= row {
                    rows.resize(row + 1, Vec::new());
                }
                let cells = &mut rows[row];
                for (col, ch) in line.chars().enumerate() {
                    if cells.len() <= col {
                        cells.resize(col + 1, ' ');
                    }
                    if ch != ' ' {
                        cells[col] = ch;
                    }
                }
            }
        }

        let mut lines: Vec<String> = rows
            .into_iter()
            .map(|cells| cells.into_iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

impl Surface for DrawList {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn debug_print(&mut self, text: &str) {
        self.commands.push(DrawCommand::Text(text.to_string()));
    }
}
