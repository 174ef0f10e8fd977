// Vitrine STORY-004: Cell surface renderer
//
// Rasterizes a scene-space draw list onto a cols x rows character grid and
// serializes the grid to one ANSI string per frame. Terminal cells have no
// real alpha, so opacity becomes glyph choice (links) and channel
// intensity (colors).

use ansi_term::Colour;

use crate::animation::{SceneFrame, Shape};

/// Glyph ramp for link shading, solid to faint
const SHADE: [char; 4] = ['█', '▓', '▒', '░'];

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: (u8, u8, u8),
}

const EMPTY: Cell = Cell {
    glyph: ' ',
    color: (0, 0, 0),
};

/// Character-grid drawing surface
pub struct Surface {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![EMPTY; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Resize the grid, dropping all content
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![EMPTY; cols * rows];
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Cell at (col, row); None outside the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Put a glyph, alpha scaling the color channels. Out-of-grid plots
    /// are ignored.
    fn plot(&mut self, col: i32, row: i32, glyph: char, color: (u8, u8, u8), alpha: f32) {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return;
        }
        let idx = row as usize * self.cols + col as usize;
        self.cells[idx] = Cell {
            glyph,
            color: scale_color(color, alpha),
        };
    }

    /// Clear the grid and paint a frame onto it, in shape order
    pub fn paint(&mut self, frame: &SceneFrame) {
        self.clear();

        // Scene units per cell, on each axis
        let sx = self.cols as f32 / frame.width.max(1.0);
        let sy = self.rows as f32 / frame.height.max(1.0);

        for shape in &frame.shapes {
            match *shape {
                Shape::Dot {
                    x,
                    y,
                    radius,
                    alpha,
                    color,
                } => {
                    let glyph = dot_glyph(radius);
                    self.plot((x * sx) as i32, (y * sy) as i32, glyph, color, alpha);
                }
                Shape::Link {
                    x1,
                    y1,
                    x2,
                    y2,
                    alpha,
                    color,
                } => {
                    self.stroke(
                        (x1 * sx, y1 * sy),
                        (x2 * sx, y2 * sy),
                        shade_glyph(alpha),
                        color,
                        alpha,
                    );
                }
            }
        }
    }

    /// Walk a segment in cell space, plotting one glyph per step
    fn stroke(&mut self, from: (f32, f32), to: (f32, f32), glyph: char, color: (u8, u8, u8), alpha: f32) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0);

        let mut step = 0.0;
        while step <= steps {
            let t = step / steps;
            let col = (from.0 + dx * t) as i32;
            let row = (from.1 + dy * t) as i32;
            self.plot(col, row, glyph, color, alpha);
            step += 1.0;
        }
    }

    /// Serialize the grid to an ANSI string, rows separated by newlines
    pub fn to_ansi(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 4);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = self.cells[row * self.cols + col];
                if cell.glyph == ' ' {
                    out.push(' ');
                } else {
                    let (r, g, b) = cell.color;
                    out.push_str(&Colour::RGB(r, g, b).paint(cell.glyph.to_string()).to_string());
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Dot glyph by particle radius
fn dot_glyph(radius: f32) -> char {
    if radius >= 2.5 {
        '●'
    } else if radius >= 1.5 {
        '•'
    } else {
        '·'
    }
}

/// Shade-ramp glyph by link alpha
fn shade_glyph(alpha: f32) -> char {
    if alpha >= 0.75 {
        SHADE[0]
    } else if alpha >= 0.5 {
        SHADE[1]
    } else if alpha >= 0.25 {
        SHADE[2]
    } else {
        SHADE[3]
    }
}

fn scale_color((r, g, b): (u8, u8, u8), alpha: f32) -> (u8, u8, u8) {
    let a = alpha.clamp(0.0, 1.0);
    (
        (r as f32 * a) as u8,
        (g as f32 * a) as u8,
        (b as f32 * a) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::SceneFrame;

    fn dot(x: f32, y: f32, radius: f32, alpha: f32) -> Shape {
        Shape::Dot {
            x,
            y,
            radius,
            alpha,
            color: (0, 255, 204),
        }
    }

    #[test]
    fn test_dot_lands_in_scaled_cell() {
        let mut surface = Surface::new(10, 10);
        let frame = SceneFrame::new(100.0, 100.0, vec![dot(55.0, 25.0, 2.0, 1.0)]);
        surface.paint(&frame);

        let cell = surface.cell(5, 2).unwrap();
        assert_eq!(cell.glyph, '•');
        assert_eq!(cell.color, (0, 255, 204));
        // Neighboring cell untouched
        assert_eq!(surface.cell(6, 2).unwrap().glyph, ' ');
    }

    #[test]
    fn test_alpha_scales_channels() {
        let mut surface = Surface::new(4, 4);
        let frame = SceneFrame::new(4.0, 4.0, vec![dot(0.5, 0.5, 3.0, 0.5)]);
        surface.paint(&frame);

        let cell = surface.cell(0, 0).unwrap();
        assert_eq!(cell.glyph, '●');
        assert_eq!(cell.color, (0, 127, 102));
    }

    #[test]
    fn test_link_touches_both_endpoints() {
        let mut surface = Surface::new(10, 3);
        let frame = SceneFrame::new(
            10.0,
            3.0,
            vec![Shape::Link {
                x1: 0.5,
                y1: 1.5,
                x2: 8.5,
                y2: 1.5,
                alpha: 1.0,
                color: (255, 0, 255),
            }],
        );
        surface.paint(&frame);

        assert_eq!(surface.cell(0, 1).unwrap().glyph, '█');
        assert_eq!(surface.cell(8, 1).unwrap().glyph, '█');
        // And the span in between is filled
        for col in 1..8 {
            assert_eq!(surface.cell(col, 1).unwrap().glyph, '█');
        }
    }

    #[test]
    fn test_faint_links_use_the_light_ramp() {
        assert_eq!(shade_glyph(0.9), '█');
        assert_eq!(shade_glyph(0.6), '▓');
        assert_eq!(shade_glyph(0.3), '▒');
        assert_eq!(shade_glyph(0.1), '░');
    }

    #[test]
    fn test_dots_overwrite_links() {
        let mut surface = Surface::new(5, 5);
        let frame = SceneFrame::new(
            5.0,
            5.0,
            vec![
                Shape::Link {
                    x1: 0.5,
                    y1: 2.5,
                    x2: 4.5,
                    y2: 2.5,
                    alpha: 1.0,
                    color: (255, 0, 255),
                },
                dot(2.5, 2.5, 3.0, 1.0),
            ],
        );
        surface.paint(&frame);
        assert_eq!(surface.cell(2, 2).unwrap().glyph, '●');
    }

    #[test]
    fn test_out_of_scene_shapes_are_ignored() {
        let mut surface = Surface::new(4, 4);
        let frame = SceneFrame::new(4.0, 4.0, vec![dot(-3.0, 9.0, 2.0, 1.0)]);
        surface.paint(&frame);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(surface.cell(col, row).unwrap().glyph, ' ');
            }
        }
    }

    #[test]
    fn test_to_ansi_has_one_line_per_row() {
        let mut surface = Surface::new(6, 3);
        surface.paint(&SceneFrame::new(6.0, 3.0, Vec::new()));
        let text = surface.to_ansi();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|l| l.chars().count() == 6));
    }

    #[test]
    fn test_paint_clears_previous_frame() {
        let mut surface = Surface::new(4, 4);
        surface.paint(&SceneFrame::new(4.0, 4.0, vec![dot(1.5, 1.5, 3.0, 1.0)]));
        assert_eq!(surface.cell(1, 1).unwrap().glyph, '●');

        surface.paint(&SceneFrame::new(4.0, 4.0, Vec::new()));
        assert_eq!(surface.cell(1, 1).unwrap().glyph, ' ');
    }

    #[test]
    fn test_resize_drops_content() {
        let mut surface = Surface::new(4, 4);
        surface.paint(&SceneFrame::new(4.0, 4.0, vec![dot(1.5, 1.5, 3.0, 1.0)]));
        surface.resize(8, 2);
        assert_eq!(surface.cols(), 8);
        assert_eq!(surface.rows(), 2);
        assert!(surface.cell(1, 1).map(|c| c.glyph) == Some(' '));
    }
}
