/// Braille Unicode canvas for high-resolution terminal graphics.
/// Each character cell represents a 2x4 pixel grid (8 dots),
/// Unicode Braille patterns U+2800 to U+28FF.
pub struct BrailleCanvas {
    width: usize,  // Characters
    height: usize, // Characters
    cells: Vec<u8>, // Bit pattern per char, row-major
}

/// Dot bit for pixel (x, y) within a cell, indexed `[y % 4][x % 2]`:
/// ```text
/// (0,0) (1,0)   bits: 0x01 0x08
/// (0,1) (1,1)   bits: 0x02 0x10
/// (0,2) (1,2)   bits: 0x04 0x20
/// (0,3) (1,3)   bits: 0x40 0x80
/// ```
const DOT_BITS: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

impl BrailleCanvas {
    /// Create a new canvas with the given character dimensions.
    /// Effective pixel resolution: width*2 x height*4
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0u8; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Set a pixel at the given coordinates. Out-of-bounds is a no-op.
    pub fn set_pixel(&mut self, x: usize, y: usize) {
        let cx = x / 2;
        let cy = y / 4;
        if cx >= self.width || cy >= self.height {
            return;
        }
        self.cells[cy * self.width + cx] |= DOT_BITS[y % 4][x % 2];
    }

    /// Set a pixel using signed coordinates (ignores negative values)
    pub fn set_pixel_signed(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as usize, y as usize);
        }
    }

    /// Set the inclusive pixel run `x0..=x1` on pixel row `y`. The bit pair
    /// for the row is fixed, so only the cell column varies along the run.
    pub fn fill_span(&mut self, x0: usize, x1: usize, y: usize) {
        let cy = y / 4;
        if cy >= self.height {
            return;
        }
        let bits = DOT_BITS[y % 4];
        let row = cy * self.width;
        for x in x0..=x1 {
            let cx = x / 2;
            if cx >= self.width {
                break;
            }
            self.cells[row + cx] |= bits[x % 2];
        }
    }

    /// Non-blank cells as (column, row, braille char), for blitting one
    /// canvas layer into a larger buffer under a single colour.
    pub fn iter_set_cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, &bits)| {
            if bits == 0 {
                return None;
            }
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            Some((i % self.width, i / self.width, ch))
        })
    }

    /// Convert the canvas to a string of Braille characters
    #[cfg(test)]
    pub fn to_string(&self) -> String {
        self.cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|&b| char::from_u32(0x2800 + b as u32).unwrap_or(' '))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pixel_sets_one_dot() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.set_pixel(0, 0);
        assert_eq!(canvas.to_string(), "⠁"); // U+2801
    }

    #[test]
    fn filled_cell_is_solid() {
        let mut canvas = BrailleCanvas::new(1, 1);
        for y in 0..4 {
            canvas.fill_span(0, 1, y);
        }
        assert_eq!(canvas.to_string(), "⣿"); // U+28FF (all dots)
    }

    #[test]
    fn span_crosses_a_cell_boundary() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.fill_span(1, 2, 0);
        // First char: dot (1,0) = 0x08. Second char: dot (0,0) = 0x01.
        assert_eq!(canvas.to_string(), "⠈⠁");
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set_pixel(100, 100);
        canvas.set_pixel_signed(-1, 3);
        canvas.fill_span(3, 40, 1);
        // Only the in-range prefix of the span lands: dot (1,1) of cell 1.
        assert_eq!(canvas.to_string(), "⠀⠐\n⠀⠀");
    }

    #[test]
    fn iterator_skips_blank_cells() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set_pixel(3, 7);
        let cells: Vec<_> = canvas.iter_set_cells().collect();
        assert_eq!(cells, vec![(1, 1, '⢀')]);
    }
}
