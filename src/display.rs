use crate::definitions::display;

/// How sprite pixels crossing the screen border are treated.
///
/// The sprite origin always wraps around the screen, this only decides
/// about the pixels that run over the right or lower edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteEdge {
    /// Pixels past the edge are dropped.
    Clip,
    /// Pixels past the edge reappear on the opposite side.
    Wrap,
}

impl Default for SpriteEdge {
    fn default() -> Self {
        SpriteEdge::Clip
    }
}

/// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
/// `(64 x 32)`. The pixels are stored row by row, `true` being a set pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    pixels: Box<[[bool; display::WIDTH]; display::HEIGHT]>,
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Display {
    pub fn new() -> Self {
        Self {
            pixels: Box::new([[false; display::WIDTH]; display::HEIGHT]),
        }
    }

    /// Unsets every pixel.
    pub fn clear(&mut self) {
        for row in self.pixels.iter_mut() {
            row.fill(false);
        }
    }

    /// XORs the sprite `rows` onto the screen with the upper left corner at
    /// `(x, y)`. Returns whether a set pixel got unset.
    pub fn draw(&mut self, x: u8, y: u8, rows: &[u8], edge: SpriteEdge) -> bool {
        let coorx = x as usize % display::WIDTH;
        let coory = y as usize % display::HEIGHT;

        let mut collision = false;

        for (i, row) in rows.iter().enumerate() {
            let y = match Self::position(coory + i, display::HEIGHT, edge) {
                Some(y) => y,
                None => break,
            };

            for j in 0..display::sprite::WIDTH {
                let mask = 0x80 >> j;
                if row & mask == 0 {
                    continue;
                }

                let x = match Self::position(coorx + j, display::WIDTH, edge) {
                    Some(x) => x,
                    None => break,
                };

                let spixel = self.pixels[y][x];
                self.pixels[y][x] = !spixel;
                collision |= spixel;
            }
        }

        collision
    }

    #[inline]
    fn position(value: usize, limit: usize, edge: SpriteEdge) -> Option<usize> {
        match edge {
            SpriteEdge::Clip if value >= limit => None,
            SpriteEdge::Clip => Some(value),
            SpriteEdge::Wrap => Some(value % limit),
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y][x]
    }

    /// Will return a immutable slice of the current display configuration
    pub fn rows(&self) -> &[[bool; display::WIDTH]] {
        &self.pixels[..]
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|row| row.iter().all(|p| !*p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: [u8; 3] = [0b1110_0000, 0b1010_0000, 0b1110_0000];

    #[test]
    fn test_draw_sets_pixels() {
        let mut screen = Display::new();
        assert!(!screen.draw(1, 2, &BOX, SpriteEdge::Clip));

        assert!(screen.pixel(1, 2));
        assert!(screen.pixel(3, 2));
        assert!(!screen.pixel(2, 3));
        assert!(screen.pixel(2, 4));
        assert!(!screen.pixel(4, 2));
    }

    #[test]
    fn test_draw_twice_restores() {
        let mut screen = Display::new();
        screen.draw(0, 0, &[0xFF], SpriteEdge::Clip);
        let before = screen.clone();

        assert!(!screen.draw(10, 10, &BOX, SpriteEdge::Clip));
        assert!(screen.draw(10, 10, &BOX, SpriteEdge::Clip));

        assert_eq!(before, screen);
    }

    #[test]
    fn test_origin_wraps() {
        let mut screen = Display::new();
        screen.draw(64 + 3, 32 + 1, &[0x80], SpriteEdge::Clip);
        assert!(screen.pixel(3, 1));
    }

    #[test]
    fn test_clip_at_edges() {
        let mut screen = Display::new();
        screen.draw(62, 30, &[0xFF, 0xFF, 0xFF], SpriteEdge::Clip);

        let set: usize = screen
            .rows()
            .iter()
            .map(|row| row.iter().filter(|p| **p).count())
            .sum();
        assert_eq!(set, 4);
        assert!(screen.pixel(62, 30));
        assert!(screen.pixel(63, 31));
        assert!(!screen.pixel(0, 30));
        assert!(!screen.pixel(62, 0));
    }

    #[test]
    fn test_wrap_at_edges() {
        let mut screen = Display::new();
        screen.draw(62, 31, &[0b1110_0000, 0b1000_0000], SpriteEdge::Wrap);

        assert!(screen.pixel(62, 31));
        assert!(screen.pixel(63, 31));
        assert!(screen.pixel(0, 31));
        assert!(screen.pixel(62, 0));
        assert!(!screen.pixel(1, 31));
    }

    #[test]
    fn test_clear() {
        let mut screen = Display::new();
        screen.draw(0, 0, &BOX, SpriteEdge::Clip);
        assert!(!screen.is_blank());

        screen.clear();
        assert!(screen.is_blank());
    }
}
