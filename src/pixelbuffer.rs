//! The strip abstraction effects draw into.

use crate::color::{Color, BLACK};

/// An indexable, fixed-length row of RGB pixels with an explicit flush.
///
/// Writes land in a pending frame and only become visible on [`present`](PixelBuffer::present),
/// unless auto-present is switched on.
pub trait PixelBuffer {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Color;

    fn set(&mut self, index: usize, color: Color);

    fn set_range(&mut self, start: usize, colors: &[Color]) {
        for (offset, color) in colors.iter().enumerate() {
            self.set(start + offset, *color);
        }
    }

    fn fill(&mut self, color: Color) {
        for index in 0..self.len() {
            self.set(index, color);
        }
    }

    /// Flushes pending writes to the display.
    fn present(&mut self);

    fn set_auto_present(&mut self, enabled: bool);
}

impl<T: PixelBuffer + ?Sized> PixelBuffer for &mut T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Color {
        (**self).get(index)
    }

    fn set(&mut self, index: usize, color: Color) {
        (**self).set(index, color)
    }

    fn set_range(&mut self, start: usize, colors: &[Color]) {
        (**self).set_range(start, colors)
    }

    fn fill(&mut self, color: Color) {
        (**self).fill(color)
    }

    fn present(&mut self) {
        (**self).present()
    }

    fn set_auto_present(&mut self, enabled: bool) {
        (**self).set_auto_present(enabled)
    }
}

/// In-memory strip. Keeps the pending frame apart from the last presented one.
pub struct PixelStrip {
    pending: Vec<Color>,
    presented: Vec<Color>,
    auto_present: bool,
    present_count: usize,
}

impl PixelStrip {
    pub fn new(pixel_count: usize) -> PixelStrip {
        PixelStrip {
            pending: vec![BLACK; pixel_count],
            presented: vec![BLACK; pixel_count],
            auto_present: true,
            present_count: 0,
        }
    }

    /// What the display currently shows.
    pub fn presented(&self) -> &[Color] {
        &self.presented
    }

    pub fn pending(&self) -> &[Color] {
        &self.pending
    }

    pub fn present_count(&self) -> usize {
        self.present_count
    }

    pub fn auto_present(&self) -> bool {
        self.auto_present
    }

    fn written(&mut self) {
        if self.auto_present {
            self.present();
        }
    }
}

impl PixelBuffer for PixelStrip {
    fn len(&self) -> usize {
        self.pending.len()
    }

    fn get(&self, index: usize) -> Color {
        self.pending[index]
    }

    fn set(&mut self, index: usize, color: Color) {
        self.pending[index] = color;
        self.written();
    }

    fn set_range(&mut self, start: usize, colors: &[Color]) {
        self.pending[start..start + colors.len()].copy_from_slice(colors);
        self.written();
    }

    fn fill(&mut self, color: Color) {
        self.pending.fill(color);
        self.written();
    }

    fn present(&mut self) {
        self.presented.copy_from_slice(&self.pending);
        self.present_count += 1;
    }

    fn set_auto_present(&mut self, enabled: bool) {
        self.auto_present = enabled;
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{GREEN, RED};

    #[test]
    fn writes_stay_pending_until_presented() {
        let mut strip = PixelStrip::new(4);
        strip.set_auto_present(false);

        strip.set(1, RED);
        strip.set_range(2, &[GREEN, GREEN]);
        assert_eq!(strip.presented(), &[BLACK; 4]);
        assert_eq!(strip.get(1), RED);

        strip.present();
        assert_eq!(strip.presented(), &[BLACK, RED, GREEN, GREEN]);
        assert_eq!(strip.present_count(), 1);
    }

    #[test]
    fn auto_present_flushes_every_write() {
        let mut strip = PixelStrip::new(3);
        strip.fill(RED);
        strip.set(0, GREEN);
        assert_eq!(strip.presented(), &[GREEN, RED, RED]);
        assert_eq!(strip.present_count(), 2);
    }

    #[test]
    fn empty_range_at_the_far_end_is_allowed() {
        let mut strip = PixelStrip::new(3);
        strip.set_range(3, &[]);
        assert_eq!(strip.pending(), &[BLACK; 3]);
    }

    #[test]
    fn present_without_changes_keeps_the_frame() {
        let mut strip = PixelStrip::new(2);
        strip.set_auto_present(false);
        strip.set(0, RED);
        strip.present();
        strip.present();
        assert_eq!(strip.presented(), &[RED, BLACK]);
    }
}
