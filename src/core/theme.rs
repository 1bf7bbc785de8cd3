// Per-page background theme: a particle colour and a camera depth for each
// page index.

use glam::Vec3;

use super::constants::{DEFAULT_PAGE_COLORS, DEFAULT_PAGE_DEPTHS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeEntry {
    /// Linear RGB.
    pub color: Vec3,
    pub depth: f32,
}

#[derive(Clone, Debug)]
pub struct PageTheme {
    entries: Vec<ThemeEntry>,
}

impl Default for PageTheme {
    fn default() -> Self {
        let entries = DEFAULT_PAGE_COLORS
            .iter()
            .zip(DEFAULT_PAGE_DEPTHS.iter())
            .map(|(&hex, &depth)| ThemeEntry {
                color: hex_to_linear(hex),
                depth,
            })
            .collect();
        Self { entries }
    }
}

impl PageTheme {
    /// Returns `None` for an empty table; a theme needs at least one entry.
    pub fn new(entries: Vec<ThemeEntry>) -> Option<Self> {
        (!entries.is_empty()).then_some(Self { entries })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entry for `page`. Pages beyond the table reuse the last entry.
    #[inline]
    pub fn entry(&self, page: usize) -> ThemeEntry {
        let i = page.min(self.entries.len() - 1);
        self.entries[i]
    }
}

/// `0xRRGGBB` in sRGB to linear RGB.
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
