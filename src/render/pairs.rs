//! Color pair allocation for palette-limited terminals.

use std::collections::HashMap;

use super::ColorManager;
use crate::core::Color;

/// Terminal default color index.
pub const DEFAULT_COLOR: i16 = -1;

/// How colors are mapped onto terminal color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Terminal supports redefining colors: allocate slots downward from 255.
    /// Colors past the last free slot render in the terminal default.
    Custom,
    /// Fixed xterm-256 palette: use the nearest entry.
    Xterm256,
    /// No usable palette: everything renders in the terminal default.
    Default,
}

/// A palette change the renderer must apply before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitRequest {
    /// Redefine a color slot (components on the curses 0..=1000 scale).
    Color {
        /// Slot index.
        slot: i16,
        /// Scaled `(r, g, b)`.
        rgb: (i16, i16, i16),
    },
    /// Define a color pair.
    Pair {
        /// Pair number.
        pair: u16,
        /// Foreground slot.
        fg: i16,
        /// Background slot.
        bg: i16,
    },
}

/// Lowest slot handed out in [`ColorMode::Custom`]; the 16 base colors stay intact.
const FIRST_CUSTOM_SLOT: i16 = 16;

/// Pair numbers that fit the 8-bit color field of the attribute bits.
pub const MAX_ENCODABLE_PAIRS: u16 = 256;

/// Caches color slots and `(fg, bg)` pairs.
///
/// Pair 0 is the terminal default. Once `max_pairs` is reached, further
/// combinations fall back to pair 0. `max_pairs` is capped at
/// [`MAX_ENCODABLE_PAIRS`] since higher pair numbers cannot be expressed
/// through [`color_pair`](super::color_pair).
#[derive(Debug)]
pub struct PairTable {
    mode: ColorMode,
    max_pairs: u16,
    colors: HashMap<Color, i16>,
    pairs: HashMap<(i16, i16), u16>,
    pending: Vec<InitRequest>,
}

impl PairTable {
    /// Create an empty table for a terminal reporting `max_pairs` pairs.
    pub fn new(mode: ColorMode, max_pairs: u16) -> Self {
        Self {
            mode,
            max_pairs: max_pairs.min(MAX_ENCODABLE_PAIRS),
            colors: HashMap::new(),
            pairs: HashMap::new(),
            pending: Vec::new(),
        }
    }

    /// Color mapping mode.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Number of allocated pairs, excluding pair 0.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Take the palette changes queued since the last call.
    pub fn drain_pending(&mut self) -> Vec<InitRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Slot for `color`, allocating one if needed.
    pub fn color_slot(&mut self, color: Color) -> i16 {
        if let Some(&slot) = self.colors.get(&color) {
            return slot;
        }

        let slot = match self.mode {
            ColorMode::Default => DEFAULT_COLOR,
            ColorMode::Xterm256 => nearest_xterm256(color),
            ColorMode::Custom => {
                let next = self
                    .lowest_custom_slot()
                    .map_or(255, |lowest| lowest - 1);
                if next < FIRST_CUSTOM_SLOT {
                    // Every palette entry above the base colors is redefined by now.
                    tracing::debug!(%color, "color slots exhausted, using default color");
                    DEFAULT_COLOR
                } else {
                    self.pending.push(InitRequest::Color {
                        slot: next,
                        rgb: color_to_curses(color),
                    });
                    next
                }
            }
        };
        self.colors.insert(color, slot);
        slot
    }

    /// Lowest custom slot allocated so far.
    fn lowest_custom_slot(&self) -> Option<i16> {
        self.colors
            .values()
            .copied()
            .filter(|&slot| slot >= FIRST_CUSTOM_SLOT)
            .min()
    }

    /// Pair number for raw slot indices.
    pub fn raw_pair(&mut self, fg: i16, bg: i16) -> u16 {
        if fg == DEFAULT_COLOR && bg == DEFAULT_COLOR {
            return 0;
        }
        if let Some(&pair) = self.pairs.get(&(fg, bg)) {
            return pair;
        }
        if self.pairs.len() + 1 >= usize::from(self.max_pairs) {
            tracing::debug!(fg, bg, "color pairs exhausted, using default pair");
            return 0;
        }

        // Bounded by max_pairs, at most MAX_ENCODABLE_PAIRS.
        let pair = (self.pairs.len() + 1) as u16;
        self.pairs.insert((fg, bg), pair);
        self.pending.push(InitRequest::Pair { pair, fg, bg });
        pair
    }
}

impl ColorManager for PairTable {
    fn color_pair(&mut self, fg: Option<Color>, bg: Option<Color>) -> u16 {
        let fg = fg.map_or(DEFAULT_COLOR, |c| self.color_slot(c));
        let bg = bg.map_or(DEFAULT_COLOR, |c| self.color_slot(c));
        self.raw_pair(fg, bg)
    }
}

/// Scale a color onto the curses 0..=1000 component range.
pub fn color_to_curses(color: Color) -> (i16, i16, i16) {
    let scale = |c: u8| (i32::from(c) * 1000 / 255) as i16;
    (scale(color.r), scale(color.g), scale(color.b))
}

/// Component levels of the xterm-256 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Closest xterm-256 palette index (cube or grey ramp).
pub fn nearest_xterm256(color: Color) -> i16 {
    fn nearest_level(c: u8) -> usize {
        CUBE_LEVELS
            .iter()
            .enumerate()
            .min_by_key(|(_, &level)| (i32::from(level) - i32::from(c)).abs())
            .map_or(0, |(i, _)| i)
    }
    fn distance(a: Color, b: Color) -> i32 {
        let d = |x: u8, y: u8| (i32::from(x) - i32::from(y)).pow(2);
        d(a.r, b.r) + d(a.g, b.g) + d(a.b, b.b)
    }

    let (ri, gi, bi) = (
        nearest_level(color.r),
        nearest_level(color.g),
        nearest_level(color.b),
    );
    let cube = Color::new(CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);
    let cube_index = 16 + 36 * ri + 6 * gi + bi;

    let avg = (u16::from(color.r) + u16::from(color.g) + u16::from(color.b)) / 3;
    let grey_step = (avg.saturating_sub(3) / 10).min(23);
    let grey_level = (8 + grey_step * 10) as u8;
    let grey = Color::new(grey_level, grey_level, grey_level);
    let grey_index = 232 + usize::from(grey_step);

    if distance(color, grey) < distance(color, cube) {
        grey_index as i16
    } else {
        cube_index as i16
    }
}
