//! Presentation effects for the TUI
//!
//! Spinner frames, the staggered reveal of freshly arrived result cards,
//! and the tinted wordmark. Everything here is a function of the frame
//! counter alone; this module holds no search state and cannot influence
//! a state transition.

use crate::tui::colors::WORDMARK_PALETTE;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks between each newly revealed card after results arrive.
const REVEAL_TICKS_PER_CARD: u64 = 2;

/// Ticks per wordmark palette rotation step.
const WORDMARK_SHIFT_TICKS: u64 = 12;

#[derive(Debug, Default)]
pub struct Effects {
    frame: u64,
    reveal_start: Option<u64>,
}

impl Effects {
    /// Advance one animation tick.
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Current spinner glyph for the loading indicator.
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[(self.frame % SPINNER_FRAMES.len() as u64) as usize]
    }

    /// Start staggering cards in from the current frame.
    pub fn begin_reveal(&mut self) {
        self.reveal_start = Some(self.frame);
    }

    /// Stop staggering; everything renders immediately.
    pub fn clear_reveal(&mut self) {
        self.reveal_start = None;
    }

    /// How many of `total` cards are visible right now. The position index
    /// drives only this delay, never identity or ordering.
    pub fn revealed(&self, total: usize) -> usize {
        match self.reveal_start {
            None => total,
            Some(start) => {
                let elapsed = self.frame.saturating_sub(start);
                ((elapsed / REVEAL_TICKS_PER_CARD) as usize + 1).min(total)
            }
        }
    }
}

/// The wordmark with per-letter colors, slowly rotating through the palette.
pub fn wordmark_spans(text: &str, frame: u64) -> Vec<Span<'static>> {
    let shift = (frame / WORDMARK_SHIFT_TICKS) as usize;
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let color = letter_color(i + shift);
            Span::styled(
                c.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn letter_color(index: usize) -> Color {
    WORDMARK_PALETTE[index % WORDMARK_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_cycles_through_all_frames() {
        let mut effects = Effects::default();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..SPINNER_FRAMES.len() {
            seen.insert(effects.spinner());
            effects.tick();
        }
        assert_eq!(seen.len(), SPINNER_FRAMES.len());
    }

    #[test]
    fn reveal_is_monotonic_and_capped() {
        let mut effects = Effects::default();
        effects.begin_reveal();

        let mut last = 0;
        for _ in 0..40 {
            let now = effects.revealed(8);
            assert!(now >= last);
            assert!(now <= 8);
            last = now;
            effects.tick();
        }
        assert_eq!(last, 8);
    }

    #[test]
    fn without_a_reveal_everything_is_visible() {
        let effects = Effects::default();
        assert_eq!(effects.revealed(5), 5);
    }

    #[test]
    fn wordmark_tints_every_letter() {
        let spans = wordmark_spans("DocSeek", 0);
        assert_eq!(spans.len(), "DocSeek".chars().count());
        let shifted = wordmark_spans("DocSeek", WORDMARK_SHIFT_TICKS);
        assert_ne!(spans[0].style.fg, shifted[0].style.fg);
    }
}
