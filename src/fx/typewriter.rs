//! Typewriter text cycler
//!
//! Types a word one character at a time, holds it, deletes it, then moves
//! on to the next word, forever. Each `step` is one timer firing; `advance`
//! fires as many steps as the elapsed time covers.

use serde::{Deserialize, Serialize};

/// Floor on the step interval so a zero speed cannot spin `advance`
const MIN_INTERVAL: f32 = 0.001;
/// Steps fired by one `advance` before the backlog is dropped
const MAX_STEPS_PER_ADVANCE: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypewriterPhase {
    Typing,
    Paused,
    Deleting,
}

/// Step intervals in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypewriterTiming {
    pub typing: f32,
    pub deleting: f32,
    pub pause: f32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self::from_millis(50, 30, 2000)
    }
}

impl TypewriterTiming {
    /// Faster cycle used for the hero roles line
    pub const HERO: TypewriterTiming = TypewriterTiming {
        typing: 0.04,
        deleting: 0.02,
        pause: 3.0,
    };

    pub fn from_millis(typing: u32, deleting: u32, pause: u32) -> Self {
        Self {
            typing: typing as f32 / 1000.0,
            deleting: deleting as f32 / 1000.0,
            pause: pause as f32 / 1000.0,
        }
    }

    fn interval(&self, phase: TypewriterPhase) -> f32 {
        let secs = match phase {
            TypewriterPhase::Typing => self.typing,
            TypewriterPhase::Paused => self.pause,
            TypewriterPhase::Deleting => self.deleting,
        };
        if secs.is_finite() {
            secs.max(MIN_INTERVAL)
        } else {
            MIN_INTERVAL
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    timing: TypewriterTiming,
    word_index: usize,
    /// Characters of the current word on screen
    shown: usize,
    phase: TypewriterPhase,
    /// Seconds until the next step fires
    timer: f32,
    mounted: bool,
}

impl Typewriter {
    /// Create a mounted cycler starting on the first word
    pub fn new(words: Vec<String>, timing: TypewriterTiming) -> Self {
        let mut tw = Self {
            words,
            timing,
            word_index: 0,
            shown: 0,
            phase: TypewriterPhase::Typing,
            timer: 0.0,
            mounted: true,
        };
        tw.restart();
        tw
    }

    fn restart(&mut self) {
        self.word_index = 0;
        self.shown = 0;
        self.phase = TypewriterPhase::Typing;
        self.settle_phase();
        self.timer = self.timing.interval(self.phase);
    }

    fn current_word(&self) -> &str {
        self.words
            .get(self.word_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn word_len(&self) -> usize {
        self.current_word().chars().count()
    }

    /// A fully typed word pauses; an empty word has nothing to type.
    fn settle_phase(&mut self) {
        if self.phase == TypewriterPhase::Typing && self.shown >= self.word_len() {
            self.shown = self.word_len();
            self.phase = TypewriterPhase::Paused;
        }
    }

    fn is_idle(&self) -> bool {
        !self.mounted || self.words.is_empty()
    }

    /// Fire one pending timer
    pub fn step(&mut self) {
        if self.is_idle() {
            return;
        }
        match self.phase {
            TypewriterPhase::Typing => self.shown += 1,
            TypewriterPhase::Paused => self.phase = TypewriterPhase::Deleting,
            TypewriterPhase::Deleting => self.shown = self.shown.saturating_sub(1),
        }
        if self.phase == TypewriterPhase::Deleting && self.shown == 0 {
            self.word_index = (self.word_index + 1) % self.words.len();
            self.phase = TypewriterPhase::Typing;
        }
        self.settle_phase();
    }

    pub fn advance(&mut self, dt: f32) {
        if self.is_idle() || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.timer -= dt;
        let mut fired = 0;
        while self.timer <= 0.0 {
            if fired == MAX_STEPS_PER_ADVANCE {
                self.timer = self.timing.interval(self.phase);
                break;
            }
            self.step();
            self.timer += self.timing.interval(self.phase);
            fired += 1;
        }
    }

    pub fn displayed_text(&self) -> &str {
        let word = self.current_word();
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    /// Swap the word list (language change) and start over
    pub fn set_words(&mut self, words: Vec<String>) {
        self.words = words;
        self.restart();
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Start cycling from the first word
    pub fn mount(&mut self) {
        self.mounted = true;
        self.restart();
    }

    /// Cancel the pending timer; nothing changes until mounted again
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_full_cycle_by_steps() {
        let mut tw = Typewriter::new(words(&["abc", "de"]), TypewriterTiming::default());
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.phase(), TypewriterPhase::Typing);

        for _ in 0..3 {
            tw.step();
        }
        assert_eq!(tw.displayed_text(), "abc");
        assert_eq!(tw.phase(), TypewriterPhase::Paused);

        tw.step();
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);
        for _ in 0..3 {
            tw.step();
        }
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.word_index(), 1);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);

        // "de": type, pause, delete, wrap
        for _ in 0..(2 + 1 + 2) {
            tw.step();
        }
        assert_eq!(tw.word_index(), 0);
        assert_eq!(tw.displayed_text(), "");
    }

    #[test]
    fn test_advance_uses_timing() {
        let mut tw = Typewriter::new(words(&["hello"]), TypewriterTiming::default());
        tw.advance(0.12);
        assert_eq!(tw.displayed_text(), "he");
        tw.advance(0.2);
        assert_eq!(tw.displayed_text(), "hello");
        tw.advance(1.0);
        assert_eq!(tw.phase(), TypewriterPhase::Paused);
        // pause ends at 2.25 s; first delete lands 30 ms later
        tw.advance(0.95);
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);
        assert_eq!(tw.displayed_text(), "hello");
        // five deletes finish at 2.40 s and the single word wraps
        tw.advance(0.14);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        assert_eq!(tw.word_index(), 0);
        assert_eq!(tw.displayed_text(), "");
    }

    #[test]
    fn test_text_length_never_exceeds_word() {
        let mut tw = Typewriter::new(words(&["Data Engineer", "AI", ""]), TypewriterTiming::HERO);
        for _ in 0..5000 {
            tw.advance(0.017);
            let shown = tw.displayed_text().chars().count();
            let full = tw.words()[tw.word_index()].chars().count();
            assert!(shown <= full);
        }
    }

    #[test]
    fn test_multibyte_slicing() {
        let mut tw = Typewriter::new(words(&["Inżynier"]), TypewriterTiming::default());
        for _ in 0..3 {
            tw.step();
        }
        assert_eq!(tw.displayed_text(), "Inż");
    }

    #[test]
    fn test_empty_list_is_idle() {
        let mut tw = Typewriter::new(Vec::new(), TypewriterTiming::default());
        tw.advance(10.0);
        tw.step();
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.word_index(), 0);
    }

    #[test]
    fn test_set_words_restarts() {
        let mut tw = Typewriter::new(words(&["one", "two"]), TypewriterTiming::default());
        for _ in 0..7 {
            tw.step();
        }
        assert_eq!(tw.word_index(), 1);
        tw.set_words(words(&["jeden", "dwa"]));
        assert_eq!(tw.word_index(), 0);
        assert_eq!(tw.displayed_text(), "");
        tw.step();
        assert_eq!(tw.displayed_text(), "j");
    }

    #[test]
    fn test_unmount_freezes() {
        let mut tw = Typewriter::new(words(&["abc"]), TypewriterTiming::default());
        tw.step();
        tw.unmount();
        tw.advance(5.0);
        assert_eq!(tw.displayed_text(), "a");
        tw.mount();
        assert_eq!(tw.displayed_text(), "");
    }

    #[test]
    fn test_long_gap_does_not_spin() {
        let mut tw = Typewriter::new(words(&["x"]), TypewriterTiming::from_millis(0, 0, 0));
        tw.advance(3600.0);
        assert!(tw.displayed_text().len() <= 1);
    }
}
