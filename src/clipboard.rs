//! Copy-email button state

use crate::consts::COPIED_LABEL_DURATION;
use crate::i18n::Translations;

pub const EMAIL: &str = "dawidczerwinskipl@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/gzyms69";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/dawid-czerwi%C5%84ski-baa6b5149/";

/// Copy-to-clipboard button: shows the address, or the "copied" label for
/// a short while after a successful copy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CopyEmail {
    /// Seconds left on the "copied" label; zero when showing the address
    revert_in: f32,
}

impl CopyEmail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self) -> bool {
        self.revert_in > 0.0
    }

    /// Apply the clipboard outcome. A failed write leaves the button as is.
    pub fn on_copy_result(&mut self, ok: bool) {
        if ok {
            self.revert_in = COPIED_LABEL_DURATION;
        } else {
            log::warn!("failed to copy email to clipboard");
        }
    }

    /// Returns true when the label flipped back this frame
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.is_copied() || !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        self.revert_in = (self.revert_in - dt).max(0.0);
        !self.is_copied()
    }

    pub fn label(&self, t: &Translations) -> &'static str {
        if self.is_copied() { t.footer.copied } else { EMAIL }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_copied_label_reverts() {
        let t = Language::En.translations();
        let mut b = CopyEmail::new();
        assert_eq!(b.label(t), EMAIL);

        b.on_copy_result(true);
        assert_eq!(b.label(t), "Copied!");
        assert!(!b.advance(1.5));
        assert!(b.is_copied());
        assert!(b.advance(0.6));
        assert_eq!(b.label(t), EMAIL);
        assert!(!b.advance(1.0));
    }

    #[test]
    fn test_failure_keeps_state() {
        let mut b = CopyEmail::new();
        b.on_copy_result(false);
        assert!(!b.is_copied());
    }

    #[test]
    fn test_recopy_restarts_timer() {
        let mut b = CopyEmail::new();
        b.on_copy_result(true);
        b.advance(1.9);
        b.on_copy_result(true);
        b.advance(1.0);
        assert!(b.is_copied());
    }

    #[test]
    fn test_profile_links_are_https() {
        for url in [GITHUB_URL, LINKEDIN_URL] {
            assert!(url.starts_with("https://"));
            assert!(!url.contains(' '));
        }
    }
}
