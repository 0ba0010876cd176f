//! Tech-stack marquee
//!
//! Two identical item groups sit side by side and both scroll left by their
//! own width every period, so the strip loops without a visible seam.

use crate::consts::MARQUEE_PERIOD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechItem {
    pub name: &'static str,
    /// Accent color utility class
    pub color_class: &'static str,
}

pub const TECH_ITEMS: [TechItem; 9] = [
    TechItem {
        name: "Python",
        color_class: "text-blue-400",
    },
    TechItem {
        name: "Docker",
        color_class: "text-blue-500",
    },
    TechItem {
        name: "Linux",
        color_class: "text-orange-400",
    },
    TechItem {
        name: "Neo4j",
        color_class: "text-cyan-400",
    },
    TechItem {
        name: "Next.js",
        color_class: "text-white",
    },
    TechItem {
        name: "React",
        color_class: "text-cyan-400",
    },
    TechItem {
        name: "SQL",
        color_class: "text-amber-500",
    },
    TechItem {
        name: "Git",
        color_class: "text-orange-500",
    },
    TechItem {
        name: "Search",
        color_class: "text-green-400",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    period: f32,
    elapsed: f32,
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new(MARQUEE_PERIOD)
    }
}

impl Marquee {
    pub fn new(period: f32) -> Self {
        Self {
            period: if period.is_finite() && period > 0.0 {
                period
            } else {
                MARQUEE_PERIOD
            },
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt) % self.period;
        }
    }

    /// Horizontal offset of each group, in percent of its own width
    pub fn offset_percent(&self) -> f32 {
        -(self.elapsed % self.period) / self.period * 100.0
    }

    /// `transform` value applied to both groups
    pub fn transform_css(&self) -> String {
        format!("translateX({:.3}%)", self.offset_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_progresses_linearly() {
        let mut m = Marquee::default();
        assert_eq!(m.offset_percent(), 0.0);
        m.advance(10.0);
        assert!((m.offset_percent() + 25.0).abs() < 1e-4);
        m.advance(20.0);
        assert!((m.offset_percent() + 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_wraps_every_period() {
        let mut m = Marquee::default();
        m.advance(45.0);
        assert!((m.offset_percent() + 12.5).abs() < 1e-4);
        for _ in 0..1000 {
            m.advance(0.5);
            let o = m.offset_percent();
            assert!(o <= 0.0 && o > -100.0);
        }
    }

    #[test]
    fn test_bad_period_falls_back() {
        let mut m = Marquee::new(0.0);
        m.advance(20.0);
        assert!((m.offset_percent() + 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_transform_css() {
        let mut m = Marquee::default();
        m.advance(4.0);
        assert_eq!(m.transform_css(), "translateX(-10.000%)");
    }

    #[test]
    fn test_items() {
        assert_eq!(TECH_ITEMS.len(), 9);
        assert_eq!(TECH_ITEMS[0].name, "Python");
        assert_eq!(TECH_ITEMS[8].name, "Search");
    }
}
