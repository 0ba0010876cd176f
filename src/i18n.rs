//! Polish/English translations
//!
//! Static tables, one per language, with identical shape. Markup refers to
//! strings by dotted key (`data-i18n="portfolio.title"`), resolved through
//! [`Translations::lookup`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Pl, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pl" => Some(Language::Pl),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Accessible label for the switcher button
    pub fn switch_label(self) -> &'static str {
        match self {
            Language::Pl => "Switch to Polish",
            Language::En => "Switch to English",
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::Pl => &PL,
            Language::En => &EN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionItems {
    pub first: &'static str,
    pub second: &'static str,
    pub third: &'static str,
}

/// Texts for one bento card and its sub-page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionText {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub items: SectionItems,
    pub coming_soon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterText {
    pub copied: &'static str,
    pub copyright: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub roles: &'static [&'static str],
    pub bio: &'static str,
    pub portfolio: SectionText,
    pub katalog: SectionText,
    pub tech_stack: &'static str,
    pub footer: FooterText,
    pub back_to_home: &'static str,
}

impl Translations {
    /// Every key `lookup` understands
    pub const KEYS: [&'static str; 19] = [
        "bio",
        "portfolio.title",
        "portfolio.description",
        "portfolio.action",
        "portfolio.items.wikiGraph",
        "portfolio.items.portfolioSite",
        "portfolio.items.automationSuite",
        "portfolio.comingSoon",
        "katalog.title",
        "katalog.description",
        "katalog.action",
        "katalog.items.leadFinder",
        "katalog.items.businessAutomation",
        "katalog.items.webTemplates",
        "katalog.comingSoon",
        "techStack",
        "footer.copied",
        "footer.copyright",
        "backToHome",
    ];

    /// Resolve a dotted key to its text
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        let text = match key {
            "bio" => self.bio,
            "portfolio.title" => self.portfolio.title,
            "portfolio.description" => self.portfolio.description,
            "portfolio.action" => self.portfolio.action,
            "portfolio.items.wikiGraph" => self.portfolio.items.first,
            "portfolio.items.portfolioSite" => self.portfolio.items.second,
            "portfolio.items.automationSuite" => self.portfolio.items.third,
            "portfolio.comingSoon" => self.portfolio.coming_soon,
            "katalog.title" => self.katalog.title,
            "katalog.description" => self.katalog.description,
            "katalog.action" => self.katalog.action,
            "katalog.items.leadFinder" => self.katalog.items.first,
            "katalog.items.businessAutomation" => self.katalog.items.second,
            "katalog.items.webTemplates" => self.katalog.items.third,
            "katalog.comingSoon" => self.katalog.coming_soon,
            "techStack" => self.tech_stack,
            "footer.copied" => self.footer.copied,
            "footer.copyright" => self.footer.copyright,
            "backToHome" => self.back_to_home,
            _ => return None,
        };
        Some(text)
    }

    pub fn roles(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.to_string()).collect()
    }
}

static PL: Translations = Translations {
    roles: &[
        "Programista Solo",
        "Ekspert Wsparcia L2",
        "Inżynier Automatyzacji",
    ],
    bio: "Łączę dyscyplinę operacyjną z kreatywną inżynierią. Mieszkam w Krakowie.",
    portfolio: SectionText {
        title: "Portfolio",
        description: "Poznaj moje projekty techniczne i inżynierskie.",
        action: "> Uruchom Portfolio",
        items: SectionItems {
            first: "Baza grafowa",
            second: "Strona portfolio",
            third: "Pakiet automatyzacji",
        },
        coming_soon: "Ta strona pojawi się wkrótce! Twoje Portfolio z projektami WikiGraph, Katalog i LeadFinder zostanie tu zaprezentowane.",
    },
    katalog: SectionText {
        title: "Katalog",
        description: "Odkryj automatyzację biznesową i rozwiązania webowe",
        action: "> Przeglądaj Katalog",
        items: SectionItems {
            first: "System generowania leadów",
            second: "Optymalizacja przepływu pracy",
            third: "Gotowe komponenty",
        },
        coming_soon: "Ta strona pojawi się wkrótce! Katalog z LeadFinder, Automatyzacją Biznesową i Szablonami Webowymi będzie dostępny tutaj.",
    },
    tech_stack: "Technologie",
    footer: FooterText {
        copied: "Skopiowano!",
        copyright: "Dawid Czerwiński",
    },
    back_to_home: "Powrót do strony głównej",
};

static EN: Translations = Translations {
    roles: &["Solo Developer", "Support L2 Expert", "Automation Engineer"],
    bio: "Bridging the gap between operational discipline and creative engineering. Based in Kraków.",
    portfolio: SectionText {
        title: "Portfolio",
        description: "Explore my technical projects and engineering work.",
        action: "> Launch Portfolio",
        items: SectionItems {
            first: "Graph database",
            second: "Portfolio site",
            third: "Automation suite",
        },
        coming_soon: "This page is coming soon! Your Developer Portfolio Website with WikiGraph, Katalog & LeadFinder projects will be showcased here.",
    },
    katalog: SectionText {
        title: "Katalog",
        description: "Discover business automation and web solutions",
        action: "> Explore Catalog",
        items: SectionItems {
            first: "Lead generation system",
            second: "Workflow optimization",
            third: "Ready-to-use components",
        },
        coming_soon: "This page is coming soon! The Katalog with LeadFinder, Business Automation, and Web Templates will be available here.",
    },
    tech_stack: "Tech Stack",
    footer: FooterText {
        copied: "Copied!",
        copyright: "Dawid Czerwiński",
    },
    back_to_home: "Back to Home",
};

/// Current language plus access to its table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageContext {
    language: Language,
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns true when the language actually changed
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.language == language {
            return false;
        }
        log::info!("language: {} -> {}", self.language.code(), language.code());
        self.language = language;
        true
    }

    pub fn t(&self) -> &'static Translations {
        self.language.translations()
    }
}
