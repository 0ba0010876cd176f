//! Hash routes
//!
//! The page is a single document with three views; `location.hash` picks
//! the visible one. Anything unrecognized lands on the home view.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Portfolio,
    Katalog,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Portfolio, Route::Katalog];

    /// Parse `location.hash` (with or without the leading `#`)
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim().trim_start_matches('#');
        let path = path.trim_start_matches('/').trim_end_matches('/');
        let path = path.split(['?', '#']).next().unwrap_or("");
        match path.to_lowercase().as_str() {
            "portfolio" => Route::Portfolio,
            "katalog" => Route::Katalog,
            _ => Route::Home,
        }
    }

    pub fn as_hash(self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::Portfolio => "#/portfolio",
            Route::Katalog => "#/katalog",
        }
    }

    /// DOM id of the view element shown for this route
    pub fn view_id(self) -> &'static str {
        match self {
            Route::Home => "view-home",
            Route::Portfolio => "view-portfolio",
            Route::Katalog => "view-katalog",
        }
    }

    /// Effects that follow the pointer only run on the home view
    pub fn has_effects(self) -> bool {
        self == Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_hashes() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/portfolio"), Route::Portfolio);
        assert_eq!(Route::from_hash("#/Katalog/"), Route::Katalog);
        assert_eq!(Route::from_hash("#/katalog?ref=card"), Route::Katalog);
        assert_eq!(Route::from_hash("#/blog"), Route::Home);
    }

    #[test]
    fn test_hash_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_hash(route.as_hash()), route);
        }
    }

    #[test]
    fn test_link_names_resolve_to_hrefs() {
        assert_eq!(Route::from_hash("home").as_hash(), "#/");
        assert_eq!(Route::from_hash("portfolio").as_hash(), "#/portfolio");
        assert_eq!(Route::from_hash("katalog").as_hash(), "#/katalog");
    }

    #[test]
    fn test_only_home_has_effects() {
        assert!(Route::Home.has_effects());
        assert!(!Route::Portfolio.has_effects());
        assert!(!Route::Katalog.has_effects());
    }
}
