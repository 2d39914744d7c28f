use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Services,
    Maintenance,
    Products,
    Contact,
    Legal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        route: Route::Home,
        label: "דף הבית",
    },
    NavItem {
        route: Route::Services,
        label: "כלל השירותים",
    },
    NavItem {
        route: Route::Maintenance,
        label: "תחזוקה שוטפת",
    },
    NavItem {
        route: Route::Products,
        label: "מוצרי פתרונות חניה",
    },
    NavItem {
        route: Route::Contact,
        label: "יצירת קשר",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalSection {
    Privacy,
    Cookies,
    Terms,
}

impl LegalSection {
    pub fn anchor(self) -> &'static str {
        match self {
            LegalSection::Privacy => "privacy",
            LegalSection::Cookies => "cookies",
            LegalSection::Terms => "terms",
        }
    }

    pub fn href(self) -> String {
        format!("{}#{}", Route::Legal.path(), self.anchor())
    }
}

/// Outcome of resolving a location path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Page(Route),
    /// The path is an alias; the browser URL should be replaced with `href`.
    Redirect { route: Route, href: String },
}

impl Resolved {
    pub fn route(&self) -> Route {
        match self {
            Resolved::Page(route) => *route,
            Resolved::Redirect { route, .. } => *route,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Unknown(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Unknown(path) => write!(f, "no page at '{path}'"),
        }
    }
}

impl std::error::Error for RouteError {}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Services,
        Route::Maintenance,
        Route::Products,
        Route::Contact,
        Route::Legal,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
            Route::Maintenance => "/maintenance",
            Route::Products => "/products",
            Route::Contact => "/contact",
            Route::Legal => "/legal",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "אביב פתרונות חניה",
            Route::Services => "כלל השירותים | אביב פתרונות חניה",
            Route::Maintenance => "תחזוקה שוטפת | אביב פתרונות חניה",
            Route::Products => "מוצרי פתרונות חניה | אביב פתרונות חניה",
            Route::Contact => "יצירת קשר | אביב פתרונות חניה",
            Route::Legal => "מידע משפטי | אביב פתרונות חניה",
        }
    }

    pub fn parse(path: &str) -> Result<Route, RouteError> {
        let normalized = normalize_path(path);
        Route::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| RouteError::Unknown(normalized.to_string()))
    }

    /// Exact match only; the home link is not active on nested pages.
    pub fn is_active_for(self, current: Route) -> bool {
        self == current
    }
}

/// Maps a location path to a page. Legal aliases redirect to their anchor,
/// anything unknown falls back to the home page.
pub fn resolve(path: &str) -> Resolved {
    let normalized = normalize_path(path);
    let alias = match normalized {
        "/privacy" => Some(LegalSection::Privacy),
        "/cookies" => Some(LegalSection::Cookies),
        "/terms" => Some(LegalSection::Terms),
        _ => None,
    };
    if let Some(section) = alias {
        return Resolved::Redirect {
            route: Route::Legal,
            href: section.href(),
        };
    }
    Resolved::Page(Route::parse(normalized).unwrap_or_default())
}

fn normalize_path(path: &str) -> &str {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Splits an internal href into its path and optional `#anchor`.
pub fn split_href(href: &str) -> (&str, Option<&str>) {
    match href.split_once('#') {
        Some((path, anchor)) if !anchor.is_empty() => (path, Some(anchor)),
        Some((path, _)) => (path, None),
        None => (href, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_trailing_slash_and_query() {
        assert_eq!(Route::parse("/services/"), Ok(Route::Services));
        assert_eq!(Route::parse("/contact?x=1"), Ok(Route::Contact));
        assert_eq!(Route::parse(""), Ok(Route::Home));
    }

    #[test]
    fn split_href_handles_anchor() {
        assert_eq!(split_href("/legal#terms"), ("/legal", Some("terms")));
        assert_eq!(split_href("/legal#"), ("/legal", None));
        assert_eq!(split_href("/"), ("/", None));
    }
}
