use std::fmt;

use crate::ids::RecordId;
use crate::models::EntityKind;

/// Every page the app can show, parsed from and formatted to a browser path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
    Dashboard,
    List(EntityKind),
    New(EntityKind),
    Edit(EntityKind, RecordId),
    View(EntityKind, RecordId),
    NotFound(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::List(kind) => base(*kind),
            Route::New(kind) => format!("{}/new", base(*kind)),
            Route::Edit(kind, id) => format!("{}/{}", base(*kind), urlencoding::encode(id.as_str())),
            Route::View(kind, id) => format!("{}/view/{}", base(*kind), urlencoding::encode(id.as_str())),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Unknown paths become `NotFound` carrying the original path. A query
    /// string or fragment is ignored, as is a trailing slash.
    pub fn parse(path: &str) -> Route {
        let trimmed = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["dashboard"] => Route::Dashboard,
            [section, slug, rest @ ..] => match EntityKind::from_slug(section, slug) {
                Some(kind) => match rest {
                    [] => Route::List(kind),
                    ["new"] => Route::New(kind),
                    ["view", id] => record_route(path, kind, id, Route::View),
                    ["view"] => Route::NotFound(path.to_string()),
                    [id] => record_route(path, kind, id, Route::Edit),
                    _ => Route::NotFound(path.to_string()),
                },
                None => Route::NotFound(path.to_string()),
            },
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Kind whose pages this route belongs to.
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Route::List(k) | Route::New(k) | Route::Edit(k, _) | Route::View(k, _) => Some(*k),
            _ => None,
        }
    }

    /// Pages rendered inside the signed-in shell with the sidebar.
    pub fn in_app(&self) -> bool {
        matches!(self, Route::Dashboard) || self.kind().is_some()
    }
}

fn base(kind: EntityKind) -> String {
    format!("/{}/{}", kind.section().slug(), kind.slug())
}

fn record_route(
    path: &str,
    kind: EntityKind,
    id: &str,
    make: fn(EntityKind, RecordId) -> Route,
) -> Route {
    let decoded = urlencoding::decode(id).map(|s| s.into_owned()).unwrap_or_default();
    match RecordId::parse(&decoded) {
        Ok(id) => make(kind, id),
        Err(_) => Route::NotFound(path.to_string()),
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_marketing_and_app_pages() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse("/purchases/bills"), Route::List(EntityKind::Bill));
        assert_eq!(Route::parse("/sales/quotes/new"), Route::New(EntityKind::Quote));
    }

    #[test]
    fn record_routes_round_trip() {
        let id = RecordId("inv-3".to_string());
        for route in [
            Route::Edit(EntityKind::Invoice, id.clone()),
            Route::View(EntityKind::Invoice, id),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
        assert_eq!(
            Route::parse("/purchases/bills/view/bill-1?tab=items"),
            Route::View(EntityKind::Bill, RecordId("bill-1".to_string()))
        );
    }

    #[test]
    fn ids_are_percent_encoded_in_paths() {
        let id = RecordId("100%-paid inv".to_string());
        let route = Route::View(EntityKind::Invoice, id.clone());
        assert_eq!(route.path(), "/sales/invoices/view/100%25-paid%20inv");
        assert_eq!(Route::parse(&route.path()), route);
        let edit = Route::Edit(EntityKind::Invoice, id);
        assert_eq!(Route::parse(&edit.path()), edit);
    }

    #[test]
    fn reserved_segments_are_not_record_ids() {
        assert!(RecordId::parse("new").is_err());
        assert!(RecordId::parse("view").is_err());
        assert_eq!(Route::parse("/purchases/bills/new"), Route::New(EntityKind::Bill));
        assert!(matches!(Route::parse("/purchases/bills/view/new"), Route::NotFound(_)));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/sales/bills"), Route::NotFound("/sales/bills".to_string()));
        assert!(matches!(Route::parse("/purchases/bills/view"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/purchases/bills/a/b/c"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/pricing"), Route::NotFound(_)));
    }
}
