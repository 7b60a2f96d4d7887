//! Navigation model for the app shell: sidebar groups, active state and
//! breadcrumbs. Pure data, no rendering.

use tallybook_core::{EntityKind, Route, Section};

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavGroup {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

/// Sidebar: dashboard on its own, then one group per section.
pub fn nav_groups() -> Vec<NavGroup> {
    let mut groups = vec![NavGroup {
        title: "Overview",
        items: vec![NavItem {
            label: "Dashboard",
            route: Route::Dashboard,
        }],
    }];
    for section in [Section::Purchases, Section::Sales] {
        groups.push(NavGroup {
            title: section.title(),
            items: section
                .kinds()
                .into_iter()
                .map(|kind| NavItem {
                    label: kind.title(),
                    route: Route::List(kind),
                })
                .collect(),
        });
    }
    groups
}

/// A sidebar item stays highlighted on every page of its kind.
pub fn is_active(item: &Route, current: &Route) -> bool {
    match (item.kind(), current.kind()) {
        (Some(a), Some(b)) => a == b,
        _ => item == current,
    }
}

/// Trail shown above the page title. The last crumb has no link.
pub fn breadcrumbs(route: &Route) -> Vec<(String, Option<Route>)> {
    let Some(kind) = route.kind() else {
        return vec![(page_title(route), None)];
    };
    let mut crumbs = vec![
        (kind.section().title().to_string(), None),
        (kind.title().to_string(), Some(Route::List(kind))),
    ];
    match route {
        Route::List(_) => {
            crumbs[1].1 = None;
        }
        Route::New(_) => crumbs.push((format!("New {}", kind.singular()), None)),
        Route::Edit(_, id) => crumbs.push((format!("Edit {}", id), None)),
        Route::View(_, id) => crumbs.push((id.to_string(), None)),
        _ => {}
    }
    crumbs
}

pub fn page_title(route: &Route) -> String {
    match route {
        Route::Home => "Tallybook".to_string(),
        Route::Login => "Sign in".to_string(),
        Route::Signup => "Create account".to_string(),
        Route::Dashboard => "Dashboard".to_string(),
        Route::List(kind) => kind.title().to_string(),
        Route::New(kind) => format!("New {}", kind.singular()),
        Route::Edit(kind, _) => format!("Edit {}", kind.singular()),
        Route::View(kind, _) => kind.singular().to_string(),
        Route::NotFound(_) => "Page not found".to_string(),
    }
}

/// Delete confirmation text for a list row.
pub fn delete_prompt(kind: EntityKind, number: &str) -> String {
    format!("Delete {} {}? This cannot be undone.", kind.singular().to_lowercase(), number)
}
