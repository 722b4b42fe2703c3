//! History stack and view dispatch.
//!
//! # Responsibilities
//! - Keep the stack of visited locations and the current position
//! - Resolve each navigation against the shared route table
//! - Hand every outcome to the [`ViewHost`]
//!
//! # Design Decisions
//! - Entries store browser hrefs (base included); the base is stripped on resolve
//! - Every navigation gets a fresh ID, including back/forward
//! - Push and replace to the current location (same route, params, query and
//!   fragment) are reported as `Duplicated`

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::schema::{RouterConfig, ViewId};
use crate::history::base::Base;
use crate::history::location::{Location, LocationError};
use crate::observability::metrics;
use crate::routing::{Params, Query, RouteError, RouteTable};

/// Unique ID of one navigation, carried by its log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationId(Uuid);

impl NavigationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NavigationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NavigationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One position in the history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: NavigationId,
    href: String,
    key: LocationKey,
}

impl Entry {
    /// ID of the navigation that created the entry.
    pub fn id(&self) -> NavigationId {
        self.id
    }

    /// Browser href, base included.
    pub fn href(&self) -> &str {
        &self.href
    }
}

/// What a location resolves to, used to detect navigation to the current location.
///
/// Two hrefs are the same location when they match the same route with the same
/// params, query and fragment, e.g. `/config`, `/config/` and `/CONFIG` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LocationKey {
    Route {
        name: String,
        params: Params,
        query: Query,
        fragment: Option<String>,
    },
    Unmatched {
        path: String,
        query: Option<String>,
        fragment: Option<String>,
    },
}

/// A located href.
enum Target<V> {
    Matched {
        name: String,
        view: V,
        params: Params,
        query: Query,
        fragment: Option<String>,
    },
    Unmatched {
        path: String,
        query: Option<String>,
        fragment: Option<String>,
    },
}

impl<V> Target<V> {
    fn unmatched(path: String, location: &Location) -> Self {
        Target::Unmatched {
            path,
            query: location.query.clone(),
            fragment: location.fragment.clone(),
        }
    }

    fn key(&self) -> LocationKey {
        match self {
            Target::Matched {
                name,
                params,
                query,
                fragment,
                ..
            } => LocationKey::Route {
                name: name.clone(),
                params: params.clone(),
                query: query.clone(),
                fragment: fragment.clone(),
            },
            Target::Unmatched {
                path,
                query,
                fragment,
            } => LocationKey::Unmatched {
                path: path.clone(),
                query: query.clone(),
                fragment: fragment.clone(),
            },
        }
    }
}

/// Result of a navigation, handed to the host and returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<V> {
    /// A route matched.
    Matched {
        id: NavigationId,
        route: String,
        view: V,
        params: Params,
        query: Query,
    },
    /// Nothing matched; the configured fallback view applies.
    Fallback { id: NavigationId, path: String, view: V },
    /// Nothing matched and no fallback is configured.
    NotFound { id: NavigationId, path: String },
    /// The target is the current location; nothing changed.
    Duplicated { href: String },
}

impl<V> Outcome<V> {
    /// The view to show, if any.
    pub fn view(&self) -> Option<&V> {
        match self {
            Outcome::Matched { view, .. } | Outcome::Fallback { view, .. } => Some(view),
            Outcome::NotFound { .. } | Outcome::Duplicated { .. } => None,
        }
    }

    /// Name of the matched route.
    pub fn route(&self) -> Option<&str> {
        match self {
            Outcome::Matched { route, .. } => Some(route.as_str()),
            _ => None,
        }
    }

    pub fn params(&self) -> Option<&Params> {
        match self {
            Outcome::Matched { params, .. } => Some(params),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<NavigationId> {
        match self {
            Outcome::Matched { id, .. }
            | Outcome::Fallback { id, .. }
            | Outcome::NotFound { id, .. } => Some(*id),
            Outcome::Duplicated { .. } => None,
        }
    }
}

/// Receives navigation outcomes, e.g. to mount the matching view.
pub trait ViewHost<V> {
    fn render(&mut self, outcome: &Outcome<V>);
}

/// A host that ignores every outcome.
impl<V> ViewHost<V> for () {
    fn render(&mut self, _outcome: &Outcome<V>) {}
}

impl<V, F> ViewHost<V> for F
where
    F: FnMut(&Outcome<V>),
{
    fn render(&mut self, outcome: &Outcome<V>) {
        self(outcome)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Push,
    Replace,
    Traverse,
}

impl Kind {
    fn as_str(self) -> &'static str {
        match self {
            Kind::Push => "push",
            Kind::Replace => "replace",
            Kind::Traverse => "traverse",
        }
    }
}

/// History-mode navigator over a shared route table.
pub struct Navigator<V, H> {
    table: Arc<RouteTable<V>>,
    base: Base,
    fallback: Option<V>,
    entries: Vec<Entry>,
    cursor: usize,
    host: H,
}

impl<V: Clone, H: ViewHost<V>> Navigator<V, H> {
    pub fn new(table: Arc<RouteTable<V>>, host: H) -> Self {
        Self {
            table,
            base: Base::root(),
            fallback: None,
            entries: Vec::new(),
            cursor: 0,
            host,
        }
    }

    pub fn with_base(mut self, base: Base) -> Self {
        self.base = base;
        self
    }

    /// View to show for paths no route matches.
    pub fn with_fallback(mut self, view: V) -> Self {
        self.fallback = Some(view);
        self
    }

    /// Navigate to an application path, adding an entry.
    pub fn push(&mut self, path: &str) -> Outcome<V> {
        let href = self.base.href(path);
        self.navigate(href, Kind::Push)
    }

    /// Navigate to an application path, overwriting the current entry.
    pub fn replace(&mut self, path: &str) -> Outcome<V> {
        let href = self.base.href(path);
        self.navigate(href, Kind::Replace)
    }

    /// Push the path of the route called `name`.
    pub fn push_named(&mut self, name: &str, params: &Params) -> Result<Outcome<V>, RouteError> {
        let path = self.table.href(name, params)?;
        Ok(self.push(&path))
    }

    /// Sync with the browser's location (absolute URL or base-prefixed path).
    ///
    /// Used on startup; overwrites the current entry.
    pub fn load(&mut self, location: &str) -> Result<Outcome<V>, LocationError> {
        let location = Location::parse(location)?;
        let href = location.with_path(&location.path);
        Ok(self.navigate(href, Kind::Replace))
    }

    pub fn back(&mut self) -> Option<Outcome<V>> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<Outcome<V>> {
        self.go(1)
    }

    /// Move `delta` entries through the stack. `go(0)` re-resolves the current entry.
    ///
    /// Returns `None` if the target lies outside the stack.
    pub fn go(&mut self, delta: isize) -> Option<Outcome<V>> {
        if self.entries.is_empty() {
            return None;
        }
        let target = self.cursor.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.cursor = target;
        let href = self.entries[target].href.clone();
        let target = self.locate(&href);
        Some(self.settle(NavigationId::new(), &href, target, Kind::Traverse))
    }

    /// The current entry, if any navigation happened.
    pub fn current(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn table(&self) -> &Arc<RouteTable<V>> {
        &self.table
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn navigate(&mut self, href: String, kind: Kind) -> Outcome<V> {
        let target = self.locate(&href);
        let key = target.key();
        if self.current().is_some_and(|entry| entry.key == key) {
            metrics::record_navigation("duplicated");
            tracing::debug!(href = %href, kind = kind.as_str(), "already at location");
            return Outcome::Duplicated { href };
        }

        let id = NavigationId::new();
        let entry = Entry {
            id,
            href: href.clone(),
            key,
        };
        if self.entries.is_empty() {
            self.entries.push(entry);
            self.cursor = 0;
        } else if kind == Kind::Replace {
            self.entries[self.cursor] = entry;
        } else {
            self.entries.truncate(self.cursor + 1);
            self.entries.push(entry);
            self.cursor = self.entries.len() - 1;
        }

        self.settle(id, &href, target, kind)
    }

    /// Resolve an href (base included) without touching the stack.
    fn locate(&self, href: &str) -> Target<V> {
        let location = Location::from_path(href);
        let Some(path) = self.base.strip(&location.path) else {
            return Target::unmatched(location.path.clone(), &location);
        };
        match self.table.resolve(&location.with_path(path)) {
            Ok(resolution) => Target::Matched {
                name: resolution.name().to_string(),
                view: resolution.view().clone(),
                params: resolution.params,
                query: resolution.query,
                fragment: resolution.fragment,
            },
            Err(not_found) => Target::unmatched(not_found.path, &location),
        }
    }

    fn settle(&mut self, id: NavigationId, href: &str, target: Target<V>, kind: Kind) -> Outcome<V> {
        let span = tracing::debug_span!("navigation", id = %id, kind = kind.as_str(), href);
        let _enter = span.enter();
        metrics::record_navigation(kind.as_str());

        let outcome = match target {
            Target::Matched {
                name,
                view,
                params,
                query,
                ..
            } => {
                metrics::record_resolution(&name);
                tracing::debug!(route = %name, "route matched");
                Outcome::Matched {
                    id,
                    route: name,
                    view,
                    params,
                    query,
                }
            }
            Target::Unmatched { path, .. } => self.unmatched(id, path),
        };

        self.host.render(&outcome);
        outcome
    }

    fn unmatched(&self, id: NavigationId, path: String) -> Outcome<V> {
        metrics::record_not_found();
        match &self.fallback {
            Some(view) => {
                tracing::debug!(path = %path, "no route matched, using fallback view");
                Outcome::Fallback {
                    id,
                    path,
                    view: view.clone(),
                }
            }
            None => {
                tracing::warn!(path = %path, "no route matched");
                Outcome::NotFound { id, path }
            }
        }
    }
}

impl<H: ViewHost<ViewId>> Navigator<ViewId, H> {
    /// Build a navigator from configuration: routes, base and fallback view.
    pub fn from_config(config: &RouterConfig, host: H) -> Result<Self, RouteError> {
        let table = Arc::new(config.route_table()?);
        let navigator = Navigator::new(table, host).with_base(Base::new(&config.history.base));
        Ok(match &config.fallback.view {
            Some(view) => navigator.with_fallback(view.clone()),
            None => navigator,
        })
    }
}

impl<V: fmt::Debug, H> fmt::Debug for Navigator<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("base", &self.base)
            .field("routes", &self.table.len())
            .field("fallback", &self.fallback)
            .field("entries", &self.entries)
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        rendered: Vec<Option<String>>,
    }

    impl ViewHost<ViewId> for Recorder {
        fn render(&mut self, outcome: &Outcome<ViewId>) {
            self.rendered
                .push(outcome.view().map(|v| v.as_str().to_string()));
        }
    }

    fn navigator() -> Navigator<ViewId, Recorder> {
        Navigator::from_config(&RouterConfig::default(), Recorder::default()).unwrap()
    }

    #[test]
    fn test_push_records_entries() {
        let mut nav = navigator();
        assert!(nav.current().is_none());

        let outcome = nav.push("/project/7");
        assert_eq!(outcome.route(), Some("project"));
        assert_eq!(outcome.params().and_then(|p| p.get("id")), Some("7"));
        assert_eq!(nav.current().map(Entry::href), Some("/project/7"));

        nav.push("/config");
        assert_eq!(nav.entries().len(), 2);
        assert_eq!(
            nav.host().rendered,
            vec![Some("ProjectView".into()), Some("ConfigView".into())]
        );
    }

    #[test]
    fn test_back_forward() {
        let mut nav = navigator();
        nav.push("/");
        nav.push("/config");
        nav.push("/project/1");

        assert_eq!(nav.back().unwrap().route(), Some("config"));
        assert_eq!(nav.back().unwrap().route(), Some("home"));
        assert!(nav.back().is_none());
        assert_eq!(nav.forward().unwrap().route(), Some("config"));
        assert_eq!(nav.go(1).unwrap().route(), Some("project"));
        assert!(nav.forward().is_none());
        assert!(nav.go(-5).is_none());
        assert_eq!(nav.current().map(Entry::href), Some("/project/1"));
    }

    #[test]
    fn test_push_after_back_drops_forward_entries() {
        let mut nav = navigator();
        nav.push("/");
        nav.push("/config");
        nav.back();
        nav.push("/project/2");

        let hrefs: Vec<&str> = nav.entries().iter().map(Entry::href).collect();
        assert_eq!(hrefs, vec!["/", "/project/2"]);
        assert!(nav.forward().is_none());
    }

    #[test]
    fn test_replace_overwrites_current() {
        let mut nav = navigator();
        nav.push("/");
        nav.push("/config");
        nav.replace("/project/3");

        let hrefs: Vec<&str> = nav.entries().iter().map(Entry::href).collect();
        assert_eq!(hrefs, vec!["/", "/project/3"]);
    }

    #[test]
    fn test_duplicate_navigation() {
        let mut nav = navigator();
        nav.push("/config");
        let outcome = nav.push("/config");
        assert_eq!(
            outcome,
            Outcome::Duplicated {
                href: "/config".into()
            }
        );
        assert_eq!(nav.entries().len(), 1);
        assert_eq!(nav.host().rendered.len(), 1);

        // A different query string is a different location.
        assert_eq!(nav.push("/config?tab=a").route(), Some("config"));
        assert_eq!(nav.entries().len(), 2);
    }

    #[test]
    fn test_same_location_is_duplicated() {
        let mut nav = navigator();
        nav.push("/config");

        assert_eq!(
            nav.push("/config/"),
            Outcome::Duplicated {
                href: "/config/".into()
            }
        );
        assert_eq!(
            nav.replace("/CONFIG"),
            Outcome::Duplicated {
                href: "/CONFIG".into()
            }
        );
        assert_eq!(nav.entries().len(), 1);
        assert_eq!(nav.current().map(Entry::href), Some("/config"));
        assert_eq!(nav.host().rendered, vec![Some("ConfigView".into())]);

        // Same route, different params.
        nav.push("/project/1");
        assert!(matches!(nav.push("/project/1/"), Outcome::Duplicated { .. }));
        assert_eq!(nav.push("/project/2").route(), Some("project"));
        assert_eq!(nav.entries().len(), 3);
    }

    #[test]
    fn test_unmatched_location_is_duplicated() {
        let mut nav = navigator();
        nav.push("/missing");
        assert!(matches!(nav.push("/missing/"), Outcome::Duplicated { .. }));
        assert!(matches!(nav.push("/missing#top"), Outcome::NotFound { .. }));
        assert_eq!(nav.entries().len(), 2);
    }

    #[test]
    fn test_metrics_emitted() {
        use metrics_util::debugging::{DebugValue, DebuggingRecorder};

        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();
        ::metrics::with_local_recorder(&recorder, || {
            let mut nav = navigator();
            nav.push("/config");
            nav.push("/config/");
            nav.push("/missing");
            nav.back();
        });

        let mut counters: Vec<(String, Vec<(String, String)>, u64)> = snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .filter_map(|(key, _, _, value)| match value {
                DebugValue::Counter(count) => Some((
                    key.key().name().to_string(),
                    key.key()
                        .labels()
                        .map(|l| (l.key().to_string(), l.value().to_string()))
                        .collect(),
                    count,
                )),
                _ => None,
            })
            .collect();
        counters.sort();

        let label = |k: &str, v: &str| vec![(k.to_string(), v.to_string())];
        assert_eq!(
            counters,
            vec![
                ("router_navigations_total".into(), label("kind", "duplicated"), 1),
                ("router_navigations_total".into(), label("kind", "push"), 2),
                ("router_navigations_total".into(), label("kind", "traverse"), 1),
                ("router_not_found_total".into(), vec![], 1),
                ("router_resolutions_total".into(), label("route", "config"), 2),
            ]
        );
    }

    #[test]
    fn test_not_found_without_fallback() {
        let mut nav = navigator();
        let outcome = nav.push("/unknown");
        assert!(matches!(outcome, Outcome::NotFound { ref path, .. } if path == "/unknown"));
        assert_eq!(nav.host().rendered, vec![None]);
        assert_eq!(nav.entries().len(), 1);
    }

    #[test]
    fn test_closure_host() {
        let table = Arc::new(RouteTable::default_table());
        let mut seen = Vec::new();
        {
            let mut nav = Navigator::new(table, |o: &Outcome<ViewId>| {
                seen.push(o.route().map(str::to_string))
            });
            nav.push("/");
            nav.push("/nope");
        }
        assert_eq!(seen, vec![Some("home".to_string()), None]);
    }
}
