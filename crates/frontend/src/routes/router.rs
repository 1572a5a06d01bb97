use super::config::RouterConfig;
use super::host::{NavLink, ShellHost};
use super::table::{Resolution, RouteTable};

/// What a single dispatch did to the document.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub resolution: Resolution,
    pub active_links: usize,
    pub breadcrumb_written: bool,
    pub content_written: bool,
}

/// Maps paths to views and keeps the shell (links, breadcrumb, content)
/// in sync with the current path.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    config: RouterConfig,
}

impl Router {
    pub fn new(table: RouteTable, config: RouterConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        let resolution = self.table.resolve(path);
        if resolution.is_fallback() {
            log::warn!(
                "no route for '{}', rendering '{}'",
                resolution.requested,
                resolution.path
            );
        }
        resolution
    }

    /// Pushes a history entry for `path`, then renders it.
    pub fn navigate<H: ShellHost>(&self, host: &H, path: &str) -> Dispatch {
        host.push_history(path);
        self.resolve_route(host, path)
    }

    /// Renders whatever the current location points at.
    pub fn sync_with_location<H: ShellHost>(&self, host: &H) -> Dispatch {
        let path = host.current_path();
        self.resolve_route(host, &path)
    }

    pub fn resolve_route<H: ShellHost>(&self, host: &H, path: &str) -> Dispatch {
        let resolution = self.resolve(path);

        let active_links = self.reclassify_links(host, &resolution);

        let breadcrumb_written = host.set_breadcrumb(&resolution.title);
        if !breadcrumb_written {
            log::debug!("breadcrumb element not found, skipping");
        }

        let markup = resolution.render();
        let content_written = host.set_content(&markup);
        if !content_written {
            log::warn!(
                "content container '#{}' not found, '{}' not rendered",
                self.config.content_container_id,
                resolution.path
            );
        }

        host.materialize_icons();

        log::debug!(
            "routed '{}' -> '{}' ({:?}), {} active link(s)",
            resolution.requested,
            resolution.path,
            resolution.matched,
            active_links
        );

        Dispatch {
            resolution,
            active_links,
            breadcrumb_written,
            content_written,
        }
    }

    // Full pass over the live links, no diffing against the previous state.
    fn reclassify_links<H: ShellHost>(&self, host: &H, resolution: &Resolution) -> usize {
        let mut active = 0;
        for link in host.nav_links() {
            let is_active = link
                .href()
                .map(|href| resolution.activates(&href))
                .unwrap_or(false);

            if is_active {
                link.add_classes(&self.config.active_classes);
                link.remove_classes(&self.config.muted_classes);
                active += 1;
            } else {
                link.remove_classes(&self.config.active_classes);
                link.add_classes(&self.config.muted_classes);
            }
        }
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::memory::MemoryHost;
    use crate::routes::table::RouteMatch;

    fn view_a() -> String {
        "X".to_string()
    }

    fn view_b() -> String {
        "Y".to_string()
    }

    fn view_dashboard() -> String {
        "<p>dashboard</p>".to_string()
    }

    fn router() -> Router {
        let table = RouteTable::builder("/dashboard")
            .route("/dashboard", "Dashboard", view_dashboard)
            .route("/a", "A", view_a)
            .route("/b", "B", view_b)
            .alias("/", "/dashboard")
            .build()
            .unwrap();
        Router::new(table, RouterConfig::default())
    }

    fn host() -> MemoryHost {
        MemoryHost::new("/").with_links(&["/dashboard", "/a", "/b"])
    }

    #[test]
    fn test_registered_path_renders_its_view() {
        let router = router();
        let host = host();
        for (path, markup) in [("/a", "X"), ("/b", "Y"), ("/dashboard", "<p>dashboard</p>")] {
            let dispatch = router.resolve_route(&host, path);
            assert_eq!(host.content(), markup);
            assert_eq!(dispatch.resolution.matched, RouteMatch::Exact);
            assert!(dispatch.content_written);
        }
    }

    #[test]
    fn test_unknown_path_renders_dashboard() {
        let router = router();
        let host = host();
        let dispatch = router.resolve_route(&host, "/unknown");
        assert_eq!(host.content(), "<p>dashboard</p>");
        assert_eq!(host.breadcrumb().as_deref(), Some("Dashboard"));
        assert!(dispatch.resolution.is_fallback());
        assert_eq!(dispatch.resolution.path, "/dashboard");
    }

    #[test]
    fn test_unknown_path_mutes_every_link() {
        let router = router();
        let host = host();
        let dispatch = router.resolve_route(&host, "/unknown");
        assert_eq!(dispatch.active_links, 0);
        assert!(host.active_hrefs().is_empty());
        assert_eq!(host.muted_hrefs().len(), 3);
    }

    #[test]
    fn test_root_and_dashboard_are_equivalent() {
        let router = router();

        let root_host = host();
        router.resolve_route(&root_host, "/");
        let dashboard_host = host();
        router.resolve_route(&dashboard_host, "/dashboard");

        assert_eq!(root_host.active_hrefs(), vec!["/dashboard".to_string()]);
        assert_eq!(root_host.active_hrefs(), dashboard_host.active_hrefs());
        assert_eq!(root_host.breadcrumb().as_deref(), Some("Dashboard"));
        assert_eq!(root_host.breadcrumb(), dashboard_host.breadcrumb());
        assert_eq!(root_host.content(), dashboard_host.content());
    }

    #[test]
    fn test_exactly_matching_links_are_active() {
        let router = router();
        let host = host();
        for path in ["/dashboard", "/a", "/b"] {
            router.resolve_route(&host, path);
            assert_eq!(host.active_hrefs(), vec![path.to_string()]);
            let muted = host.muted_hrefs();
            assert_eq!(muted.len(), 2);
            assert!(!muted.contains(&path.to_string()));
        }
    }

    #[test]
    fn test_active_and_muted_classes_are_exclusive() {
        let router = router();
        let host = host();
        router.resolve_route(&host, "/a");
        router.resolve_route(&host, "/b");

        let a = host.link_classes("/a");
        assert!(a.contains("text-text-muted"));
        assert!(!a.contains("text-text-main"));
        assert!(!a.contains("bg-surface"));

        let b = host.link_classes("/b");
        assert!(b.contains("text-text-main"));
        assert!(b.contains("bg-surface"));
        assert!(!b.contains("text-text-muted"));
    }

    #[test]
    fn test_link_without_href_is_muted() {
        let router = router();
        let host = MemoryHost::new("/").with_bare_link();
        router.resolve_route(&host, "/a");
        assert_eq!(host.bare_link_classes(), vec!["text-text-muted".to_string()]);
    }

    #[test]
    fn test_missing_breadcrumb_is_tolerated() {
        let router = router();
        let host = host().without_breadcrumb();
        let dispatch = router.resolve_route(&host, "/a");
        assert!(!dispatch.breadcrumb_written);
        assert_eq!(host.content(), "X");
    }

    #[test]
    fn test_missing_container_is_tolerated() {
        let router = router();
        let host = host().without_container();
        let dispatch = router.resolve_route(&host, "/a");
        assert!(!dispatch.content_written);
        assert_eq!(host.breadcrumb().as_deref(), Some("A"));
        assert_eq!(host.icon_passes(), 1);
    }

    #[test]
    fn test_icons_materialized_after_every_render() {
        let router = router();
        let host = host();
        router.resolve_route(&host, "/a");
        router.resolve_route(&host, "/nope");
        router.navigate(&host, "/b");
        assert_eq!(host.icon_passes(), 3);
    }

    #[test]
    fn test_navigate_pushes_one_entry_and_matches_direct_resolution() {
        let router = router();

        let navigated = host();
        let before = navigated.history_len();
        router.navigate(&navigated, "/b");
        assert_eq!(navigated.history_len(), before + 1);
        assert_eq!(navigated.current_path(), "/b");

        let direct = host();
        router.resolve_route(&direct, "/b");
        assert_eq!(navigated.content(), direct.content());
        assert_eq!(navigated.breadcrumb(), direct.breadcrumb());
        assert_eq!(navigated.active_hrefs(), direct.active_hrefs());
    }

    #[test]
    fn test_navigate_does_not_validate_path() {
        let router = router();
        let host = host();
        let dispatch = router.navigate(&host, "/nowhere");
        assert_eq!(host.current_path(), "/nowhere");
        assert_eq!(host.history_len(), 2);
        assert!(dispatch.resolution.is_fallback());
    }

    #[test]
    fn test_back_navigation_restores_previous_view() {
        let router = router();
        let host = MemoryHost::new("/a").with_links(&["/a", "/b"]);

        router.resolve_route(&host, "/a");
        assert_eq!(host.content(), "X");

        let before = host.history_len();
        router.navigate(&host, "/b");
        assert_eq!(host.content(), "Y");
        assert_eq!(host.history_len(), before + 1);

        assert!(host.back());
        router.sync_with_location(&host);
        assert_eq!(host.content(), "X");
        assert_eq!(host.active_hrefs(), vec!["/a".to_string()]);
    }

    #[test]
    fn test_sync_with_location_uses_current_path() {
        let router = router();
        let host = MemoryHost::new("/b").with_links(&["/a", "/b"]);
        let dispatch = router.sync_with_location(&host);
        assert_eq!(dispatch.resolution.requested, "/b");
        assert_eq!(host.content(), "Y");
        assert_eq!(host.history_len(), 1);
    }
}
