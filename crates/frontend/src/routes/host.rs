//! The document surface the router writes to.
//!
//! `DomHost` implements it against the live page; tests use `MemoryHost`.

/// One navigation link in the page shell.
pub trait NavLink {
    fn href(&self) -> Option<String>;
    fn add_classes(&self, classes: &[String]);
    fn remove_classes(&self, classes: &[String]);
}

pub trait ShellHost {
    type Link: NavLink;

    /// Path component of the current location.
    fn current_path(&self) -> String;

    /// Pushes one history entry for `path` without reloading the document.
    fn push_history(&self, path: &str);

    /// Navigation links as currently rendered, queried fresh on each call.
    fn nav_links(&self) -> Vec<Self::Link>;

    /// Returns `false` when the page has no breadcrumb element.
    fn set_breadcrumb(&self, title: &str) -> bool;

    /// Replaces the whole content container. Returns `false` when the
    /// container is missing.
    fn set_content(&self, markup: &str) -> bool;

    /// Turns icon placeholders in the freshly rendered content into glyphs.
    fn materialize_icons(&self);
}
