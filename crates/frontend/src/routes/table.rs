//! Route table: path → (title, view producer).
//!
//! Titles and producers live in one entry so the breadcrumb text can never
//! drift away from the registered views.

use std::collections::HashMap;

/// Zero-argument function producing the markup of one page.
pub type ViewProducer = fn() -> String;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route path must be absolute: '{0}'")]
    InvalidPath(String),
    #[error("route path registered twice: '{0}'")]
    DuplicatePath(String),
    #[error("alias '{alias}' points to unregistered path '{target}'")]
    UnknownAliasTarget { alias: String, target: String },
    #[error("default path '{0}' is not registered")]
    MissingDefault(String),
}

#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub title: String,
    pub producer: ViewProducer,
}

/// How a requested path was matched against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Exact,
    Alias,
    Fallback,
}

/// Result of looking a path up. `path` is the key whose entry was used and
/// may differ from `requested` for aliases and fallbacks.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub requested: String,
    pub path: String,
    pub matched: RouteMatch,
    pub title: String,
    pub producer: ViewProducer,
}

impl Resolution {
    pub fn is_fallback(&self) -> bool {
        self.matched == RouteMatch::Fallback
    }

    /// Whether a navigation link pointing at `href` should be shown as active.
    ///
    /// A fallback never activates the default page's link.
    pub fn activates(&self, href: &str) -> bool {
        href == self.requested || (self.matched == RouteMatch::Alias && href == self.path)
    }

    pub fn render(&self) -> String {
        (self.producer)()
    }
}

/// Immutable route configuration handed to a `Router`.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: HashMap<String, RouteEntry>,
    aliases: HashMap<String, String>,
    default_path: String,
}

impl RouteTable {
    pub fn builder(default_path: &str) -> RouteTableBuilder {
        RouteTableBuilder {
            default_path: default_path.to_string(),
            entries: Vec::new(),
            aliases: Vec::new(),
        }
    }

    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    pub fn get(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path) || self.aliases.contains_key(path)
    }

    /// Registered canonical paths, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Looks `path` up, falling back to the default entry on a miss.
    pub fn resolve(&self, path: &str) -> Resolution {
        let (actual, matched) = if self.entries.contains_key(path) {
            (path, RouteMatch::Exact)
        } else if let Some(target) = self.aliases.get(path) {
            (target.as_str(), RouteMatch::Alias)
        } else {
            (self.default_path.as_str(), RouteMatch::Fallback)
        };

        // builder guarantees every alias target and the default are present
        let entry = &self.entries[actual];
        Resolution {
            requested: path.to_string(),
            path: actual.to_string(),
            matched,
            title: entry.title.clone(),
            producer: entry.producer,
        }
    }
}

pub struct RouteTableBuilder {
    default_path: String,
    entries: Vec<(String, RouteEntry)>,
    aliases: Vec<(String, String)>,
}

impl RouteTableBuilder {
    pub fn route(mut self, path: &str, title: &str, producer: ViewProducer) -> Self {
        self.entries.push((
            path.to_string(),
            RouteEntry {
                title: title.to_string(),
                producer,
            },
        ));
        self
    }

    pub fn alias(mut self, alias: &str, target: &str) -> Self {
        self.aliases.push((alias.to_string(), target.to_string()));
        self
    }

    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        let mut entries = HashMap::with_capacity(self.entries.len());
        for (path, entry) in self.entries {
            check_path(&path)?;
            if entries.contains_key(&path) {
                return Err(RouteTableError::DuplicatePath(path));
            }
            entries.insert(path, entry);
        }

        let mut aliases = HashMap::with_capacity(self.aliases.len());
        for (alias, target) in self.aliases {
            check_path(&alias)?;
            if entries.contains_key(&alias) || aliases.contains_key(&alias) {
                return Err(RouteTableError::DuplicatePath(alias));
            }
            if !entries.contains_key(&target) {
                return Err(RouteTableError::UnknownAliasTarget { alias, target });
            }
            aliases.insert(alias, target);
        }

        if !entries.contains_key(&self.default_path) {
            return Err(RouteTableError::MissingDefault(self.default_path));
        }

        Ok(RouteTable {
            entries,
            aliases,
            default_path: self.default_path,
        })
    }
}

fn check_path(path: &str) -> Result<(), RouteTableError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(RouteTableError::InvalidPath(path.to_string()))
    }
}
