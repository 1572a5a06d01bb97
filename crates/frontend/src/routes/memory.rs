//! In-memory `ShellHost` used by the router tests.

use super::host::{NavLink, ShellHost};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

#[derive(Clone)]
pub struct MemoryLink {
    href: Option<String>,
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl NavLink for MemoryLink {
    fn href(&self) -> Option<String> {
        self.href.clone()
    }

    fn add_classes(&self, classes: &[String]) {
        self.classes.borrow_mut().extend(classes.iter().cloned());
    }

    fn remove_classes(&self, classes: &[String]) {
        let mut set = self.classes.borrow_mut();
        for class in classes {
            set.remove(class);
        }
    }
}

/// Browser-like history stack: pushing drops forward entries.
pub struct MemoryHost {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
    links: Vec<MemoryLink>,
    breadcrumb: RefCell<Option<String>>,
    content: RefCell<Option<String>>,
    icon_passes: Cell<usize>,
}

impl MemoryHost {
    pub fn new(location: &str) -> Self {
        Self {
            entries: RefCell::new(vec![location.to_string()]),
            index: Cell::new(0),
            links: Vec::new(),
            breadcrumb: RefCell::new(Some(String::new())),
            content: RefCell::new(Some(String::new())),
            icon_passes: Cell::new(0),
        }
    }

    pub fn with_links(mut self, hrefs: &[&str]) -> Self {
        self.links = hrefs
            .iter()
            .map(|href| MemoryLink {
                href: Some(href.to_string()),
                classes: Rc::default(),
            })
            .collect();
        self
    }

    pub fn with_bare_link(mut self) -> Self {
        self.links.push(MemoryLink {
            href: None,
            classes: Rc::default(),
        });
        self
    }

    pub fn without_breadcrumb(self) -> Self {
        self.breadcrumb.replace(None);
        self
    }

    pub fn without_container(self) -> Self {
        self.content.replace(None);
        self
    }

    /// Steps back one entry, like the browser back button (without firing
    /// `popstate`; callers re-sync the router themselves).
    pub fn back(&self) -> bool {
        let index = self.index.get();
        if index == 0 {
            return false;
        }
        self.index.set(index - 1);
        true
    }

    pub fn history_len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone().unwrap_or_default()
    }

    pub fn breadcrumb(&self) -> Option<String> {
        self.breadcrumb.borrow().clone()
    }

    pub fn icon_passes(&self) -> usize {
        self.icon_passes.get()
    }

    pub fn link_classes(&self, href: &str) -> BTreeSet<String> {
        self.links
            .iter()
            .find(|l| l.href.as_deref() == Some(href))
            .map(|l| l.classes.borrow().clone())
            .unwrap_or_default()
    }

    pub fn bare_link_classes(&self) -> Vec<String> {
        self.links
            .iter()
            .filter(|l| l.href.is_none())
            .flat_map(|l| l.classes.borrow().iter().cloned().collect::<Vec<_>>())
            .collect()
    }

    pub fn active_hrefs(&self) -> Vec<String> {
        self.hrefs_with_class("bg-surface")
    }

    pub fn muted_hrefs(&self) -> Vec<String> {
        self.hrefs_with_class("text-text-muted")
    }

    fn hrefs_with_class(&self, class: &str) -> Vec<String> {
        self.links
            .iter()
            .filter(|l| l.classes.borrow().contains(class))
            .filter_map(|l| l.href.clone())
            .collect()
    }
}

impl ShellHost for MemoryHost {
    type Link = MemoryLink;

    fn current_path(&self) -> String {
        self.entries.borrow()[self.index.get()].clone()
    }

    fn push_history(&self, path: &str) {
        let mut entries = self.entries.borrow_mut();
        entries.truncate(self.index.get() + 1);
        entries.push(path.to_string());
        self.index.set(entries.len() - 1);
    }

    fn nav_links(&self) -> Vec<MemoryLink> {
        self.links.clone()
    }

    fn set_breadcrumb(&self, title: &str) -> bool {
        match self.breadcrumb.borrow_mut().as_mut() {
            Some(text) => {
                *text = title.to_string();
                true
            }
            None => false,
        }
    }

    fn set_content(&self, markup: &str) -> bool {
        match self.content.borrow_mut().as_mut() {
            Some(content) => {
                *content = markup.to_string();
                true
            }
            None => false,
        }
    }

    fn materialize_icons(&self) {
        self.icon_passes.set(self.icon_passes.get() + 1);
    }
}
