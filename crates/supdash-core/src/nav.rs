//! Navigation menu and its state.
//!
//! Menu open/closed flags, the current selection and the modal on screen
//! are owned by one [`NavState`] and changed only through [`NavAction`]s.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::content::{ContentTree, is_home};
use crate::lookup::find;
use crate::markup::{Fragment, render};
use crate::route::RoutePath;
use crate::types::ContentNode;
use crate::utils::{camel_case, slugify, title_case};

/// Menu key for a module title (`"Tier One Ops"` is `tierOneOps`).
pub fn menu_key(module_title: &str) -> String {
    camel_case(module_title)
}

/// Menu state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Open(String),
    Close(String),
    Toggle(String),
}

/// Open flag per module menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuState {
    open: BTreeMap<String, bool>,
}

impl MenuState {
    /// Every non-Home module, closed.
    pub fn new(tree: &ContentTree) -> Self {
        Self {
            open: tree
                .modules()
                .iter()
                .filter(|module| !is_home(module))
                .map(|module| (menu_key(&module.title), false))
                .collect(),
        }
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open.get(key).copied().unwrap_or(false)
    }

    /// Apply an action. Keys not in the menu are ignored.
    #[must_use]
    pub fn reduce(mut self, action: &MenuAction) -> Self {
        let (key, next) = match action {
            MenuAction::Open(key) => (key, Some(true)),
            MenuAction::Close(key) => (key, Some(false)),
            MenuAction::Toggle(key) => (key, None),
        };

        if let Some(flag) = self.open.get_mut(key.as_str()) {
            *flag = next.unwrap_or(!*flag);
        } else {
            debug!("Ignoring menu action for unknown key '{key}'");
        }
        self
    }
}

/// A menu link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuLink {
    pub label: String,
    pub path: String,
}

/// A section in a module's dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuEntry {
    /// Section without titled subsections.
    Link(MenuLink),
    /// Section whose subsections open in a submenu.
    Group { label: String, links: Vec<MenuLink> },
}

/// One top-level dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleMenu {
    pub key: String,
    pub label: String,
    pub entries: Vec<MenuEntry>,
}

/// The navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub modules: Vec<ModuleMenu>,
}

impl Menu {
    pub fn from_tree(tree: &ContentTree) -> Self {
        let modules = tree
            .modules()
            .iter()
            .filter(|module| !is_home(module) && !module.children.is_empty())
            .map(|module| ModuleMenu {
                key: menu_key(&module.title),
                label: module.title.clone(),
                entries: module
                    .titled_children()
                    .map(|section| section_entry(module, section))
                    .collect(),
            })
            .collect();

        Self { modules }
    }
}

fn section_entry(module: &ContentNode, section: &ContentNode) -> MenuEntry {
    let section_path = format!("/{}/{}", slugify(&module.title), slugify(&section.title));
    let links: Vec<MenuLink> = section
        .titled_children()
        .map(|sub| MenuLink {
            label: sub.title.clone(),
            path: format!("{section_path}/{}", slugify(&sub.title)),
        })
        .collect();

    if links.is_empty() {
        MenuEntry::Link(MenuLink {
            label: section.title.clone(),
            path: section_path,
        })
    } else {
        MenuEntry::Group {
            label: section.title.clone(),
            links,
        }
    }
}

/// What a menu click does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClickOutcome {
    pub modal: bool,
    pub navigate: bool,
}

/// Decide a click on `node`.
///
/// | modal | mult  | outcome             |
/// |-------|-------|---------------------|
/// | false | any   | navigate            |
/// | true  | false | modal only          |
/// | true  | true  | modal and navigate  |
pub const fn activate(node: &ContentNode) -> ClickOutcome {
    ClickOutcome {
        modal: node.modal,
        navigate: !node.modal || node.mult,
    }
}

/// Contents of the interstitial modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalContent {
    pub title: Vec<Fragment>,
    pub info: Vec<Fragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Fragment>>,
}

impl ModalContent {
    pub fn for_node(node: &ContentNode) -> Self {
        Self {
            title: render(&node.title),
            info: node.info.as_deref().map(render).unwrap_or_default(),
            notes: node
                .notes
                .as_deref()
                .map(render)
                .filter(|notes| !notes.is_empty()),
        }
    }
}

/// Labels for the current location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub module: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
}

impl Selection {
    pub fn home() -> Self {
        Self {
            module: crate::content::HOME_TITLE.to_string(),
            section: None,
            subsection: None,
        }
    }

    /// Readable labels from a path: hyphens become spaces and every word is
    /// capitalized.
    pub fn from_path(path: &str) -> Self {
        let mut parts = path.split('/').filter(|part| !part.is_empty());
        let Some(module) = parts.next() else {
            return Self::home();
        };

        Self {
            module: title_case(module),
            section: parts.next().map(title_case),
            subsection: parts.next().map(title_case),
        }
    }

    /// Breadcrumb-style label, e.g. `Teams > Tier 1`.
    pub fn label(&self) -> String {
        [Some(&self.module), self.section.as_ref(), self.subsection.as_ref()]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

/// Navigation changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Menu(MenuAction),
    /// Location changed without a menu click (initial load, search result).
    Select(String),
    /// A menu entry was clicked.
    Activate(String),
    CloseModal,
}

/// Everything the navigation bar owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavState<'a> {
    #[serde(skip)]
    tree: &'a ContentTree,
    pub menus: MenuState,
    pub selection: Selection,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<ModalContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_click: Option<ClickOutcome>,
}

impl<'a> NavState<'a> {
    pub fn new(tree: &'a ContentTree) -> Self {
        Self {
            tree,
            menus: MenuState::new(tree),
            selection: Selection::home(),
            location: "/".to_string(),
            modal: None,
            last_click: None,
        }
    }

    #[must_use]
    pub fn reduce(mut self, action: NavAction) -> Self {
        match action {
            NavAction::Menu(menu_action) => {
                self.menus = self.menus.reduce(&menu_action);
            },
            NavAction::Select(path) => {
                self.selection = Selection::from_path(&path);
                self.location = normalize_location(&path);
            },
            NavAction::Activate(path) => self.activate(&path),
            NavAction::CloseModal => self.modal = None,
        }
        self
    }

    fn activate(&mut self, path: &str) {
        let Ok(route) = RoutePath::parse(path) else {
            debug!("Ignoring click on malformed path '{path}'");
            return;
        };
        let Some(module) = route.module() else {
            self.selection = Selection::home();
            self.location = "/".to_string();
            self.last_click = Some(ClickOutcome {
                modal: false,
                navigate: true,
            });
            return;
        };
        let Ok(located) = find(self.tree, module, route.section(), route.subsection()) else {
            debug!("Ignoring click on unknown entry '{path}'");
            return;
        };

        let outcome = activate(located.node);
        if outcome.modal {
            self.modal = Some(ModalContent::for_node(located.node));
        }
        if outcome.navigate {
            self.location = route.to_string();
        }
        self.selection = Selection::from_path(path);
        self.last_click = Some(outcome);
    }
}

fn normalize_location(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
