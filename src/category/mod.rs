//! Category tree and resolver
//!
//! The taxonomy is a two-level tree: top-level leaves that are selectable on
//! their own, and groups whose children are selectable and share the group's
//! style classes. Lookups go straight to the in-memory tree by id; the
//! selector hands ids back, never labels or class strings.

pub mod taxonomy;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Class carried by every categorizable term
pub const BASE_CLASS: &str = "is-categorizable";

/// Class of a term that has no category assigned
pub const UNCATEGORIZED_CLASS: &str = "is-cat-0";

/// Numeric category identifier (0 = uncategorized)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl CategoryId {
    pub const UNCATEGORIZED: CategoryId = CategoryId(0);

    pub fn is_uncategorized(self) -> bool {
        self == Self::UNCATEGORIZED
    }
}

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Ids coming from UI surfaces are strings; compare by value, so `"03"` and
/// `" 3 "` both mean 3.
impl FromStr for CategoryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(CategoryId)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A selectable category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub id: CategoryId,
    /// Full display name, e.g. "Podmět"
    pub name: String,
    /// Abbreviation shown above a categorized term, e.g. "Po"
    pub short_name: Option<String>,
}

impl CategoryEntry {
    pub fn new(id: u32, name: &str, short_name: Option<&str>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.to_string(),
            short_name: short_name.map(str::to_string),
        }
    }
}

/// Top-level node of the category tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CategoryNode {
    /// Selectable category with its own style classes
    Leaf {
        entry: CategoryEntry,
        classes: Vec<String>,
    },
    /// Named group; children inherit the group's classes
    Group {
        name: String,
        classes: Vec<String>,
        children: Vec<CategoryEntry>,
    },
}

impl CategoryNode {
    pub fn leaf(id: u32, name: &str, short_name: Option<&str>, classes: &[&str]) -> Self {
        CategoryNode::Leaf {
            entry: CategoryEntry::new(id, name, short_name),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn group(name: &str, classes: &[&str], children: Vec<CategoryEntry>) -> Self {
        CategoryNode::Group {
            name: name.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            children,
        }
    }
}

/// Result of resolving a category id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub short_name: Option<String>,
    pub classes: Vec<String>,
}

impl Resolution {
    /// No label, base classes only
    pub fn uncategorized() -> Self {
        Self {
            short_name: None,
            classes: base_classes(),
        }
    }

    pub fn is_uncategorized(&self) -> bool {
        self.short_name.is_none()
    }
}

/// Classes of an uncategorized term
pub fn base_classes() -> Vec<String> {
    vec![BASE_CLASS.to_string(), UNCATEGORIZED_CLASS.to_string()]
}

/// One row of the selector, flattened from the tree in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub id: CategoryId,
    pub name: String,
    pub short_name: Option<String>,
    pub classes: Vec<String>,
    /// Label of the enclosing group, if any
    pub group: Option<String>,
}

/// Ordered, read-only category taxonomy shared by the selector and all terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTree {
    nodes: Vec<CategoryNode>,
}

impl CategoryTree {
    pub fn new(nodes: Vec<CategoryNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[CategoryNode] {
        &self.nodes
    }

    /// Resolve an id to its short label and classes.
    ///
    /// First match in array order wins. Group children take the group's
    /// classes. Anything without a short name (including id 0 and unknown
    /// ids) resolves to uncategorized.
    pub fn resolve(&self, id: CategoryId) -> Resolution {
        let Some((entry, classes)) = self.lookup(id) else {
            return Resolution::uncategorized();
        };

        let Some(short_name) = entry.short_name.clone() else {
            return Resolution::uncategorized();
        };

        let mut resolved = vec![BASE_CLASS.to_string()];
        if classes.is_empty() {
            resolved.push(UNCATEGORIZED_CLASS.to_string());
        } else {
            resolved.extend(classes.iter().cloned());
        }

        Resolution {
            short_name: Some(short_name),
            classes: resolved,
        }
    }

    /// Resolve an id given as text; unparsable input means uncategorized
    pub fn resolve_str(&self, id: &str) -> Resolution {
        match id.parse::<CategoryId>() {
            Ok(id) => self.resolve(id),
            Err(_) => {
                tracing::debug!("Ignoring non-numeric category id {:?}", id);
                Resolution::uncategorized()
            }
        }
    }

    /// Find the entry for an id
    pub fn find(&self, id: CategoryId) -> Option<&CategoryEntry> {
        self.lookup(id).map(|(entry, _)| entry)
    }

    /// Flatten the tree into selector rows, preserving order
    pub fn options(&self) -> Vec<SelectorOption> {
        let mut options = Vec::new();
        for node in &self.nodes {
            match node {
                CategoryNode::Leaf { entry, classes } => options.push(SelectorOption {
                    id: entry.id,
                    name: entry.name.clone(),
                    short_name: entry.short_name.clone(),
                    classes: classes.clone(),
                    group: None,
                }),
                CategoryNode::Group {
                    name,
                    classes,
                    children,
                } => {
                    for child in children {
                        options.push(SelectorOption {
                            id: child.id,
                            name: child.name.clone(),
                            short_name: child.short_name.clone(),
                            classes: classes.clone(),
                            group: Some(name.clone()),
                        });
                    }
                }
            }
        }
        options
    }

    fn lookup(&self, id: CategoryId) -> Option<(&CategoryEntry, &[String])> {
        for node in &self.nodes {
            match node {
                CategoryNode::Group {
                    classes, children, ..
                } => {
                    if let Some(child) = children.iter().find(|c| c.id == id) {
                        return Some((child, classes));
                    }
                }
                CategoryNode::Leaf { entry, classes } if entry.id == id => {
                    return Some((entry, classes));
                }
                CategoryNode::Leaf { .. } => {}
            }
        }
        None
    }
}

impl Default for CategoryTree {
    fn default() -> Self {
        taxonomy::czech()
    }
}
