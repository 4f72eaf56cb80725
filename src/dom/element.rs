//! The in-memory element tree standing in for the render host.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::error::DomError;

/// A shared handle to one element node.
///
/// Cloning the handle shares the node; appending through any handle is
/// visible through all of them, mirroring how render-host nodes behave.
#[derive(Clone, PartialEq)]
pub struct Element {
    node: Rc<RefCell<ElementData>>,
}

#[derive(PartialEq)]
struct ElementData {
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            node: Rc::new(RefCell::new(ElementData {
                tag: tag.to_string(),
                attributes: BTreeMap::new(),
                children: Vec::new(),
            })),
        }
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag(&self) -> String {
        self.node.borrow().tag.clone()
    }

    /// The value of an attribute, when set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.node.borrow().attributes.get(name).cloned()
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.node.borrow().children.len()
    }

    /// Whether the other handle refers to this very node.
    #[must_use]
    pub fn is_same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Whether the other node sits somewhere below this one.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        let data = self.node.borrow();
        data.children
            .iter()
            .any(|child| child.is_same_node(other) || child.contains(other))
    }

    pub(crate) fn set_attribute(&self, name: &str, value: &str) {
        self.node
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub(crate) fn append(&self, child: Self) {
        self.node.borrow_mut().children.push(child);
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.node.borrow();
        formatter
            .debug_struct("Element")
            .field("tag", &data.tag)
            .field("attributes", &data.attributes)
            .field("children", &data.children.len())
            .finish()
    }
}

/// The document owning an element tree.
///
/// Cloning shares the underlying tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    body: Element,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
        }
    }

    /// The root element everything attaches under.
    #[must_use]
    pub fn body(&self) -> Element {
        self.body.clone()
    }

    /// Creates a detached element.
    ///
    /// # Errors
    ///
    /// Fails when the tag name is empty, does not start with a letter, or
    /// contains anything besides ASCII letters, digits and hyphens.
    pub fn create_element(&self, tag: &str) -> Result<Element, DomError> {
        if is_valid_name(tag) {
            Ok(Element::new(tag))
        } else {
            Err(DomError::InvalidTagName(tag.to_string()))
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut characters = name.chars();
    characters
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
        && characters.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

thread_local! {
    static DOCUMENT: RefCell<Option<Document>> = const { RefCell::new(None) };
}

/// Installs the document the `doc()` effect resolves to on this thread.
pub fn install_document(document: Document) {
    DOCUMENT.with(|slot| *slot.borrow_mut() = Some(document));
}

/// Removes the current thread's document, if any.
pub fn remove_document() {
    DOCUMENT.with(|slot| *slot.borrow_mut() = None);
}

pub(crate) fn current_document() -> Option<Document> {
    DOCUMENT.with(|slot| slot.borrow().clone())
}
