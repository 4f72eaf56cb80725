//! Element-tree helpers built on the `Effect` error channel.
//!
//! The rendering layer's escape hatch into imperative tree manipulation.
//! Every helper describes its work as an [`Effect`]: building the effect
//! performs nothing, and failures (no document installed, a bad tag or
//! attribute name, an append that would corrupt the tree) are carried as
//! [`DomError`] values for the caller's failure continuation to log. Under
//! normal conditions nothing here panics.
//!
//! # Examples
//!
//! ```rust
//! use dirsync_console::dom::{Document, create_element, install_document, remove_document};
//!
//! // Describing the work does not require a document...
//! let effect = create_element("div");
//!
//! // ...only running it does.
//! install_document(Document::new());
//! let element = effect.fork(|error| Err(error.to_string()), Ok).unwrap();
//! assert_eq!(element.tag(), "div");
//! remove_document();
//! ```

mod element;
mod error;

pub use element::{Document, Element, install_document, remove_document};
pub use error::DomError;

use crate::effect::Effect;
use element::{current_document, is_valid_name};

/// The current thread's document.
///
/// Fails with [`DomError::DocumentUnavailable`] when none has been
/// installed.
#[must_use]
pub fn doc() -> Effect<Document, DomError> {
    Effect::new(|| current_document().ok_or(DomError::DocumentUnavailable))
}

/// Creates a detached element with the given tag.
///
/// Resolves the document first, then validates the tag name.
#[must_use]
pub fn create_element(tag: &str) -> Effect<Element, DomError> {
    let tag = tag.to_string();
    doc().chain(move |document| Effect::new(move || document.create_element(&tag)))
}

/// Appends `child` under `parent`, yielding the parent.
///
/// Fails when the child is the parent itself or already one of its
/// ancestors, which would create a cycle in the tree.
#[must_use]
pub fn append_child(parent: &Element, child: &Element) -> Effect<Element, DomError> {
    let parent = parent.clone();
    let child = child.clone();
    Effect::new(move || {
        if parent.is_same_node(&child) || child.contains(&parent) {
            return Err(DomError::AppendRejected {
                child_tag: child.tag(),
            });
        }
        parent.append(child);
        Ok(parent)
    })
}

/// Sets an attribute on the element, yielding the element.
///
/// Fails when the attribute name is empty or not a plain ASCII name.
#[must_use]
pub fn set_element_attribute(name: &str, value: &str, element: &Element) -> Effect<Element, DomError> {
    let name = name.to_string();
    let value = value.to_string();
    let element = element.clone();
    Effect::new(move || {
        if !is_valid_name(&name) {
            return Err(DomError::InvalidAttributeName(name));
        }
        element.set_attribute(&name, &value);
        Ok(element)
    })
}
