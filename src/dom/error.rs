//! Error types for the element-tree helpers.
//!
//! These are domain failures, not programming mistakes: they travel in an
//! `Effect`'s error channel and surface only when the effect is run. Their
//! `Display` output is the human-readable, operation-prefixed message the
//! failure continuation is expected to log.

/// A failure produced by one of the element-tree helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// No document has been installed for the current thread.
    DocumentUnavailable,
    /// The tag name given to element creation is not valid.
    InvalidTagName(String),
    /// The attribute name given is not valid.
    InvalidAttributeName(String),
    /// Appending the child would corrupt the element tree.
    AppendRejected {
        /// Tag of the rejected child.
        child_tag: String,
    },
}

impl std::fmt::Display for DomError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DocumentUnavailable => write!(
                formatter,
                "doc()\nFailed to retrieve the document because none has been installed for this thread."
            ),
            Self::InvalidTagName(tag) => write!(
                formatter,
                "createElement()\nFailed to create element because the given tag name {tag:?} is not a valid tag name."
            ),
            Self::InvalidAttributeName(name) => write!(
                formatter,
                "setElementAttribute()\nFailed to add attribute to element because the given attribute name {name:?} is not valid."
            ),
            Self::AppendRejected { child_tag } => write!(
                formatter,
                "appendChild()\nFailed to append {child_tag:?} because it would create a cycle in the element tree."
            ),
        }
    }
}

impl std::error::Error for DomError {}
