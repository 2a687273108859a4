//! Error types for story validation.

use thiserror::Error;

/// Result type alias for story operations.
pub type Result<T> = std::result::Result<T, StoryError>;

/// Ways a story can disagree with its component's declared props.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoryError {
    /// Story args are not a JSON object.
    #[error("{component}: args must be an object")]
    ArgsNotObject {
        /// Component name
        component: String,
    },

    /// A prop the component does not declare.
    #[error("{component}: unknown prop `{prop}`")]
    UnknownProp {
        /// Component name
        component: String,
        /// Prop path (e.g., `campaign.owner`)
        prop: String,
    },

    /// A required prop is absent or null.
    #[error("{component}: missing required prop `{prop}`")]
    MissingRequiredProp {
        /// Component name
        component: String,
        /// Prop path
        prop: String,
    },

    /// A prop value has the wrong shape.
    #[error("{component}: prop `{prop}` expected {expected}, found {found}")]
    PropTypeMismatch {
        /// Component name
        component: String,
        /// Prop path
        prop: String,
        /// Expected kind
        expected: String,
        /// What was found instead
        found: String,
    },

    /// Two stories in one file share a name.
    #[error("{title}: duplicate story `{story}`")]
    DuplicateStory {
        /// Story file title
        title: String,
        /// Story name
        story: String,
    },
}
