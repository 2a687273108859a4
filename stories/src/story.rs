//! Story files: a component binding plus named example prop bags.

use std::collections::HashSet;

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::component::{ComponentSpec, validate_args};
use crate::error::{Result, StoryError};

/// Default export of a story file.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryMeta {
    /// Sidebar title, `/`-separated (e.g., `Campaigns/CampaignForm`).
    pub title: &'static str,
    /// Component the stories render.
    pub component: &'static ComponentSpec,
    /// Display parameters for the visual-testing tool (layout etc.).
    pub parameters: Value,
    /// Args shared by every story in the file. `Value::Null` for none.
    pub args: Value,
}

/// One named variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    /// Export name (e.g., `WithCampaigns`).
    pub name: &'static str,
    /// Props for this variant, merged over [`StoryMeta::args`].
    pub args: Value,
}

impl Story {
    /// Create a story.
    #[must_use]
    pub const fn new(name: &'static str, args: Value) -> Self {
        Self { name, args }
    }
}

/// A story file: meta plus its variants.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryFile {
    /// Default export.
    pub meta: StoryMeta,
    /// Named exports, in declaration order.
    pub stories: Vec<Story>,
}

impl StoryFile {
    /// Args a story actually renders with: meta args overlaid by story args.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::ArgsNotObject`] if either side is neither an
    /// object nor null.
    pub fn resolved_args(&self, story: &Story) -> Result<Value> {
        let mut merged = self.object_or_empty(&self.meta.args)?;
        merged.extend(self.object_or_empty(&story.args)?);
        Ok(Value::Object(merged))
    }

    /// Stable story id, as the visual-testing tool derives it.
    #[must_use]
    pub fn story_id(&self, story: &Story) -> String {
        format!(
            "{}--{}",
            sanitize(self.meta.title),
            sanitize(&split_words(story.name))
        )
    }

    fn object_or_empty(&self, value: &Value) -> Result<Map<String, Value>> {
        match value {
            Value::Null => Ok(Map::new()),
            Value::Object(map) => Ok(map.clone()),
            _ => Err(StoryError::ArgsNotObject {
                component: self.meta.component.name.to_string(),
            }),
        }
    }
}

/// Check a story file: unique story names, and every story's resolved args
/// satisfy the component's declared props.
///
/// # Errors
///
/// Returns the first [`StoryError`] found.
pub fn validate(file: &StoryFile) -> Result<()> {
    let mut seen = HashSet::new();

    for story in &file.stories {
        if !seen.insert(story.name) {
            return Err(StoryError::DuplicateStory {
                title: file.meta.title.to_string(),
                story: story.name.to_string(),
            });
        }

        let args = file.resolved_args(story)?;
        validate_args(file.meta.component, &args)?;
        debug!(title = file.meta.title, story = story.name, "story args valid");
    }

    Ok(())
}

/// JSON manifest of story files for the visual-testing tool.
///
/// Story args are emitted resolved, so each variant is self-contained.
///
/// # Errors
///
/// Returns [`StoryError::ArgsNotObject`] if a story's args cannot be merged
/// with its file's meta args.
pub fn manifest(files: &[StoryFile]) -> Result<Value> {
    let stories = files
        .iter()
        .map(|file| {
            let variants = file
                .stories
                .iter()
                .map(|story| {
                    Ok(json!({
                        "id": file.story_id(story),
                        "name": story.name,
                        "args": file.resolved_args(story)?,
                    }))
                })
                .collect::<Result<Vec<Value>>>()?;

            Ok(json!({
                "title": file.meta.title,
                "component": file.meta.component.name,
                "importPath": file.meta.component.import_path,
                "parameters": file.meta.parameters,
                "variants": variants,
            }))
        })
        .collect::<Result<Vec<Value>>>()?;

    Ok(json!({ "stories": stories }))
}

/// `WithCampaigns` -> `With Campaigns`.
fn split_words(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_uppercase() && prev_lower {
            out.push(' ');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.push(c);
    }
    out
}

/// Lowercase, with every run of non-alphanumerics collapsed to one `-`.
fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
