//! Declared prop shapes of the campaign UI components.
//!
//! The components themselves live in the frontend; this module only knows
//! their names, import paths and prop contracts, which is enough to check
//! that every story passes props the component accepts.

use serde_json::{Map, Value};

use crate::error::{Result, StoryError};

/// Shape of a single prop value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    /// JSON string.
    String,

    /// JSON number.
    Number,

    /// JSON boolean.
    Bool,

    /// Calendar date (`YYYY-MM-DD`) or RFC 3339 timestamp string.
    Date,

    /// One of a fixed set of strings.
    OneOf(&'static [&'static str]),

    /// Array whose elements all have this kind.
    ArrayOf(&'static PropKind),

    /// Object with these fields.
    Shape(&'static [PropSpec]),

    /// Callback. Stories name the action to log (a string).
    Function,

    /// Anything.
    Any,
}

impl PropKind {
    /// Human-readable description for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Number => "number".to_string(),
            Self::Bool => "boolean".to_string(),
            Self::Date => "date string".to_string(),
            Self::OneOf(options) => format!("one of {}", options.join("|")),
            Self::ArrayOf(inner) => format!("array of {}", inner.describe()),
            Self::Shape(_) => "object".to_string(),
            Self::Function => "action name".to_string(),
            Self::Any => "any".to_string(),
        }
    }
}

/// One declared prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropSpec {
    /// Prop name as the component receives it.
    pub name: &'static str,
    /// Value shape.
    pub kind: PropKind,
    /// Whether the component requires it.
    pub required: bool,
}

impl PropSpec {
    /// A required prop.
    #[must_use]
    pub const fn required(name: &'static str, kind: PropKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// An optional prop.
    #[must_use]
    pub const fn optional(name: &'static str, kind: PropKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// A UI component and its prop contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Component name (e.g., `CampaignForm`).
    pub name: &'static str,
    /// Module the visual-testing tool imports it from.
    pub import_path: &'static str,
    /// Declared props.
    pub props: &'static [PropSpec],
}

impl ComponentSpec {
    /// Look up a declared prop.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&PropSpec> {
        self.props.iter().find(|prop| prop.name == name)
    }
}

/// Check a bag of story args against a component's declared props.
///
/// Unknown props are rejected, required props must be present and non-null,
/// and every value must match its declared kind (recursively for arrays and
/// object shapes).
///
/// # Errors
///
/// Returns the first [`StoryError`] found.
pub fn validate_args(component: &ComponentSpec, args: &Value) -> Result<()> {
    let Value::Object(map) = args else {
        return Err(StoryError::ArgsNotObject {
            component: component.name.to_string(),
        });
    };

    Checker { component }.check_fields(None, component.props, map)
}

struct Checker<'a> {
    component: &'a ComponentSpec,
}

impl Checker<'_> {
    fn check_fields(
        &self,
        parent: Option<&str>,
        specs: &[PropSpec],
        map: &Map<String, Value>,
    ) -> Result<()> {
        for (key, value) in map {
            let path = join_path(parent, key);
            let spec = specs
                .iter()
                .find(|spec| spec.name == key.as_str())
                .ok_or_else(|| StoryError::UnknownProp {
                    component: self.component.name.to_string(),
                    prop: path.clone(),
                })?;

            if !value.is_null() {
                self.check_value(&path, &spec.kind, value)?;
            }
        }

        for spec in specs.iter().filter(|spec| spec.required) {
            if map.get(spec.name).is_none_or(Value::is_null) {
                return Err(StoryError::MissingRequiredProp {
                    component: self.component.name.to_string(),
                    prop: join_path(parent, spec.name),
                });
            }
        }

        Ok(())
    }

    fn check_value(&self, path: &str, kind: &PropKind, value: &Value) -> Result<()> {
        let matches = match (kind, value) {
            (PropKind::Any, _)
            | (PropKind::String | PropKind::Function, Value::String(_))
            | (PropKind::Number, Value::Number(_))
            | (PropKind::Bool, Value::Bool(_)) => true,
            (PropKind::Date, Value::String(s)) => is_date(s),
            (PropKind::OneOf(options), Value::String(s)) => {
                options.iter().any(|option| *option == s.as_str())
            }
            (PropKind::ArrayOf(inner), Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    self.check_value(&format!("{path}[{index}]"), inner, item)?;
                }
                true
            }
            (PropKind::Shape(fields), Value::Object(map)) => {
                self.check_fields(Some(path), fields, map)?;
                true
            }
            _ => false,
        };

        if matches {
            Ok(())
        } else {
            Err(StoryError::PropTypeMismatch {
                component: self.component.name.to_string(),
                prop: path.to_string(),
                expected: kind.describe(),
                found: describe_value(value),
            })
        }
    }
}

fn join_path(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}.{key}"),
        None => key.to_string(),
    }
}

fn is_date(s: &str) -> bool {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || chrono::DateTime::parse_from_rfc3339(s).is_ok()
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
