//! Form model for the server configuration object.
//!
//! `render` turns a JSON configuration into an ordered list of form items:
//! booleans become toggles, every other scalar becomes a text field, and one
//! level of nested objects becomes a titled section. `collect` inverts the
//! mapping. Field identity is a structured path of key segments, so keys
//! containing any particular character never collide with nested paths.

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn top(key: &str) -> Self {
        Self {
            segments: vec![key.to_string()],
        }
    }

    pub fn nested(parent: &str, child: &str) -> Self {
        Self {
            segments: vec![parent.to_string(), child.to_string()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Joined form for display only. Never parsed back into segments.
    pub fn display_id(&self) -> String {
        self.segments.join("_")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldControl {
    Toggle(bool),
    Text(String),
}

/// A single editable field. Non-string scalars are rendered as their JSON
/// text and collected back as strings; the round trip is lossy for numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub path: FieldPath,
    pub label: String,
    pub control: FieldControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormItem {
    /// Subheading for a nested object's fields.
    Section(String),
    Field(FormField),
}

/// snake_case -> Title Case, for labels and section headings.
pub fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn leaf_control(value: &Value) -> FieldControl {
    match value {
        Value::Bool(b) => FieldControl::Toggle(*b),
        other => FieldControl::Text(scalar_text(other)),
    }
}

pub fn render(config: Option<&Value>) -> Vec<FormItem> {
    let mut items = Vec::new();
    let Some(Value::Object(map)) = config else {
        return items;
    };

    for (key, value) in map {
        match value {
            Value::Object(nested) => {
                items.push(FormItem::Section(title_case(key)));
                for (sub_key, sub_value) in nested {
                    items.push(FormItem::Field(FormField {
                        path: FieldPath::nested(key, sub_key),
                        label: title_case(sub_key),
                        control: leaf_control(sub_value),
                    }));
                }
            }
            other => {
                items.push(FormItem::Field(FormField {
                    path: FieldPath::top(key),
                    label: title_case(key),
                    control: leaf_control(other),
                }));
            }
        }
    }
    items
}

/// Fields of a rendered form, skipping section headings.
pub fn fields(items: &[FormItem]) -> impl Iterator<Item = &FormField> {
    items.iter().filter_map(|item| match item {
        FormItem::Field(field) => Some(field),
        FormItem::Section(_) => None,
    })
}

/// Rebuild the configuration object from form fields. Toggles map to
/// booleans, text fields to strings; two-segment paths restore one level
/// of nesting.
pub fn collect<'a, I>(form_fields: I) -> Value
where
    I: IntoIterator<Item = &'a FormField>,
{
    let mut root = Map::new();
    for field in form_fields {
        let value = match &field.control {
            FieldControl::Toggle(checked) => Value::Bool(*checked),
            FieldControl::Text(text) => Value::String(text.clone()),
        };
        match field.path.segments() {
            [key] => {
                root.insert(key.clone(), value);
            }
            [parent, child] => {
                let entry = root
                    .entry(parent.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Some(nested) = entry.as_object_mut() {
                    nested.insert(child.clone(), value);
                }
            }
            _ => {}
        }
    }
    Value::Object(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_converts_snake_case() {
        assert_eq!(title_case("funding_rate"), "Funding Rate");
        assert_eq!(title_case("alerts"), "Alerts");
    }

    #[test]
    fn display_id_joins_segments() {
        assert_eq!(FieldPath::nested("alerts", "send_email").display_id(), "alerts_send_email");
    }
}
