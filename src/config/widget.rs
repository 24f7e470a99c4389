//! Cosmetic widget options.
//!
//! The component never interprets these; they are read from the `[widget]`
//! table and handed to the host as they are.

use serde::{Deserialize, Deserializer};

/// Options the host uses to lay out and identify the widget.
/// Every field is optional in fx.toml; missing ones take the host defaults.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WidgetProps {
    label: Option<String>,
    placeholder: Option<String>,
    show_label: Option<bool>,
    scale: Option<u32>,
    min_width: u32,
    visible: bool,
    elem_id: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    elem_classes: Vec<String>,
    render: bool,
    key: Option<Key>,
}

impl Default for WidgetProps {
    fn default() -> Self {
        WidgetProps {
            label: None,
            placeholder: None,
            show_label: None,
            scale: None,
            min_width: 160,
            visible: true,
            elem_id: None,
            elem_classes: Vec::new(),
            render: true,
            key: None,
        }
    }
}

impl WidgetProps {
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[inline]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    #[inline]
    pub fn show_label(&self) -> Option<bool> {
        self.show_label
    }

    #[inline]
    pub fn scale(&self) -> Option<u32> {
        self.scale
    }

    #[inline]
    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn elem_id(&self) -> Option<&str> {
        self.elem_id.as_deref()
    }

    #[inline]
    pub fn elem_classes(&self) -> &[String] {
        &self.elem_classes
    }

    #[inline]
    pub fn render(&self) -> bool {
        self.render
    }

    #[inline]
    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }
}

/// Identity the host uses to keep a widget's value across re-renders.
/// Hosts accept either an integer or a string.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

/// Accepts `elem_classes = "a"` as well as `elem_classes = ["a", "b"]`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(class) => vec![class],
        OneOrMany::Many(classes) => classes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_host_defaults() {
        let props = WidgetProps::default();
        assert_eq!(props.min_width(), 160);
        assert!(props.visible());
        assert!(props.render());
        assert!(props.elem_classes().is_empty());
    }

    #[test]
    fn single_class_string_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
        let props: WidgetProps = toml::from_str(r#"elem_classes = "sidebar""#)?;
        assert_eq!(props.elem_classes(), ["sidebar".to_string()]);

        let props: WidgetProps = toml::from_str(r#"elem_classes = ["a", "b"]"#)?;
        assert_eq!(props.elem_classes().len(), 2);
        Ok(())
    }

    #[test]
    fn key_accepts_int_or_string() -> Result<(), Box<dyn std::error::Error>> {
        let props: WidgetProps = toml::from_str("key = 5\nlabel = \"Files\"")?;
        assert_eq!(props.key(), Some(&Key::Int(5)));
        assert_eq!(props.label(), Some("Files"));

        let props: WidgetProps = toml::from_str(r#"key = "explorer""#)?;
        assert_eq!(props.key(), Some(&Key::Str("explorer".to_string())));
        Ok(())
    }
}
