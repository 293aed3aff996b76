//! Declarative definitions of advanced-search Wizard controls.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AppError;

/// Label used for a control or option that has no text of its own.
pub const BLANK_LABEL: &str = "!!BLANK LABEL!!";

/// The kind of a Wizard control. Closed set; unknown tags fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    Editbox,
    Checkboxgroup,
    Radiogroup,
    Listbox,
    Calendar,
    Shufflebox,
    Html,
    Shufflelist,
    Termselector,
    Userselector,
}

pub const ALL_CONTROL_TYPES: &[ControlType] = &[
    ControlType::Editbox,
    ControlType::Checkboxgroup,
    ControlType::Radiogroup,
    ControlType::Listbox,
    ControlType::Calendar,
    ControlType::Shufflebox,
    ControlType::Html,
    ControlType::Shufflelist,
    ControlType::Termselector,
    ControlType::Userselector,
];

impl ControlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlType::Editbox => "editbox",
            ControlType::Checkboxgroup => "checkboxgroup",
            ControlType::Radiogroup => "radiogroup",
            ControlType::Listbox => "listbox",
            ControlType::Calendar => "calendar",
            ControlType::Shufflebox => "shufflebox",
            ControlType::Html => "html",
            ControlType::Shufflelist => "shufflelist",
            ControlType::Termselector => "termselector",
            ControlType::Userselector => "userselector",
        }
    }

    /// Whether the renderer and value mapping support this type.
    pub fn is_supported(&self) -> bool {
        match self {
            ControlType::Editbox
            | ControlType::Checkboxgroup
            | ControlType::Radiogroup
            | ControlType::Listbox
            | ControlType::Calendar
            | ControlType::Shufflebox
            | ControlType::Html => true,
            ControlType::Shufflelist | ControlType::Termselector | ControlType::Userselector => {
                false
            }
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CONTROL_TYPES
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AppError::bad_request(format!("Unknown control type: {s}")))
    }
}

/// One selectable option of a control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardControlOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default_value: Option<bool>,
}

impl WizardControlOption {
    /// Visible label of the option.
    pub fn label(&self) -> &str {
        self.text.as_deref().unwrap_or(BLANK_LABEL)
    }
}

/// Metadata node a control's value is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetNode {
    pub target: String,
    #[serde(default)]
    pub attribute: String,
}

impl TargetNode {
    /// Full path of the node, e.g. `/item/@year`.
    pub fn full_path(&self) -> String {
        format!("{}{}", self.target, self.attribute)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardControl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub mandatory: bool,
    pub control_type: ControlType,
    #[serde(default)]
    pub options: Vec<WizardControlOption>,
    #[serde(default)]
    pub default_values: Vec<String>,
    #[serde(default)]
    pub schema_nodes: Vec<TargetNode>,
    /// Options per row for option groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
}

impl WizardControl {
    /// Visible label of the control itself.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(BLANK_LABEL)
    }

    /// Options laid out in rows of `columns`, at least one per row.
    pub fn option_rows(&self) -> Vec<&[WizardControlOption]> {
        let per_row = self.columns.unwrap_or(1).max(1) as usize;
        self.options.chunks(per_row).collect()
    }

    /// Option whose label is `label`.
    pub fn option_by_label(&self, label: &str) -> Option<&WizardControlOption> {
        self.options.iter().find(|o| o.label() == label)
    }

    /// Values selected when the form first renders.
    pub fn initial_values(&self) -> Vec<String> {
        if !self.default_values.is_empty() {
            return self.default_values.clone();
        }
        self.options
            .iter()
            .filter(|o| o.is_default_value.unwrap_or(false))
            .map(|o| o.value.clone())
            .collect()
    }
}

/// Submitted values of one control, keyed by its metadata node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardFieldValue {
    pub schema_node: String,
    pub values: Vec<String>,
}

/// Name and id of an advanced search, as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedSearchSummary {
    pub uuid: String,
    pub name: String,
}

/// A named set of Wizard controls shown on the advanced search panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchDefinition {
    #[serde(default, alias = "uuid")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub controls: Vec<WizardControl>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn option(text: &str, value: &str) -> WizardControlOption {
        WizardControlOption {
            text: Some(text.to_string()),
            value: value.to_string(),
            is_default_value: None,
        }
    }

    fn group(columns: Option<u32>, count: usize) -> WizardControl {
        WizardControl {
            title: Some("Group".to_string()),
            description: None,
            mandatory: false,
            control_type: ControlType::Checkboxgroup,
            options: (1..=count)
                .map(|i| option(&format!("Option {i}"), &i.to_string()))
                .collect(),
            default_values: vec![],
            schema_nodes: vec![],
            columns,
        }
    }

    #[test]
    fn control_type_tags_parse_strictly() {
        assert_eq!("shufflebox".parse::<ControlType>().unwrap(), ControlType::Shufflebox);
        assert!("slider".parse::<ControlType>().is_err());
        let parsed: Result<WizardControl, _> =
            serde_json::from_str(r#"{"controlType":"slider"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn reserved_types_are_not_supported() {
        let unsupported: Vec<ControlType> = ALL_CONTROL_TYPES
            .iter()
            .copied()
            .filter(|t| !t.is_supported())
            .collect();
        assert_eq!(
            unsupported,
            vec![
                ControlType::Shufflelist,
                ControlType::Termselector,
                ControlType::Userselector
            ]
        );
    }

    #[test]
    fn option_rows_chunk_by_columns() {
        let control = group(Some(3), 7);
        let rows = control.option_rows();
        let sizes: Vec<usize> = rows.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
    }

    #[test]
    fn zero_columns_means_one_per_row() {
        assert_eq!(group(Some(0), 3).option_rows().len(), 3);
        assert_eq!(group(None, 2).option_rows().len(), 2);
    }

    #[test]
    fn initial_values_fall_back_to_option_defaults() {
        let mut control = group(None, 3);
        control.options[1].is_default_value = Some(true);
        assert_eq!(control.initial_values(), vec!["2"]);
        control.default_values = vec!["3".to_string()];
        assert_eq!(control.initial_values(), vec!["3"]);
    }

    #[test]
    fn blank_labels_for_untitled_controls() {
        let html: WizardControl =
            serde_json::from_str(r#"{"controlType":"html","description":"Raw"}"#).unwrap();
        assert_eq!(html.label(), BLANK_LABEL);
        assert!(html.options.is_empty());
    }

    #[test]
    fn target_node_path() {
        let node = TargetNode {
            target: "/item/".to_string(),
            attribute: "@year".to_string(),
        };
        assert_eq!(node.full_path(), "/item/@year");
    }
}
