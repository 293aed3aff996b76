//! Mapping between submission values and label-addressed control state.
//!
//! [`label_values`] turns a control definition plus values into the updates
//! [`apply`] performs; [`extract`] reads a control back and
//! [`control_values`] turns what it read into submission values again.

use std::collections::BTreeMap;

use shared_types::{ControlType, WizardControl, WizardFieldValue};

use super::{ControlSurface, DateField, FormModel, ShuffleList, WizardError};

/// The value(s) addressed by one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelValue {
    Single(String),
    Multiple(Vec<String>),
}

impl LabelValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            LabelValue::Single(v) => Some(v),
            LabelValue::Multiple(_) => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            LabelValue::Single(_) => None,
            LabelValue::Multiple(vs) => Some(vs),
        }
    }
}

/// Updates or readings keyed by label, in label order.
pub type LabelValueMap = BTreeMap<String, LabelValue>;

fn single(label: &str, value: impl Into<String>) -> LabelValueMap {
    LabelValueMap::from([(label.to_string(), LabelValue::Single(value.into()))])
}

fn multiple(label: &str, values: Vec<String>) -> LabelValueMap {
    LabelValueMap::from([(label.to_string(), LabelValue::Multiple(values))])
}

/// Build the updates that set `control` to `values`.
///
/// A listbox value is addressed by its option's label.
/// Option groups pair each option's label with the value at the same
/// position, so for checkbox and radio groups `values` holds `"true"` or
/// `"false"` per option.
pub fn label_values(control: &WizardControl, values: &[String]) -> Result<LabelValueMap, WizardError> {
    match control.control_type {
        ControlType::Editbox => Ok(single(
            control.label(),
            values.first().cloned().unwrap_or_default(),
        )),
        ControlType::Listbox => {
            let value = values.first().map(String::as_str).unwrap_or_default();
            let option_label = control
                .options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label())
                .unwrap_or(value);
            Ok(single(control.label(), option_label))
        }
        ControlType::Checkboxgroup | ControlType::Radiogroup => Ok(control
            .options
            .iter()
            .zip(values)
            .map(|(option, value)| (option.label().to_string(), LabelValue::Single(value.clone())))
            .collect()),
        ControlType::Calendar => Ok(multiple(control.label(), values.to_vec())),
        ControlType::Shufflebox => {
            let labels = control
                .options
                .iter()
                .filter(|o| values.contains(&o.value))
                .map(|o| o.label().to_string())
                .collect();
            Ok(multiple(control.label(), labels))
        }
        ControlType::Html => Ok(LabelValueMap::new()),
        unsupported @ (ControlType::Shufflelist
        | ControlType::Termselector
        | ControlType::Userselector) => Err(WizardError::UnsupportedControlType(unsupported)),
    }
}

/// The first update, which must hold a single value.
fn single_update(
    control_type: ControlType,
    updates: &LabelValueMap,
) -> Result<(&str, &str), WizardError> {
    updates
        .iter()
        .next()
        .and_then(|(label, value)| value.as_single().map(|v| (label.as_str(), v)))
        .ok_or(WizardError::UnexpectedShape(control_type))
}

/// The first update, which must hold a list of values.
fn multiple_update(
    control_type: ControlType,
    updates: &LabelValueMap,
) -> Result<(&str, &[String]), WizardError> {
    updates
        .iter()
        .next()
        .and_then(|(label, value)| value.as_multiple().map(|vs| (label.as_str(), vs)))
        .ok_or(WizardError::UnexpectedShape(control_type))
}

fn parse_flag(label: &str, value: &str) -> Result<bool, WizardError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(WizardError::InvalidValue {
            label: label.to_string(),
            value: value.to_string(),
            reason: "non-boolean specifier provided",
        }),
    }
}

/// The option a radio group update selects: the one set to `"true"`, or
/// the only label given unless it is marked `"false"`. `None` leaves the
/// group as it is.
fn radio_target(updates: &LabelValueMap) -> Result<Option<&str>, WizardError> {
    let mut selected = updates
        .iter()
        .filter(|(_, value)| value.as_single() == Some("true"))
        .map(|(label, _)| label.as_str());
    match (selected.next(), selected.next()) {
        (Some(label), None) => Ok(Some(label)),
        (Some(_), Some(_)) => Err(WizardError::UnexpectedShape(ControlType::Radiogroup)),
        (None, _) => match updates.iter().next() {
            Some((label, value)) if updates.len() == 1 => match value.as_single() {
                Some("false") => Ok(None),
                Some(_) => Ok(Some(label.as_str())),
                None => Err(WizardError::UnexpectedShape(ControlType::Radiogroup)),
            },
            _ => Ok(None),
        },
    }
}

/// Drive `surface` so the control matches `updates`.
///
/// Stops at the first failed lookup. A checkbox is only clicked when its
/// state differs from the requested one.
pub fn apply<S: ControlSurface + ?Sized>(
    surface: &mut S,
    control_type: ControlType,
    updates: &LabelValueMap,
) -> Result<(), WizardError> {
    match control_type {
        ControlType::Editbox => {
            let (label, value) = single_update(control_type, updates)?;
            surface.set_input_value(label, value)
        }
        ControlType::Checkboxgroup => {
            let mut wanted = Vec::with_capacity(updates.len());
            for (label, value) in updates {
                let value = value
                    .as_single()
                    .ok_or(WizardError::UnexpectedShape(control_type))?;
                wanted.push((label.as_str(), parse_flag(label, value)?));
            }
            for (label, checked) in wanted {
                if surface.is_checked(label)? != checked {
                    surface.click(label)?;
                }
            }
            Ok(())
        }
        ControlType::Radiogroup => match radio_target(updates)? {
            Some(label) => surface.click(label),
            None => {
                tracing::debug!("No radio option requested, leaving the group unchanged");
                Ok(())
            }
        },
        ControlType::Listbox => {
            let (label, value) = single_update(control_type, updates)?;
            surface.select_option(label, value)
        }
        ControlType::Calendar => {
            let (title, values) = multiple_update(control_type, updates)?;
            if values.is_empty() {
                return Err(WizardError::UnexpectedShape(control_type));
            }
            for (field, value) in DateField::BOTH.iter().zip(values) {
                surface.set_date_field(title, *field, value)?;
            }
            Ok(())
        }
        ControlType::Shufflebox => {
            let (title, labels) = multiple_update(control_type, updates)?;
            for label in labels {
                match surface.shuffle_location(title, label)? {
                    ShuffleList::Available => surface.shuffle_move(title, label)?,
                    ShuffleList::Selected => {
                        tracing::debug!(%title, %label, "No action taken as already in target list")
                    }
                }
            }
            Ok(())
        }
        ControlType::Html => Ok(()),
        ControlType::Shufflelist | ControlType::Termselector | ControlType::Userselector => {
            Err(WizardError::UnsupportedControlType(control_type))
        }
    }
}

/// Read the current value of a control addressed by `labels`.
///
/// For checkbox and radio groups `use_option_status` reads each option's
/// checked state (`"true"`/`"false"`) instead of its value.
pub fn extract<S: ControlSurface + ?Sized>(
    surface: &S,
    control_type: ControlType,
    labels: &[String],
    use_option_status: bool,
) -> Result<LabelValueMap, WizardError> {
    let first = || {
        labels
            .first()
            .map(String::as_str)
            .ok_or(WizardError::UnexpectedShape(control_type))
    };
    match control_type {
        ControlType::Editbox | ControlType::Listbox => {
            let label = first()?;
            Ok(single(label, surface.input_value(label)?))
        }
        ControlType::Checkboxgroup | ControlType::Radiogroup => {
            let mut values = LabelValueMap::new();
            for label in labels {
                let value = if use_option_status {
                    surface.is_checked(label)?.to_string()
                } else {
                    surface.input_value(label)?
                };
                values.insert(label.clone(), LabelValue::Single(value));
            }
            Ok(values)
        }
        ControlType::Calendar => {
            let title = first()?;
            let dates = DateField::BOTH
                .iter()
                .map(|field| surface.date_field(title, *field))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(multiple(title, dates))
        }
        ControlType::Shufflebox => {
            let title = first()?;
            Ok(multiple(title, surface.shuffle_selections(title)?))
        }
        ControlType::Html => Ok(LabelValueMap::new()),
        ControlType::Shufflelist | ControlType::Termselector | ControlType::Userselector => {
            Err(WizardError::UnsupportedControlType(control_type))
        }
    }
}

/// Submission values for `control` from a reading taken by [`extract`]
/// with `use_option_status` set.
pub fn control_values(
    control: &WizardControl,
    extracted: &LabelValueMap,
) -> Result<Vec<String>, WizardError> {
    let control_type = control.control_type;
    match control_type {
        ControlType::Editbox | ControlType::Listbox => {
            let (_, value) = single_update(control_type, extracted)?;
            Ok(if value.is_empty() {
                vec![]
            } else {
                vec![value.to_string()]
            })
        }
        ControlType::Checkboxgroup | ControlType::Radiogroup => {
            let mut values = Vec::new();
            for option in &control.options {
                let Some(state) = extracted.get(option.label()) else {
                    continue;
                };
                let state = state
                    .as_single()
                    .ok_or(WizardError::UnexpectedShape(control_type))?;
                if parse_flag(option.label(), state)? {
                    values.push(option.value.clone());
                }
            }
            Ok(values)
        }
        ControlType::Calendar => {
            let (_, dates) = multiple_update(control_type, extracted)?;
            Ok(dates.to_vec())
        }
        ControlType::Shufflebox => {
            let (title, labels) = multiple_update(control_type, extracted)?;
            labels
                .iter()
                .map(|label| {
                    control
                        .option_by_label(label)
                        .map(|o| o.value.clone())
                        .ok_or_else(|| WizardError::OptionNotFound {
                            control: title.to_string(),
                            option: label.clone(),
                        })
                })
                .collect()
        }
        ControlType::Html => Ok(vec![]),
        ControlType::Shufflelist | ControlType::Termselector | ControlType::Userselector => {
            Err(WizardError::UnsupportedControlType(control_type))
        }
    }
}

/// Set a control in `model` to `values`, replacing what it held.
pub fn set_control_values(
    model: &mut FormModel,
    control: &WizardControl,
    values: &[String],
) -> Result<(), WizardError> {
    let updates = match control.control_type {
        ControlType::Checkboxgroup | ControlType::Radiogroup => {
            let flags: Vec<String> = control
                .options
                .iter()
                .map(|o| values.contains(&o.value).to_string())
                .collect();
            label_values(control, &flags)?
        }
        ControlType::Calendar => {
            let date = |i: usize| values.get(i).cloned().unwrap_or_default();
            label_values(control, &[date(0), date(1)])?
        }
        ControlType::Shufflebox => {
            let title = control.label();
            for label in model.shuffle_selections(title)? {
                model.shuffle_remove(title, &label)?;
            }
            label_values(control, values)?
        }
        _ => label_values(control, values)?,
    };
    if updates.is_empty() {
        return Ok(());
    }
    apply(model, control.control_type, &updates)
}

/// Put previously submitted values back into a freshly built form.
///
/// Values are matched to controls by metadata node; controls with no
/// matching value keep their defaults. A control that cannot take its value
/// is skipped and the rest are still restored; the first such failure is
/// returned once every control has been visited.
pub fn restore_form_values(
    model: &mut FormModel,
    values: &[WizardFieldValue],
) -> Result<(), WizardError> {
    let mut first_error = None;
    let definitions: Vec<WizardControl> = model
        .controls()
        .iter()
        .map(|c| c.definition.clone())
        .collect();
    for definition in &definitions {
        let Some(node) = definition.schema_nodes.first().map(|n| n.full_path()) else {
            continue;
        };
        let Some(field) = values.iter().find(|v| v.schema_node == node) else {
            continue;
        };
        if let Err(err) = set_control_values(model, definition, &field.values) {
            tracing::warn!(%err, %node, "Skipping control that could not be restored");
            first_error.get_or_insert(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}

/// Submission values of every control in `model` that targets a metadata
/// node and has something entered. A calendar keeps both of its positional
/// dates and is dropped only when neither is set.
pub fn form_values(model: &FormModel) -> Result<Vec<WizardFieldValue>, WizardError> {
    let mut criteria = Vec::new();
    for control in model.controls() {
        let definition = &control.definition;
        if !definition.control_type.is_supported() || definition.control_type == ControlType::Html
        {
            continue;
        }
        let Some(node) = definition.schema_nodes.first() else {
            continue;
        };
        let extracted = extract(model, definition.control_type, &control.labels(), true)?;
        let mut values = control_values(definition, &extracted)?;
        if definition.control_type != ControlType::Calendar {
            values.retain(|v| !v.is_empty());
        }
        if values.iter().any(|v| !v.is_empty()) {
            criteria.push(WizardFieldValue {
                schema_node: node.full_path(),
                values,
            });
        }
    }
    Ok(criteria)
}
