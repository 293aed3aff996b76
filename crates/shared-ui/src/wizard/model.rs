//! In-memory form state for a set of Wizard controls.
//!
//! [`FormModel`] is what the Wizard components render from and write to,
//! and it implements [`ControlSurface`] so the value mapping can drive it
//! the same way a user would.

use shared_types::{ControlType, WizardControl};

use super::{ControlSurface, DateField, ShuffleList, WizardError};

/// A labelled option with its submission value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub label: String,
    pub value: String,
}

/// A checkbox or radio option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
    pub checked: bool,
}

/// Live state of one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlState {
    Text(String),
    /// `exclusive` groups behave as radio buttons.
    Choices {
        exclusive: bool,
        options: Vec<Choice>,
    },
    Select {
        options: Vec<OptionEntry>,
        selected: Option<usize>,
    },
    Dates {
        start: String,
        end: String,
    },
    Shuffle {
        options: Vec<OptionEntry>,
        /// Indexes into `options`, in selection order.
        selected: Vec<usize>,
    },
    Static,
    Unsupported,
}

impl ControlState {
    fn kind(&self) -> &'static str {
        match self {
            ControlState::Text(_) => "text field",
            ControlState::Choices { .. } => "option group",
            ControlState::Select { .. } => "listbox",
            ControlState::Dates { .. } => "calendar",
            ControlState::Shuffle { .. } => "shufflebox",
            ControlState::Static => "static control",
            ControlState::Unsupported => "supported control",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormControl {
    pub definition: WizardControl,
    pub state: ControlState,
}

impl FormControl {
    pub fn new(definition: WizardControl) -> Self {
        let state = initial_state(&definition);
        Self { definition, state }
    }

    pub fn label(&self) -> &str {
        self.definition.label()
    }

    /// Labels that address this control through a [`ControlSurface`].
    pub fn labels(&self) -> Vec<String> {
        match &self.state {
            ControlState::Choices { options, .. } => {
                options.iter().map(|o| o.label.clone()).collect()
            }
            _ => vec![self.label().to_string()],
        }
    }
}

fn entries(definition: &WizardControl) -> Vec<OptionEntry> {
    definition
        .options
        .iter()
        .map(|o| OptionEntry {
            label: o.label().to_string(),
            value: o.value.clone(),
        })
        .collect()
}

fn initial_state(definition: &WizardControl) -> ControlState {
    let defaults = definition.initial_values();
    match definition.control_type {
        ControlType::Editbox => ControlState::Text(defaults.first().cloned().unwrap_or_default()),
        ControlType::Checkboxgroup | ControlType::Radiogroup => {
            let exclusive = definition.control_type == ControlType::Radiogroup;
            let mut seen_default = false;
            let options = definition
                .options
                .iter()
                .map(|o| {
                    let mut checked = defaults.contains(&o.value);
                    if exclusive {
                        checked = checked && !seen_default;
                        seen_default |= checked;
                    }
                    Choice {
                        label: o.label().to_string(),
                        value: o.value.clone(),
                        checked,
                    }
                })
                .collect();
            ControlState::Choices { exclusive, options }
        }
        ControlType::Listbox => {
            let options = entries(definition);
            let selected = defaults
                .first()
                .and_then(|d| options.iter().position(|o| &o.value == d));
            ControlState::Select { options, selected }
        }
        ControlType::Calendar => ControlState::Dates {
            start: defaults.first().cloned().unwrap_or_default(),
            end: defaults.get(1).cloned().unwrap_or_default(),
        },
        ControlType::Shufflebox => {
            let options = entries(definition);
            let mut selected = Vec::new();
            for value in &defaults {
                if let Some(i) = options.iter().position(|o| &o.value == value) {
                    if !selected.contains(&i) {
                        selected.push(i);
                    }
                }
            }
            ControlState::Shuffle { options, selected }
        }
        ControlType::Html => ControlState::Static,
        ControlType::Shufflelist | ControlType::Termselector | ControlType::Userselector => {
            ControlState::Unsupported
        }
    }
}

/// State of every control on an advanced search panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
    controls: Vec<FormControl>,
}

impl FormModel {
    pub fn new(definitions: &[WizardControl]) -> Self {
        Self {
            controls: definitions.iter().cloned().map(FormControl::new).collect(),
        }
    }

    pub fn controls(&self) -> &[FormControl] {
        &self.controls
    }

    pub fn control(&self, index: usize) -> Option<&FormControl> {
        self.controls.get(index)
    }

    /// Put every control back to its default values.
    pub fn reset(&mut self) {
        for control in &mut self.controls {
            control.state = initial_state(&control.definition);
        }
    }

    /// Take an option back out of a shufflebox's selections.
    pub fn shuffle_remove(&mut self, title: &str, option_label: &str) -> Result<(), WizardError> {
        let (options, selected) = self.shuffle_mut(title)?;
        let index = option_index(options, title, option_label)?;
        selected.retain(|i| *i != index);
        Ok(())
    }

    fn titled(&self, label: &str) -> Option<&FormControl> {
        self.controls.iter().find(|c| c.label() == label)
    }

    fn titled_mut(&mut self, label: &str) -> Result<&mut FormControl, WizardError> {
        self.controls
            .iter_mut()
            .find(|c| c.label() == label)
            .ok_or_else(|| WizardError::LabelNotFound(label.to_string()))
    }

    fn choice(&self, label: &str) -> Option<&Choice> {
        self.controls.iter().find_map(|c| match &c.state {
            ControlState::Choices { options, .. } => options.iter().find(|o| o.label == label),
            _ => None,
        })
    }

    fn dates(&self, title: &str) -> Result<(&String, &String), WizardError> {
        match self.titled(title).map(|c| &c.state) {
            Some(ControlState::Dates { start, end }) => Ok((start, end)),
            Some(other) => Err(wrong_kind(title, other, "calendar")),
            None => Err(WizardError::LabelNotFound(title.to_string())),
        }
    }

    fn shuffle(&self, title: &str) -> Result<(&[OptionEntry], &[usize]), WizardError> {
        match self.titled(title).map(|c| &c.state) {
            Some(ControlState::Shuffle { options, selected }) => Ok((options, selected)),
            Some(other) => Err(wrong_kind(title, other, "shufflebox")),
            None => Err(WizardError::LabelNotFound(title.to_string())),
        }
    }

    fn shuffle_mut(
        &mut self,
        title: &str,
    ) -> Result<(&[OptionEntry], &mut Vec<usize>), WizardError> {
        let control = self.titled_mut(title)?;
        match &mut control.state {
            ControlState::Shuffle { options, selected } => Ok((options, selected)),
            other => Err(wrong_kind(title, other, "shufflebox")),
        }
    }
}

fn wrong_kind(label: &str, found: &ControlState, expected: &'static str) -> WizardError {
    WizardError::WrongKind {
        label: label.to_string(),
        found: found.kind(),
        expected,
    }
}

fn option_index(options: &[OptionEntry], control: &str, label: &str) -> Result<usize, WizardError> {
    options
        .iter()
        .position(|o| o.label == label)
        .ok_or_else(|| WizardError::OptionNotFound {
            control: control.to_string(),
            option: label.to_string(),
        })
}

impl ControlSurface for FormModel {
    fn input_value(&self, label: &str) -> Result<String, WizardError> {
        if let Some(control) = self.titled(label) {
            return match &control.state {
                ControlState::Text(value) => Ok(value.clone()),
                ControlState::Select { options, selected } => Ok(selected
                    .and_then(|i| options.get(i))
                    .map(|o| o.value.clone())
                    .unwrap_or_default()),
                other => Err(wrong_kind(label, other, "text field or listbox")),
            };
        }
        self.choice(label)
            .map(|c| c.value.clone())
            .ok_or_else(|| WizardError::LabelNotFound(label.to_string()))
    }

    fn set_input_value(&mut self, label: &str, value: &str) -> Result<(), WizardError> {
        let control = self.titled_mut(label)?;
        match &mut control.state {
            ControlState::Text(current) => {
                *current = value.to_string();
                Ok(())
            }
            other => Err(wrong_kind(label, other, "text field")),
        }
    }

    fn is_checked(&self, label: &str) -> Result<bool, WizardError> {
        self.choice(label)
            .map(|c| c.checked)
            .ok_or_else(|| WizardError::LabelNotFound(label.to_string()))
    }

    fn click(&mut self, label: &str) -> Result<(), WizardError> {
        for control in &mut self.controls {
            if let ControlState::Choices { exclusive, options } = &mut control.state {
                let Some(index) = options.iter().position(|o| o.label == label) else {
                    continue;
                };
                if *exclusive {
                    for (i, option) in options.iter_mut().enumerate() {
                        option.checked = i == index;
                    }
                } else {
                    options[index].checked = !options[index].checked;
                }
                return Ok(());
            }
        }
        Err(WizardError::LabelNotFound(label.to_string()))
    }

    fn select_option(&mut self, label: &str, option_label: &str) -> Result<(), WizardError> {
        let control = self.titled_mut(label)?;
        match &mut control.state {
            ControlState::Select { options, selected } => {
                *selected = Some(option_index(options, label, option_label)?);
                Ok(())
            }
            other => Err(wrong_kind(label, other, "listbox")),
        }
    }

    fn date_field(&self, title: &str, field: DateField) -> Result<String, WizardError> {
        let (start, end) = self.dates(title)?;
        Ok(match field {
            DateField::Start => start.clone(),
            DateField::End => end.clone(),
        })
    }

    fn set_date_field(
        &mut self,
        title: &str,
        field: DateField,
        value: &str,
    ) -> Result<(), WizardError> {
        let control = self.titled_mut(title)?;
        match &mut control.state {
            ControlState::Dates { start, end } => {
                let target = match field {
                    DateField::Start => start,
                    DateField::End => end,
                };
                *target = value.to_string();
                Ok(())
            }
            other => Err(wrong_kind(title, other, "calendar")),
        }
    }

    fn shuffle_location(&self, title: &str, option_label: &str) -> Result<ShuffleList, WizardError> {
        let (options, selected) = self.shuffle(title)?;
        let index = option_index(options, title, option_label)?;
        Ok(if selected.contains(&index) {
            ShuffleList::Selected
        } else {
            ShuffleList::Available
        })
    }

    fn shuffle_move(&mut self, title: &str, option_label: &str) -> Result<(), WizardError> {
        let (options, selected) = self.shuffle_mut(title)?;
        let index = option_index(options, title, option_label)?;
        if !selected.contains(&index) {
            selected.push(index);
        }
        Ok(())
    }

    fn shuffle_selections(&self, title: &str) -> Result<Vec<String>, WizardError> {
        let (options, selected) = self.shuffle(title)?;
        Ok(selected
            .iter()
            .filter_map(|i| options.get(*i))
            .map(|o| o.label.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::test_support::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_seed_initial_state() {
        let model = FormModel::new(&sample_controls());
        assert_eq!(model.input_value("Edit Box - name").unwrap(), "EditBox default value");
        assert!(model.is_checked("CheckBox one").unwrap());
        assert!(!model.is_checked("CheckBox two").unwrap());
        assert!(model.is_checked("RadioButton one").unwrap());
        assert_eq!(model.input_value("ListBox").unwrap(), "option two");
        assert_eq!(model.date_field("Calendar", DateField::Start).unwrap(), "2020-10-10");
        assert_eq!(model.date_field("Calendar", DateField::End).unwrap(), "");
        assert_eq!(model.shuffle_selections("A Shufflebox").unwrap(), vec!["Shuffle Today"]);
    }

    #[test]
    fn radio_click_is_exclusive() {
        let mut model = FormModel::new(&sample_controls());
        model.click("RadioButton three").unwrap();
        assert!(!model.is_checked("RadioButton one").unwrap());
        assert!(model.is_checked("RadioButton three").unwrap());
        model.click("RadioButton three").unwrap();
        assert!(model.is_checked("RadioButton three").unwrap());
    }

    #[test]
    fn checkbox_click_toggles() {
        let mut model = FormModel::new(&sample_controls());
        model.click("CheckBox one").unwrap();
        assert!(!model.is_checked("CheckBox one").unwrap());
        model.click("CheckBox one").unwrap();
        assert!(model.is_checked("CheckBox one").unwrap());
    }

    #[test]
    fn lookups_by_wrong_kind_or_missing_label_fail() {
        let mut model = FormModel::new(&sample_controls());
        assert_eq!(
            model.set_input_value("Nope", "x"),
            Err(WizardError::LabelNotFound("Nope".to_string()))
        );
        assert!(matches!(
            model.set_input_value("ListBox", "x"),
            Err(WizardError::WrongKind { .. })
        ));
        assert!(matches!(
            model.select_option("ListBox", "option nine"),
            Err(WizardError::OptionNotFound { .. })
        ));
        assert!(model.date_field("A Shufflebox", DateField::Start).is_err());
    }

    #[test]
    fn shuffle_move_and_remove() {
        let mut model = FormModel::new(&sample_controls());
        model.shuffle_move("A Shufflebox", "Shuffle for Life").unwrap();
        model.shuffle_move("A Shufflebox", "Shuffle Today").unwrap();
        assert_eq!(
            model.shuffle_selections("A Shufflebox").unwrap(),
            vec!["Shuffle Today", "Shuffle for Life"]
        );
        model.shuffle_remove("A Shufflebox", "Shuffle Today").unwrap();
        assert_eq!(
            model.shuffle_location("A Shufflebox", "Shuffle Today").unwrap(),
            ShuffleList::Available
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let mut model = FormModel::new(&sample_controls());
        model.set_input_value("Edit Box - name", "changed").unwrap();
        model.click("CheckBox two").unwrap();
        model.reset();
        assert_eq!(model, FormModel::new(&sample_controls()));
    }

    #[test]
    fn option_group_labels_address_options() {
        let model = FormModel::new(&sample_controls());
        let group = model
            .controls()
            .iter()
            .find(|c| c.label() == "CheckBox Group")
            .unwrap();
        assert_eq!(
            group.labels(),
            vec!["CheckBox one", "CheckBox two", "CheckBox three", "CheckBox four"]
        );
    }
}
