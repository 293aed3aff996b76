use super::WizardError;

/// One of the two date inputs of a calendar control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub const BOTH: [DateField; 2] = [DateField::Start, DateField::End];

    pub fn label(&self) -> &'static str {
        match self {
            DateField::Start => "Start",
            DateField::End => "End",
        }
    }
}

/// Which list of a shufflebox an option currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleList {
    Available,
    Selected,
}

/// Label-addressed access to rendered controls.
///
/// Controls are found by their visible label (a control's title, or an
/// option's text for checkbox and radio options), so labels must be unique
/// within a form. Every lookup miss is an error.
pub trait ControlSurface {
    /// Current value of a text field, a listbox, or a choice option.
    fn input_value(&self, label: &str) -> Result<String, WizardError>;

    fn set_input_value(&mut self, label: &str, value: &str) -> Result<(), WizardError>;

    /// Checked state of a checkbox or radio option.
    fn is_checked(&self, label: &str) -> Result<bool, WizardError>;

    /// Click a checkbox (toggles) or radio option (selects).
    fn click(&mut self, label: &str) -> Result<(), WizardError>;

    /// Select the option labelled `option_label` in the listbox `label`.
    fn select_option(&mut self, label: &str, option_label: &str) -> Result<(), WizardError>;

    fn date_field(&self, title: &str, field: DateField) -> Result<String, WizardError>;

    fn set_date_field(&mut self, title: &str, field: DateField, value: &str)
        -> Result<(), WizardError>;

    fn shuffle_location(&self, title: &str, option_label: &str) -> Result<ShuffleList, WizardError>;

    /// Move an option from the available list to the end of the selections.
    fn shuffle_move(&mut self, title: &str, option_label: &str) -> Result<(), WizardError>;

    /// Labels of the selections, in list order.
    fn shuffle_selections(&self, title: &str) -> Result<Vec<String>, WizardError>;
}
