//! Advanced-search Wizard controls: form state, value mapping and views.

mod error;
mod mapping;
mod model;
mod surface;
mod view;

pub use error::WizardError;
pub use mapping::{
    apply, control_values, extract, form_values, label_values, restore_form_values,
    set_control_values, LabelValue, LabelValueMap,
};
pub use model::{Choice, ControlState, FormControl, FormModel, OptionEntry};
pub use surface::{ControlSurface, DateField, ShuffleList};
pub use view::{WizardControlView, WizardForm, WizardLabel};
