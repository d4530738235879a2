pub mod config;
pub mod error;
pub mod events;
pub mod rules;
pub mod state;
pub mod utils;
pub mod widget;

pub mod prelude {
    pub use crate::config::{AddonPosition, FieldConfig};
    pub use crate::error::{ConfigError, RuleError};
    pub use crate::events::{Key, KeyEvent, Modifiers};
    pub use crate::rules::{RuleParams, ValidationKind, evaluate, try_evaluate};
    pub use crate::state::{PresentationState, Validity};
    pub use crate::widget::{FormControl, ValidatedInput};

    pub use formdom::{Element, to_html};
}
