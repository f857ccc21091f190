use serde::{Deserialize, Serialize};

use crate::model::{Model, PickerOption, Selection};

/// Screen copy, Brazilian Portuguese.
pub mod copy {
    pub const TITLE: &str = "Seu marketplace de coleta de resíduos";
    pub const DESCRIPTION: &str =
        "Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente.";
    pub const STATE_PLACEHOLDER: &str = "Selecione o estado...";
    pub const CITY_PLACEHOLDER: &str = "Selecione a cidade...";
    pub const PICKER_DONE: &str = "Fechar";
    pub const SUBMIT: &str = "Entrar";
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickerView {
    pub placeholder: String,
    pub done_text: String,
    pub items: Vec<PickerOption>,
    /// `None` while the picker still shows its placeholder.
    pub selected: Option<String>,
    pub is_loading: bool,
}

impl PickerView {
    fn new(placeholder: &str, items: &[PickerOption], selected: &Selection, is_loading: bool) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            done_text: copy::PICKER_DONE.to_string(),
            items: items.to_vec(),
            selected: selected.value().map(str::to_string),
            is_loading,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub title: String,
    pub description: String,
    pub state_picker: PickerView,
    pub city_picker: PickerView,
    pub submit_label: String,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        Self {
            title: copy::TITLE.to_string(),
            description: copy::DESCRIPTION.to_string(),
            state_picker: PickerView::new(
                copy::STATE_PLACEHOLDER,
                &model.state_options,
                &model.selected_state,
                model.is_loading_states(),
            ),
            city_picker: PickerView::new(
                copy::CITY_PLACEHOLDER,
                &model.city_options,
                &model.selected_city,
                model.is_loading_cities(),
            ),
            submit_label: copy::SUBMIT.to_string(),
        }
    }
}
