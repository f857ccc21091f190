use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::HomeConfig;

/// Placeholder value meaning "nothing picked yet".
pub const UNSELECTED: &str = "0";

/// A picker's current value. Starts at [`UNSELECTED`] and holds whatever the
/// picker last reported, with no check against the loaded options.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection(String);

impl Selection {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// A cleared picker reports `None`, which maps back to the sentinel.
    pub fn from_picker(value: Option<String>) -> Self {
        value.map_or_else(Self::default, Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0 == UNSELECTED
    }

    pub fn value(&self) -> Option<&str> {
        (!self.is_unset()).then_some(self.as_str())
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self(UNSELECTED.to_string())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOption {
    pub label: String,
    pub value: String,
}

impl PickerOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Tags a list fetch so a late response for an older request can be told
/// apart from the current one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestToken(pub u64);

/// The latest outstanding fetch of one list, if any.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InFlight(Option<RequestToken>);

impl InFlight {
    pub fn latest(&self) -> Option<RequestToken> {
        self.0
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    fn start(&mut self, token: RequestToken) {
        self.0 = Some(token);
    }

    fn cancel(&mut self) {
        self.0 = None;
    }

    /// Consume `token` if it is the latest one.
    fn settle(&mut self, token: RequestToken) -> bool {
        if self.0 != Some(token) {
            return false;
        }
        self.0 = None;
        true
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Model {
    pub config: HomeConfig,

    pub state_options: Vec<PickerOption>,
    pub city_options: Vec<PickerOption>,

    pub selected_state: Selection,
    pub selected_city: Selection,

    last_token: u64,
    states_request: InFlight,
    cities_request: InFlight,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_token(&mut self) -> RequestToken {
        self.last_token += 1;
        RequestToken(self.last_token)
    }

    pub fn is_loading_states(&self) -> bool {
        self.states_request.is_pending()
    }

    pub fn is_loading_cities(&self) -> bool {
        self.cities_request.is_pending()
    }

    /// Issue the token for a new states fetch; it supersedes any earlier one.
    pub fn begin_states_request(&mut self) -> RequestToken {
        let token = self.next_token();
        self.states_request.start(token);
        token
    }

    /// Returns false for stale responses, which must not touch the state
    /// options.
    pub fn finish_states_request(&mut self, token: RequestToken) -> bool {
        self.states_request.settle(token)
    }

    /// Issue the token for a new cities fetch; it supersedes any earlier one.
    pub fn begin_cities_request(&mut self) -> RequestToken {
        let token = self.next_token();
        self.cities_request.start(token);
        token
    }

    /// Forget any in-flight cities fetch; its response will be dropped.
    pub fn invalidate_cities_request(&mut self) {
        self.cities_request.cancel();
    }

    /// Returns false for stale responses, which must not touch the city
    /// options.
    pub fn finish_cities_request(&mut self, token: RequestToken) -> bool {
        self.cities_request.settle(token)
    }

    pub fn latest_cities_request(&self) -> Option<RequestToken> {
        self.cities_request.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_defaults_to_sentinel() {
        let selection = Selection::default();
        assert!(selection.is_unset());
        assert_eq!(selection.as_str(), "0");
        assert_eq!(selection.value(), None);
    }

    #[test]
    fn test_selection_from_picker() {
        assert!(Selection::from_picker(None).is_unset());
        assert_eq!(Selection::from_picker(Some("AC".into())).value(), Some("AC"));
        assert!(Selection::from_picker(Some("0".into())).is_unset());
    }

    #[test]
    fn test_tokens_are_monotonic() {
        let mut model = Model::new();
        let first = model.begin_cities_request();
        let second = model.begin_cities_request();
        assert!(second > first);
        assert_eq!(model.latest_cities_request(), Some(second));
    }

    #[test]
    fn test_stale_token_is_rejected() {
        let mut model = Model::new();
        let first = model.begin_cities_request();
        let second = model.begin_cities_request();

        assert!(!model.finish_cities_request(first));
        assert!(model.is_loading_cities());
        assert!(model.finish_cities_request(second));
        assert!(!model.is_loading_cities());
        // Already consumed.
        assert!(!model.finish_cities_request(second));
    }

    #[test]
    fn test_invalidate_drops_pending() {
        let mut model = Model::new();
        let token = model.begin_cities_request();
        model.invalidate_cities_request();
        assert!(!model.finish_cities_request(token));
        assert!(!model.is_loading_cities());
    }

    #[test]
    fn test_states_and_cities_tokens_are_independent() {
        let mut model = Model::new();
        let states = model.begin_states_request();
        let cities = model.begin_cities_request();

        assert_ne!(states, cities);
        assert!(!model.finish_states_request(cities));
        assert!(model.finish_states_request(states));
        assert!(!model.is_loading_states());
        assert!(model.is_loading_cities());
    }

    #[test]
    fn test_stale_states_token_is_rejected() {
        let mut model = Model::new();
        let first = model.begin_states_request();
        let second = model.begin_states_request();

        assert!(!model.finish_states_request(first));
        assert!(model.is_loading_states());
        assert!(model.finish_states_request(second));
    }
}
