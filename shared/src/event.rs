use serde::{Deserialize, Serialize};

use crate::capabilities::HttpResult;
use crate::config::HomeConfig;
use crate::model::RequestToken;

#[derive(Serialize, Deserialize, Debug, Default)]
pub enum Event {
    #[default]
    Noop,

    // Shell lifecycle
    Mounted,
    Configure(Box<HomeConfig>),

    // Pickers & submit
    StateSelected {
        value: Option<String>,
    },
    CitySelected {
        value: Option<String>,
    },
    Submit,

    // Capability responses (boxed to keep enum size small). These never cross
    // the bridge from the shell, so they are not serialized.
    #[serde(skip)]
    StatesLoaded {
        token: RequestToken,
        result: Box<HttpResult>,
    },
    #[serde(skip)]
    CitiesLoaded {
        token: RequestToken,
        uf: String,
        result: Box<HttpResult>,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Noop => "noop",
            Event::Mounted => "mounted",
            Event::Configure(_) => "configure",
            Event::StateSelected { .. } => "state_selected",
            Event::CitySelected { .. } => "city_selected",
            Event::Submit => "submit",
            Event::StatesLoaded { .. } => "states_loaded",
            Event::CitiesLoaded { .. } => "cities_loaded",
        }
    }

    pub fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Event::StateSelected { .. } | Event::CitySelected { .. } | Event::Submit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_default() {
        assert!(matches!(Event::default(), Event::Noop));
    }

    #[test]
    fn test_event_name() {
        assert_eq!(Event::Mounted.name(), "mounted");
        assert_eq!(Event::Submit.name(), "submit");
        assert_eq!(
            Event::StateSelected {
                value: Some("AC".into())
            }
            .name(),
            "state_selected"
        );
    }

    #[test]
    fn test_event_is_user_initiated() {
        assert!(!Event::Noop.is_user_initiated());
        assert!(!Event::Mounted.is_user_initiated());
        assert!(Event::Submit.is_user_initiated());
        assert!(Event::CitySelected { value: None }.is_user_initiated());
    }

    #[test]
    fn test_shell_events_deserialize() {
        let event: Event = serde_json::from_str(r#"{"StateSelected":{"value":"AC"}}"#).unwrap();
        assert!(matches!(event, Event::StateSelected { value: Some(ref v) } if v == "AC"));
    }

    #[test]
    fn test_response_events_do_not_deserialize() {
        assert!(serde_json::from_str::<Event>(r#""StatesLoaded""#).is_err());
    }

    #[test]
    fn event_size_is_reasonable() {
        let size = std::mem::size_of::<Event>();
        assert!(
            size <= 64,
            "Event enum is {} bytes, box more variants",
            size
        );
    }
}
