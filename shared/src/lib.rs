// lib.rs - Ecoleta home screen core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod capabilities;
pub mod config;
pub mod error;
pub mod event;
pub mod ibge;
pub mod model;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::HomeConfig;
pub use error::FetchError;
pub use event::Event;
pub use model::{Model, PickerOption, RequestToken, Selection, UNSELECTED};
pub use view::ViewModel;

pub const ACCEPT_JSON: &str = "application/json";

pub mod app {
    use tracing::{debug, info, warn};

    use crate::capabilities::{Capabilities, PointsParams};
    use crate::config::validate_endpoint;
    use crate::error::decode_list;
    use crate::event::Event;
    use crate::ibge::{self, IbgeCity, IbgeUf};
    use crate::model::{Model, Selection};
    use crate::view::ViewModel;
    use crate::ACCEPT_JSON;

    #[derive(Default)]
    pub struct App;

    impl App {
        fn fetch_states(model: &mut Model, caps: &Capabilities) {
            let url = match validate_endpoint(&model.config.regions_endpoint) {
                Ok(url) => url,
                Err(e) => {
                    warn!(error = %e, "cannot build states request");
                    return;
                }
            };

            let token = model.begin_states_request();
            debug!(token = token.0, url = url.as_str(), "fetching states");
            caps.http
                .get(url.as_str())
                .header("Accept", ACCEPT_JSON)
                .send(move |result| Event::StatesLoaded {
                    token,
                    result: Box::new(result),
                });
        }

        fn fetch_cities(model: &mut Model, caps: &Capabilities) {
            let uf = model.selected_state.as_str().to_string();
            let url = match ibge::localities_url(&model.config.regions_endpoint, &uf) {
                Ok(url) => url,
                Err(e) => {
                    warn!(uf = %uf, error = %e, "cannot build cities request");
                    model.invalidate_cities_request();
                    return;
                }
            };

            let token = model.begin_cities_request();
            debug!(uf = %uf, token = token.0, url = %url, "fetching cities");
            caps.http
                .get(&url)
                .header("Accept", ACCEPT_JSON)
                .send(move |result| Event::CitiesLoaded {
                    token,
                    uf,
                    result: Box::new(result),
                });
        }

        fn navigate_to_points(model: &Model, caps: &Capabilities) {
            let params = PointsParams {
                selected_uf: model.selected_state.to_string(),
                selected_city: model.selected_city.to_string(),
            };
            info!(
                route = %model.config.points_route,
                selected_uf = %params.selected_uf,
                selected_city = %params.selected_city,
                "navigating"
            );
            caps.navigation
                .navigate(model.config.points_route.clone(), params);
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            debug!(
                event = event.name(),
                user_initiated = event.is_user_initiated(),
                "update"
            );

            match event {
                Event::Noop => {}

                Event::Mounted => {
                    Self::fetch_states(model, caps);
                    caps.render.render();
                }

                Event::Configure(config) => match config.validate() {
                    Ok(()) => {
                        info!(
                            regions_endpoint = %config.regions_endpoint,
                            points_route = %config.points_route,
                            "screen configured"
                        );
                        model.config = *config;
                    }
                    Err(e) => warn!(error = %e, "ignoring invalid screen configuration"),
                },

                Event::StatesLoaded { token, result } => {
                    if !model.finish_states_request(token) {
                        debug!(token = token.0, "dropping superseded states response");
                        return;
                    }
                    match decode_list::<IbgeUf>(*result) {
                        Ok(ufs) => {
                            model.state_options = ibge::state_options(&ufs);
                            info!(count = model.state_options.len(), "states loaded");
                        }
                        Err(e) => warn!(error = %e, "states fetch failed"),
                    }
                    caps.render.render();
                }

                Event::StateSelected { value } => {
                    let selection = Selection::from_picker(value);
                    if selection == model.selected_state {
                        return;
                    }
                    model.selected_state = selection;

                    if model.selected_state.is_unset() {
                        model.invalidate_cities_request();
                    } else {
                        Self::fetch_cities(model, caps);
                    }
                    caps.render.render();
                }

                Event::CitiesLoaded { token, uf, result } => {
                    if !model.finish_cities_request(token) {
                        debug!(uf = %uf, token = token.0, "dropping superseded cities response");
                        return;
                    }
                    match decode_list::<IbgeCity>(*result) {
                        Ok(cities) => {
                            model.city_options = ibge::city_options(&cities);
                            info!(uf = %uf, count = model.city_options.len(), "cities loaded");
                        }
                        Err(e) => warn!(uf = %uf, error = %e, "cities fetch failed"),
                    }
                    caps.render.render();
                }

                Event::CitySelected { value } => {
                    model.selected_city = Selection::from_picker(value);
                    caps.render.render();
                }

                Event::Submit => Self::navigate_to_points(model, caps),
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            ViewModel::from(model)
        }
    }
}
