//! IBGE "localidades" API: wire types, endpoint building, and the mapping
//! from API entries to picker options.
//!
//! Only the fields the screen needs are declared; serde ignores the rest of
//! each entry (`id`, `regiao`, `microrregiao`, ...).

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ConfigError;
use crate::model::PickerOption;

pub const DEFAULT_REGIONS_ENDPOINT: &str =
    "https://servicodados.ibge.gov.br/api/v1/localidades/estados";

/// Path segment appended after the UF code to list its municipalities.
pub const LOCALITIES_SEGMENT: &str = "municipios";

/// One entry of `GET /estados`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbgeUf {
    pub nome: String,
    pub sigla: String,
}

/// One entry of `GET /estados/{uf}/municipios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbgeCity {
    pub nome: String,
}

pub fn state_options(ufs: &[IbgeUf]) -> Vec<PickerOption> {
    ufs.iter()
        .map(|uf| PickerOption::new(&uf.nome, &uf.sigla))
        .collect()
}

pub fn city_options(cities: &[IbgeCity]) -> Vec<PickerOption> {
    cities
        .iter()
        .map(|city| PickerOption::new(&city.nome, &city.nome))
        .collect()
}

/// `{regions_endpoint}/{uf}/municipios`, with `uf` encoded as a single path
/// segment.
pub fn localities_url(regions_endpoint: &str, uf: &str) -> Result<String, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidUrl {
        url: regions_endpoint.to_string(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(regions_endpoint).map_err(|e| invalid(&e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("endpoint cannot take path segments"))?
        .pop_if_empty()
        .push(uf)
        .push(LOCALITIES_SEGMENT);

    Ok(url.into())
}
