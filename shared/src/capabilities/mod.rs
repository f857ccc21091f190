mod navigation;

pub use self::navigation::{Navigation, NavigationOperation, PointsParams};

pub use crux_http::Http;

// Crux's built-in Render capability covers view updates as-is.
pub use crux_core::render::Render;

use crate::event::Event;
// The Effect derive wires `Capabilities` to the app type named `App`, which
// must be in scope here.
#[allow(unused_imports)]
use crate::App;

/// What the shell reports back for a GET issued through [`Http`].
pub type HttpResult = crux_http::Result<crux_http::Response<Vec<u8>>>;

// The Effect derive reads the capability and event types straight off each
// field, so these stay spelled out rather than aliased.
#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub navigation: Navigation<Event>,
    pub render: Render<Event>,
}
