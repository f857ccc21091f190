use serde::{Deserialize, Serialize};

use crux_core::capability::{Capability, CapabilityContext, Operation};

/// Hands a destination over to the shell's screen router. Fire-and-forget:
/// the core never hears back.
pub struct Navigation<Ev> {
    context: CapabilityContext<NavigationOperation, Ev>,
}

impl<Ev> Capability<Ev> for Navigation<Ev> {
    type Operation = NavigationOperation;
    type MappedSelf<MappedEv> = Navigation<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static,
    {
        Navigation::new(self.context.map_event(f))
    }
}

impl<Ev> Navigation<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<NavigationOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn navigate(&self, route: impl Into<String>, params: PointsParams) {
        let operation = NavigationOperation::Navigate {
            route: route.into(),
            params,
        };
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(operation).await;
        });
    }
}

/// Parameters handed to the points screen. Field names match what the shell's
/// router expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsParams {
    #[serde(rename = "selectedUF")]
    pub selected_uf: String,
    #[serde(rename = "selectedCity")]
    pub selected_city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationOperation {
    Navigate { route: String, params: PointsParams },
}

impl Operation for NavigationOperation {
    type Output = ();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_params_wire_names() {
        let params = PointsParams {
            selected_uf: "AC".into(),
            selected_city: "Rio Branco".into(),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "selectedUF": "AC", "selectedCity": "Rio Branco" })
        );
    }
}
