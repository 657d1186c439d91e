use crate::components::import::ImportComponent;
use crate::config::{self, Endpoints};
use crate::theme::{self, ChartDefaults};
use yew::{html, Component, Context, Html};

pub struct App {
    endpoints: Endpoints,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        // Brand the shared chart defaults once, before any chart mounts.
        theme::install(&ChartDefaults::branded());
        Self {
            endpoints: config::discover(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <ImportComponent endpoints={self.endpoints.clone()} />
            </div>
        }
    }
}
