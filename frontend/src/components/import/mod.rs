//! Import workflow widget: choose files, preview each one against the
//! import service, then commit. This module wires the Yew `Component`
//! implementation to submodules for state, messages, update logic, and
//! rendering.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ImportProps;
pub use state::{ImportComponent, Row, RowStatus};

impl Component for ImportComponent {
    type Message = Msg;
    type Properties = ImportProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ImportComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
