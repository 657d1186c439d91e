use crate::config::Endpoints;
use yew::prelude::*;

/// Properties for the import workflow widget.
#[derive(Properties, PartialEq, Clone)]
pub struct ImportProps {
    /// Endpoint pair resolved once at startup (see `config::discover`).
    /// Passing it in keeps the widget free of ambient globals.
    pub endpoints: Endpoints,
}
