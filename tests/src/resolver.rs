mod form_flow;
mod properties;
