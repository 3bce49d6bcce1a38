//! Terminal UI: the two-field form, the submit control and the result cards

mod events;
mod render;
mod state;

pub use state::{App, Focus};
