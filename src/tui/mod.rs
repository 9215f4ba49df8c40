mod app;
mod view;

pub use app::{App, ConfirmState, Field};
