mod controller;
mod form;
mod queue;
mod validator;

pub use controller::{AddOutcome, Session, EMPTY_QUEUE_OUTPUT};
pub use form::{FormState, MAX_LEVELS, MIN_LEVELS};
pub use queue::Queue;
pub use validator::validate;
