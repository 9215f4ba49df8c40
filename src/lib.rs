mod generator;
mod reference;
mod session;

pub mod logging;
pub mod tui;

pub use generator::{expand, render, VarType, VariableRecord};
pub use reference::{
    resolve_ids, Population, ReferenceData, Survey, SurveyTable, Topic, TopicTable, DEMOGRAPHIC,
    INDICATOR,
};
pub use session::{
    validate, AddOutcome, FormState, Queue, Session, EMPTY_QUEUE_OUTPUT, MAX_LEVELS, MIN_LEVELS,
};
