mod resolver;
mod survey;
mod topic;

pub use resolver::{resolve_ids, DEMOGRAPHIC, INDICATOR};
pub use survey::{Population, Survey, SurveyTable};
pub use topic::{Topic, TopicTable};

/// The two static lookup tables, loaded once and immutable for the
/// process lifetime.
pub struct ReferenceData {
    pub topics: TopicTable,
    pub surveys: SurveyTable,
}

impl ReferenceData {
    pub fn new() -> ReferenceData {
        ReferenceData {
            topics: TopicTable::new(),
            surveys: SurveyTable::new(),
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::new()
    }
}
