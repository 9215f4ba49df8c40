use crate::reference::{ReferenceData, INDICATOR};

pub const MIN_LEVELS: usize = 2;
pub const MAX_LEVELS: usize = 6;

/// Raw entered form values. Everything is kept as the string the user
/// typed or selected; typing happens only when a record is captured.
#[derive(Debug, Clone)]
pub struct FormState {
    pub dataset: String,
    pub var_code: String,
    pub var_name: String,
    pub description: String,
    pub var_type: String,
    pub topic: String,
    pub sub_topic: String,
    pub num_levels: String,
    pub levels: Vec<String>,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            dataset: String::new(),
            var_code: String::new(),
            var_name: String::new(),
            description: String::new(),
            var_type: INDICATOR.to_string(),
            topic: String::new(),
            sub_topic: String::new(),
            num_levels: MIN_LEVELS.to_string(),
            levels: vec![String::new(); MIN_LEVELS],
        }
    }
}

impl FormState {
    /// Parsed level count when in [2,6], else 0 (level checks are skipped
    /// and the level inputs are left untouched).
    pub fn level_slots(&self) -> usize {
        match self.num_levels.trim().parse::<usize>() {
            Ok(n) if (MIN_LEVELS..=MAX_LEVELS).contains(&n) => n,
            _ => 0,
        }
    }

    /// Sub-topic options derived from the current state: empty unless the
    /// variable type is Indicator and the selected topic is known, else the
    /// topic's sub-topic names in sorted order. The first entry is the
    /// default selection.
    pub fn sub_topic_options(&self, reference: &ReferenceData) -> Vec<String> {
        if self.var_type != INDICATOR {
            return Vec::new();
        }
        match reference.topics.get(&self.topic) {
            Some(topic) => topic.sub_topic_names(),
            None => Vec::new(),
        }
    }

    /// Resize the level inputs to the current slot count, preserving any
    /// already-entered prefix. No-op while the count field is invalid.
    pub fn sync_level_inputs(&mut self) {
        let slots = self.level_slots();
        if slots > 0 {
            self.levels.resize(slots, String::new());
        }
    }
}
