use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::reference::Population;

/// The two recognized variable-type classifications. Indicator variables
/// carry a Topic/Sub-Topic classification, Demographic variables do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum VarType {
    Indicator,
    Demographic,
}

/// One queued variable, frozen at capture time. Survey metadata and the
/// resolved topic/sub-topic ids are copied in when the record is built and
/// never recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableRecord {
    pub dataset: String,
    pub dataset_name: String,
    pub population: Option<Population>,
    pub tag_suffix: String,
    pub var_code: String,
    pub var_name: String,
    pub description: String,
    // Kept as entered; an overridden add freezes unrecognized values as-is.
    pub var_type: String,
    pub topic: String,
    pub sub_topic: String,
    pub topic_id: u32,
    pub subtopic_id: u32,
    pub levels: Vec<String>,
}

impl VariableRecord {
    pub fn tag(&self) -> String {
        format!("{}_{}", self.var_name, self.tag_suffix)
    }

    pub fn population_label(&self) -> String {
        self.population
            .map(|population| population.to_string())
            .unwrap_or_default()
    }
}
