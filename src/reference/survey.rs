use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::Display;

const SURVEY_SEED: &[(&str, &str, Population, &str)] = &[
    (
        "YRBS",
        "Youth Risk Behavior Surveillance System",
        Population::Youth,
        "YRBS",
    ),
    (
        "BRFSS",
        "Behavioral Risk Factor Surveillance System",
        Population::Adult,
        "BRFSS",
    ),
    (
        "NHANES",
        "National Health and Nutrition Examination Survey",
        Population::Adult,
        "NHANES",
    ),
    (
        "NHIS",
        "National Health Interview Survey",
        Population::Adult,
        "NHIS",
    ),
    (
        "NSCH",
        "National Survey of Children's Health",
        Population::Youth,
        "NSCH",
    ),
    (
        "NSDUH",
        "National Survey on Drug Use and Health",
        Population::Adult,
        "NSDUH",
    ),
    (
        "GYTS",
        "Global Youth Tobacco Survey",
        Population::Youth,
        "GYTS",
    ),
    ("ATS", "Adult Tobacco Survey", Population::Adult, "ATS"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Population {
    Youth,
    Adult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    pub code: String,
    pub full_name: String,
    pub population: Population,
    pub tag_suffix: String,
}

pub struct SurveyTable {
    data: HashMap<String, Survey>,
    order: Vec<String>,
}

impl SurveyTable {
    pub fn new() -> SurveyTable {
        let mut data = HashMap::with_capacity(SURVEY_SEED.len());
        let mut order = Vec::with_capacity(SURVEY_SEED.len());
        for (code, full_name, population, tag_suffix) in SURVEY_SEED {
            data.insert(
                code.to_string(),
                Survey {
                    code: code.to_string(),
                    full_name: full_name.to_string(),
                    population: *population,
                    tag_suffix: tag_suffix.to_string(),
                },
            );
            order.push(code.to_string());
        }
        SurveyTable { data, order }
    }

    pub fn get(&self, code: &str) -> Option<&Survey> {
        self.data.get(code)
    }

    /// Survey codes in seed-table order, for selector enumeration.
    pub fn codes(&self) -> Vec<&str> {
        self.order.iter().map(|code| code.as_str()).collect()
    }
}
