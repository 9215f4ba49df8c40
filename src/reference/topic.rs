use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

// Topic ids are part of the generated-output contract and must not change.
const TOPIC_SEED: &[(u32, &str, &[(&str, u32)])] = &[
    (
        1,
        "Alcohol Use",
        &[
            ("Binge Drinking", 101),
            ("Current Drinking", 102),
            ("Early Initiation", 103),
        ],
    ),
    (
        2,
        "Dietary Behaviors",
        &[
            ("Fruit Consumption", 201),
            ("Vegetable Consumption", 202),
            ("Sugary Drinks", 203),
        ],
    ),
    (
        3,
        "Physical Activity",
        &[
            ("Daily Activity", 301),
            ("Muscle Strengthening", 302),
            ("Physical Education", 303),
        ],
    ),
    (
        4,
        "Tobacco Use",
        &[
            ("Cigarette Use", 401),
            ("Smokeless Tobacco", 402),
            ("E-Cigarette Use", 403),
        ],
    ),
    (
        5,
        "Mental Health",
        &[("Depression", 501), ("Suicidal Ideation", 502)],
    ),
    (6, "Weight Status", &[("Obesity", 601), ("Overweight", 602)]),
    (7, "Smoking", &[]),
    (
        8,
        "Drug Use",
        &[("Marijuana Use", 801), ("Prescription Misuse", 802)],
    ),
    (
        9,
        "Injury and Violence",
        &[
            ("Bullying", 901),
            ("Weapon Carrying", 902),
            ("Seat Belt Use", 903),
        ],
    ),
    (10, "Sexual Behaviors", &[]),
    (11, "Sleep", &[("Insufficient Sleep", 1101)]),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub id: u32,
    pub sub_topics: BTreeMap<String, u32>,
}

impl Topic {
    pub fn has_sub_topics(&self) -> bool {
        !self.sub_topics.is_empty()
    }

    /// Sub-topic names in ascending alphabetical order.
    pub fn sub_topic_names(&self) -> Vec<String> {
        self.sub_topics.keys().cloned().collect()
    }
}

pub struct TopicTable {
    data: HashMap<String, Topic>,
    order: Vec<String>,
}

impl TopicTable {
    pub fn new() -> TopicTable {
        let mut data = HashMap::with_capacity(TOPIC_SEED.len());
        let mut order = Vec::with_capacity(TOPIC_SEED.len());
        for (id, name, sub_topics) in TOPIC_SEED {
            let sub_topics = sub_topics
                .iter()
                .map(|(sub_name, sub_id)| (sub_name.to_string(), *sub_id))
                .collect::<BTreeMap<String, u32>>();
            data.insert(
                name.to_string(),
                Topic {
                    name: name.to_string(),
                    id: *id,
                    sub_topics,
                },
            );
            order.push(name.to_string());
        }
        TopicTable { data, order }
    }

    pub fn get(&self, name: &str) -> Option<&Topic> {
        self.data.get(name)
    }

    /// Topic names in seed-table order, for selector enumeration.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(|name| name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_names_and_ids_are_unique() {
        let table = TopicTable::new();
        assert_eq!(table.names().len(), TOPIC_SEED.len());
        let mut ids = TOPIC_SEED.iter().map(|(id, _, _)| *id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), TOPIC_SEED.len());
    }

    #[test]
    fn smoking_has_id_seven_and_no_sub_topics() {
        let table = TopicTable::new();
        let smoking = table.get("Smoking").unwrap();
        assert_eq!(smoking.id, 7);
        assert!(!smoking.has_sub_topics());
    }

    #[test]
    fn sub_topic_names_are_sorted() {
        let table = TopicTable::new();
        let tobacco = table.get("Tobacco Use").unwrap();
        assert_eq!(
            tobacco.sub_topic_names(),
            vec!["Cigarette Use", "E-Cigarette Use", "Smokeless Tobacco"]
        );
    }
}
