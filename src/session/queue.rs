use crate::generator::VariableRecord;

/// Ordered, session-scoped collection of captured records. Insertion order
/// is the generation order; never reordered or deduplicated.
#[derive(Debug, Default)]
pub struct Queue {
    records: Vec<VariableRecord>,
}

impl Queue {
    pub fn new() -> Queue {
        Queue {
            records: Vec::new(),
        }
    }

    pub fn append(&mut self, record: VariableRecord) {
        self.records.push(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[VariableRecord] {
        &self.records
    }

    /// One display line per record, in queue order.
    pub fn summary(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                format!(
                    "{}. [{}] {} - {} ({}) Levels: {}",
                    index + 1,
                    record.dataset,
                    record.var_code,
                    record.var_name,
                    record.var_type,
                    record.levels.len()
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Population;

    fn record() -> VariableRecord {
        VariableRecord {
            dataset: "YRBS".into(),
            dataset_name: "Youth Risk Behavior Surveillance System".into(),
            population: Some(Population::Youth),
            tag_suffix: "YRBS".into(),
            var_code: "Q1".into(),
            var_name: "Smoke30".into(),
            description: "Smoked in last 30 days".into(),
            var_type: "Indicator".into(),
            topic: "Smoking".into(),
            sub_topic: String::new(),
            topic_id: 7,
            subtopic_id: 0,
            levels: vec!["Yes".into(), "No".into()],
        }
    }

    #[test]
    fn summary_line_format() {
        let mut queue = Queue::new();
        assert!(queue.is_empty());
        queue.append(record());
        assert_eq!(
            queue.summary(),
            vec!["1. [YRBS] Q1 - Smoke30 (Indicator) Levels: 2"]
        );
    }

    #[test]
    fn clear_empties_regardless_of_size() {
        let mut queue = Queue::new();
        queue.append(record());
        queue.append(record());
        assert_eq!(queue.len(), 2);
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.summary().is_empty());
    }
}
