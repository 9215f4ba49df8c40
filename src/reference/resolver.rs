use super::ReferenceData;

pub const INDICATOR: &str = "Indicator";
pub const DEMOGRAPHIC: &str = "Demographic";

/// Resolve (topic_id, subtopic_id) for a variable at capture time.
///
/// topic_id is looked up whenever the topic name is non-empty and known,
/// regardless of variable type. subtopic_id is looked up only for Indicator
/// variables with a known topic. Unknown names degrade to 0 rather than
/// erroring, so partially-filled or overridden input still captures.
pub fn resolve_ids(
    reference: &ReferenceData,
    var_type: &str,
    topic: &str,
    sub_topic: &str,
) -> (u32, u32) {
    let entry = if topic.is_empty() {
        None
    } else {
        reference.topics.get(topic)
    };
    let topic_id = entry.map(|topic| topic.id).unwrap_or(0);
    let subtopic_id = if var_type == INDICATOR {
        entry
            .and_then(|topic| topic.sub_topics.get(sub_topic).copied())
            .unwrap_or(0)
    } else {
        0
    };
    (topic_id, subtopic_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_topic_and_sub_topic_resolve_for_indicator() {
        let reference = ReferenceData::new();
        assert_eq!(
            resolve_ids(&reference, INDICATOR, "Tobacco Use", "Cigarette Use"),
            (4, 401)
        );
        assert_eq!(
            resolve_ids(&reference, INDICATOR, "Alcohol Use", "Binge Drinking"),
            (1, 101)
        );
    }

    #[test]
    fn non_indicator_never_resolves_sub_topic() {
        let reference = ReferenceData::new();
        assert_eq!(
            resolve_ids(&reference, DEMOGRAPHIC, "Tobacco Use", "Cigarette Use"),
            (4, 0)
        );
    }

    #[test]
    fn empty_topic_resolves_to_zero() {
        let reference = ReferenceData::new();
        assert_eq!(resolve_ids(&reference, INDICATOR, "", "Cigarette Use"), (0, 0));
        assert_eq!(resolve_ids(&reference, DEMOGRAPHIC, "", ""), (0, 0));
    }

    #[test]
    fn unknown_names_degrade_to_zero() {
        let reference = ReferenceData::new();
        assert_eq!(
            resolve_ids(&reference, INDICATOR, "UnknownTopic", "Cigarette Use"),
            (0, 0)
        );
        assert_eq!(
            resolve_ids(&reference, INDICATOR, "Tobacco Use", "UnknownSub"),
            (4, 0)
        );
    }
}
