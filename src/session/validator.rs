use crate::generator::VarType;
use crate::reference::{ReferenceData, INDICATOR};

use super::form::FormState;

pub const LABEL_DATASET: &str = "Survey Dataset";
pub const LABEL_VAR_CODE: &str = "Variable Code";
pub const LABEL_VAR_NAME: &str = "Variable Name";
pub const LABEL_DESCRIPTION: &str = "Description";
pub const LABEL_VAR_TYPE: &str = "Variable Type";
pub const LABEL_TOPIC: &str = "Topic (with Sub-Topics)";
pub const LABEL_SUB_TOPIC: &str = "Sub-Topic";
pub const LABEL_NUM_LEVELS: &str = "Number of Levels (2-6)";

/// Missing or invalid required fields, as display labels in a fixed order:
/// dataset, code, name, description, type, topic/sub-topic (Indicator
/// only), level count, then blank level names in ascending position.
pub fn validate(form: &FormState, reference: &ReferenceData) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    if form.dataset.trim().is_empty() {
        missing.push(LABEL_DATASET.into());
    }
    if form.var_code.trim().is_empty() {
        missing.push(LABEL_VAR_CODE.into());
    }
    if form.var_name.trim().is_empty() {
        missing.push(LABEL_VAR_NAME.into());
    }
    if form.description.trim().is_empty() {
        missing.push(LABEL_DESCRIPTION.into());
    }
    if form.var_type.parse::<VarType>().is_err() {
        missing.push(LABEL_VAR_TYPE.into());
    }
    if form.var_type == INDICATOR {
        let topic_with_subs = reference
            .topics
            .get(&form.topic)
            .map_or(false, |topic| topic.has_sub_topics());
        if !topic_with_subs {
            missing.push(LABEL_TOPIC.into());
        }
        if form.sub_topic.trim().is_empty() {
            missing.push(LABEL_SUB_TOPIC.into());
        }
    }
    let slots = form.level_slots();
    if slots == 0 {
        missing.push(LABEL_NUM_LEVELS.into());
    }
    for index in 0..slots {
        let blank = form
            .levels
            .get(index)
            .map_or(true, |level| level.trim().is_empty());
        if blank {
            missing.push(format!("Level {} Name", index + 1));
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::DEMOGRAPHIC;

    fn filled_form() -> FormState {
        FormState {
            dataset: "YRBS".into(),
            var_code: "Q33".into(),
            var_name: "Vape30".into(),
            description: "Used an electronic vapor product in last 30 days".into(),
            var_type: INDICATOR.into(),
            topic: "Tobacco Use".into(),
            sub_topic: "E-Cigarette Use".into(),
            num_levels: "2".into(),
            levels: vec!["Yes".into(), "No".into()],
        }
    }

    #[test]
    fn complete_form_passes() {
        let reference = ReferenceData::new();
        assert!(validate(&filled_form(), &reference).is_empty());
    }

    #[test]
    fn empty_form_flags_in_fixed_order() {
        let reference = ReferenceData::new();
        let mut form = FormState::default();
        form.num_levels = "nine".into();
        let missing = validate(&form, &reference);
        assert_eq!(
            missing,
            vec![
                LABEL_DATASET,
                LABEL_VAR_CODE,
                LABEL_VAR_NAME,
                LABEL_DESCRIPTION,
                LABEL_TOPIC,
                LABEL_SUB_TOPIC,
                LABEL_NUM_LEVELS,
            ]
        );
    }

    #[test]
    fn topic_without_sub_topics_is_flagged() {
        let reference = ReferenceData::new();
        let mut form = filled_form();
        form.topic = "Smoking".into();
        form.sub_topic = String::new();
        let missing = validate(&form, &reference);
        assert_eq!(missing, vec![LABEL_TOPIC, LABEL_SUB_TOPIC]);
    }

    #[test]
    fn demographic_never_requires_topic() {
        let reference = ReferenceData::new();
        let mut form = filled_form();
        form.var_type = DEMOGRAPHIC.into();
        form.topic = String::new();
        form.sub_topic = String::new();
        assert!(validate(&form, &reference).is_empty());
    }

    #[test]
    fn unrecognized_var_type_is_flagged() {
        let reference = ReferenceData::new();
        let mut form = filled_form();
        form.var_type = "Outcome".into();
        assert_eq!(validate(&form, &reference), vec![LABEL_VAR_TYPE]);
    }

    #[test]
    fn invalid_level_count_skips_level_name_checks() {
        let reference = ReferenceData::new();
        let mut form = filled_form();
        form.num_levels = "0".into();
        form.levels = vec![String::new(); 2];
        assert_eq!(validate(&form, &reference), vec![LABEL_NUM_LEVELS]);
    }

    #[test]
    fn blank_levels_are_flagged_by_position() {
        let reference = ReferenceData::new();
        let mut form = filled_form();
        form.num_levels = "4".into();
        form.levels = vec!["Yes".into(), " ".into(), "Maybe".into(), String::new()];
        assert_eq!(
            validate(&form, &reference),
            vec!["Level 2 Name", "Level 4 Name"]
        );
    }
}
