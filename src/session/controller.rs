use tracing::{debug, info};

use crate::generator::{expand, VariableRecord};
use crate::reference::{resolve_ids, ReferenceData, INDICATOR};

use super::form::FormState;
use super::queue::Queue;
use super::validator::validate;

pub const EMPTY_QUEUE_OUTPUT: &str = "No variables to generate SAS code.";
const EMPTY_QUEUE_ERROR: &str = "Queue is empty. Add at least one variable before generating.";

/// Result of an add request: either the record went straight into the
/// queue, or validation found missing fields and the caller must ask the
/// user before committing.
#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    NeedsConfirmation(Vec<String>),
}

/// Session-scoped workflow state: the queue, the reference tables, and the
/// last error message. One instance per interactive session; no process
/// globals.
pub struct Session {
    reference: ReferenceData,
    queue: Queue,
    last_error: Option<String>,
}

impl Session {
    pub fn new() -> Session {
        Session {
            reference: ReferenceData::new(),
            queue: Queue::new(),
            last_error: None,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Validate and, if clean, capture and queue the record. Missing fields
    /// are returned for an explicit user decision; the queue is untouched
    /// until that decision comes back via `confirm_add` or `cancel_add`.
    pub fn request_add(&mut self, form: &FormState) -> AddOutcome {
        let missing = validate(form, &self.reference);
        if missing.is_empty() {
            self.append(form);
            AddOutcome::Added
        } else {
            debug!(?missing, "add requires confirmation");
            AddOutcome::NeedsConfirmation(missing)
        }
    }

    /// Queue the record with the entered values as-is, never auto-filled.
    pub fn confirm_add(&mut self, form: &FormState) {
        self.append(form);
    }

    /// Abandon the add, keeping the missing-field list for display.
    pub fn cancel_add(&mut self, missing: &[String]) {
        self.last_error = Some(format!("Missing fields: {}", missing.join(", ")));
    }

    pub fn clear(&mut self) {
        info!(records = self.queue.len(), "queue cleared");
        self.queue.clear();
    }

    /// The rendered-output view: a pure derivation of the current queue.
    pub fn output_view(&self) -> String {
        if self.queue.is_empty() {
            EMPTY_QUEUE_OUTPUT.to_string()
        } else {
            self.queue.records().iter().map(expand).collect()
        }
    }

    /// Explicit generate trigger. Does not mutate the queue; an empty queue
    /// sets the last error and still yields the placeholder message.
    pub fn generate(&mut self) -> String {
        if self.queue.is_empty() {
            self.last_error = Some(EMPTY_QUEUE_ERROR.to_string());
        } else {
            info!(records = self.queue.len(), "code generated");
            self.last_error = None;
        }
        self.output_view()
    }

    fn append(&mut self, form: &FormState) {
        let record = capture(form, &self.reference);
        info!(
            dataset = %record.dataset,
            var_code = %record.var_code,
            levels = record.levels.len(),
            "variable queued"
        );
        self.queue.append(record);
        self.last_error = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Freeze the current form values into a record. Survey metadata and the
/// resolved ids are copied in here and never recomputed afterwards.
fn capture(form: &FormState, reference: &ReferenceData) -> VariableRecord {
    let (topic_id, subtopic_id) =
        resolve_ids(reference, &form.var_type, &form.topic, &form.sub_topic);
    let survey = reference.surveys.get(&form.dataset);
    let is_indicator = form.var_type == INDICATOR;
    let topic_has_subs = reference
        .topics
        .get(&form.topic)
        .map_or(false, |topic| topic.has_sub_topics());
    let slots = form.level_slots();
    let mut levels = form.levels.clone();
    if slots > 0 {
        levels.resize(slots, String::new());
    }
    VariableRecord {
        dataset: form.dataset.clone(),
        dataset_name: survey
            .map(|survey| survey.full_name.clone())
            .unwrap_or_default(),
        population: survey.map(|survey| survey.population),
        tag_suffix: survey
            .map(|survey| survey.tag_suffix.clone())
            .unwrap_or_default(),
        var_code: form.var_code.clone(),
        var_name: form.var_name.clone(),
        description: form.description.clone(),
        var_type: form.var_type.clone(),
        topic: if is_indicator {
            form.topic.clone()
        } else {
            String::new()
        },
        sub_topic: if is_indicator && topic_has_subs {
            form.sub_topic.clone()
        } else {
            String::new()
        },
        topic_id,
        subtopic_id,
        levels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Population;
    use crate::session::validator::{LABEL_SUB_TOPIC, LABEL_TOPIC};

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
    fn clean_add_appends_and_clears_error() {
        let mut session = Session::new();
        assert_eq!(session.request_add(&filled_form()), AddOutcome::Added);
        assert_eq!(session.queue().len(), 1);
        assert!(session.last_error().is_none());
        let record = &session.queue().records()[0];
        assert_eq!(record.topic_id, 4);
        assert_eq!(record.subtopic_id, 403);
        assert_eq!(record.population, Some(Population::Youth));
        assert_eq!(record.dataset_name, "Youth Risk Behavior Surveillance System");
    }

    #[test]
    fn override_add_freezes_incomplete_data_as_is() {
        // End-to-end scenario: Smoking has id 7 and no sub-topics.
        let mut session = Session::new();
        let mut form = filled_form();
        form.var_code = "Q1".into();
        form.var_name = "Smoke30".into();
        form.description = "Smoked in last 30 days".into();
        form.topic = "Smoking".into();
        form.sub_topic = String::new();
        match session.request_add(&form) {
            AddOutcome::NeedsConfirmation(missing) => {
                assert_eq!(missing, vec![LABEL_TOPIC, LABEL_SUB_TOPIC]);
                session.confirm_add(&form);
            }
            AddOutcome::Added => panic!("expected confirmation"),
        }
        let record = &session.queue().records()[0];
        assert_eq!(record.topic_id, 7);
        assert_eq!(record.subtopic_id, 0);
        assert_eq!(record.topic, "Smoking");
        assert_eq!(record.sub_topic, "");
    }

    #[test]
    fn cancel_keeps_queue_and_records_error() {
        let mut session = Session::new();
        let mut form = filled_form();
        form.var_code = String::new();
        match session.request_add(&form) {
            AddOutcome::NeedsConfirmation(missing) => session.cancel_add(&missing),
            AddOutcome::Added => panic!("expected confirmation"),
        }
        assert!(session.queue().is_empty());
        assert_eq!(
            session.last_error(),
            Some("Missing fields: Variable Code")
        );
    }

    #[test]
    fn generate_with_empty_queue_yields_placeholder() {
        let mut session = Session::new();
        assert_eq!(session.generate(), EMPTY_QUEUE_OUTPUT);
        assert!(session.last_error().is_some());
    }

    #[test]
    fn generate_concatenates_in_queue_order() {
        let mut session = Session::new();
        session.request_add(&filled_form());
        let mut second = filled_form();
        second.var_code = "Q34".into();
        second.var_name = "VapeDaily".into();
        session.request_add(&second);
        let out = session.generate();
        let first = out.find("Var_Code=\"Q33\";").unwrap();
        let after = out.find("Var_Code=\"Q34\";").unwrap();
        assert!(first < after);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn unknown_dataset_freezes_empty_survey_metadata() {
        let mut session = Session::new();
        let mut form = filled_form();
        form.dataset = "NOPE".into();
        session.confirm_add(&form);
        let record = &session.queue().records()[0];
        assert_eq!(record.dataset, "NOPE");
        assert_eq!(record.dataset_name, "");
        assert_eq!(record.population, None);
        assert_eq!(record.tag_suffix, "");
    }

    #[test]
    fn clear_resets_unconditionally() {
        let mut session = Session::new();
        session.request_add(&filled_form());
        session.clear();
        assert!(session.queue().is_empty());
        assert_eq!(session.output_view(), EMPTY_QUEUE_OUTPUT);
    }
}
