use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use strum::IntoEnumIterator;
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::generator::VarType;
use crate::reference::INDICATOR;
use crate::session::{AddOutcome, FormState, Session, MAX_LEVELS, MIN_LEVELS};

/// Focusable form fields. Topic/Sub-Topic drop out of the cycle while they
/// are disabled, level fields grow and shrink with the level count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Dataset,
    VarCode,
    VarName,
    Description,
    VarType,
    Topic,
    SubTopic,
    NumLevels,
    Level(usize),
}

impl Field {
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Field::VarCode | Field::VarName | Field::Description | Field::Level(_)
        )
    }
}

/// Modal state while the user decides whether to add despite missing
/// fields.
pub struct ConfirmState {
    pub missing: Vec<String>,
    pub add_anyway: bool,
}

pub struct App {
    pub session: Session,
    pub form: FormState,
    pub focus: Field,
    pub editor: Input,
    pub confirm: Option<ConfirmState>,
    pub status: Option<String>,
    pub output: String,
    quit: bool,
}

impl App {
    pub fn new() -> App {
        let session = Session::new();
        let output = session.output_view();
        App {
            session,
            form: FormState::default(),
            focus: Field::Dataset,
            editor: Input::default(),
            confirm: None,
            status: None,
            output,
            quit: false,
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.quit {
            terminal.draw(|frame| super::view::draw(frame, self))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Focus cycle for the current form shape.
    pub fn field_order(&self) -> Vec<Field> {
        let mut fields = vec![
            Field::Dataset,
            Field::VarCode,
            Field::VarName,
            Field::Description,
            Field::VarType,
        ];
        if self.form.var_type == INDICATOR {
            fields.push(Field::Topic);
            if !self
                .form
                .sub_topic_options(self.session.reference())
                .is_empty()
            {
                fields.push(Field::SubTopic);
            }
        }
        fields.push(Field::NumLevels);
        for index in 0..self.form.levels.len() {
            fields.push(Field::Level(index));
        }
        fields
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.quit = true,
                KeyCode::Char('a') => self.add_to_queue(),
                KeyCode::Char('l') => self.clear_queue(),
                KeyCode::Char('g') => self.generate(),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus_move(1),
            KeyCode::BackTab | KeyCode::Up => self.focus_move(-1),
            _ => self.handle_field_key(key),
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                if let Some(confirm) = self.confirm.as_mut() {
                    confirm.add_anyway = !confirm.add_anyway;
                }
            }
            KeyCode::Enter => {
                if let Some(confirm) = self.confirm.take() {
                    if confirm.add_anyway {
                        self.session.confirm_add(&self.form);
                        self.status = Some("Variable added with missing fields.".to_string());
                        self.output = self.session.output_view();
                    } else {
                        self.session.cancel_add(&confirm.missing);
                        self.status = None;
                    }
                }
            }
            KeyCode::Esc => {
                if let Some(confirm) = self.confirm.take() {
                    self.session.cancel_add(&confirm.missing);
                    self.status = None;
                }
            }
            _ => {}
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        match self.focus {
            Field::Dataset => {
                let options = self.dataset_options();
                self.cycle_selector(key.code, &options, |form, value| form.dataset = value);
            }
            Field::VarType => {
                let options = VarType::iter()
                    .map(|var_type| var_type.to_string())
                    .collect::<Vec<String>>();
                if self.cycle_selector(key.code, &options, |form, value| form.var_type = value) {
                    self.on_var_type_changed();
                }
            }
            Field::Topic => {
                let options = self.topic_options();
                if self.cycle_selector(key.code, &options, |form, value| form.topic = value) {
                    self.on_topic_changed();
                }
            }
            Field::SubTopic => {
                let options = self.form.sub_topic_options(self.session.reference());
                self.cycle_selector(key.code, &options, |form, value| form.sub_topic = value);
            }
            Field::NumLevels => self.step_levels(key.code),
            Field::VarCode | Field::VarName | Field::Description | Field::Level(_) => {
                self.editor.handle_event(&Event::Key(key));
                self.write_back();
            }
        }
    }

    fn add_to_queue(&mut self) {
        match self.session.request_add(&self.form) {
            AddOutcome::Added => {
                self.status = Some("Variable added to queue.".to_string());
                self.output = self.session.output_view();
            }
            AddOutcome::NeedsConfirmation(missing) => {
                self.confirm = Some(ConfirmState {
                    missing,
                    add_anyway: false,
                });
            }
        }
    }

    fn clear_queue(&mut self) {
        self.session.clear();
        self.status = Some("Queue cleared.".to_string());
        self.output = self.session.output_view();
    }

    fn generate(&mut self) {
        self.output = self.session.generate();
        self.status = if self.session.last_error().is_none() {
            Some("SAS code generated.".to_string())
        } else {
            None
        };
    }

    fn focus_move(&mut self, step: isize) {
        let order = self.field_order();
        let position = order
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0) as isize;
        let next = (position + step).rem_euclid(order.len() as isize) as usize;
        self.set_focus(order[next]);
    }

    fn set_focus(&mut self, field: Field) {
        self.focus = field;
        if field.is_text() {
            self.editor = Input::new(self.text_value(field).to_string());
        }
    }

    fn ensure_focus(&mut self) {
        let order = self.field_order();
        if !order.contains(&self.focus) {
            self.set_focus(Field::NumLevels);
        }
    }

    pub fn text_value(&self, field: Field) -> &str {
        match field {
            Field::VarCode => &self.form.var_code,
            Field::VarName => &self.form.var_name,
            Field::Description => &self.form.description,
            Field::Level(index) => self.form.levels.get(index).map_or("", |level| level),
            _ => "",
        }
    }

    fn write_back(&mut self) {
        let value = self.editor.value().to_string();
        match self.focus {
            Field::VarCode => self.form.var_code = value,
            Field::VarName => self.form.var_name = value,
            Field::Description => self.form.description = value,
            Field::Level(index) => {
                if let Some(level) = self.form.levels.get_mut(index) {
                    *level = value;
                }
            }
            _ => {}
        }
    }

    pub fn dataset_options(&self) -> Vec<String> {
        self.session
            .reference()
            .surveys
            .codes()
            .into_iter()
            .map(|code| code.to_string())
            .collect()
    }

    pub fn topic_options(&self) -> Vec<String> {
        self.session
            .reference()
            .topics
            .names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Cycle a single-choice selector with Left/Right. Returns true when
    /// the selection changed.
    fn cycle_selector(
        &mut self,
        code: KeyCode,
        options: &[String],
        apply: impl Fn(&mut FormState, String),
    ) -> bool {
        if options.is_empty() {
            return false;
        }
        let forward = match code {
            KeyCode::Right | KeyCode::Char(' ') => true,
            KeyCode::Left => false,
            _ => return false,
        };
        let current = match self.focus {
            Field::Dataset => self.form.dataset.as_str(),
            Field::VarType => self.form.var_type.as_str(),
            Field::Topic => self.form.topic.as_str(),
            Field::SubTopic => self.form.sub_topic.as_str(),
            _ => return false,
        };
        let position = options.iter().position(|option| option == current);
        let next = match (position, forward) {
            (Some(index), true) => (index + 1) % options.len(),
            (Some(index), false) => (index + options.len() - 1) % options.len(),
            (None, true) => 0,
            (None, false) => options.len() - 1,
        };
        apply(&mut self.form, options[next].clone());
        true
    }

    fn on_var_type_changed(&mut self) {
        if self.form.var_type != INDICATOR {
            self.form.topic.clear();
            self.form.sub_topic.clear();
        }
        self.default_sub_topic();
        self.ensure_focus();
    }

    fn on_topic_changed(&mut self) {
        self.default_sub_topic();
        self.ensure_focus();
    }

    // First option alphabetically is the default selection whenever the
    // upstream fields change.
    fn default_sub_topic(&mut self) {
        let options = self.form.sub_topic_options(self.session.reference());
        self.form.sub_topic = options.into_iter().next().unwrap_or_default();
    }

    fn step_levels(&mut self, code: KeyCode) {
        let current = self.form.level_slots().max(MIN_LEVELS);
        let next = match code {
            KeyCode::Right | KeyCode::Char('+') => (current + 1).min(MAX_LEVELS),
            KeyCode::Left | KeyCode::Char('-') => (current - 1).max(MIN_LEVELS),
            _ => return,
        };
        self.form.num_levels = next.to_string();
        self.form.sync_level_inputs();
        self.ensure_focus();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
