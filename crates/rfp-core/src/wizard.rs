//! Submission Wizard State
//!
//! A multi-step form: each step names the fields that must validate before
//! "next" leaves it, the final step is review-only, and submit re-checks
//! every field because going back never re-validates.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, SubmitError};
use crate::notify::{Notice, Notifier};
use crate::validation::{FieldErrors, Rule, RuleSet};

/// Fields of the RFP submission form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKey {
    #[serde(rename = "rfpTitle")]
    Title,
    #[serde(rename = "clientName")]
    ClientName,
    #[serde(rename = "dueDate")]
    DueDate,
    #[serde(rename = "submissionRequirements")]
    Requirements,
    #[serde(rename = "teamNotes")]
    Notes,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Title,
        FieldKey::ClientName,
        FieldKey::DueDate,
        FieldKey::Requirements,
        FieldKey::Notes,
    ];

    /// Form control id
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "rfpTitle",
            FieldKey::ClientName => "clientName",
            FieldKey::DueDate => "dueDate",
            FieldKey::Requirements => "submissionRequirements",
            FieldKey::Notes => "teamNotes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Title => "RFP Title",
            FieldKey::ClientName => "Client Name",
            FieldKey::DueDate => "Due Date",
            FieldKey::Requirements => "Submission Requirements",
            FieldKey::Notes => "Internal Team Notes",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current raw value of every form field (absent = empty)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<FieldKey, String>);

impl FormValues {
    pub fn get(&self, field: FieldKey) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FieldKey, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// The finalized record emitted by a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub values: FormValues,
}

/// One page of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardStep {
    pub name: String,
    /// Validated before leaving this step; empty on the review step
    pub fields: Vec<FieldKey>,
}

impl WizardStep {
    pub fn new(name: impl Into<String>, fields: impl Into<Vec<FieldKey>>) -> Self {
        Self { name: name.into(), fields: fields.into() }
    }
}

/// Result of pressing "next"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward to this step index
    Moved(usize),
    /// Stayed put; these fields failed
    Blocked(FieldErrors<FieldKey>),
    /// Already on the final step
    AtEnd,
}

#[derive(Debug, Clone)]
pub struct WizardState {
    steps: Vec<WizardStep>,
    rules: RuleSet<FieldKey>,
    index: usize,
    values: FormValues,
    errors: FieldErrors<FieldKey>,
    focus: Option<FieldKey>,
    submitting: bool,
    complete: bool,
}

impl WizardState {
    /// Build a wizard from custom steps and rules.
    ///
    /// The final step must be review-only and every step field needs at
    /// least one rule.
    pub fn new(steps: Vec<WizardStep>, rules: RuleSet<FieldKey>) -> CoreResult<Self> {
        let last = steps.last().ok_or(CoreError::NoSteps)?;
        if !last.fields.is_empty() {
            return Err(CoreError::FieldsOnReviewStep { step: last.name.clone() });
        }
        if let Some(field) = steps
            .iter()
            .flat_map(|s| s.fields.iter().copied())
            .find(|f| !rules.has_rule(*f))
        {
            return Err(CoreError::UnruledField { field });
        }
        Ok(Self::fresh(steps, rules))
    }

    /// The three-step RFP submission form
    pub fn rfp() -> Self {
        Self::fresh(Self::rfp_steps(), Self::rfp_rules())
    }

    pub fn rfp_steps() -> Vec<WizardStep> {
        vec![
            WizardStep::new("RFP Details", [FieldKey::Title, FieldKey::ClientName, FieldKey::DueDate]),
            WizardStep::new("Requirements", [FieldKey::Requirements, FieldKey::Notes]),
            WizardStep::new("Review & Submit", []),
        ]
    }

    pub fn rfp_rules() -> RuleSet<FieldKey> {
        RuleSet::new()
            .with(FieldKey::Title, Rule::MinChars(5), "Title must be at least 5 characters")
            .with(FieldKey::ClientName, Rule::MinChars(2), "Client name is required")
            .with(FieldKey::DueDate, Rule::iso_date(), "Please enter a valid date (YYYY-MM-DD)")
            .with(FieldKey::Requirements, Rule::MinChars(10), "Please outline submission requirements")
            .with(FieldKey::Notes, Rule::Optional, "")
    }

    fn fresh(steps: Vec<WizardStep>, rules: RuleSet<FieldKey>) -> Self {
        Self {
            steps,
            rules,
            index: 0,
            values: FormValues::default(),
            errors: FieldErrors::default(),
            focus: None,
            submitting: false,
            complete: false,
        }
    }

    /// Back to step 0 with empty values
    pub fn reset(&mut self) {
        let steps = std::mem::take(&mut self.steps);
        let rules = std::mem::take(&mut self.rules);
        *self = Self::fresh(steps, rules);
    }

    // ========================
    // Snapshot
    // ========================

    pub fn step_index(&self) -> usize {
        self.index
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn current_step(&self) -> &WizardStep {
        &self.steps[self.index]
    }

    pub fn is_first_step(&self) -> bool {
        self.index == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.index + 1 == self.steps.len()
    }

    /// Step that owns `field`, if any
    pub fn step_of(&self, field: FieldKey) -> Option<usize> {
        self.steps.iter().position(|s| s.fields.contains(&field))
    }

    /// Whether an empty value fails this field's rule
    pub fn is_required(&self, field: FieldKey) -> bool {
        self.rules.check(field, "").is_some()
    }

    pub fn value(&self, field: FieldKey) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn error(&self, field: FieldKey) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors<FieldKey> {
        &self.errors
    }

    /// Field the view should focus, if validation asked for one
    pub fn focus(&self) -> Option<FieldKey> {
        self.focus
    }

    pub fn take_focus(&mut self) -> Option<FieldKey> {
        self.focus.take()
    }

    /// Only true inside `submit`, so always false between events
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Label/value pairs for the review step
    pub fn review_rows(&self) -> Vec<(&'static str, String)> {
        let notes = match self.value(FieldKey::Notes) {
            "" => "N/A".to_string(),
            notes => notes.to_string(),
        };
        vec![
            ("Title", self.value(FieldKey::Title).to_string()),
            ("Client", self.value(FieldKey::ClientName).to_string()),
            ("Due Date", self.value(FieldKey::DueDate).to_string()),
            ("Requirements", self.value(FieldKey::Requirements).to_string()),
            ("Notes", notes),
        ]
    }

    // ========================
    // Transitions
    // ========================

    /// Store a field value and re-check it right away
    pub fn set_value(&mut self, field: FieldKey, value: impl Into<String>) {
        self.values.set(field, value);
        match self.rules.check(field, self.values.get(field)) {
            Some(message) => {
                let message = message.to_string();
                self.errors.insert(field, message);
            }
            None => self.errors.remove(field),
        }
    }

    /// Validate the current step's fields and move forward if they pass
    pub fn advance(&mut self) -> Advance {
        if self.is_last_step() {
            return Advance::AtEnd;
        }
        let step = &self.steps[self.index];
        let failed = self
            .rules
            .validate(step.fields.iter().copied(), |f| self.values.get(f));
        for field in &step.fields {
            self.errors.remove(*field);
        }

        if failed.is_empty() {
            self.index += 1;
            self.focus = None;
            Advance::Moved(self.index)
        } else {
            self.focus = failed.first();
            self.errors.extend(failed.clone());
            Advance::Blocked(failed)
        }
    }

    /// Step back; never validates
    pub fn retreat(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    /// Validate every field and emit the finalized record.
    ///
    /// Only allowed from the final step. The notifier hears about both
    /// success and validation failure.
    pub fn submit(&mut self, notifier: &impl Notifier) -> Result<Submission, SubmitError> {
        if !self.is_last_step() {
            return Err(SubmitError::NotAtFinalStep { step: self.index });
        }

        let all_fields = self.steps.iter().flat_map(|s| s.fields.iter().copied());
        let failed = self.rules.validate(all_fields, |f| self.values.get(f));
        if !failed.is_empty() {
            self.errors = failed.clone();
            self.focus = failed.first();
            notifier.announce(Notice::failure(
                "Submission incomplete",
                format!("{} field(s) need attention before submitting.", failed.len()),
            ));
            return Err(SubmitError::Invalid(failed));
        }

        self.submitting = true;
        self.errors.clear();
        let submission = Submission { values: self.values.clone() };
        notifier.announce(Notice::success(
            "RFP Submitted Successfully!",
            "The RFP details have been saved.",
        ));
        self.submitting = false;
        self.complete = true;
        Ok(submission)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::rfp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoticeLevel;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn announce(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    fn fill_details(wizard: &mut WizardState) {
        wizard.set_value(FieldKey::Title, "Testt");
        wizard.set_value(FieldKey::ClientName, "Acme");
        wizard.set_value(FieldKey::DueDate, "2024-09-15");
    }

    fn at_review(wizard: &mut WizardState) {
        fill_details(wizard);
        wizard.set_value(FieldKey::Requirements, "Three signed copies");
        assert_eq!(wizard.advance(), Advance::Moved(1));
        assert_eq!(wizard.advance(), Advance::Moved(2));
    }

    #[test]
    fn test_initial_state() {
        let wizard = WizardState::rfp();
        assert_eq!(wizard.step_index(), 0);
        assert_eq!(wizard.step_count(), 3);
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.value(FieldKey::Title), "");
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_advance_blocks_on_short_title() {
        let mut wizard = WizardState::rfp();
        fill_details(&mut wizard);
        wizard.set_value(FieldKey::Title, "Test");

        let outcome = wizard.advance();
        assert!(matches!(outcome, Advance::Blocked(ref e) if e.fields().collect::<Vec<_>>() == vec![FieldKey::Title]));
        assert_eq!(wizard.step_index(), 0);
        assert_eq!(wizard.error(FieldKey::Title), Some("Title must be at least 5 characters"));
        assert_eq!(wizard.focus(), Some(FieldKey::Title));
    }

    #[test]
    fn test_advance_moves_when_step_valid() {
        let mut wizard = WizardState::rfp();
        fill_details(&mut wizard);

        assert_eq!(wizard.advance(), Advance::Moved(1));
        assert_eq!(wizard.step_index(), 1);
        assert_eq!(wizard.focus(), None);
    }

    #[test]
    fn test_advance_only_checks_current_step() {
        let mut wizard = WizardState::rfp();
        fill_details(&mut wizard);
        // requirements still empty, but they belong to step 1
        assert_eq!(wizard.advance(), Advance::Moved(1));
        assert_eq!(wizard.error(FieldKey::Requirements), None);

        let outcome = wizard.advance();
        assert!(matches!(outcome, Advance::Blocked(_)));
        assert_eq!(wizard.step_index(), 1);
        assert_eq!(wizard.focus(), Some(FieldKey::Requirements));
    }

    #[test]
    fn test_focus_goes_to_first_failing_field() {
        let mut wizard = WizardState::rfp();
        wizard.set_value(FieldKey::Title, "Long enough");
        wizard.advance();
        assert_eq!(wizard.focus(), Some(FieldKey::ClientName));
        assert_eq!(wizard.errors().len(), 2);
        assert_eq!(wizard.take_focus(), Some(FieldKey::ClientName));
        assert_eq!(wizard.focus(), None);
    }

    #[test]
    fn test_advance_at_end_keeps_index() {
        let mut wizard = WizardState::rfp();
        at_review(&mut wizard);
        assert_eq!(wizard.advance(), Advance::AtEnd);
        assert_eq!(wizard.step_index(), 2);
    }

    #[test]
    fn test_retreat_floors_at_zero() {
        let mut wizard = WizardState::rfp();
        assert_eq!(wizard.retreat(), 0);

        at_review(&mut wizard);
        assert_eq!(wizard.retreat(), 1);
        assert_eq!(wizard.retreat(), 0);
        assert_eq!(wizard.retreat(), 0);
    }

    #[test]
    fn test_set_value_revalidates_field() {
        let mut wizard = WizardState::rfp();
        wizard.set_value(FieldKey::ClientName, "A");
        assert_eq!(wizard.error(FieldKey::ClientName), Some("Client name is required"));
        wizard.set_value(FieldKey::ClientName, "Acme");
        assert_eq!(wizard.error(FieldKey::ClientName), None);
        wizard.set_value(FieldKey::Notes, "");
        assert_eq!(wizard.error(FieldKey::Notes), None);
    }

    #[test]
    fn test_submit_emits_values_and_notifies() {
        let mut wizard = WizardState::rfp();
        at_review(&mut wizard);
        let notifier = RecordingNotifier::default();

        let submission = wizard.submit(&notifier).unwrap();
        assert_eq!(&submission.values, wizard.values());
        assert!(wizard.is_complete());
        assert!(!wizard.is_submitting());

        let notices = notifier.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[0].title, "RFP Submitted Successfully!");
    }

    #[test]
    fn test_submit_catches_values_changed_after_their_step() {
        let mut wizard = WizardState::rfp();
        at_review(&mut wizard);
        wizard.set_value(FieldKey::ClientName, "");
        assert_eq!(wizard.step_index(), 2);
        let notifier = RecordingNotifier::default();

        let err = wizard.submit(&notifier).unwrap_err();
        let SubmitError::Invalid(errors) = err else {
            panic!("expected field errors");
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FieldKey::ClientName]);
        assert_eq!(wizard.error(FieldKey::ClientName), Some("Client name is required"));
        assert!(!wizard.is_complete());

        let notices = notifier.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Failure);
    }

    #[test]
    fn test_submit_rejected_before_final_step() {
        let mut wizard = WizardState::rfp();
        fill_details(&mut wizard);
        let notifier = RecordingNotifier::default();

        assert_eq!(wizard.submit(&notifier), Err(SubmitError::NotAtFinalStep { step: 0 }));
        assert!(notifier.notices.borrow().is_empty());
    }

    #[test]
    fn test_labels_leave_optional_marker_to_the_view() {
        for field in FieldKey::ALL {
            assert!(!field.label().to_lowercase().contains("optional"), "{}", field);
        }
    }

    #[test]
    fn test_only_notes_is_optional() {
        let wizard = WizardState::rfp();
        let optional: Vec<_> = FieldKey::ALL.into_iter().filter(|f| !wizard.is_required(*f)).collect();
        assert_eq!(optional, vec![FieldKey::Notes]);
    }

    #[test]
    fn test_review_rows_show_na_for_missing_notes() {
        let mut wizard = WizardState::rfp();
        at_review(&mut wizard);
        let rows = wizard.review_rows();
        assert_eq!(rows[0], ("Title", "Testt".to_string()));
        assert_eq!(rows[4], ("Notes", "N/A".to_string()));
    }

    #[test]
    fn test_new_rejects_bad_definitions() {
        assert!(matches!(
            WizardState::new(Vec::new(), WizardState::rfp_rules()),
            Err(CoreError::NoSteps)
        ));
        assert!(matches!(
            WizardState::new(vec![WizardStep::new("Only", [FieldKey::Title])], WizardState::rfp_rules()),
            Err(CoreError::FieldsOnReviewStep { .. })
        ));
        let rules = RuleSet::new().with(FieldKey::Title, Rule::MinChars(1), "required");
        assert!(matches!(
            WizardState::new(
                vec![WizardStep::new("One", [FieldKey::Title, FieldKey::DueDate]), WizardStep::new("Review", [])],
                rules,
            ),
            Err(CoreError::UnruledField { field: FieldKey::DueDate })
        ));
    }

    #[test]
    fn test_reset_returns_to_fresh_state() {
        let mut wizard = WizardState::rfp();
        at_review(&mut wizard);
        wizard.reset();
        assert_eq!(wizard.step_index(), 0);
        assert_eq!(wizard.value(FieldKey::Title), "");
        assert_eq!(wizard.step_count(), 3);
    }
}
