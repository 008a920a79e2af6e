//! End-to-end scenarios: rule evaluation through the public engine and the
//! submission gate against an in-memory form.

use formcheck::controller::{
    Delivery, EventOutcome, FormEvent, FormValidator, SubmissionOutcome, SubmissionPhase,
};
use formcheck::core::{Rule, RuleSet, ValidationResult};
use formcheck::form::{FormData, FormHandle, InMemoryForm};
use formcheck::presentation::{ControlRegistry, Presentation, PresentationBinder, PresentationConfig};
use formcheck::ValidatorConfig;
use pretty_assertions::assert_eq;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

/// Binder that writes every presentation call to a shared log.
struct RecordingBinder {
    log: Log,
    controls: Vec<&'static str>,
}

impl PresentationBinder for RecordingBinder {
    fn apply(&mut self, field: &str, presentation: Presentation<'_>) -> bool {
        let entry = match presentation {
            Presentation::Invalid(message) => format!("invalid {field}: {message}"),
            Presentation::Valid => format!("valid {field}"),
        };
        self.log.borrow_mut().push(entry);
        self.controls.iter().any(|control| *control == field)
    }
}

/// Host form that writes focus moves to the same log.
struct RecordingForm {
    inner: InMemoryForm,
    log: Log,
}

impl FormHandle for RecordingForm {
    fn snapshot(&self) -> FormData {
        self.inner.snapshot()
    }

    fn control_value(&self, name: &str) -> Option<String> {
        self.inner.control_value(name)
    }

    fn focus(&mut self, name: &str) -> bool {
        let moved = self.inner.focus(name);
        if moved {
            self.log.borrow_mut().push(format!("focus {name}"));
        }
        moved
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.inner.set_submit_enabled(enabled);
    }

    fn submit_native(&mut self) {
        self.inner.submit_native();
    }
}

fn recorded_validator(
    email: &str,
    password: &str,
    phone: &str,
) -> (FormValidator<RecordingForm, RecordingBinder>, Log) {
    let log: Log = Rc::default();
    let form = RecordingForm {
        inner: InMemoryForm::new()
            .with_control("email", email)
            .with_control("password", password)
            .with_control("phone", phone),
        log: Rc::clone(&log),
    };
    let binder = RecordingBinder {
        log: Rc::clone(&log),
        controls: vec!["email", "password", "phone"],
    };
    (FormValidator::new(form, binder, signup_rules()), log)
}

const EMAIL: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn signup_rules() -> RuleSet {
    RuleSet::builder()
        .field("email", Rule::builder().required().pattern(EMAIL))
        .unwrap()
        .field(
            "password",
            Rule::builder()
                .min_length(8)
                .pattern(r"^(?=.*[a-z])(?=.*[A-Z])(?=.*\d)"),
        )
        .unwrap()
        .field("phone", Rule::builder().pattern(r"^\d{10,11}$"))
        .unwrap()
        .build()
}

fn signup_validator(
    email: &str,
    password: &str,
    phone: &str,
) -> FormValidator<InMemoryForm, ControlRegistry> {
    let form = InMemoryForm::new()
        .with_control("email", email)
        .with_control("password", password)
        .with_control("phone", phone)
        .with_submit_control();
    let mut controls = ControlRegistry::default();
    controls
        .register_with_error_region("email")
        .register_with_error_region("password")
        .register_with_error_region("phone");
    FormValidator::new(form, controls, signup_rules())
}

#[test]
fn scenario_a_email_rule() {
    let v = signup_validator("", "", "");
    assert!(!v.evaluate_field("email", "invalid-email").is_valid());
    assert_eq!(
        v.evaluate_field("email", "test@example.com"),
        ValidationResult::Valid
    );
}

#[test]
fn scenario_b_password_strength() {
    let v = signup_validator("", "", "");
    assert_eq!(
        v.evaluate_field("password", "weakpassword"),
        ValidationResult::Invalid("Password format is invalid".into())
    );
    assert!(v.evaluate_field("password", "StrongPass123").is_valid());
}

#[test]
fn scenario_c_optional_phone() {
    let v = signup_validator("", "", "");
    assert!(v.evaluate_field("phone", "").is_valid());
    assert!(!v.evaluate_field("phone", "abc").is_valid());
    assert!(v.evaluate_field("phone", "1234567890").is_valid());
    // Arabic-Indic digits are not `\d`
    assert!(!v
        .evaluate_field("phone", "\u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}\u{668}\u{669}\u{660}")
        .is_valid());
}

#[test]
fn scenario_d_valid_form_calls_handler_once() {
    let mut v = signup_validator("test@example.com", "StrongPass123", "");
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    v.register_submit_handler(move |data| {
        assert_eq!(data.get("email"), Some("test@example.com"));
        counter.set(counter.get() + 1);
    });

    let outcome = v.dispatch(FormEvent::Submit);

    assert_eq!(
        outcome,
        EventOutcome::Submitted(SubmissionOutcome::Accepted {
            delivery: Delivery::Handler
        })
    );
    assert_eq!(calls.get(), 1);
    assert_eq!(v.form().native_submissions(), 0);
    assert!(v.errors().is_empty());
}

#[test]
fn scenario_d_one_invalid_field_blocks_submission() {
    let mut v = signup_validator("test@example.com", "weakpassword", "");
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    v.register_submit_handler(move |_| counter.set(counter.get() + 1));

    let outcome = v.dispatch(FormEvent::Submit);

    assert_eq!(
        outcome,
        EventOutcome::Submitted(SubmissionOutcome::Rejected {
            invalid_fields: vec!["password".to_string()],
            focused: Some("password".to_string()),
        })
    );
    assert_eq!(calls.get(), 0);
    assert_eq!(v.form().native_submissions(), 0);
    assert_eq!(v.form().focused(), Some("password"));

    let controls = v.binder();
    assert!(controls.is_marked_invalid("password"));
    assert!(!controls.is_marked_invalid("email"));
    assert!(!controls.is_marked_invalid("phone"));
    assert_eq!(
        controls.control("password").unwrap().aria_invalid.as_deref(),
        Some("true")
    );
}

#[test]
fn scenario_d_presents_each_invalid_field_once_before_focus() {
    let (mut v, log) = recorded_validator("", "StrongPass123", "abc");

    let outcome = v.submit();

    assert!(!outcome.is_accepted());
    assert_eq!(
        *log.borrow(),
        vec![
            "invalid email: Email is required".to_string(),
            "invalid phone: Phone format is invalid".to_string(),
            "focus email".to_string(),
        ]
    );
}

#[test]
fn scenario_d_valid_form_presents_nothing() {
    let (mut v, log) = recorded_validator("test@example.com", "StrongPass123", "");
    assert!(v.submit().is_accepted());
    assert!(log.borrow().is_empty());
}

#[test]
fn focus_goes_to_first_declared_invalid_field() {
    let mut v = signup_validator("", "weakpassword", "abc");
    let outcome = v.submit();

    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected {
            invalid_fields: vec![
                "email".to_string(),
                "password".to_string(),
                "phone".to_string()
            ],
            focused: Some("email".to_string()),
        }
    );
    assert_eq!(v.form().focused(), Some("email"));
}

#[test]
fn rejected_then_fixed_submission_is_accepted() {
    let mut v = signup_validator("nope", "", "");
    assert!(!v.submit().is_accepted());

    v.form_mut().set_value("email", "nope@example.com");
    assert_eq!(
        v.dispatch(FormEvent::input("email")),
        EventOutcome::Evaluated(ValidationResult::Valid)
    );
    assert!(!v.binder().is_marked_invalid("email"));

    assert_eq!(
        v.submit(),
        SubmissionOutcome::Accepted {
            delivery: Delivery::Native
        }
    );
    assert_eq!(v.form().native_submissions(), 1);
    assert_eq!(v.phase(), SubmissionPhase::Idle);
    assert_eq!(v.submission_attempts(), 2);
}

#[test]
fn submit_control_is_disabled_while_validating() {
    let mut v = signup_validator("", "", "");
    v.submit();
    v.form_mut().set_value("email", "a@b.co");
    v.submit();
    assert_eq!(v.form().submit_toggles(), &[false, true, false, true]);
    assert_eq!(v.form().submit_disabled(), Some(false));
}

#[test]
fn typing_only_clears_errors_blur_introduces_them() {
    let mut v = signup_validator("", "", "");

    v.form_mut().set_value("phone", "12");
    assert_eq!(v.dispatch(FormEvent::input("phone")), EventOutcome::Skipped);
    assert!(!v.binder().is_marked_invalid("phone"));

    v.dispatch(FormEvent::blur("phone"));
    assert!(v.binder().is_marked_invalid("phone"));
    assert_eq!(
        v.binder().control("phone").unwrap().error_text(),
        Some("Phone format is invalid")
    );

    v.form_mut().set_value("phone", "");
    v.dispatch(FormEvent::input("phone"));
    assert!(!v.binder().is_marked_invalid("phone"));
}

#[test]
fn config_drives_numeric_parsing_and_markers() {
    let config = ValidatorConfig::from_json(
        r#"{ "numeric_parsing": "strict", "presentation": { "invalid_class": "has-error" } }"#,
    )
    .unwrap();
    let rules = RuleSet::from_json(r#"{ "quantity": { "required": true, "min": 1, "max": 10 } }"#)
        .unwrap();
    let form = InMemoryForm::new().with_control("quantity", "5 boxes");
    let mut controls = ControlRegistry::default();
    controls.register_with_error_region("quantity");
    let mut v = FormValidator::with_config(form, controls, rules, &config);

    v.dispatch(FormEvent::blur("quantity"));

    let control = v.binder().control("quantity").unwrap();
    assert!(control.has_class("has-error"));
    assert_eq!(control.error_text(), Some("Minimum value is 1"));
    assert_eq!(v.binder().config(), &PresentationConfig {
        invalid_class: "has-error".into(),
        ..PresentationConfig::default()
    });
}

#[test]
fn instances_do_not_share_error_maps() {
    let mut first = signup_validator("", "", "");
    let mut second = signup_validator("ok@example.com", "", "");

    assert!(!first.validate_form());
    assert!(second.validate_form());
    assert_eq!(first.errors().len(), 1);
    assert!(second.errors().is_empty());
}
