//! Signup Form
//!
//! This demo drives a headless signup form through the validation engine:
//!
//! - Blur introduces an error, typing only clears it
//! - A rejected submit presents every error and focuses the first one
//! - An accepted submit hands the form data to a registered handler
//!
//! Run with: cargo run --example signup_form
//! Set RUST_LOG=formcheck=debug to see the engine's logs.

use formcheck::controller::{EventOutcome, FormEvent, FormValidator, SubmissionOutcome};
use formcheck::core::{Rule, RuleSet};
use formcheck::form::InMemoryForm;
use formcheck::presentation::ControlRegistry;
use formcheck::BuildError;
use tracing_subscriber::EnvFilter;

fn rules() -> Result<RuleSet, BuildError> {
    Ok(RuleSet::builder()
        .field(
            "email",
            Rule::builder()
                .required()
                .pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
                .message("Please enter a valid email address"),
        )?
        .field(
            "password",
            Rule::builder()
                .required()
                .min_length(8)
                .pattern(r"^(?=.*[a-z])(?=.*[A-Z])(?=.*\d)"),
        )?
        .field("phone", Rule::builder().pattern(r"^\d{10,11}$"))?
        .field(
            "username",
            Rule::builder().required().max_length(20).validator(|v: &str| {
                if v.eq_ignore_ascii_case("admin") {
                    Err("That username is reserved")
                } else {
                    Ok(())
                }
            }),
        )?
        .build())
}

fn show(validator: &FormValidator<InMemoryForm, ControlRegistry>, field: &str) {
    let text = validator
        .binder()
        .control(field)
        .and_then(|c| c.error_text())
        .unwrap_or("");
    let state = if validator.binder().is_marked_invalid(field) {
        "invalid"
    } else {
        "ok"
    };
    println!("    {field:<9} [{state}] {text}");
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Signup Form Demo ===\n");

    let form = InMemoryForm::new()
        .with_control("email", "not-an-email")
        .with_control("password", "weakpassword")
        .with_control("phone", "")
        .with_control("username", "admin")
        .with_submit_control();
    let mut controls = ControlRegistry::default();
    for field in ["email", "password", "phone", "username"] {
        controls.register_with_error_region(field);
    }

    let mut validator = FormValidator::new(form, controls, rules()?);
    validator.register_submit_handler(|data| {
        println!("  Handler received {} fields", data.len());
    });

    println!("Step 1: Blur the email field");
    validator.dispatch(FormEvent::blur("email"));
    show(&validator, "email");

    println!("\nStep 2: Type into the phone field (no error appears while typing)");
    validator.form_mut().set_value("phone", "12");
    let outcome = validator.dispatch(FormEvent::input("phone"));
    println!("    input outcome: {outcome:?}");
    show(&validator, "phone");

    println!("\nStep 3: Submit");
    if let EventOutcome::Submitted(SubmissionOutcome::Rejected {
        invalid_fields,
        focused,
    }) = validator.dispatch(FormEvent::Submit)
    {
        println!("  Rejected: {invalid_fields:?}, focus -> {focused:?}");
    }
    for field in ["email", "password", "phone", "username"] {
        show(&validator, field);
    }

    println!("\nStep 4: Fix every field and submit again");
    let fixes = [
        ("email", "ada@example.com"),
        ("password", "StrongPass123"),
        ("phone", "1234567890"),
        ("username", "ada"),
    ];
    for (field, value) in fixes {
        validator.form_mut().set_value(field, value);
        validator.dispatch(FormEvent::input(field));
    }
    let outcome = validator.submit();
    println!("  Outcome: {outcome:?}");
    println!(
        "  Attempts: {}, phase: {}",
        validator.submission_attempts(),
        validator.phase().name()
    );

    println!("\n=== Demo Complete ===");
    Ok(())
}
