use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum SampleError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u8, SampleError> {
    Ok(raw.parse::<u8>()?)
}

#[test]
fn folio_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/folio_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    let err = parse("not-a-number").expect_err("parse should fail");
    assert!(matches!(err, SampleError::Parse { context: None, .. }));
    assert!(err.to_string().starts_with("Parse error: "));
}

#[test]
fn context_is_attached_to_source_results() {
    let err = "300".parse::<u8>().context("reading byte").expect_err("value out of range");
    assert!(err.to_string().starts_with("Parse error (reading byte): "));
}

#[test]
fn context_overrides_existing_error_context() {
    let result: Result<(), SampleError> =
        Err(SampleError::Rejected { message: "nope".into(), context: None });
    let err = result.context("validating").expect_err("still an error");
    assert_eq!(err.to_string(), "Rejected (validating): nope");
}

#[test]
fn internal_variant_accepts_plain_strings() {
    let borrowed = SampleError::from("static");
    let owned = SampleError::from(format!("owned {}", 1));

    assert_eq!(borrowed.to_string(), "Internal error: static");
    assert_eq!(owned.to_string(), "Internal error: owned 1");
}
