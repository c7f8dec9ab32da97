use crate::models::verdict::{FieldKind, FormInput, FormReport, Outcome, Verdict};
use crate::utils::validator::{is_valid_email, is_valid_phone, is_valid_website};

/// Check an email address
pub fn validate_email(input: &str) -> Verdict {
    validate(FieldKind::Email, input)
}

/// Check a phone number (exactly 10 digits)
pub fn validate_phone(input: &str) -> Verdict {
    validate(FieldKind::Phone, input)
}

/// Check a website URL
pub fn validate_website(input: &str) -> Verdict {
    validate(FieldKind::Website, input)
}

/// Check `input` against the pattern of `field`.
///
/// Never fails: any string, including the empty one, yields a verdict.
pub fn validate(field: FieldKind, input: &str) -> Verdict {
    let matched = match field {
        FieldKind::Email => is_valid_email(input),
        FieldKind::Phone => is_valid_phone(input),
        FieldKind::Website => is_valid_website(input),
    };
    let verdict = Verdict::new(field, Outcome::from(matched));

    // Input may be personal data; only its length is recorded
    tracing::debug!(
        field = %field,
        input_len = input.len(),
        valid = verdict.is_valid(),
        "Field validated"
    );

    verdict
}

/// Check every field present in `form`
pub fn validate_form(form: &FormInput) -> FormReport {
    let mut report = FormReport::default();

    for field in FieldKind::ALL {
        if let Some(input) = form.get(field) {
            report.insert(validate(field, input));
        }
    }

    report
}
