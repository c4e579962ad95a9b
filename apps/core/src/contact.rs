use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Field, ValidationError};
use crate::toast::ToastNotifier;

pub const SUCCESS_TITLE: &str = "Success!";
pub const SUCCESS_MESSAGE: &str = "Thank you for reaching out. I'll get back to you soon!";
pub const ERROR_TITLE: &str = "Error";

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern compiles")
});

/// `local@domain.tld`, with no whitespace or extra `@` in any part. The
/// byte-order mark counts as whitespace, as it does in browsers.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Values read from the contact form on submit. Absent controls read as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Presence of all three fields first, then the email shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| self.value(*field).is_empty())
        {
            return Err(ValidationError::MissingField(field));
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }
}

/// Access to the form the handler reads from and resets.
pub trait ContactFields {
    fn read(&self) -> ContactSubmission;
    fn reset(&mut self);
}

/// Handles one submit: validate, report through the toast, and clear the
/// form on success. Nothing is sent anywhere.
pub fn submit<F: ContactFields + ?Sized>(
    fields: &mut F,
    toast: &ToastNotifier,
) -> Result<(), ValidationError> {
    let submission = fields.read();

    if let Err(error) = submission.validate() {
        toast.show(ERROR_TITLE, error.user_message());
        return Err(error);
    }

    toast.show(SUCCESS_TITLE, SUCCESS_MESSAGE);
    fields.reset();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::schedule::ManualScheduler;
    use crate::toast::{RecordingView, ToastNotifier};

    struct MemoryForm {
        submission: ContactSubmission,
        resets: usize,
    }

    impl MemoryForm {
        fn new(name: &str, email: &str, message: &str) -> Self {
            Self {
                submission: ContactSubmission::new(name, email, message),
                resets: 0,
            }
        }
    }

    impl ContactFields for MemoryForm {
        fn read(&self) -> ContactSubmission {
            self.submission.clone()
        }

        fn reset(&mut self) {
            self.submission = ContactSubmission::default();
            self.resets += 1;
        }
    }

    fn notifier() -> (ToastNotifier, Rc<RefCell<RecordingView>>) {
        let view = Rc::new(RefCell::new(RecordingView::default()));
        let toast = ToastNotifier::new(view.clone(), Rc::new(ManualScheduler::default()), 5000);
        (toast, view)
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert!(!is_valid_email("a\u{FEFF}b@c.com"));
        assert!(!is_valid_email("a@b\u{FEFF}.com"));
        assert!(!is_valid_email("a@b.c\u{FEFF}om"));
        assert!(!is_valid_email("a@b.co\u{00A0}"));
    }

    #[test]
    fn any_empty_field_is_missing() {
        let cases = [
            (ContactSubmission::new("", "a@b.com", "hi"), Field::Name),
            (ContactSubmission::new("A", "", "hi"), Field::Email),
            (ContactSubmission::new("A", "a@b.com", ""), Field::Message),
        ];
        for (submission, field) in cases {
            assert_eq!(
                submission.validate(),
                Err(ValidationError::MissingField(field))
            );
        }
    }

    #[test]
    fn missing_field_wins_over_bad_email() {
        let submission = ContactSubmission::new("A", "not-an-email", "");
        assert_eq!(
            submission.validate(),
            Err(ValidationError::MissingField(Field::Message))
        );
    }

    #[test]
    fn bad_email_shows_error_toast_and_keeps_fields() {
        let (toast, view) = notifier();
        let mut form = MemoryForm::new("A", "not-an-email", "hi");

        let result = submit(&mut form, &toast);

        assert_eq!(result, Err(ValidationError::InvalidEmail));
        let view = view.borrow();
        assert_eq!(view.title, "Error");
        assert_eq!(view.message, "Please enter a valid email address");
        assert!(view.visible);
        assert_eq!(form.resets, 0);
        assert_eq!(form.submission.name, "A");
    }

    #[test]
    fn missing_field_shows_fill_in_toast() {
        let cases = [
            (("", "a@b.com", "hi"), Field::Name),
            (("A", "", "hi"), Field::Email),
            (("A", "a@b.com", ""), Field::Message),
        ];

        for ((name, email, message), field) in cases {
            let (toast, view) = notifier();
            let mut form = MemoryForm::new(name, email, message);

            assert_eq!(
                submit(&mut form, &toast),
                Err(ValidationError::MissingField(field))
            );
            let view = view.borrow();
            assert_eq!(view.title, "Error");
            assert_eq!(view.message, "Please fill in all fields");
            assert!(view.visible);
            assert_eq!(form.resets, 0);
            assert_eq!(form.submission, ContactSubmission::new(name, email, message));
        }
    }

    #[test]
    fn valid_submission_thanks_and_clears() {
        let (toast, view) = notifier();
        let mut form = MemoryForm::new("A", "a@b.com", "hi");

        assert_eq!(submit(&mut form, &toast), Ok(()));

        let view = view.borrow();
        assert_eq!(view.title, SUCCESS_TITLE);
        assert_eq!(view.message, SUCCESS_MESSAGE);
        assert_eq!(form.resets, 1);
        assert_eq!(form.submission, ContactSubmission::default());
    }
}
