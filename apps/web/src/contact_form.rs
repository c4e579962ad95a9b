use portfolio_core::contact::{self, ContactFields, ContactSubmission};
use portfolio_core::page::ids;
use portfolio_core::toast::ToastNotifier;
use portfolio_core::Field;
use wasm_bindgen::JsValue;
use web_sys::{Document, FormData, HtmlFormElement};

use crate::dom;

struct FormFields {
    form: HtmlFormElement,
}

impl ContactFields for FormFields {
    fn read(&self) -> ContactSubmission {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return ContactSubmission::default();
        };
        let value = |field: Field| data.get(field.as_str()).as_string().unwrap_or_default();

        ContactSubmission::new(
            value(Field::Name),
            value(Field::Email),
            value(Field::Message),
        )
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}

/// Validates submissions in place of sending them.
pub fn init_contact_form(document: &Document, toast: ToastNotifier) -> Result<(), JsValue> {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, ids::CONTACT_FORM) else {
        return Ok(());
    };

    let mut fields = FormFields { form: form.clone() };
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        // Rejections have already been shown in the toast.
        let _ = contact::submit(&mut fields, &toast);
    })
}
