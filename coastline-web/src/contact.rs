use crate::controller::submit_contact;
use crate::dom::{by_id, listen};
use crate::error::PageError;
use crate::render::Surface;
use coastline_shared::markup::{id, selector};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

fn field_value<T: JsCast>(form: &HtmlFormElement, selector: &str, value: impl Fn(&T) -> String) -> String {
    form.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
        .map(|element| value(&element))
        .unwrap_or_default()
}

/// Validate the contact form on submit. Nothing leaves the page.
pub fn init_contact<S>(document: &Document, mut surface: S) -> Result<(), PageError>
where
    S: Surface + 'static,
{
    let Some(form) = by_id::<HtmlFormElement>(document, id::CONTACT_FORM) else {
        return Ok(());
    };

    let target = form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();
        let name = field_value::<HtmlInputElement>(&form, selector::CONTACT_NAME, |i| i.value());
        let email = field_value::<HtmlInputElement>(&form, selector::CONTACT_EMAIL, |i| i.value());
        let message =
            field_value::<HtmlTextAreaElement>(&form, selector::CONTACT_MESSAGE, |t| t.value());
        if submit_contact(&mut surface, &name, &email, &message) {
            form.reset();
        }
    })
}
