//! Contact form: intercept submit, post via `gloo-net`, show inline feedback.

use std::rc::Rc;

use gloo_net::http::{Method, RequestBuilder};
use wasm_bindgen::JsCast;
use web_sys::{Document, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement};

use super::{listen, query, warn_on_err};
use crate::config::ContactCopy;
use crate::state::contact::{ContactFormState, FormRequest, FormTransport, FormView, SubmitError, submit};

/// Posts the form's current fields as multipart form data.
pub struct BrowserTransport {
    form: HtmlFormElement,
}

impl FormTransport for BrowserTransport {
    async fn send(&self, request: &FormRequest) -> Result<u16, SubmitError> {
        let body = FormData::new_with_form(&self.form).map_err(|err| SubmitError::Network(format!("{err:?}")))?;
        let method = if request.method.eq_ignore_ascii_case("get") { Method::GET } else { Method::POST };
        let response = RequestBuilder::new(&request.action)
            .method(method)
            .header("Accept", &request.accept)
            .body(body)
            .map_err(|err| SubmitError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        Ok(response.status())
    }
}

struct BrowserFormView {
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    feedback: HtmlElement,
}

impl FormView for BrowserFormView {
    fn render(&mut self, state: &ContactFormState) {
        if let Some(button) = &self.button {
            button.set_disabled(state.button.disabled);
            button.set_text_content(Some(&state.button.label));
        }
        let style = self.feedback.style();
        // Feedback copy is only written once an outcome exists.
        if let Some(color) = &state.feedback.color {
            self.feedback.set_text_content(Some(&state.feedback.text));
            warn_on_err(style.set_property("color", color), "setting feedback color");
        }
        let display = if state.feedback.visible { "block" } else { "none" };
        warn_on_err(style.set_property("display", display), "setting feedback display");
    }

    fn clear_fields(&mut self) {
        self.form.reset();
    }
}

pub fn mount(document: &Document, copy: &ContactCopy) -> bool {
    let Some(form) = query(document, &copy.form_selector).and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned())
    else {
        return false;
    };
    let Some(feedback) = document
        .get_element_by_id(&copy.feedback_id)
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
    else {
        return false;
    };
    let button = match form.query_selector(&copy.submit_selector) {
        Ok(found) => found.and_then(|el| el.dyn_ref::<HtmlButtonElement>().cloned()),
        Err(err) => {
            log::warn!("bad submit selector {}: {err:?}", copy.submit_selector);
            None
        }
    };
    if button.is_none() {
        log::debug!("contact form has no submit button; submitting without button state");
    }
    let original_label = button.as_ref().and_then(|b| b.text_content());
    let copy = Rc::new(copy.clone());

    let target = form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();
        let request = FormRequest { action: form.action(), method: form.method(), accept: copy.accept.clone() };
        let transport = BrowserTransport { form: form.clone() };
        let mut view = BrowserFormView { form: form.clone(), button: button.clone(), feedback: feedback.clone() };
        let mut state = ContactFormState::new(original_label.as_deref(), &copy);
        let copy = Rc::clone(&copy);
        wasm_bindgen_futures::spawn_local(async move {
            submit(&transport, &mut view, &mut state, &request, &copy).await;
        });
    });
    true
}
