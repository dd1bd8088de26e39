//! Contact form wiring: inline validation feedback, the async relay
//! call and the timed revert back to idle. The phase machine and the
//! validation rules live in `site_core::form`; this module only maps
//! them onto the DOM.

use crate::constants::{
    CONTACT_FORM_ID, EMAIL_FIELD_ID, FORM_ERROR_MESSAGE, FORM_RESPONSE_ID, FORM_SENDING_LABEL,
    FORM_SUBMIT_LABEL, FORM_SUCCESS_MESSAGE, MESSAGE_FIELD_ID, NAME_FIELD_ID,
};
use crate::dom::{self, Scheduled};
use crate::relay::{self, MailPayload};
use site_core::{
    counter_tier, validate, CounterTier, Field, FieldError, FormFlow, FormValues, FORM_REVERT_MS,
    MESSAGE_MAX_CHARS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn field_id(field: Field) -> &'static str {
    match field {
        Field::Name => NAME_FIELD_ID,
        Field::Email => EMAIL_FIELD_ID,
        Field::Message => MESSAGE_FIELD_ID,
    }
}

struct FormUi {
    document: web::Document,
    form: web::HtmlFormElement,
    submit: Option<web::HtmlButtonElement>,
    response: Option<web::HtmlElement>,
}

impl FormUi {
    fn field_value(&self, id: &str) -> String {
        let Some(el) = self.document.get_element_by_id(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn read_values(&self) -> FormValues {
        FormValues {
            name: self.field_value(NAME_FIELD_ID),
            email: self.field_value(EMAIL_FIELD_ID),
            message: self.field_value(MESSAGE_FIELD_ID),
        }
    }

    fn clear_field_errors(&self) {
        for label in dom::query_all(&self.document, ".field-error") {
            label.remove();
        }
        for field in [Field::Name, Field::Email, Field::Message] {
            if let Some(el) = dom::html_by_id(&self.document, field_id(field)) {
                dom::clear_style(&el, "border-color");
            }
        }
    }

    fn mark_errors(&self, errors: &[FieldError]) {
        for err in errors {
            let Some(input) = dom::html_by_id(&self.document, field_id(err.field)) else {
                continue;
            };
            dom::set_style(&input, "border-color", "#EF4444");
            if let Ok(label) = self.document.create_element("div") {
                label.set_class_name("field-error");
                dom::set_css_text(
                    &label,
                    "color:#EF4444; font-size:0.85rem; margin-top:4px;",
                );
                label.set_text_content(Some(&err.kind.to_string()));
                let _ = input.insert_adjacent_element("afterend", &label);
            }
        }
    }

    fn set_sending(&self, sending: bool) {
        if let Some(button) = &self.submit {
            button.set_disabled(sending);
            button.set_text_content(Some(if sending {
                FORM_SENDING_LABEL
            } else {
                FORM_SUBMIT_LABEL
            }));
            if sending {
                dom::set_style(button, "transform", "scale(0.95)");
                dom::set_style(button, "opacity", "0.7");
            } else {
                dom::clear_style(button, "transform");
                dom::clear_style(button, "opacity");
            }
        }
    }

    /// Keep the control locked through the result display window.
    fn lock_submit(&self) {
        if let Some(button) = &self.submit {
            button.set_disabled(true);
            button.set_text_content(Some(FORM_SUBMIT_LABEL));
            dom::clear_style(button, "transform");
            dom::clear_style(button, "opacity");
        }
    }

    fn show_response(&self, message: &str, ok: bool) {
        if let Some(response) = &self.response {
            response.set_text_content(Some(message));
            let _ = response.class_list().remove_1("hidden");
            dom::set_style(response, "color", if ok { "#10B981" } else { "#EF4444" });
        }
    }

    fn clear_response(&self) {
        if let Some(response) = &self.response {
            response.set_text_content(None);
            let _ = response.class_list().add_1("hidden");
        }
    }
}

pub fn install(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    install_char_counter(document);

    let submit = form
        .query_selector("button[type=submit]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    let ui = Rc::new(FormUi {
        document: document.clone(),
        form: form.clone(),
        submit,
        response: dom::html_by_id(document, FORM_RESPONSE_ID),
    });
    let flow = Rc::new(RefCell::new(FormFlow::new()));
    let revert: Rc<RefCell<Option<Scheduled>>> = Rc::new(RefCell::new(None));

    // typing in a field clears that field's inline error
    for field in [Field::Name, Field::Email, Field::Message] {
        let Some(input) = dom::by_id(document, field_id(field)) else {
            continue;
        };
        let target = input.clone();
        dom::on_event::<web::Event>(input.as_ref(), "input", move |_| {
            if let Some(next) = target.next_element_sibling() {
                if next.class_list().contains("field-error") {
                    next.remove();
                }
            }
            if let Some(html) = target.dyn_ref::<web::HtmlElement>() {
                dom::clear_style(html, "border-color");
            }
        });
    }

    dom::on_event::<web::Event>(form.as_ref(), "submit", move |ev| {
        ev.prevent_default();
        if !flow.borrow_mut().begin_validation() {
            return;
        }
        ui.clear_field_errors();
        ui.clear_response();

        let values = ui.read_values();
        if let Err(errors) = validate(&values) {
            ui.mark_errors(&errors);
            flow.borrow_mut().validation_failed();
            return;
        }
        if !flow.borrow_mut().begin_send() {
            return;
        }
        ui.set_sending(true);

        let payload = MailPayload::from_values(&values);
        let ui = ui.clone();
        let flow = flow.clone();
        let revert = revert.clone();
        spawn_local(async move {
            match relay::send(&payload).await {
                Ok(()) => {
                    if flow.borrow_mut().sent_ok() {
                        ui.form.reset();
                        ui.show_response(FORM_SUCCESS_MESSAGE, true);
                    }
                }
                Err(err) => {
                    log::warn!("contact form delivery failed: {err:#}");
                    if flow.borrow_mut().sent_err() {
                        ui.show_response(FORM_ERROR_MESSAGE, false);
                    }
                }
            }
            ui.lock_submit();

            let ui = ui.clone();
            let flow = flow.clone();
            *revert.borrow_mut() = Scheduled::once(FORM_REVERT_MS, move || {
                if flow.borrow_mut().reverted() {
                    ui.set_sending(false);
                    ui.clear_response();
                }
            });
        });
    });
}

/// Live `len/max` counter under the message box, created on the fly.
fn install_char_counter(document: &web::Document) {
    let Some(area_el) = document.get_element_by_id(MESSAGE_FIELD_ID) else {
        return;
    };
    let Ok(area) = area_el.clone().dyn_into::<web::HtmlTextAreaElement>() else {
        return;
    };
    let Ok(counter) = document.create_element("div") else {
        return;
    };
    counter.set_class_name("char-counter");
    dom::set_css_text(
        &counter,
        "font-size:0.85rem; text-align:right; margin-top:4px; color:#9CA3AF;",
    );
    counter.set_text_content(Some(&format!("0/{MESSAGE_MAX_CHARS}")));
    let _ = area_el.insert_adjacent_element("afterend", &counter);

    dom::on_event::<web::Event>(area_el.as_ref(), "input", move |_| {
        let len = area.value().chars().count();
        counter.set_text_content(Some(&format!("{len}/{MESSAGE_MAX_CHARS}")));
        let color = match counter_tier(len) {
            CounterTier::Normal => "#9CA3AF",
            CounterTier::Warn => "#F59E0B",
            CounterTier::Over => "#EF4444",
        };
        if let Some(html) = counter.dyn_ref::<web::HtmlElement>() {
            dom::set_style(html, "color", color);
        }
    });
}
