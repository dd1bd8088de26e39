//! Contact form delivery: serialize the validated values and POST them
//! to the mail relay. Any non-2xx status is an error; the caller maps
//! it to the visible failure state.

use crate::constants::{RELAY_ENDPOINT, RELAY_TO_EMAIL};
use anyhow::{anyhow, Result};
use serde::Serialize;
use site_core::FormValues;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Serialize, Debug, Clone)]
pub struct MailPayload {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_email: String,
    pub reply_to: String,
    pub subject: String,
}

impl MailPayload {
    pub fn from_values(values: &FormValues) -> MailPayload {
        MailPayload {
            from_name: values.name.clone(),
            from_email: values.email.clone(),
            message: values.message.clone(),
            to_email: RELAY_TO_EMAIL.to_string(),
            reply_to: values.email.clone(),
            subject: format!("New message from {}", values.name),
        }
    }
}

pub async fn send(payload: &MailPayload) -> Result<()> {
    let body = serde_json::to_string(payload)?;
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;

    let headers = web::Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(&body));

    let request = web::Request::new_with_str_and_init(RELAY_ENDPOINT, &init).map_err(js_err)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch resolved to a non-Response value"))?;
    if !response.ok() {
        return Err(anyhow!(
            "mail relay responded with status {}",
            response.status()
        ));
    }
    Ok(())
}

fn js_err(value: JsValue) -> anyhow::Error {
    anyhow!(value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}")))
}
