//! Host Bridge Commands
//!
//! Frontend bindings to backend commands, organized by domain.

mod auth;
mod course;
mod roadmap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{AppError, AppResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use auth::*;
pub use course::*;
pub use roadmap::*;

/// Message carried by a rejected bridge call
fn rejection_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", err)
}

async fn invoke_raw(cmd: &str, args: JsValue) -> AppResult<JsValue> {
    invoke(cmd, args).await.map_err(|err| {
        let message = rejection_message(&err);
        tracing::warn!(cmd, %message, "bridge call rejected");
        AppError::Bridge(message)
    })
}

/// Invoke `cmd` with serialized `args` and decode the reply
async fn call<A: Serialize, T: DeserializeOwned>(cmd: &str, args: &A) -> AppResult<T> {
    let js_args = serde_wasm_bindgen::to_value(args)?;
    let result = invoke_raw(cmd, js_args).await?;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

async fn call_without_args<T: DeserializeOwned>(cmd: &str) -> AppResult<T> {
    let result = invoke_raw(cmd, JsValue::NULL).await?;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

/// Invoke a command whose reply carries no data
async fn call_unit<A: Serialize>(cmd: &str, args: &A) -> AppResult<()> {
    let js_args = serde_wasm_bindgen::to_value(args)?;
    invoke_raw(cmd, js_args).await?;
    Ok(())
}
