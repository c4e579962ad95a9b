use wasm_bindgen::JsValue;

pub fn info(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub fn error(context: &str, error: &JsValue) {
    web_sys::console::error_2(&context.into(), error);
}

/// Logs a failed DOM call; there is nothing else to do with it inside an
/// event handler.
pub fn report<T>(context: &str, result: Result<T, JsValue>) {
    if let Err(value) = result {
        error(context, &value);
    }
}
