use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Valor (aún codificado) de la cookie `name` dentro de `document.cookie`
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Texto para `document.cookie`; `max_age` negativo caduca la cookie
pub fn cookie_assignment(name: &str, value: &str, max_age: Option<i32>) -> String {
    match max_age {
        Some(seconds) => format!("{}={}; path=/; max-age={}", name, value, seconds),
        None => format!("{}={}; path=/", name, value),
    }
}

pub fn get_cookie(name: &str) -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    let raw = find_cookie(&cookies, name)?;
    js_sys::decode_uri_component(raw).ok().map(String::from)
}

pub fn set_cookie(name: &str, value: &str) -> Result<(), String> {
    let document = html_document().ok_or("No se pudo acceder a document")?;
    let encoded: String = js_sys::encode_uri_component(value).into();
    document
        .set_cookie(&cookie_assignment(name, &encoded, None))
        .map_err(|_| "Error guardando cookie".to_string())
}

pub fn delete_cookie(name: &str) {
    let Some(document) = html_document() else {
        log::warn!("⚠️ Sin document, no se pudo borrar la cookie {}", name);
        return;
    };
    if let Err(e) = document.set_cookie(&cookie_assignment(name, "", Some(-1))) {
        log::warn!("⚠️ Error borrando cookie {}: {:?}", name, e);
    }
}
