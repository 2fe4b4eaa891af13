// ============================================================================
// STELLAR BURGERS - CAPA DE ESTADO DEL CLIENTE (RUST + WASM)
// ============================================================================
// - Models: Registros del API (ingredientes, pedidos, usuario)
// - State: Slices inmutables + store raíz con subscribers
// - Services: SOLO comunicación API + credenciales
// - ViewModels: Flujos async y coordinación entre slices
// ============================================================================

pub mod app;
pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la App (single-threaded)
thread_local! {
    static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🍔 Stellar Burgers ({})", CONFIG.environment);

    let app = Rc::new(App::browser());
    APP.with(|cell| *cell.borrow_mut() = Some(app.clone()));

    wasm_bindgen_futures::spawn_local(async move {
        app.init().await;
    });

    Ok(())
}

/// Acceso a la App global desde el código de la UI
pub fn with_app<R>(f: impl FnOnce(&App) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow().as_deref().map(f))
}
