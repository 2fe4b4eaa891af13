// ============================================================================
// APP - Store raíz + viewmodels compartiendo el mismo API client
// ============================================================================

use std::rc::Rc;

use crate::services::{ApiClient, BrowserCredentials, BurgerApi, CredentialSink};
use crate::state::AppStore;
use crate::viewmodels::{
    CatalogViewModel, ConstructorViewModel, FeedViewModel, OrderViewModel, UserViewModel,
};

/// Aplicación: un único store y un viewmodel por área de la UI
pub struct App {
    pub store: AppStore,
    pub catalog: CatalogViewModel,
    pub constructor: ConstructorViewModel,
    pub order: OrderViewModel,
    pub user: UserViewModel,
    pub feed: FeedViewModel,
}

impl App {
    pub fn new(api: Rc<dyn BurgerApi>, credentials: Rc<dyn CredentialSink>) -> Self {
        let store = AppStore::new();
        Self {
            catalog: CatalogViewModel::new(store.clone(), api.clone()),
            constructor: ConstructorViewModel::new(store.clone()),
            order: OrderViewModel::new(store.clone(), api.clone()),
            user: UserViewModel::new(store.clone(), api.clone(), credentials),
            feed: FeedViewModel::new(store.clone(), api),
            store,
        }
    }

    /// App del navegador: cookie + localStorage y cliente HTTP real
    pub fn browser() -> Self {
        let credentials: Rc<dyn CredentialSink> = Rc::new(BrowserCredentials::new());
        let api = Rc::new(ApiClient::new(credentials.clone()));
        Self::new(api, credentials)
    }

    /// Arranque: catálogo y después restauración silenciosa de la sesión
    pub async fn init(&self) {
        log::info!("🚀 Inicializando Stellar Burgers...");
        if let Err(e) = self.catalog.fetch_ingredients().await {
            log::error!("❌ Catálogo no disponible: {}", e);
        }
        if self.user.refresh_profile().await.is_err() {
            log::info!("👤 Arrancando sin sesión");
        }
        log::info!("✅ Inicialización completada");
    }
}
