// ============================================================================
// USER VIEWMODEL - Registro, login, logout y perfil
// ============================================================================
// Escribe/borra las credenciales y traduce los errores del servidor a los
// mensajes localizados antes de guardarlos en el slice.
// ============================================================================

use std::rc::Rc;

use crate::models::{LoginData, ProfileForm, RegisterData, User};
use crate::services::{ApiError, BurgerApi, CredentialSink};
use crate::state::{AppStore, AsyncEvent, UserAction};
use crate::utils::{auth_error_message, AuthFlow};

pub struct UserViewModel {
    store: AppStore,
    api: Rc<dyn BurgerApi>,
    credentials: Rc<dyn CredentialSink>,
}

impl UserViewModel {
    pub fn new(store: AppStore, api: Rc<dyn BurgerApi>, credentials: Rc<dyn CredentialSink>) -> Self {
        Self {
            store,
            api,
            credentials,
        }
    }

    pub async fn register(&self, data: RegisterData) -> Result<User, String> {
        log::info!("📝 Registrando {}...", data.email);
        self.store.dispatch(UserAction::Register(AsyncEvent::Pending));

        match self.api.register_user(&data).await {
            Ok(response) => {
                self.credentials.save(&response.credentials);
                log::info!("✅ Usuario registrado: {}", response.user.email);
                self.store
                    .dispatch(UserAction::Register(AsyncEvent::Fulfilled(response.user.clone())));
                Ok(response.user)
            }
            Err(e) => {
                log::error!("❌ Error de registro: {}", e);
                let message = auth_error_message(AuthFlow::Register, e.message().as_deref());
                self.store
                    .dispatch(UserAction::Register(AsyncEvent::rejected(message)));
                Err(message.to_string())
            }
        }
    }

    pub async fn login(&self, data: LoginData) -> Result<User, String> {
        log::info!("🔐 Iniciando sesión como {}...", data.email);
        self.store.dispatch(UserAction::Login(AsyncEvent::Pending));

        match self.api.login_user(&data).await {
            Ok(response) => {
                self.credentials.save(&response.credentials);
                log::info!("✅ Sesión iniciada: {}", response.user.email);
                self.store
                    .dispatch(UserAction::Login(AsyncEvent::Fulfilled(response.user.clone())));
                Ok(response.user)
            }
            Err(e) => {
                log::error!("❌ Error de login: {}", e);
                let message = auth_error_message(AuthFlow::Login, e.message().as_deref());
                self.store
                    .dispatch(UserAction::Login(AsyncEvent::rejected(message)));
                Err(message.to_string())
            }
        }
    }

    /// Cerrar sesión: las credenciales se borran aunque el servidor falle
    pub async fn logout(&self) -> Result<(), String> {
        log::info!("🚪 Cerrando sesión...");
        self.store.dispatch(UserAction::Logout(AsyncEvent::Pending));

        let result = self.api.logout().await;
        self.credentials.clear();

        match result {
            Ok(()) => {
                self.store
                    .dispatch(UserAction::Logout(AsyncEvent::Fulfilled(())));
                Ok(())
            }
            Err(e) => {
                log::warn!("⚠️ Logout rechazado por el servidor: {}", e);
                let message = e.message();
                self.store
                    .dispatch(UserAction::Logout(AsyncEvent::Rejected(message.clone())));
                Err(message.unwrap_or_else(|| e.to_string()))
            }
        }
    }

    /// Restaurar la sesión con el token guardado. Un fallo deja al usuario
    /// como no autenticado, sin error visible.
    pub async fn refresh_profile(&self) -> Result<User, String> {
        self.store.dispatch(UserAction::GetUser(AsyncEvent::Pending));

        let result = match self.credentials.access_token() {
            Some(_) => self.api.get_user().await,
            None => Err(ApiError::Unauthorized),
        };

        match result {
            Ok(user) => {
                log::info!("✅ Sesión restaurada: {}", user.email);
                self.store
                    .dispatch(UserAction::GetUser(AsyncEvent::Fulfilled(user.clone())));
                Ok(user)
            }
            Err(e) => {
                log::info!("👤 Sin sesión activa: {}", e);
                if !matches!(e, ApiError::Network(_)) {
                    self.credentials.clear();
                }
                let message = e.message();
                self.store
                    .dispatch(UserAction::GetUser(AsyncEvent::Rejected(message.clone())));
                Err(message.unwrap_or_else(|| e.to_string()))
            }
        }
    }

    /// Guardar el formulario del perfil enviando solo los campos modificados
    pub async fn update_profile(&self, form: &ProfileForm) -> Result<User, String> {
        let current = self.store.select(|state| state.user.user.clone());
        let changes = form.changes(current.as_ref());
        if let (true, Some(user)) = (changes.is_empty(), current.as_ref()) {
            log::debug!("Perfil sin cambios, nada que enviar");
            return Ok(user.clone());
        }

        log::info!("✏️ Actualizando perfil...");
        self.store
            .dispatch(UserAction::UpdateUser(AsyncEvent::Pending));

        match self.api.update_user(&changes).await {
            Ok(user) => {
                log::info!("✅ Perfil actualizado");
                self.store
                    .dispatch(UserAction::UpdateUser(AsyncEvent::Fulfilled(user.clone())));
                Ok(user)
            }
            Err(e) => {
                log::error!("❌ Error actualizando perfil: {}", e);
                let message = auth_error_message(AuthFlow::UpdateProfile, e.message().as_deref());
                self.store
                    .dispatch(UserAction::UpdateUser(AsyncEvent::rejected(message)));
                Err(message.to_string())
            }
        }
    }

    pub fn clear_error(&self) {
        self.store.dispatch(UserAction::ClearError);
    }
}
