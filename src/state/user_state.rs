// ============================================================================
// USER STATE - Sesión del usuario autenticado
// ============================================================================
// El token NO vive aquí (ver CredentialSink), solo el perfil y los flags.
// ============================================================================

use crate::models::User;
use crate::state::AsyncEvent;
use crate::utils::{t, Message};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserState {
    pub user: Option<User>,
    pub is_auth: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Register(AsyncEvent<User>),
    Login(AsyncEvent<User>),
    Logout(AsyncEvent<()>),
    GetUser(AsyncEvent<User>),
    UpdateUser(AsyncEvent<User>),
    ClearError,
}

impl UserAction {
    pub fn type_name(&self) -> String {
        let (flow, phase) = match self {
            UserAction::Register(e) => ("register", e.phase()),
            UserAction::Login(e) => ("login", e.phase()),
            UserAction::Logout(e) => ("logout", e.phase()),
            UserAction::GetUser(e) => ("getUser", e.phase()),
            UserAction::UpdateUser(e) => ("updateUser", e.phase()),
            UserAction::ClearError => return "user/clearError".to_string(),
        };
        format!("user/{}/{}", flow, phase)
    }
}

impl UserState {
    fn start_request(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn fail_request(&mut self, message: Option<String>, fallback: Message) {
        self.is_loading = false;
        self.error = Some(message.unwrap_or_else(|| t(fallback).to_string()));
    }

    fn sign_in(&mut self, user: User) {
        self.is_loading = false;
        self.user = Some(user);
        self.is_auth = true;
    }

    fn sign_out(&mut self) {
        self.user = None;
        self.is_auth = false;
    }

    pub fn reduce(&self, action: UserAction) -> Self {
        let mut next = self.clone();
        match action {
            UserAction::Register(AsyncEvent::Pending)
            | UserAction::Login(AsyncEvent::Pending)
            | UserAction::UpdateUser(AsyncEvent::Pending) => next.start_request(),

            UserAction::Register(AsyncEvent::Fulfilled(user))
            | UserAction::Login(AsyncEvent::Fulfilled(user)) => next.sign_in(user),

            UserAction::Register(AsyncEvent::Rejected(message)) => {
                next.fail_request(message, Message::RegisterFailed)
            }
            UserAction::Login(AsyncEvent::Rejected(message)) => {
                next.fail_request(message, Message::LoginFailed)
            }

            // Logout limpia la sesión pase lo que pase en el servidor
            UserAction::Logout(AsyncEvent::Pending) => {}
            UserAction::Logout(_) => next.sign_out(),

            // Sesión caducada o inexistente: estado "no autenticado", sin error visible
            UserAction::GetUser(AsyncEvent::Pending) => {}
            UserAction::GetUser(AsyncEvent::Fulfilled(user)) => {
                next.user = Some(user);
                next.is_auth = true;
            }
            UserAction::GetUser(AsyncEvent::Rejected(_)) => next.sign_out(),

            UserAction::UpdateUser(AsyncEvent::Fulfilled(user)) => {
                next.user = Some(user);
                next.is_loading = false;
                next.error = None;
            }
            UserAction::UpdateUser(AsyncEvent::Rejected(message)) => {
                next.fail_request(message, Message::UpdateFailed)
            }

            UserAction::ClearError => next.error = None,
        }
        next
    }
}
