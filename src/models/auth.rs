use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub email: String,
    pub name: String,
}

/// Par de credenciales emitido por register/login/token
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Incluye el prefijo `Bearer `, se envía tal cual en `authorization`
    pub access_token: String,
    pub refresh_token: String,
}

/// Respuesta de `/auth/register` y `/auth/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub credentials: Credentials,
    pub user: User,
}

/// Respuesta de `GET|PATCH /auth/user`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterData {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Cuerpo de `PATCH /auth/user`: solo viajan los campos modificados
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UpdateUserData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateUserData {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Formulario del perfil
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ProfileForm {
    /// Rellenar con el perfil actual (contraseña siempre vacía)
    pub fn from_user(user: Option<&User>) -> Self {
        Self {
            name: user.map(|u| u.name.clone()).unwrap_or_default(),
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
            password: String::new(),
        }
    }

    pub fn is_changed(&self, user: Option<&User>) -> bool {
        !self.changes(user).is_empty()
    }

    /// Subconjunto de campos que difieren del perfil actual
    pub fn changes(&self, user: Option<&User>) -> UpdateUserData {
        let name = match user {
            Some(u) if u.name == self.name => None,
            _ => Some(self.name.clone()),
        };
        let email = match user {
            Some(u) if u.email == self.email => None,
            _ => Some(self.email.clone()),
        };
        let password = (!self.password.is_empty()).then(|| self.password.clone());

        UpdateUserData { name, email, password }
    }
}
