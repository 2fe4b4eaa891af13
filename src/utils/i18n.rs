// ============================================================================
// MENSAJES LOCALIZADOS (ruso, idioma de la interfaz)
// ============================================================================

/// Mensajes fijos que la UI muestra al usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    IngredientsLoadFailed,
    OrderCreateFailed,
    FeedLoadFailed,
    UserOrdersLoadFailed,
    RegisterFailed,
    LoginFailed,
    UpdateFailed,
    UserAlreadyExists,
    CheckInput,
    PasswordTooShort,
    WrongCredentials,
    UserNotFound,
}

/// Texto de un mensaje
pub fn t(message: Message) -> &'static str {
    match message {
        Message::IngredientsLoadFailed => "Ошибка при загрузке ингредиентов",
        Message::OrderCreateFailed => "Ошибка при создании заказа",
        Message::FeedLoadFailed => "Ошибка при загрузке ленты заказов",
        Message::UserOrdersLoadFailed => "Ошибка при загрузке заказов пользователя",
        Message::RegisterFailed => "Ошибка регистрации",
        Message::LoginFailed => "Ошибка авторизации",
        Message::UpdateFailed => "Ошибка обновления данных",
        Message::UserAlreadyExists => "Пользователь с таким email уже существует",
        Message::CheckInput => "Проверьте правильность введенных данных",
        Message::PasswordTooShort => "Пароль должен содержать минимум 6 символов",
        Message::WrongCredentials => "Неверный email или пароль",
        Message::UserNotFound => "Пользователь не найден",
    }
}

/// Flujo de autenticación cuyo error se traduce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    Register,
    Login,
    UpdateProfile,
}

impl AuthFlow {
    fn fallback(self) -> Message {
        match self {
            AuthFlow::Register => Message::RegisterFailed,
            AuthFlow::Login => Message::LoginFailed,
            AuthFlow::UpdateProfile => Message::UpdateFailed,
        }
    }
}

/// Traducir el mensaje del servidor a uno de los mensajes conocidos.
/// Sin coincidencia (o sin mensaje) se usa el genérico del flujo.
pub fn auth_error_message(flow: AuthFlow, raw: Option<&str>) -> &'static str {
    let Some(raw) = raw else {
        return t(flow.fallback());
    };
    let message = raw.to_lowercase();

    let matched = match flow {
        AuthFlow::Register | AuthFlow::UpdateProfile => {
            if message.contains("exist") {
                Some(Message::UserAlreadyExists)
            } else if message.contains("validation") {
                Some(Message::CheckInput)
            } else if message.contains("password") {
                Some(Message::PasswordTooShort)
            } else {
                None
            }
        }
        AuthFlow::Login => {
            if message.contains("incorrect") {
                Some(Message::WrongCredentials)
            } else if message.contains("not found") {
                Some(Message::UserNotFound)
            } else if message.contains("validation") {
                Some(Message::CheckInput)
            } else {
                None
            }
        }
    };

    t(matched.unwrap_or(flow.fallback()))
}
