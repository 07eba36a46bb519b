use std::collections::HashMap;

use super::Locale;

const EN: &[(&str, &str)] = &[
    ("login_title", "Feroauth Login"),
    ("login_handle", "Login Handle"),
    ("next", "Next"),
    ("password", "Password"),
    ("hello_name", "Hello {name}!"),
    ("no_such_user", "No such user."),
    ("wrong_password", "Wrong password."),
    ("generic_error", "Something went wrong."),
    (
        "cant_talk_net_down",
        "Can't talk to the server. Are you connected to the Internet?",
    ),
    ("err_http_404", "Resource not found."),
    ("err_http_403", "You are not allowed to do that."),
    ("err_http_500", "Something went wrong inside the server."),
    ("err_http_other", "Something went wrong. HTTP error code: {code}."),
    ("default_login_handle_help", "Email or username or user UUID"),
];

const PT: &[(&str, &str)] = &[
    ("login_title", "Login Feroauth"),
    ("login_handle", "Alça de Login"),
    ("next", "Próximo"),
    ("password", "Senha"),
    ("hello_name", "Olá {name}!"),
    ("no_such_user", "Tal usuário inexiste."),
    ("wrong_password", "Senha incorreta."),
    ("generic_error", "Algo deu errado."),
    (
        "cant_talk_net_down",
        "Falha ao falar com o servidor. Você está conectado à Internet?",
    ),
    ("err_http_404", "Recurso não encontrado."),
    ("err_http_403", "Você não tem permissão para isso."),
    ("err_http_500", "Algo deu errado dentro no servidor."),
    ("err_http_other", "Algo deu errado. Código de erro HTTP: {code}."),
    (
        "default_login_handle_help",
        "Email ou nome de usuário ou UUID do usuário",
    ),
];

/// Message templates per locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    /// An empty catalog; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// The messages shipped with the login UI, for every supported locale.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (locale, table) in [(Locale::En, EN), (Locale::Pt, PT)] {
            for (key, template) in table {
                catalog.insert(locale, *key, *template);
            }
        }
        catalog
    }

    /// Adds or replaces a single template.
    pub fn insert(
        &mut self,
        locale: Locale,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> &mut Self {
        self.messages
            .entry(locale)
            .or_default()
            .insert(key.into(), template.into());
        self
    }

    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.messages
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}
