use serde::{Deserialize, Serialize};

/// Текущий пользователь сессии.
///
/// Передаётся в проекцию явным параметром; хранением сессии занимается
/// приложение-хост.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Имя пользователя в ERP
    pub name: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// Роли пользователя ("Collector Office", "Dealer", ...)
    #[serde(default)]
    pub roles: Vec<String>,
    /// Район пользователя (для согласующих)
    pub district: Option<String>,
}

impl SessionUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    /// Все непустые идентификаторы пользователя: email и имя.
    ///
    /// Сервер хранит владельца документа то в виде email, то в виде имени,
    /// поэтому обе формы считаются равноправными.
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.email
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.name.as_str()))
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Является ли пользователь владельцем документа
    pub fn is_owner_of(&self, owner: &str) -> bool {
        let owner = owner.trim();
        if owner.is_empty() {
            return false;
        }
        self.identities().any(|id| id.eq_ignore_ascii_case(owner))
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Есть ли у пользователя хотя бы одна из ролей
    pub fn has_any_role<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        roles.iter().any(|role| self.has_role(role.as_ref()))
    }
}
