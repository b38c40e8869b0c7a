use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// How `list_users` reports a store with no accounts.
///
/// `Reject` turns an empty result into `UserError::EmptyCollection`, which is
/// what existing API clients expect. `Allow` returns the empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyListPolicy {
    #[default]
    Reject,
    Allow,
}

impl EmptyListPolicy {
    pub fn from_flag(empty_list_is_error: bool) -> Self {
        if empty_list_is_error {
            EmptyListPolicy::Reject
        } else {
            EmptyListPolicy::Allow
        }
    }

    pub fn apply(self, users: Vec<User>) -> Result<Vec<User>, UserError> {
        match self {
            EmptyListPolicy::Reject if users.is_empty() => Err(UserError::EmptyCollection),
            _ => Ok(users),
        }
    }
}
