//! User — a household member chores can be assigned to.

use serde::{Deserialize, Serialize};

use crate::error::{ChoreHubError, ValidationError};
use crate::id::UserId;

/// A household member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Short display handle, e.g. initials.
    pub shortname: Option<String>,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreHubError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), ChoreHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyUserName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    name: Option<String>,
    shortname: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn shortname(mut self, shortname: impl Into<String>) -> Self {
        self.shortname = Some(shortname.into());
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`ChoreHubError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<User, ChoreHubError> {
        let user = User {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            shortname: self.shortname,
        };
        user.validate()?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_user_when_name_provided() {
        let user = User::builder().name("Alice").shortname("AL").build().unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.shortname.as_deref(), Some("AL"));
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = User::builder().build();
        assert!(matches!(
            result,
            Err(ChoreHubError::Validation(ValidationError::EmptyUserName))
        ));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let user = User::builder().name("Bob").build().unwrap();
        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }
}
