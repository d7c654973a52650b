use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{Error, Result};

/// user record kept by the api
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// body of a create request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// body of an update request, absent or empty fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// in-memory user list keyed by an auto-increment id
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: u64) -> Result<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(Error::UserNotFound { id })
    }

    pub fn create(&mut self, new_user: NewUser) -> Result<User> {
        let (Some(name), Some(email)) = (non_empty(new_user.name), non_empty(new_user.email)) else {
            return Err(Error::MissingUserFields);
        };

        // ids are never reused, even after deletes
        let user = User {
            id: self.next_id,
            name,
            email,
        };
        self.next_id += 1;
        self.users.push(user.clone());

        info!(user_id = user.id, "user created");
        Ok(user)
    }

    pub fn update(&mut self, id: u64, update: UserUpdate) -> Result<User> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(Error::UserNotFound { id })?;

        if let Some(name) = non_empty(update.name) {
            user.name = name;
        }
        if let Some(email) = non_empty(update.email) {
            user.email = email;
        }

        info!(user_id = id, "user updated");
        Ok(user.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<User> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(Error::UserNotFound { id })?;

        info!(user_id = id, "user deleted");
        Ok(self.users.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = UserStore::new();
        let a = store.create(new_user("ada", "ada@example.com")).unwrap();
        let b = store.create(new_user("bob", "bob@example.com")).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.list(), &[a, b]);
    }

    #[test]
    fn test_create_requires_name_and_email() {
        let mut store = UserStore::new();
        assert_eq!(
            store.create(NewUser { name: Some("ada".into()), email: None }),
            Err(Error::MissingUserFields)
        );
        assert_eq!(store.create(new_user("", "x@example.com")), Err(Error::MissingUserFields));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = UserStore::new();
        store.create(new_user("ada", "ada@example.com")).unwrap();
        let bob = store.create(new_user("bob", "bob@example.com")).unwrap();
        store.delete(1).unwrap();

        let cy = store.create(new_user("cy", "cy@example.com")).unwrap();
        assert_eq!(cy.id, 3);
        assert_eq!(store.get(bob.id).unwrap().name, "bob");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_keeps_missing_fields() {
        let mut store = UserStore::new();
        store.create(new_user("ada", "ada@example.com")).unwrap();

        let updated = store
            .update(1, UserUpdate { name: Some("ada l".into()), email: Some(String::new()) })
            .unwrap();
        assert_eq!(updated.name, "ada l");
        assert_eq!(updated.email, "ada@example.com");
        assert_eq!(store.get(1).unwrap(), &updated);
    }

    #[test]
    fn test_missing_user() {
        let mut store = UserStore::new();
        assert_eq!(store.get(9), Err(Error::UserNotFound { id: 9 }));
        assert_eq!(
            store.update(9, UserUpdate::default()),
            Err(Error::UserNotFound { id: 9 })
        );
        assert_eq!(store.delete(9), Err(Error::UserNotFound { id: 9 }));
    }
}
