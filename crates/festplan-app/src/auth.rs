//! Signed-in user state. One slot, absent while logged out.

use anyhow::Result;
use festplan_core::seed;
use festplan_core::types::{User, UserRole};
use festplan_store::slots::USER_SLOT;
use festplan_store::{Binding, Store};
use uuid::Uuid;

/// Partial profile update; unset fields keep their value.
#[derive(Debug, Default, Clone)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub vendor_profile_id: Option<String>,
}

pub struct AuthStore {
    binding: Binding<Option<User>>,
}

impl AuthStore {
    pub fn open(store: &Store) -> Result<Self> {
        let mut binding = Binding::new(USER_SLOT, None);
        binding.load(store)?;
        Ok(Self { binding })
    }

    pub fn user(&self) -> Option<&User> {
        self.binding.get().as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.binding.get().is_some()
    }

    /// Sign in with a fresh profile for the given identity.
    pub fn login(&mut self, store: &Store, name: &str, email: &str, role: UserRole) -> Result<User> {
        let user = User {
            id: format!("u_{}", Uuid::new_v4()),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: initials(name),
            vendor_profile_id: (role == UserRole::Vendor).then(|| "v_pending".to_string()),
        };
        self.binding
            .mutate(store, |u| *u = Some(user.clone()))?;
        Ok(user)
    }

    /// Sign in as the bundled demo identity for a role.
    pub fn demo_login(&mut self, store: &Store, role: UserRole) -> Result<User> {
        let user = match role {
            UserRole::Vendor => seed::vendor_profile(),
            _ => seed::host_profile(),
        };
        self.binding
            .mutate(store, |u| *u = Some(user.clone()))?;
        Ok(user)
    }

    /// Sign out and remove the slot entirely.
    pub fn logout(&mut self, store: &Store) -> Result<()> {
        self.binding.clear(store, None)?;
        Ok(())
    }

    /// Apply a partial profile update. No-op while signed out.
    pub fn update_user(&mut self, store: &Store, update: UserUpdate) -> Result<()> {
        self.binding.mutate(store, |slot| {
            if let Some(user) = slot.as_mut() {
                if let Some(name) = update.name {
                    user.name = name;
                }
                if let Some(email) = update.email {
                    user.email = email;
                }
                if let Some(avatar) = update.avatar {
                    user.avatar = avatar;
                }
                if let Some(profile) = update.vendor_profile_id {
                    user.vendor_profile_id = Some(profile);
                }
            }
        })?;
        Ok(())
    }
}

/// "Jay Deep" -> "JD". Single names keep their first letter.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use festplan_store::{MemoryMedium, StorageMedium};
    use std::sync::Arc;

    fn open() -> (Arc<MemoryMedium>, Store, AuthStore) {
        let medium = Arc::new(MemoryMedium::new());
        let store = Store::open(medium.clone()).unwrap();
        let auth = AuthStore::open(&store).unwrap();
        (medium, store, auth)
    }

    #[test]
    fn starts_logged_out() {
        let (_, _, auth) = open();
        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
    }

    #[test]
    fn login_persists_and_logout_removes_the_slot() {
        let (medium, store, mut auth) = open();
        let user = auth
            .login(&store, "Test", "test@test.com", UserRole::Host)
            .unwrap();
        assert_eq!(user.role, UserRole::Host);
        assert!(auth.is_authenticated());
        assert!(medium.get(USER_SLOT).unwrap().is_some());

        auth.logout(&store).unwrap();
        assert!(!auth.is_authenticated());
        assert!(medium.get(USER_SLOT).unwrap().is_none());
    }

    #[test]
    fn vendor_login_carries_pending_profile() {
        let (_, store, mut auth) = open();
        let user = auth
            .login(&store, "Ramesh Decorators", "r@decor.com", UserRole::Vendor)
            .unwrap();
        assert_eq!(user.vendor_profile_id.as_deref(), Some("v_pending"));
        assert_eq!(user.avatar, "RD");
    }

    #[test]
    fn session_survives_reopen() {
        let (medium, store, mut auth) = open();
        auth.demo_login(&store, UserRole::Host).unwrap();

        let store2 = Store::open(medium).unwrap();
        let auth2 = AuthStore::open(&store2).unwrap();
        assert_eq!(auth2.user().map(|u| u.name.as_str()), Some("Jay Deep"));
    }

    #[test]
    fn update_user_is_partial() {
        let (_, store, mut auth) = open();
        auth.demo_login(&store, UserRole::Host).unwrap();
        auth.update_user(
            &store,
            UserUpdate {
                email: Some("new@example.com".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let user = auth.user().unwrap();
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.name, "Jay Deep");
    }
}
