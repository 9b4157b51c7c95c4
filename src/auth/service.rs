use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    log_error, log_info,
    models::{Account, PublicUser},
    storage::{load_json, save_json, KeyValueStore, CURRENT_USER_KEY, USERS_KEY},
};

use super::credentials::{generate_salt, hash_password, verify_password};

const ENABLE_LOGS: bool = true;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already exists")]
    EmailTaken,

    #[error("Account storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl AuthError {
    /// Message suitable for showing inline next to the form.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Storage(_) => "Something went wrong. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

/// Signup, login and session tracking over a [`KeyValueStore`].
pub struct AuthService<S> {
    store: S,
    // serializes read-modify-write of the `users` list
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<PublicUser, AuthError> {
        if is_blank(email) || password.is_empty() || is_blank(name) {
            return Err(AuthError::MissingFields);
        }

        let _guard = self.write_lock.lock().await;
        let mut accounts = self.accounts().await?;
        if accounts.iter().any(|account| account.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let salt = generate_salt();
        let account = Account {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
            password_hash: hash_password(password, &salt),
            salt,
        };
        let user = PublicUser::from(&account);
        accounts.push(account);

        save_json(&self.store, USERS_KEY, &accounts).await?;

        // The account is committed at this point; a missing session only
        // means the user has to log in.
        if let Err(err) = save_json(&self.store, CURRENT_USER_KEY, &user).await {
            log_error!("Account {} created but session not saved: {err:#}", user.id);
        }

        log_info!("Created account {}", user.id);
        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<PublicUser, AuthError> {
        if is_blank(email) || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let accounts = self.accounts().await?;
        let user = accounts
            .iter()
            .find(|account| {
                account.email == email
                    && verify_password(password, &account.salt, &account.password_hash)
            })
            .map(PublicUser::from)
            .ok_or(AuthError::InvalidCredentials)?;

        save_json(&self.store, CURRENT_USER_KEY, &user).await?;
        log_info!("User {} logged in", user.id);
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(CURRENT_USER_KEY).await?;
        Ok(())
    }

    pub async fn current_user(&self) -> Result<Option<PublicUser>, AuthError> {
        Ok(load_json(&self.store, CURRENT_USER_KEY).await?)
    }

    async fn accounts(&self) -> anyhow::Result<Vec<Account>> {
        Ok(load_json(&self.store, USERS_KEY).await?.unwrap_or_default())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
