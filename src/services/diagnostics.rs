//! Optional console diagnostics run once before the server starts.
//!
//! Neither step affects the HTTP surface; failures are logged and ignored.

use log::{error, info};

use crate::config::{Config, SeedUser};
use crate::models::NewUser;
use crate::services::UserService;
use crate::utils::mask_email;

pub async fn run_startup_diagnostics(config: &Config, user_service: &UserService) {
    if let Some(seed) = &config.seed_user {
        seed_user(seed, user_service).await;
    }
    if config.dump_users_on_start {
        dump_users(user_service).await;
    }
}

async fn seed_user(seed: &SeedUser, user_service: &UserService) {
    info!("Inserting seed user {}", mask_email(&seed.email));
    let user = NewUser {
        email: seed.email.clone(),
        name: seed.name.clone(),
    };
    match user_service.create_user(user).await {
        Ok(Some(created)) => info!("Seed insert successful, id: {}", created.id),
        Ok(None) => info!("Seed insert successful"),
        Err(err) => error!("Seed insert failed: {}", err),
    }
}

async fn dump_users(user_service: &UserService) {
    match user_service.list_users().await {
        Ok(users) => {
            info!("Current users: {}", users.len());
            for user in users {
                info!(
                    "   id: {} | email: {} | name: {}",
                    user.id,
                    user.email.as_deref().map(mask_email).unwrap_or_else(|| "null".to_string()),
                    user.name.as_deref().unwrap_or("null")
                );
            }
        }
        Err(err) => error!("Could not list users: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::repositories::memory::InMemoryUserRepository;
    use std::sync::Arc;
    use std::time::Duration;

    fn config(seed_user: Option<SeedUser>, dump_users_on_start: bool) -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            database_url: "postgres://unused".to_string(),
            database_max_connections: 1,
            database_acquire_timeout: Duration::from_secs(1),
            seed_user,
            dump_users_on_start,
        }
    }

    #[actix_web::test]
    async fn test_seed_user_is_inserted() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone());
        let seed = SeedUser {
            email: "seed@example.com".to_string(),
            name: "Seed".to_string(),
        };

        run_startup_diagnostics(&config(Some(seed), true), &service).await;
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_dump_tolerates_null_columns() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.insert_raw(User {
            id: 1,
            email: None,
            name: None,
        });
        let service = UserService::new(repo.clone());

        run_startup_diagnostics(&config(None, true), &service).await;
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_nothing_happens_by_default() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone());

        run_startup_diagnostics(&config(None, false), &service).await;
        assert_eq!(repo.len(), 0);
    }

    #[actix_web::test]
    async fn test_failures_are_swallowed() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.set_failing(true);
        let service = UserService::new(repo.clone());
        let seed = SeedUser {
            email: "seed@example.com".to_string(),
            name: "Seed".to_string(),
        };

        run_startup_diagnostics(&config(Some(seed), true), &service).await;
        assert_eq!(repo.len(), 0);
    }
}
