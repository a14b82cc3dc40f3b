use crate::either::{from_nullable, Either};
use crate::error::LookupError;
use crate::future::try_catch_async;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

/// A fixed table of users that answers lookups after a delay.
pub struct UserDirectory {
    users: HashMap<u32, User>,
    delay: Duration,
    lookups: AtomicUsize,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_DELAY)
    }
}

impl UserDirectory {
    pub fn new(delay: Duration) -> UserDirectory {
        let users = [(1, "John"), (2, "Jane")]
            .into_iter()
            .map(|(id, name)| {
                (
                    id,
                    User {
                        id,
                        name: name.to_string(),
                    },
                )
            })
            .collect();

        UserDirectory {
            users,
            delay,
            lookups: AtomicUsize::new(0),
        }
    }

    /// Settles exactly once, after the directory's delay has elapsed.
    pub async fn lookup(&self, id: u32) -> Result<User, LookupError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        tokio::time::sleep(self.delay).await;

        self.users
            .get(&id)
            .cloned()
            .ok_or(LookupError::NotFound { id })
    }

    /// Number of lookups started so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub async fn find_user_by_id(&self, id: Option<u32>) -> Either<LookupError, User> {
        from_nullable(id)
            .map_left(LookupError::from)
            .chain_async(|id| {
                debug!("looking up user {}", id);
                try_catch_async(self.lookup(id))
            })
            .await
    }
}

pub fn describe(found: Either<LookupError, User>) -> String {
    found.fold(
        |error| format!("Error: {error}"),
        |user| format!("User found: {}", user.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::either::{Left, Right};
    use std::time::Instant;

    fn directory() -> UserDirectory {
        UserDirectory::new(Duration::from_millis(5))
    }

    #[tokio::test]
    async fn known_ids_resolve() {
        let users = directory();

        let john = users.find_user_by_id(Some(1)).await;
        assert_eq!(
            john,
            Right(User {
                id: 1,
                name: "John".to_string()
            })
        );

        let jane = users.find_user_by_id(Some(2)).await;
        assert_eq!(describe(jane), "User found: Jane");
    }

    #[tokio::test]
    async fn unknown_id_is_left() {
        let missing = directory().find_user_by_id(Some(3)).await;

        assert_eq!(missing, Left(LookupError::NotFound { id: 3 }));
        assert_eq!(describe(missing), "Error: User not found");
    }

    #[tokio::test]
    async fn absent_id_skips_lookup() {
        let users = UserDirectory::default();

        let start = Instant::now();
        let result = users.find_user_by_id(None).await;

        assert_eq!(result, Left(LookupError::MissingId));
        assert_eq!(users.lookup_count(), 0);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn present_ids_each_start_one_lookup() {
        let users = directory();

        users.find_user_by_id(Some(1)).await;
        users.find_user_by_id(None).await;
        users.find_user_by_id(Some(7)).await;

        assert_eq!(users.lookup_count(), 2);
    }

    #[tokio::test]
    async fn lookup_waits_for_delay() {
        let delay = Duration::from_millis(20);
        let users = UserDirectory::new(delay);

        let start = Instant::now();
        let result = users.lookup(1).await;

        assert!(result.is_ok());
        assert!(start.elapsed() >= delay);
    }
}
