use async_trait::async_trait;
use fitplan_model::profile::Profile;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use sqlx::{Connection as SqlxConnection, FromRow};

use crate::{connection::Connection, schema, StoreError};

/// A profile together with the opaque identifier it is stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub user_id: String,
    #[serde(flatten)]
    pub profile: Profile,
}

#[derive(FromRow)]
struct ProfileRow {
    name: Option<String>,
    email: Option<String>,
    weight: Option<f64>,
    height: Option<f64>,
    age: Option<i64>,
    gender: Option<String>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            name: row.name,
            email: row.email,
            weight: row.weight,
            height: row.height,
            age: row.age,
            gender: row.gender,
        }
    }
}

#[mockall::automock]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError>;
    async fn store_profiles(&self, profiles: Vec<StoredProfile>) -> Result<(), StoreError>;
    async fn ping(&self) -> bool;
}

pub struct ProfileRepositoryImpl {
    connection: Connection,
}

impl ProfileRepositoryImpl {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn find_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        let mut conn = self.connection.lock().await;
        debug!("Fetching profile {}", user_id);
        let row = sqlx::query_as::<_, ProfileRow>(schema::SELECT_PROFILE)
            .bind(user_id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn store_profiles(&self, profiles: Vec<StoredProfile>) -> Result<(), StoreError> {
        let mut conn = self.connection.lock().await;
        let mut tx = conn.begin().await?;

        debug!("Storing {} profiles", profiles.len());
        for StoredProfile { user_id, profile } in profiles {
            sqlx::query(schema::UPSERT_PROFILE)
                .bind(user_id)
                .bind(profile.name)
                .bind(profile.email)
                .bind(profile.weight)
                .bind(profile.height)
                .bind(profile.age)
                .bind(profile.gender)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn ping(&self) -> bool {
        let mut conn = self.connection.lock().await;
        match conn.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Profile store ping failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repository() -> ProfileRepositoryImpl {
        let connection = Connection::open("sqlite::memory:").await.unwrap();
        ProfileRepositoryImpl::new(connection)
    }

    fn stored(user_id: &str, weight: Option<f64>) -> StoredProfile {
        StoredProfile {
            user_id: user_id.to_owned(),
            profile: Profile {
                name: Some("Ada".to_owned()),
                email: Some("ada@example.com".to_owned()),
                weight,
                height: Some(175.0),
                age: Some(30),
                gender: Some("Female".to_owned()),
            },
        }
    }

    #[tokio::test]
    async fn stored_profile_can_be_found() {
        let repository = repository().await;
        let profile = stored("a1", Some(70.0));
        repository
            .store_profiles(vec![profile.clone(), stored("b2", Some(81.5))])
            .await
            .unwrap();

        assert_eq!(
            repository.find_profile("a1").await.unwrap(),
            Some(profile.profile)
        );
        assert_eq!(
            repository.find_profile("b2").await.unwrap().unwrap().weight,
            Some(81.5)
        );
    }

    #[tokio::test]
    async fn unknown_user_is_absent() {
        let repository = repository().await;

        assert_eq!(repository.find_profile("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn incomplete_profile_keeps_missing_fields() {
        let repository = repository().await;
        repository
            .store_profiles(vec![stored("a1", None)])
            .await
            .unwrap();

        let profile = repository.find_profile("a1").await.unwrap().unwrap();
        assert_eq!(profile.weight, None);
        assert_eq!(profile.age, Some(30));
    }

    #[tokio::test]
    async fn storing_again_replaces_profile() {
        let repository = repository().await;
        repository
            .store_profiles(vec![stored("a1", Some(70.0))])
            .await
            .unwrap();
        repository
            .store_profiles(vec![stored("a1", Some(68.0))])
            .await
            .unwrap();

        assert_eq!(
            repository.find_profile("a1").await.unwrap().unwrap().weight,
            Some(68.0)
        );
    }

    #[tokio::test]
    async fn ping_reports_live_connection() {
        assert!(repository().await.ping().await);
    }

    #[test]
    fn stored_profile_json_is_flat() {
        let json = r#"{"user_id": "a1", "name": "Ada", "weight": 70.0, "height": 1.75, "age": 30, "gender": "female"}"#;
        let stored: StoredProfile = serde_json::from_str(json).unwrap();

        assert_eq!(stored.user_id, "a1");
        assert_eq!(stored.profile.email, None);
        assert_eq!(stored.profile.gender.as_deref(), Some("female"));
    }
}
