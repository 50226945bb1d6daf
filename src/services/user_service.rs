use crate::{
    database::{MongoDB, USERS},
    models::{InsertResult, Role, UpdateResult},
    utils::{parse_object_id, AppError},
};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};

pub enum CreateUserOutcome {
    Created(InsertResult),
    AlreadyExists,
}

pub async fn list_users(db: &MongoDB) -> Result<Vec<Document>, AppError> {
    let cursor = db.collection::<Document>(USERS).find(doc! {}).await?;
    let users: Vec<Document> = cursor.try_collect().await?;
    Ok(users)
}

pub async fn find_by_email(db: &MongoDB, email: &str) -> Result<Option<Document>, AppError> {
    Ok(db
        .collection::<Document>(USERS)
        .find_one(doc! { "email": email })
        .await?)
}

/// Inserts the profile unless a user with the same email is already stored.
/// The check and the insert are two separate round trips.
pub async fn create_user(db: &MongoDB, user: Document) -> Result<CreateUserOutcome, AppError> {
    let email = user.get("email").cloned().unwrap_or(mongodb::bson::Bson::Null);

    let existing = db
        .collection::<Document>(USERS)
        .find_one(doc! { "email": email })
        .await?;

    if existing.is_some() {
        return Ok(CreateUserOutcome::AlreadyExists);
    }

    let result = db.collection::<Document>(USERS).insert_one(user).await?;
    Ok(CreateUserOutcome::Created(result.into()))
}

pub async fn has_role(db: &MongoDB, email: &str, role: Role) -> Result<bool, AppError> {
    let user = find_by_email(db, email).await?;
    Ok(role.is_held_by(user.as_ref()))
}

/// Role lookup used by [`RoleGuard`](crate::middleware::RoleGuard), registered
/// as `web::Data<dyn RoleDirectory>`.
#[async_trait]
pub trait RoleDirectory: Send + Sync {
    async fn has_role(&self, email: &str, role: Role) -> Result<bool, AppError>;
}

#[async_trait]
impl RoleDirectory for MongoDB {
    async fn has_role(&self, email: &str, role: Role) -> Result<bool, AppError> {
        has_role(self, email, role).await
    }
}

pub async fn set_role(db: &MongoDB, id: &str, role: Role) -> Result<UpdateResult, AppError> {
    let object_id = parse_object_id(id)?;

    let result = db
        .collection::<Document>(USERS)
        .update_one(
            doc! { "_id": object_id },
            doc! { "$set": { "role": role.as_str() } },
        )
        .await?;

    Ok(result.into())
}
