use crate::{
    database::{MongoDB, INSTRUCTORS},
    utils::AppError,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};

/// Instructor profiles are maintained outside this service; read only.
pub async fn list_instructors(db: &MongoDB) -> Result<Vec<Document>, AppError> {
    let cursor = db.collection::<Document>(INSTRUCTORS).find(doc! {}).await?;
    let instructors: Vec<Document> = cursor.try_collect().await?;
    Ok(instructors)
}
