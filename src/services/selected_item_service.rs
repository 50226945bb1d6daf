// Cart entries ("selected items"): one document per class a user picked.

use crate::{
    database::{MongoDB, SELECTED_ITEMS},
    models::{DeleteResult, InsertResult},
    utils::{parse_object_id, AppError},
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

pub async fn list_for_email(db: &MongoDB, email: &str) -> Result<Vec<Document>, AppError> {
    let cursor = db
        .collection::<Document>(SELECTED_ITEMS)
        .find(doc! { "email": email })
        .await?;
    let items: Vec<Document> = cursor.try_collect().await?;
    Ok(items)
}

pub async fn add_item(db: &MongoDB, item: Document) -> Result<InsertResult, AppError> {
    let result = db.collection::<Document>(SELECTED_ITEMS).insert_one(item).await?;
    Ok(result.into())
}

pub async fn remove_item(db: &MongoDB, id: &str) -> Result<DeleteResult, AppError> {
    let object_id = parse_object_id(id)?;
    let result = db
        .collection::<Document>(SELECTED_ITEMS)
        .delete_one(doc! { "_id": object_id })
        .await?;
    Ok(result.into())
}

/// Hard delete of paid entries; nothing is archived.
pub async fn remove_many(db: &MongoDB, ids: Vec<ObjectId>) -> Result<DeleteResult, AppError> {
    let result = db
        .collection::<Document>(SELECTED_ITEMS)
        .delete_many(doc! { "_id": { "$in": ids } })
        .await?;
    Ok(result.into())
}
