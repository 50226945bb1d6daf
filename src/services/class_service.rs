use crate::{
    database::{MongoDB, CLASSES},
    models::{ClassQuery, InsertResult, UpdateResult},
    utils::{parse_object_id, parse_object_ids, AppError},
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, to_bson, Document};

/// Name search is a raw case-insensitive regex; an empty search matches
/// every class.
pub fn search_filter(query: &ClassQuery) -> Document {
    let search = query.search.as_deref().unwrap_or("");
    let mut filter = doc! {
        "name": { "$regex": search, "$options": "i" }
    };

    if let Some(email) = query.email.as_deref().filter(|e| !e.is_empty()) {
        filter.insert("email", email);
    }

    filter
}

pub async fn list_classes(db: &MongoDB, query: &ClassQuery) -> Result<Vec<Document>, AppError> {
    let cursor = db.collection::<Document>(CLASSES).find(search_filter(query)).await?;
    let classes: Vec<Document> = cursor.try_collect().await?;
    Ok(classes)
}

pub async fn create_class(db: &MongoDB, class: Document) -> Result<InsertResult, AppError> {
    let result = db.collection::<Document>(CLASSES).insert_one(class).await?;
    Ok(result.into())
}

/// `$set` of a single top-level field on one class.
async fn set_field(
    db: &MongoDB,
    id: &str,
    field: &str,
    value: &serde_json::Value,
) -> Result<UpdateResult, AppError> {
    let object_id = parse_object_id(id)?;
    let mut set = Document::new();
    set.insert(field, to_bson(value)?);

    let result = db
        .collection::<Document>(CLASSES)
        .update_one(doc! { "_id": object_id }, doc! { "$set": set })
        .await?;

    Ok(result.into())
}

pub async fn update_status(
    db: &MongoDB,
    id: &str,
    status: &serde_json::Value,
) -> Result<UpdateResult, AppError> {
    set_field(db, id, "status", status).await
}

pub async fn update_feedback(
    db: &MongoDB,
    id: &str,
    feedback: &serde_json::Value,
) -> Result<UpdateResult, AppError> {
    set_field(db, id, "feedback", feedback).await
}

/// Takes one seat from every listed class. No floor at zero.
pub async fn decrement_seats(db: &MongoDB, class_ids: &[String]) -> Result<UpdateResult, AppError> {
    let ids = parse_object_ids(class_ids)?;

    let result = db
        .collection::<Document>(CLASSES)
        .update_many(
            doc! { "_id": { "$in": ids } },
            doc! { "$inc": { "availableSeats": -1 } },
        )
        .await?;

    Ok(result.into())
}
