// Write acknowledgements in the camelCase shape the web client already reads.

use mongodb::bson::Bson;
use serde::Serialize;

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<mongodb::results::InsertOneResult> for InsertResult {
    fn from(result: mongodb::results::InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: id_to_string(result.inserted_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
    pub upserted_count: u64,
}

impl From<mongodb::results::UpdateResult> for UpdateResult {
    fn from(result: mongodb::results::UpdateResult) -> Self {
        let upserted_id = result.upserted_id.map(id_to_string);
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: upserted_id.is_some() as u64,
            upserted_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<mongodb::results::DeleteResult> for DeleteResult {
    fn from(result: mongodb::results::DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}
