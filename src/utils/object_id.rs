use crate::utils::AppError;
use mongodb::bson::{oid::ObjectId, Bson};

pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidRequest(format!("invalid id '{}'", id)))
}

pub fn parse_object_ids<S: AsRef<str>>(ids: &[S]) -> Result<Vec<ObjectId>, AppError> {
    ids.iter().map(|id| parse_object_id(id.as_ref())).collect()
}

/// Reads a list of id strings out of an untyped document field.
/// A missing field yields an empty list.
pub fn object_ids_from_bson(field: &str, value: Option<&Bson>) -> Result<Vec<ObjectId>, AppError> {
    match value {
        None | Some(Bson::Null) => Ok(Vec::new()),
        Some(Bson::Array(items)) => items
            .iter()
            .map(|item| match item {
                Bson::String(s) => parse_object_id(s),
                Bson::ObjectId(oid) => Ok(*oid),
                other => Err(AppError::InvalidRequest(format!(
                    "{} must contain id strings, got {}",
                    field, other
                ))),
            })
            .collect(),
        Some(_) => Err(AppError::InvalidRequest(format!("{} must be an array", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_hex_ids() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn rejects_malformed_id() {
        assert!(matches!(parse_object_id("not-an-id"), Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn one_bad_id_fails_the_whole_list() {
        let ids = vec![ObjectId::new().to_hex(), "zzz".to_string()];
        assert!(parse_object_ids(&ids).is_err());
    }

    #[test]
    fn reads_ids_from_document_field() {
        let a = ObjectId::new();
        let b = ObjectId::new();
        let value = Bson::Array(vec![Bson::String(a.to_hex()), Bson::ObjectId(b)]);

        let ids = object_ids_from_bson("selectedItems", Some(&value)).unwrap();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn missing_field_is_empty() {
        assert!(object_ids_from_bson("selectedItems", None).unwrap().is_empty());
    }

    #[test]
    fn scalar_field_is_rejected() {
        let value = Bson::String("abc".into());
        assert!(object_ids_from_bson("selectedItems", Some(&value)).is_err());
    }
}
