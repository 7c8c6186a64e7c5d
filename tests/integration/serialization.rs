//! Serde representation of `DeleteResult`.

use delete_result::DeleteResult;
use serde_json::json;

#[test]
fn test_serializes_all_fields() {
    let result = DeleteResult::new(3, ["users", "orders"], ["tagA"]).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({
            "rows_deleted": 3,
            "affected_tables": ["orders", "users"],
            "affected_tags": ["tagA"],
        })
    );
}

#[test]
fn test_missing_tags_default_to_empty() {
    let result: DeleteResult =
        serde_json::from_value(json!({ "rows_deleted": 1, "affected_tables": ["users"] })).unwrap();
    assert_eq!(result, DeleteResult::for_table(1, "users").unwrap());
}

#[test]
fn test_deserialization_revalidates() {
    let missing_tables = serde_json::from_value::<DeleteResult>(json!({ "rows_deleted": 1 }));
    let err = missing_tables.unwrap_err().to_string();
    assert!(err.contains("affected tables must be specified"));

    let empty_tag = serde_json::from_value::<DeleteResult>(json!({
        "rows_deleted": 1,
        "affected_tables": ["users"],
        "affected_tags": [""],
    }));
    assert!(empty_tag.is_err());

    let negative = serde_json::from_value::<DeleteResult>(json!({
        "rows_deleted": -1,
        "affected_tables": ["users"],
    }));
    assert!(negative.is_err());
}
