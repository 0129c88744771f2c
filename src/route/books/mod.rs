use axum::{routing::get, Router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::ApiState;

pub mod create_book;
pub mod list_books;

/// The record stored in the `books` table, serialized with the
/// `{Id, Name, Isbn}` wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub isbn: String,
}

/// Both book endpoints live on one path, dispatched by method.
pub fn app(api_path: &str) -> Router<ApiState> {
    Router::<ApiState>::new().route(
        api_path,
        get(list_books::list_books).post(create_book::create_book),
    )
}

#[cfg(test)]
mod tests {
    use super::Book;

    #[test]
    fn book_uses_pascal_case_wire_form() {
        let book: Book =
            serde_json::from_str(r#"{"Id":"1","Name":"Dune","Isbn":"9780441013593"}"#)
                .expect("Book is not parsable");

        assert_eq!(
            book,
            Book {
                id: "1".to_string(),
                name: "Dune".to_string(),
                isbn: "9780441013593".to_string(),
            }
        );

        let json = serde_json::to_value(&book).expect("Book is not serializable");

        assert_eq!(
            json,
            serde_json::json!({"Id": "1", "Name": "Dune", "Isbn": "9780441013593"})
        );
    }
}
