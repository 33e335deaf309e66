use poem_openapi::{OpenApi, payload::PlainText};

use persistence::db::SCHEMA_SQL;

use crate::api::tags::ApiTags;

pub struct SchemaApi;

#[OpenApi]
impl SchemaApi {
    /// Database schema
    ///
    /// The SQL that creates the tables, trigger and change channel. Run it
    /// against the database when the catalog reports `SetupRequired`.
    #[oai(path = "/setup/schema", method = "get", tag = "ApiTags::Setup")]
    async fn schema(&self) -> PlainText<String> {
        PlainText(SCHEMA_SQL.to_string())
    }
}
