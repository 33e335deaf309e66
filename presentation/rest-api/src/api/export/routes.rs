use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::export::use_cases::build::{ExportCatalogParams, ExportCatalogUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::export::dto::{ExportKindDto, WorkbookResponse};
use crate::api::tags::ApiTags;

pub struct ExportApi {
    export_use_case: Arc<dyn ExportCatalogUseCase>,
}

impl ExportApi {
    pub fn new(export_use_case: Arc<dyn ExportCatalogUseCase>) -> Self {
        Self { export_use_case }
    }
}

#[OpenApi]
impl ExportApi {
    /// Spreadsheet export
    ///
    /// Returns the workbook layout (file name, sheets, column widths, rows)
    /// for the client to write out.
    #[oai(path = "/export", method = "get", tag = "ApiTags::Export")]
    async fn export(&self, kind: Query<Option<ExportKindDto>>) -> ExportResponse {
        let kind = kind.0.unwrap_or(ExportKindDto::CurrentList);

        match self
            .export_use_case
            .execute(ExportCatalogParams { kind: kind.into() })
            .await
        {
            Ok(workbook) => ExportResponse::Ok(Json(workbook.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => ExportResponse::ServiceUnavailable(json),
                    _ => ExportResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExportResponse {
    #[oai(status = 200)]
    Ok(Json<WorkbookResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
