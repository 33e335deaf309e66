use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::order::model::OrderPatch;
use business::domain::order::use_cases::delete::{DeleteOrderParams, DeleteOrderUseCase};
use business::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::update::{UpdateOrderParams, UpdateOrderUseCase};

use crate::api::draft::dto::DraftResponse;
use crate::api::draft::routes::DraftSession;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderResponse, RenameOrderRequest};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    update_use_case: Arc<dyn UpdateOrderUseCase>,
    delete_use_case: Arc<dyn DeleteOrderUseCase>,
    draft: DraftSession,
}

impl OrderApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        update_use_case: Arc<dyn UpdateOrderUseCase>,
        delete_use_case: Arc<dyn DeleteOrderUseCase>,
        draft: DraftSession,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            draft,
        }
    }
}

/// Saved orders
#[OpenApi]
impl OrderApi {
    /// List saved orders, newest first
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all_orders(&self) -> GetAllOrdersResponse {
        match self.get_all_use_case.execute().await {
            Ok(orders) => {
                GetAllOrdersResponse::Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetAllOrdersResponse::ServiceUnavailable(json),
                    _ => GetAllOrdersResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a saved order
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, id: Path<String>) -> OrderResponseKind {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return OrderResponseKind::BadRequest(ErrorResponse::invalid_id("order.invalid_id"));
        };

        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams { id: uuid })
            .await
        {
            Ok(order) => OrderResponseKind::Ok(Json(order.into())),
            Err(err) => OrderResponseKind::from_error(err.into_error_response()),
        }
    }

    /// Rename a saved order
    ///
    /// Items and totals stay as stored; edit them by loading the order into
    /// the draft and saving again.
    #[oai(path = "/orders/:id", method = "patch", tag = "ApiTags::Orders")]
    async fn rename_order(
        &self,
        id: Path<String>,
        body: Json<RenameOrderRequest>,
    ) -> OrderResponseKind {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return OrderResponseKind::BadRequest(ErrorResponse::invalid_id("order.invalid_id"));
        };

        let params = UpdateOrderParams {
            id: uuid,
            patch: OrderPatch {
                name: Some(body.0.name),
                ..OrderPatch::default()
            },
        };

        match self.update_use_case.execute(params).await {
            Ok(order) => OrderResponseKind::Ok(Json(order.into())),
            Err(err) => OrderResponseKind::from_error(err.into_error_response()),
        }
    }

    /// Delete a saved order
    ///
    /// Requires `confirm=true`.
    #[oai(path = "/orders/:id", method = "delete", tag = "ApiTags::Orders")]
    async fn delete_order(&self, id: Path<String>, confirm: Query<Option<bool>>) -> DeleteOrderResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteOrderResponse::BadRequest(ErrorResponse::invalid_id("order.invalid_id"));
        };

        let params = DeleteOrderParams {
            id: uuid,
            confirmed: confirm.0.unwrap_or(false),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteOrderResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteOrderResponse::BadRequest(json),
                    404 => DeleteOrderResponse::NotFound(json),
                    503 => DeleteOrderResponse::ServiceUnavailable(json),
                    _ => DeleteOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Load a saved order into the draft
    ///
    /// Replaces the current draft; the next save overwrites this order.
    #[oai(path = "/orders/:id/load", method = "post", tag = "ApiTags::Orders")]
    async fn load_order(&self, id: Path<String>) -> LoadOrderResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return LoadOrderResponse::BadRequest(ErrorResponse::invalid_id("order.invalid_id"));
        };

        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams { id: uuid })
            .await
        {
            Ok(order) => {
                let mut draft = self.draft.lock().await;
                if let Err(err) = draft.load(&order) {
                    return LoadOrderResponse::BadRequest(err.into_error_response().1);
                }
                match DraftResponse::try_from(&*draft) {
                    Ok(response) => LoadOrderResponse::Ok(Json(response)),
                    Err(err) => LoadOrderResponse::BadRequest(err.into_error_response().1),
                }
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => LoadOrderResponse::NotFound(json),
                    503 => LoadOrderResponse::ServiceUnavailable(json),
                    _ => LoadOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum OrderResponseKind {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl OrderResponseKind {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => OrderResponseKind::BadRequest(json),
            404 => OrderResponseKind::NotFound(json),
            503 => OrderResponseKind::ServiceUnavailable(json),
            _ => OrderResponseKind::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteOrderResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoadOrderResponse {
    #[oai(status = 200)]
    Ok(Json<DraftResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
