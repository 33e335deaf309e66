use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Json, PlainText},
};
use tokio::sync::Mutex;
use uuid::Uuid;

use business::application::catalog::sync::CatalogSync;
use business::domain::order::draft::OrderDraft;
use business::domain::order::errors::OrderError;
use business::domain::order::use_cases::save::{SaveOrderParams, SaveOrderUseCase, SavedOrder};

use crate::api::draft::dto::{
    AddDraftItemRequest, DraftResponse, DraftSettingsRequest, UpdateDraftItemRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::OrderResponse;
use crate::api::product::dto::price_input;
use crate::api::tags::ApiTags;

/// The order being assembled. One per running service.
pub type DraftSession = Arc<Mutex<OrderDraft>>;

pub struct DraftApi {
    draft: DraftSession,
    catalog: Arc<CatalogSync>,
    save_use_case: Arc<dyn SaveOrderUseCase>,
}

impl DraftApi {
    pub fn new(
        draft: DraftSession,
        catalog: Arc<CatalogSync>,
        save_use_case: Arc<dyn SaveOrderUseCase>,
    ) -> Self {
        Self {
            draft,
            catalog,
            save_use_case,
        }
    }
}

/// Order draft
///
/// Local-first: edits never touch the store until the draft is saved.
#[OpenApi]
impl DraftApi {
    /// Current draft with live totals
    #[oai(path = "/draft", method = "get", tag = "ApiTags::Draft")]
    async fn get_draft(&self) -> DraftEditResponse {
        DraftEditResponse::render(&*self.draft.lock().await)
    }

    /// Add one unit of a catalog product
    #[oai(path = "/draft/items", method = "post", tag = "ApiTags::Draft")]
    async fn add_item(&self, body: Json<AddDraftItemRequest>) -> DraftEditResponse {
        let Some(product) = self.catalog.find(body.0.product_id).await else {
            return DraftEditResponse::NotFound(Json(ErrorResponse::new(
                "NotFound",
                "product.not_found",
            )));
        };

        let mut draft = self.draft.lock().await;
        let mut edited = draft.clone();
        let added = edited.add_product(&product).map(|item| item.quantity);
        match added {
            Ok(_) => DraftEditResponse::commit(&mut draft, edited),
            Err(err) => DraftEditResponse::from_error(err),
        }
    }

    /// Change quantity or margin of a line
    #[oai(path = "/draft/items/:product_id", method = "patch", tag = "ApiTags::Draft")]
    async fn update_item(
        &self,
        product_id: Path<String>,
        body: Json<UpdateDraftItemRequest>,
    ) -> DraftEditResponse {
        let Ok(uuid) = Uuid::parse_str(&product_id.0) else {
            return DraftEditResponse::BadRequest(ErrorResponse::invalid_id("product.invalid_id"));
        };

        let mut draft = self.draft.lock().await;
        let mut edited = draft.clone();
        match apply_item_edit(&mut edited, uuid, body.0) {
            Ok(()) => DraftEditResponse::commit(&mut draft, edited),
            Err(err) => DraftEditResponse::from_error(err),
        }
    }

    /// Remove a line
    #[oai(path = "/draft/items/:product_id", method = "delete", tag = "ApiTags::Draft")]
    async fn remove_item(&self, product_id: Path<String>) -> DraftEditResponse {
        let Ok(uuid) = Uuid::parse_str(&product_id.0) else {
            return DraftEditResponse::BadRequest(ErrorResponse::invalid_id("product.invalid_id"));
        };

        let mut draft = self.draft.lock().await;
        let mut edited = draft.clone();
        match edited.remove_item(uuid) {
            Ok(_) => DraftEditResponse::commit(&mut draft, edited),
            Err(err) => DraftEditResponse::from_error(err),
        }
    }

    /// Order name, global margin and delivery cost
    #[oai(path = "/draft/settings", method = "put", tag = "ApiTags::Draft")]
    async fn update_settings(&self, body: Json<DraftSettingsRequest>) -> DraftEditResponse {
        let mut draft = self.draft.lock().await;
        let mut edited = draft.clone();
        match apply_settings(&mut edited, body.0) {
            Ok(()) => DraftEditResponse::commit(&mut draft, edited),
            Err(err) => DraftEditResponse::from_error(err),
        }
    }

    /// Plain-text receipt for sharing
    #[oai(path = "/draft/receipt", method = "get", tag = "ApiTags::Draft")]
    async fn receipt(&self) -> ReceiptResponse {
        match self.draft.lock().await.receipt() {
            Ok(receipt) => ReceiptResponse::Ok(PlainText(receipt)),
            Err(err) => ReceiptResponse::BadRequest(err.into_error_response().1),
        }
    }

    /// Save the draft
    ///
    /// Inserts a new order, or overwrites the one the draft was loaded from.
    /// The draft is cleared on success and kept on failure.
    #[oai(path = "/draft/save", method = "post", tag = "ApiTags::Draft")]
    async fn save(&self) -> SaveDraftResponse {
        let mut draft = self.draft.lock().await;
        let params = SaveOrderParams {
            draft: draft.clone(),
        };

        match self.save_use_case.execute(params).await {
            Ok(saved) => {
                draft.reset();
                match saved {
                    SavedOrder::Created(order) => SaveDraftResponse::Created(Json(order.into())),
                    SavedOrder::Updated(order) => SaveDraftResponse::Ok(Json(order.into())),
                }
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SaveDraftResponse::BadRequest(json),
                    404 => SaveDraftResponse::NotFound(json),
                    409 => SaveDraftResponse::Conflict(json),
                    503 => SaveDraftResponse::ServiceUnavailable(json),
                    _ => SaveDraftResponse::InternalError(json),
                }
            }
        }
    }

    /// Discard the cart
    ///
    /// The global margin survives.
    #[oai(path = "/draft/reset", method = "post", tag = "ApiTags::Draft")]
    async fn reset(&self) -> DraftEditResponse {
        let mut draft = self.draft.lock().await;
        draft.reset();
        DraftEditResponse::render(&draft)
    }
}

fn apply_item_edit(
    draft: &mut OrderDraft,
    product_id: Uuid,
    edit: UpdateDraftItemRequest,
) -> Result<(), OrderError> {
    if let Some(delta) = edit.quantity_delta {
        draft.change_quantity(product_id, delta)?;
    }
    if edit.clear_item_profit {
        draft.set_item_profit(product_id, None)?;
    } else if let Some(percent) = edit.item_profit_percent {
        draft.set_item_profit(product_id, Some(percent))?;
    }
    if !draft.items.iter().any(|item| item.product_id == product_id) {
        return Err(OrderError::ItemNotFound);
    }
    Ok(())
}

fn apply_settings(draft: &mut OrderDraft, settings: DraftSettingsRequest) -> Result<(), OrderError> {
    if let Some(margin) = settings.global_profit_percent {
        draft.set_global_profit(margin)?;
    }
    if let Some(name) = settings.name {
        draft.set_name(&name);
    }
    if settings.delivery_cost.is_some() {
        draft.set_delivery_cost(&price_input(settings.delivery_cost))?;
    }
    Ok(())
}

#[derive(poem_openapi::ApiResponse)]
pub enum DraftEditResponse {
    #[oai(status = 200)]
    Ok(Json<DraftResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

impl DraftEditResponse {
    pub fn render(draft: &OrderDraft) -> Self {
        match DraftResponse::try_from(draft) {
            Ok(response) => DraftEditResponse::Ok(Json(response)),
            Err(err) => DraftEditResponse::from_error(err),
        }
    }

    /// Keeps `edited` only when its totals can be rendered.
    fn commit(draft: &mut OrderDraft, edited: OrderDraft) -> Self {
        match DraftResponse::try_from(&edited) {
            Ok(response) => {
                *draft = edited;
                DraftEditResponse::Ok(Json(response))
            }
            Err(err) => DraftEditResponse::from_error(err),
        }
    }

    fn from_error(err: OrderError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            404 => DraftEditResponse::NotFound(json),
            _ => DraftEditResponse::BadRequest(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReceiptResponse {
    #[oai(status = 200)]
    Ok(PlainText<String>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveDraftResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
