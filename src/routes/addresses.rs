use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::PaginationSettings;
use crate::core::{ProximityError, ProximityFilter};
use crate::models::{
    AddressRequest, DeleteResponse, ErrorResponse, HealthResponse, ListAddressesQuery,
    WithinDistanceQuery,
};
use crate::services::{AddressStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AddressStore>,
    pub filter: ProximityFilter,
    pub pagination: PaginationSettings,
}

/// Configure health and address routes
///
/// `within_distance` is registered ahead of `{id}` so it is never captured
/// as an id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .service(
            web::resource("/addresses/within_distance")
                .route(web::get().to(within_distance)),
        )
        .service(
            web::resource("/addresses")
                .route(web::get().to(list_addresses))
                .route(web::post().to(create_address)),
        )
        .service(
            web::resource("/addresses/{id}")
                .route(web::get().to(get_address))
                .route(web::put().to(update_address))
                .route(web::delete().to(delete_address)),
        );
}

fn store_error_response(err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(id) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Address not found".to_string(),
            message: format!("No address with id {}", id),
            status_code: 404,
        }),
        e => {
            tracing::error!("Address store failure: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Storage error".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

fn validation_error_response(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Create address endpoint
///
/// POST /addresses
///
/// Request body:
/// ```json
/// {
///   "street": "string",
///   "city": "string",
///   "state": "string",
///   "country": "string",
///   "latitude": 0.0,
///   "longitude": 0.0
/// }
/// ```
async fn create_address(
    state: web::Data<AppState>,
    req: web::Json<AddressRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_address request: {}", errors);
        return validation_error_response(errors.to_string());
    }

    match state.store.create(req.into_inner().into()).await {
        Ok(address) => {
            tracing::info!("Created address {}", address.id);
            HttpResponse::Ok().json(address)
        }
        Err(e) => store_error_response(e),
    }
}

/// GET /addresses/{id}
async fn get_address(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    match state.store.get(path.into_inner()).await {
        Ok(address) => HttpResponse::Ok().json(address),
        Err(e) => store_error_response(e),
    }
}

/// Replace all fields of an address
///
/// PUT /addresses/{id}
async fn update_address(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<AddressRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors.to_string());
    }

    let id = path.into_inner();
    match state.store.update(id, req.into_inner().into()).await {
        Ok(address) => {
            tracing::info!("Updated address {}", id);
            HttpResponse::Ok().json(address)
        }
        Err(e) => store_error_response(e),
    }
}

/// DELETE /addresses/{id}
async fn delete_address(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match state.store.delete(id).await {
        Ok(()) => {
            tracing::info!("Deleted address {}", id);
            HttpResponse::Ok().json(DeleteResponse { ok: true })
        }
        Err(e) => store_error_response(e),
    }
}

/// List addresses endpoint
///
/// GET /addresses?skip=0&limit=10
///
/// `limit` defaults to the configured page size and is capped at the
/// configured maximum.
async fn list_addresses(
    state: web::Data<AppState>,
    query: web::Query<ListAddressesQuery>,
) -> impl Responder {
    let limit = query
        .limit
        .unwrap_or(state.pagination.default_limit)
        .min(state.pagination.max_limit);

    match state.store.list(query.skip, limit).await {
        Ok(addresses) => HttpResponse::Ok().json(addresses),
        Err(e) => store_error_response(e),
    }
}

/// Proximity query endpoint
///
/// GET /addresses/within_distance?latitude={lat}&longitude={lon}&distance={km}
///
/// Loads every stored address and returns those within `distance`
/// kilometers of the given point, in storage order.
async fn within_distance(
    state: web::Data<AppState>,
    query: web::Query<WithinDistanceQuery>,
) -> impl Responder {
    let addresses = match state.store.list_all().await {
        Ok(addresses) => addresses,
        Err(e) => return store_error_response(e),
    };

    match state
        .filter
        .filter(query.latitude, query.longitude, query.distance, addresses)
    {
        Ok(nearby) => {
            tracing::info!(
                "Found {} addresses within {} km of ({}, {})",
                nearby.len(),
                query.distance,
                query.latitude,
                query.longitude
            );
            HttpResponse::Ok().json(nearby)
        }
        Err(ProximityError::InvalidInput(message)) => {
            tracing::info!("Rejected proximity query: {}", message);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid input".to_string(),
                message,
                status_code: 400,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = store_error_response(StoreError::NotFound(3));
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_store_errors_map_to_500() {
        let response = store_error_response(StoreError::SqlxError(sqlx::Error::PoolTimedOut));
        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
