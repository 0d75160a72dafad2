use crate::core::{evaluate, normalize};
use crate::models::{
    CleanupResponse, CreateUserRequest, ErrorResponse, HealthResponse, ListUsersResponse,
    NearbyQuery, NearbyResponse,
};
use crate::services::UserStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

/// Configure all user-record routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/users", web::post().to(create_user))
        .route("/users", web::get().to(list_users))
        .route("/users", web::delete().to(cleanup))
        .route("/users/nearby", web::get().to(nearby));
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

/// Submit a user record
///
/// POST /api/v1/users
///
/// Request body:
/// ```json
/// {
///   "coordinates": "40.7128, -74.0060",
///   "userData": {"requests": {...}, "offers": {...}, "description": {...}}
/// }
/// ```
///
/// The coordinate text is normalized before persisting; text that matches
/// neither notation is a 400, never a silent (0,0) placement.
async fn create_user(
    state: web::Data<AppState>,
    req: web::Json<CreateUserRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_user request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if let Err(e) = normalize(&req.coordinates) {
        tracing::info!("Rejected coordinate text: {}", e);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid coordinates".to_string(),
            message: e.to_string(),
            status_code: 400,
        });
    }

    match state.store.create_user(&req.coordinates, &req.user_data).await {
        Ok(record) => {
            tracing::info!("Created user record {}", record.id);
            HttpResponse::Ok().json(record)
        }
        Err(e) => {
            tracing::error!("Failed to create user record: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create user".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List all stored records
///
/// GET /api/v1/users
async fn list_users(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_users().await {
        Ok(users) => {
            let count = users.len();
            HttpResponse::Ok().json(ListUsersResponse { users, count })
        }
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list users".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Administrative reset: delete every record
///
/// DELETE /api/v1/users
async fn cleanup(state: web::Data<AppState>) -> impl Responder {
    match state.store.delete_all().await {
        Ok(deleted_count) => HttpResponse::Ok().json(CleanupResponse { deleted_count }),
        Err(e) => {
            tracing::error!("Failed to delete users: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to delete users".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// The map endpoint: fetch the candidate list once, then score every
/// candidate against the viewer's stored record.
///
/// GET /api/v1/users/nearby?viewerId={uuid}
///
/// `viewerId` is optional; before the viewer submits their own record
/// every candidate scores zero with the fixed explanation line.
async fn nearby(
    state: web::Data<AppState>,
    query: web::Query<NearbyQuery>,
) -> impl Responder {
    // Single fetch per page load; scoring runs synchronously afterward.
    let candidates = match state.store.list_users().await {
        Ok(users) => users,
        Err(e) => {
            tracing::error!("Failed to fetch candidates: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let viewer = match query.viewer_id {
        Some(viewer_id) => match state.store.get_user(viewer_id).await {
            Ok(viewer) => {
                if viewer.is_none() {
                    tracing::debug!("Viewer {} not found, scoring without viewer", viewer_id);
                }
                viewer
            }
            Err(e) => {
                tracing::error!("Failed to fetch viewer {}: {}", viewer_id, e);
                return HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Failed to fetch viewer".to_string(),
                    message: e.to_string(),
                    status_code: 500,
                });
            }
        },
        None => None,
    };

    let result = evaluate(viewer.as_ref(), candidates);

    tracing::info!(
        "Returning {} scored candidates (from {} records, viewer: {})",
        result.matches.len(),
        result.total_candidates,
        viewer.map(|v| v.id.to_string()).unwrap_or_else(|| "none".to_string())
    );

    HttpResponse::Ok().json(NearbyResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}
