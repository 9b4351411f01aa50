use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;

use crate::shared::backend::Backend;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    mode: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No DB
/// - No Redis
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
///
/// Offline mode is a supported degraded state (fallback content is
/// still served), so it reports 200 with mode "offline" rather than
/// failing the probe.
#[get("/ready")]
pub async fn readiness(backend: web::Data<Backend>) -> impl Responder {
    let (db, redis) = match backend.get_ref() {
        Backend::Online { db, redis, .. } => (db, redis),
        Backend::Offline => {
            return HttpResponse::Ok().json(ReadinessResponse {
                status: "ok",
                mode: "offline",
                database: "not configured",
                redis: "not configured",
            });
        }
    };

    let db_status = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    let redis_status = match redis.get().await {
        Ok(mut conn) => {
            match deadpool_redis::redis::cmd("PING")
                .query_async::<String>(&mut conn)
                .await
            {
                Ok(_) => "ok",
                Err(_) => "unhealthy",
            }
        }
        Err(_) => "unhealthy",
    };

    if db_status == "ok" && redis_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            mode: "online",
            database: db_status,
            redis: redis_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            mode: "online",
            database: db_status,
            redis: redis_status,
        })
    }
}
