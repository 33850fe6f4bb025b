use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/devoluciones",
            get(handlers::listar_devoluciones).post(handlers::crear_devolucion),
        )
        .route("/api/devoluciones/calendario", get(handlers::calendario))
        .route(
            "/api/devoluciones/:id",
            get(handlers::obtener_devolucion).put(handlers::actualizar_devolucion),
        )
        .route(
            "/api/devoluciones/:id/requerimientos",
            post(handlers::agregar_requerimiento),
        )
        .route(
            "/api/empresas",
            get(handlers::listar_empresas).post(handlers::crear_empresa),
        )
        .route("/api/notificaciones", get(handlers::notificaciones))
        .with_state(state)
}
