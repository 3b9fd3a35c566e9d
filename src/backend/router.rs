//! Configuration des routes pour l'application.
//! Définit les routes de validation des formulaires et configure les middlewares.

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::backend::handlers::{login_form, register_form};
use crate::consts::{API_PREFIX, MAX_FORM_BODY_SIZE};

/// Initialisation du routeur principal et des middlewares
pub fn get_router() -> Router {
    // Les photos trop lourdes doivent atteindre le validateur pour recevoir leur message
    let router = Router::new()
        .nest(API_PREFIX, Router::new().nest("/forms", form_routes()))
        .layer(DefaultBodyLimit::max(MAX_FORM_BODY_SIZE));

    // Configuration CORS pour permettre les requêtes de n'importe quelle origine (en mode debug uniquement)
    if cfg!(debug_assertions) {
        let cors = CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any);
        router.layer(cors)
    } else {
        router
    }
}

/// Routes de validation, accessibles sans authentification
fn form_routes() -> Router {
    Router::new()
        .route("/login", post(login_form)) // Formulaire de connexion
        .route("/register", post(register_form)) // Formulaire d'inscription
}
