//! Module principal pour le backend de l'application.
//! Contient les gestionnaires des formulaires, les modèles de réponse et le routeur.
pub mod handlers;
pub mod models;
pub mod router;
