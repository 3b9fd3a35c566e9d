//! Définition des constantes globales pour l'application.

pub const HTTP_PORT: u16 = 3000; // Port par défaut pour le serveur HTTP.
pub const API_PREFIX: &str = "/api"; // Préfixe commun à toutes les routes de l'API.
pub const DEV_API_ENDPOINT: &str = "http://0.0.0.0:3000/api"; // API utilisée en développement.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000"; // Origine servie en production.
pub const LOGIN_PATH: &str = "/auth/login"; // Route de connexion du backend.
pub const SESSION_COOKIE: &str = "token"; // Cookie de session posé par la route de connexion.
pub const MAX_FORM_BODY_SIZE: usize = 10 * 1024 * 1024; // Taille maximale d'un formulaire multipart.
