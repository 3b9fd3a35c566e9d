use axum::{
    http::{
        header::{AUTHORIZATION, COOKIE, SET_COOKIE},
        HeaderMap, HeaderName, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use reqwest::Method;
use serde_json::json;
use shelfmark::{ApiClient, ClientError, FormInput, LoginForm, Mode, SessionContext};
use url::Url;

async fn login(Json(form): Json<LoginForm>) -> Response {
    if form.password == "123456" {
        let token = format!("tok-{}", form.username);
        (
            StatusCode::OK,
            [(SET_COOKIE, format!("token={}; Path=/; HttpOnly", token))],
            Json(json!({ "token": token })),
        )
            .into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Wrong username or password" })),
        )
            .into_response()
    }
}

fn echo_header(headers: &HeaderMap, name: HeaderName) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("anonymous")
        .to_string()
}

async fn whoami(headers: HeaderMap) -> String {
    echo_header(&headers, AUTHORIZATION)
}

async fn cookie(headers: HeaderMap) -> String {
    echo_header(&headers, COOKIE)
}

/// Starts a stand-in for the library API and returns its endpoint
async fn spawn_api() -> Url {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/whoami", get(whoami))
        .route("/api/cookie", get(cookie));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{}/api", addr)).unwrap()
}

fn credentials(password: &str) -> LoginForm {
    let input = FormInput::new().with("username", "jojo").with("password", password);
    LoginForm::try_from(&input).unwrap()
}

async fn get_text(client: &ApiClient, session: &SessionContext, path: &str) -> String {
    client
        .request(session, Method::GET, path)
        .unwrap()
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap()
}

async fn whoami_as(client: &ApiClient, session: &SessionContext) -> String {
    get_text(client, session, "/whoami").await
}

#[tokio::test]
async fn login_stores_the_token_and_requests_carry_it() {
    let client = ApiClient::with_endpoint(Mode::Development, spawn_api().await).unwrap();
    let mut session = SessionContext::new();

    assert_eq!(whoami_as(&client, &session).await, "anonymous");

    client.login(&mut session, &credentials("123456")).await.unwrap();
    assert_eq!(session.token(), Some("tok-jojo"));
    assert_eq!(whoami_as(&client, &session).await, "Bearer tok-jojo");

    client.logout(&mut session);
    assert_eq!(whoami_as(&client, &session).await, "anonymous");
}

#[tokio::test]
async fn refused_login_leaves_the_session_alone() {
    let client = ApiClient::with_endpoint(Mode::Development, spawn_api().await).unwrap();
    let mut session = SessionContext::new();
    session.set_token("previous");

    let err = client.login(&mut session, &credentials("wrong-password")).await.unwrap_err();
    match err {
        ClientError::Rejected { status, message } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(message, "Wrong username or password");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(session.token(), Some("previous"));
}

#[tokio::test]
async fn production_authenticates_through_the_session_cookie() {
    let client = ApiClient::with_endpoint(Mode::Production, spawn_api().await).unwrap();
    let mut session = SessionContext::new();

    assert_eq!(get_text(&client, &session, "/cookie").await, "anonymous");

    client.login(&mut session, &credentials("123456")).await.unwrap();
    assert!(session.is_authenticated());
    assert_eq!(whoami_as(&client, &session).await, "anonymous");
    assert_eq!(get_text(&client, &session, "/cookie").await, "token=tok-jojo");

    client.logout(&mut session);
    assert!(!session.is_authenticated());
    assert_eq!(get_text(&client, &session, "/cookie").await, "anonymous");
}
