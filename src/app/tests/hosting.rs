use std::env::temp_dir;
use std::sync::Arc;
use std::time::Duration;

use app::catalog;
use app::host_form::DraftField;
use app::host_form::FormState;
use app::host_form::SignInGate;
use app::host_form::SUCCESS_MESSAGE;
use app::submit::HttpSubmitter;
use app::theme::Theme;
use app::theme::ThemeHost;
use app::Session;
use axum::Router;
use metadata::users::CreateUserRequest;
use metadata::MetadataProvider;
use platform::auth::token::make_session_token;
use platform::PlatformProvider;
use uuid::Uuid;

const TOKEN_KEY: &str = "test-session-key";

struct NullThemeHost;

impl ThemeHost for NullThemeHost {
    fn persisted(&self) -> Option<Theme> {
        None
    }

    fn system(&self) -> Option<Theme> {
        None
    }

    fn apply(&self, _theme: Theme) {}

    fn persist(&self, _theme: Theme) {}
}

struct SignedIn;

impl SignInGate for SignedIn {
    fn is_signed_in(&self) -> bool {
        true
    }

    fn request_sign_in(&self) {}
}

async fn serve_platform() -> (String, Arc<MetadataProvider>) {
    let mut path = temp_dir();
    path.push(format!("{}.db", Uuid::new_v4()));

    let db = Arc::new(metadata::rocksdb::new(path).unwrap());
    let md = Arc::new(MetadataProvider::try_new(db).unwrap());

    let mut cfg = common::config::Config::default();
    cfg.auth.session_token_key = TOKEN_KEY.to_string();
    cfg.webhook.secret = "whsec_d2ViaG9vay10ZXN0LWtleQ==".to_string();

    let platform = Arc::new(PlatformProvider::try_new(md.clone(), cfg.clone()).unwrap());
    let router = platform::http::attach_routes(Router::new(), &md, &platform, cfg);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{addr}"), md)
}

fn fill(session: &mut Session) {
    session.form.update_field(DraftField::Title, "Board Game Hangout");
    session.form.update_field(DraftField::Date, "2025-07-14");
    session.form.update_field(DraftField::Time, "18:00");
    session.form.update_field(DraftField::Location, "Ballygunge");
    session.form.update_field(DraftField::Tags, "Games, Indoor, Chill");
    session
        .form
        .update_field(DraftField::Description, "Bring your favourite game");
}

#[tokio::test]
async fn hosting_reaches_the_server_end_to_end() {
    let (base_url, md) = serve_platform().await;
    let user = md
        .users
        .create(CreateUserRequest {
            identity_id: "idn_1".to_string(),
            email: "megha@example.com".to_string(),
            username: None,
            name: "Megha D".to_string(),
            avatar_url: None,
        })
        .unwrap();

    let token = make_session_token("idn_1", chrono::Duration::hours(1), TOKEN_KEY).unwrap();
    let submitter = HttpSubmitter::new(base_url, token);

    let mut session = Session::with_catalog(
        catalog::builtin(),
        Box::new(NullThemeHost),
        Duration::from_millis(50),
    );
    assert!(session.open_host_form(&SignedIn));
    fill(&mut session);

    assert!(session.submit_host_form(&submitter).await);
    assert_eq!(*session.form.state(), FormState::Closed);
    assert_eq!(session.toasts.current(), Some(SUCCESS_MESSAGE));

    let hosted = md.events.list_by_host(user.id).unwrap();
    assert_eq!(hosted.data.len(), 1);
    assert_eq!(hosted.data[0].title, "Board Game Hangout");
    assert_eq!(
        hosted.data[0].tags,
        vec!["Games".to_string(), "Indoor".to_string(), "Chill".to_string()]
    );
}

#[tokio::test]
async fn a_rejected_submission_surfaces_the_server_message() {
    let (base_url, _md) = serve_platform().await;

    // nobody provisioned this identity, the server turns the draft away
    let token = make_session_token("idn_ghost", chrono::Duration::hours(1), TOKEN_KEY).unwrap();
    let submitter = HttpSubmitter::new(base_url, token);

    let mut session = Session::with_catalog(
        catalog::builtin(),
        Box::new(NullThemeHost),
        Duration::from_millis(50),
    );
    assert!(session.open_host_form(&SignedIn));
    fill(&mut session);

    assert!(!session.submit_host_form(&submitter).await);
    assert_eq!(
        *session.form.state(),
        FormState::Error("Unauthorized".to_string())
    );
    assert!(session.form.is_open());
    assert_eq!(session.toasts.current(), None);
}
