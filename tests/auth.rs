use actix_session::SessionExt;
use actix_web::test::TestRequest;

use habana_booking::repository::AdminWriter;
use habana_booking::services::auth::{
    change_password, login, logout, new_admin_account, require_admin,
};
use habana_booking::services::ServiceError;

mod common;

fn seeded_repo(password: &str) -> habana_booking::repository::DocumentRepository {
    let repo = common::memory_repo();
    repo.save_admin_account(&new_admin_account("admin", password, "Administrador").unwrap())
        .unwrap();
    repo
}

#[test]
fn login_marks_the_session_authenticated() {
    let repo = seeded_repo("secret");
    let request = TestRequest::default().to_http_request();
    let session = request.get_session();

    assert!(matches!(
        require_admin(&session),
        Err(ServiceError::Unauthorized)
    ));

    login(&repo, &session, "admin", "secret").unwrap();
    require_admin(&session).unwrap();

    logout(&session);
    assert!(matches!(
        require_admin(&session),
        Err(ServiceError::Unauthorized)
    ));
}

#[test]
fn wrong_credentials_are_rejected() {
    let repo = seeded_repo("secret");
    let request = TestRequest::default().to_http_request();
    let session = request.get_session();

    assert!(matches!(
        login(&repo, &session, "admin", "wrong"),
        Err(ServiceError::AuthFailure)
    ));
    assert!(matches!(
        login(&repo, &session, "nobody", "secret"),
        Err(ServiceError::AuthFailure)
    ));
    assert!(matches!(
        require_admin(&session),
        Err(ServiceError::Unauthorized)
    ));
}

#[test]
fn login_without_a_seeded_account_fails() {
    let repo = common::memory_repo();
    let request = TestRequest::default().to_http_request();
    let session = request.get_session();

    assert!(matches!(
        login(&repo, &session, "admin", "secret"),
        Err(ServiceError::AuthFailure)
    ));
}

#[test]
fn change_password_requires_the_old_one() {
    let repo = seeded_repo("secret");

    assert!(matches!(
        change_password(&repo, "wrong", "new-password"),
        Err(ServiceError::AuthFailure)
    ));

    change_password(&repo, "secret", "new-password").unwrap();

    let request = TestRequest::default().to_http_request();
    let session = request.get_session();
    assert!(matches!(
        login(&repo, &session, "admin", "secret"),
        Err(ServiceError::AuthFailure)
    ));
    login(&repo, &session, "admin", "new-password").unwrap();
}
