mod common;

use harbormaster_server::auth::Registration;
use harbormaster_server::{AppError, Role};

#[tokio::test]
async fn test_register_login_resolve_round_trip() {
    let Some(state) = common::test_state().await else { return };

    let (user, mobile) = common::seed_user(&state, Role::Owner, "password123").await;
    let token = state.auth.login(&mobile, "password123").await.unwrap();

    let resolved = state.auth.resolve_token(&token).await.unwrap();
    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.mobile_number, mobile);
    assert_eq!(resolved.role, Role::Owner);
}

#[tokio::test]
async fn test_resolve_rejects_invalid_token() {
    let Some(state) = common::test_state().await else { return };

    match state.auth.resolve_token("invalid_token").await {
        Err(AppError::Unauthenticated(_)) => (),
        other => panic!("Expected unauthenticated error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_register_duplicate_mobile_is_conflict() {
    let Some(state) = common::test_state().await else { return };

    let (_, mobile) = common::seed_user(&state, Role::Captain, "password123").await;

    let second = state
        .auth
        .register(Registration {
            full_name: "Second Claimant".into(),
            mobile_number: mobile,
            email: None,
            password: "password456".into(),
            role: Role::Captain,
        })
        .await;

    match second {
        Err(AppError::Conflict(message)) => {
            assert_eq!(message, "Mobile number already registered");
        }
        other => panic!("Expected conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let Some(state) = common::test_state().await else { return };

    let (_, mobile) = common::seed_user(&state, Role::Captain, "password123").await;

    match state.auth.login(&mobile, "password124").await {
        Err(AppError::InvalidCredentials) => (),
        other => panic!("Expected invalid credentials, got {:?}", other),
    }
}
