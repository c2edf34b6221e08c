use crate::common::*;
use pretty_assertions::assert_eq;
use shared_types::{check_avatar, AppErrorKind, ProfileForm};

/// Name/email changes go out without password fields.
#[tokio::test]
async fn update_profile_without_password_change() {
    let (client, state) = stub_backend(StubState {
        user: Some(sample_user()),
        ..StubState::default()
    })
    .await;

    let request = ProfileForm {
        name: "Amina Y. Yusuf".to_string(),
        email: "amina.yusuf@example.com".to_string(),
        ..ProfileForm::default()
    }
    .into_request()
    .expect("form is valid");

    let user = client.update_profile(&request).await.expect("update succeeds");
    assert_eq!(user.name, "Amina Y. Yusuf");
    assert_eq!(user.email, "amina.yusuf@example.com");

    let stub = state.lock().await;
    let updates = &stub.profile_updates;
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].current_password, None);
    assert_eq!(updates[0].new_password, None);
}

/// A password change carries both the current and the new password.
#[tokio::test]
async fn update_profile_with_password_change() {
    let (client, state) = stub_backend(StubState {
        user: Some(sample_user()),
        ..StubState::default()
    })
    .await;

    let request = ProfileForm {
        name: "Amina Yusuf".to_string(),
        email: "amina@example.com".to_string(),
        current_password: "old-secret".to_string(),
        new_password: Some("new-secret-123".to_string()),
        confirm_password: "new-secret-123".to_string(),
    }
    .into_request()
    .expect("form is valid");

    client.update_profile(&request).await.expect("update succeeds");

    let stub = state.lock().await;
    let updates = &stub.profile_updates;
    assert_eq!(updates[0].current_password.as_deref(), Some("old-secret"));
    assert_eq!(updates[0].new_password.as_deref(), Some("new-secret-123"));
}

/// Server-side rejections surface with the server's own message.
#[tokio::test]
async fn update_profile_conflict_shows_server_message() {
    let (client, _state) = stub_backend(StubState {
        user: Some(sample_user()),
        ..StubState::default()
    })
    .await;

    let request = ProfileForm {
        name: "Amina Yusuf".to_string(),
        email: TAKEN_EMAIL.to_string(),
        ..ProfileForm::default()
    }
    .into_request()
    .expect("form is valid");

    let err = client.update_profile(&request).await.expect_err("email taken");
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.friendly_message(), "Email is already in use");
}

/// The avatar is sent as multipart field `profilePicture` and the updated
/// user comes back with its new picture URL.
#[tokio::test]
async fn upload_profile_picture_as_multipart() {
    let (client, state) = stub_backend(StubState {
        user: Some(sample_user()),
        ..StubState::default()
    })
    .await;

    let bytes = vec![0x89, b'P', b'N', b'G', 0, 0, 0, 0];
    check_avatar(bytes.len() as u64, "image/png").expect("small png is accepted");

    let user = client
        .upload_profile_picture("avatar.png".to_string(), "image/png".to_string(), bytes)
        .await
        .expect("upload succeeds");
    assert_eq!(
        user.profile_picture.as_deref(),
        Some("https://cdn.example.com/avatars/avatar.png")
    );

    let stub = state.lock().await;
    let uploads = &stub.uploads;
    assert_eq!(
        uploads.as_slice(),
        &[Upload {
            field: "profilePicture".to_string(),
            file_name: "avatar.png".to_string(),
            content_type: "image/png".to_string(),
            size: 8,
        }]
    );
}

/// A malformed content type is refused before anything is sent.
#[tokio::test]
async fn upload_with_invalid_content_type_is_not_sent() {
    let (client, state) = stub_backend(StubState {
        user: Some(sample_user()),
        ..StubState::default()
    })
    .await;

    let err = client
        .upload_profile_picture("avatar".to_string(), "not a mime".to_string(), vec![1, 2, 3])
        .await
        .expect_err("bad content type");
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(state.lock().await.uploads.is_empty());
}
