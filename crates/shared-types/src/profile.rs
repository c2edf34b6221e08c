use crate::error::AppError;
use crate::requests::UpdateProfileRequest;
use std::collections::HashMap;
use validator::Validate;

/// Largest accepted avatar upload.
pub const MAX_AVATAR_BYTES: u64 = 2 * 1024 * 1024;

/// Image types the avatar endpoint accepts.
pub const AVATAR_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Raw state of the profile form on the account page.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    pub current_password: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: Option<String>,
    pub confirm_password: String,
}

impl ProfileForm {
    /// Validate and build the update request.
    ///
    /// Password fields are only checked when a new password was typed.
    pub fn into_request(self) -> Result<UpdateProfileRequest, AppError> {
        let normalized = ProfileForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            new_password: self.new_password.filter(|p| !p.is_empty()),
            ..self
        };

        let mut field_errors: HashMap<String, String> = match normalized.validate() {
            Ok(()) => HashMap::new(),
            Err(errors) => AppError::from(errors).field_errors,
        };

        if let Some(new_password) = &normalized.new_password {
            if normalized.current_password.is_empty() {
                field_errors.insert(
                    "current_password".into(),
                    "Enter your current password to set a new one".into(),
                );
            }
            if &normalized.confirm_password != new_password {
                field_errors.insert(
                    "confirm_password".into(),
                    "Passwords do not match".into(),
                );
            }
        }

        if !field_errors.is_empty() {
            return Err(AppError::validation("Validation failed", field_errors));
        }

        let has_new = normalized.new_password.is_some();
        Ok(UpdateProfileRequest {
            name: normalized.name,
            email: normalized.email,
            current_password: has_new.then_some(normalized.current_password),
            new_password: normalized.new_password,
        })
    }
}

/// Why a chosen avatar file was refused before upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarRejection {
    TooLarge,
    UnsupportedType(String),
}

impl AvatarRejection {
    pub fn message(&self) -> String {
        match self {
            AvatarRejection::TooLarge => "Profile picture must be under 2 MB".to_string(),
            AvatarRejection::UnsupportedType(t) => {
                format!("Unsupported image type \"{t}\". Use JPEG, PNG or WebP.")
            }
        }
    }
}

/// Check size and type of a chosen avatar file.
pub fn check_avatar(size: u64, content_type: &str) -> Result<(), AvatarRejection> {
    if size > MAX_AVATAR_BYTES {
        return Err(AvatarRejection::TooLarge);
    }
    let content_type = content_type.trim().to_lowercase();
    if !AVATAR_CONTENT_TYPES.contains(&content_type.as_str()) {
        return Err(AvatarRejection::UnsupportedType(content_type));
    }
    Ok(())
}
