use thiserror::Error;

/// Why a submitted link was rejected.
///
/// Never crosses the crate boundary as an `Err`: classification always
/// returns a [`LinkResult`](crate::models::LinkResult), and the `Display`
/// message of the matched variant is carried in its `error` field for the
/// form to show. Every outcome is recoverable by the user submitting a
/// corrected link.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    #[error("This field is required")]
    RequiredField,

    #[error("Enter a valid image link: a Google Drive share link or a direct image URL")]
    InvalidImageUrl,

    #[error("Enter a valid YouTube or Vimeo link")]
    InvalidVideoUrl,

    #[error("This image link appears to be broken. Check that link sharing is enabled and try again")]
    ImageUnreachable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_field_message_is_user_facing() {
        assert_eq!(
            LinkError::RequiredField.to_string(),
            "This field is required"
        );
    }

    #[test]
    fn invalid_video_message_names_supported_providers() {
        let msg = LinkError::InvalidVideoUrl.to_string();
        assert!(msg.contains("YouTube"));
        assert!(msg.contains("Vimeo"));
    }

    #[test]
    fn unreachable_message_mentions_sharing() {
        assert!(LinkError::ImageUnreachable.to_string().contains("sharing"));
    }
}
