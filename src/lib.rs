//! Media share-link validation and normalization.
//!
//! Entrepreneurs paste Google Drive, YouTube, and Vimeo share links into
//! project forms, and those links render nothing when dropped into an
//! `<img>` or `<iframe>` as-is. This crate classifies a raw submitted
//! link, validates it against the supported providers, and rewrites it
//! into a directly embeddable URL, with a thumbnail URL for videos.
//!
//! ```
//! use embedlink::MediaLinkValidator;
//!
//! let validator = MediaLinkValidator::default();
//! let result =
//!     validator.classify_image("https://drive.google.com/file/d/ABC123/view?usp=sharing");
//! assert!(result.is_valid);
//! assert_eq!(
//!     result.normalized_url.as_deref(),
//!     Some("https://lh3.googleusercontent.com/d/ABC123=s800?authuser=0")
//! );
//! ```
//!
//! All failures surface through the `error` field of [`LinkResult`];
//! nothing panics or returns `Err` across the crate boundary. Network
//! failures during the Vimeo thumbnail lookup degrade to a missing
//! preview rather than invalidating the link.

pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod validator;

pub use config::LinkConfig;
pub use error::LinkError;
pub use models::{LinkResult, MediaKind, ThumbnailQuality};
pub use validator::MediaLinkValidator;
