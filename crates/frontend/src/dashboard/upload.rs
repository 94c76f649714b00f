//! Multipart image uploads for the gallery and player of the month

use web_sys::{File, FormData};

use crate::registration::ui::documents::MAX_DOCUMENT_BYTES;
use crate::shared::http::ApiError;
use crate::shared::validation::FieldErrors;

/// What the form knows about the chosen file before uploading it
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMeta {
    pub name: String,
    pub content_type: String,
    pub size: f64,
}

impl ImageMeta {
    pub fn from_file(file: &File) -> Self {
        Self {
            name: file.name(),
            content_type: file.type_(),
            size: file.size(),
        }
    }
}

/// Record an `image` error unless a valid image was chosen
pub fn require_image(errors: &mut FieldErrors, image: Option<&ImageMeta>) {
    match image {
        None => errors.insert("image", "Choose an image to upload"),
        Some(meta) => {
            if let Err(message) = check_image(&meta.name, &meta.content_type, meta.size) {
                errors.insert("image", message);
            }
        }
    }
}

pub fn check_image(file_name: &str, content_type: &str, size: f64) -> Result<(), String> {
    if !content_type.starts_with("image/") {
        return Err(format!("{} is not an image", file_name));
    }
    if size <= 0.0 {
        return Err(format!("{} is empty", file_name));
    }
    if size > MAX_DOCUMENT_BYTES {
        return Err(format!("{} is larger than 5 MB", file_name));
    }
    Ok(())
}

/// Text fields plus the image under `image`
pub fn build_form(fields: &[(&str, &str)], image: &File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;
    }
    form.append_with_blob_and_filename("image", image, &image.name())
        .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_image() {
        assert!(check_image("team.jpg", "image/jpeg", 2048.0).is_ok());
        assert_eq!(
            check_image("roster.pdf", "application/pdf", 2048.0),
            Err("roster.pdf is not an image".to_string())
        );
        assert!(check_image("huge.png", "image/png", MAX_DOCUMENT_BYTES * 2.0).is_err());
    }

    #[test]
    fn test_require_image() {
        let mut errors = FieldErrors::new();
        require_image(&mut errors, None);
        assert_eq!(errors.get("image"), Some("Choose an image to upload"));

        let mut errors = FieldErrors::new();
        let meta = ImageMeta {
            name: "keeper.webp".to_string(),
            content_type: "image/webp".to_string(),
            size: 90_000.0,
        };
        require_image(&mut errors, Some(&meta));
        assert!(errors.is_empty());
    }
}
