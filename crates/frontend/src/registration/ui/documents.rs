//! Photo / ID uploads carried inline in the registration payload

use base64::{engine::general_purpose::STANDARD, Engine as _};
use contracts::domain::registration::DocumentRef;
use wasm_bindgen_futures::JsFuture;

pub const MAX_DOCUMENT_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

pub fn check_document(file_name: &str, content_type: &str, size: f64) -> Result<(), String> {
    if size <= 0.0 {
        return Err(format!("{} is empty", file_name));
    }
    if size > MAX_DOCUMENT_BYTES {
        return Err(format!("{} is larger than 5 MB", file_name));
    }
    if !(content_type.starts_with("image/") || content_type == "application/pdf") {
        return Err(format!("{} must be an image or a PDF", file_name));
    }
    Ok(())
}

pub fn encode_document(file_name: &str, content_type: &str, bytes: &[u8]) -> DocumentRef {
    DocumentRef {
        file_name: file_name.to_string(),
        content_type: content_type.to_string(),
        data_base64: STANDARD.encode(bytes),
    }
}

pub async fn read_document(file: web_sys::File) -> Result<DocumentRef, String> {
    let name = file.name();
    let content_type = file.type_();
    check_document(&name, &content_type, file.size())?;

    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Could not read {}: {:?}", name, e))?;
    let bytes = js_sys::Uint8Array::new(&array_buffer).to_vec();

    Ok(encode_document(&name, &content_type, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits() {
        assert!(check_document("p.jpg", "image/jpeg", 120_000.0).is_ok());
        assert!(check_document("id.pdf", "application/pdf", 1.0).is_ok());
        assert_eq!(
            check_document("p.jpg", "image/jpeg", 0.0),
            Err("p.jpg is empty".to_string())
        );
        assert!(check_document("big.png", "image/png", MAX_DOCUMENT_BYTES + 1.0).is_err());
        assert!(check_document("notes.txt", "text/plain", 10.0).is_err());
    }

    #[test]
    fn test_encode() {
        let doc = encode_document("p.png", "image/png", b"abc");
        assert_eq!(doc.data_base64, "YWJj");
        assert!(!doc.is_empty());
    }
}
