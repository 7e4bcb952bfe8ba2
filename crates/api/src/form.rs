//! Body extraction for write endpoints.
//!
//! Admin forms arrive as `multipart/form-data` (whenever an image is
//! attached), `application/x-www-form-urlencoded`, or a flat JSON object.
//! [`FormPayload`] normalizes all three into text fields plus uploaded files,
//! and [`FromPayload`] turns that into a typed form validated once with
//! `validator`.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde_json::Value;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// A file part from a multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied name; only its extension is kept when stored.
    pub file_name: String,
    pub bytes: Bytes,
}

/// Text fields and files from a write request, independent of encoding.
#[derive(Debug, Default)]
pub struct FormPayload {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

/// A typed form built from a [`FormPayload`].
///
/// Implementations only read fields; presence and format rules belong in the
/// `#[validate(...)]` attributes so they are checked in one pass.
pub trait FromPayload: Validate + Sized {
    fn from_payload(payload: &FormPayload) -> AppResult<Self>;
}

impl FormPayload {
    /// Build `T` from the payload and run its validation rules.
    pub fn validated<T: FromPayload>(&self) -> AppResult<T> {
        let form = T::from_payload(self)?;
        form.validate()?;
        Ok(form)
    }

    /// Text value of `name`, or an empty string when absent.
    ///
    /// Absent fields become empty rather than "unchanged": updates replace
    /// every column.
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Text value of `name`, treating an empty value as absent.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.fields.get(name).filter(|v| !v.is_empty()).cloned()
    }

    /// Integer value of `name`; `None` when absent or empty.
    ///
    /// Fails with `Invalid <label> format` when the value is not an integer.
    pub fn int(&self, name: &str, label: &str) -> AppResult<Option<i64>> {
        match self.fields.get(name).map(|v| v.trim()) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("Invalid {label} format"))),
        }
    }

    /// Remove and return the file uploaded under `name`.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut payload = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::rejected(e.status(), e.body_text()))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name.is_empty() {
                continue;
            }

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::rejected(e.status(), e.body_text()))?;
                    // Browsers send an empty part when no file was picked.
                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    payload.files.insert(name, UploadedFile { file_name, bytes });
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::rejected(e.status(), e.body_text()))?;
                    payload.fields.insert(name, text);
                }
            }
        }

        Ok(payload)
    }

    fn from_json(object: serde_json::Map<String, Value>) -> AppResult<Self> {
        let mut fields = HashMap::with_capacity(object.len());
        for (name, value) in object {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(AppError::BadRequest(format!("Invalid value for {name}")));
                }
            };
            fields.insert(name, text);
        }
        Ok(Self {
            fields,
            files: HashMap::new(),
        })
    }
}

impl<S> FromRequest<S> for FormPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::rejected(e.status(), e.body_text()))?;
            Self::from_multipart(multipart).await
        } else if content_type.starts_with("application/json") {
            let Json(object) = Json::<serde_json::Map<String, Value>>::from_request(req, state)
                .await
                .map_err(|e| AppError::rejected(e.status(), e.body_text()))?;
            Self::from_json(object)
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::rejected(e.status(), e.body_text()))?;
            Ok(Self {
                fields,
                files: HashMap::new(),
            })
        } else if content_type.is_empty() {
            // No body declared: every field is absent.
            Ok(Self::default())
        } else {
            Err(AppError::BadRequest(format!(
                "Unsupported content type: {content_type}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::body::Body;

    use super::*;

    const BOUNDARY: &str = "X-FORM-BOUNDARY";

    fn request(content_type: &str, body: impl Into<Body>) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, content_type)
            .body(body.into())
            .unwrap()
    }

    fn multipart_body() -> String {
        format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"title\"\r\n\r\n\
             Hello\r\n\
             --{b}\r\n\
             Content-Disposition: form-data; name=\"image\"; filename=\"logo.png\"\r\n\
             Content-Type: image/png\r\n\r\n\
             PNGDATA\r\n\
             --{b}\r\n\
             Content-Disposition: form-data; name=\"icon\"; filename=\"\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             \r\n\
             --{b}--\r\n",
            b = BOUNDARY
        )
    }

    #[tokio::test]
    async fn multipart_splits_text_and_files() {
        let req = request(
            &format!("multipart/form-data; boundary={BOUNDARY}"),
            multipart_body(),
        );
        let mut payload = FormPayload::from_request(req, &()).await.unwrap();

        assert_eq!(payload.text("title"), "Hello");
        let file = payload.take_file("image").expect("image part");
        assert_eq!(file.file_name, "logo.png");
        assert_eq!(&file.bytes[..], b"PNGDATA");
        assert!(payload.take_file("image").is_none());
        assert!(payload.take_file("icon").is_none(), "empty file part is skipped");
    }

    #[tokio::test]
    async fn urlencoded_fields_are_read() {
        let req = request(
            "application/x-www-form-urlencoded",
            "phone=0811&email=a%40b.com",
        );
        let payload = FormPayload::from_request(req, &()).await.unwrap();

        assert_eq!(payload.text("phone"), "0811");
        assert_eq!(payload.text("email"), "a@b.com");
        assert_eq!(payload.text("address"), "");
    }

    #[tokio::test]
    async fn json_scalars_are_flattened() {
        let req = request(
            "application/json",
            r#"{"title":"Plan","price":150000,"active":true,"note":null}"#,
        );
        let payload = FormPayload::from_request(req, &()).await.unwrap();

        assert_eq!(payload.text("title"), "Plan");
        assert_eq!(payload.int("price", "price").unwrap(), Some(150_000));
        assert_eq!(payload.text("active"), "true");
        assert_eq!(payload.optional_text("note"), None);
    }

    #[tokio::test]
    async fn nested_json_is_rejected() {
        let req = request("application/json", r#"{"title":{"en":"x"}}"#);
        assert_matches!(
            FormPayload::from_request(req, &()).await,
            Err(AppError::BadRequest(msg)) if msg == "Invalid value for title"
        );
    }

    #[tokio::test]
    async fn unknown_content_type_is_rejected() {
        let req = request("text/plain", "title=x");
        assert_matches!(
            FormPayload::from_request(req, &()).await,
            Err(AppError::BadRequest(_))
        );
    }

    #[test]
    fn int_reports_the_field_label() {
        let payload = FormPayload {
            fields: HashMap::from([("price".to_string(), "12.5".to_string())]),
            files: HashMap::new(),
        };
        assert_matches!(
            payload.int("price", "price"),
            Err(AppError::BadRequest(msg)) if msg == "Invalid price format"
        );
        assert_eq!(payload.int("discount", "discount").unwrap(), None);
    }

    #[test]
    fn optional_text_treats_empty_as_absent() {
        let payload = FormPayload {
            fields: HashMap::from([("password".to_string(), String::new())]),
            files: HashMap::new(),
        };
        assert_eq!(payload.optional_text("password"), None);
    }
}
