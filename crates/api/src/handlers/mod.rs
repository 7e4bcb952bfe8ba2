//! Entity handlers plus the helpers every write path shares.
//!
//! Asset lifecycle, applied the same way by every entity with an image
//! column:
//!
//! - create: validate, store the upload, insert the row. A failed insert
//!   releases the fresh file.
//! - update: validate, load the row, store a replacement if one was sent,
//!   replace the row, then release the superseded file. A failed write
//!   releases the fresh file and keeps the old one.
//! - delete: delete the row, then release its file. Release is best effort
//!   and never fails the request.

pub mod about;
pub mod article;
pub mod auth;
pub mod category_article;
pub mod category_faq;
pub mod contact;
pub mod faq;
pub mod health;
pub mod page;
pub mod portfolio;
pub mod product;
pub mod service;
pub mod user;

use std::future::Future;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use codetech_core::assets::AssetStore;
use codetech_core::error::CoreError;
use codetech_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::form::UploadedFile;

/// Numeric `{id}` path segment; anything else is `400 Invalid ID`.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;
        raw.trim().parse().map(IdPath).map_err(|_| invalid_id())
    }
}

fn invalid_id() -> AppError {
    AppError::BadRequest("Invalid ID".into())
}

/// `404` for a numeric id with no row behind it.
pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Store an upload the entity cannot be created without.
///
/// `label` names the field in the error, e.g. `"Image is required"`.
pub(crate) async fn store_required(
    assets: &AssetStore,
    upload: Option<UploadedFile>,
    label: &str,
) -> AppResult<String> {
    let file =
        upload.ok_or_else(|| AppError::Core(CoreError::Validation(format!("{label} is required"))))?;
    Ok(assets.save(&file.bytes, &file.file_name).await?)
}

/// Store an upload if one was sent.
pub(crate) async fn store_optional(
    assets: &AssetStore,
    upload: Option<UploadedFile>,
) -> AppResult<Option<String>> {
    match upload {
        Some(file) => Ok(Some(assets.save(&file.bytes, &file.file_name).await?)),
        None => Ok(None),
    }
}

/// Run a row write that references `fresh`, releasing `fresh` if it fails.
pub(crate) async fn commit_with_asset<T, F>(
    assets: &AssetStore,
    fresh: Option<&str>,
    write: F,
) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match write.await {
        Ok(row) => Ok(row),
        Err(e) => {
            if let Some(reference) = fresh {
                tracing::debug!(%reference, "Row write failed, releasing new asset");
                assets.release(reference).await;
            }
            Err(e)
        }
    }
}

/// After a committed update, drop the file the row no longer points at.
pub(crate) async fn release_superseded(assets: &AssetStore, old: &str, fresh: Option<&str>) {
    if let Some(new_reference) = fresh {
        if new_reference != old {
            assets.release(old).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::body::Bytes;

    use super::*;

    fn upload(name: &str, bytes: &'static [u8]) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            bytes: Bytes::from_static(bytes),
        }
    }

    #[tokio::test]
    async fn missing_required_upload_names_the_field() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetStore::new(dir.path());

        assert_matches!(
            store_required(&assets, None, "Banner").await,
            Err(AppError::Core(CoreError::Validation(msg))) if msg == "Banner is required"
        );
    }

    #[tokio::test]
    async fn failed_write_releases_the_fresh_asset() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetStore::new(dir.path());
        let reference = store_required(&assets, Some(upload("a.png", b"a")), "Image")
            .await
            .unwrap();

        let result: AppResult<()> = commit_with_asset(&assets, Some(&reference), async {
            Err::<(), _>(AppError::InternalError("insert failed".into()))
        })
        .await;

        assert!(result.is_err());
        assert!(!assets.resolve(&reference).unwrap().exists());
    }

    #[tokio::test]
    async fn successful_write_keeps_the_fresh_asset() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetStore::new(dir.path());
        let reference = store_optional(&assets, Some(upload("b.jpg", b"b")))
            .await
            .unwrap()
            .unwrap();

        let id = commit_with_asset(&assets, Some(&reference), async { Ok::<_, AppError>(5) })
            .await
            .unwrap();

        assert_eq!(id, 5);
        assert!(assets.resolve(&reference).unwrap().exists());
    }

    #[tokio::test]
    async fn superseded_asset_is_released_only_when_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetStore::new(dir.path());
        let old = store_optional(&assets, Some(upload("old.png", b"old")))
            .await
            .unwrap()
            .unwrap();

        release_superseded(&assets, &old, None).await;
        assert!(assets.resolve(&old).unwrap().exists());

        let new = store_optional(&assets, Some(upload("new.png", b"new")))
            .await
            .unwrap()
            .unwrap();
        release_superseded(&assets, &old, Some(&new)).await;
        assert!(!assets.resolve(&old).unwrap().exists());
        assert!(assets.resolve(&new).unwrap().exists());
    }
}
