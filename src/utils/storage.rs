use crate::types::StorageContext;
use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::{Digest, Sha256};
use ulid::Ulid;

#[derive(Debug)]
pub enum Error {
    UploadFailed,
    DeleteFailed,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UploadedMedia {
    pub public_id: String,
    pub url: String,
    pub timestamp: i64,
}

fn sign(data_to_sign: String) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data_to_sign);
    base16ct::lower::encode_string(&hasher.finalize())
}

pub fn upload_signature(cfg: &StorageContext, timestamp: i64) -> String {
    sign(format!(
        "timestamp={}&upload_preset={}{}",
        timestamp, cfg.upload_preset, cfg.api_secret
    ))
}

pub fn delete_signature(cfg: &StorageContext, media: &UploadedMedia) -> String {
    sign(format!(
        "public_id={}&timestamp={}{}",
        media.public_id, media.timestamp, cfg.api_secret
    ))
}

pub async fn upload_file(cfg: StorageContext, contents: Vec<u8>) -> Result<UploadedMedia, Error> {
    let part = Part::bytes(contents).file_name(Ulid::new().to_string());
    let timestamp = chrono::Utc::now().timestamp();

    let form = Form::new()
        .text("upload_preset", cfg.upload_preset.clone())
        .text("api_key", cfg.api_key.clone())
        .text("timestamp", format!("{}", timestamp))
        .text("signature", upload_signature(&cfg, timestamp))
        .text("signature_algorithm", "sha256")
        .part("file", part);

    let res = Client::new()
        .post(cfg.upload_endpoint.clone())
        .multipart(form)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to upload a file: {:?}", err);
            Error::UploadFailed
        })?;

    let status = res.status();
    let data = res.text().await.map_err(|err| {
        tracing::error!("Error occurred while processing return data: {:?}", err);
        Error::UploadFailed
    })?;

    if status != StatusCode::OK {
        tracing::error!("Failed to upload file: {}", data);
        return Err(Error::UploadFailed);
    }

    serde_json::from_str::<UploadResponse>(&data)
        .map(|res| UploadedMedia {
            url: res.secure_url,
            public_id: res.public_id,
            timestamp,
        })
        .map_err(|err| {
            tracing::error!("Failed to deserialize storage response: {:?}", err);
            Error::UploadFailed
        })
}

pub async fn delete_file(cfg: StorageContext, media: UploadedMedia) -> Result<(), Error> {
    let body = json!({
        "public_id": media.public_id,
        "api_key": cfg.api_key,
        "signature": delete_signature(&cfg, &media),
        "timestamp": media.timestamp,
    });

    let res = Client::new()
        .post(cfg.delete_endpoint.clone())
        .json(&body)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete file {}: {:?}", media.url, err);
            Error::DeleteFailed
        })?;

    if res.status() != StatusCode::OK {
        let data = res.text().await.unwrap_or_default();
        tracing::error!("Failed to delete uploaded file: {}", data);
        return Err(Error::DeleteFailed);
    }

    Ok(())
}

/// Uploads the new image first, then drops the one it replaces. A failed
/// delete leaves an orphaned object behind but still succeeds.
pub async fn replace_file(
    cfg: StorageContext,
    previous: Option<UploadedMedia>,
    contents: Vec<u8>,
) -> Result<UploadedMedia, Error> {
    let uploaded = upload_file(cfg.clone(), contents).await?;

    if let Some(previous) = previous {
        if delete_file(cfg, previous.clone()).await.is_err() {
            tracing::warn!("Orphaned media left in storage: {}", previous.public_id);
        }
    }

    Ok(uploaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> StorageContext {
        StorageContext {
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            upload_endpoint: "http://127.0.0.1:1/upload".to_string(),
            delete_endpoint: "http://127.0.0.1:1/destroy".to_string(),
            upload_preset: "meals".to_string(),
        }
    }

    #[test]
    fn upload_signature_is_lowercase_sha256_hex() {
        let signature = upload_signature(&cfg(), 1_700_000_000);
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(signature, upload_signature(&cfg(), 1_700_000_000));
        assert_ne!(signature, upload_signature(&cfg(), 1_700_000_001));
    }

    #[test]
    fn delete_signature_depends_on_public_id() {
        let media = UploadedMedia {
            public_id: "a".to_string(),
            url: "https://cdn.example/a.png".to_string(),
            timestamp: 1,
        };
        let other = UploadedMedia {
            public_id: "b".to_string(),
            ..media.clone()
        };
        assert_ne!(delete_signature(&cfg(), &media), delete_signature(&cfg(), &other));
    }

    #[tokio::test]
    async fn unreachable_storage_fails_the_upload() {
        let res = upload_file(cfg(), vec![1, 2, 3]).await;
        assert!(matches!(res, Err(Error::UploadFailed)));
    }
}
