use super::types::{CandidateFile, FileSource, ImageKind};
use super::UploadError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encodes raw image bytes as a `data:` URL usable directly as an image source.
pub fn encode_data_url(kind: ImageKind, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", kind.mime(), STANDARD.encode(bytes))
}

/// Reads the whole candidate file and returns it as a data URL.
pub async fn read_data_url(file: CandidateFile, kind: ImageKind) -> Result<String, UploadError> {
    let bytes = match file.source {
        FileSource::Bytes(bytes) => bytes.to_vec(),
        FileSource::Path(path) => {
            tokio::fs::read(&path)
                .await
                .map_err(|source| UploadError::Read {
                    name: file.name.clone(),
                    source,
                })?
        }
    };

    Ok(encode_data_url(kind, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn data_url_carries_mime_and_padded_base64() {
        assert_eq!(
            encode_data_url(ImageKind::Png, b"plan"),
            "data:image/png;base64,cGxhbg=="
        );
    }

    #[tokio::test]
    async fn in_memory_files_are_encoded() {
        let file = CandidateFile::from_bytes("plan.jpg", None, Arc::from(b"abc".to_vec()));
        let url = read_data_url(file, ImageKind::Jpeg).await.unwrap();
        assert_eq!(url, "data:image/jpeg;base64,YWJj");
    }

    #[tokio::test]
    async fn files_on_disk_are_encoded() {
        let path = std::env::temp_dir().join(format!("roomify-reader-{}.webp", std::process::id()));
        std::fs::write(&path, b"webp").unwrap();

        let url = read_data_url(CandidateFile::from_path(&path), ImageKind::Webp)
            .await
            .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(url, "data:image/webp;base64,d2VicA==");
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("roomify-reader-does-not-exist.png");
        let err = read_data_url(CandidateFile::from_path(&path), ImageKind::Png)
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Read { ref name, .. } if name == "roomify-reader-does-not-exist.png"));
    }
}
