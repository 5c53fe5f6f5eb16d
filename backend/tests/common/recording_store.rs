use std::collections::BTreeMap;
use std::sync::Mutex;

use agriscale_backend::photo_storage::{
    ObjectStoreClient, ReadSignRequest, SignedUpload, StoreError, StoreResult, UploadSignRequest,
};
use async_trait::async_trait;

/// Object store double that records every signing call
#[derive(Default)]
pub struct RecordingStore {
    pub uploads: Mutex<Vec<UploadSignRequest>>,
    pub reads: Mutex<Vec<ReadSignRequest>>,
    failure: Option<StoreError>,
}

impl RecordingStore {
    pub fn failing(failure: StoreError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn upload_calls(&self) -> Vec<UploadSignRequest> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn read_calls(&self) -> Vec<ReadSignRequest> {
        self.reads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStoreClient for RecordingStore {
    async fn presign_upload(&self, request: UploadSignRequest) -> StoreResult<SignedUpload> {
        self.uploads.lock().unwrap().push(request.clone());
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        Ok(SignedUpload {
            url: format!("https://{}.s3.us-east-1.amazonaws.com/", request.bucket),
            fields: BTreeMap::from([
                ("key".to_string(), request.key),
                ("Content-Type".to_string(), request.content_type),
                ("policy".to_string(), "cG9saWN5".to_string()),
                ("x-amz-signature".to_string(), "0".repeat(64)),
            ]),
        })
    }

    async fn presign_read(&self, request: ReadSignRequest) -> StoreResult<String> {
        self.reads.lock().unwrap().push(request.clone());
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        Ok(format!(
            "https://{}.s3.us-east-1.amazonaws.com/{}?X-Amz-Expires={}&X-Amz-Signature={}",
            request.bucket,
            request.key,
            request.expires_in.as_secs(),
            "0".repeat(64)
        ))
    }
}
