#[cfg(test)]
mod tests {
    use crate::client::{ImageUpload, PredictClient};
    use crate::error::PredictError;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn jpeg_upload() -> ImageUpload {
        ImageUpload {
            file_name: "daun.jpg".to_owned(),
            content_type: Some("image/jpeg".to_owned()),
            // ASCII body so the multipart payload stays valid UTF-8 for body matchers
            bytes: b"JFIF-fixture".to_vec(),
        }
    }

    fn client_for(server: &MockServer) -> PredictClient {
        PredictClient::new(format!("{}/predict", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_prediction_passes_body_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .and(body_string_contains("name=\"image\""))
            .and(body_string_contains("filename=\"daun.jpg\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "dataset_id": 17,
                "nama_tumbuhan": "Ficus elastica",
                "image_url": "http://classifier/static/uploads/x.jpg"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).predict(jpeg_upload()).await.unwrap();
        assert_eq!(result.dataset_id, Some(serde_json::json!(17)));
        assert_eq!(result.prediction["nama_tumbuhan"], "Ficus elastica");
    }

    #[tokio::test]
    async fn test_missing_dataset_id_is_omitted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"nama_tumbuhan": "Tidak ditemukan"})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).predict(jpeg_upload()).await.unwrap();
        assert_eq!(result.dataset_id, None);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("dataset_id").is_none());
    }

    #[tokio::test]
    async fn test_upstream_json_error_is_relayed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "No image provided"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).predict(jpeg_upload()).await.unwrap_err();
        match &err {
            PredictError::Upstream { code, payload } => {
                assert_eq!(*code, 400);
                assert_eq!(payload["error"], "No image provided");
            },
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upstream_text_error_becomes_string_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server).predict(jpeg_upload()).await.unwrap_err();
        match err {
            PredictError::Upstream { code, payload } => {
                assert_eq!(code, 502);
                assert_eq!(payload, serde_json::json!("Bad Gateway"));
            },
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).predict(jpeg_upload()).await.unwrap_err();
        assert!(matches!(err, PredictError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_classifier_is_transport_error() {
        let client = PredictClient::new("http://127.0.0.1:9/predict".to_owned()).unwrap();
        let err = client.predict(jpeg_upload()).await.unwrap_err();
        assert!(matches!(err, PredictError::HttpRequest(_)));
    }

    #[tokio::test]
    async fn test_invalid_content_type_is_rejected() {
        let client = PredictClient::new("http://127.0.0.1:9/predict".to_owned()).unwrap();
        let upload = ImageUpload { content_type: Some("not a mime".to_owned()), ..jpeg_upload() };
        let err = client.predict(upload).await.unwrap_err();
        assert!(matches!(err, PredictError::InvalidUpload(_)));
    }
}
