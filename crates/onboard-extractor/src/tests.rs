//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{
        ExtractorConfig, ExtractorError, IdentityExtractor, MockRecognizer, RecognizerError,
        SourceFormat, TextRecognizer,
    };
    use async_trait::async_trait;
    use onboard_domain::{DocumentKind, UploadedDocument};
    use std::time::Duration;

    const NATIONAL_ID_TEXT: &str = "REPUBLIC OF EXAMPLE\nNATIONAL IDENTITY CARD\n\
        ID No: 4455667788\nName: Maria Lopez\nSex: F\nDOB: 03-11-1992\n\
        Address: 7 Harbour Road, Springfield\n";

    #[tokio::test]
    async fn test_full_extraction_flow() {
        let recognizer = MockRecognizer::new(NATIONAL_ID_TEXT);
        let extractor = IdentityExtractor::new(recognizer, ExtractorConfig::default());

        let document = UploadedDocument::new("front.jpg", vec![0xFF, 0xD8, 0xFF]);
        let record = extractor.extract(&document).await.unwrap();

        assert_eq!(record.document_kind(), Some(DocumentKind::NationalId));
        assert_eq!(record.id_number.as_deref(), Some("4455667788"));
        assert_eq!(record.full_name(), "Maria Lopez");
        assert_eq!(record.sex.as_deref(), Some("Female"));
        assert_eq!(record.date_of_birth.as_deref(), Some("03-11-1992"));
        assert_eq!(record.address.as_deref(), Some("7 Harbour Road, Springfield"));
        assert_eq!(record.confidence, Some(0.85));
    }

    #[tokio::test]
    async fn test_passport_detected_from_file_name() {
        let recognizer = MockRecognizer::new("Name: John Smith");
        let extractor = IdentityExtractor::new(recognizer, ExtractorConfig::default());

        let document = UploadedDocument::new("John_PASSPORT.pdf", vec![b'%', b'P', b'D', b'F']);
        let record = extractor.extract(&document).await.unwrap();
        assert_eq!(record.document_type.as_deref(), Some("Passport"));
    }

    #[tokio::test]
    async fn test_unsupported_format_skips_recognizer() {
        let recognizer = MockRecognizer::new("ignored");
        let extractor = IdentityExtractor::new(recognizer.clone(), ExtractorConfig::default());

        let document = UploadedDocument::new("notes.docx", vec![1, 2, 3]);
        let result = extractor.extract(&document).await;

        assert!(matches!(result, Err(ExtractorError::UnsupportedFormat)));
        assert_eq!(recognizer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_file_name() {
        let extractor = IdentityExtractor::new(MockRecognizer::default(), ExtractorConfig::default());
        let document = UploadedDocument::new("", vec![1]);
        assert!(matches!(
            extractor.extract(&document).await,
            Err(ExtractorError::MissingFileName)
        ));
    }

    #[tokio::test]
    async fn test_recognizer_error_propagates() {
        let mut recognizer = MockRecognizer::default();
        recognizer.add_error("blurry.png");
        let extractor = IdentityExtractor::new(recognizer, ExtractorConfig::default());

        let document = UploadedDocument::new("blurry.png", vec![1]);
        let result = extractor.extract(&document).await;
        assert!(matches!(result, Err(ExtractorError::Recognition(_))));
    }

    struct SlowRecognizer;

    #[async_trait]
    impl TextRecognizer for SlowRecognizer {
        fn name(&self) -> &str {
            "slow"
        }

        async fn recognize(
            &self,
            _document: &UploadedDocument,
            _format: SourceFormat,
        ) -> Result<String, RecognizerError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(String::new())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_recognition_timeout() {
        let config = ExtractorConfig {
            recognition_timeout_secs: 1,
            ..Default::default()
        };
        let extractor = IdentityExtractor::new(SlowRecognizer, config);

        let document = UploadedDocument::new("scan.png", vec![1]);
        let result = extractor.extract(&document).await;
        assert!(matches!(result, Err(ExtractorError::Timeout)));
    }
}
