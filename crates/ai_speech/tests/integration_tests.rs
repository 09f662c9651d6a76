//! Integration tests for the Google speech provider using WireMock

use ai_speech::{
    AudioData, AudioFormat, GoogleSpeechProvider, SpeechConfig, SpeechError, SpeechToText,
    TextToSpeech,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn config_for_mock(base_url: &str) -> SpeechConfig {
    SpeechConfig {
        api_key: "test-key".to_string(),
        stt_base_url: base_url.to_string(),
        tts_base_url: base_url.to_string(),
        language: "en-US".to_string(),
        voice: "en-US-Standard-C".to_string(),
        timeout_ms: 5000,
    }
}

fn wav_fixture() -> AudioData {
    // Minimal WAV header plus a little sample data
    let mut data = vec![0u8; 44];
    data.extend_from_slice(&[1, 2, 3, 4]);
    AudioData::new(data, AudioFormat::Wav).with_sample_rate(44100)
}

#[tokio::test]
async fn transcribe_returns_first_alternative() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/speech:recognize"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"alternatives": [
                    {"transcript": "I have a headache", "confidence": 0.92},
                    {"transcript": "I have a head ache"}
                ]}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = GoogleSpeechProvider::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create provider");

    let transcription = provider
        .transcribe(wav_fixture())
        .await
        .expect("transcribe failed");

    assert_eq!(transcription.text, "I have a headache");
    assert_eq!(transcription.confidence, Some(0.92));
}

#[tokio::test]
async fn empty_results_mean_no_speech_detected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/speech:recognize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let provider = GoogleSpeechProvider::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create provider");

    let result = provider.transcribe(wav_fixture()).await;
    assert!(matches!(result, Err(SpeechError::NoSpeechDetected)));
}

#[tokio::test]
async fn stt_server_error_is_transcription_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/speech:recognize"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let provider = GoogleSpeechProvider::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create provider");

    let result = provider.transcribe(wav_fixture()).await;
    assert!(matches!(result, Err(SpeechError::TranscriptionFailed(_))));
}

#[tokio::test]
async fn synthesize_decodes_base64_audio() {
    let mock_server = MockServer::start().await;

    let audio_bytes = b"mp3-bytes".to_vec();
    Mock::given(method("POST"))
        .and(path("/v1/text:synthesize"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "audioContent": BASE64.encode(&audio_bytes)
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = GoogleSpeechProvider::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create provider");

    let audio = provider
        .synthesize("Your appointment is confirmed")
        .await
        .expect("synthesize failed");

    assert_eq!(audio.format(), AudioFormat::Mp3);
    assert_eq!(audio.data(), audio_bytes.as_slice());
}

#[tokio::test]
async fn tts_server_error_is_synthesis_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text:synthesize"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let provider = GoogleSpeechProvider::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create provider");

    let result = provider.synthesize("Hello").await;
    assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
}

#[tokio::test]
async fn garbled_synthesis_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text:synthesize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "audioContent": "not base64 !!!"
        })))
        .mount(&mock_server)
        .await;

    let provider = GoogleSpeechProvider::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create provider");

    let result = provider.synthesize("Hello").await;
    assert!(matches!(result, Err(SpeechError::InvalidResponse(_))));
}
