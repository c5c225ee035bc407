use memograph_llm::openai::{ChatCompletionResponse, EmbeddingResponse};
use memograph_llm::TranscriptTurn;

#[test]
fn test_embedding_response_deserialization() {
    let json = r#"{
        "data": [
            {"embedding": [0.1, -0.2, 0.3], "index": 0}
        ],
        "model": "text-embedding-ada-002"
    }"#;

    let response: EmbeddingResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].embedding, vec![0.1, -0.2, 0.3]);
    assert_eq!(response.model, "text-embedding-ada-002");
}

#[test]
fn test_chat_completion_response_deserialization() {
    let json = r#"{
        "choices": [
            {
                "message": {"role": "assistant", "content": "rust, tokio"},
                "finish_reason": "stop"
            }
        ]
    }"#;

    let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.choices.len(), 1);
    assert_eq!(
        response.choices[0].message.content.as_deref(),
        Some("rust, tokio")
    );
}

#[test]
fn test_chat_completion_response_allows_null_content() {
    let json = r#"{
        "choices": [
            {
                "message": {"role": "assistant", "content": null},
                "finish_reason": "stop"
            }
        ]
    }"#;

    let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
    assert!(response.choices[0].message.content.is_none());
}

#[test]
fn test_transcript_turn_creation() {
    let turn = TranscriptTurn::new("user", "Hello");
    assert_eq!(turn.role, "user");
    assert_eq!(turn.content, "Hello");
}
