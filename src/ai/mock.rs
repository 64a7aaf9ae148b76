use super::StoryModelService;
use crate::models::RequestPart;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted stand-in for the remote model. Records every request so tests
/// can assert what the orchestrator actually dispatched.
pub struct MockStoryClient {
    story_responses: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<(RequestPart, String)>>>,
}

impl MockStoryClient {
    pub fn new() -> Self {
        Self {
            story_responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_story_response(self, response: String) -> Self {
        self.story_responses.lock().unwrap().push(response);
        self
    }

    /// Make every call fail with an AI-provider error carrying `message`.
    pub fn with_failure(self, message: String) -> Self {
        *self.failure.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Requests received so far, in dispatch order.
    pub fn get_requests(&self) -> Vec<(RequestPart, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockStoryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoryModelService for MockStoryClient {
    async fn generate_story(&self, image_part: RequestPart, instruction: String) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        self.requests
            .lock()
            .unwrap()
            .push((image_part, instruction));

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::AiProvider(message));
        }

        let responses = self.story_responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok("Once upon a time, a mock story unfolded.".to_string())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_part() -> RequestPart {
        RequestPart::Text {
            text: "a described sample".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_default_response() {
        let client = MockStoryClient::new();
        let story = client
            .generate_story(text_part(), "instruction".to_string())
            .await
            .unwrap();
        assert!(story.contains("mock story"));
    }

    #[tokio::test]
    async fn test_mock_custom_responses_cycle() {
        let client = MockStoryClient::new()
            .with_story_response("First tale".to_string())
            .with_story_response("Second tale".to_string());

        assert_eq!(
            client
                .generate_story(text_part(), "i".to_string())
                .await
                .unwrap(),
            "First tale"
        );
        assert_eq!(
            client
                .generate_story(text_part(), "i".to_string())
                .await
                .unwrap(),
            "Second tale"
        );
        // Should cycle back
        assert_eq!(
            client
                .generate_story(text_part(), "i".to_string())
                .await
                .unwrap(),
            "First tale"
        );
    }

    #[tokio::test]
    async fn test_mock_failure_and_call_count() {
        let client = MockStoryClient::new().with_failure("simulated outage".to_string());

        assert_eq!(client.get_call_count(), 0);
        let err = client
            .generate_story(text_part(), "i".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
        assert_eq!(client.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let client = MockStoryClient::new();
        client
            .generate_story(text_part(), "the instruction".to_string())
            .await
            .unwrap();

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1, "the instruction");
    }
}
