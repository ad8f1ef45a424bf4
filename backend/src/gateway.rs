//! OpenAI-compatible chat-completion client for the reformulation gateway.

use log::error;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::ReformulateError;

pub const MAX_REFORMULATIONS: usize = 3;

const SYSTEM_PROMPT: &str = "You are a text reformulation assistant. Generate exactly 3 \
different reformulations of the given sentence that preserve the original meaning but use \
different words and sentence structures. Return only the 3 reformulations, separated by \
newlines, without any numbering or additional text.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageBody,
}

#[derive(Deserialize)]
struct ChatMessageBody {
    content: String,
}

/// Asks the gateway for paraphrases of `sentence` and returns at most
/// [`MAX_REFORMULATIONS`] cleaned-up lines.
pub async fn reformulate(
    client: &Client,
    config: &AppConfig,
    sentence: &str,
) -> Result<Vec<String>, ReformulateError> {
    let request = ChatRequest {
        model: &config.gateway_model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: sentence,
            },
        ],
    };

    let response = client
        .post(&config.gateway_url)
        .bearer_auth(&config.gateway_api_key)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ReformulateError::RateLimited);
    }
    if status == StatusCode::PAYMENT_REQUIRED {
        return Err(ReformulateError::PaymentRequired);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("AI gateway error: {} - {}", status, body);
        return Err(ReformulateError::Upstream(status.as_u16()));
    }

    let completion: ChatResponse = response.json().await?;
    let content = completion
        .choices
        .first()
        .map(|choice| choice.message.content.as_str())
        .ok_or(ReformulateError::EmptyCompletion)?;

    Ok(split_reformulations(content))
}

/// Post-processes the raw completion text: one reformulation per line,
/// trimmed, blanks dropped, truncated to [`MAX_REFORMULATIONS`].
pub fn split_reformulations(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_REFORMULATIONS)
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped_and_extras_truncated() {
        assert_eq!(
            split_reformulations("Foo\n\nBar\nBaz\nQux"),
            vec!["Foo", "Bar", "Baz"]
        );
    }

    #[test]
    fn lines_are_trimmed() {
        assert_eq!(
            split_reformulations("  First one.  \n\tSecond one.\n"),
            vec!["First one.", "Second one."]
        );
    }

    #[test]
    fn fewer_than_three_lines_pass_through() {
        assert_eq!(split_reformulations("Only one."), vec!["Only one."]);
    }

    #[test]
    fn whitespace_only_completion_yields_nothing() {
        assert!(split_reformulations(" \n \t \n").is_empty());
    }

    #[test]
    fn completion_shape_deserializes() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"A\nB\nC"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "A\nB\nC");
    }
}
