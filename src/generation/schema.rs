//! Wire types for the Gemini `generateContent` endpoint and the deck payload.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::deck::{build_deck, Card};

use super::error::GenerationError;

/// Build the natural-language instruction for `topic`.
pub fn build_prompt(topic: &str, fact_count: u32) -> String {
    format!(
        "Generate {fact_count} fun, surprising, and engaging trivia facts about \"{topic}\".\n\
         For each fact, provide a short \"hook\" or question for the front of the card, \
         and the full \"fun fact\" for the back.\n\
         Ensure the facts are accurate and suitable for a general audience."
    )
}

/// JSON schema the model must follow: `{topic, facts: [{question, fact}]}`.
pub fn deck_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "topic": { "type": "STRING" },
            "facts": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": {
                            "type": "STRING",
                            "description": "A short question or hook for the front of the card"
                        },
                        "fact": {
                            "type": "STRING",
                            "description": "The detailed fun fact"
                        }
                    },
                    "required": ["question", "fact"]
                }
            }
        },
        "required": ["topic", "facts"]
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationSettings,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    pub response_mime_type: String,
    pub response_schema: Value,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl GenerateContentRequest {
    pub fn for_topic(topic: &str, fact_count: u32) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(topic, fact_count)),
                }],
            }],
            generation_config: GenerationSettings {
                response_mime_type: "application/json".to_string(),
                response_schema: deck_response_schema(),
            },
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Structured payload produced by the model.
#[derive(Debug, Deserialize)]
pub struct DeckPayload {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub facts: Option<Vec<FactItem>>,
}

#[derive(Debug, Deserialize)]
pub struct FactItem {
    pub question: String,
    pub fact: String,
}

/// Turn model output into cards.
///
/// Blank text is read as `{}`. A payload without `facts` yields no cards unless
/// `strict` is set, in which case it is [`GenerationError::EmptyDeck`]. The
/// payload topic falls back to `requested_topic` when absent.
pub fn parse_deck(
    text: Option<&str>,
    requested_topic: &str,
    strict: bool,
) -> Result<Vec<Card>, GenerationError> {
    let raw = text.map(str::trim).filter(|t| !t.is_empty()).unwrap_or("{}");

    let payload: DeckPayload =
        serde_json::from_str(raw).map_err(|e| GenerationError::Parse(e.to_string()))?;

    let facts = payload.facts.unwrap_or_default();
    if strict && facts.is_empty() {
        return Err(GenerationError::EmptyDeck);
    }

    let topic = payload
        .topic
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| requested_topic.to_string());

    Ok(build_deck(
        &topic,
        facts.into_iter().map(|item| (item.question, item.fact)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::PALETTE;

    #[test]
    fn prompt_embeds_topic_and_count() {
        let prompt = build_prompt("90s Music", 10);
        assert!(prompt.starts_with("Generate 10 fun"));
        assert!(prompt.contains("\"90s Music\""));
    }

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateContentRequest::for_topic("Space", 10);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            value["generationConfig"]["responseSchema"]["required"],
            json!(["topic", "facts"])
        );
        assert_eq!(
            value["generationConfig"]["responseSchema"]["properties"]["facts"]["items"]
                ["required"],
            json!(["question", "fact"])
        );
        let text = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("\"Space\""));
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "{\"topic\":"}, {"text": "\"X\"}"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"topic\":\"X\"}"));
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn parse_maps_facts_in_order() {
        let text = r#"{"topic":"Space","facts":[
            {"question":"q0","fact":"f0"},
            {"question":"q1","fact":"f1"},
            {"question":"q2","fact":"f2"},
            {"question":"q3","fact":"f3"},
            {"question":"q4","fact":"f4"},
            {"question":"q5","fact":"f5"},
            {"question":"q6","fact":"f6"}
        ]}"#;
        let cards = parse_deck(Some(text), "space", false).unwrap();

        assert_eq!(cards.len(), 7);
        assert_eq!(cards[6].question(), "q6");
        assert_eq!(cards[6].answer(), "f6");
        assert_eq!(cards[6].style(), PALETTE[0]);
        assert!(cards.iter().all(|c| c.topic() == "Space"));
    }

    #[test]
    fn blank_text_is_an_empty_deck() {
        assert!(parse_deck(None, "Space", false).unwrap().is_empty());
        assert!(parse_deck(Some("   "), "Space", false).unwrap().is_empty());
    }

    #[test]
    fn missing_facts_is_empty_when_lenient() {
        let cards = parse_deck(Some(r#"{"topic":"Space"}"#), "Space", false).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn missing_facts_is_error_when_strict() {
        let err = parse_deck(Some(r#"{"topic":"Space"}"#), "Space", true).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyDeck));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = parse_deck(Some("not json"), "Space", false).unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[test]
    fn item_missing_required_field_is_parse_error() {
        let text = r#"{"topic":"Space","facts":[{"question":"only"}]}"#;
        let err = parse_deck(Some(text), "Space", false).unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[test]
    fn missing_topic_falls_back_to_requested() {
        let text = r#"{"facts":[{"question":"q","fact":"f"}]}"#;
        let cards = parse_deck(Some(text), "Cats", false).unwrap();
        assert_eq!(cards[0].topic(), "Cats");
    }
}
