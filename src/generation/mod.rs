//! Deck generation via the Gemini API.
//!
//! - `schema.rs` - Request/response wire types, prompt and payload parsing
//! - `client.rs` - `DeckGenerator` trait and the HTTP client
//! - `error.rs` - `GenerationError`

mod client;
mod error;
mod schema;

pub use client::{DeckGenerator, GeminiClient};
pub use error::{GenerationError, USER_FACING_MESSAGE};
pub use schema::{build_prompt, deck_response_schema, parse_deck};
