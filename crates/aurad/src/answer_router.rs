//! Answer router: tries each strategy in strict order.
//!
//! 1. canned keyword responses (including the live weather lookup)
//! 2. the expression normalizer/evaluator
//! 3. substring lookup in the QA bank
//! 4. the default "unknown" reply
//!
//! The first stage to produce an answer wins; every stage signals
//! fallthrough by yielding nothing.

use crate::store::AuraStore;
use crate::weather::WeatherClient;
use aura_common::canned::{self, CannedReply};
use aura_common::eval::calculate_expression;
use chrono::Local;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reply when every strategy fell through.
pub const UNKNOWN_REPLY: &str = "🤖 Sorry, I don't know that yet.";

pub struct AnswerRouter {
    store: Arc<AuraStore>,
    weather: WeatherClient,
}

impl AnswerRouter {
    pub fn new(store: Arc<AuraStore>, weather: WeatherClient) -> Self {
        Self { store, weather }
    }

    /// Produce an answer for a question. Never fails; the worst case is the
    /// default unknown reply.
    pub async fn route(&self, question: &str, username: Option<&str>) -> String {
        match canned::respond(question, Local::now(), username) {
            Some(CannedReply::Text(reply)) => {
                debug!(question, "answered by canned table");
                return reply;
            }
            Some(CannedReply::Weather) => {
                debug!(question, "answered by weather lookup");
                return self.weather.reply().await;
            }
            None => {}
        }

        if let Some(answer) = calculate_expression(question) {
            debug!(question, "answered by expression evaluator");
            return answer;
        }

        match self.store.lookup_answer(question) {
            Ok(Some(answer)) => {
                debug!(question, "answered by QA bank");
                return format!("🤖 {}", answer);
            }
            Ok(None) => {}
            Err(err) => warn!(%err, "QA bank lookup failed"),
        }

        UNKNOWN_REPLY.to_string()
    }
}
