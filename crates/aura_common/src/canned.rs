//! Canned keyword responses.
//!
//! First stage of the answer pipeline: fixed, keyword-triggered replies for
//! small talk, identity questions, time and date, and the weather. Checks
//! are substring matches on the lowercased question, in a fixed order, so
//! the first matching keyword wins.

use chrono::{DateTime, Datelike, Local, Timelike};

/// A canned-stage reply. Most are ready-made text; the weather needs a live
/// lookup the caller performs (the canned tables stay pure and synchronous).
#[derive(Debug, Clone, PartialEq)]
pub enum CannedReply {
    Text(String),
    Weather,
}

/// Try to answer from the canned tables. `None` means no keyword matched
/// and the router should fall through to the expression evaluator.
pub fn respond(question: &str, now: DateTime<Local>, username: Option<&str>) -> Option<CannedReply> {
    let q = question.to_lowercase();

    // Small talk and identity, first match wins
    if q.contains("hello") || q.contains("hi") || q.contains("hey") {
        return text("👋 Hello! I am Aura — your programming chatbot AI!");
    }
    if q.contains("how are you") {
        return text("🤖 I'm functioning perfectly! Thanks for asking 😄");
    }
    if q.contains("what are you doing") {
        return text("🤖 I'm chatting with you and learning new things! 💬");
    }
    if q.contains("who made you") {
        return text("🤖 You made me, of course! 💡");
    }
    if q.contains("your name") {
        return text("🤖 My name is Aura — your friendly assistant! ✨");
    }
    if q.contains("help me") {
        return text("🤖 I can help you with programming concepts, logic, and more!");
    }
    if q.contains("thank") {
        return text("🤖 You're welcome! 😊");
    }
    if q.contains("my name") {
        return match username {
            Some(name) => Some(CannedReply::Text(format!("🤖 Yes! Your name is {} 😄", name))),
            None => text("🤖 You haven't told me your name yet!"),
        };
    }

    // Date & time
    if q.contains("time") {
        return Some(CannedReply::Text(format!(
            "⏰ Current Time: {}",
            now.format("%I:%M %p")
        )));
    }
    if q.contains("date") {
        return Some(CannedReply::Text(format!(
            "📅 Today's Date: {}",
            now.format("%B %d, %Y")
        )));
    }
    if q.contains("day") {
        return Some(CannedReply::Text(format!("🗓 Today is {}", now.format("%A"))));
    }
    if q.contains("month") {
        return Some(CannedReply::Text(format!(
            "📅 Current Month: {}",
            now.format("%B")
        )));
    }
    // "leap year" before the plain year check since it is more specific
    if q.contains("leap year") {
        let year = now.year();
        return if is_leap_year(year) {
            Some(CannedReply::Text(format!("✅ Yes, {} is a leap year.", year)))
        } else {
            Some(CannedReply::Text(format!("❌ No, {} is not a leap year.", year)))
        };
    }
    if q.contains("year") {
        return Some(CannedReply::Text(format!("📅 Current Year: {}", now.year())));
    }

    // Part of the day
    if q.contains("morning")
        || q.contains("afternoon")
        || q.contains("evening")
        || q.contains("night")
        || q.contains("part of day")
    {
        return text(part_of_day(now.hour()));
    }

    if q.contains("weather") {
        return Some(CannedReply::Weather);
    }

    None
}

fn text(reply: &str) -> Option<CannedReply> {
    Some(CannedReply::Text(reply.to_string()))
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Bucket an hour (0-23) into a part-of-day reply.
pub fn part_of_day(hour: u32) -> &'static str {
    match hour {
        5..=11 => "🌄 It's Morning.",
        12..=15 => "☀️ It's Afternoon.",
        16..=19 => "🌆 It's Evening.",
        _ => "🌙 It's Night.",
    }
}
