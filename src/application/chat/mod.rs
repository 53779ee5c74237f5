//! Keyword-matching marketplace assistant.
//!
//! Replies come from a fixed knowledge base scanned in order; the first entry
//! with a keyword appearing anywhere in the lower-cased message wins. Matching
//! is by substring, so "this" still reaches the greeting entry.

use serde::Serialize;

struct Entry {
    topic: Topic,
    keywords: &'static [&'static str],
    response: &'static str,
}

/// What a reply was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Recommendation,
    Pricing,
    Selling,
    Buying,
    Condition,
    Account,
    Messaging,
    Safety,
    Shipping,
    Greeting,
    BookHelp,
    Question,
    ActiveSeller,
    RecentViewer,
    Fallback,
}

const KNOWLEDGE_BASE: &[Entry] = &[
    Entry {
        topic: Topic::Recommendation,
        keywords: &["recommendation", "suggest", "recommendations", "recommend"],
        response: "I can recommend books based on your interests. Tell me what genres you enjoy or books you've liked in the past!",
    },
    Entry {
        topic: Topic::Pricing,
        keywords: &["price", "pricing", "cost", "worth", "value"],
        response: "Our dynamic pricing system uses AI to suggest fair prices based on condition, demand, and scarcity. If you'd like a price estimate for a specific book, please provide details about its condition and genre.",
    },
    Entry {
        topic: Topic::Selling,
        keywords: &["sell", "selling", "upload", "list"],
        response: "To sell a book, click on the 'Upload' button in the navigation menu. You'll need to provide details like title, author, condition, and photos. Our AI will suggest a fair price!",
    },
    Entry {
        topic: Topic::Buying,
        keywords: &["buy", "purchase", "order"],
        response: "You can browse books by clicking on 'Browse' in the navigation menu. Use filters to narrow down your search, and when you find a book you like, you can view details and contact the seller.",
    },
    Entry {
        topic: Topic::Condition,
        keywords: &["condition", "grading", "grade"],
        response: "We use standard book conditions: 'Like New', 'Very Good', 'Good', 'Fair', and 'Acceptable'. Each affects the book's price differently. For detailed descriptions of each condition, visit our Help section.",
    },
    Entry {
        topic: Topic::Account,
        keywords: &["account", "profile", "sign up", "register", "login"],
        response: "You can create an account or log in by clicking the user icon in the top right corner. Your profile stores your preferences, purchase history, and listed books.",
    },
    Entry {
        topic: Topic::Messaging,
        keywords: &["message", "contact", "chat", "communicate"],
        response: "You can message sellers directly from the book details page. Click on the book you're interested in, then use the 'Message Seller' button to start a conversation!",
    },
    Entry {
        topic: Topic::Safety,
        keywords: &["fraud", "scam", "safe", "security", "secure"],
        response: "BookXchange uses advanced fraud detection to keep transactions secure. We monitor for suspicious patterns and verify users. Always stay on our platform for all communications and transactions for maximum safety.",
    },
    Entry {
        topic: Topic::Shipping,
        keywords: &["shipping", "delivery", "send", "receive"],
        response: "Shipping details are arranged between buyers and sellers. We recommend discussing shipping methods and costs in the messaging system before finalizing a transaction.",
    },
    Entry {
        topic: Topic::Greeting,
        keywords: &["hello", "hi", "hey", "greetings"],
        response: "Hello! I'm BookWorm, your AI assistant. How can I help you with BookXchange today?",
    },
];

const BOOK_HELP: &str = "I'd be happy to help you with book-related questions! You can ask about recommendations, pricing, selling, or anything else related to BookXchange.";
const QUESTION: &str = "That's a great question! You can find detailed information in our Help section, or I can try to assist if you ask more specifically about books, selling, buying, or account features.";
const ACTIVE_SELLER: &str = "I notice you've been active on BookXchange! Is there something specific you'd like to know about buying or selling books?";
const RECENT_VIEWER: &str = "Based on books you've viewed recently, you might be interested in our recommendations page. Would you like to check it out?";
const FALLBACK: &str = "I'm here to help with anything related to BookXchange! You can ask about finding books, selling your books, pricing, or how to use any feature of our platform.";

const QUESTION_MARKERS: [&str; 6] = ["how", "what", "where", "when", "why", "?"];

/// What the marketplace knows about the person chatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Activity {
    /// The user has at least one listing of their own.
    pub has_listings: bool,
    /// The user viewed listings recently.
    pub has_recent_views: bool,
}

/// An assistant reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub topic: Topic,
    pub text: &'static str,
}

impl Reply {
    const fn new(topic: Topic, text: &'static str) -> Self {
        Self { topic, text }
    }
}

/// Reply that depends only on the message text, if any applies.
///
/// Covers the knowledge base, the book-help reply, and the question reply.
#[must_use]
pub fn scripted_reply(message: &str) -> Option<Reply> {
    let lowered = message.to_lowercase();

    if let Some(entry) = KNOWLEDGE_BASE
        .iter()
        .find(|e| e.keywords.iter().any(|k| lowered.contains(k)))
    {
        return Some(Reply::new(entry.topic, entry.response));
    }

    if lowered.contains("book") || lowered.contains("read") {
        return Some(Reply::new(Topic::BookHelp, BOOK_HELP));
    }

    if QUESTION_MARKERS.iter().any(|m| lowered.contains(m)) {
        return Some(Reply::new(Topic::Question, QUESTION));
    }

    None
}

/// Full reply for `message`, falling back to what we know about the user.
///
/// `activity` is `None` for signed-out visitors.
#[must_use]
pub fn respond(message: &str, activity: Option<Activity>) -> Reply {
    if let Some(reply) = scripted_reply(message) {
        return reply;
    }
    match activity {
        Some(a) if a.has_listings => Reply::new(Topic::ActiveSeller, ACTIVE_SELLER),
        Some(a) if a.has_recent_views => Reply::new(Topic::RecentViewer, RECENT_VIEWER),
        _ => Reply::new(Topic::Fallback, FALLBACK),
    }
}
