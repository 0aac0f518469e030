//! Content classification: media placeholders and system notices.
//!
//! Both tests are plain case-insensitive substring patterns and are
//! independent of each other. A line can match neither, either, or both.

use std::sync::LazyLock;

use regex::{RegexSet, RegexSetBuilder};

use crate::message::MessageType;

const MEDIA_PATTERNS: &[&str] = &[
    r"<Media omitted>",
    r"<Image omitted>",
    r"<Video omitted>",
    r"<Audio omitted>",
    r"<Document omitted>",
    r"<GIF omitted>",
    r"<Sticker omitted>",
    r"<Contact card omitted>",
    r"<Location omitted>",
    r"image/video/audio/document\s+omitted",
    r"file attached",
    r"photo",
    r"video",
    r"audio",
];

const SYSTEM_PATTERNS: &[&str] = &[
    r"joined using this group's invite link",
    r"left",
    r"was removed",
    r"added",
    r"changed the group description",
    r"changed this group's icon",
    r"created group",
    r"Messages and calls are end-to-end encrypted",
    r"changed the group name",
    r"You're now an admin",
    r"security code changed",
    r"missed voice call",
    r"missed video call",
    r"call ended",
    r"calling\.\.\.",
];

fn build_set(patterns: &[&str]) -> RegexSet {
    RegexSetBuilder::new(patterns)
        .case_insensitive(true)
        .build()
        .expect("valid classifier patterns")
}

static MEDIA: LazyLock<RegexSet> = LazyLock::new(|| build_set(MEDIA_PATTERNS));
static SYSTEM: LazyLock<RegexSet> = LazyLock::new(|| build_set(SYSTEM_PATTERNS));

/// Returns `true` if the content is a media placeholder.
pub fn is_media(content: &str) -> bool {
    MEDIA.is_match(content)
}

/// Returns `true` if the content reads like an administrative notice
/// (membership, group metadata, calls, encryption, security code).
pub fn is_system_notice(content: &str) -> bool {
    SYSTEM.is_match(content)
}

/// Message type for content, media test first.
pub fn classify(content: &str) -> MessageType {
    if is_media(content) {
        MessageType::Media
    } else {
        MessageType::Text
    }
}
