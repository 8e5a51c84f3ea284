//! Resume model, text processing and keyword matching

pub mod dates;
pub mod keyword_matcher;
pub mod resume;
pub mod text_processor;
