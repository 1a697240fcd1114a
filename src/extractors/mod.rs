//! Heuristic extractors over plain article text.
//!
//! Every extractor is total: when nothing recognizable is found it returns
//! an empty or absent value, never an error.
//!
//! - [`publication`]: Date, update, author and summary
//! - [`urls`]: Base URLs of linked sites
//! - [`key_points`]: The most informative sentences
//! - [`sentiment`]: Term-frequency tone labels

pub mod key_points;
pub mod publication;
pub mod sentiment;
pub mod urls;
