//! Report rendering for `verdict`.
//!
//! Formatting is pure: identical inputs always produce an identical
//! string. All file-system concerns live in [`crate::writer`].

pub mod text;

pub use text::{LINE_SEP, assertion_section, file_suffix, render_report, status_label};
