//! CheckMate Domain Layer
//!
//! This crate contains the data model shared by every stage of the grading
//! pipeline, the per-user session context, and the trait interfaces for the
//! three external collaborators (language model, OCR engine, mail relay).
//!
//! ## Key Concepts
//!
//! - **Requirement**: one discrete condition a submission must satisfy
//! - **Submission**: the work product being graded
//! - **Analysis result**: per-requirement and aggregate judgments returned by the grader
//! - **Session**: everything one user has produced so far; never persisted
//!
//! ## Architecture
//!
//! - Plain data types with serde derives, no I/O
//! - Trait definitions for all external interactions
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod requirement;
pub mod session;
pub mod traits;

// Re-exports for convenience
pub use analysis::{AnalysisResult, RequirementAnalysis};
pub use requirement::RequirementList;
pub use session::{Session, SessionId};
pub use traits::{LlmProvider, MailTransport, OutgoingMail, TextRecognizer};
