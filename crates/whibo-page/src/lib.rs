//! Retained element tree standing in for the page the client helper works on.
//!
//! The helper never talks to a renderer directly. It mutates a [`Document`]
//! and hands [`DocumentSnapshot`]s to whatever draws them.

pub mod document;
pub mod element;

pub use document::{Document, DocumentSnapshot, PageError, SnapshotNode};
pub use element::{Element, ElementId, Style};
