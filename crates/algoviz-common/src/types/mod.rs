//! Core type definitions for Algoviz.
//!
//! This module contains the fundamental types shared by every container and
//! algorithm:
//! - Value kinds ([`ValueType`], [`Value`])
//! - Identifier types ([`NodeId`], [`TreeNodeId`], [`ListNodeId`])

mod id;
mod value;

pub use id::{ListNodeId, NodeId, TreeNodeId};
pub use value::{Value, ValueType};
