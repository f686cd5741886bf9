//! Tracelane Core Types and Definitions
//!
//! This crate provides the foundational types shared by every Tracelane
//! crate. It includes:
//!
//! - **Trace model**: Raw and normalized message hops ([`trace`] module)
//! - **Components**: Component kinds and their column rank ([`component`] module)
//! - **Status**: Canonical hop status and the token vocabulary that produces it ([`status`] module)
//! - **Identifiers**: Component identifiers ([`identifier::ComponentId`])
//! - **Geometry**: Points and sizes in diagram space ([`geometry`] module)
//! - **Colors**: CSS color handling and status palettes ([`color`] module)

pub mod color;
pub mod component;
pub mod geometry;
pub mod identifier;
pub mod status;
pub mod trace;
