// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Why a drag event was ignored.
///
/// Handlers that return one of these leave the session exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// The element was registered without drag metadata.
    #[error("element {id} carries no drag metadata")]
    MissingMetadata {
        /// Element id.
        id: String,
    },

    /// The element's metadata is present but unusable.
    #[error("element {id} has malformed drag metadata: {reason}")]
    MalformedMetadata {
        /// Element id.
        id: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// An over or end event arrived while nothing was being dragged.
    #[error("no drag in progress")]
    NoActiveDrag,
}
