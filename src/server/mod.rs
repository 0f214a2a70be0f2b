//! gRPC surface over the content services.

mod error_mapping;
mod handlers;
mod helpers;
mod structured_error;
mod trait_impl;

pub use error_mapping::ToStructuredError;
pub use structured_error::{to_error_json, ErrorMessage, StructuredError};

use crate::assist::ContentAssistant;
use crate::services::ContentServices;

// Import generated protobuf types
pub mod proto {
    #![allow(clippy::pedantic)]
    #![allow(clippy::all)]
    tonic::include_proto!("nodenest");
}

/// Implements `nodenest.ContentService`.
pub struct ContentDaemonService {
    services: ContentServices,
    assistant: Option<ContentAssistant>,
}

impl ContentDaemonService {
    #[must_use]
    pub fn new(services: ContentServices, assistant: Option<ContentAssistant>) -> Self {
        Self {
            services,
            assistant,
        }
    }

    #[must_use]
    pub fn services(&self) -> &ContentServices {
        &self.services
    }
}
