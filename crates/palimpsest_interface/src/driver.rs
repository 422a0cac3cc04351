//! Text generation driver trait.

use async_trait::async_trait;
use palimpsest_core::GenerateRequest;
use palimpsest_error::PalimpsestResult;

/// A backend capable of turning a generation request into text.
///
/// Implementations own their transport and retry behavior; callers see a
/// single resolved outcome per request.
#[async_trait]
pub trait TextDriver: Send + Sync {
    /// Generate text for the given request.
    async fn generate(&self, request: &GenerateRequest) -> PalimpsestResult<String>;
}
