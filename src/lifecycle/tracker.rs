//! Aggregation of sub-request confirmations.

use super::error::{CfmResult, RequestError};
use super::event::{Request, RequestKind};
use tracing::warn;
use uuid::Uuid;

/// Tracks outstanding sub-requests of one bounded state.
///
/// The first failure wins: it is reported once and every later
/// confirmation for the same round is ignored.
#[derive(Clone, Debug, Default)]
pub struct CfmTracker {
    kind: Option<RequestKind>,
    outstanding: Vec<(String, Uuid)>,
}

impl CfmTracker {
    /// Begin a round of sub-requests of `kind`: one `(collaborator,
    /// request)` pair per request sent.
    pub fn expect<'a, I>(&mut self, kind: RequestKind, sent: I)
    where
        I: IntoIterator<Item = (&'a str, &'a Request)>,
    {
        self.kind = Some(kind);
        self.outstanding = sent
            .into_iter()
            .map(|(to, request)| (to.to_string(), request.correlation))
            .collect();
    }

    pub fn clear(&mut self) {
        self.kind = None;
        self.outstanding.clear();
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    /// Record one confirmation.
    ///
    /// Returns `Ok(true)` once the last expected confirmation arrived,
    /// `Ok(false)` while more are due or the confirmation is stale, and the
    /// failure itself for the first failed confirmation. A confirmation
    /// counts only if its correlation matches a request of this round.
    pub fn check(
        &mut self,
        from: &str,
        correlation: Uuid,
        kind: RequestKind,
        result: &CfmResult,
    ) -> Result<bool, RequestError> {
        if self.kind != Some(kind) {
            warn!(from, ?kind, "ignoring stale sub-confirmation");
            return Ok(false);
        }
        let Some(index) = self
            .outstanding
            .iter()
            .position(|(name, id)| name == from && *id == correlation)
        else {
            warn!(from, ?kind, %correlation, "ignoring unexpected sub-confirmation");
            return Ok(false);
        };
        self.outstanding.swap_remove(index);

        if let Err(err) = result {
            self.clear();
            return Err(match err {
                RequestError::Propagated { .. } => err.clone(),
                other => RequestError::Propagated {
                    origin: from.to_string(),
                    reason: other.to_string(),
                },
            });
        }

        Ok(self.outstanding.is_empty())
    }
}
