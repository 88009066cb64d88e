//! Bounded fan-out of business resolution over a batch of posts.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::debug;

use tabletrend_common::{Business, Post, ResolvedMention};

use crate::resolve::BusinessResolver;

/// Runs the resolver over a batch on a fixed-size worker pool. Tasks carry
/// their input index and write into a pre-sized slot, so output order
/// mirrors input order no matter how tasks interleave.
pub struct ResolutionCoordinator {
    resolver: Arc<BusinessResolver>,
    pool_size: usize,
}

impl ResolutionCoordinator {
    pub fn new(resolver: Arc<BusinessResolver>, pool_size: usize) -> Self {
        Self {
            resolver,
            pool_size: pool_size.max(1),
        }
    }

    /// Resolve every post in the batch. Output length always equals input
    /// length; `output[i]` corresponds to `posts[i]`. The resolver absorbs
    /// all collaborator failures, so a failed task is an unresolved mention
    /// rather than a failed batch. No per-task timeout: a hung collaborator
    /// call delays the batch but never drops a post.
    pub async fn resolve_all(&self, posts: Vec<Post>) -> Vec<ResolvedMention> {
        let total = posts.len();
        let mut resolved: Vec<Option<Business>> = vec![None; total];

        let results: Vec<(usize, Option<Business>)> =
            stream::iter(posts.iter().enumerate().map(|(idx, post)| {
                let resolver = Arc::clone(&self.resolver);
                async move { (idx, resolver.resolve(post).await) }
            }))
            .buffer_unordered(self.pool_size)
            .collect()
            .await;

        for (idx, business) in results {
            resolved[idx] = business;
        }

        let hits = resolved.iter().filter(|b| b.is_some()).count();
        debug!(posts = total, resolved = hits, "Batch resolution complete");

        posts
            .into_iter()
            .zip(resolved)
            .map(|(post, business)| ResolvedMention { post, business })
            .collect()
    }
}
