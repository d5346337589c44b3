//! Recursive image collection and random selection.

use futures::FutureExt;
use futures::future::BoxFuture;
use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::warn;

use crate::github::ContentsClient;
use crate::models::{ContentEntry, EntryType};

/// Directories nested deeper than this are not descended into.
const MAX_DEPTH: usize = 32;

/// Sibling directory consulted when a repository's primary tree has no images.
const FALLBACK_DIR: &str = "/hd";

impl ContentsClient {
    /// Walks the tree under `path` depth-first, in the order the API returns
    /// entries, collecting every image file. Branches that fail to list
    /// contribute nothing; the walk itself never fails.
    pub async fn collect_images(&self, repo: &str, path: &str) -> Vec<ContentEntry> {
        self.collect_at(repo, path.to_string(), 0).await
    }

    fn collect_at<'a>(
        &'a self,
        repo: &'a str,
        path: String,
        depth: usize,
    ) -> BoxFuture<'a, Vec<ContentEntry>> {
        async move {
            if depth > MAX_DEPTH {
                warn!(repo, path = %path, "directory tree too deep, not descending");
                return Vec::new();
            }

            let mut images = Vec::new();
            for entry in self.list_contents(repo, &path).await {
                match entry.entry_type {
                    EntryType::File if entry.is_image() => images.push(entry),
                    EntryType::Dir => {
                        let subtree = self.collect_at(repo, entry.path.clone(), depth + 1).await;
                        images.extend(subtree);
                    }
                    _ => {}
                }
            }
            images
        }
        .boxed()
    }

    /// Picks one image uniformly at random from `repo`, looking first at the
    /// repository root and then, only if the root yields nothing, at the
    /// fixed `/hd` sibling directory.
    pub async fn pick_random_image(&self, repo: &str) -> Option<ContentEntry> {
        let mut images = self.collect_images(repo, "").await;
        if images.is_empty() {
            images = self.collect_images(repo, FALLBACK_DIR).await;
        }
        images.choose(&mut thread_rng()).cloned()
    }
}
