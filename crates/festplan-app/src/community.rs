//! Community feed: posts seeded from the mock dataset, newest first.

use anyhow::Result;
use chrono::Utc;
use festplan_core::seed;
use festplan_core::types::{CommunityPost, User};
use festplan_store::slots::COMMUNITY_SLOT;
use festplan_store::{Binding, Store};
use uuid::Uuid;

pub struct CommunityStore {
    binding: Binding<Vec<CommunityPost>>,
}

impl CommunityStore {
    pub fn open(store: &Store) -> Result<Self> {
        let mut binding = Binding::new(COMMUNITY_SLOT, seed::seed_posts(Utc::now()));
        binding.load(store)?;
        Ok(Self { binding })
    }

    pub fn posts(&self) -> &[CommunityPost] {
        self.binding.get()
    }

    /// Publish a post. Anonymous when no user is signed in.
    pub fn add_post(
        &mut self,
        store: &Store,
        author: Option<&User>,
        content: &str,
        tags: Vec<String>,
        image: Option<String>,
    ) -> Result<CommunityPost> {
        let post = CommunityPost {
            id: format!("post_{}", Uuid::new_v4()),
            author: author.map_or_else(|| "Anonymous".to_string(), |u| u.name.clone()),
            avatar: author.map_or_else(|| "?".to_string(), |u| u.avatar.clone()),
            title: "New Update".to_string(),
            content: content.to_string(),
            likes: 0,
            comments: 0,
            image,
            tags,
            timestamp: Utc::now(),
        };
        self.binding
            .mutate(store, |posts| posts.insert(0, post.clone()))?;
        Ok(post)
    }

    /// Unknown ids are ignored.
    pub fn like_post(&mut self, store: &Store, post_id: &str) -> Result<()> {
        self.binding.mutate(store, |posts| {
            if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
                post.likes += 1;
            }
        })?;
        Ok(())
    }
}
