//! # Storage Layer
//!
//! [`PostStore`] owns the ordered in-memory post collection and keeps it
//! in sync with a persisted JSON document. Raw document I/O is abstracted
//! behind the [`DocumentBackend`] trait:
//!
//! - [`fs::FsBackend`]: production file-based storage
//! - [`memory::MemBackend`]: in-memory storage for testing
//!
//! Every mutation rewrites the whole document before returning, so the
//! document can never lag behind the collection: the next read, and
//! process exit, always see the completed write.
//!
//! A missing or unparsable document is treated as an empty store and the
//! document is rewritten as `[]`, discarding whatever was there.

use uuid::Uuid;

use crate::error::{PostboxError, Result};
use crate::model::Post;

pub mod backend;
pub mod fs;
pub mod memory;

pub use backend::DocumentBackend;

pub struct PostStore<B: DocumentBackend> {
    pub(crate) backend: B,
    posts: Vec<Post>,
}

impl<B: DocumentBackend> PostStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            posts: Vec::new(),
        }
    }

    /// Populate the collection from the persisted document.
    ///
    /// Parse failures never reach the caller: the store starts empty and
    /// the document is reset to `[]`. I/O failures do propagate.
    pub fn load(&mut self) -> Result<()> {
        match self.backend.load_document()? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(posts) => {
                    self.posts = posts;
                    log::debug!("loaded {} posts", self.posts.len());
                }
                Err(err) => {
                    log::warn!("post document is unreadable, starting empty: {err}");
                    self.posts.clear();
                    self.save()?;
                }
            },
            None => {
                self.posts.clear();
                self.save()?;
            }
        }
        Ok(())
    }

    /// Serialize the full collection and rewrite the document.
    pub fn save(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.posts)?;
        self.backend.store_document(&text)?;
        log::debug!("persisted {} posts", self.posts.len());
        Ok(())
    }

    /// Append a new post and persist. Returns the new post's id.
    pub fn create(
        &mut self,
        title: String,
        content: String,
        author: Option<String>,
    ) -> Result<Uuid> {
        let post = Post::new(title, content, author);
        let id = post.id;
        self.posts.push(post);
        self.save()?;
        Ok(id)
    }

    /// Apply edited field values to a post.
    ///
    /// When every field matches the stored post this is a no-op: the date
    /// keeps its old value and the document is not rewritten. Returns
    /// whether anything changed.
    pub fn update(
        &mut self,
        id: &Uuid,
        title: String,
        content: String,
        author: Option<String>,
    ) -> Result<bool> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(PostboxError::PostNotFound(*id))?;

        if post.title == title && post.content == content && post.author == author {
            return Ok(false);
        }

        post.title = title;
        post.content = content;
        post.author = author;
        post.date = Some(crate::model::PostDate::now());
        self.save()?;
        Ok(true)
    }

    /// Remove a post by id and persist. Returns the removed post.
    pub fn delete(&mut self, id: &Uuid) -> Result<Post> {
        let position = self
            .posts
            .iter()
            .position(|p| p.id == *id)
            .ok_or(PostboxError::PostNotFound(*id))?;
        let removed = self.posts.remove(position);
        self.save()?;
        Ok(removed)
    }

    pub fn find(&self, id: &Uuid) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == *id)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Indices of the posts matching `query`, in store order.
    ///
    /// Matching is a case-insensitive substring test against title and
    /// content; an empty query matches everything. No ranking.
    pub fn search_indices(&self, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        self.posts
            .iter()
            .enumerate()
            .filter(|(_, post)| {
                needle.is_empty()
                    || post.title.to_lowercase().contains(&needle)
                    || post.content.to_lowercase().contains(&needle)
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// The posts matching `query`, in store order.
    pub fn search(&self, query: &str) -> Vec<&Post> {
        self.search_indices(query)
            .into_iter()
            .map(|index| &self.posts[index])
            .collect()
    }
}
