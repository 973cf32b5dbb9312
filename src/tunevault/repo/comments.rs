use super::{CollectionCore, LoadPolicy};
use crate::error::Result;
use crate::ident;
use crate::model::Comment;
use crate::store::DocumentStore;

/// Song comments. Seed comments ship as a bundled fixture; the first
/// user-authored comment copies the whole collection to the device tier.
pub struct CommentRepository<S: DocumentStore> {
    core: CollectionCore<Comment, S>,
}

impl<S: DocumentStore> CommentRepository<S> {
    pub const COLLECTION: &'static str = "comments";
    pub const ID_PREFIX: &'static str = "comment_";

    pub fn new(store: S) -> Self {
        Self {
            core: CollectionCore::new(Self::COLLECTION, LoadPolicy::Optional, store),
        }
    }

    pub fn get_all(&mut self) -> Result<Vec<Comment>> {
        Ok(self.core.records()?.to_vec())
    }

    pub fn comments_for_song(&mut self, song_id: &str) -> Result<Vec<Comment>> {
        Ok(self
            .core
            .records()?
            .iter()
            .filter(|c| c.song_id == song_id)
            .cloned()
            .collect())
    }

    pub fn add(&mut self, comment: Comment) -> Result<()> {
        self.core.push(comment)
    }

    /// `comment_<epoch millis>`: unique enough for one device, and sortable.
    pub fn generate_comment_id(&self) -> String {
        ident::timestamp_id(Self::ID_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    pub(crate) fn comment(id: &str, song_id: &str, content: &str) -> Comment {
        Comment {
            comment_id: id.to_string(),
            song_id: song_id.to_string(),
            user_id: "u1".to_string(),
            username: "listener".to_string(),
            avatar_url: String::new(),
            content: content.to_string(),
            timestamp: 1700000000000,
            like_count: 0,
            reply_count: 0,
            is_liked: false,
            user_level: 1,
            is_long_comment: false,
            is_collapsed: false,
        }
    }

    #[test]
    fn test_add_then_query_same_instance() {
        let store = InMemoryStore::new()
            .with_bundled("comments", &[comment("comment_1", "song_002", "seed")]);
        let mut repo = CommentRepository::new(store);

        let new = comment("comment_2", "song_001", "mine");
        repo.add(new.clone()).unwrap();

        let for_song = repo.comments_for_song("song_001").unwrap();
        assert_eq!(for_song, vec![new]);
        // Seed comments for other songs survive the write.
        assert_eq!(repo.get_all().unwrap().len(), 2);
    }

    #[test]
    fn test_no_fixture_means_empty_not_error() {
        let mut repo = CommentRepository::new(InMemoryStore::new());
        assert!(repo.comments_for_song("song_001").unwrap().is_empty());
    }

    #[test]
    fn test_generated_id_shape() {
        let repo = CommentRepository::new(InMemoryStore::new());
        let id = repo.generate_comment_id();
        assert!(id.starts_with("comment_"));
    }
}
