//! In-memory practice store for testing.
//!
//! Implements the conversation, progress, and catalog ports over a single
//! mutex-guarded map set, giving the same atomicity the Postgres adapter
//! gets from transactions: the compare-and-swap transition and the
//! progress fold happen under one lock.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in
//! production. It uses `.expect()` on lock operations which will panic if
//! locks are poisoned.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::domain::catalog::{ConversationType, Language};
use crate::domain::conversation::{Conversation, SessionCompletion, Transcript};
use crate::domain::foundation::{
    ConversationId, ConversationStatus, ConversationTypeId, DomainError, LanguageId, UserId,
};
use crate::domain::progress::{PracticeStats, ProgressDelta, UserProgress};
use crate::ports::{
    CatalogReader, ConversationDetail, ConversationReader, ConversationRepository,
    ConversationView, ProgressReader, ProgressView,
};

#[derive(Default)]
struct Inner {
    conversations: HashMap<ConversationId, Conversation>,
    progress: HashMap<(UserId, LanguageId), UserProgress>,
    transcripts: HashMap<ConversationId, Vec<Transcript>>,
    languages: Vec<Language>,
    conversation_types: Vec<ConversationType>,
}

/// In-memory implementation of the practice-store ports.
#[derive(Default)]
pub struct InMemoryPracticeStore {
    inner: Mutex<Inner>,
    fail_completions: AtomicBool,
}

impl InMemoryPracticeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with reference data.
    pub fn with_catalog(languages: Vec<Language>, conversation_types: Vec<ConversationType>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            inner.languages = languages;
            inner.conversation_types = conversation_types;
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .expect("InMemoryPracticeStore: lock poisoned")
    }

    // === Test Helpers ===

    /// Makes every subsequent `complete_active` fail before mutating
    /// anything, to exercise the all-or-nothing contract.
    pub fn fail_next_completions(&self, fail: bool) {
        self.fail_completions.store(fail, Ordering::SeqCst);
    }

    /// Returns the number of stored conversations.
    pub fn conversation_count(&self) -> usize {
        self.lock().conversations.len()
    }

    /// Returns the raw progress row for a pair (for test assertions).
    pub fn progress_for(&self, user_id: &UserId, language_id: &LanguageId) -> Option<UserProgress> {
        self.lock().progress.get(&(*user_id, *language_id)).cloned()
    }

    /// Returns a stored conversation by id (for test assertions).
    pub fn conversation(&self, id: &ConversationId) -> Option<Conversation> {
        self.lock().conversations.get(id).cloned()
    }

    /// Appends a transcript line (stands in for the realtime component).
    pub fn add_transcript(&self, transcript: Transcript) {
        let mut inner = self.lock();
        inner
            .transcripts
            .entry(transcript.conversation_id)
            .or_default()
            .push(transcript);
    }

    fn view_of(inner: &Inner, conversation: &Conversation) -> Result<ConversationView, DomainError> {
        let language = inner
            .languages
            .iter()
            .find(|l| l.id == *conversation.language_id())
            .cloned()
            .ok_or_else(|| {
                DomainError::database(format!(
                    "dangling language reference: {}",
                    conversation.language_id()
                ))
            })?;
        let conversation_type = inner
            .conversation_types
            .iter()
            .find(|t| t.id == *conversation.type_id())
            .cloned()
            .ok_or_else(|| {
                DomainError::database(format!(
                    "dangling conversation type reference: {}",
                    conversation.type_id()
                ))
            })?;

        Ok(ConversationView {
            id: *conversation.id(),
            user_id: *conversation.user_id(),
            language,
            conversation_type,
            status: conversation.status(),
            started_at: *conversation.started_at(),
            ended_at: conversation.ended_at().copied(),
            duration_seconds: conversation.duration_seconds(),
        })
    }
}

#[async_trait]
impl ConversationRepository for InMemoryPracticeStore {
    async fn insert(&self, conversation: &Conversation) -> Result<(), DomainError> {
        let mut inner = self.lock();
        inner
            .conversations
            .insert(*conversation.id(), conversation.clone());
        Ok(())
    }

    async fn find_owned(
        &self,
        id: &ConversationId,
        user_id: &UserId,
    ) -> Result<Option<Conversation>, DomainError> {
        let inner = self.lock();
        Ok(inner
            .conversations
            .get(id)
            .filter(|c| c.is_owner(user_id))
            .cloned())
    }

    async fn complete_active(
        &self,
        id: &ConversationId,
        user_id: &UserId,
        completion: &SessionCompletion,
    ) -> Result<Option<Conversation>, DomainError> {
        if self.fail_completions.load(Ordering::SeqCst) {
            return Err(DomainError::database("simulated completion failure"));
        }

        let mut inner = self.lock();

        // Compare-and-swap: only an owned, still-Active row transitions.
        let updated = match inner.conversations.get(id) {
            Some(c) if c.is_owner(user_id) && c.status() == ConversationStatus::Active => {
                Conversation::reconstitute(
                    *c.id(),
                    *c.user_id(),
                    *c.language_id(),
                    *c.type_id(),
                    ConversationStatus::Completed,
                    *c.started_at(),
                    Some(completion.ended_at),
                    Some(completion.duration_seconds),
                )
            }
            _ => return Ok(None),
        };

        // Fold under the same lock, so transition and fold land together.
        // Nothing is stored until the folded row passes its contract
        // check, keeping failures all-or-nothing.
        let delta = ProgressDelta::from_completion(completion);
        let key = (*user_id, *updated.language_id());
        let progress = match inner.progress.get(&key) {
            Some(existing) => {
                let mut next = existing.clone();
                next.apply(&delta);
                next
            }
            None => UserProgress::first(*user_id, *updated.language_id(), &delta),
        };
        progress.check_invariants()?;

        inner.progress.insert(key, progress);
        inner.conversations.insert(*updated.id(), updated.clone());
        Ok(Some(updated))
    }
}

#[async_trait]
impl ConversationReader for InMemoryPracticeStore {
    async fn get_owned(
        &self,
        id: &ConversationId,
        user_id: &UserId,
    ) -> Result<Option<ConversationDetail>, DomainError> {
        let inner = self.lock();
        let conversation = match inner
            .conversations
            .get(id)
            .filter(|c| c.is_owner(user_id))
        {
            Some(c) => c,
            None => return Ok(None),
        };

        let view = Self::view_of(&inner, conversation)?;
        let mut transcripts = inner.transcripts.get(id).cloned().unwrap_or_default();
        transcripts.sort_by_key(|t| t.timestamp);

        Ok(Some(ConversationDetail {
            conversation: view,
            transcripts,
        }))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ConversationView>, DomainError> {
        let inner = self.lock();
        let mut views: Vec<ConversationView> = inner
            .conversations
            .values()
            .filter(|c| c.is_owner(user_id))
            .map(|c| Self::view_of(&inner, c))
            .collect::<Result<_, _>>()?;

        views.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(views)
    }
}

#[async_trait]
impl ProgressReader for InMemoryPracticeStore {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ProgressView>, DomainError> {
        let inner = self.lock();
        let mut views: Vec<ProgressView> = inner
            .progress
            .values()
            .filter(|p| p.user_id == *user_id)
            .map(|p| {
                let language = inner
                    .languages
                    .iter()
                    .find(|l| l.id == p.language_id)
                    .cloned()
                    .ok_or_else(|| {
                        DomainError::database(format!(
                            "dangling language reference: {}",
                            p.language_id
                        ))
                    })?;
                Ok(ProgressView {
                    language,
                    sessions_count: p.sessions_count,
                    total_duration_minutes: p.total_duration_minutes,
                    last_session_at: p.last_session_at,
                })
            })
            .collect::<Result<_, DomainError>>()?;

        views.sort_by(|a, b| a.language.name.cmp(&b.language.name));
        Ok(views)
    }

    async fn practice_stats(&self, user_id: &UserId) -> Result<PracticeStats, DomainError> {
        let inner = self.lock();
        let total_conversations = inner
            .conversations
            .values()
            .filter(|c| c.is_owner(user_id) && c.status() == ConversationStatus::Completed)
            .count() as i64;

        let user_progress: Vec<&UserProgress> = inner
            .progress
            .values()
            .filter(|p| p.user_id == *user_id)
            .collect();

        Ok(PracticeStats {
            total_conversations,
            total_minutes: user_progress.iter().map(|p| p.total_duration_minutes).sum(),
            languages_practiced: user_progress.len() as i64,
        })
    }
}

#[async_trait]
impl CatalogReader for InMemoryPracticeStore {
    async fn list_languages(&self) -> Result<Vec<Language>, DomainError> {
        let inner = self.lock();
        let mut languages: Vec<Language> = inner
            .languages
            .iter()
            .filter(|l| l.is_active)
            .cloned()
            .collect();
        languages.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(languages)
    }

    async fn find_language(&self, id: &LanguageId) -> Result<Option<Language>, DomainError> {
        let inner = self.lock();
        Ok(inner.languages.iter().find(|l| l.id == *id).cloned())
    }

    async fn find_language_by_code(&self, code: &str) -> Result<Option<Language>, DomainError> {
        let inner = self.lock();
        Ok(inner.languages.iter().find(|l| l.code == code).cloned())
    }

    async fn list_conversation_types(&self) -> Result<Vec<ConversationType>, DomainError> {
        let inner = self.lock();
        let mut types: Vec<ConversationType> = inner
            .conversation_types
            .iter()
            .filter(|t| t.is_active)
            .cloned()
            .collect();
        types.sort_by_key(|t| t.difficulty_level);
        Ok(types)
    }

    async fn find_conversation_type(
        &self,
        id: &ConversationTypeId,
    ) -> Result<Option<ConversationType>, DomainError> {
        let inner = self.lock();
        Ok(inner
            .conversation_types
            .iter()
            .find(|t| t.id == *id)
            .cloned())
    }
}
