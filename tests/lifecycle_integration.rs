//! Integration tests for the session lifecycle and progress fold.
//!
//! These tests drive the real application handlers over the in-memory
//! store, which gives the same per-call atomicity the Postgres adapter
//! gets from transactions. Covered end to end:
//! 1. Start -> end -> progress fold -> statistics
//! 2. Exactly-one-winner semantics for concurrent completions of one id
//! 3. No lost updates for concurrent completions sharing a progress row
//! 4. The register -> login -> token validation identity flow

use std::sync::Arc;

use parlera::adapters::auth::{BcryptPasswordHasher, JwtAuthService};
use parlera::adapters::memory::{InMemoryPracticeStore, InMemoryUserStore};
use parlera::application::handlers::auth::{
    LoginUserCommand, LoginUserHandler, RegisterUserCommand, RegisterUserHandler,
};
use parlera::application::handlers::conversation::{
    EndConversationCommand, EndConversationHandler, StartConversationCommand,
    StartConversationHandler,
};
use parlera::application::handlers::progress::{GetStatsHandler, GetStatsQuery};
use parlera::domain::catalog::{ConversationType, Language};
use parlera::domain::conversation::{Conversation, ConversationError};
use parlera::domain::foundation::{
    ConversationId, ConversationTypeId, LanguageId, Timestamp, UserId,
};
use parlera::ports::{ConversationRepository, SessionValidator};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn spanish() -> Language {
    Language {
        id: LanguageId::new(),
        code: "es".to_string(),
        name: "Spanish".to_string(),
        native_name: "Español".to_string(),
        is_active: true,
    }
}

fn casual() -> ConversationType {
    ConversationType {
        id: ConversationTypeId::new(),
        name: "Casual Conversation".to_string(),
        description: "Everyday topics".to_string(),
        difficulty_level: 1,
        is_active: true,
    }
}

struct Engine {
    store: Arc<InMemoryPracticeStore>,
    start: StartConversationHandler,
    end: Arc<EndConversationHandler>,
    stats: GetStatsHandler,
    language: Language,
    conversation_type: ConversationType,
}

fn engine() -> Engine {
    let language = spanish();
    let conversation_type = casual();
    let store = Arc::new(InMemoryPracticeStore::with_catalog(
        vec![language.clone()],
        vec![conversation_type.clone()],
    ));
    Engine {
        start: StartConversationHandler::new(store.clone(), store.clone()),
        end: Arc::new(EndConversationHandler::new(store.clone(), store.clone())),
        stats: GetStatsHandler::new(store.clone()),
        store,
        language,
        conversation_type,
    }
}

/// A timestamp the given number of seconds in the past, so that ending
/// "now" produces a known duration.
fn secs_ago(secs: i64) -> Timestamp {
    Timestamp::from_datetime(chrono::Utc::now() - chrono::Duration::seconds(secs))
}

/// Inserts an Active conversation back-dated by `secs` seconds.
async fn insert_backdated(engine: &Engine, user_id: UserId, secs: i64) -> ConversationId {
    let conversation = Conversation::start(
        ConversationId::new(),
        user_id,
        engine.language.id,
        engine.conversation_type.id,
        secs_ago(secs),
    );
    engine.store.insert(&conversation).await.unwrap();
    *conversation.id()
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn full_lifecycle_accumulates_progress_and_stats() {
    let engine = engine();
    let user_id = UserId::new();

    // Session one: ~125 seconds. Floor(125.x) stays 125 as long as the
    // test body runs inside one second.
    let first = insert_backdated(&engine, user_id, 125).await;
    let detail = engine
        .end
        .handle(EndConversationCommand {
            user_id,
            conversation_id: first,
        })
        .await
        .unwrap();

    let duration = detail.conversation.duration_seconds.unwrap();
    assert!((125..=126).contains(&duration), "duration was {duration}");

    let progress = engine
        .store
        .progress_for(&user_id, &engine.language.id)
        .unwrap();
    assert_eq!(progress.sessions_count, 1);
    assert_eq!(progress.total_duration_minutes, 3);

    // Session two: ~40 seconds for the same pair.
    let second = insert_backdated(&engine, user_id, 40).await;
    engine
        .end
        .handle(EndConversationCommand {
            user_id,
            conversation_id: second,
        })
        .await
        .unwrap();

    let progress = engine
        .store
        .progress_for(&user_id, &engine.language.id)
        .unwrap();
    assert_eq!(progress.sessions_count, 2);
    assert_eq!(progress.total_duration_minutes, 4);

    let stats = engine
        .stats
        .handle(GetStatsQuery { user_id })
        .await
        .unwrap();
    assert_eq!(stats.total_conversations, 2);
    assert_eq!(stats.total_minutes, 4);
    assert_eq!(stats.languages_practiced, 1);
}

#[tokio::test]
async fn starting_checks_references_before_inserting() {
    let engine = engine();
    let user_id = UserId::new();

    let result = engine
        .start
        .handle(StartConversationCommand {
            user_id,
            language_id: LanguageId::new(),
            type_id: engine.conversation_type.id,
        })
        .await;
    assert!(matches!(result, Err(ConversationError::LanguageNotFound(_))));

    let result = engine
        .start
        .handle(StartConversationCommand {
            user_id,
            language_id: engine.language.id,
            type_id: ConversationTypeId::new(),
        })
        .await;
    assert!(matches!(result, Err(ConversationError::TypeNotFound(_))));

    assert_eq!(engine.store.conversation_count(), 0);
}

#[tokio::test]
async fn stats_for_user_with_no_sessions_are_zero() {
    let engine = engine();

    let stats = engine
        .stats
        .handle(GetStatsQuery {
            user_id: UserId::new(),
        })
        .await
        .unwrap();

    assert_eq!(stats.total_conversations, 0);
    assert_eq!(stats.total_minutes, 0);
    assert_eq!(stats.languages_practiced, 0);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn racing_completions_of_one_conversation_have_one_winner() {
    let engine = engine();
    let user_id = UserId::new();
    let conversation_id = insert_backdated(&engine, user_id, 60).await;

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let handler = engine.end.clone();
            tokio::spawn(async move {
                handler
                    .handle(EndConversationCommand {
                        user_id,
                        conversation_id,
                    })
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => successes += 1,
            Err(ConversationError::NotFound(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successes, 1);
    let progress = engine
        .store
        .progress_for(&user_id, &engine.language.id)
        .unwrap();
    assert_eq!(progress.sessions_count, 1);
}

#[tokio::test]
async fn concurrent_completions_lose_no_increments() {
    const K: usize = 16;

    let engine = engine();
    let user_id = UserId::new();

    // K distinct active conversations for one (user, language) pair, with
    // durations safely inside minute boundaries: 90s, 150s, 210s, ...
    let mut ids = Vec::new();
    let mut expected_minutes = 0;
    for i in 0..K {
        let secs = 90 + 60 * i as i64;
        expected_minutes += (secs + 59) / 60;
        ids.push(insert_backdated(&engine, user_id, secs).await);
    }

    let tasks: Vec<_> = ids
        .into_iter()
        .map(|conversation_id| {
            let handler = engine.end.clone();
            tokio::spawn(async move {
                handler
                    .handle(EndConversationCommand {
                        user_id,
                        conversation_id,
                    })
                    .await
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let progress = engine
        .store
        .progress_for(&user_id, &engine.language.id)
        .unwrap();
    assert_eq!(progress.sessions_count, K as i64);
    assert_eq!(progress.total_duration_minutes, expected_minutes);

    let stats = engine
        .stats
        .handle(GetStatsQuery { user_id })
        .await
        .unwrap();
    assert_eq!(stats.total_conversations, K as i64);
    assert_eq!(stats.total_minutes, expected_minutes);
    assert_eq!(stats.languages_practiced, 1);
}

#[tokio::test]
async fn late_arriving_older_completion_keeps_newest_session_time() {
    use parlera::domain::conversation::SessionCompletion;

    let engine = engine();
    let user_id = UserId::new();

    let newer = insert_backdated(&engine, user_id, 300).await;
    let older = insert_backdated(&engine, user_id, 300).await;

    let newer_end = Timestamp::from_unix_secs(2_000);
    let older_end = Timestamp::from_unix_secs(1_000);

    // The newer session's completion lands first; the older one arrives
    // late (e.g. a retried request).
    engine
        .store
        .complete_active(
            &newer,
            &user_id,
            &SessionCompletion {
                ended_at: newer_end,
                duration_seconds: 60,
            },
        )
        .await
        .unwrap()
        .expect("first completion applies");
    engine
        .store
        .complete_active(
            &older,
            &user_id,
            &SessionCompletion {
                ended_at: older_end,
                duration_seconds: 60,
            },
        )
        .await
        .unwrap()
        .expect("second completion applies");

    let progress = engine
        .store
        .progress_for(&user_id, &engine.language.id)
        .unwrap();
    assert_eq!(progress.sessions_count, 2);
    assert_eq!(progress.last_session_at, newer_end);
}

// =============================================================================
// Identity flow
// =============================================================================

#[tokio::test]
async fn register_login_and_token_validation_roundtrip() {
    use secrecy::SecretString;
    use std::time::Duration;

    let users = Arc::new(InMemoryUserStore::new());
    // Minimum bcrypt cost keeps the test fast.
    let hasher = Arc::new(BcryptPasswordHasher::new(4));
    let jwt = Arc::new(JwtAuthService::new(
        &SecretString::new("integration-test-secret".to_string()),
        Duration::from_secs(3600),
        users.clone(),
    ));

    let register = RegisterUserHandler::new(users.clone(), hasher.clone(), jwt.clone());
    let login = LoginUserHandler::new(users.clone(), hasher, jwt.clone());

    let registered = register
        .handle(RegisterUserCommand {
            email: "demo@example.com".to_string(),
            password: "demo123".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            native_language: "en".to_string(),
        })
        .await
        .unwrap();

    // The token issued at registration authenticates the user.
    let authenticated = jwt.validate(&registered.token).await.unwrap();
    assert_eq!(authenticated.id, registered.user.id);
    assert_eq!(authenticated.email, "demo@example.com");

    // And so does a token from a later login.
    let logged_in = login
        .handle(LoginUserCommand {
            email: "demo@example.com".to_string(),
            password: "demo123".to_string(),
        })
        .await
        .unwrap();
    let authenticated = jwt.validate(&logged_in.token).await.unwrap();
    assert_eq!(authenticated.id, registered.user.id);
}
