mod common;

use std::sync::Arc;

use tokio::sync::Notify;

use common::{MockIdeaService, ScriptedConfirmer, sample_ideas};
use ideahub::types::{Idea, IdeaId};
use ideahub::view::{
    DeleteOutcome, IDEAS_LOAD_FAILURE, LoadOutcome, MyIdeasView, Screen, ToastLevel, ToastLog,
    ViewPhase,
};

struct Harness {
    service: Arc<MockIdeaService>,
    confirmer: Arc<ScriptedConfirmer>,
    toasts: Arc<ToastLog>,
    view: MyIdeasView<MockIdeaService, ScriptedConfirmer, ToastLog>,
}

fn harness(service: MockIdeaService, confirmer: ScriptedConfirmer) -> Harness {
    let service = Arc::new(service);
    let confirmer = Arc::new(confirmer);
    let toasts = Arc::new(ToastLog::new());
    let view = MyIdeasView::new(
        Arc::clone(&service),
        Arc::clone(&confirmer),
        Arc::clone(&toasts),
    );
    Harness {
        service,
        confirmer,
        toasts,
        view,
    }
}

fn ids(ideas: &[Idea]) -> Vec<IdeaId> {
    ideas.iter().map(|idea| idea.id.clone()).collect()
}

#[tokio::test]
async fn test_starts_loading_before_activation() {
    let h = harness(MockIdeaService::new(sample_ideas()), ScriptedConfirmer::default());
    assert!(h.view.is_loading());
    assert_eq!(h.view.project(), Screen::Loading);
}

#[tokio::test]
async fn test_activation_populates_store() {
    let h = harness(MockIdeaService::new(sample_ideas()), ScriptedConfirmer::default());

    assert_eq!(h.view.activate().await, LoadOutcome::Loaded(3));
    assert!(!h.view.is_loading());
    assert!(h.view.error().is_none());
    assert_eq!(h.view.ideas(), sample_ideas());
    assert_eq!(h.view.project().phase(), ViewPhase::Populated);
}

#[tokio::test]
async fn test_fetch_is_issued_once_per_instance() {
    let h = harness(MockIdeaService::new(sample_ideas()), ScriptedConfirmer::default());

    h.view.activate().await;
    assert_eq!(h.view.activate().await, LoadOutcome::AlreadyStarted);
    h.view.project();
    h.view.project();

    assert_eq!(h.service.fetch_calls(), 1);
}

#[tokio::test]
async fn test_empty_collection_is_empty_phase() {
    let h = harness(MockIdeaService::new(vec![]), ScriptedConfirmer::default());
    assert_eq!(h.view.activate().await, LoadOutcome::Loaded(0));
    assert_eq!(h.view.project(), Screen::Empty);
}

#[tokio::test]
async fn test_load_failure_shows_fixed_message_only() {
    let h = harness(
        MockIdeaService::failing("ECONNREFUSED 10.0.0.7:5000"),
        ScriptedConfirmer::default(),
    );

    assert_eq!(h.view.activate().await, LoadOutcome::Failed);
    assert!(!h.view.is_loading());
    assert_eq!(h.view.error().as_deref(), Some(IDEAS_LOAD_FAILURE));
    assert!(h.view.ideas().is_empty());

    let json = serde_json::to_string(&h.view.project()).unwrap();
    assert!(!json.contains("ECONNREFUSED"));
    assert_eq!(
        h.view.project(),
        Screen::Error {
            message: "Failed to load ideas".to_string()
        }
    );
}

#[tokio::test]
async fn test_delete_after_failed_load_is_unavailable() {
    let h = harness(MockIdeaService::failing("boom"), ScriptedConfirmer::accepting());
    assert_eq!(h.view.activate().await, LoadOutcome::Failed);

    let outcome = h.view.request_delete(&IdeaId::from(42u64)).await;

    assert_eq!(outcome, DeleteOutcome::Unavailable);
    assert!(h.confirmer.prompts().is_empty());
    assert!(h.service.delete_calls().is_empty());
    assert!(h.toasts.toasts().is_empty());
    assert_eq!(h.view.project().phase(), ViewPhase::Error);
}

#[tokio::test]
async fn test_confirmed_delete_prunes_store_and_toasts() {
    let h = harness(
        MockIdeaService::new(sample_ideas()),
        ScriptedConfirmer::accepting(),
    );
    h.view.activate().await;

    let outcome = h.view.request_delete(&IdeaId::from(2u64)).await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(h.service.delete_calls(), vec![IdeaId::from(2u64)]);
    assert_eq!(
        ids(&h.view.ideas()),
        vec![IdeaId::from(1u64), IdeaId::from(3u64)]
    );

    let toast = h.toasts.last().unwrap();
    assert_eq!(toast.level, ToastLevel::Success);
    assert_eq!(toast.title, "Deleted!");
    assert_eq!(toast.message, "Idea has been deleted.");
    // Pruned locally, not re-fetched
    assert_eq!(h.service.fetch_calls(), 1);
}

#[tokio::test]
async fn test_delete_prompt_contents() {
    let h = harness(
        MockIdeaService::new(sample_ideas()),
        ScriptedConfirmer::declining(),
    );
    h.view.activate().await;
    h.view.request_delete(&IdeaId::from(1u64)).await;

    let prompts = h.confirmer.prompts();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].title, "Are you sure?");
    assert_eq!(prompts[0].message, "This idea will be permanently deleted!");
    assert_eq!(prompts[0].confirm_label, "Yes, delete it!");
    assert!(prompts[0].destructive);
}

#[tokio::test]
async fn test_declined_delete_never_calls_service() {
    let h = harness(
        MockIdeaService::new(sample_ideas()),
        ScriptedConfirmer::declining(),
    );
    h.view.activate().await;

    let outcome = h.view.request_delete(&IdeaId::from(2u64)).await;

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert!(h.service.delete_calls().is_empty());
    assert_eq!(h.view.ideas(), sample_ideas());
    assert!(h.toasts.toasts().is_empty());
}

#[tokio::test]
async fn test_failed_delete_keeps_store_and_toasts_error() {
    let h = harness(
        MockIdeaService::new(sample_ideas()).with_delete_failure("HTTP 500"),
        ScriptedConfirmer::accepting(),
    );
    h.view.activate().await;

    let outcome = h.view.request_delete(&IdeaId::from(1u64)).await;

    assert_eq!(outcome, DeleteOutcome::Failed);
    assert_eq!(h.view.ideas(), sample_ideas());
    let toast = h.toasts.last().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.title, "Error");
    assert_eq!(toast.message, "Failed to delete idea.");
}

#[tokio::test]
async fn test_delete_of_id_not_on_board_leaves_store_unchanged() {
    let h = harness(
        MockIdeaService::new(sample_ideas()),
        ScriptedConfirmer::accepting(),
    );
    h.view.activate().await;

    let outcome = h.view.request_delete(&IdeaId::from(99u64)).await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(h.view.ideas(), sample_ideas());
}

#[tokio::test]
async fn test_toggle_menu_twice_closes() {
    let h = harness(MockIdeaService::new(sample_ideas()), ScriptedConfirmer::default());
    h.view.activate().await;

    let id = IdeaId::from(2u64);
    assert_eq!(h.view.toggle_menu(&id), Some(id.clone()));
    assert_eq!(h.view.toggle_menu(&id), None);
    assert_eq!(h.view.active_menu(), None);
}

#[tokio::test]
async fn test_at_most_one_menu_open() {
    let h = harness(MockIdeaService::new(sample_ideas()), ScriptedConfirmer::default());
    h.view.activate().await;

    for n in [1u64, 2, 3, 3, 1, 2] {
        h.view.toggle_menu(&IdeaId::from(n));
        let open = h
            .view
            .project()
            .items()
            .iter()
            .filter(|card| card.menu_open)
            .count();
        assert!(open <= 1);
    }
    assert_eq!(h.view.active_menu(), Some(IdeaId::from(2u64)));
}

#[tokio::test]
async fn test_menu_toggle_does_not_touch_store() {
    let h = harness(MockIdeaService::new(sample_ideas()), ScriptedConfirmer::default());
    h.view.activate().await;

    h.view.toggle_menu(&IdeaId::from(1u64));
    assert_eq!(h.view.ideas(), sample_ideas());
    assert_eq!(h.service.fetch_calls(), 1);
}

#[tokio::test]
async fn test_overlapping_deletes_both_apply() {
    let gate = Arc::new(Notify::new());
    let h = harness(
        MockIdeaService::new(sample_ideas()).with_delete_gate(Arc::clone(&gate)),
        ScriptedConfirmer::accepting(),
    );
    h.view.activate().await;

    let first = IdeaId::from(1u64);
    let third = IdeaId::from(3u64);
    let (a, b, ()) = tokio::join!(
        h.view.request_delete(&first),
        h.view.request_delete(&third),
        async {
            tokio::task::yield_now().await;
            gate.notify_one();
            tokio::task::yield_now().await;
            gate.notify_one();
        }
    );

    assert_eq!(a, DeleteOutcome::Deleted);
    assert_eq!(b, DeleteOutcome::Deleted);
    assert_eq!(ids(&h.view.ideas()), vec![IdeaId::from(2u64)]);
    assert_eq!(h.toasts.toasts().len(), 2);
}

#[tokio::test]
async fn test_teardown_during_load_discards_result() {
    let gate = Arc::new(Notify::new());
    let h = harness(
        MockIdeaService::new(sample_ideas()).with_fetch_gate(Arc::clone(&gate)),
        ScriptedConfirmer::default(),
    );

    let (outcome, ()) = tokio::join!(h.view.activate(), async {
        h.view.teardown();
        gate.notify_one();
    });

    assert_eq!(outcome, LoadOutcome::Detached);
    assert_eq!(h.service.fetch_calls(), 1);
    assert!(h.view.ideas().is_empty());
    assert!(h.view.is_loading());
}

#[tokio::test]
async fn test_teardown_during_delete_skips_update_and_toast() {
    let gate = Arc::new(Notify::new());
    let h = harness(
        MockIdeaService::new(sample_ideas()).with_delete_gate(Arc::clone(&gate)),
        ScriptedConfirmer::accepting(),
    );
    h.view.activate().await;

    let id = IdeaId::from(2u64);
    let (outcome, ()) = tokio::join!(h.view.request_delete(&id), async {
        h.view.teardown();
        gate.notify_one();
    });

    assert_eq!(outcome, DeleteOutcome::Detached);
    // The platform call was already in flight and completed
    assert_eq!(h.service.delete_calls(), vec![id]);
    assert_eq!(h.view.ideas(), sample_ideas());
    assert!(h.toasts.toasts().is_empty());
}

#[tokio::test]
async fn test_teardown_before_confirmation_resolves_skips_remote_call() {
    let h = harness(
        MockIdeaService::new(sample_ideas()),
        ScriptedConfirmer::accepting(),
    );
    h.view.activate().await;
    h.view.teardown();

    let outcome = h.view.request_delete(&IdeaId::from(1u64)).await;

    assert_eq!(outcome, DeleteOutcome::Detached);
    assert!(h.service.delete_calls().is_empty());
}

#[tokio::test]
async fn test_instances_do_not_share_state() {
    let service = Arc::new(MockIdeaService::new(sample_ideas()));
    let toasts = Arc::new(ToastLog::new());
    let confirmer = Arc::new(ScriptedConfirmer::default());
    let first = MyIdeasView::new(
        Arc::clone(&service),
        Arc::clone(&confirmer),
        Arc::clone(&toasts),
    );
    let second = MyIdeasView::new(Arc::clone(&service), confirmer, toasts);

    first.activate().await;
    first.toggle_menu(&IdeaId::from(1u64));
    second.activate().await;

    assert_eq!(service.fetch_calls(), 2);
    assert_eq!(second.active_menu(), None);
}
