//! Tests for the deferred evaluator

use std::time::Duration;

use domain_disclosure::{
    AnswerInput, DeferredEvaluator, QuestionnaireState, Settlement, Transition,
};
use test_utils::{BankFixtures, EngineHarness, Recorders, SettingsFixtures};

fn evaluator() -> (DeferredEvaluator, Recorders) {
    let (engine, recorders) = EngineHarness::new(BankFixtures::three_singles()).split();
    (DeferredEvaluator::new(engine), recorders)
}

#[tokio::test(start_paused = true)]
async fn test_answer_is_evaluated_after_delay() {
    let (evaluator, _recorders) = evaluator();
    assert_eq!(evaluator.delay(), Duration::from_millis(300));

    evaluator.answer(AnswerInput::no()).await.unwrap();
    {
        let engine = evaluator.engine();
        let engine = engine.lock().await;
        assert_eq!(engine.current_index(), 0);
        assert!(engine.pending().is_some());
    }

    let settlement = evaluator.flush().await.unwrap().unwrap();
    assert_eq!(
        settlement,
        Settlement::Applied(Transition::Advanced { from: 0, to: 1 })
    );
    assert_eq!(evaluator.engine().lock().await.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_second_answer_supersedes_first() {
    let (evaluator, recorders) = evaluator();

    evaluator.answer(AnswerInput::yes()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    evaluator.answer(AnswerInput::no()).await.unwrap();

    let settlement = evaluator.flush().await.unwrap().unwrap();
    assert_eq!(
        settlement,
        Settlement::Applied(Transition::Advanced { from: 0, to: 1 })
    );
    assert_eq!(recorders.handler.count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_answers_settle_latest_ticket() {
    let (evaluator, recorders) = evaluator();

    let (first, second) = tokio::join!(
        evaluator.answer(AnswerInput::no()),
        evaluator.answer(AnswerInput::no())
    );
    assert_eq!(first.unwrap().group_index(), 0);
    assert_eq!(second.unwrap().group_index(), 0);

    let settlement = evaluator.flush().await.unwrap().unwrap();
    assert_eq!(settlement, Settlement::Applied(Transition::Advanced { from: 0, to: 1 }));

    let engine = evaluator.engine();
    let engine = engine.lock().await;
    assert_eq!(engine.pending(), None);
    assert_eq!(engine.current_index(), 1);
    assert_eq!(recorders.handler.count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_drops_scheduled_evaluation() {
    let (evaluator, _recorders) = evaluator();

    evaluator.answer(AnswerInput::yes()).await.unwrap();
    assert!(evaluator.cancel().await);
    tokio::time::sleep(Duration::from_millis(500)).await;

    let engine = evaluator.engine();
    let engine = engine.lock().await;
    assert_eq!(engine.state(), QuestionnaireState::InProgress { current: 0 });
    assert!(evaluator.flush().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_full_session_through_evaluator_completes() {
    let (evaluator, recorders) = evaluator();

    for _ in 0..3 {
        evaluator.answer(AnswerInput::no()).await.unwrap();
        evaluator.flush().await.unwrap().unwrap();
    }

    assert_eq!(
        evaluator.engine().lock().await.state(),
        QuestionnaireState::Completed
    );
    assert_eq!(recorders.sink.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_zero_delay_setting() {
    let (engine, _recorders) =
        EngineHarness::with_settings(BankFixtures::three_singles(), SettingsFixtures::immediate()).split();
    let evaluator = DeferredEvaluator::new(engine);
    assert_eq!(evaluator.delay(), Duration::ZERO);

    evaluator.answer(AnswerInput::no()).await.unwrap();
    assert!(matches!(
        evaluator.flush().await,
        Some(Ok(Settlement::Applied(Transition::Advanced { from: 0, to: 1 })))
    ));
}

#[tokio::test]
async fn test_flush_without_answer_is_none() {
    let (evaluator, _recorders) = evaluator();
    assert!(evaluator.flush().await.is_none());
}
