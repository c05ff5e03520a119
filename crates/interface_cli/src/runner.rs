//! Drives one questionnaire session from a prompter

use domain_disclosure::{
    DeferredEvaluator, QuestionnaireState, Settlement, DISQUALIFICATION_MESSAGE,
};

use crate::prompt::{GroupAction, GroupScreen, Prompter};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    Cancelled,
}

enum View {
    Question(GroupScreen),
    Dialog(domain_disclosure::QuestionGroup),
    Finished(SessionOutcome),
}

/// Runs the session until it completes or the applicant cancels
pub async fn run_session(
    evaluator: &DeferredEvaluator,
    prompter: &mut impl Prompter,
) -> anyhow::Result<SessionOutcome> {
    let engine = evaluator.engine();

    loop {
        let view = {
            let engine = engine.lock().await;
            match engine.state() {
                QuestionnaireState::InProgress { .. } => View::Question(GroupScreen {
                    group: engine.current_group().clone(),
                    progress: engine.progress(),
                    can_go_previous: engine.can_go_previous(),
                    can_go_next: engine.can_go_next(),
                }),
                QuestionnaireState::Disqualified { group_index } => {
                    View::Dialog(engine.group(group_index).clone())
                }
                QuestionnaireState::Completed => View::Finished(SessionOutcome::Completed),
                QuestionnaireState::Cancelled => View::Finished(SessionOutcome::Cancelled),
            }
        };

        match view {
            View::Question(screen) => match prompter.ask_group(&screen)? {
                GroupAction::Answer(input) => {
                    evaluator.answer(input).await?;
                    if let Some(settlement) = evaluator.flush().await {
                        if let Settlement::Applied(transition) = settlement? {
                            tracing::debug!(?transition, "Answer evaluated");
                        }
                    }
                }
                GroupAction::Previous => {
                    engine.lock().await.go_previous()?;
                }
                GroupAction::Next => {
                    engine.lock().await.go_next()?;
                }
            },
            View::Dialog(group) => {
                let choice = prompter.ask_disqualification(&group, DISQUALIFICATION_MESSAGE)?;
                engine.lock().await.resolve_disqualification(choice)?;
            }
            View::Finished(outcome) => return Ok(outcome),
        }
    }
}
