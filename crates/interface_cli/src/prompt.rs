//! Interactive prompts

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use domain_disclosure::{
    AnswerInput, DisqualificationChoice, GroupKind, Progress, QuestionGroup, SegmentKind,
};

/// What the user did on a question screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAction {
    Answer(AnswerInput),
    Previous,
    Next,
}

/// Everything a prompt needs to render one question screen
#[derive(Debug, Clone)]
pub struct GroupScreen {
    pub group: QuestionGroup,
    pub progress: Progress,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl GroupScreen {
    /// Text shown above the options: progress, question head and list heading
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "質問 {}/{}（回答済み {}%）",
            self.progress.current + 1,
            self.progress.total,
            self.progress.percent()
        )];
        for segment in &self.group.head {
            lines.push(match segment.kind {
                SegmentKind::Normal => segment.text.clone(),
                SegmentKind::Precaution => format!("  {}", segment.text),
            });
        }
        if let Some(heading) = &self.group.list_heading {
            lines.push(format!("【{}】", heading));
        }
        lines
    }

    /// Selectable options, in display order, with the action each one maps to
    pub fn options(&self) -> Vec<(String, GroupAction)> {
        let mut options = match self.group.kind {
            GroupKind::Single => vec![
                ("はい".to_string(), GroupAction::Answer(AnswerInput::yes())),
                ("いいえ".to_string(), GroupAction::Answer(AnswerInput::no())),
            ],
            GroupKind::Checklist => {
                let mut options: Vec<(String, GroupAction)> = self
                    .group
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let label = match &item.detail {
                            Some(detail) => format!("{}（{}）", item.title, detail),
                            None => item.title.clone(),
                        };
                        (label, GroupAction::Answer(AnswerInput::check(index)))
                    })
                    .collect();
                options.push((
                    "いずれも該当しない".to_string(),
                    GroupAction::Answer(AnswerInput::none_apply()),
                ));
                options
            }
        };
        if self.can_go_previous {
            options.push(("← 前の質問へ".to_string(), GroupAction::Previous));
        }
        if self.can_go_next {
            options.push(("次の質問へ →".to_string(), GroupAction::Next));
        }
        options
    }
}

/// Source of user decisions for a session
pub trait Prompter {
    fn ask_group(&mut self, screen: &GroupScreen) -> anyhow::Result<GroupAction>;

    fn ask_disqualification(
        &mut self,
        group: &QuestionGroup,
        message: &str,
    ) -> anyhow::Result<DisqualificationChoice>;
}

/// Prompts on the terminal with `dialoguer`
///
/// Everything is drawn on stderr next to the `Select` menus; stdout is left
/// to the completion payload.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Prompter for DialoguerPrompter {
    fn ask_group(&mut self, screen: &GroupScreen) -> anyhow::Result<GroupAction> {
        eprintln!();
        for line in screen.header_lines() {
            eprintln!("{}", line);
        }

        let options = screen.options();
        let labels: Vec<&str> = options.iter().map(|(label, _)| label.as_str()).collect();
        let selection = Select::with_theme(&self.theme)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(options[selection].1)
    }

    fn ask_disqualification(
        &mut self,
        _group: &QuestionGroup,
        message: &str,
    ) -> anyhow::Result<DisqualificationChoice> {
        eprintln!();
        eprintln!("{}", message);
        let choices = [
            ("お申込みを取りやめる", DisqualificationChoice::CancelApplication),
            ("回答を修正する", DisqualificationChoice::ReturnToRevise),
        ];
        let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();
        let selection = Select::with_theme(&self.theme)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(choices[selection].1)
    }
}
