// src/view_models.rs

/// Visual state of one answer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStatus {
    Idle,
    Selected,
    Correct,
    Incorrect,
    Dimmed,
}

impl OptionStatus {
    pub fn for_option(index: u8, chosen: Option<u8>, correct: u8, revealed: bool) -> Self {
        let is_chosen = chosen == Some(index);
        if !revealed {
            if is_chosen {
                OptionStatus::Selected
            } else {
                OptionStatus::Idle
            }
        } else if index == correct {
            OptionStatus::Correct
        } else if is_chosen {
            OptionStatus::Incorrect
        } else {
            OptionStatus::Dimmed
        }
    }
}

#[derive(Clone, Debug)]
pub struct OptionVm {
    pub index: u8,
    pub label: char,
    pub text: String,
    pub status: OptionStatus,
    pub enabled: bool,
}

impl OptionVm {
    pub fn caption(&self) -> String {
        format!("{}. {}", self.label, self.text)
    }
}

#[derive(Clone, Debug)]
pub struct QuestionCardVm {
    pub id: u32,
    pub header: String,   // topic · difficulty · lecture
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub verdict: Option<bool>, // Some(..) once revealed
    pub explanation: Option<String>,
    pub position: String, // "Question i of n"
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub fraction: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerVm {
    pub text: String,
    pub warning: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsVm {
    pub correct: usize,
    pub total: usize,
    pub mode: &'static str,
    pub filters: String,
    pub finished: bool,
}

impl StatsVm {
    pub fn score(&self) -> String {
        format!("{} / {}", self.correct, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_options_only_show_the_selection() {
        assert_eq!(OptionStatus::for_option(1, Some(1), 2, false), OptionStatus::Selected);
        assert_eq!(OptionStatus::for_option(2, Some(1), 2, false), OptionStatus::Idle);
    }

    #[test]
    fn revealed_options_mark_right_and_wrong() {
        assert_eq!(OptionStatus::for_option(2, Some(1), 2, true), OptionStatus::Correct);
        assert_eq!(OptionStatus::for_option(1, Some(1), 2, true), OptionStatus::Incorrect);
        assert_eq!(OptionStatus::for_option(0, Some(1), 2, true), OptionStatus::Dimmed);
        assert_eq!(OptionStatus::for_option(2, None, 2, true), OptionStatus::Correct);
    }
}
