/// Display category of one option within a rendered question.
///
/// Derived from session state alone; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionState {
    /// The designated correct option, once correctness is shown.
    Correct,
    /// The user's pick when it is not the correct option, once correctness is shown.
    IncorrectSelected,
    /// Any other option once correctness is shown.
    NeutralRevealed,
    /// The current pick while answering.
    ActiveSelected,
    /// Default styling.
    InteractiveUnselected,
}

impl OptionState {
    /// True for the two states shown before correctness is revealed.
    #[must_use]
    pub fn is_pre_reveal(self) -> bool {
        matches!(self, Self::ActiveSelected | Self::InteractiveUnselected)
    }
}

/// The booleans classification is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct OptionFacts {
    pub show_correctness: bool,
    pub answering: bool,
    pub is_selected: bool,
    pub is_correct_option: bool,
}

impl OptionFacts {
    /// Priority order: correct, wrong pick, other revealed, active pick, default.
    pub(crate) fn classify(self) -> OptionState {
        if self.show_correctness {
            if self.is_correct_option {
                OptionState::Correct
            } else if self.is_selected {
                OptionState::IncorrectSelected
            } else {
                OptionState::NeutralRevealed
            }
        } else if self.answering && self.is_selected {
            OptionState::ActiveSelected
        } else {
            OptionState::InteractiveUnselected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_facts() -> Vec<OptionFacts> {
        let mut out = Vec::with_capacity(16);
        for bits in 0_u8..16 {
            out.push(OptionFacts {
                show_correctness: bits & 1 != 0,
                answering: bits & 2 != 0,
                is_selected: bits & 4 != 0,
                is_correct_option: bits & 8 != 0,
            });
        }
        out
    }

    #[test]
    fn correct_option_wins_over_selection_once_shown() {
        for facts in all_facts() {
            if facts.show_correctness && facts.is_correct_option {
                assert_eq!(facts.classify(), OptionState::Correct, "{facts:?}");
            }
        }
    }

    #[test]
    fn revealed_states_never_report_pre_reveal() {
        for facts in all_facts() {
            assert_eq!(
                facts.classify().is_pre_reveal(),
                !facts.show_correctness,
                "{facts:?}"
            );
        }
    }

    #[test]
    fn wrong_pick_is_incorrect_selected() {
        let facts = OptionFacts {
            show_correctness: true,
            answering: true,
            is_selected: true,
            is_correct_option: false,
        };
        assert_eq!(facts.classify(), OptionState::IncorrectSelected);
    }

    #[test]
    fn selection_only_highlights_while_answering() {
        let answering = OptionFacts {
            answering: true,
            is_selected: true,
            ..OptionFacts::default()
        };
        assert_eq!(answering.classify(), OptionState::ActiveSelected);

        let browsing = OptionFacts {
            is_selected: true,
            ..OptionFacts::default()
        };
        assert_eq!(browsing.classify(), OptionState::InteractiveUnselected);
    }
}
