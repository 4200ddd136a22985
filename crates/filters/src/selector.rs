//! Interactive filter selection.
//!
//! One call to [`FilterSelector::interactive_make`] is one round trip:
//! prompt for a filter, then either report that the user backed out or
//! hand over to the chosen filter's own set-up.

use crate::console::Console;
use crate::descriptor::FilterDescriptor;
use crate::error::{FilterError, Result};
use crate::registry::FilterRegistry;
use crate::traits::CardFilter;

/// Label of the option that backs out of the selection.
pub const BACK_LABEL: &str = "<- Back";

/// Prompt shown above the list of filters.
pub const SELECT_PROMPT: &str = "Select Filter:";

/// One entry of the choice list.
#[derive(Debug, Clone, Copy)]
pub enum Choice<'r> {
    Filter(&'r FilterDescriptor),
    Back,
}

impl Choice<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            Choice::Filter(descriptor) => descriptor.name(),
            Choice::Back => BACK_LABEL,
        }
    }
}

/// Presents a registry's filters and builds the one the user picks.
pub struct FilterSelector<'r> {
    registry: &'r FilterRegistry,
}

impl<'r> FilterSelector<'r> {
    pub fn new(registry: &'r FilterRegistry) -> Self {
        Self { registry }
    }

    /// Registry filters in registry order, with Back last.
    pub fn choices(&self) -> Vec<Choice<'r>> {
        self.registry
            .list()
            .iter()
            .map(Choice::Filter)
            .chain(std::iter::once(Choice::Back))
            .collect()
    }

    pub fn choice_labels(&self) -> Vec<String> {
        self.choices()
            .iter()
            .map(|choice| choice.label().to_string())
            .collect()
    }

    /// Ask the user to pick one of [`choices`](Self::choices).
    ///
    /// # Errors
    /// * `Console` - The console failed to prompt
    /// * `InternalInconsistency` - The console answered with a label it was
    ///   not offered
    pub fn select(&self, console: &mut dyn Console) -> Result<Choice<'r>> {
        let choices = self.choices();
        let labels: Vec<String> = choices
            .iter()
            .map(|choice| choice.label().to_string())
            .collect();

        let selected = console.prompt_choice(SELECT_PROMPT, &labels)?;

        choices
            .into_iter()
            .find(|choice| choice.label() == selected)
            .ok_or(FilterError::InternalInconsistency(selected))
    }

    /// Let the user pick a filter and configure it for `board_id`.
    ///
    /// ## Algorithm
    /// 1. Prompt with every filter name plus the back option
    /// 2. Back: return `SelectionCancelled` without touching any filter
    /// 3. Otherwise announce the choice and return whatever the filter's
    ///    set-up returns
    ///
    /// # Returns
    /// * `Ok(Box<dyn CardFilter>)` - The configured filter
    /// * `Err(SelectionCancelled)` - The user chose the back option
    /// * `Err(SetUp)` - The filter's set-up failed; the inner error is the
    ///   filter's own
    pub fn interactive_make(
        &self,
        console: &mut dyn Console,
        board_id: &str,
    ) -> Result<Box<dyn CardFilter>> {
        match self.select(console)? {
            Choice::Back => Err(FilterError::SelectionCancelled),
            Choice::Filter(descriptor) => Self::configure(descriptor, console, board_id),
        }
    }

    /// Configure a filter picked by name instead of by prompt.
    pub fn make_named(
        &self,
        name: &str,
        console: &mut dyn Console,
        board_id: &str,
    ) -> Result<Box<dyn CardFilter>> {
        let descriptor = self
            .registry
            .get(name)
            .ok_or_else(|| FilterError::UnknownFilter(name.to_string()))?;
        Self::configure(descriptor, console, board_id)
    }

    fn configure(
        descriptor: &FilterDescriptor,
        console: &mut dyn Console,
        board_id: &str,
    ) -> Result<Box<dyn CardFilter>> {
        console.write_line(&format!("Configure Filter: {}", descriptor.name()))?;
        descriptor
            .set_up(console, board_id)
            .map_err(FilterError::SetUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FilterCandidate;
    use crate::source::StaticSource;
    use anyhow::bail;
    use board::Card;
    use std::collections::VecDeque;
    use std::io;
    use std::sync::Mutex;

    /// Console that replays canned answers and records everything shown.
    #[derive(Default)]
    struct ScriptedConsole {
        answers: VecDeque<String>,
        offered: Vec<Vec<String>>,
        lines: Vec<String>,
    }

    impl ScriptedConsole {
        fn answering(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Self::default()
            }
        }

        fn next(&mut self) -> io::Result<String> {
            self.answers
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no answer"))
        }
    }

    impl Console for ScriptedConsole {
        fn prompt_choice(&mut self, _message: &str, options: &[String]) -> io::Result<String> {
            self.offered.push(options.to_vec());
            self.next()
        }

        fn prompt_text(&mut self, _message: &str) -> io::Result<String> {
            self.next()
        }

        fn write_line(&mut self, message: &str) -> io::Result<()> {
            self.lines.push(message.to_string());
            Ok(())
        }
    }

    /// Board ids passed to any set-up in this module, tagged by filter.
    static SET_UP_CALLS: Mutex<Vec<(&'static str, String)>> = Mutex::new(Vec::new());

    struct Recorded {
        name: &'static str,
        board_id: String,
    }

    impl CardFilter for Recorded {
        fn name(&self) -> &str {
            self.name
        }

        fn matches(&self, card: &Card) -> bool {
            card.board_id == self.board_id
        }
    }

    fn record(name: &'static str, board_id: &str) -> anyhow::Result<Box<dyn CardFilter>> {
        SET_UP_CALLS
            .lock()
            .unwrap()
            .push((name, board_id.to_string()));
        Ok(Box::new(Recorded {
            name,
            board_id: board_id.to_string(),
        }))
    }

    fn assignee_set_up(
        _: &mut dyn Console,
        board_id: &str,
    ) -> anyhow::Result<Box<dyn CardFilter>> {
        record("Assignee", board_id)
    }

    fn due_date_set_up(
        _: &mut dyn Console,
        board_id: &str,
    ) -> anyhow::Result<Box<dyn CardFilter>> {
        record("DueDate", board_id)
    }

    fn label_set_up(
        console: &mut dyn Console,
        board_id: &str,
    ) -> anyhow::Result<Box<dyn CardFilter>> {
        let label = console.prompt_text("Label name:")?;
        if label.is_empty() {
            bail!("label name must not be empty");
        }
        record("Label", board_id)
    }

    fn registry() -> FilterRegistry {
        let source = StaticSource::new(vec![
            FilterCandidate::concrete(
                "test::DueDate",
                FilterDescriptor::new("DueDate", due_date_set_up),
            ),
            FilterCandidate::concrete(
                "test::Assignee",
                FilterDescriptor::new("Assignee", assignee_set_up),
            ),
            FilterCandidate::concrete("test::Label", FilterDescriptor::new("Label", label_set_up)),
        ]);
        FilterRegistry::new(&source, "test").unwrap()
    }

    fn calls_for(board_id: &str) -> Vec<(&'static str, String)> {
        SET_UP_CALLS
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, id)| id == board_id)
            .cloned()
            .collect()
    }

    #[test]
    fn test_choice_labels() {
        let registry = registry();
        let selector = FilterSelector::new(&registry);

        assert_eq!(
            selector.choice_labels(),
            vec!["Assignee", "DueDate", "Label", "<- Back"]
        );
    }

    #[test]
    fn test_back_cancels_without_set_up() {
        let registry = registry();
        let selector = FilterSelector::new(&registry);
        let mut console = ScriptedConsole::answering(&[BACK_LABEL]);

        let err = selector
            .interactive_make(&mut console, "board-back")
            .err()
            .unwrap();

        assert!(err.is_cancelled());
        assert!(calls_for("board-back").is_empty());
        assert!(console.lines.is_empty());
    }

    #[test]
    fn test_valid_choice_calls_set_up_once() {
        let registry = registry();
        let selector = FilterSelector::new(&registry);
        let mut console = ScriptedConsole::answering(&["DueDate"]);

        let filter = selector
            .interactive_make(&mut console, "board-due")
            .unwrap();

        assert_eq!(filter.name(), "DueDate");
        assert_eq!(calls_for("board-due"), vec![("DueDate", "board-due".to_string())]);
        assert_eq!(console.lines, vec!["Configure Filter: DueDate".to_string()]);
        assert_eq!(
            console.offered,
            vec![vec!["Assignee", "DueDate", "Label", "<- Back"]]
        );
    }

    #[test]
    fn test_set_up_error_propagates() {
        let registry = registry();
        let selector = FilterSelector::new(&registry);
        let mut console = ScriptedConsole::answering(&["Label", ""]);

        match selector.interactive_make(&mut console, "board-err") {
            Err(FilterError::SetUp(inner)) => {
                assert_eq!(inner.to_string(), "label name must not be empty");
            }
            Err(other) => panic!("expected SetUp, got {:?}", other),
            Ok(_) => panic!("expected SetUp error"),
        }
        assert!(calls_for("board-err").is_empty());
    }

    #[test]
    fn test_unoffered_label_is_inconsistent() {
        let registry = registry();
        let selector = FilterSelector::new(&registry);
        let mut console = ScriptedConsole::answering(&["Priority"]);

        let err = selector
            .interactive_make(&mut console, "board-bad")
            .err()
            .unwrap();

        assert!(matches!(
            err,
            FilterError::InternalInconsistency(ref label) if label == "Priority"
        ));
        assert!(calls_for("board-bad").is_empty());
    }

    #[test]
    fn test_console_failure() {
        let registry = registry();
        let selector = FilterSelector::new(&registry);
        let mut console = ScriptedConsole::default();

        let err = selector
            .interactive_make(&mut console, "board-eof")
            .err()
            .unwrap();
        assert!(matches!(err, FilterError::Console(_)));
    }

    #[test]
    fn test_make_named() {
        let registry = registry();
        let selector = FilterSelector::new(&registry);
        let mut console = ScriptedConsole::default();

        let filter = selector
            .make_named("Assignee", &mut console, "board-named")
            .unwrap();
        assert_eq!(filter.name(), "Assignee");
        assert!(console.offered.is_empty());
        assert_eq!(console.lines, vec!["Configure Filter: Assignee".to_string()]);

        let err = selector
            .make_named("Priority", &mut console, "board-named")
            .err()
            .unwrap();
        assert!(matches!(err, FilterError::UnknownFilter(_)));
        assert_eq!(calls_for("board-named").len(), 1);
    }

    #[test]
    fn test_empty_registry_offers_only_back() {
        let registry = FilterRegistry::new(&StaticSource::default(), "test").unwrap();
        let selector = FilterSelector::new(&registry);

        assert_eq!(selector.choice_labels(), vec![BACK_LABEL]);
    }
}
