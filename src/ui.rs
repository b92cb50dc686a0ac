use dialoguer::{Input, Select, theme::ColorfulTheme};
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub enum Selection {
    Chosen(String),
    Cancelled,
}

/// Interactive prompts used by the commands. Tests swap in scripted answers.
pub trait Selector {
    fn select(&self, label: &str, items: &[String]) -> Selection;

    /// `None` when the operator aborts the prompt.
    fn prompt_input(&self, label: &str) -> Option<String>;
}

pub struct CliUi {
    theme: ColorfulTheme,
}

impl CliUi {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Selector for CliUi {
    fn select(&self, label: &str, items: &[String]) -> Selection {
        // Escape, q and an interrupted terminal all count as a cancel.
        let picked = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(0)
            .max_length(items.len().max(1))
            .interact_opt();

        match picked {
            Ok(Some(index)) => match items.get(index) {
                Some(item) => Selection::Chosen(item.clone()),
                None => Selection::Cancelled,
            },
            Ok(None) => Selection::Cancelled,
            Err(e) => {
                debug!("Selection aborted: {}", e);
                Selection::Cancelled
            }
        }
    }

    fn prompt_input(&self, label: &str) -> Option<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .interact_text()
            .map_err(|e| debug!("Prompt aborted: {}", e))
            .ok()
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::{Selection, Selector};

    /// Replays fixed answers and records what was offered.
    pub struct ScriptedUi {
        pub choice: Option<usize>,
        pub input: Option<String>,
        pub offered: RefCell<Vec<String>>,
    }

    impl ScriptedUi {
        pub fn choosing(index: usize) -> Self {
            Self {
                choice: Some(index),
                input: None,
                offered: RefCell::new(Vec::new()),
            }
        }

        pub fn cancelling() -> Self {
            Self {
                choice: None,
                input: None,
                offered: RefCell::new(Vec::new()),
            }
        }

        pub fn answering(input: &str) -> Self {
            Self {
                choice: None,
                input: Some(input.to_string()),
                offered: RefCell::new(Vec::new()),
            }
        }
    }

    impl Selector for ScriptedUi {
        fn select(&self, _label: &str, items: &[String]) -> Selection {
            self.offered.borrow_mut().extend(items.iter().cloned());
            match self.choice.and_then(|i| items.get(i)) {
                Some(item) => Selection::Chosen(item.clone()),
                None => Selection::Cancelled,
            }
        }

        fn prompt_input(&self, _label: &str) -> Option<String> {
            self.input.clone()
        }
    }
}
