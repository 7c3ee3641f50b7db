//! Header model selector.
//!
//! Presentational page state: the selected model is shown in the header and
//! cycled from the keyboard. It is not part of the session and never
//! affects the current conversation, the sidebar or the typing relay.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelector {
    models: Vec<String>,
    selected: usize,
}

impl ModelSelector {
    /// Starts on `default`, or on the first model when it is not listed.
    pub fn new(models: Vec<String>, default: &str) -> Self {
        let selected = models
            .iter()
            .position(|model| model == default)
            .unwrap_or(0);
        Self { models, selected }
    }

    /// The selected model, or `None` when no models are configured.
    pub fn current(&self) -> Option<&str> {
        self.models.get(self.selected).map(String::as_str)
    }

    /// Moves to the next model, wrapping at the end of the list.
    pub fn cycle(&mut self) -> Option<&str> {
        if self.models.is_empty() {
            return None;
        }
        self.selected = (self.selected + 1) % self.models.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(default: &str) -> ModelSelector {
        ModelSelector::new(
            vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()],
            default,
        )
    }

    #[test]
    fn test_starts_on_default_model() {
        assert_eq!(selector("beta").current(), Some("beta"));
        assert_eq!(selector("missing").current(), Some("alpha"));
    }

    #[test]
    fn test_cycle_wraps() {
        let mut models = selector("beta");
        assert_eq!(models.cycle(), Some("gamma"));
        assert_eq!(models.cycle(), Some("alpha"));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut models = ModelSelector::new(Vec::new(), "alpha");
        assert_eq!(models.current(), None);
        assert_eq!(models.cycle(), None);
    }
}
