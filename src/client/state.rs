/// What the answer area should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    ShowingResult { answer: String, disclaimer: String },
    ShowingError(String),
}

impl ViewState {
    pub fn loading_visible(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn result_visible(&self) -> bool {
        matches!(self, ViewState::ShowingResult { .. })
    }
}
