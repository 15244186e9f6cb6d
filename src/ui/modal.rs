use crate::domain::Card;

/// Identifies one of the board's dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    CardDetail,
    CategoryManager,
    NewLane,
}

/// Content of the currently open dialog.
#[derive(Debug, Clone)]
pub enum Modal {
    /// Card detail view, holding the card as fetched when it was opened.
    CardDetail(Card),
    CategoryManager,
    NewLane,
}

impl Modal {
    pub fn id(&self) -> ModalId {
        match self {
            Modal::CardDetail(_) => ModalId::CardDetail,
            Modal::CategoryManager => ModalId::CategoryManager,
            Modal::NewLane => ModalId::NewLane,
        }
    }
}

/// Dialog visibility state. At most one modal is open at a time; opening a
/// new one replaces whatever was showing.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    open: Option<Modal>,
}

impl ModalState {
    pub fn open(&mut self, modal: Modal) {
        self.open = Some(modal);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.as_ref().map(Modal::id) == Some(id)
    }

    pub fn current(&self) -> Option<&Modal> {
        self.open.as_ref()
    }

    /// Handles a click that landed on a dialog backdrop: closes the dialog
    /// if it is the one showing, otherwise does nothing.
    pub fn backdrop_clicked(&mut self, id: ModalId) {
        if self.is_open(id) {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_replaces_current_modal() {
        let mut state = ModalState::default();
        state.open(Modal::NewLane);
        assert!(state.is_open(ModalId::NewLane));

        state.open(Modal::CategoryManager);
        assert!(state.is_open(ModalId::CategoryManager));
        assert!(!state.is_open(ModalId::NewLane));
    }

    #[test]
    fn test_card_detail_holds_fetched_card() {
        let mut state = ModalState::default();
        state.open(Modal::CardDetail(Card::test_fixture(7, 1, 1.0)));

        match state.current() {
            Some(Modal::CardDetail(card)) => assert_eq!(card.id, 7),
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn test_backdrop_click_closes_only_matching_modal() {
        let mut state = ModalState::default();
        state.open(Modal::NewLane);

        state.backdrop_clicked(ModalId::CategoryManager);
        assert!(state.is_open(ModalId::NewLane));

        state.backdrop_clicked(ModalId::NewLane);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = ModalState::default();
        state.close();
        assert!(state.current().is_none());

        state.open(Modal::NewLane);
        state.close();
        state.close();
        assert!(state.current().is_none());
    }
}
