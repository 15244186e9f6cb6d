use crate::{
    api::{CardEdit, KanbanApi, MoveCard, NewCard},
    domain::{card::DEFAULT_COLOR, position_for_insertion, Board, Category},
    error::{KanbanError, Result},
    ui::modal::{Modal, ModalId, ModalState},
};

const LANE_ORDER_FAILED: &str = "Failed to save lane order. Please refresh the page.";
const CARD_MOVE_FAILED: &str = "Failed to save card position. Please refresh the page.";
const CARD_DETAILS_FAILED: &str = "Failed to load card details.";
const CATEGORY_CREATED: &str = "Category created successfully!";
const CATEGORY_CREATE_FAILED: &str = "Failed to create category.";
const LANE_CREATE_FAILED: &str = "Failed to create lane.";
const CARD_CREATE_FAILED: &str = "Failed to create card.";
const CARD_UPDATE_FAILED: &str = "Failed to update card.";
const CARD_DELETE_FAILED: &str = "Failed to delete card.";
const LANE_DELETE_FAILED: &str = "Failed to delete lane.";

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A message queued for display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    fn info(message: &str) -> Self {
        Self {
            severity: Severity::Info,
            message: message.to_string(),
        }
    }

    fn error(message: &str) -> Self {
        Self {
            severity: Severity::Error,
            message: message.to_string(),
        }
    }
}

/// Owns the client's view of one board and reacts to UI events: drag drops,
/// modal opens/closes, and form submissions.
///
/// Event handlers follow a uniform error posture: the local state is updated
/// optimistically alongside the network call, and on failure the error is
/// logged and a generic notification is queued. No rollback, no retry. The
/// embedding view drains notifications with [`take_notifications`].
///
/// [`take_notifications`]: BoardController::take_notifications
pub struct BoardController<A: KanbanApi> {
    api: A,
    board: Board,
    categories: Vec<Category>,
    modals: ModalState,
    notifications: Vec<Notification>,
}

impl<A: KanbanApi> BoardController<A> {
    /// Wraps a board snapshot, normalizing lane and card order by position.
    pub fn new(api: A, mut board: Board) -> Self {
        board.sort_lanes();
        for lane in &mut board.lanes {
            lane.sort_cards();
        }

        Self {
            api,
            board,
            categories: Vec::new(),
            modals: ModalState::default(),
            notifications: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn modals(&self) -> &ModalState {
        &self.modals
    }

    /// Drains the queued user-facing notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    // --- drag and drop -----------------------------------------------------

    /// A lane drag finished: `ordered_lane_ids` is every lane id in its new
    /// display order.
    pub async fn finish_lane_drag(&mut self, ordered_lane_ids: Vec<i64>) {
        self.board.apply_lane_order(&ordered_lane_ids);

        if let Err(err) = self.api.reorder_lanes(&ordered_lane_ids).await {
            tracing::error!(error = %err, "error reordering lanes");
            self.notify(Notification::error(LANE_ORDER_FAILED));
        }
    }

    /// A card drag finished: the card landed at `new_index` within the lane
    /// `target_lane_id`. Allocates the card's fractional position from its
    /// new neighbors and persists the move.
    pub async fn finish_card_drag(&mut self, card_id: i64, target_lane_id: i64, new_index: usize) {
        if let Err(err) = self.try_finish_card_drag(card_id, target_lane_id, new_index).await {
            tracing::error!(error = %err, card_id, "error moving card");
            self.notify(Notification::error(CARD_MOVE_FAILED));
        }
    }

    async fn try_finish_card_drag(
        &mut self,
        card_id: i64,
        target_lane_id: i64,
        new_index: usize,
    ) -> Result<()> {
        let source_lane_id = self
            .board
            .card(card_id)
            .ok_or(KanbanError::CardNotFound(card_id))?
            .lane_id;
        let target_len = self
            .board
            .lane(target_lane_id)
            .ok_or(KanbanError::LaneNotFound(target_lane_id))?
            .cards
            .len();

        // Valid drop slots in the target lane once the card is there.
        let slots = if source_lane_id == target_lane_id {
            target_len
        } else {
            target_len + 1
        };
        if new_index >= slots {
            return Err(KanbanError::DropIndexOutOfRange {
                index: new_index,
                len: slots,
            });
        }

        let card = self
            .board
            .take_card(card_id)
            .ok_or(KanbanError::CardNotFound(card_id))?;
        let lane = self
            .board
            .lane_mut(target_lane_id)
            .ok_or(KanbanError::LaneNotFound(target_lane_id))?;
        lane.cards.insert(new_index, card);

        // The moved card's own slot carries its stale position; the
        // allocator never reads it.
        let position = position_for_insertion(&lane.position_snapshot(), new_index);
        let moved = &mut lane.cards[new_index];
        moved.position = position;
        moved.lane_id = target_lane_id;

        self.api
            .move_card(
                card_id,
                &MoveCard {
                    lane_id: target_lane_id,
                    position,
                },
            )
            .await
    }

    // --- modals ------------------------------------------------------------

    /// Opens the card detail modal after fetching the card's current state.
    pub async fn open_card_modal(&mut self, card_id: i64) {
        match self.api.fetch_card(card_id).await {
            Ok(card) => self.modals.open(Modal::CardDetail(card)),
            Err(err) => {
                tracing::error!(error = %err, card_id, "error loading card details");
                self.notify(Notification::error(CARD_DETAILS_FAILED));
            }
        }
    }

    pub fn close_card_modal(&mut self) {
        self.modals.backdrop_clicked(ModalId::CardDetail);
    }

    /// Opens the category manager, refreshing the category list first.
    pub async fn open_category_modal(&mut self) {
        self.refresh_categories().await;
        self.modals.open(Modal::CategoryManager);
    }

    pub fn close_category_modal(&mut self) {
        self.modals.backdrop_clicked(ModalId::CategoryManager);
    }

    pub fn open_lane_modal(&mut self) {
        self.modals.open(Modal::NewLane);
    }

    pub fn close_lane_modal(&mut self) {
        self.modals.backdrop_clicked(ModalId::NewLane);
    }

    /// A click landed on the backdrop of the given dialog.
    pub fn backdrop_clicked(&mut self, id: ModalId) {
        self.modals.backdrop_clicked(id);
    }

    // --- categories --------------------------------------------------------

    /// Reloads the category list. Failures are logged but not surfaced.
    pub async fn refresh_categories(&mut self) {
        match self.api.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(err) => tracing::error!(error = %err, "error loading categories"),
        }
    }

    /// Submits the new-category form.
    pub async fn create_category(&mut self, name: &str, color: &str) {
        if let Err(err) = self.try_create_category(name, color).await {
            tracing::error!(error = %err, "error creating category");
            self.notify(Notification::error(CATEGORY_CREATE_FAILED));
        }
    }

    async fn try_create_category(&mut self, name: &str, color: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(KanbanError::NameRequired);
        }
        let color = if color.trim().is_empty() {
            DEFAULT_COLOR
        } else {
            color.trim()
        };

        self.api.create_category(name, color).await?;
        self.refresh_categories().await;
        self.notify(Notification::info(CATEGORY_CREATED));
        Ok(())
    }

    // --- lanes -------------------------------------------------------------

    /// Submits the new-lane form and appends the created lane to the board.
    pub async fn create_lane(&mut self, title: &str) {
        if let Err(err) = self.try_create_lane(title).await {
            tracing::error!(error = %err, "error creating lane");
            self.notify(Notification::error(LANE_CREATE_FAILED));
        }
    }

    async fn try_create_lane(&mut self, title: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(KanbanError::TitleRequired);
        }

        let lane = self.api.create_lane(title).await?;
        self.board.lanes.push(lane);
        self.close_lane_modal();
        Ok(())
    }

    /// Deletes a lane and all its cards.
    pub async fn delete_lane(&mut self, lane_id: i64) {
        if let Err(err) = self.try_delete_lane(lane_id).await {
            tracing::error!(error = %err, lane_id, "error deleting lane");
            self.notify(Notification::error(LANE_DELETE_FAILED));
        }
    }

    async fn try_delete_lane(&mut self, lane_id: i64) -> Result<()> {
        if self.board.lane(lane_id).is_none() {
            return Err(KanbanError::LaneNotFound(lane_id));
        }
        self.api.delete_lane(lane_id).await?;
        self.board.remove_lane(lane_id);
        Ok(())
    }

    // --- cards -------------------------------------------------------------

    /// Submits the new-card form and appends the created card to its lane.
    pub async fn create_card(&mut self, lane_id: i64, title: &str, category_ids: Vec<i64>) {
        if let Err(err) = self.try_create_card(lane_id, title, category_ids).await {
            tracing::error!(error = %err, lane_id, "error creating card");
            self.notify(Notification::error(CARD_CREATE_FAILED));
        }
    }

    async fn try_create_card(
        &mut self,
        lane_id: i64,
        title: &str,
        category_ids: Vec<i64>,
    ) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(KanbanError::TitleRequired);
        }
        if self.board.lane(lane_id).is_none() {
            return Err(KanbanError::LaneNotFound(lane_id));
        }

        let card = self
            .api
            .create_card(&NewCard {
                title: title.to_string(),
                lane_id,
                category_ids,
            })
            .await?;

        if let Some(lane) = self.board.lane_mut(lane_id) {
            lane.cards.push(card);
        }
        Ok(())
    }

    /// Submits the card edit form and swaps in the server's updated copy.
    pub async fn update_card(&mut self, card_id: i64, edit: CardEdit) {
        if let Err(err) = self.try_update_card(card_id, edit).await {
            tracing::error!(error = %err, card_id, "error updating card");
            self.notify(Notification::error(CARD_UPDATE_FAILED));
        }
    }

    async fn try_update_card(&mut self, card_id: i64, edit: CardEdit) -> Result<()> {
        if self.board.card(card_id).is_none() {
            return Err(KanbanError::CardNotFound(card_id));
        }

        let updated = self.api.update_card(card_id, &edit).await?;

        for lane in &mut self.board.lanes {
            if let Some(index) = lane.card_index(card_id) {
                lane.cards[index] = updated.clone();
                break;
            }
        }

        let modal_shows_card =
            matches!(self.modals.current(), Some(Modal::CardDetail(c)) if c.id == card_id);
        if modal_shows_card {
            self.modals.open(Modal::CardDetail(updated));
        }
        Ok(())
    }

    /// Deletes a card, closing its detail modal if it is showing.
    pub async fn delete_card(&mut self, card_id: i64) {
        if let Err(err) = self.try_delete_card(card_id).await {
            tracing::error!(error = %err, card_id, "error deleting card");
            self.notify(Notification::error(CARD_DELETE_FAILED));
        }
    }

    async fn try_delete_card(&mut self, card_id: i64) -> Result<()> {
        if self.board.card(card_id).is_none() {
            return Err(KanbanError::CardNotFound(card_id));
        }
        self.api.delete_card(card_id).await?;
        self.board.remove_card(card_id);

        let modal_shows_card =
            matches!(self.modals.current(), Some(Modal::CardDetail(c)) if c.id == card_id);
        if modal_shows_card {
            self.modals.close();
        }
        Ok(())
    }
}
