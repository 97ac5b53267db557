use chrono::{DateTime, Utc};
use contracts::domain::inbox::InboxItem;
use leptos::prelude::*;
use std::collections::HashSet;

/// The three invitation buckets. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    New,
    Received,
    Sent,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::New, Category::Received, Category::Sent];

    pub fn label(self) -> &'static str {
        match self {
            Category::New => "New",
            Category::Received => "Received",
            Category::Sent => "Sent",
        }
    }

    /// Banner text when a listing call fails without a `detail` body.
    pub fn fetch_failure_fallback(self) -> &'static str {
        match self {
            Category::New => "Failed to fetch New items",
            Category::Received => "Failed to fetch received invitations",
            Category::Sent => "Failed to fetch sent invitations",
        }
    }

    fn index(self) -> usize {
        match self {
            Category::New => 0,
            Category::Received => 1,
            Category::Sent => 2,
        }
    }
}

/// One category's list, replaced wholesale by its owning refresh.
///
/// `generation` tracks the newest refresh issued for this category so
/// that a slow, superseded response cannot overwrite a fresher one.
#[derive(Clone, Debug, Default)]
pub struct CategoryState {
    pub items: Vec<InboxItem>,
    pub has_loaded_once: bool,
    generation: u64,
}

/// Composed UI state: the active tab, the three per-category lists and
/// the set of item ids with an in-flight action.
#[derive(Clone, Debug)]
pub struct InboxState {
    pub active: Category,
    categories: [CategoryState; 3],
    busy: HashSet<String>,
}

impl Default for InboxState {
    fn default() -> Self {
        Self {
            active: Category::New,
            categories: Default::default(),
            busy: HashSet::new(),
        }
    }
}

impl InboxState {
    pub fn category(&self, category: Category) -> &CategoryState {
        &self.categories[category.index()]
    }

    pub fn items(&self, category: Category) -> &[InboxItem] {
        &self.category(category).items
    }

    /// Start a refresh for `category` and return its generation token.
    pub fn begin_refresh(&mut self, category: Category) -> u64 {
        let state = &mut self.categories[category.index()];
        state.generation += 1;
        state.generation
    }

    /// Replace `category`'s items with the server list, in server
    /// order, if `generation` is still the newest refresh issued for
    /// that category. A superseded response is discarded.
    pub fn commit_refresh(
        &mut self,
        category: Category,
        generation: u64,
        items: Vec<InboxItem>,
    ) -> bool {
        let state = &mut self.categories[category.index()];
        if state.generation != generation {
            return false;
        }
        state.items = items;
        state.has_loaded_once = true;
        true
    }

    /// Drop the item with `id` from `category` after a confirmed
    /// server success. Returns whether anything was removed.
    pub fn remove_item(&mut self, category: Category, id: &str) -> bool {
        let state = &mut self.categories[category.index()];
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        state.items.len() < before
    }

    pub fn set_busy(&mut self, id: &str) {
        self.busy.insert(id.to_string());
    }

    pub fn clear_busy(&mut self, id: &str) {
        self.busy.remove(id);
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.busy.contains(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Positive,
    Negative,
}

/// Short-lived popup describing the outcome of the most recent action.
#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn positive(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Positive,
            created_at: Utc::now(),
        }
    }

    pub fn negative(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Negative,
            created_at: Utc::now(),
        }
    }
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<InboxState> {
    RwSignal::new(InboxState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> InboxItem {
        InboxItem {
            id: id.to_string(),
            display_name: name.to_string(),
            short_bio: None,
            bio: None,
        }
    }

    #[test]
    fn test_commit_replaces_items_in_server_order() {
        let mut state = InboxState::default();
        let generation = state.begin_refresh(Category::New);
        assert!(state.commit_refresh(
            Category::New,
            generation,
            vec![item("b2", "Bob"), item("a1", "Alice")],
        ));
        let items = state.items(Category::New);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "b2");
        assert_eq!(items[1].id, "a1");
        assert!(state.category(Category::New).has_loaded_once);
    }

    #[test]
    fn test_commit_replaces_previous_contents_wholesale() {
        let mut state = InboxState::default();
        let first = state.begin_refresh(Category::Sent);
        state.commit_refresh(Category::Sent, first, vec![item("x", "X"), item("y", "Y")]);
        let second = state.begin_refresh(Category::Sent);
        state.commit_refresh(Category::Sent, second, vec![item("z", "Z")]);
        let items = state.items(Category::Sent);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "z");
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut state = InboxState::default();
        let stale = state.begin_refresh(Category::Received);
        let fresh = state.begin_refresh(Category::Received);
        assert!(state.commit_refresh(Category::Received, fresh, vec![item("inv-8", "B")]));
        // The older response lands afterwards and must not overwrite.
        assert!(!state.commit_refresh(Category::Received, stale, vec![item("inv-7", "A")]));
        let items = state.items(Category::Received);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "inv-8");
    }

    #[test]
    fn test_refreshes_of_different_categories_are_independent() {
        let mut state = InboxState::default();
        let sent = state.begin_refresh(Category::Sent);
        let received = state.begin_refresh(Category::Received);
        // Responses resolve in the opposite order they were issued.
        assert!(state.commit_refresh(Category::Received, received, vec![item("r1", "R")]));
        assert!(state.commit_refresh(Category::Sent, sent, vec![item("s1", "S")]));
        assert_eq!(state.items(Category::Received)[0].id, "r1");
        assert_eq!(state.items(Category::Sent)[0].id, "s1");
        assert!(state.items(Category::New).is_empty());
    }

    #[test]
    fn test_remove_item_deletes_by_id() {
        let mut state = InboxState::default();
        let generation = state.begin_refresh(Category::Received);
        state.commit_refresh(
            Category::Received,
            generation,
            vec![item("inv-7", "A"), item("inv-8", "B")],
        );
        assert!(state.remove_item(Category::Received, "inv-7"));
        let items = state.items(Category::Received);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "inv-8");
    }

    #[test]
    fn test_remove_item_missing_id_is_noop() {
        let mut state = InboxState::default();
        let generation = state.begin_refresh(Category::Sent);
        state.commit_refresh(Category::Sent, generation, vec![item("inv-9", "C")]);
        assert!(!state.remove_item(Category::Sent, "inv-0"));
        assert_eq!(state.items(Category::Sent).len(), 1);
    }

    #[test]
    fn test_remove_only_touches_owning_category() {
        let mut state = InboxState::default();
        for category in Category::ALL {
            let generation = state.begin_refresh(category);
            state.commit_refresh(category, generation, vec![item("dup", "D")]);
        }
        state.remove_item(Category::New, "dup");
        assert!(state.items(Category::New).is_empty());
        assert_eq!(state.items(Category::Received).len(), 1);
        assert_eq!(state.items(Category::Sent).len(), 1);
    }

    #[test]
    fn test_busy_flag_lifecycle() {
        let mut state = InboxState::default();
        assert!(!state.is_busy("inv-9"));
        state.set_busy("inv-9");
        assert!(state.is_busy("inv-9"));
        assert!(!state.is_busy("inv-8"));
        state.clear_busy("inv-9");
        assert!(!state.is_busy("inv-9"));
    }

    #[test]
    fn test_fetch_failure_fallback_texts() {
        assert_eq!(
            Category::New.fetch_failure_fallback(),
            "Failed to fetch New items"
        );
        assert_eq!(
            Category::Received.fetch_failure_fallback(),
            "Failed to fetch received invitations"
        );
        assert_eq!(
            Category::Sent.fetch_failure_fallback(),
            "Failed to fetch sent invitations"
        );
    }

    #[test]
    fn test_not_loaded_until_first_commit() {
        let mut state = InboxState::default();
        assert!(!state.category(Category::New).has_loaded_once);
        state.begin_refresh(Category::New);
        assert!(!state.category(Category::New).has_loaded_once);
    }
}
