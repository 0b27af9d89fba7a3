use dioxus::prelude::*;

use crate::models::MediaKind;

/// One entry in the shared media viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerItem {
    pub kind: MediaKind,
    pub url: String,
    pub alt: String,
    pub poster: Option<String>,
}

/// Modal viewer state. One instance exists process-wide; opening a new
/// list while one is open simply replaces the state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LightboxState {
    pub open: bool,
    pub index: usize,
    pub items: Vec<ViewerItem>,
}

impl LightboxState {
    pub fn opened(items: Vec<ViewerItem>, index: usize) -> Self {
        Self {
            open: true,
            index,
            items,
        }
    }

    /// Closing keeps the items so reopening the same list is cheap.
    pub fn closed(mut self) -> Self {
        self.open = false;
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn current(&self) -> Option<&ViewerItem> {
        self.items.get(self.index)
    }

    /// Bounds used by navigation controls. The store itself does not clamp
    /// `with_index`; callers only navigate where these say they can.
    pub fn has_prev(&self) -> bool {
        self.open && self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.open && self.index + 1 < self.items.len()
    }
}

/// Injected UI-interaction container: the lightbox plus the mobile-menu
/// flag. Copyable handle over shared signals.
#[derive(Clone, Copy)]
pub struct UiStore {
    lightbox: Signal<LightboxState>,
    mobile_menu_open: Signal<bool>,
}

impl UiStore {
    pub fn new() -> Self {
        Self {
            lightbox: Signal::new(LightboxState::default()),
            mobile_menu_open: Signal::new(false),
        }
    }

    pub fn lightbox(&self) -> LightboxState {
        self.lightbox.read().clone()
    }

    pub fn open_lightbox(&mut self, items: Vec<ViewerItem>, index: usize) {
        self.lightbox.set(LightboxState::opened(items, index));
    }

    pub fn close_lightbox(&mut self) {
        let state = self.lightbox.peek().clone();
        self.lightbox.set(state.closed());
    }

    pub fn set_lightbox_index(&mut self, index: usize) {
        let state = self.lightbox.peek().clone();
        self.lightbox.set(state.with_index(index));
    }

    pub fn mobile_menu_open(&self) -> bool {
        *self.mobile_menu_open.read()
    }

    pub fn set_mobile_menu_open(&mut self, open: bool) {
        self.mobile_menu_open.set(open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<ViewerItem> {
        (0..n)
            .map(|i| ViewerItem {
                kind: MediaKind::Image,
                url: format!("https://cdn.example.com/{}.jpeg", i),
                alt: format!("photo {}", i),
                poster: None,
            })
            .collect()
    }

    #[test]
    fn closing_keeps_the_item_list() {
        let state = LightboxState::opened(items(3), 1).closed();
        assert!(!state.open);
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.index, 1);
    }

    #[test]
    fn navigation_stops_at_the_last_item() {
        // Open at index 2 of 5, then "next" until the controls say stop.
        let mut state = LightboxState::opened(items(5), 2);
        for _ in 0..4 {
            if state.has_next() {
                let next = state.index + 1;
                state = state.with_index(next);
            }
        }
        assert_eq!(state.index, 4);
        assert!(!state.has_next());
    }

    #[test]
    fn closed_viewer_offers_no_navigation() {
        let state = LightboxState::opened(items(5), 2).closed();
        assert!(!state.has_prev());
        assert!(!state.has_next());
    }

    #[test]
    fn reopening_replaces_list_and_index() {
        let state = LightboxState::opened(items(5), 4);
        let state = LightboxState::opened(items(2), 0).with_index(state.index.min(1));
        assert_eq!(state.items.len(), 2);
        assert!(state.open);
    }
}
