//! Paired pane metadata and view storage.

use chorus_common::types::PaneId;

use crate::pane::Pane;

/// Two ordered sequences kept strictly parallel: `panes[i]` describes
/// `views[i]`. Insertion order is the visual left-to-right order.
///
/// Only whole-pane operations are exposed, so the sequences can't drift
/// apart; a length mismatch is a bug and trips a debug assertion.
pub struct PaneRegistry<V> {
    panes: Vec<Pane>,
    views: Vec<V>,
}

impl<V> PaneRegistry<V> {
    pub fn new() -> Self {
        Self {
            panes: Vec::new(),
            views: Vec::new(),
        }
    }

    /// Append a pane and its view at the right edge.
    pub fn add(&mut self, pane: Pane, view: V) {
        self.panes.push(pane);
        self.views.push(view);
        self.check_invariant();
    }

    /// Remove a pane by identity. Returns the pair, or `None` if the id is
    /// not registered (e.g. a stale id from an already-closed pane).
    pub fn remove(&mut self, id: PaneId) -> Option<(Pane, V)> {
        let index = self.index_of(id)?;
        let pane = self.panes.remove(index);
        let view = self.views.remove(index);
        self.check_invariant();
        Some((pane, view))
    }

    /// Position of a pane in registry order.
    pub fn index_of(&self, id: PaneId) -> Option<usize> {
        self.panes.iter().position(|p| p.id == id)
    }

    pub fn get(&self, id: PaneId) -> Option<(&Pane, &V)> {
        let index = self.index_of(id)?;
        Some((&self.panes[index], &self.views[index]))
    }

    /// First pane, in registry order, whose URL contains `pattern`.
    ///
    /// This is how commands like "close claude" are resolved. When several
    /// panes match, the leftmost one wins. An empty pattern matches nothing.
    pub fn find_by_identifier_substring(&self, pattern: &str) -> Option<PaneId> {
        if pattern.is_empty() {
            return None;
        }
        self.panes
            .iter()
            .find(|p| p.url.contains(pattern))
            .map(|p| p.id)
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.panes.iter().any(|p| p.url == url)
    }

    pub fn count(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Ordered, read-only snapshot of pane metadata.
    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    /// Ordered `(pane, view)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Pane, &V)> {
        self.panes.iter().zip(self.views.iter())
    }

    /// Remove every pane, returning them in registry order.
    pub fn drain(&mut self) -> Vec<(Pane, V)> {
        let panes = std::mem::take(&mut self.panes);
        let views = std::mem::take(&mut self.views);
        panes.into_iter().zip(views).collect()
    }

    fn check_invariant(&self) {
        debug_assert_eq!(
            self.panes.len(),
            self.views.len(),
            "pane registry sequences out of step"
        );
    }
}

impl<V> Default for PaneRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A view that remembers which URL it was created for.
    #[derive(Debug, PartialEq)]
    struct FakeView(String);

    fn registry_with(urls: &[&str]) -> PaneRegistry<FakeView> {
        let mut reg = PaneRegistry::new();
        for (i, url) in urls.iter().enumerate() {
            reg.add(Pane::new(PaneId(i as u32 + 1), *url), FakeView(url.to_string()));
        }
        reg
    }

    fn assert_paired(reg: &PaneRegistry<FakeView>) {
        assert_eq!(reg.panes().len(), reg.count());
        assert_eq!(reg.iter().count(), reg.count());
        for (pane, view) in reg.iter() {
            assert_eq!(pane.url, view.0);
        }
    }

    #[test]
    fn add_appends_in_order() {
        let reg = registry_with(&["https://chatgpt.com", "https://claude.ai"]);
        assert_eq!(reg.count(), 2);
        let urls: Vec<_> = reg.panes().iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["https://chatgpt.com", "https://claude.ai"]);
        assert_paired(&reg);
    }

    #[test]
    fn remove_closes_the_gap_without_reordering() {
        let mut reg = registry_with(&["a://1", "a://2", "a://3", "a://4"]);
        let (pane, view) = reg.remove(PaneId(2)).unwrap();
        assert_eq!(pane.url, "a://2");
        assert_eq!(view, FakeView("a://2".into()));
        let ids: Vec<_> = reg.panes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PaneId(1), PaneId(3), PaneId(4)]);
        assert_paired(&reg);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut reg = registry_with(&["a://1", "a://2"]);
        assert!(reg.remove(PaneId(99)).is_none());
        assert_eq!(reg.count(), 2);
        assert_paired(&reg);
    }

    #[test]
    fn remove_uses_identity_not_url() {
        let mut reg = registry_with(&["https://claude.ai", "https://claude.ai"]);
        reg.remove(PaneId(2)).unwrap();
        assert_eq!(reg.count(), 1);
        assert_eq!(reg.panes()[0].id, PaneId(1));
    }

    #[test]
    fn find_by_substring_returns_first_match() {
        let reg = registry_with(&["https://chatgpt.com", "https://claude.ai"]);
        assert_eq!(reg.find_by_identifier_substring("claude"), Some(PaneId(2)));
        assert_eq!(reg.find_by_identifier_substring("https"), Some(PaneId(1)));
        assert_eq!(reg.find_by_identifier_substring("gemini"), None);
    }

    #[test]
    fn find_by_substring_ambiguous_picks_leftmost() {
        let reg = registry_with(&["https://x.com/a", "https://claude.ai", "https://claude.ai/b"]);
        assert_eq!(reg.find_by_identifier_substring("claude"), Some(PaneId(2)));
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        let reg = registry_with(&["https://chatgpt.com"]);
        assert_eq!(reg.find_by_identifier_substring(""), None);
    }

    #[test]
    fn contains_url_is_exact() {
        let reg = registry_with(&["https://claude.ai"]);
        assert!(reg.contains_url("https://claude.ai"));
        assert!(!reg.contains_url("https://claude.ai/new"));
    }

    #[test]
    fn get_and_index_of() {
        let reg = registry_with(&["a://1", "a://2"]);
        assert_eq!(reg.index_of(PaneId(2)), Some(1));
        let (pane, view) = reg.get(PaneId(1)).unwrap();
        assert_eq!(pane.url, view.0);
        assert!(reg.get(PaneId(5)).is_none());
    }

    #[test]
    fn drain_empties_in_order() {
        let mut reg = registry_with(&["a://1", "a://2", "a://3"]);
        let drained = reg.drain();
        assert!(reg.is_empty());
        let urls: Vec<_> = drained.iter().map(|(p, v)| (p.url.as_str(), v.0.as_str())).collect();
        assert_eq!(urls, vec![("a://1", "a://1"), ("a://2", "a://2"), ("a://3", "a://3")]);
    }

    #[test]
    fn sequences_stay_parallel_under_mixed_operations() {
        let mut reg: PaneRegistry<FakeView> = PaneRegistry::new();
        let mut next = 1u32;
        // Deterministic pseudo-random walk of adds and removes.
        let mut seed = 0x2545_f491u32;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 3 == 0 && !reg.is_empty() {
                let victim = reg.panes()[(seed as usize / 3) % reg.count()].id;
                let before: Vec<_> = reg.panes().iter().map(|p| p.id).filter(|id| *id != victim).collect();
                assert!(reg.remove(victim).is_some());
                let after: Vec<_> = reg.panes().iter().map(|p| p.id).collect();
                assert_eq!(before, after);
            } else {
                let url = format!("https://site{}.example", next);
                reg.add(Pane::new(PaneId(next), url.clone()), FakeView(url));
                next += 1;
            }
            assert_paired(&reg);
        }
    }
}
