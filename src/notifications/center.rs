use super::model::{Category, Filter, Notification};
use tracing::debug;

/// Owns the notification list. Order is insertion order and never changes.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// The built-in inbox shown on every dashboard load.
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Notification::new(
                "1",
                Category::Proposal,
                "New Proposal Received",
                "Developer GameMaster has submitted a proposal for your product.",
                "Just now",
            ),
            Notification::new(
                "2",
                Category::Message,
                "Message from StreamStudio",
                "I have a question about your latest product...",
                "2 hours ago",
            ),
            Notification::new(
                "3",
                Category::System,
                "Campaign Started",
                "Your 'Energy Drink' campaign is now live in 3 games.",
                "Yesterday",
            )
            .read(),
            Notification::new(
                "4",
                Category::Proposal,
                "Proposal Accepted",
                "Brand XYZ accepted your integration proposal!",
                "2 days ago",
            )
            .read(),
        ])
    }

    /// Notifications matching `filter`, in list order.
    pub fn list_visible(&self, filter: Filter) -> Vec<&Notification> {
        self.items.iter().filter(|n| filter.matches(n)).collect()
    }

    /// Mark the notification with `id` as read. Unknown ids are ignored.
    /// Returns whether anything changed.
    pub fn mark_read(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|n| n.id() == id) else {
            debug!(id, "mark_read for unknown notification");
            return false;
        };
        let changed = item.mark_read();
        if changed {
            debug!(id, category = item.category().as_str(), "notification marked read");
        }
        changed
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read()).count()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(list: &[&Notification]) -> Vec<String> {
        list.iter().map(|n| n.id().to_string()).collect()
    }

    #[test]
    fn test_default_inbox_scenario() {
        let mut center = NotificationCenter::with_defaults();
        assert_eq!(center.list_visible(Filter::All).len(), 4);
        assert_eq!(center.unread_count(), 2);

        assert!(center.mark_read("1"));
        assert_eq!(center.unread_count(), 1);

        let messages = center.list_visible(Filter::Category(Category::Message));
        assert_eq!(ids(&messages), vec!["2"]);
        assert!(messages.iter().all(|n| n.category() == Category::Message));
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut once = NotificationCenter::with_defaults();
        once.mark_read("2");

        let mut twice = NotificationCenter::with_defaults();
        assert!(twice.mark_read("2"));
        assert!(!twice.mark_read("2"));

        assert_eq!(once.unread_count(), twice.unread_count());
        assert_eq!(
            ids(&once.list_visible(Filter::Unread)),
            ids(&twice.list_visible(Filter::Unread))
        );
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut center = NotificationCenter::with_defaults();
        assert!(!center.mark_read("does-not-exist"));
        assert_eq!(center.unread_count(), 2);
    }

    #[test]
    fn test_unread_count_tracks_any_mark_sequence() {
        let sequence = ["4", "1", "1", "nope", "2", "4", "3", "2"];
        let mut center = NotificationCenter::with_defaults();
        let initially_unread: HashSet<String> =
            ids(&center.list_visible(Filter::Unread)).into_iter().collect();
        let mut marked = HashSet::new();

        for id in sequence {
            center.mark_read(id);
            marked.insert(id.to_string());
            let expected = initially_unread.difference(&marked).count();
            assert_eq!(center.unread_count(), expected);
        }
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn test_unread_is_subset_and_difference_is_read() {
        let mut center = NotificationCenter::with_defaults();
        center.mark_read("2");

        let all: HashSet<String> = ids(&center.list_visible(Filter::All)).into_iter().collect();
        let unread: HashSet<String> =
            ids(&center.list_visible(Filter::Unread)).into_iter().collect();
        assert!(unread.is_subset(&all));

        let read: HashSet<String> = center
            .list_visible(Filter::All)
            .into_iter()
            .filter(|n| n.is_read())
            .map(|n| n.id().to_string())
            .collect();
        let difference: HashSet<String> = all.symmetric_difference(&unread).cloned().collect();
        assert_eq!(difference, read);
    }

    #[test]
    fn test_filtering_preserves_order_and_state() {
        let center = NotificationCenter::with_defaults();
        let proposals = center.list_visible(Filter::Category(Category::Proposal));
        assert_eq!(ids(&proposals), vec!["1", "4"]);

        for filter in Filter::TABS {
            let _ = center.list_visible(filter);
        }
        assert_eq!(center.unread_count(), 2);
    }

    #[test]
    fn test_empty_filter_result() {
        let mut center = NotificationCenter::with_defaults();
        for id in ["1", "2"] {
            center.mark_read(id);
        }
        assert!(center.list_visible(Filter::Unread).is_empty());
        assert!(NotificationCenter::new(Vec::new()).list_visible(Filter::All).is_empty());
    }
}
