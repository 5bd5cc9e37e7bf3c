/// What a notification is about. Fixed when the notification is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Message,
    Proposal,
    System,
}

impl Category {
    #[cfg(test)]
    pub const ALL: [Category; 3] = [Category::Message, Category::Proposal, Category::System];

    /// Declaration order of the variant; used to index
    /// per-category lookup tables.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Message => "message",
            Category::Proposal => "proposal",
            Category::System => "system",
        }
    }
}

/// Which notifications a tab shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Unread,
    Category(Category),
}

impl Filter {
    /// Tab order in the notification panel.
    pub const TABS: [Filter; 5] = [
        Filter::All,
        Filter::Unread,
        Filter::Category(Category::Message),
        Filter::Category(Category::Proposal),
        Filter::Category(Category::System),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Unread => "Unread",
            Filter::Category(Category::Message) => "Messages",
            Filter::Category(Category::Proposal) => "Proposals",
            Filter::Category(Category::System) => "System",
        }
    }

    pub fn matches(self, notification: &Notification) -> bool {
        match self {
            Filter::All => true,
            Filter::Unread => !notification.is_read(),
            Filter::Category(category) => notification.category() == category,
        }
    }

    pub fn next(self) -> Filter {
        let idx = Self::TABS.iter().position(|f| *f == self).unwrap_or(0);
        Self::TABS[(idx + 1) % Self::TABS.len()]
    }

    pub fn prev(self) -> Filter {
        let idx = Self::TABS.iter().position(|f| *f == self).unwrap_or(0);
        Self::TABS[(idx + Self::TABS.len() - 1) % Self::TABS.len()]
    }
}

/// A single inbox entry. Everything but the read flag is immutable; the flag
/// is only ever raised, through [`NotificationCenter::mark_read`].
///
/// [`NotificationCenter::mark_read`]: super::NotificationCenter::mark_read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: String,
    category: Category,
    title: String,
    body: String,
    created_at: String,
    is_read: bool,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        category: Category,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            body: body.into(),
            created_at: created_at.into(),
            is_read: false,
        }
    }

    /// Builder-style constructor for entries that start out already read.
    pub fn read(mut self) -> Self {
        self.is_read = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Display label such as "2 hours ago".
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    pub(super) fn mark_read(&mut self) -> bool {
        let changed = !self.is_read;
        self.is_read = true;
        changed
    }
}
