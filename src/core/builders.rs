use super::{DEFAULT_ASSIGNEE, DEFAULT_PRIORITY, NewTicket};

/// Builder for creating `NewTicket` drafts
///
/// Priority and assignee fall back to [`DEFAULT_PRIORITY`] and
/// [`DEFAULT_ASSIGNEE`] unless set.
#[derive(Default)]
pub struct NewTicketBuilder {
    title: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    assignee: Option<String>,
    notes: Option<String>,
}

impl NewTicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the category
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Set the assignee
    #[must_use]
    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the initial notes; blank notes are dropped
    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes.filter(|n| !n.trim().is_empty());
        self
    }

    /// Build the draft
    pub fn build(self) -> NewTicket {
        NewTicket {
            title: self.title.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            priority: self
                .priority
                .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            assignee: self
                .assignee
                .unwrap_or_else(|| DEFAULT_ASSIGNEE.to_string()),
            notes: self.notes,
        }
    }
}
