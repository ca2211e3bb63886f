//! [`Notice`] definitions.

/// User-facing notification (a toast).
///
/// Every failure of an external call degrades to an error [`Notice`] and an
/// unchanged prior view; nothing is retried or escalated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    /// [`Kind`] of this [`Notice`].
    pub kind: Kind,

    /// Short title of this [`Notice`].
    pub title: String,

    /// Message of this [`Notice`].
    pub message: String,
}

impl Notice {
    /// Creates a new success [`Notice`].
    #[must_use]
    pub fn success(
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: Kind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates a new error [`Notice`].
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Kind of a [`Notice`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Successful outcome.
    Success,

    /// Failed outcome.
    Error,
}

/// Queue of pending [`Notice`]s of a page.
#[derive(Debug, Default)]
pub struct Notices(Vec<Notice>);

impl Notices {
    /// Appends the provided [`Notice`].
    pub fn push(&mut self, notice: Notice) {
        self.0.push(notice);
    }

    /// Removes and returns all pending [`Notice`]s.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.0)
    }

    /// Returns the pending [`Notice`]s without consuming them.
    #[must_use]
    pub fn as_slice(&self) -> &[Notice] {
        &self.0
    }

    /// Returns the most recent pending [`Notice`], if any.
    #[must_use]
    pub fn last(&self) -> Option<&Notice> {
        self.0.last()
    }
}
