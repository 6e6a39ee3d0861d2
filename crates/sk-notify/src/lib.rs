//! Toast lifecycle, kept apart from the DOM so the timing rules can be
//! tested on a plain clock. Time is an explicit millisecond argument;
//! the caller owns the real timers.

/// How long a notice stays up before it expires on its own.
pub const NOTICE_TTL_MS: u64 = 5_000;

/// Identifier handed out by [`NoticeBoard::post`]. Ids are never
/// reused within a page's lifetime.
pub type NoticeId = u64;

/// Tone of a notice. Markup passes these as plain strings; anything
/// unknown falls back to `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// CSS modifier class carried by the toast element.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "notification-info",
            Self::Success => "notification-success",
            Self::Warning => "notification-warning",
            Self::Error => "notification-error",
        }
    }

    /// Font Awesome icon shown next to the message. Success gets a
    /// check mark, everything else the info circle.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            _ => "fa-info-circle",
        }
    }
}

/// One visible notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub posted_at_ms: u64,
}

impl Notice {
    /// Instant at which the notice is due to expire.
    pub fn deadline_ms(&self) -> u64 {
        self.posted_at_ms.saturating_add(NOTICE_TTL_MS)
    }
}

/// The set of notices currently on screen, oldest first.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    next_id: NoticeId,
    active: Vec<(NoticeId, Notice)>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new notice and return its id.
    pub fn post(&mut self, message: &str, severity: Severity, now_ms: u64) -> NoticeId {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push((
            id,
            Notice {
                message: message.to_string(),
                severity,
                posted_at_ms: now_ms,
            },
        ));
        id
    }

    /// Take a notice down. Safe to call for an id that is already
    /// gone; returns whether anything was removed.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.active.len();
        self.active.retain(|(active_id, _)| *active_id != id);
        self.active.len() != before
    }

    /// Remove every notice whose deadline has passed and return their
    /// ids, oldest first.
    pub fn expire_due(&mut self, now_ms: u64) -> Vec<NoticeId> {
        let mut expired = Vec::new();
        self.active.retain(|(id, notice)| {
            if now_ms >= notice.deadline_ms() {
                expired.push(*id);
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn is_active(&self, id: NoticeId) -> bool {
        self.active.iter().any(|(active_id, _)| *active_id == id)
    }

    pub fn get(&self, id: NoticeId) -> Option<&Notice> {
        self.active
            .iter()
            .find(|(active_id, _)| *active_id == id)
            .map(|(_, notice)| notice)
    }

    /// Active notices in stacking order, oldest first.
    pub fn active(&self) -> impl Iterator<Item = (NoticeId, &Notice)> {
        self.active.iter().map(|(id, notice)| (*id, notice))
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_severity_tags_read_as_info() {
        assert_eq!(Severity::parse("success"), Severity::Success);
        assert_eq!(Severity::parse("warning"), Severity::Warning);
        assert_eq!(Severity::parse("error"), Severity::Error);
        assert_eq!(Severity::parse("info"), Severity::Info);
        assert_eq!(Severity::parse("fatal"), Severity::Info);
        assert_eq!(Severity::parse(""), Severity::Info);
    }

    #[test]
    fn severity_presentation_mapping() {
        assert_eq!(Severity::Success.css_class(), "notification-success");
        assert_eq!(Severity::Error.css_class(), "notification-error");
        assert_eq!(Severity::Success.icon(), "fa-check-circle");
        assert_eq!(Severity::Info.icon(), "fa-info-circle");
        assert_eq!(Severity::Warning.icon(), "fa-info-circle");
        assert_eq!(Severity::Error.icon(), "fa-info-circle");
    }

    #[test]
    fn post_assigns_fresh_ids() {
        let mut board = NoticeBoard::new();
        let a = board.post("first", Severity::Info, 0);
        let b = board.post("second", Severity::Info, 0);
        assert_ne!(a, b);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let mut board = NoticeBoard::new();
        let a = board.post("first", Severity::Info, 0);
        board.dismiss(a);
        let b = board.post("second", Severity::Info, 0);
        assert_ne!(a, b);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut board = NoticeBoard::new();
        let id = board.post("bye", Severity::Info, 0);
        assert!(board.dismiss(id));
        assert!(!board.dismiss(id));
        assert!(board.is_empty());
    }

    #[test]
    fn notice_expires_exactly_at_its_deadline() {
        let mut board = NoticeBoard::new();
        let id = board.post("soon", Severity::Success, 1_000);
        assert!(board.expire_due(1_000 + NOTICE_TTL_MS - 1).is_empty());
        assert!(board.is_active(id));
        assert_eq!(board.expire_due(1_000 + NOTICE_TTL_MS), vec![id]);
        assert!(!board.is_active(id));
    }

    #[test]
    fn manual_dismiss_beats_the_timer() {
        let mut board = NoticeBoard::new();
        let id = board.post("closed early", Severity::Info, 0);
        assert!(board.dismiss(id));
        assert!(board.expire_due(NOTICE_TTL_MS).is_empty());
    }

    #[test]
    fn overlapping_notices_expire_independently() {
        let mut board = NoticeBoard::new();
        let first = board.post("first", Severity::Info, 0);
        let second = board.post("second", Severity::Info, 3_000);
        assert_eq!(board.expire_due(5_000), vec![first]);
        assert!(board.is_active(second));
        assert_eq!(board.expire_due(8_000), vec![second]);
        assert!(board.is_empty());
    }

    #[test]
    fn active_iterates_oldest_first() {
        let mut board = NoticeBoard::new();
        board.post("a", Severity::Info, 0);
        board.post("b", Severity::Warning, 10);
        board.post("c", Severity::Error, 20);
        let messages: Vec<&str> = board
            .active()
            .map(|(_, notice)| notice.message.as_str())
            .collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
    }

    #[test]
    fn get_reads_back_what_was_posted() {
        let mut board = NoticeBoard::new();
        let id = board.post("saved", Severity::Warning, 42);
        let notice = board.get(id).unwrap();
        assert_eq!(notice.message, "saved");
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.posted_at_ms, 42);
        assert_eq!(notice.deadline_ms(), 42 + NOTICE_TTL_MS);
        assert_eq!(board.get(id + 1), None);
    }
}
