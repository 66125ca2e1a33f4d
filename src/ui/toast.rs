use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeKind::Success => write!(f, "ok"),
            NoticeKind::Info => write!(f, "info"),
            NoticeKind::Warning => write!(f, "warn"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    created: Instant,
}

/// Short-lived notices, newest last.
#[derive(Debug, Clone)]
pub struct Toasts {
    lifetime: Duration,
    notices: VecDeque<Notice>,
}

impl Toasts {
    const MAX_NOTICES: usize = 5;

    pub fn new(lifetime: Duration) -> Self {
        Toasts {
            lifetime,
            notices: VecDeque::new(),
        }
    }

    pub fn push(&mut self, message: String, kind: NoticeKind) {
        self.push_at(message, kind, Instant::now())
    }

    pub fn push_at(&mut self, message: String, kind: NoticeKind, created: Instant) {
        log::info!("[{}] {}", kind, message);

        self.notices.push_back(Notice {
            message,
            kind,
            created,
        });

        while self.notices.len() > Self::MAX_NOTICES {
            self.notices.pop_front();
        }
    }

    pub fn expire(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.notices
            .retain(|notice| now.saturating_duration_since(notice.created) < lifetime);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
