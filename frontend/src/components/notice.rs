use leptos::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// How long a notice stays on screen.
const NOTICE_DURATION: Duration = Duration::from_secs(3);

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Unique per notice, so equal messages raised twice stay distinct.
    pub id: u64,
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    fn new(message: String, is_error: bool) -> Self {
        Self {
            id: NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed),
            message,
            is_error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), false)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), true)
    }
}

/// Clears the notice only if `id` is still the one on screen.
fn expire(notice: RwSignal<Option<Notice>>, id: u64) {
    notice.update(|current| {
        if current.as_ref().is_some_and(|n| n.id == id) {
            *current = None;
        }
    });
}

/// Toast in the top-right corner, cleared after a few seconds.
#[component]
pub fn NoticeToast(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    Effect::new(move |_| {
        if let Some(id) = notice.with(|n| n.as_ref().map(|n| n.id)) {
            set_timeout(move || expire(notice, id), NOTICE_DURATION);
        }
    });

    move || {
        notice.get().map(|n| {
            let class = if n.is_error {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div class=class>
                        <span>{n.message}</span>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_get_distinct_ids() {
        let a = Notice::success("Guardado");
        let b = Notice::success("Guardado");
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
        assert!(Notice::error("x").is_error);
    }

    #[test]
    fn test_stale_timer_keeps_newer_notice() {
        let owner = Owner::new();
        owner.with(|| {
            let first = Notice::success("Coche registrado");
            let second = Notice::error("Not found");
            let notice = RwSignal::new(Some(first.clone()));

            notice.set(Some(second.clone()));
            expire(notice, first.id);
            assert_eq!(notice.get_untracked(), Some(second.clone()));

            expire(notice, second.id);
            assert_eq!(notice.get_untracked(), None);
        });
    }
}
