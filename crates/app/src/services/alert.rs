//! Alert slots — the per-row success and error banners.
//!
//! A slot shows one message at a time. Every [`AlertSlot::show`] starts a new
//! generation; a pending hide only applies to the generation it was scheduled
//! for, so a newer message always gets its full lifetime.

use std::time::Duration;

use crate::ports::Timer;

/// Visible state of one banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertSlot {
    message: String,
    visible: bool,
    generation: u64,
}

impl AlertSlot {
    /// Replace the text, make the slot visible and return the new generation.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = message.into();
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Hide the slot if `generation` is still the one on display.
    ///
    /// Returns whether the slot was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Shared access to an [`AlertSlot`] held by the UI.
pub trait AlertView {
    /// Run `f` against the slot. `None` when the slot no longer exists
    /// (e.g. its row was unmounted).
    fn with_slot<R>(&self, f: impl FnOnce(&mut AlertSlot) -> R) -> Option<R>;
}

impl AlertView for std::cell::RefCell<AlertSlot> {
    fn with_slot<R>(&self, f: impl FnOnce(&mut AlertSlot) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: AlertView> AlertView for std::rc::Rc<T> {
    fn with_slot<R>(&self, f: impl FnOnce(&mut AlertSlot) -> R) -> Option<R> {
        (**self).with_slot(f)
    }
}

/// Show `message` in `view`, wait `lifetime`, then hide it unless a newer
/// message took its place.
pub async fn flash<V, T>(view: &V, timer: &T, lifetime: Duration, message: String)
where
    V: AlertView,
    T: Timer,
{
    let Some(generation) = view.with_slot(|slot| slot.show(message)) else {
        return;
    };
    timer.sleep(lifetime).await;
    if view.with_slot(|slot| slot.expire(generation)) == Some(false) {
        tracing::trace!(generation, "alert superseded, keeping newer message");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::future::Future;
    use std::rc::Rc;

    use chargehub_domain::notification::NOTIFICATION_LIFETIME;

    struct TokioTimer;

    impl Timer for TokioTimer {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            tokio::time::sleep(duration)
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn should_start_hidden() {
        let slot = AlertSlot::default();
        assert!(!slot.is_visible());
        assert_eq!(slot.message(), "");
    }

    #[test]
    fn should_ignore_stale_generation_when_expiring() {
        let mut slot = AlertSlot::default();
        let first = slot.show("premier");
        let second = slot.show("second");

        assert!(!slot.expire(first));
        assert!(slot.is_visible());
        assert_eq!(slot.message(), "second");

        assert!(slot.expire(second));
        assert!(!slot.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn should_stay_visible_until_lifetime_elapses() {
        let view = Rc::new(RefCell::new(AlertSlot::default()));
        let observed = Rc::clone(&view);

        tokio::join!(
            flash(&*view, &TokioTimer, NOTIFICATION_LIFETIME, "Nom modifié".to_string()),
            async move {
                tokio::time::sleep(ms(2999)).await;
                assert!(observed.borrow().is_visible());
                assert_eq!(observed.borrow().message(), "Nom modifié");
                tokio::time::sleep(ms(2)).await;
                assert!(!observed.borrow().is_visible());
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_hide_newer_message_when_first_timer_fires() {
        let view = Rc::new(RefCell::new(AlertSlot::default()));
        let second_view = Rc::clone(&view);
        let observed = Rc::clone(&view);

        tokio::join!(
            flash(&*view, &TokioTimer, NOTIFICATION_LIFETIME, "premier".to_string()),
            async move {
                tokio::time::sleep(ms(1000)).await;
                flash(&*second_view, &TokioTimer, NOTIFICATION_LIFETIME, "second".to_string())
                    .await;
            },
            async move {
                tokio::time::sleep(ms(3500)).await;
                assert!(observed.borrow().is_visible());
                assert_eq!(observed.borrow().message(), "second");
                tokio::time::sleep(ms(600)).await;
                assert!(!observed.borrow().is_visible());
            }
        );
    }
}
