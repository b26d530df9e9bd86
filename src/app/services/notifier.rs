use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::app::infrastructure::error::{AppError, Result};

/// Identifies one registration in a [`ChangeNotifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Rc<dyn Fn(&T)>;

/// Synchronous, in-order fan-out of a value to every subscriber.
///
/// Single-threaded. Publishing from inside an observer is rejected with
/// [`AppError::ReentrantNotification`]. Subscribing or unsubscribing during a
/// publish is allowed and applies from the next publish.
pub struct ChangeNotifier<T: ?Sized> {
    observers: RefCell<Vec<(SubscriptionId, Observer<T>)>>,
    next_id: Cell<u64>,
    publishing: Cell<bool>,
}

impl<T: ?Sized> ChangeNotifier<T> {
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            publishing: Cell::new(false),
        }
    }

    /// Append an observer. The same closure may be registered more than once;
    /// every registration fires.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    /// Remove a registration. Returns `false` if it was not present.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Deliver `value` to every observer in subscription order.
    pub fn publish(&self, value: &T) -> Result<()> {
        if self.publishing.get() {
            return Err(AppError::ReentrantNotification);
        }

        // Snapshot so observers can (un)subscribe without a RefCell conflict
        let snapshot: Vec<Observer<T>> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();

        let _guard = PublishGuard::enter(&self.publishing);
        for observer in snapshot {
            observer(value);
        }
        Ok(())
    }

    pub fn is_publishing(&self) -> bool {
        self.publishing.get()
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: ?Sized> Default for ChangeNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for ChangeNotifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.len())
            .field("publishing", &self.publishing.get())
            .finish()
    }
}

/// Clears the publishing flag even if an observer panics.
struct PublishGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> PublishGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for PublishGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + Clone + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |value: &str| sink.borrow_mut().push(value.to_string()))
    }

    #[test]
    fn test_publish_reaches_observers_in_order() {
        let notifier: ChangeNotifier<str> = ChangeNotifier::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            notifier.subscribe(move |value: &str| calls.borrow_mut().push(format!("{name}:{value}")));
        }

        notifier.publish("hello").unwrap();
        assert_eq!(*calls.borrow(), vec!["first:hello", "second:hello", "third:hello"]);
    }

    #[test]
    fn test_publish_without_observers() {
        let notifier: ChangeNotifier<str> = ChangeNotifier::new();
        assert!(notifier.is_empty());
        assert!(notifier.publish("nobody listens").is_ok());
    }

    #[test]
    fn test_duplicate_registrations_fire_independently() {
        let notifier: ChangeNotifier<str> = ChangeNotifier::new();
        let (log, observer) = recorder();
        notifier.subscribe(observer.clone());
        notifier.subscribe(observer);

        notifier.publish("x").unwrap();
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let notifier: ChangeNotifier<str> = ChangeNotifier::new();
        let (log, observer) = recorder();
        let id = notifier.subscribe(observer);

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));

        notifier.publish("ignored").unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe_unknown_id_is_noop() {
        let notifier: ChangeNotifier<str> = ChangeNotifier::new();
        let (log, observer) = recorder();
        notifier.subscribe(observer);

        let other: ChangeNotifier<str> = ChangeNotifier::new();
        other.subscribe(|_: &str| {});
        let foreign = other.subscribe(|_: &str| {});

        assert!(!notifier.unsubscribe(foreign));
        assert_eq!(notifier.len(), 1);
        notifier.publish("still here").unwrap();
        assert_eq!(*log.borrow(), vec!["still here"]);
    }

    #[test]
    fn test_unsubscribe_keeps_other_observers() {
        let notifier: ChangeNotifier<str> = ChangeNotifier::new();
        let (first_log, first) = recorder();
        let (second_log, second) = recorder();
        let first_id = notifier.subscribe(first);
        notifier.subscribe(second);

        notifier.unsubscribe(first_id);
        notifier.publish("after").unwrap();

        assert!(first_log.borrow().is_empty());
        assert_eq!(*second_log.borrow(), vec!["after"]);
        assert_eq!(notifier.len(), 1);
    }

    #[test]
    fn test_nested_publish_is_rejected() {
        let notifier: Rc<ChangeNotifier<str>> = Rc::new(ChangeNotifier::new());
        let nested_result = Rc::new(RefCell::new(None));

        let inner = Rc::downgrade(&notifier);
        let result_slot = Rc::clone(&nested_result);
        notifier.subscribe(move |_value: &str| {
            if let Some(notifier) = inner.upgrade() {
                *result_slot.borrow_mut() = Some(notifier.publish("nested"));
            }
        });

        notifier.publish("outer").unwrap();

        let nested = nested_result.borrow_mut().take().unwrap();
        assert!(matches!(nested, Err(AppError::ReentrantNotification)));
        assert!(!notifier.is_publishing());
    }

    #[test]
    fn test_subscribe_during_publish_applies_next_time() {
        let notifier: Rc<ChangeNotifier<str>> = Rc::new(ChangeNotifier::new());
        let (late_log, late_observer) = recorder();

        let inner = Rc::downgrade(&notifier);
        notifier.subscribe(move |_value: &str| {
            if let Some(notifier) = inner.upgrade() {
                if notifier.len() == 1 {
                    notifier.subscribe(late_observer.clone());
                }
            }
        });

        notifier.publish("one").unwrap();
        assert!(late_log.borrow().is_empty());

        notifier.publish("two").unwrap();
        assert_eq!(*late_log.borrow(), vec!["two"]);
    }

    #[test]
    fn test_sized_payload() {
        let notifier: ChangeNotifier<f32> = ChangeNotifier::new();
        let seen = Rc::new(Cell::new(0.0_f32));
        let sink = Rc::clone(&seen);
        notifier.subscribe(move |t: &f32| sink.set(*t));

        notifier.publish(&22.5).unwrap();
        assert_eq!(seen.get(), 22.5);
    }
}
