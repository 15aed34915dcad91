//! Controlled/uncontrolled ownership of a component's [`ToggleSet`].

use std::fmt;

use thiserror::Error;

use crate::{SelectionPolicy, ToggleSet};

/// Callback receiving toggle requests from a controlled binding.
pub type Notifier<K> = Box<dyn FnMut(&ToggleChange<K>)>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of one toggle request.
///
/// Carries both the `(item, membership)` pair most call sites forward and the
/// full resulting set, so an external owner never has to re-derive the policy.
pub struct ToggleChange<K: Ord> {
    /// Item the request targeted.
    pub item: K,
    /// Whether `item` is a member of `next`.
    pub active: bool,
    /// Set the policy produced.
    pub next: ToggleSet<K>,
}

impl<K: Ord> ToggleChange<K> {
    fn new(item: K, next: ToggleSet<K>) -> Self {
        Self {
            active: next.contains(&item),
            item,
            next,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Ownership mode, fixed when the binding is created.
pub enum BindingMode {
    /// The current set is owned by an external caller.
    Controlled,
    /// The current set is owned by the binding.
    Uncontrolled,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Caller errors raised by [`ControllerBinding`].
pub enum BindingError {
    /// An external value was supplied to a binding created without one.
    #[error("binding was created uncontrolled; external values are not accepted")]
    NotControlled,
}

enum Source<K: Ord> {
    Controlled {
        value: ToggleSet<K>,
        notifier: Option<Notifier<K>>,
    },
    Uncontrolled {
        state: ToggleSet<K>,
    },
}

/// Resolves where a component's active set lives and routes toggle requests.
///
/// A controlled binding only reads the externally supplied set and forwards
/// every request to its notifier; what [`current_set`](Self::current_set)
/// returns changes only when the owner calls [`resupply`](Self::resupply). An
/// uncontrolled binding replaces its internal set on every request. Internal
/// state lives exactly as long as the binding.
pub struct ControllerBinding<K: Ord> {
    source: Source<K>,
}

impl<K: Ord + Clone> ControllerBinding<K> {
    /// Binding driven by an external value and notifier.
    pub fn controlled(
        value: impl Into<ToggleSet<K>>,
        notifier: impl FnMut(&ToggleChange<K>) + 'static,
    ) -> Self {
        Self {
            source: Source::Controlled {
                value: value.into(),
                notifier: Some(Box::new(notifier)),
            },
        }
    }

    /// Controlled binding without a notifier. Requests are computed but go
    /// nowhere.
    pub fn read_only(value: impl Into<ToggleSet<K>>) -> Self {
        Self {
            source: Source::Controlled {
                value: value.into(),
                notifier: None,
            },
        }
    }

    /// Binding that owns its state, seeded once from `default`.
    pub fn uncontrolled(default: impl IntoIterator<Item = K>) -> Self {
        Self {
            source: Source::Uncontrolled {
                state: default.into_iter().collect(),
            },
        }
    }

    /// Picks the mode from what the parent supplied at mount.
    ///
    /// A present `value` makes the binding controlled and `default` is ignored.
    pub fn from_props(
        value: Option<ToggleSet<K>>,
        default: Option<ToggleSet<K>>,
        notifier: Option<Notifier<K>>,
    ) -> Self {
        match value {
            Some(value) => Self {
                source: Source::Controlled { value, notifier },
            },
            None => Self::uncontrolled(default.unwrap_or_default()),
        }
    }

    /// Ownership mode.
    pub fn mode(&self) -> BindingMode {
        match self.source {
            Source::Controlled { .. } => BindingMode::Controlled,
            Source::Uncontrolled { .. } => BindingMode::Uncontrolled,
        }
    }

    /// Returns `true` for a controlled binding with no notifier.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self.source,
            Source::Controlled { notifier: None, .. }
        )
    }

    /// The external set when controlled, the internal set otherwise.
    pub fn current_set(&self) -> &ToggleSet<K> {
        match &self.source {
            Source::Controlled { value, .. } => value,
            Source::Uncontrolled { state } => state,
        }
    }

    /// Applies `policy` to the current set for a toggle of `item`.
    ///
    /// Controlled bindings notify and keep reporting the external value;
    /// uncontrolled bindings replace their state with the result.
    pub fn request_toggle(&mut self, item: K, policy: SelectionPolicy) -> ToggleChange<K> {
        let next = policy.apply(self.current_set(), item.clone());
        self.commit(ToggleChange::new(item, next))
    }

    /// Like [`request_toggle`](Self::request_toggle) for an explicit target
    /// membership.
    pub fn request_membership(
        &mut self,
        item: K,
        include: bool,
        policy: SelectionPolicy,
    ) -> ToggleChange<K> {
        let next = policy.apply_membership(self.current_set(), item.clone(), include);
        self.commit(ToggleChange::new(item, next))
    }

    /// Accepts a new external value from the owner of a controlled binding.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NotControlled`] when the binding was created
    /// uncontrolled. Its internal state is left untouched.
    pub fn resupply(&mut self, next: impl Into<ToggleSet<K>>) -> Result<(), BindingError> {
        match &mut self.source {
            Source::Controlled { value, .. } => {
                *value = next.into();
                Ok(())
            }
            Source::Uncontrolled { .. } => Err(BindingError::NotControlled),
        }
    }

    fn commit(&mut self, change: ToggleChange<K>) -> ToggleChange<K> {
        match &mut self.source {
            Source::Controlled { notifier, .. } => {
                if let Some(notifier) = notifier.as_mut() {
                    notifier(&change);
                }
            }
            Source::Uncontrolled { state } => {
                *state = change.next.clone();
            }
        }
        change
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for ControllerBinding<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Controlled { value, notifier } => f
                .debug_struct("ControllerBinding")
                .field("mode", &BindingMode::Controlled)
                .field("value", value)
                .field("has_notifier", &notifier.is_some())
                .finish(),
            Source::Uncontrolled { state } => f
                .debug_struct("ControllerBinding")
                .field("mode", &BindingMode::Uncontrolled)
                .field("state", state)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn recorder<K: Ord + Clone + 'static>() -> (
        Rc<RefCell<Vec<(K, bool)>>>,
        impl FnMut(&ToggleChange<K>) + 'static,
    ) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |change: &ToggleChange<K>| {
            sink.borrow_mut().push((change.item.clone(), change.active));
        })
    }

    #[test]
    fn controlled_request_notifies_without_changing_current_set() {
        let (calls, notifier) = recorder::<u32>();
        let mut binding = ControllerBinding::controlled(vec![1, 3], notifier);

        let change = binding.request_toggle(2, SelectionPolicy::independent());

        assert_eq!(*calls.borrow(), vec![(2, true)]);
        assert_eq!(change.next, ToggleSet::from(vec![1, 2, 3]));
        assert_eq!(binding.current_set(), &ToggleSet::from(vec![1, 3]));

        binding.resupply(change.next).expect("controlled binding");
        assert_eq!(binding.current_set(), &ToggleSet::from(vec![1, 2, 3]));
    }

    #[test]
    fn controlled_requests_are_computed_against_last_supplied_value() {
        let (calls, notifier) = recorder::<u32>();
        let mut binding = ControllerBinding::controlled(vec![1], notifier);
        let policy = SelectionPolicy::independent();

        binding.request_toggle(1, policy);
        binding.request_toggle(1, policy);

        assert_eq!(*calls.borrow(), vec![(1, false), (1, false)]);
    }

    #[test]
    fn uncontrolled_request_replaces_internal_state() {
        let mut binding = ControllerBinding::uncontrolled([0usize]);
        let snapshot = binding.current_set().clone();

        let change = binding.request_toggle(2, SelectionPolicy::exclusive(true));

        assert_eq!(change, ToggleChange::new(2, ToggleSet::only(2)));
        assert_eq!(binding.current_set(), &ToggleSet::only(2));
        assert_eq!(snapshot, ToggleSet::only(0));
    }

    #[test]
    fn uncontrolled_state_does_not_outlive_the_instance() {
        let mut first = ControllerBinding::<u32>::uncontrolled([]);
        first.request_toggle(1, SelectionPolicy::independent());
        assert!(first.current_set().contains(&1));
        drop(first);

        let second = ControllerBinding::<u32>::uncontrolled([]);
        assert!(second.current_set().is_empty());
    }

    #[test]
    fn controlled_value_takes_precedence_over_default() {
        let binding = ControllerBinding::from_props(
            Some(ToggleSet::from(vec!["a"])),
            Some(ToggleSet::from(vec!["b", "c"])),
            None,
        );
        assert_eq!(binding.mode(), BindingMode::Controlled);
        assert!(binding.is_read_only());
        assert_eq!(binding.current_set(), &ToggleSet::from(vec!["a"]));

        let binding = ControllerBinding::from_props(None, Some(ToggleSet::from(vec!["b"])), None);
        assert_eq!(binding.mode(), BindingMode::Uncontrolled);
        assert_eq!(binding.current_set(), &ToggleSet::from(vec!["b"]));
    }

    #[test]
    fn resupply_on_uncontrolled_binding_is_rejected() {
        let mut binding = ControllerBinding::uncontrolled([4u8]);
        assert_eq!(
            binding.resupply(vec![9u8]),
            Err(BindingError::NotControlled)
        );
        assert_eq!(binding.current_set(), &ToggleSet::only(4));
    }

    #[test]
    fn read_only_binding_computes_but_keeps_value() {
        let mut binding = ControllerBinding::read_only(vec![5u8]);
        let change = binding.request_membership(6, true, SelectionPolicy::multi_select());
        assert!(change.active);
        assert_eq!(binding.current_set(), &ToggleSet::only(5));
    }

    #[test]
    fn membership_request_for_absent_item_yields_equal_set() {
        let mut binding = ControllerBinding::uncontrolled(["x".to_string()]);
        let before = binding.current_set().clone();
        let change =
            binding.request_membership("y".to_string(), false, SelectionPolicy::multi_select());
        assert!(!change.active);
        assert_eq!(binding.current_set(), &before);
    }
}
