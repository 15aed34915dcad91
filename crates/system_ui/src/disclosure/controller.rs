//! Reactive wrapper around [`ControllerBinding`] for Leptos components.

use disclosure_core::{BindingMode, ControllerBinding, SelectionPolicy, ToggleChange, ToggleSet};
use leptos::*;

/// Reactive handle routing a component's toggles through a [`ControllerBinding`].
///
/// The handle is `Copy` and owned by the reactive scope that created it, so an
/// uncontrolled instance's state is dropped together with the component. Once
/// that scope is disposed reads return the empty set and requests return
/// `None`.
///
/// Controlled handles read the parent's signal directly; the binding only sees
/// that value when a toggle is requested. The change callback runs after the
/// binding is released, so a callback may toggle the same handle again.
/// Every request bumps a revision trigger, so item views re-read the real
/// state even when the owner declined the change.
pub struct ToggleController<K: Ord + 'static> {
    binding: StoredValue<ControllerBinding<K>>,
    external: Option<Signal<ToggleSet<K>>>,
    notifier: Option<Callback<ToggleChange<K>>>,
    revision: Trigger,
    policy: SelectionPolicy,
}

impl<K: Ord + 'static> Clone for ToggleController<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Ord + 'static> Copy for ToggleController<K> {}

impl<K: Ord + Clone + 'static> ToggleController<K> {
    /// Creates a handle whose mode is decided by whether `value` is present.
    ///
    /// `default` seeds uncontrolled state and is ignored when `value` is
    /// supplied. `notifier` only fires for controlled handles.
    pub fn new(
        policy: SelectionPolicy,
        value: Option<Signal<Vec<K>>>,
        default: Vec<K>,
        notifier: Option<Callback<ToggleChange<K>>>,
    ) -> Self {
        let external = value.map(|value| {
            Signal::derive(move || value.with(|items| items.iter().cloned().collect::<ToggleSet<K>>()))
        });

        let current = external.map(|external| external.get_untracked());
        let seed = ToggleSet::from(default);
        let admitted = match &current {
            Some(current) => policy.admits(current),
            None => policy.admits(&seed),
        };
        if !admitted {
            logging::warn!(
                "{} disclosure seeded with {} active items",
                policy.mode(),
                current.as_ref().map_or(seed.len(), ToggleSet::len)
            );
        }

        Self {
            binding: store_value(ControllerBinding::from_props(current, Some(seed), None)),
            external,
            notifier: external.and(notifier),
            revision: create_trigger(),
            policy,
        }
    }

    /// Ownership mode fixed at creation.
    pub fn mode(&self) -> BindingMode {
        if self.external.is_some() {
            BindingMode::Controlled
        } else {
            BindingMode::Uncontrolled
        }
    }

    /// Policy applied to every request.
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Whether requests are computed but reach nobody.
    pub fn is_read_only(&self) -> bool {
        self.external.is_some() && self.notifier.is_none()
    }

    /// Reactive snapshot of the active set.
    pub fn current_set(&self) -> ToggleSet<K> {
        self.revision.try_track();
        match self.external {
            Some(external) => external.try_get().unwrap_or_default(),
            None => self
                .binding
                .try_with_value(|binding| binding.current_set().clone())
                .unwrap_or_default(),
        }
    }

    /// Reactive membership check driving one item's visual state.
    pub fn is_active(&self, item: &K) -> bool {
        self.revision.try_track();
        let active = match self.external {
            Some(external) => external.try_with(|set| set.contains(item)),
            None => self
                .binding
                .try_with_value(|binding| binding.current_set().contains(item)),
        };
        active.unwrap_or(false)
    }

    /// Toggles `item` under the handle's policy.
    ///
    /// Returns `None` once the owning scope has been disposed.
    pub fn toggle(&self, item: K) -> Option<ToggleChange<K>> {
        let policy = self.policy;
        self.dispatch(move |binding| binding.request_toggle(item, policy))
    }

    /// Toggles `item` unless it is disabled. Disabled items never request.
    pub fn toggle_enabled(&self, item: K, disabled: bool) -> Option<ToggleChange<K>> {
        if disabled {
            None
        } else {
            self.toggle(item)
        }
    }

    /// Requests that `item` be present iff `include`.
    pub fn set_membership(&self, item: K, include: bool) -> Option<ToggleChange<K>> {
        let policy = self.policy;
        self.dispatch(move |binding| binding.request_membership(item, include, policy))
    }

    /// Re-runs every view reading this handle without changing state.
    pub fn resync(&self) {
        self.revision.try_notify();
    }

    fn dispatch(
        &self,
        request: impl FnOnce(&mut ControllerBinding<K>) -> ToggleChange<K>,
    ) -> Option<ToggleChange<K>> {
        if let Some(external) = self.external {
            let latest = external.try_get_untracked()?;
            let resupplied = self.binding.try_update_value(|binding| binding.resupply(latest))?;
            if let Err(err) = resupplied {
                logging::warn!("disclosure resupply rejected: {err}");
            }
        }

        let change = self.binding.try_update_value(request)?;

        if let Some(notifier) = self.notifier {
            notifier.call(change.clone());
        } else if self.is_read_only() {
            logging::debug_warn!("controlled disclosure has no change callback; toggle ignored");
        }
        self.resync();
        Some(change)
    }
}
