//! Mount-node lifecycle and the context value published to modal consumers.
//!
//! # Design
//! - The mount reference is a two-state value; it moves from `Unattached` to
//!   `Attached` once and never back while the provider lives.
//! - Only the provider owns the reducer holding this state. Descendants see an
//!   immutable [`ModalContainer`] snapshot with a single read accessor.
//! - Generic over the handle type so the lifecycle is testable without a DOM.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::error::ModalError;

/// Lifecycle of the single mount node owned by a provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MountState<H> {
    /// The provider rendered but the host has not confirmed attachment.
    #[default]
    Unattached,
    /// The mount element is in the document.
    Attached(H),
}

/// Result of feeding an attachment notification into [`MountState::attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachOutcome {
    /// First attachment; the state changed.
    Attached,
    /// The same element was reported again.
    AlreadyAttached,
    /// The notification carried no element (e.g. a detach callback).
    IgnoredEmpty,
    /// A different element was offered after attachment and refused.
    Rejected,
}

impl AttachOutcome {
    /// Whether the notification changed the state.
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Attached)
    }
}

impl<H: PartialEq> MountState<H> {
    /// Apply an attachment notification.
    ///
    /// Empty notifications never clear an attached node, and an attached node
    /// is never swapped for another one.
    pub fn attach(&mut self, node: Option<H>) -> AttachOutcome {
        let Some(node) = node else {
            return AttachOutcome::IgnoredEmpty;
        };
        match self {
            Self::Unattached => {
                *self = Self::Attached(node);
                AttachOutcome::Attached
            }
            Self::Attached(current) if *current == node => AttachOutcome::AlreadyAttached,
            Self::Attached(_) => AttachOutcome::Rejected,
        }
    }
}

impl<H> MountState<H> {
    /// Borrow the mount node when attached.
    #[must_use]
    pub const fn node(&self) -> Option<&H> {
        match self {
            Self::Unattached => None,
            Self::Attached(node) => Some(node),
        }
    }

    /// Whether the mount node is available for portals.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        matches!(self, Self::Attached(_))
    }
}

impl<H: Clone + PartialEq> Reducible for MountState<H> {
    type Action = Option<H>;

    fn reduce(self: Rc<Self>, node: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.attach(node).changed() {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Snapshot of the registry published to every descendant of a provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalContainer<H> {
    mount: MountState<H>,
}

impl<H> ModalContainer<H> {
    /// Wrap the provider's current mount state.
    #[must_use]
    pub const fn new(mount: MountState<H>) -> Self {
        Self { mount }
    }

    /// The mount node modal content is projected into, when attached.
    #[must_use]
    pub const fn mount_node(&self) -> Option<&H> {
        self.mount.node()
    }

    /// Lifecycle state of the mount node.
    #[must_use]
    pub const fn mount(&self) -> &MountState<H> {
        &self.mount
    }
}

/// Turn a context lookup into the container or the configuration error.
///
/// # Errors
///
/// Returns [`ModalError::MissingContainer`] when no provider published a
/// container above the caller.
pub fn resolve_container<H>(
    found: Option<ModalContainer<H>>,
) -> Result<ModalContainer<H>, ModalError> {
    found.ok_or(ModalError::MissingContainer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_attach_moves_to_attached() {
        let mut state = MountState::Unattached;
        assert_eq!(state.attach(Some("root")), AttachOutcome::Attached);
        assert_eq!(state.node(), Some(&"root"));
        assert!(state.is_attached());
    }

    #[test]
    fn empty_notifications_never_clear() {
        let mut state = MountState::<&str>::Unattached;
        assert_eq!(state.attach(None), AttachOutcome::IgnoredEmpty);
        assert_eq!(state, MountState::Unattached);

        state.attach(Some("root"));
        for _ in 0..3 {
            assert_eq!(state.attach(None), AttachOutcome::IgnoredEmpty);
            assert_eq!(state.node(), Some(&"root"));
        }
    }

    #[test]
    fn attached_node_is_never_swapped() {
        let mut state = MountState::Attached("root");
        assert_eq!(state.attach(Some("root")), AttachOutcome::AlreadyAttached);
        assert_eq!(state.attach(Some("other")), AttachOutcome::Rejected);
        assert_eq!(state.node(), Some(&"root"));
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let initial = Rc::new(MountState::<u8>::Unattached);
        let same = Rc::clone(&initial).reduce(None);
        assert!(Rc::ptr_eq(&initial, &same));

        let attached = Rc::clone(&initial).reduce(Some(7));
        assert_eq!(*attached, MountState::Attached(7));

        let repeated = Rc::clone(&attached).reduce(Some(7));
        assert!(Rc::ptr_eq(&attached, &repeated));
        let rejected = Rc::clone(&attached).reduce(Some(8));
        assert!(Rc::ptr_eq(&attached, &rejected));
    }

    #[test]
    fn container_exposes_node_only_when_attached() {
        let pending = ModalContainer::new(MountState::<u8>::Unattached);
        assert_eq!(pending.mount_node(), None);
        let ready = ModalContainer::new(MountState::Attached(1_u8));
        assert_eq!(ready.mount_node(), Some(&1));
        assert!(ready.mount().is_attached());
    }

    #[test]
    fn resolving_without_provider_always_fails() {
        for _ in 0..3 {
            let err = resolve_container::<u8>(None);
            match err {
                Err(ModalError::MissingContainer) => {}
                other => panic!("expected missing container, got {other:?}"),
            }
        }
        let found = resolve_container(Some(ModalContainer::new(MountState::Attached(2_u8))));
        assert!(matches!(found, Ok(container) if container.mount_node() == Some(&2)));
    }
}
