use log::info;
use yew::prelude::*;

/// Visibility of the page's single contact dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    is_open: bool,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns whether anything changed; opening an open modal is a no-op.
    pub fn open(&mut self) -> bool {
        let changed = !self.is_open;
        self.is_open = true;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.is_open;
        self.is_open = false;
        changed
    }
}

/// Handed to every descendant of the layout through context.
#[derive(Clone, PartialEq)]
pub struct ModalHandle {
    pub is_open: bool,
    open: Callback<()>,
    close: Callback<()>,
}

impl ModalHandle {
    pub fn open_modal(&self) {
        self.open.emit(());
    }

    pub fn close_modal(&self) {
        self.close.emit(());
    }
}

impl Default for ModalHandle {
    fn default() -> Self {
        Self {
            is_open: false,
            open: Callback::from(|_| ()),
            close: Callback::from(|_| ()),
        }
    }
}

/// Owns the modal state. Call once, in the page's root layout.
#[hook]
pub fn use_modal_controller() -> ModalHandle {
    let state = use_state(ModalState::default);

    let open = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = *state;
            if next.open() {
                info!("Opening contact modal");
                state.set(next);
            }
        })
    };

    let close = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = *state;
            if next.close() {
                info!("Closing contact modal");
                state.set(next);
            }
        })
    };

    ModalHandle {
        is_open: state.is_open(),
        open,
        close,
    }
}

/// Modal controls for any component below the layout. Outside a provider
/// the handle does nothing.
#[hook]
pub fn use_modal() -> ModalHandle {
    use_context::<ModalHandle>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::interaction::submission::virtual_clock::VirtualClock;
    use crate::interaction::submission::{ContactDetails, FormController, FormState};

    const DELAY: u32 = 1_500;

    fn details() -> ContactDetails {
        ContactDetails::new("Ada Lovelace", "ada@example.com", "")
    }

    /// The dialog's effect is keyed on `is_open`, so it only fires on change.
    fn set_visible(
        modal: &mut ModalState,
        form: &mut FormController<VirtualClock>,
        open: bool,
    ) {
        let changed = if open { modal.open() } else { modal.close() };
        if changed {
            form.dialog_visibility_changed(modal.is_open());
        }
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut modal = ModalState::default();
        assert!(!modal.is_open());
        assert!(modal.open());
        assert!(!modal.open());
        assert!(modal.is_open());
        assert!(modal.close());
        assert!(!modal.close());
        assert!(!modal.is_open());
    }

    #[test]
    fn reopening_resets_the_form() {
        let clock = VirtualClock::default();
        let mut modal = ModalState::default();
        let mut form = FormController::new(clock.clone(), DELAY, |_| ());

        set_visible(&mut modal, &mut form, true);
        assert!(form.submit(&details()));
        clock.advance(DELAY as u64);
        assert_eq!(form.state(), FormState::Success);

        set_visible(&mut modal, &mut form, false);
        set_visible(&mut modal, &mut form, true);
        assert!(modal.is_open());
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn closing_mid_submission_cancels_it() {
        let clock = VirtualClock::default();
        let successes = Rc::new(Cell::new(0));
        let mut modal = ModalState::default();
        let mut form = {
            let successes = successes.clone();
            FormController::new(clock.clone(), DELAY, move |state| {
                if state == FormState::Success {
                    successes.set(successes.get() + 1);
                }
            })
        };

        set_visible(&mut modal, &mut form, true);
        assert!(form.submit(&details()));
        clock.advance(500);
        assert_eq!(form.state(), FormState::Submitting);

        set_visible(&mut modal, &mut form, false);
        assert_eq!(clock.pending(), 0);
        clock.advance(5_000);

        set_visible(&mut modal, &mut form, true);
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(successes.get(), 0);
    }
}
