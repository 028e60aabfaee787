use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDetails {
    pub full_name: String,
    pub work_email: String,
    pub company_url: Option<String>,
}

impl ContactDetails {
    pub fn new(
        full_name: impl Into<String>,
        work_email: impl Into<String>,
        company_url: impl Into<String>,
    ) -> Self {
        let company_url = company_url.into();
        let company_url = company_url.trim();
        Self {
            full_name: full_name.into(),
            work_email: work_email.into(),
            company_url: (!company_url.is_empty()).then(|| company_url.to_string()),
        }
    }

    /// Presence check only; the company URL is optional.
    pub fn has_required_fields(&self) -> bool {
        !self.full_name.trim().is_empty() && !self.work_email.trim().is_empty()
    }
}

/// Identifies one submission attempt. A completion carrying an old ticket
/// belongs to an attempt that was reset and is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct SubmissionFlow {
    state: FormState,
    generation: u64,
}

impl SubmissionFlow {
    pub fn state(&self) -> FormState {
        self.state
    }

    /// `Idle -> Submitting`. `None` when already in flight, finished, or
    /// missing required fields.
    pub fn begin(&mut self, details: &ContactDetails) -> Option<Ticket> {
        if self.state != FormState::Idle || !details.has_required_fields() {
            return None;
        }
        self.state = FormState::Submitting;
        self.generation += 1;
        Some(Ticket(self.generation))
    }

    /// `Submitting -> Success` for the current attempt only.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.state != FormState::Submitting || ticket.0 != self.generation {
            return false;
        }
        self.state = FormState::Success;
        true
    }

    pub fn reset(&mut self) {
        self.state = FormState::Idle;
        self.generation += 1;
    }
}

/// Runs a task once after a delay. Dropping the handle cancels the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers through `gloo_timers`; `Timeout` clears itself on drop.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// One form instance: the flow, its pending completion and a change hook.
pub struct FormController<S: Scheduler> {
    flow: Rc<RefCell<SubmissionFlow>>,
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
    notify: Rc<dyn Fn(FormState)>,
}

impl<S: Scheduler> FormController<S> {
    pub fn new(scheduler: S, delay_ms: u32, notify: impl Fn(FormState) + 'static) -> Self {
        Self {
            flow: Rc::new(RefCell::new(SubmissionFlow::default())),
            scheduler,
            delay_ms,
            pending: None,
            notify: Rc::new(notify),
        }
    }

    pub fn state(&self) -> FormState {
        self.flow.borrow().state()
    }

    /// Starts a submission. The state reads `Submitting` when this returns
    /// and `Success` once the delay has elapsed.
    pub fn submit(&mut self, details: &ContactDetails) -> bool {
        let Some(ticket) = self.flow.borrow_mut().begin(details) else {
            return false;
        };
        (self.notify)(FormState::Submitting);

        let flow = Rc::downgrade(&self.flow);
        let notify = Rc::clone(&self.notify);
        let task = Box::new(move || {
            let Some(flow) = flow.upgrade() else {
                return;
            };
            let completed = flow.borrow_mut().complete(ticket);
            if completed {
                notify(FormState::Success);
            }
        });
        self.pending = Some(self.scheduler.schedule(self.delay_ms, task));
        true
    }

    /// Drops any pending completion and returns to `Idle` without notifying.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.flow.borrow_mut().reset();
    }

    pub fn reset(&mut self) {
        self.cancel();
        (self.notify)(FormState::Idle);
    }

    /// Called whenever the dialog hosting this form shows or hides. Every
    /// change starts the form over; closing also drops an in-flight
    /// submission so it cannot land on the next open.
    pub fn dialog_visibility_changed(&mut self, is_open: bool) {
        if !is_open && self.state() == FormState::Submitting {
            debug!("dialog closed mid-submission, cancelling");
        }
        self.reset();
    }
}

#[derive(Clone)]
pub struct UseSubmission {
    pub state: FormState,
    pub submit: Callback<ContactDetails>,
    /// For forms inside a dialog; see `FormController::dialog_visibility_changed`.
    pub visibility_changed: Callback<bool>,
}

/// Binds a `FormController` to a component. The pending timer lives as long
/// as the component and is cancelled when it unmounts.
#[hook]
pub fn use_submission(name: &'static str, delay_ms: u32) -> UseSubmission {
    let state = use_state(FormState::default);
    let controller = {
        let setter = state.setter();
        use_mut_ref(move || {
            FormController::new(TimerScheduler, delay_ms, move |next| {
                if next == FormState::Success {
                    info!("{} form submission received", name);
                }
                setter.set(next);
            })
        })
    };

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    debug!("{} form unmounted, cancelling pending submission", name);
                    controller.borrow_mut().cancel();
                }
            },
            (),
        );
    }

    let submit = {
        let controller = controller.clone();
        Callback::from(move |details: ContactDetails| {
            if controller.borrow_mut().submit(&details) {
                info!("{} form submitting", name);
            }
        })
    };

    let visibility_changed =
        Callback::from(move |is_open: bool| controller.borrow_mut().dialog_visibility_changed(is_open));

    UseSubmission {
        state: *state,
        submit,
        visibility_changed,
    }
}

#[cfg(test)]
pub mod virtual_clock {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::Scheduler;

    struct Task {
        id: u64,
        due_ms: u64,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct ClockState {
        now_ms: u64,
        next_id: u64,
        tasks: Vec<Task>,
    }

    /// Deterministic scheduler. Time only moves through `advance`.
    #[derive(Clone, Default)]
    pub struct VirtualClock {
        inner: Rc<RefCell<ClockState>>,
    }

    pub struct VirtualTimer {
        id: u64,
        clock: Weak<RefCell<ClockState>>,
    }

    impl Drop for VirtualTimer {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().tasks.retain(|task| task.id != self.id);
            }
        }
    }

    impl Scheduler for VirtualClock {
        type Handle = VirtualTimer;

        fn schedule(&self, delay_ms: u32, run: Box<dyn FnOnce()>) -> VirtualTimer {
            let mut state = self.inner.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due_ms = state.now_ms + u64::from(delay_ms);
            state.tasks.push(Task { id, due_ms, run });
            VirtualTimer {
                id,
                clock: Rc::downgrade(&self.inner),
            }
        }
    }

    impl VirtualClock {
        pub fn now(&self) -> u64 {
            self.inner.borrow().now_ms
        }

        pub fn pending(&self) -> usize {
            self.inner.borrow().tasks.len()
        }

        /// Moves time forward, running due tasks in deadline order.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let mut state = self.inner.borrow_mut();
                    let due = state
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due_ms <= target)
                        .min_by_key(|(_, task)| (task.due_ms, task.id))
                        .map(|(index, _)| index);
                    due.map(|index| {
                        let task = state.tasks.remove(index);
                        state.now_ms = task.due_ms;
                        task.run
                    })
                };
                match next {
                    Some(run) => run(),
                    None => break,
                }
            }
            self.inner.borrow_mut().now_ms = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::virtual_clock::VirtualClock;
    use super::*;
    use std::cell::RefCell;

    const DELAY: u32 = 1_500;

    fn details() -> ContactDetails {
        ContactDetails::new("Grace Hopper", "grace@example.com", "https://example.com")
    }

    fn recording_form(clock: &VirtualClock) -> (FormController<VirtualClock>, Rc<RefCell<Vec<FormState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let form = {
            let seen = seen.clone();
            FormController::new(clock.clone(), DELAY, move |state| seen.borrow_mut().push(state))
        };
        (form, seen)
    }

    #[test]
    fn company_url_is_optional() {
        let details = ContactDetails::new("Grace", "grace@example.com", "   ");
        assert_eq!(details.company_url, None);
        assert!(details.has_required_fields());
    }

    #[test]
    fn blank_required_fields_block_submission() {
        assert!(!ContactDetails::new("", "grace@example.com", "").has_required_fields());
        assert!(!ContactDetails::new("Grace", "  ", "").has_required_fields());

        let clock = VirtualClock::default();
        let (mut form, seen) = recording_form(&clock);
        assert!(!form.submit(&ContactDetails::new(" ", "", "example.com")));
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(clock.pending(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn submitting_is_immediate_and_success_waits_for_the_delay() {
        let clock = VirtualClock::default();
        let (mut form, seen) = recording_form(&clock);

        assert!(form.submit(&details()));
        assert_eq!(form.state(), FormState::Submitting);

        clock.advance(u64::from(DELAY) - 1);
        assert_eq!(form.state(), FormState::Submitting);

        clock.advance(1);
        assert_eq!(form.state(), FormState::Success);
        assert_eq!(*seen.borrow(), vec![FormState::Submitting, FormState::Success]);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let clock = VirtualClock::default();
        let (mut form, _) = recording_form(&clock);

        assert!(form.submit(&details()));
        clock.advance(700);
        assert!(!form.submit(&details()));
        assert_eq!(clock.pending(), 1);

        // Still completes on the first attempt's schedule.
        clock.advance(800);
        assert_eq!(form.state(), FormState::Success);
        assert!(!form.submit(&details()));
    }

    #[test]
    fn reset_cancels_pending_completion() {
        let clock = VirtualClock::default();
        let (mut form, seen) = recording_form(&clock);

        form.submit(&details());
        form.reset();
        assert_eq!(clock.pending(), 0);
        clock.advance(10_000);
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(*seen.borrow(), vec![FormState::Submitting, FormState::Idle]);
    }

    #[test]
    fn dropping_the_controller_cancels_its_timer() {
        let clock = VirtualClock::default();
        let (mut form, seen) = recording_form(&clock);
        form.submit(&details());
        drop(form);
        assert_eq!(clock.pending(), 0);
        clock.advance(10_000);
        assert_eq!(*seen.borrow(), vec![FormState::Submitting]);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let ready = details();
        let mut flow = SubmissionFlow::default();
        let first = flow.begin(&ready).unwrap();
        flow.reset();
        let second = flow.begin(&ready).unwrap();

        assert!(!flow.complete(first));
        assert_eq!(flow.state(), FormState::Submitting);
        assert!(flow.complete(second));
        assert_eq!(flow.state(), FormState::Success);
        assert!(!flow.complete(second));
    }

    #[test]
    fn instances_are_independent() {
        let clock = VirtualClock::default();
        let (mut inline, _) = recording_form(&clock);
        let (mut dialog, _) = recording_form(&clock);

        inline.submit(&details());
        clock.advance(1_000);
        dialog.submit(&details());
        clock.advance(500);
        assert_eq!(inline.state(), FormState::Success);
        assert_eq!(dialog.state(), FormState::Submitting);

        dialog.reset();
        clock.advance(2_000);
        assert_eq!(inline.state(), FormState::Success);
        assert_eq!(dialog.state(), FormState::Idle);
    }
}
