//! Runs a [`Controller`] inside a Yew component with real browser timers.

use std::cell::{Cell, Ref, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::timer::{Scheduler, TaskId};
use crate::widgets::Controller;

enum Handle {
    Once(Timeout),
    Every(Interval),
}

/// `gloo-timers` handles keyed by task id. Dropping a handle clears the
/// underlying browser timer.
struct BrowserTimers<C: Controller> {
    owner: Weak<Driver<C>>,
    next_id: u64,
    live: HashMap<TaskId, Handle>,
    // One-shots that already fired. Their closure may still be on the
    // stack, so they are only dropped on the next event-driven dispatch.
    spent: Vec<TaskId>,
}

impl<C: Controller> BrowserTimers<C> {
    fn new(owner: Weak<Driver<C>>) -> Self {
        Self {
            owner,
            next_id: 0,
            live: HashMap::new(),
            spent: Vec::new(),
        }
    }

    fn allocate(&mut self) -> TaskId {
        let id = TaskId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    fn purge_spent(&mut self) {
        for id in self.spent.drain(..) {
            self.live.remove(&id);
        }
    }
}

impl<C: Controller> Scheduler<C::Msg> for BrowserTimers<C> {
    fn after(&mut self, delay_ms: u32, msg: C::Msg) -> TaskId {
        let id = self.allocate();
        let owner = self.owner.clone();
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(driver) = owner.upgrade() {
                driver.fire(id, msg);
            }
        });
        self.live.insert(id, Handle::Once(timeout));
        id
    }

    fn every(&mut self, period_ms: u32, msg: C::Msg) -> TaskId {
        let id = self.allocate();
        let owner = self.owner.clone();
        let interval = Interval::new(period_ms, move || {
            if let Some(driver) = owner.upgrade() {
                driver.deliver(msg.clone());
            }
        });
        self.live.insert(id, Handle::Every(interval));
        id
    }

    fn cancel(&mut self, id: TaskId) {
        if self.spent.contains(&id) {
            return;
        }
        match self.live.remove(&id) {
            Some(Handle::Once(timeout)) => drop(timeout),
            Some(Handle::Every(interval)) => drop(interval),
            None => {}
        }
    }
}

pub struct Driver<C: Controller> {
    controller: RefCell<C>,
    timers: RefCell<BrowserTimers<C>>,
    revision: Cell<u32>,
    redraw: UseStateSetter<u32>,
}

impl<C: Controller> Driver<C> {
    fn new(controller: C, redraw: UseStateSetter<u32>) -> Rc<Self> {
        Rc::new_cyclic(|owner| Driver {
            controller: RefCell::new(controller),
            timers: RefCell::new(BrowserTimers::new(owner.clone())),
            revision: Cell::new(0),
            redraw,
        })
    }

    pub fn state(&self) -> Ref<'_, C> {
        self.controller.borrow()
    }

    /// Feed a browser event into the controller.
    pub fn dispatch(&self, msg: C::Msg) {
        self.timers.borrow_mut().purge_spent();
        self.deliver(msg);
    }

    /// Callback that maps an event to a message and dispatches it.
    pub fn callback<E: 'static>(self: &Rc<Self>, to_msg: impl Fn(E) -> C::Msg + 'static) -> Callback<E> {
        let driver = Rc::clone(self);
        Callback::from(move |event| driver.dispatch(to_msg(event)))
    }

    fn fire(&self, id: TaskId, msg: C::Msg) {
        self.timers.borrow_mut().spent.push(id);
        self.deliver(msg);
    }

    fn deliver(&self, msg: C::Msg) {
        let changed = {
            let mut timers = self.timers.borrow_mut();
            self.controller.borrow_mut().update(msg, &mut *timers)
        };
        if changed {
            let next = self.revision.get().wrapping_add(1);
            self.revision.set(next);
            self.redraw.set(next);
        }
    }
}

/// Owns a controller for the lifetime of the calling component. Timers die
/// with the component.
#[hook]
pub fn use_controller<C, F>(init: F) -> Rc<Driver<C>>
where
    C: Controller,
    F: FnOnce() -> C,
{
    let revision = use_state(|| 0u32);
    let redraw = revision.setter();
    let driver = use_memo(move |_| Driver::new(init(), redraw), ());
    (*driver).clone()
}
