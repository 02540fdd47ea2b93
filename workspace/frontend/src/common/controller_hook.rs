use std::cell::{Ref, RefCell};
use std::future::Future;
use std::rc::Rc;

use charts::{ForecastController, QueryController, Resolution, Ticket};
use common::{ChartQueryResponse, ForecastResponse, RequestError};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::settings;

/// A request controller that can be driven by [`ControllerHandle::run`].
pub trait TicketedController: 'static {
    type Response: 'static;

    fn resolve(&mut self, ticket: Ticket, result: Result<Self::Response, RequestError>) -> Resolution;

    fn expire(&mut self, ticket: Ticket, after_ms: u64) -> bool;
}

impl TicketedController for QueryController {
    type Response = ChartQueryResponse;

    fn resolve(&mut self, ticket: Ticket, result: Result<ChartQueryResponse, RequestError>) -> Resolution {
        QueryController::resolve(self, ticket, result)
    }

    fn expire(&mut self, ticket: Ticket, after_ms: u64) -> bool {
        QueryController::expire(self, ticket, after_ms)
    }
}

impl TicketedController for ForecastController {
    type Response = ForecastResponse;

    fn resolve(&mut self, ticket: Ticket, result: Result<ForecastResponse, RequestError>) -> Resolution {
        ForecastController::resolve(self, ticket, result)
    }

    fn expire(&mut self, ticket: Ticket, after_ms: u64) -> bool {
        ForecastController::expire(self, ticket, after_ms)
    }
}

/// Shared, mutable controller that re-renders its component on change.
pub struct ControllerHandle<C> {
    inner: Rc<RefCell<C>>,
    force_update: UseForceUpdateHandle,
}

impl<C> Clone for ControllerHandle<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            force_update: self.force_update.clone(),
        }
    }
}

impl<C> PartialEq for ControllerHandle<C> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C: 'static> ControllerHandle<C> {
    pub fn borrow(&self) -> Ref<'_, C> {
        self.inner.borrow()
    }

    /// Mutates the controller and schedules a re-render.
    pub fn update<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let result = f(&mut self.inner.borrow_mut());
        self.force_update.force_update();
        result
    }
}

impl<C: TicketedController> ControllerHandle<C> {
    /// Awaits `request` on the browser event loop and hands its result to the
    /// controller. If it takes longer than the configured timeout the
    /// controller is told so; a later answer is still offered to it and
    /// dropped there if a newer request was issued meanwhile.
    pub fn run<Fut>(&self, ticket: Ticket, request: Fut, toast: Option<ToastContext>)
    where
        Fut: Future<Output = Result<C::Response, RequestError>> + 'static,
    {
        let timeout_ms = settings::get_settings().request_timeout_ms;

        let timer = {
            let handle = self.clone();
            let toast = toast.clone();
            Timeout::new(timeout_ms, move || {
                if handle.update(|c| c.expire(ticket, u64::from(timeout_ms))) {
                    log::warn!("Request {} timed out after {} ms", ticket.seq(), timeout_ms);
                    if let Some(toast) = toast {
                        toast.show_error(RequestError::TimedOut { after_ms: u64::from(timeout_ms) }.to_string());
                    }
                }
            })
        };

        let handle = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = request.await;
            drop(timer);

            let error = result.as_ref().err().map(ToString::to_string);
            match handle.update(|c| c.resolve(ticket, result)) {
                Resolution::Applied => {
                    if let (Some(message), Some(toast)) = (error, toast) {
                        toast.show_error(message);
                    }
                }
                Resolution::Stale => log::debug!("Dropped stale response for request {}", ticket.seq()),
            }
        });
    }
}

/// Keeps a controller across renders of the calling component.
#[hook]
pub fn use_controller<C, F>(init: F) -> ControllerHandle<C>
where
    C: 'static,
    F: FnOnce() -> C,
{
    let inner = use_mut_ref(init);
    let force_update = use_force_update();
    ControllerHandle { inner, force_update }
}
