//! Chart request flow: query text and kind in, bound dataset and selection
//! out, rendered on demand with the current kind.

use common::{ChartKind, ChartQueryRequest, ChartQueryResponse, Dataset, FieldSelection, RequestError};
use serde::Serialize;
use tracing::debug;

use crate::chart::RenderedChart;
use crate::dispatch::{ChartDispatcher, Diagnostic};
use crate::request::{RequestController, RequestState, Resolution, Ticket, TriggerPolicy};

/// Key the query backend rewrites every row's category value under.
pub const NAME_FIELD: &str = "name";

/// Dataset and field selection from one successful response. Always replaced
/// together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBinding {
    pub dataset: Dataset,
    pub selection: FieldSelection,
}

impl TryFrom<ChartQueryResponse> for ChartBinding {
    type Error = RequestError;

    fn try_from(response: ChartQueryResponse) -> Result<Self, Self::Error> {
        let ChartQueryResponse {
            data,
            x_field,
            y_fields,
            ..
        } = response;

        let category_field = if !data.all_contain(&x_field) && data.all_contain(NAME_FIELD) {
            debug!(x_field = %x_field, "Rows carry the category under \"name\"");
            NAME_FIELD.to_string()
        } else {
            x_field
        };

        let selection = FieldSelection::new(category_field, y_fields).map_err(RequestError::malformed)?;
        Ok(Self {
            dataset: data,
            selection,
        })
    }
}

/// What the chart area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartContent {
    /// Nothing requested yet.
    Placeholder,
    Rendered(RenderedChart),
    Diagnostic(Diagnostic),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub loading: bool,
    pub content: ChartContent,
}

/// Owns the query text, the chart kind selection and the bound result.
#[derive(Debug, Clone)]
pub struct QueryController {
    query: String,
    kind: ChartKind,
    request: RequestController<ChartBinding>,
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryController {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            kind: ChartKind::default(),
            request: RequestController::new(TriggerPolicy::KeepPrevious),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Changing the kind re-dispatches the bound data; no new request.
    pub fn set_kind(&mut self, kind: ChartKind) {
        self.kind = kind;
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    pub fn state(&self) -> RequestState<&ChartBinding> {
        self.request.state()
    }

    pub fn binding(&self) -> Option<&ChartBinding> {
        self.request.bound()
    }

    /// Records the inputs and starts a request, or returns `None` while a
    /// request is already in flight.
    pub fn trigger(&mut self, query: impl Into<String>, kind: ChartKind) -> Option<(Ticket, ChartQueryRequest)> {
        if self.request.is_loading() {
            debug!("Chart request already in flight");
            return None;
        }

        self.query = query.into();
        self.kind = kind;
        let ticket = self.request.trigger()?;
        Some((
            ticket,
            ChartQueryRequest {
                query: self.query.clone(),
                chart_type: kind,
            },
        ))
    }

    pub fn resolve(&mut self, ticket: Ticket, result: Result<ChartQueryResponse, RequestError>) -> Resolution {
        let binding = result.and_then(ChartBinding::try_from);
        self.request.resolve(ticket, binding)
    }

    pub fn expire(&mut self, ticket: Ticket, after_ms: u64) -> bool {
        self.request.expire(ticket, after_ms)
    }

    pub fn reset(&mut self) -> bool {
        self.request.reset()
    }

    pub fn view(&self, dispatcher: &ChartDispatcher) -> ChartView {
        let loading = self.request.is_loading();

        let content = match self.request.state() {
            RequestState::Failed(err) => ChartContent::Failed(err.to_string()),
            RequestState::Idle => ChartContent::Placeholder,
            RequestState::Ready(binding) => self.dispatch(dispatcher, binding),
            RequestState::Loading => match self.request.bound() {
                Some(binding) => self.dispatch(dispatcher, binding),
                None => ChartContent::Placeholder,
            },
        };

        ChartView { loading, content }
    }

    fn dispatch(&self, dispatcher: &ChartDispatcher, binding: &ChartBinding) -> ChartContent {
        match dispatcher.render(self.kind, &binding.dataset, &binding.selection) {
            Ok(chart) => ChartContent::Rendered(chart),
            Err(diagnostic) => ChartContent::Diagnostic(diagnostic),
        }
    }
}
