use crate::input::parse_lines;
use crate::view_model::{AppViewModel, ResultRowView};
use crate::{
    render, resolve, BatchRequest, ColorScheme, RenderedItem, RequestId, RequestState,
    ResultItem, ThemePreference, ToggleSet, EMPTY_RESULTS_PLACEHOLDER, IDLE_PLACEHOLDER,
    LOADING_PLACEHOLDER, DEFAULT_SYSTEM_PROMPT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    prompt: String,
    batch_input: String,
    request: RequestState,
    /// The current result set; only replaced by a matching completion.
    rendered: Vec<RenderedItem>,
    toggles: ToggleSet,
    notice: Option<String>,
    theme: ThemePreference,
    system_scheme: ColorScheme,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            batch_input: String::new(),
            request: RequestState::Idle,
            rendered: Vec::new(),
            toggles: ToggleSet::default(),
            notice: None,
            theme: ThemePreference::default(),
            system_scheme: ColorScheme::default(),
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn batch_input(&self) -> &str {
        &self.batch_input
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn toggles(&self) -> &ToggleSet {
        &self.toggles
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn color_scheme(&self) -> ColorScheme {
        resolve(self.theme, self.system_scheme)
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.request.is_loading();
        let placeholder = match &self.request {
            RequestState::Idle => Some(IDLE_PLACEHOLDER),
            RequestState::Loading { .. } if self.rendered.is_empty() => Some(LOADING_PLACEHOLDER),
            RequestState::Success(results) if results.is_empty() => {
                Some(EMPTY_RESULTS_PLACEHOLDER)
            }
            _ => None,
        };
        let error = match &self.request {
            RequestState::Failed(message) => Some(message.clone()),
            _ => None,
        };
        let items = self
            .rendered
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let visibility = self.toggles.get(index).unwrap_or_default();
                ResultRowView {
                    index,
                    input: item.input.clone(),
                    output: item.display.clone(),
                    structured: item.structured,
                    visibility,
                    toggle_label: visibility.toggle_label(),
                }
            })
            .collect();

        AppViewModel {
            loading,
            submit_enabled: !loading,
            notice: self.notice.clone(),
            error,
            placeholder,
            items,
            toggle_all_enabled: !self.toggles.is_empty(),
            batch_line_count: parse_lines(&self.batch_input).len(),
            theme: self.theme,
            color_scheme: self.color_scheme(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
        self.mark_dirty();
    }

    pub(crate) fn set_batch_input(&mut self, batch_input: String) {
        self.batch_input = batch_input;
        self.mark_dirty();
    }

    pub(crate) fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
        self.mark_dirty();
    }

    pub(crate) fn begin_submission(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.request = RequestState::Loading { request_id };
        self.notice = None;
        self.mark_dirty();
        request_id
    }

    /// Replaces the result set if `request_id` is the call in flight.
    pub(crate) fn apply_success(&mut self, request_id: RequestId, results: Vec<ResultItem>) -> bool {
        if self.request.in_flight() != Some(request_id) {
            return false;
        }
        self.rendered = render(&results);
        self.toggles = ToggleSet::new(self.rendered.len());
        self.request = RequestState::Success(results);
        self.mark_dirty();
        true
    }

    /// Discards the result set if `request_id` is the call in flight.
    pub(crate) fn apply_failure(&mut self, request_id: RequestId, message: String) -> bool {
        if self.request.in_flight() != Some(request_id) {
            return false;
        }
        self.rendered.clear();
        self.toggles = ToggleSet::default();
        self.request = RequestState::Failed(message);
        self.mark_dirty();
        true
    }

    pub(crate) fn toggle_item(&mut self, index: usize) {
        if self.toggles.toggle(index).is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_all(&mut self) {
        if self.toggles.toggle_all().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
        self.mark_dirty();
    }

    pub(crate) fn set_system_scheme(&mut self, scheme: ColorScheme) {
        let before = self.color_scheme();
        self.system_scheme = scheme;
        if self.color_scheme() != before {
            self.mark_dirty();
        }
    }

    pub(crate) fn collect_request(&self) -> Result<BatchRequest, crate::ValidationError> {
        crate::collect(&self.prompt, &self.batch_input)
    }
}
