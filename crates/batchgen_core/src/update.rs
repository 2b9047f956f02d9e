use crate::{AppState, Effect, Msg, VALIDATION_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PromptChanged(prompt) => {
            state.set_prompt(prompt);
            Vec::new()
        }
        Msg::BatchInputChanged(batch) => {
            state.set_batch_input(batch);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The trigger is disabled while loading; at most one call is in flight.
            if state.request().is_loading() {
                return (state, Vec::new());
            }
            match state.collect_request() {
                Ok(request) => {
                    let request_id = state.begin_submission();
                    vec![Effect::SubmitBatch {
                        request_id,
                        request,
                    }]
                }
                Err(_) => {
                    state.set_notice(Some(VALIDATION_MESSAGE.to_string()));
                    Vec::new()
                }
            }
        }
        Msg::GenerateSucceeded {
            request_id,
            results,
        } => {
            state.apply_success(request_id, results);
            Vec::new()
        }
        Msg::GenerateFailed {
            request_id,
            message,
        } => {
            state.apply_failure(request_id, message);
            Vec::new()
        }
        Msg::ItemToggleClicked { index } => {
            state.toggle_item(index);
            Vec::new()
        }
        Msg::ToggleAllClicked => {
            state.toggle_all();
            Vec::new()
        }
        Msg::ThemeSelected(theme) => {
            state.set_theme(theme);
            vec![Effect::PersistTheme(theme)]
        }
        Msg::ThemeRestored(theme) => {
            state.set_theme(theme);
            Vec::new()
        }
        Msg::SystemSchemeChanged(scheme) => {
            state.set_system_scheme(scheme);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
