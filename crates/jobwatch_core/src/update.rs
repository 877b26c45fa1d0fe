use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate { route, now } => {
            state.navigate(route, now);
            state.start_due_fetches(now)
        }
        Msg::Tick { now } => {
            // Not mounted yet: nothing is observed, nothing to poll.
            if !state.is_mounted() {
                return (state, Vec::new());
            }
            state.collect_garbage(now);
            state.start_due_fetches(now)
        }
        Msg::QueryResolved {
            key,
            seq,
            result,
            now,
        } => {
            state.resolve(key, seq, result, now);
            Vec::new()
        }
        Msg::CompanyToggled(company) => {
            state.toggle_company(company);
            Vec::new()
        }
    };

    (state, effects)
}
