use std::time::Instant;

use jobwatch_core::{Effect, Msg};
use jobwatch_engine::{EngineEvent, QueryRunner};
use jobwatch_logging::{jw_debug, jw_warn};

/// Bridges core effects to the fetch runtime and engine events back to
/// messages.
pub struct EffectRunner {
    runner: QueryRunner,
}

impl EffectRunner {
    pub fn new(runner: QueryRunner) -> Self {
        Self { runner }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { key, seq } => {
                    jw_debug!("Fetch key={} seq={}", key, seq);
                    self.runner.fetch(key, seq);
                }
            }
        }
    }

    /// Every finished fetch as a `Msg::QueryResolved` stamped with `now`.
    pub fn drain(&self, now: Instant) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.runner.try_recv() {
            msgs.push(to_msg(event, now));
        }
        msgs
    }
}

fn to_msg(event: EngineEvent, now: Instant) -> Msg {
    match event {
        EngineEvent::QueryCompleted { key, seq, result } => Msg::QueryResolved {
            key,
            seq,
            result: result.map_err(|err| {
                jw_warn!("Query {} failed: {}", key, err);
                err.to_string()
            }),
            now,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use jobwatch_core::{QueryData, QueryKey};
    use jobwatch_engine::{DataSource, NetworkError};

    struct FailingLogs;

    #[async_trait::async_trait]
    impl DataSource for FailingLogs {
        async fn fetch(&self, key: QueryKey) -> Result<QueryData, NetworkError> {
            match key {
                QueryKey::Logs { .. } => Err(NetworkError {
                    status: Some(503),
                    message: "network response was not ok (503 Service Unavailable)".into(),
                }),
                _ => Ok(QueryData::Logs(String::new())),
            }
        }
    }

    fn drain_one(effects: &EffectRunner) -> Msg {
        for _ in 0..200 {
            if let Some(msg) = effects.drain(Instant::now()).pop() {
                return msg;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("no result within 2s");
    }

    #[test]
    fn failed_fetch_becomes_error_message() {
        let effects = EffectRunner::new(QueryRunner::new(Arc::new(FailingLogs)));
        let key = QueryKey::Logs { lines: 500 };
        effects.enqueue(vec![Effect::Fetch { key, seq: 4 }]);

        match drain_one(&effects) {
            Msg::QueryResolved {
                key: got,
                seq,
                result,
                ..
            } => {
                assert_eq!(got, key);
                assert_eq!(seq, 4);
                assert_eq!(
                    result.unwrap_err(),
                    "network response was not ok (503 Service Unavailable)"
                );
            }
            other => panic!("unexpected message {other:?}"),
        }
    }
}
