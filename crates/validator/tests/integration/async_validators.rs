//! Validators that suspend before answering.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use leaf_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{entity, init_tracing, owned, pairs};

/// Sleeps, records its call, then compares against a list of taken names.
struct Unique {
    taken: Vec<String>,
    delay: Duration,
    log: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Validator for Unique {
    async fn validate(&self, value: &Value, ctx: &FieldContext<'_>) -> Outcome {
        tokio::time::sleep(self.delay).await;
        self.log
            .lock()
            .unwrap()
            .push(format!("unique:{}", ctx.field()));
        Outcome::from_bool(value.as_str().is_some_and(|v| !self.taken.iter().any(|t| t == v)))
    }

    fn describe(&self) -> String {
        "Already taken".to_string()
    }
}

/// Yields to the scheduler and records its call.
struct Traced {
    name: String,
    log: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Validator for Traced {
    async fn validate(&self, _value: &Value, ctx: &FieldContext<'_>) -> Outcome {
        tokio::task::yield_now().await;
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.name, ctx.field()));
        Outcome::Valid
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

fn registry(log: &Arc<Mutex<Vec<String>>>) -> Registry {
    let unique_log = Arc::clone(log);
    let traced_log = Arc::clone(log);

    Registry::default()
        .with("unique", move |args| {
            let taken = args
                .iter()
                .flat_map(|arg| arg.as_list().unwrap_or(std::slice::from_ref(arg)))
                .map(ToString::to_string)
                .collect();
            Ok(Box::new(Unique {
                taken,
                delay: Duration::from_millis(5),
                log: Arc::clone(&unique_log),
            }))
        })
        .with("traced", move |args| {
            let name = args.first().map_or_else(|| "traced".to_string(), ToString::to_string);
            Ok(Box::new(Traced {
                name,
                log: Arc::clone(&traced_log),
            }))
        })
}

const ACCOUNT: &str = r"
    function Account() {
        /**
         * @validator traced('first')
         * @validator required
         * @validator unique(['admin', 'root'])
         * @validator traced('last')
         */
        this.login = '';

        /**
         * @validator traced('display')
         * @validator length(1, 20)
         */
        this.display = '';
    }
";

#[tokio::test]
async fn suspending_validators_keep_order() {
    let _tracing = init_tracing();
    let log = Arc::new(Mutex::new(Vec::new()));
    let pipeline = Pipeline::compile(ACCOUNT, &registry(&log)).unwrap();

    let result = pipeline
        .validate(&entity(json!({ "login": "alice", "display": "Alice" })), false)
        .await;

    assert_eq!(result, None);
    assert_eq!(
        *log.lock().unwrap(),
        [
            "first:login",
            "unique:login",
            "last:login",
            "display:display",
        ]
    );
}

#[tokio::test]
async fn suspending_failure_stops_chain() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let pipeline = Pipeline::compile(ACCOUNT, &registry(&log)).unwrap();

    let report = pipeline
        .validate(&entity(json!({ "login": "root", "display": "" })), Mode::StopOnFirst)
        .await
        .unwrap();

    assert_eq!(
        pairs(&report),
        vec![
            owned("login", &["Already taken"]),
            owned("display", &["Must be between 1 and 20 characters"]),
        ]
    );
    assert_eq!(
        *log.lock().unwrap(),
        ["first:login", "unique:login", "display:display"]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn pipeline_is_shared_across_tasks() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let pipeline = Arc::new(Pipeline::compile(ACCOUNT, &registry(&log)).unwrap());

    let handles: Vec<_> = ["admin", "bob", "root", "carol"]
        .into_iter()
        .map(|login| {
            let pipeline = Arc::clone(&pipeline);
            tokio::spawn(async move {
                let input = entity(json!({ "login": login, "display": login }));
                pipeline.validate(&input, false).await.is_some()
            })
        })
        .collect();

    let mut failed = Vec::new();
    for handle in handles {
        failed.push(handle.await.unwrap());
    }
    assert_eq!(failed, [true, false, true, false]);
}

#[tokio::test]
async fn validate_serialize_with_struct() {
    #[derive(serde::Serialize)]
    struct Signup {
        email: String,
        username: String,
        role: Option<String>,
    }

    let pipeline = Pipeline::compile(crate::USER, &Registry::default()).unwrap();
    let signup = Signup {
        email: "alice@example.com".into(),
        username: "al".into(),
        role: None,
    };

    let report = pipeline
        .validate_serialize(&signup, ValidateOptions::aggregate_all())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        pairs(&report),
        vec![owned("username", &["Must be between 3 and 30 characters"])]
    );

    let err = pipeline.validate_serialize("text", false).await.unwrap_err();
    assert_eq!(err.to_string(), "entity must serialize to an object, found string");
}
