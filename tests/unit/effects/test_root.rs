use async_trait::async_trait;
use placemark_client::effects::{EffectHandler, EffectRoot};
use placemark_client::error::AppError;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

enum Mode {
    RunForever,
    FailFast,
    Panic,
    CompleteOk,
}

struct ScriptedHandler {
    name: &'static str,
    mode: Mode,
    invocations: Arc<AtomicU32>,
    ticks: Arc<AtomicU32>,
}

impl ScriptedHandler {
    fn new(name: &'static str, mode: Mode) -> (Arc<Self>, Arc<AtomicU32>, Arc<AtomicU32>) {
        let invocations = Arc::new(AtomicU32::new(0));
        let ticks = Arc::new(AtomicU32::new(0));
        let handler = Arc::new(Self {
            name,
            mode,
            invocations: invocations.clone(),
            ticks: ticks.clone(),
        });
        (handler, invocations, ticks)
    }
}

#[async_trait]
impl EffectHandler for ScriptedHandler {
    fn name(&self) -> &str {
        self.name
    }

    async fn run(self: Arc<Self>) -> Result<(), AppError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            Mode::RunForever => loop {
                self.ticks.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
            },
            Mode::FailFast => Err(AppError::Unauthorized),
            Mode::Panic => panic!("scripted handler failure"),
            Mode::CompleteOk => Ok(()),
        }
    }
}

#[tokio::test]
async fn test_start_schedules_all_handlers_and_returns() {
    let (alpha, alpha_invocations, _) = ScriptedHandler::new("alpha", Mode::RunForever);
    let (beta, beta_invocations, _) = ScriptedHandler::new("beta", Mode::RunForever);

    let root = EffectRoot::new(vec![alpha as Arc<dyn EffectHandler>, beta]);
    assert_eq!(root.handler_count(), 2);

    // start() only schedules; it must not wait for either handler
    let handle = root.start();
    assert_eq!(handle.names(), vec!["alpha", "beta"]);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(handle.active_count(), 2);
    assert_eq!(alpha_invocations.load(Ordering::SeqCst), 1);
    assert_eq!(beta_invocations.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failing_handler_does_not_stop_sibling() {
    let (flaky, _, _) = ScriptedHandler::new("flaky", Mode::FailFast);
    let (steady, _, steady_ticks) = ScriptedHandler::new("steady", Mode::RunForever);

    let handle = EffectRoot::new(vec![flaky as Arc<dyn EffectHandler>, steady]).start();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!handle.is_running("flaky"));
    assert!(handle.is_running("steady"));
    assert_eq!(handle.active_count(), 1);

    // The sibling keeps making progress after the failure
    let before = steady_ticks.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(steady_ticks.load(Ordering::SeqCst) > before);
}

#[tokio::test]
async fn test_panicking_handler_does_not_stop_sibling() {
    let (bomb, _, _) = ScriptedHandler::new("bomb", Mode::Panic);
    let (steady, _, steady_ticks) = ScriptedHandler::new("steady", Mode::RunForever);

    let handle = EffectRoot::new(vec![bomb as Arc<dyn EffectHandler>, steady]).start();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!handle.is_running("bomb"));
    assert!(handle.is_running("steady"));

    let before = steady_ticks.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(steady_ticks.load(Ordering::SeqCst) > before);
}

#[tokio::test]
async fn test_handlers_invoked_exactly_once() {
    let (one, one_invocations, _) = ScriptedHandler::new("one", Mode::CompleteOk);
    let (two, two_invocations, _) = ScriptedHandler::new("two", Mode::CompleteOk);

    let handle = EffectRoot::new(vec![one as Arc<dyn EffectHandler>, two]).start();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(one_invocations.load(Ordering::SeqCst), 1);
    assert_eq!(two_invocations.load(Ordering::SeqCst), 1);
    assert_eq!(handle.active_count(), 0);
}

#[tokio::test]
async fn test_wait_returns_once_all_handlers_terminate() {
    let (done, _, _) = ScriptedHandler::new("done", Mode::CompleteOk);
    let (failed, _, _) = ScriptedHandler::new("failed", Mode::FailFast);
    let (bomb, _, _) = ScriptedHandler::new("bomb", Mode::Panic);

    let handle = EffectRoot::new(vec![done as Arc<dyn EffectHandler>, failed, bomb]).start();

    let result = tokio::time::timeout(Duration::from_secs(1), handle.wait()).await;
    tokio_test::assert_ok!(result, "wait() returns once every handler has terminated");
}
