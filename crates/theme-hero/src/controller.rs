//! Fetch-select lifecycle for a single theme key.
//!
//! Every call to [`ThemeFetchController::start`] opens a new fetch cycle and
//! bumps a generation counter. A cycle's result is applied only if no newer
//! cycle has started in the meantime, so a slow response for an old key can
//! never overwrite the state of the current one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use theme_data::ThemeSource;

use crate::state::{resolve, ViewState};

/// Ticket for one started fetch cycle.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchCycle {
    generation: u64,
    theme_key: String,
}

impl FetchCycle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn theme_key(&self) -> &str {
        &self.theme_key
    }
}

/// Outcome of running a fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// The cycle was current; the state now holds this value.
    Applied(ViewState),
    /// A newer cycle started first; the result was dropped.
    Stale,
}

impl Settled {
    pub fn applied(self) -> Option<ViewState> {
        match self {
            Self::Applied(state) => Some(state),
            Self::Stale => None,
        }
    }
}

#[derive(Debug, Default)]
struct Cycles {
    generation: u64,
    view: ViewState,
}

/// Owns the view state for one mounted hero section.
#[derive(Debug)]
pub struct ThemeFetchController<S> {
    source: S,
    cycles: Arc<Mutex<Cycles>>,
}

impl<S: Clone> Clone for ThemeFetchController<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            cycles: Arc::clone(&self.cycles),
        }
    }
}

impl<S: ThemeSource> ThemeFetchController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cycles: Arc::new(Mutex::new(Cycles::default())),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.lock().view.clone()
    }

    /// Whether `cycle` is still the latest one started.
    pub fn is_current(&self, cycle: &FetchCycle) -> bool {
        self.lock().generation == cycle.generation
    }

    /// Open a new cycle for `theme_key` and reset the state to loading.
    pub fn start(&self, theme_key: &str) -> FetchCycle {
        let mut cycles = self.lock();
        cycles.generation += 1;
        cycles.view = ViewState::Loading;

        tracing::debug!(theme_key, generation = cycles.generation, "theme fetch started");
        FetchCycle {
            generation: cycles.generation,
            theme_key: theme_key.to_string(),
        }
    }

    /// Fetch the theme list and settle `cycle`.
    pub async fn run(&self, cycle: FetchCycle) -> Settled {
        let result = self.source.fetch_themes().await;
        if let Err(err) = &result {
            tracing::warn!(
                theme_key = cycle.theme_key.as_str(),
                generation = cycle.generation,
                error = %err,
                "theme fetch failed"
            );
        }
        let next = resolve(result, &cycle.theme_key);

        let mut cycles = self.lock();
        if cycles.generation != cycle.generation {
            tracing::debug!(
                theme_key = cycle.theme_key.as_str(),
                generation = cycle.generation,
                current = cycles.generation,
                "discarding stale theme response"
            );
            return Settled::Stale;
        }

        tracing::debug!(
            theme_key = cycle.theme_key.as_str(),
            generation = cycle.generation,
            ready = next.record().is_some(),
            "theme fetch settled"
        );
        cycles.view = next.clone();
        Settled::Applied(next)
    }

    /// Start and run a cycle for `theme_key`.
    pub async fn load(&self, theme_key: &str) -> Settled {
        let cycle = self.start(theme_key);
        self.run(cycle).await
    }

    /// Load `theme_key` and return whatever state is current afterwards.
    ///
    /// If a newer cycle superseded this one, the result is the newer
    /// cycle's state rather than this cycle's outcome.
    pub async fn load_latest(&self, theme_key: &str) -> ViewState {
        self.load(theme_key).await.applied().unwrap_or_else(|| self.state())
    }

    fn lock(&self) -> MutexGuard<'_, Cycles> {
        self.cycles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FailureReason;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use theme_data::{FetchError, Response, StaticThemeSource, ThemeCatalog, ThemeRecord};

    fn dark() -> ThemeRecord {
        ThemeRecord::new("dark", "#000", "Mode", "Dark Theme").with_description("Easy on eyes")
    }

    fn light() -> ThemeRecord {
        ThemeRecord::new("light", "#fafafa", "Mode", "Light Theme")
    }

    struct FailingSource;

    #[async_trait]
    impl ThemeSource for FailingSource {
        async fn fetch_themes(&self) -> Result<Vec<ThemeRecord>, FetchError> {
            Err(FetchError::HttpError {
                status: 500,
                message: "boom".to_string(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct CountingSource {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ThemeSource for CountingSource {
        async fn fetch_themes(&self) -> Result<Vec<ThemeRecord>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![dark()])
        }
    }

    type Gate = oneshot::Sender<Result<Vec<ThemeRecord>, FetchError>>;

    /// Each fetch waits on the next gate, in call order.
    #[derive(Clone, Default)]
    struct GatedSource {
        pending: Arc<Mutex<VecDeque<oneshot::Receiver<Result<Vec<ThemeRecord>, FetchError>>>>>,
    }

    impl GatedSource {
        fn gate(&self) -> Gate {
            let (tx, rx) = oneshot::channel();
            self.pending.lock().unwrap().push_back(rx);
            tx
        }
    }

    #[async_trait]
    impl ThemeSource for GatedSource {
        async fn fetch_themes(&self) -> Result<Vec<ThemeRecord>, FetchError> {
            let rx = self.pending.lock().unwrap().pop_front();
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchError::RequestError("gate dropped".to_string()))),
                None => Err(FetchError::RequestError("no gate".to_string())),
            }
        }
    }

    // === Basic transitions ===

    #[test]
    fn test_initial_state_is_loading() {
        let controller = ThemeFetchController::new(StaticThemeSource::default());
        assert_eq!(controller.state(), ViewState::Loading);
    }

    #[test]
    fn test_load_found() {
        let controller = ThemeFetchController::new(StaticThemeSource::new(vec![dark()]));
        let settled = block_on(controller.load("dark"));

        assert_eq!(settled, Settled::Applied(ViewState::Ready(dark())));
        assert_eq!(controller.state().record().map(|r| r.title.as_str()), Some("Dark Theme"));
    }

    #[test]
    fn test_load_first_match_wins() {
        let shadow = ThemeRecord::new("dark", "#111", "Other", "Shadowed");
        let controller = ThemeFetchController::new(StaticThemeSource::new(vec![light(), dark(), shadow]));
        block_on(controller.load("dark"));
        assert_eq!(controller.state(), ViewState::Ready(dark()));
    }

    #[test]
    fn test_load_not_found() {
        let controller = ThemeFetchController::new(StaticThemeSource::new(vec![dark()]));
        block_on(controller.load("light"));
        assert_eq!(controller.state(), ViewState::Failed(FailureReason::NotFound));
    }

    #[test]
    fn test_load_fetch_error() {
        let controller = ThemeFetchController::new(FailingSource);
        block_on(controller.load("dark"));
        assert_eq!(controller.state(), ViewState::Failed(FailureReason::FetchError));
    }

    #[test]
    fn test_settled_state_is_never_loading() {
        let controller = ThemeFetchController::new(StaticThemeSource::new(vec![dark()]));
        for key in ["dark", "missing", "dark"] {
            block_on(controller.load(key));
            let state = controller.state();
            assert!(state.is_terminal());
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn test_load_is_idempotent() {
        let controller = ThemeFetchController::new(StaticThemeSource::new(vec![dark(), light()]));
        let first = block_on(controller.load("light"));
        let second = block_on(controller.load("light"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_load_hits_the_source() {
        let source = CountingSource::default();
        let controller = ThemeFetchController::new(source.clone());
        block_on(controller.load("dark"));
        block_on(controller.load("dark"));
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    // === Cycle bookkeeping ===

    #[test]
    fn test_start_resets_to_loading() {
        let controller = ThemeFetchController::new(StaticThemeSource::new(vec![dark()]));
        block_on(controller.load("dark"));

        let cycle = controller.start("light");
        assert_eq!(controller.state(), ViewState::Loading);
        assert_eq!(cycle.theme_key(), "light");
        assert_eq!(cycle.generation(), 2);
    }

    #[test]
    fn test_is_current() {
        let controller = ThemeFetchController::new(StaticThemeSource::default());
        let old = controller.start("dark");
        assert!(controller.is_current(&old));
        let new = controller.start("light");
        assert!(!controller.is_current(&old));
        assert!(controller.is_current(&new));
    }

    #[test]
    fn test_clones_share_state() {
        let controller = ThemeFetchController::new(StaticThemeSource::new(vec![dark()]));
        let other = controller.clone();
        block_on(other.load("dark"));
        assert_eq!(controller.state(), ViewState::Ready(dark()));
    }

    // === Stale responses ===

    #[test]
    fn test_stale_success_is_discarded() {
        let source = GatedSource::default();
        let dark_gate = source.gate();
        let light_gate = source.gate();
        let controller = ThemeFetchController::new(source);

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let outcomes: Rc<RefCell<Vec<(&'static str, Settled)>>> = Rc::default();

        let dark_cycle = controller.start("dark");
        {
            let controller = controller.clone();
            let outcomes = Rc::clone(&outcomes);
            spawner
                .spawn_local(async move {
                    let settled = controller.run(dark_cycle).await;
                    outcomes.borrow_mut().push(("dark", settled));
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert_eq!(controller.state(), ViewState::Loading);

        // Key changes while "dark" is still in flight.
        let light_cycle = controller.start("light");
        {
            let controller = controller.clone();
            let outcomes = Rc::clone(&outcomes);
            spawner
                .spawn_local(async move {
                    let settled = controller.run(light_cycle).await;
                    outcomes.borrow_mut().push(("light", settled));
                })
                .unwrap();
        }
        pool.run_until_stalled();

        light_gate.send(Ok(vec![dark(), light()])).unwrap();
        pool.run_until_stalled();
        assert_eq!(controller.state(), ViewState::Ready(light()));

        dark_gate.send(Ok(vec![dark(), light()])).unwrap();
        pool.run_until_stalled();

        assert_eq!(controller.state(), ViewState::Ready(light()));
        let outcomes = outcomes.borrow();
        assert_eq!(outcomes[0], ("light", Settled::Applied(ViewState::Ready(light()))));
        assert_eq!(outcomes[1], ("dark", Settled::Stale));
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let source = GatedSource::default();
        let old_gate = source.gate();
        let new_gate = source.gate();
        let controller = ThemeFetchController::new(source);
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let old = controller.start("dark");
        let c = controller.clone();
        spawner.spawn_local(async move { c.run(old).await; }).unwrap();
        pool.run_until_stalled();

        let new = controller.start("dark");
        let c = controller.clone();
        spawner.spawn_local(async move { c.run(new).await; }).unwrap();
        pool.run_until_stalled();

        new_gate.send(Ok(vec![dark()])).unwrap();
        old_gate
            .send(Err(FetchError::RequestError("late".to_string())))
            .unwrap();
        pool.run();

        assert_eq!(controller.state(), ViewState::Ready(dark()));
    }

    #[test]
    fn test_load_latest_superseded_returns_newer_state() {
        let source = GatedSource::default();
        let dark_gate = source.gate();
        let light_gate = source.gate();
        let controller = ThemeFetchController::new(source);
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let seen: Rc<RefCell<Vec<(&'static str, ViewState)>>> = Rc::default();

        for key in ["dark", "light"] {
            let controller = controller.clone();
            let seen = Rc::clone(&seen);
            spawner
                .spawn_local(async move {
                    let state = controller.load_latest(key).await;
                    seen.borrow_mut().push((key, state));
                })
                .unwrap();
            pool.run_until_stalled();
        }

        light_gate.send(Ok(vec![dark(), light()])).unwrap();
        pool.run_until_stalled();
        dark_gate.send(Ok(vec![dark(), light()])).unwrap();
        pool.run_until_stalled();

        let seen = seen.borrow();
        assert_eq!(seen[0], ("light", ViewState::Ready(light())));
        // The superseded "dark" load reports the current state, not its own.
        assert_eq!(seen[1], ("dark", ViewState::Ready(light())));
        assert_eq!(controller.state(), ViewState::Ready(light()));
    }

    #[test]
    fn test_load_latest_key_change_starts_new_cycle() {
        let source = CountingSource::default();
        let controller = ThemeFetchController::new(source.clone());
        assert_eq!(block_on(controller.load_latest("dark")), ViewState::Ready(dark()));
        assert_eq!(
            block_on(controller.load_latest("light")),
            ViewState::Failed(FailureReason::NotFound)
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    // === Malformed catalogs ===

    /// Decodes a fixed response body the way the HTTP source does.
    struct BodySource(&'static str);

    #[async_trait]
    impl ThemeSource for BodySource {
        async fn fetch_themes(&self) -> Result<Vec<ThemeRecord>, FetchError> {
            let response = Response::new(200, HashMap::new(), self.0.as_bytes().to_vec());
            Ok(response.error_for_status()?.json::<ThemeCatalog>()?.themes)
        }
    }

    #[test]
    fn test_malformed_catalog_is_fetch_error() {
        for body in ["{}", "[]", r#"{"data":[{"key":"dark"}]}"#, "<html></html>"] {
            let controller = ThemeFetchController::new(BodySource(body));
            let state = block_on(controller.load_latest("dark"));
            assert_eq!(state, ViewState::Failed(FailureReason::FetchError), "body: {body}");
        }
    }

    #[test]
    fn test_empty_catalog_is_not_found() {
        let controller = ThemeFetchController::new(BodySource(r#"{"themes":[]}"#));
        assert_eq!(
            block_on(controller.load_latest("dark")),
            ViewState::Failed(FailureReason::NotFound)
        );
    }

    #[test]
    fn test_settled_applied() {
        assert_eq!(Settled::Stale.applied(), None);
        assert_eq!(
            Settled::Applied(ViewState::Loading).applied(),
            Some(ViewState::Loading)
        );
    }
}
