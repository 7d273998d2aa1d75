mod backend;
mod config;
mod kv;
mod notify;
mod stores;
mod system;

pub use backend::{
    Backend, IProfileApi, IStudyApi, ITaskApi, InMemoryProfileApi, InMemoryStudyApi,
    InMemoryTaskApi,
};
pub use config::Config;
pub use kv::{FileKvStore, IKvStore, InMemoryKvStore};
pub use notify::{
    BroadcastInAppNotifier, IInAppNotifier, ISystemNotifier, NoopSystemNotifier, Notice, Notifiers,
    NotificationPermission, RecordingInAppNotifier, RecordingSystemNotifier, SystemNotification,
    WebhookNotifier,
};
pub use stores::Stores;
pub use system::{ISys, RealSys};

#[derive(Clone)]
pub struct TaskZenContext {
    pub backend: Backend,
    pub stores: Stores,
    pub notifiers: Notifiers,
    pub config: Config,
    pub sys: std::sync::Arc<dyn ISys>,
}

struct ContextParams {
    backend: Backend,
    stores: Stores,
    notifiers: Notifiers,
    config: Config,
}

impl TaskZenContext {
    fn create(params: ContextParams) -> Self {
        Self {
            backend: params.backend,
            stores: params.stores,
            notifiers: params.notifiers,
            config: params.config,
            sys: std::sync::Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> TaskZenContext {
    let config = Config::new();
    let backend = Backend::create_http(&config.backend_url, config.api_key.clone());
    let stores = Stores::create_file(&config.session_file, &config.settings_file);
    let notifiers = match (&config.webhook_url, &config.webhook_key) {
        (Some(url), Some(key)) => Notifiers::create_webhook(url.clone(), key.clone()),
        _ => Notifiers::create_in_app_only(),
    };
    TaskZenContext::create(ContextParams {
        backend,
        stores,
        notifiers,
        config,
    })
}

/// Context backed entirely by in-memory implementations. Used by tests
/// and local runs without a backend.
pub fn setup_context_inmemory() -> TaskZenContext {
    TaskZenContext::create(ContextParams {
        backend: Backend::create_inmemory(),
        stores: Stores::create_inmemory(),
        notifiers: Notifiers::create_inmemory(),
        config: Config::new(),
    })
}
