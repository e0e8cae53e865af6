//! Application state shared by all handlers.

use std::sync::Arc;

use tweetbridge_core::Config;
use tweetbridge_db::{CredentialCache, PostRepository, UserAdmin};
use tweetbridge_storage::ObjectStorage;

/// Everything a request handler needs, injected via `State<Arc<AppState>>`.
/// The credential cache is the only mutable piece; it guards itself.
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn ObjectStorage>,
    pub credentials: Arc<CredentialCache>,
    pub posts: PostRepository,
    pub users: UserAdmin,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
