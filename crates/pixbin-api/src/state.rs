//! Application state shared across handlers.

use pixbin_core::Config;
use pixbin_db::FileRepository;
use pixbin_storage::LocalStore;

/// Everything the handlers need, behind one `Arc` in the router state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: LocalStore,
    pub repository: FileRepository,
}
