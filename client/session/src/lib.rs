pub mod app_state;
pub mod drawer;
pub mod error;
pub mod stake_requirements;
pub mod user_store;

pub use app_state::AppGlobalState;
pub use drawer::{DrawerContext, DrawerParams, DrawerProvider};
pub use error::SessionError;
pub use stake_requirements::StakeRequirementForm;
pub use user_store::UserStore;
