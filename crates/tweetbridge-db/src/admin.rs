//! Admin operations against the identity provider.

use tweetbridge_core::AppError;

use crate::client::SupabaseClient;

/// User administration via the provider's admin API. Requires the
/// service-role client.
#[derive(Clone)]
pub struct UserAdmin {
    admin: SupabaseClient,
}

impl UserAdmin {
    pub fn new(admin: SupabaseClient) -> Self {
        Self { admin }
    }

    #[tracing::instrument(skip(self), fields(user_id = %user_id))]
    pub async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        self.admin.admin_delete_user(user_id).await?;
        tracing::info!("User deleted");
        Ok(())
    }
}
