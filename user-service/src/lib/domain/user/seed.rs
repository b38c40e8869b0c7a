use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::user::errors::UserError;

/// Register the bootstrap accounts when the store holds no accounts yet.
///
/// Accounts are created in order, so the first entry receives the lowest
/// identifier. Returns the number of accounts created; any failure aborts
/// seeding.
pub async fn seed_accounts<S>(
    service: &S,
    accounts: Vec<CreateUserCommand>,
) -> Result<usize, UserError>
where
    S: UserServicePort + ?Sized,
{
    if accounts.is_empty() {
        return Ok(0);
    }

    match service.list_users().await {
        Ok(existing) if !existing.is_empty() => {
            tracing::info!(
                existing = existing.len(),
                "Store already populated, skipping seed"
            );
            return Ok(0);
        }
        Ok(_) | Err(UserError::EmptyCollection) => {}
        Err(e) => return Err(e),
    }

    let total = accounts.len();
    for command in accounts {
        let user = service.create_user(command).await?;
        tracing::info!(user_id = %user.id, username = %user.username, role = %user.role, "Seeded account");
    }

    Ok(total)
}
