//! Client registry helpers shared by the booking and point-of-sale flows.

use rust_decimal::Decimal;

use crate::domain::client::{Client, ClientStats, NewClient};
use crate::domain::types::normalize_phone;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::ServiceResult;

/// Resolves a client by phone, creating one on first contact. Without a
/// usable phone number there is no dedup key and no linkage is made.
///
/// Client creation and whatever record references it afterwards are two
/// independent read-modify-write steps; a failure in between leaves an
/// unlinked client, which is harmless and left as-is.
pub fn find_or_create_client<R>(
    repo: &R,
    name: &str,
    phone: &str,
    email: Option<&str>,
) -> ServiceResult<Option<Client>>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    if normalize_phone(phone).is_none() {
        return Ok(None);
    }
    if let Some(existing) = repo.find_client_by_phone(phone)? {
        return Ok(Some(existing));
    }
    let mut new_client = NewClient::new(name, phone)?;
    new_client.email = email.map(str::to_string).filter(|e| !e.trim().is_empty());
    let client = repo.create_client(&new_client)?;
    Ok(Some(client))
}

/// Aggregate figures for the admin client overview: headcount, cumulative
/// revenue, average spend and the top ten spenders.
pub fn client_stats<R>(repo: &R) -> ServiceResult<ClientStats>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.list_clients()?;
    let total = clients.len();
    let total_revenue: Decimal = clients.iter().map(|c| c.total_spent).sum();
    let avg_spent = if total == 0 {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(total as u64)
    };
    let mut top_clients = clients;
    top_clients.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    top_clients.truncate(10);

    Ok(ClientStats {
        total,
        total_revenue,
        avg_spent,
        top_clients,
    })
}
