use crate::domain::order::OrdersSummary;
use crate::dto::account::{MyListingsPageData, OrderRow, OrdersPageData};
use crate::dto::explorer::ListingCard;
use crate::models::session::Session;
use crate::repository::AccountReader;
use crate::services::{ServiceError, ServiceResult};

/// Loads the orders placed from the signed-in account.
pub async fn load_my_orders<R>(repo: &R, session: Option<&Session>) -> ServiceResult<OrdersPageData>
where
    R: AccountReader + ?Sized,
{
    let session = session.ok_or(ServiceError::Unauthorized)?;

    let orders = repo.list_my_orders(session).await.map_err(|err| {
        log::error!("Failed to load orders: {err}");
        ServiceError::from(err)
    })?;

    let summary = OrdersSummary::from_orders(&orders);
    Ok(OrdersPageData {
        orders: orders.iter().map(OrderRow::from).collect(),
        total_spent: format!("{:.2}", summary.total_spent),
        summary,
    })
}

/// Loads the listings owned by the signed-in account.
pub async fn load_my_listings<R>(
    repo: &R,
    session: Option<&Session>,
) -> ServiceResult<MyListingsPageData>
where
    R: AccountReader + ?Sized,
{
    let session = session.ok_or(ServiceError::Unauthorized)?;

    let listings = repo.list_my_listings(session).await.map_err(|err| {
        log::error!("Failed to load own listings: {err}");
        ServiceError::from(err)
    })?;

    Ok(MyListingsPageData {
        listings: listings.iter().map(ListingCard::from).collect(),
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::order::Order;
    use crate::repository::mock::MockRepository;

    #[tokio::test]
    async fn anonymous_caller_is_unauthorized() {
        let mut repo = MockRepository::new();
        repo.expect_list_my_orders().times(0);
        repo.expect_list_my_listings().times(0);

        assert!(matches!(
            load_my_orders(&repo, None).await,
            Err(ServiceError::Unauthorized)
        ));
        assert!(matches!(
            load_my_listings(&repo, None).await,
            Err(ServiceError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn orders_are_summarized() {
        let mut repo = MockRepository::new();
        repo.expect_list_my_orders()
            .withf(|session| session.token() == "token-1")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    Order {
                        id: "order-0000000001".to_string(),
                        total: Some(20.0),
                        ..Order::default()
                    },
                    Order {
                        id: "order-0000000002".to_string(),
                        total: Some(2.5),
                        status: Some("completed".to_string()),
                        ..Order::default()
                    },
                ])
            });

        let session = Session::start("token-1").expect("valid token");
        let data = load_my_orders(&repo, Some(&session))
            .await
            .expect("orders load");

        assert_eq!(data.orders.len(), 2);
        assert_eq!(data.orders[0].short_id, "00000001");
        assert_eq!(data.summary.pending, 1);
        assert_eq!(data.total_spent, "22.50");
    }
}
