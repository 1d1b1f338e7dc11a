pub mod catalog;
pub mod comment;
pub mod recipe;

use crate::domain::{Page, PageRequest};
use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, Select};

/// Runs `select` as one page of a listing.
///
/// The total is always counted; rows are only fetched when the requested page
/// starts inside the result set, so out-of-range pages come back empty.
pub(crate) async fn fetch_page<E>(
    conn: &DatabaseConnection,
    select: Select<E>,
    request: PageRequest,
) -> Result<Page<E::Model>>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Sized + Send + Sync + 'static,
{
    let paginator = select.paginate(conn, request.per_page());
    let total = paginator.num_items().await?;

    let in_range = request.offset().is_some_and(|offset| offset < total);
    let items = if in_range {
        paginator.fetch_page(request.page_index()).await?
    } else {
        Vec::new()
    };

    Ok(Page::new(items, total, request))
}
