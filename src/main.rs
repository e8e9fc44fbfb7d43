use dotenv::dotenv;
use std::env;

use myplaces::catalog::Catalog;
use myplaces::db::CatalogPool;
use myplaces::server::serve;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let db_uri = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://myplaces.db".into());

    let CatalogPool(pool) = CatalogPool::new(&db_uri, 5).await.unwrap();

    let catalog = Catalog::new(pool).await.unwrap();

    serve(catalog).await;
}
