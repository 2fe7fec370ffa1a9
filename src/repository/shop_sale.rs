use diesel::prelude::*;

use crate::{
    domain::shop_sale::{NewShopSale as DomainNewShopSale, ShopSale as DomainShopSale},
    models::shop_sale::{NewShopSale as DbNewShopSale, ShopSale as DbShopSale},
    repository::{DieselRepository, SaleListQuery, ShopSaleReader, ShopSaleWriter,
        errors::RepositoryResult},
};

impl ShopSaleReader for DieselRepository {
    fn list_sales(&self, query: SaleListQuery) -> RepositoryResult<Vec<DomainShopSale>> {
        use crate::schema::shop_sales;

        let mut conn = self.conn()?;

        let mut items = shop_sales::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(shopkeeper_id) = query.shopkeeper_id {
            items = items.filter(shop_sales::shopkeeper_id.eq(shopkeeper_id));
        }

        if let Some(since) = query.since {
            items = items.filter(shop_sales::sold_at.ge(since));
        }

        let rows = items
            .order(shop_sales::sold_at.desc())
            .load::<DbShopSale>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl ShopSaleWriter for DieselRepository {
    fn create_sale(&self, new_sale: &DomainNewShopSale) -> RepositoryResult<DomainShopSale> {
        use crate::schema::shop_sales;

        let mut conn = self.conn()?;
        let db_new = DbNewShopSale::from(new_sale);

        let created = diesel::insert_into(shop_sales::table)
            .values(&db_new)
            .get_result::<DbShopSale>(&mut conn)?;

        Ok(created.into())
    }
}
