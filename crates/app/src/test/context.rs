//! Test context for repository-level integration tests.

use testresult::TestResult;

use crate::{
    database::Db,
    domain::{
        carts::{DefaultCartsService, PgCartsRepository},
        products::{
            PgProductsRepository, ProductsRepository,
            models::{NewProduct, Product, ProductUuid},
        },
        users::{
            Email, PgUsersRepository, UsersRepository,
            models::{NewUser, User},
        },
    },
};

use super::db::TestDb;

pub(crate) struct TestContext {
    _db: TestDb,
    pub users: PgUsersRepository,
    pub products: PgProductsRepository,
    pub carts: PgCartsRepository,
    pub service: DefaultCartsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            users: PgUsersRepository::new(db.clone()),
            products: PgProductsRepository::new(db.clone()),
            carts: PgCartsRepository::new(db.clone()),
            service: DefaultCartsService::postgres(db),
            _db: test_db,
        }
    }

    pub async fn create_user(
        &self,
        email: &str,
        wallet_money: u64,
        address: &str,
    ) -> TestResult<User> {
        let mut user = NewUser::new(Email::parse(email)?, "Shopper");

        user.wallet_money = wallet_money;
        user.address = address.to_string();

        Ok(self.users.create_user(user).await?)
    }

    pub async fn create_product(&self, name: &str, cost: u64) -> TestResult<Product> {
        Ok(self
            .products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                name: name.to_string(),
                cost,
            })
            .await?)
    }
}
