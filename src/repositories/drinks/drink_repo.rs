//! # 음료 리포지토리
//!
//! 음료 저장소의 공통 인터페이스와 인메모리 구현입니다.
//! `MONGODB_URI`가 설정되지 않은 개발 환경과 테스트에서는 인메모리 구현을 사용합니다.
//!
//! ## 불변 조건
//!
//! - ID는 1부터 시작하는 증가 정수이며 재사용되지 않습니다 (`reset` 제외).
//! - 제목(title)은 저장소 전체에서 유일합니다.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use log::debug;

use crate::domain::entities::drinks::{Drink, NewDrink};
use crate::errors::{AppError, AppResult};

/// 음료 데이터 액세스 인터페이스
#[async_trait]
pub trait DrinkRepository: Send + Sync {
    /// 모든 음료를 ID 순으로 반환합니다.
    async fn list(&self) -> AppResult<Vec<Drink>>;

    async fn find(&self, id: i64) -> AppResult<Option<Drink>>;

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Drink>>;

    /// 새 음료를 저장하고 다음 ID를 할당합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 같은 제목의 음료가 이미 있는 경우
    async fn insert(&self, drink: NewDrink) -> AppResult<Drink>;

    /// 기존 음료를 통째로 교체합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID가 없는 경우
    /// * `AppError::BadRequest` - 다른 음료와 제목이 겹치는 경우
    async fn update(&self, drink: Drink) -> AppResult<Drink>;

    /// 음료를 삭제합니다. 삭제되었으면 `true`.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// !! 모든 음료를 삭제하고 기본 음료(water)를 다시 넣습니다.
    async fn reset(&self) -> AppResult<Drink>;
}

#[derive(Default)]
struct DrinkTable {
    drinks: BTreeMap<i64, Drink>,
    last_id: i64,
}

impl DrinkTable {
    fn title_taken(&self, title: &str, except: Option<i64>) -> bool {
        self.drinks
            .values()
            .any(|drink| drink.title == title && Some(drink.id) != except)
    }

    fn insert(&mut self, new_drink: NewDrink) -> AppResult<Drink> {
        if self.title_taken(&new_drink.title, None) {
            return Err(AppError::BadRequest(format!(
                "drink title already exists: {}",
                new_drink.title
            )));
        }

        self.last_id += 1;
        let drink = Drink::from_new(self.last_id, new_drink);
        self.drinks.insert(drink.id, drink.clone());

        Ok(drink)
    }
}

/// 프로세스 메모리에 음료를 보관하는 리포지토리
#[derive(Default)]
pub struct InMemoryDrinkRepository {
    table: RwLock<DrinkTable>,
}

impl InMemoryDrinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, DrinkTable>> {
        self.table
            .read()
            .map_err(|_| AppError::InternalError("drink table lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, DrinkTable>> {
        self.table
            .write()
            .map_err(|_| AppError::InternalError("drink table lock poisoned".to_string()))
    }
}

#[async_trait]
impl DrinkRepository for InMemoryDrinkRepository {
    async fn list(&self) -> AppResult<Vec<Drink>> {
        Ok(self.read()?.drinks.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> AppResult<Option<Drink>> {
        Ok(self.read()?.drinks.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Drink>> {
        Ok(self
            .read()?
            .drinks
            .values()
            .find(|drink| drink.title == title)
            .cloned())
    }

    async fn insert(&self, drink: NewDrink) -> AppResult<Drink> {
        let created = self.write()?.insert(drink)?;
        debug!("음료 생성: id={} title={}", created.id, created.title);
        Ok(created)
    }

    async fn update(&self, drink: Drink) -> AppResult<Drink> {
        let mut table = self.write()?;

        if !table.drinks.contains_key(&drink.id) {
            return Err(AppError::NotFound(format!("drink {}", drink.id)));
        }
        if table.title_taken(&drink.title, Some(drink.id)) {
            return Err(AppError::BadRequest(format!(
                "drink title already exists: {}",
                drink.title
            )));
        }

        table.drinks.insert(drink.id, drink.clone());
        Ok(drink)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.write()?.drinks.remove(&id).is_some())
    }

    async fn reset(&self) -> AppResult<Drink> {
        let mut table = self.write()?;
        *table = DrinkTable::default();
        table.insert(NewDrink::water())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::drinks::Ingredient;

    fn new_drink(title: &str) -> NewDrink {
        NewDrink {
            title: title.to_string(),
            recipe: vec![Ingredient {
                name: "espresso".to_string(),
                color: "brown".to_string(),
                parts: 1,
            }],
        }
    }

    #[actix_web::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryDrinkRepository::new();

        let first = repo.insert(new_drink("espresso")).await.unwrap();
        let second = repo.insert(new_drink("ristretto")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.list().await.unwrap(), vec![first, second]);
    }

    #[actix_web::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryDrinkRepository::new();

        let first = repo.insert(new_drink("espresso")).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());
        assert!(!repo.delete(first.id).await.unwrap());

        let next = repo.insert(new_drink("ristretto")).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[actix_web::test]
    async fn test_duplicate_title_rejected() {
        let repo = InMemoryDrinkRepository::new();
        repo.insert(new_drink("espresso")).await.unwrap();

        match repo.insert(new_drink("espresso")).await {
            Err(AppError::BadRequest(_)) => {}
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_update_checks_existence_and_title() {
        let repo = InMemoryDrinkRepository::new();
        let espresso = repo.insert(new_drink("espresso")).await.unwrap();
        repo.insert(new_drink("ristretto")).await.unwrap();

        let renamed = Drink { title: "ristretto".to_string(), ..espresso.clone() };
        assert!(matches!(repo.update(renamed).await, Err(AppError::BadRequest(_))));

        let missing = Drink { id: 42, ..espresso.clone() };
        assert!(matches!(repo.update(missing).await, Err(AppError::NotFound(_))));

        let same_title = Drink { recipe: vec![], ..espresso };
        assert!(repo.update(same_title).await.is_ok());
    }

    #[actix_web::test]
    async fn test_find_by_title() {
        let repo = InMemoryDrinkRepository::new();
        let espresso = repo.insert(new_drink("espresso")).await.unwrap();

        assert_eq!(repo.find_by_title("espresso").await.unwrap(), Some(espresso));
        assert_eq!(repo.find_by_title("mocha").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_reset_seeds_water() {
        let repo = InMemoryDrinkRepository::new();
        repo.insert(new_drink("espresso")).await.unwrap();
        repo.insert(new_drink("ristretto")).await.unwrap();

        let water = repo.reset().await.unwrap();

        assert_eq!(water.id, 1);
        assert_eq!(water.title, "water");
        assert_eq!(repo.list().await.unwrap(), vec![water]);
    }
}
