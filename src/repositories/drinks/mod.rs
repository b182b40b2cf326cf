//! 음료 데이터 액세스 계층
//!
//! [`DrinkRepository`] trait 뒤에 두 가지 저장소를 제공합니다.
//!
//! - [`InMemoryDrinkRepository`] - 프로세스 메모리 (개발, 테스트)
//! - [`MongoDrinkRepository`] - MongoDB `drinks` 컬렉션
//!
//! # Examples
//!
//! ```rust,ignore
//! let repository: Arc<dyn DrinkRepository> = Arc::new(InMemoryDrinkRepository::new());
//! repository.reset().await?;
//! let drinks = repository.list().await?;
//! ```

pub mod drink_repo;
pub mod mongo_drink_repo;

pub use drink_repo::*;
pub use mongo_drink_repo::*;
